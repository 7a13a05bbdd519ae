//! Record repository: "submit one record" and "observe the live set of
//! all submitted records", over two interchangeable backends.
//!
//! Subscribers always receive the **full** current set of records, never a
//! delta. Each delivery replaces whatever the subscriber held before.

pub mod local;
pub mod remote;

pub use local::{LocalRecordRepository, RECORDS_KEY};
pub use remote::DocumentRepository;

use crate::environment::{Backend, BackendKind, Environment};
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Snapshot listener.
pub type Listener = Box<dyn FnMut(&[AttendanceRecord])>;

pub trait RecordRepository {
    fn backend(&self) -> BackendKind;

    /// Upsert `record` by its natural key (whole-document write).
    fn submit(&self, record: &AttendanceRecord) -> AppResult<()>;

    /// Register `listener`; it is invoked with the full record set once the
    /// store delivers its first snapshot and again after every change.
    fn subscribe(&self, listener: Listener) -> AppResult<Subscription>;

    /// Current full record set.
    fn snapshot(&self) -> AppResult<Vec<AttendanceRecord>>;

    /// Push a fresh snapshot if another process changed the store since the
    /// last look. Returns whether a push happened. Backends only this
    /// process writes to have nothing to pick up.
    fn sync(&self) -> AppResult<bool> {
        Ok(false)
    }
}

/// Open the repository selected by the environment. Decided once at
/// startup; a session never switches backend.
pub fn open_repository(env: &Environment) -> AppResult<Box<dyn RecordRepository>> {
    match &env.backend {
        Backend::Local => Ok(Box::new(LocalRecordRepository::new(env.storage.clone()))),
        Backend::Remote { database, .. } => Ok(Box::new(DocumentRepository::open(
            database,
            &env.records_collection(),
        )?)),
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// Nesting depth of deliveries in progress; listeners are out of the
    /// registry while it is non-zero.
    delivering: u32,
    /// Subscriptions dropped during a delivery.
    removed: Vec<u64>,
}

/// Listener registry shared between a repository and its subscriptions.
#[derive(Clone, Default)]
pub(crate) struct Listeners {
    inner: Rc<RefCell<Registry>>,
}

impl Listeners {
    pub(crate) fn add(&self, listener: Listener) -> Subscription {
        let mut reg = self.inner.borrow_mut();
        reg.next_id += 1;
        let id = reg.next_id;
        reg.listeners.push((id, listener));

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Call the listeners selected by `only` (all when `None`).
    ///
    /// The registry is not borrowed while a listener runs, so a listener may
    /// drop its own subscription or register a new one from the callback.
    fn deliver(&self, only: Option<u64>, records: &[AttendanceRecord]) {
        let mut taken = {
            let mut reg = self.inner.borrow_mut();
            reg.delivering += 1;
            std::mem::take(&mut reg.listeners)
        };

        for (id, l) in taken.iter_mut() {
            if only.is_some_and(|wanted| wanted != *id) {
                continue;
            }
            if self.inner.borrow().removed.contains(id) {
                continue;
            }
            l(records);
        }

        let mut guard = self.inner.borrow_mut();
        let reg = &mut *guard;
        reg.delivering -= 1;
        taken.retain(|(id, _)| !reg.removed.contains(id));
        taken.append(&mut reg.listeners);
        reg.listeners = taken;
        if reg.delivering == 0 {
            reg.removed.clear();
        }
    }

    /// Deliver one listener its first snapshot.
    pub(crate) fn deliver_to(&self, sub: &Subscription, records: &[AttendanceRecord]) {
        self.deliver(Some(sub.id), records);
    }

    /// Push `records` to every live listener.
    pub(crate) fn notify(&self, records: &[AttendanceRecord]) {
        self.deliver(None, records);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.inner.borrow().listeners.is_empty()
    }
}

/// Handle of a registered listener. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The repository may already be gone; nothing to detach then.
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let Ok(mut reg) = registry.try_borrow_mut() else {
            log::warn!("Listener registry busy, subscription {} not removed", self.id);
            return;
        };

        if reg.delivering > 0 {
            reg.removed.push(self.id);
        }
        reg.listeners.retain(|(id, _)| *id != self.id);
    }
}
