//! Wiring of one application session: repository, identity, form and the
//! live record cache.

use super::clock::Clock;
use super::form::FormController;
use crate::environment::{Backend, Environment};
use crate::errors::AppResult;
use crate::identity::{IdentityProvider, IdentityResolver, SqliteIdentityProvider, UserIdentity};
use crate::models::AttendanceRecord;
use crate::repository::{RecordRepository, Subscription, open_repository};
use crate::storage::DraftStore;
use std::cell::RefCell;
use std::rc::Rc;

pub struct Session<C: Clock> {
    pub form: FormController<C>,
    pub identity: IdentityResolver,
    repository: Box<dyn RecordRepository>,
    records: Rc<RefCell<Vec<AttendanceRecord>>>,
    subscription: Option<Subscription>,
    /// Identity reported by the resolver, not yet handed to the form.
    pending_identity: Rc<RefCell<Option<UserIdentity>>>,
}

impl<C: Clock> Session<C> {
    pub fn open(env: &Environment, clock: C) -> AppResult<Self> {
        let pending_identity: Rc<RefCell<Option<UserIdentity>>> = Rc::new(RefCell::new(None));
        let mut identity = IdentityResolver::new();
        let slot = Rc::clone(&pending_identity);
        identity.on_change(Box::new(move |user| {
            *slot.borrow_mut() = Some(user.clone());
        }));

        let provider = match &env.backend {
            Backend::Local => None,
            Backend::Remote { database, .. } => {
                match SqliteIdentityProvider::open(database, env.storage.clone()) {
                    Ok(p) => Some(p),
                    Err(e) => {
                        log::error!("Identity service unavailable: {e}");
                        None
                    }
                }
            }
        };
        identity.resolve(
            provider.as_ref().map(|p| p as &dyn IdentityProvider),
            env.bootstrap_token.as_deref(),
        );

        // Opened after sign-in so `sync` only reports writes of others.
        let repository = open_repository(env)?;

        let mut form = FormController::new(
            DraftStore::new(env.storage.clone()),
            env.profile,
            clock,
        );
        let user = pending_identity.borrow_mut().take();
        form.set_identity(user);

        let records = Rc::new(RefCell::new(Vec::new()));
        let cache = Rc::clone(&records);
        let subscription = repository.subscribe(Box::new(move |snapshot| {
            *cache.borrow_mut() = snapshot.to_vec();
        }))?;

        Ok(Self {
            form,
            identity,
            repository,
            records,
            subscription: Some(subscription),
            pending_identity,
        })
    }

    pub fn repository(&self) -> &dyn RecordRepository {
        self.repository.as_ref()
    }

    /// Latest snapshot delivered by the subscription.
    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.records.borrow().clone()
    }

    /// Submit the current draft through the session's repository.
    pub fn submit(&mut self) -> AppResult<Option<AttendanceRecord>> {
        self.form.submit(self.repository.as_ref())
    }

    /// Identity changed mid-session (e.g. token refresh). The draft is kept.
    pub fn update_identity(&mut self, identity: UserIdentity) {
        self.identity.update(identity);
        let changed = self.pending_identity.borrow_mut().take();
        if changed.is_some() {
            self.form.set_identity(changed);
        }
    }

    /// Pick up records other processes wrote since the last look.
    pub fn sync(&self) -> AppResult<bool> {
        self.repository.sync()
    }

    /// Stop receiving snapshots.
    pub fn close(&mut self) {
        self.subscription.take();
    }
}
