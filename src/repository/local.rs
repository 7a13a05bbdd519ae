use super::{Listener, Listeners, RecordRepository, Subscription};
use crate::environment::BackendKind;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use crate::storage::LocalStorage;

/// Local storage key of the fallback record list.
pub const RECORDS_KEY: &str = "demo-attendance-records";

/// Demo-mode backend: submitted records kept as one list in local storage.
///
/// Nothing else writes that list, so a subscription is filled once at
/// registration; submits from this process are pushed to live listeners.
pub struct LocalRecordRepository {
    storage: LocalStorage,
    listeners: Listeners,
}

impl LocalRecordRepository {
    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage,
            listeners: Listeners::default(),
        }
    }

    /// Stored list; a malformed blob is logged and treated as empty.
    fn load(&self) -> AppResult<Vec<AttendanceRecord>> {
        let Some(raw) = self.storage.get_item(RECORDS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!("Failed to load demo records: {e}");
                Ok(Vec::new())
            }
        }
    }
}

impl RecordRepository for LocalRecordRepository {
    fn backend(&self) -> BackendKind {
        BackendKind::Local
    }

    fn submit(&self, record: &AttendanceRecord) -> AppResult<()> {
        let mut records = self.load()?;

        match records.iter().position(|r| r.id == record.id) {
            Some(i) => records[i] = record.clone(),
            None => records.push(record.clone()),
        }

        self.storage
            .set_item(RECORDS_KEY, &serde_json::to_string(&records)?)?;

        if !self.listeners.is_empty() {
            self.listeners.notify(&records);
        }
        Ok(())
    }

    fn subscribe(&self, listener: Listener) -> AppResult<Subscription> {
        let records = self.load()?;
        let sub = self.listeners.add(listener);
        self.listeners.deliver_to(&sub, &records);
        Ok(sub)
    }

    fn snapshot(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.load()
    }
}
