use super::{Listener, Listeners, RecordRepository, Subscription};
use crate::db::documents::{data_version, list_documents, set_document};
use crate::db::initialize::open_store;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::environment::BackendKind;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use std::cell::Cell;
use std::path::Path;

/// Backend on the shared document store: one document per record, keyed by
/// the record's natural key, inside the app's records collection.
pub struct DocumentRepository {
    pool: DbPool,
    collection: String,
    listeners: Listeners,
    seen_version: Cell<i64>,
}

impl DocumentRepository {
    pub fn open(database: &Path, collection: &str) -> AppResult<Self> {
        let pool = open_store(database)?;
        let version = data_version(&pool.conn)?;

        Ok(Self {
            pool,
            collection: collection.to_string(),
            listeners: Listeners::default(),
            seen_version: Cell::new(version),
        })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn load(&self) -> AppResult<Vec<AttendanceRecord>> {
        let docs = list_documents(&self.pool.conn, &self.collection)?;

        let mut out = Vec::with_capacity(docs.len());
        for doc in docs {
            match serde_json::from_str::<AttendanceRecord>(&doc.body) {
                Ok(mut record) => {
                    record.id = doc.doc_id;
                    out.push(record);
                }
                Err(e) => log::warn!("Skipping unreadable document '{}': {e}", doc.doc_id),
            }
        }
        Ok(out)
    }

    fn push_snapshot(&self) -> AppResult<()> {
        if self.listeners.is_empty() {
            return Ok(());
        }
        let records = self.load()?;
        self.listeners.notify(&records);
        Ok(())
    }
}

impl RecordRepository for DocumentRepository {
    fn backend(&self) -> BackendKind {
        BackendKind::Remote
    }

    /// Writes of other connections show up in `data_version`.
    fn sync(&self) -> AppResult<bool> {
        let version = data_version(&self.pool.conn)?;
        if version == self.seen_version.get() {
            return Ok(false);
        }
        self.seen_version.set(version);
        self.push_snapshot()?;
        Ok(true)
    }

    fn submit(&self, record: &AttendanceRecord) -> AppResult<()> {
        let body = serde_json::to_string(record)?;
        set_document(&self.pool.conn, &self.collection, &record.id, &body)?;

        if let Err(e) = audit(
            &self.pool.conn,
            "submit",
            &record.id,
            &format!("Attendance submitted by {}", record.submitted_by),
        ) {
            log::warn!("Failed to write internal log: {e}");
        }

        self.push_snapshot()
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
