//! Calling records: follow-up calls with absent students, kept in local
//! storage next to the draft. They never reach the record repository.

use crate::errors::{AppError, AppResult};
use crate::models::{AbsenceReason, CallingRecord};
use crate::storage::LocalStorage;
use chrono::NaiveDate;

pub const CALLS_KEY: &str = "attendanceData_Calls";

/// Input of a new calling record.
#[derive(Debug, Clone, Default)]
pub struct NewCall {
    pub student_roll_no: String,
    pub date: Option<NaiveDate>,
    pub contact: String,
    pub reason: AbsenceReason,
    pub notes: String,
}

pub struct CallingLog {
    storage: LocalStorage,
    calls: Vec<CallingRecord>,
}

impl CallingLog {
    pub fn load(storage: LocalStorage) -> Self {
        let calls = match storage.get_item(CALLS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Failed to load calling records: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read calling records: {e}");
                Vec::new()
            }
        };

        Self { storage, calls }
    }

    pub fn list(&self) -> &[CallingRecord] {
        &self.calls
    }

    fn persist(&self) -> AppResult<()> {
        self.storage
            .set_item(CALLS_KEY, &serde_json::to_string(&self.calls)?)
    }

    /// Roll number, date and contact are required.
    pub fn add(&mut self, call: NewCall) -> AppResult<&CallingRecord> {
        let roll = call.student_roll_no.trim();
        let contact = call.contact.trim();

        let date = match call.date {
            Some(d) if !roll.is_empty() && !contact.is_empty() => d,
            _ => {
                return Err(AppError::ValidationFailed(
                    "Roll number, date and contact are required for a call record.".into(),
                ));
            }
        };

        let id = self.calls.iter().map(|c| c.id).max().unwrap_or(0).saturating_add(1);
        self.calls.push(CallingRecord {
            id,
            student_roll_no: roll.to_string(),
            date,
            contact: contact.to_string(),
            reason: call.reason,
            notes: call.notes,
        });
        self.persist()?;

        Ok(&self.calls[self.calls.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> AppResult<CallingRecord> {
        if index >= self.calls.len() {
            return Err(AppError::InvalidIndex(index + 1));
        }
        let removed = self.calls.remove(index);
        self.persist()?;
        Ok(removed)
    }
}
