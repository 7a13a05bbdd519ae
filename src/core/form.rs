//! Form controller: owns the draft, persists every edit and runs the
//! submission workflow.
//!
//! ```text
//! idle ──begin_submit──▶ submitting ──finish_submit──▶ success | error
//!   ▲                                                       │
//!   └───────────────── 3 seconds elapsed ───────────────────┘
//! ```

use super::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::identity::UserIdentity;
use crate::models::{AttendanceRecord, ClassField, Draft, Profile, StudentEntry, StudentPatch};
use crate::repository::RecordRepository;
use crate::storage::DraftStore;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Seconds the success/error feedback stays before reverting to idle.
pub const FEEDBACK_DELAY_SECS: i64 = 3;

pub fn feedback_delay() -> Duration {
    Duration::seconds(FEEDBACK_DELAY_SECS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success { since: DateTime<Utc> },
    Error { since: DateTime<Utc> },
}

impl SubmitStatus {
    /// Status as seen at `now`: feedback states expire after the feedback delay.
    pub fn at(self, now: DateTime<Utc>) -> Self {
        match self {
            SubmitStatus::Success { since } | SubmitStatus::Error { since }
                if now - since >= feedback_delay() =>
            {
                SubmitStatus::Idle
            }
            other => other,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmitStatus::Idle)
    }
}

pub struct FormController<C: Clock> {
    draft: Draft,
    store: DraftStore,
    profile: Profile,
    identity: Option<UserIdentity>,
    status: SubmitStatus,
    clock: C,
}

impl<C: Clock> FormController<C> {
    /// Start from the stored draft, or from a fresh template dated today.
    pub fn new(store: DraftStore, profile: Profile, clock: C) -> Self {
        let draft = store
            .load()
            .unwrap_or_else(|| Draft::fresh(clock.today()));

        Self {
            draft,
            store,
            profile,
            identity: None,
            status: SubmitStatus::Idle,
            clock,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    /// Identity may change mid-session; the draft is left alone.
    pub fn set_identity(&mut self, identity: Option<UserIdentity>) {
        self.identity = identity;
    }

    pub fn status(&self) -> SubmitStatus {
        self.status.at(self.clock.now())
    }

    /// Timer event: apply the success/error → idle revert if due.
    pub fn tick(&mut self) {
        self.status = self.status();
    }

    // ------------------------------------------------
    // Draft edits (each one persisted immediately)
    // ------------------------------------------------

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.draft)
    }

    pub fn update_class_info(&mut self, field: ClassField, value: &str) -> AppResult<()> {
        self.draft
            .class_info
            .set(field, value)
            .map_err(AppError::ValidationFailed)?;
        self.persist()
    }

    pub fn set_date(&mut self, date: NaiveDate) -> AppResult<()> {
        self.draft.date = date;
        self.persist()
    }

    /// Append a row and return its index.
    pub fn add_student(&mut self, patch: &StudentPatch) -> AppResult<usize> {
        let mut entry = StudentEntry::blank(self.draft.next_student_id());
        patch.apply(&mut entry);
        self.draft.students.push(entry);
        self.persist()?;
        Ok(self.draft.students.len() - 1)
    }

    pub fn update_student(&mut self, index: usize, patch: &StudentPatch) -> AppResult<()> {
        let entry = self
            .draft
            .students
            .get_mut(index)
            .ok_or(AppError::InvalidIndex(index + 1))?;
        patch.apply(entry);
        self.persist()
    }

    pub fn remove_student(&mut self, index: usize) -> AppResult<StudentEntry> {
        if index >= self.draft.students.len() {
            return Err(AppError::InvalidIndex(index + 1));
        }
        let removed = self.draft.students.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Replace the draft with a fresh template dated today.
    pub fn reset(&mut self) -> AppResult<()> {
        self.draft = Draft::fresh(self.clock.today());
        self.persist()
    }

    // ------------------------------------------------
    // Submission
    // ------------------------------------------------

    /// Enter `Submitting` and build the record to write.
    ///
    /// `Ok(None)` while a submission is already in flight. Guard failures
    /// (`NotReady`, `ValidationFailed`) leave status and draft untouched.
    pub fn begin_submit(&mut self) -> AppResult<Option<AttendanceRecord>> {
        self.tick();
        if self.status == SubmitStatus::Submitting {
            return Ok(None);
        }

        let identity = self.identity.as_ref().ok_or(AppError::NotReady)?;
        let record = self
            .draft
            .to_record(self.profile, &identity.uid, self.clock.now())?;

        self.status = SubmitStatus::Submitting;
        Ok(Some(record))
    }

    /// Completion of the write started by `begin_submit`.
    pub fn finish_submit(&mut self, result: AppResult<()>) -> AppResult<()> {
        let now = self.clock.now();

        match result {
            Ok(()) => {
                self.status = SubmitStatus::Success { since: now };
                // Record stored: a failed draft save is only a warning.
                if let Err(e) = self.reset() {
                    log::warn!("Failed to save the fresh draft after submit: {e}");
                    if let Err(e) = self.store.clear() {
                        log::warn!("Failed to clear the submitted draft: {e}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                log::error!("Submission failed: {e}");
                self.status = SubmitStatus::Error { since: now };
                Err(AppError::SubmitFailed(e.to_string()))
            }
        }
    }

    /// Full submit: guards, write, state transition.
    /// Returns the submitted record, or `None` when ignored (already submitting).
    pub fn submit(&mut self, repo: &dyn RecordRepository) -> AppResult<Option<AttendanceRecord>> {
        let Some(record) = self.begin_submit()? else {
            return Ok(None);
        };

        let result = repo.submit(&record);
        self.finish_submit(result)?;
        Ok(Some(record))
    }
}
