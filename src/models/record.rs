use super::class_info::{ClassInfo, Profile};
use super::student::StudentEntry;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of blank rows of a fresh draft.
pub const TEMPLATE_ROWS: u64 = 3;

/// The single in-progress (unsubmitted) attendance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default)]
    pub class_info: ClassInfo,
    #[serde(default = "today")]
    pub date: NaiveDate,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
}

fn today() -> NaiveDate {
    crate::utils::date::today()
}

impl Draft {
    /// Fresh template: empty class info, the given date, 3 blank rows.
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            class_info: ClassInfo::default(),
            date,
            students: (1..=TEMPLATE_ROWS).map(StudentEntry::blank).collect(),
        }
    }

    /// Next row id: monotonic within this draft's student list.
    pub fn next_student_id(&self) -> u64 {
        self.students.iter().map(|s| s.id).max().unwrap_or(0).saturating_add(1)
    }

    /// Copy the draft into a submitted record.
    /// Fails with `ValidationFailed` when the class identifier is empty.
    pub fn to_record(
        &self,
        profile: Profile,
        submitted_by: &str,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<AttendanceRecord> {
        let class_id = self.class_info.identifier(profile);
        if class_id.is_empty() {
            let what = match profile {
                Profile::Department => "a department",
                Profile::Class => "a class name",
            };
            return Err(AppError::ValidationFailed(format!(
                "Please select {what} before submitting."
            )));
        }

        Ok(AttendanceRecord {
            id: natural_key(&class_id, self.date),
            class_info: self.class_info.clone(),
            date: self.date,
            students: self.students.clone(),
            submitted_at,
            submitted_by: submitted_by.to_string(),
        })
    }
}

/// A submitted attendance sheet, as stored by the record repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub class_info: ClassInfo,
    pub date: NaiveDate,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub submitted_by: String,
}

/// Natural key of a record: "<class>_<date>" with every character outside
/// `[A-Za-z0-9]` mapped to `_`, lowercased.
pub fn natural_key(class_id: &str, date: NaiveDate) -> String {
    format!("{}_{}", class_id, date.format("%Y-%m-%d"))
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
