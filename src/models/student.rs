use super::status::AttendanceStatus;
use serde::{Deserialize, Serialize};

/// One roll-call row of a draft or record.
/// `id` only identifies the row inside its own student list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentEntry {
    pub id: u64,
    pub roll_no: String,
    pub name: String,
    pub status: AttendanceStatus,
    pub remarks: String,
}

impl StudentEntry {
    /// Blank row, marked present.
    pub fn blank(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}

/// Field delta applied to one student row.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub roll_no: Option<String>,
    pub name: Option<String>,
    pub status: Option<AttendanceStatus>,
    pub remarks: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.roll_no.is_none()
            && self.name.is_none()
            && self.status.is_none()
            && self.remarks.is_none()
    }

    pub fn apply(&self, entry: &mut StudentEntry) {
        if let Some(roll_no) = &self.roll_no {
            entry.roll_no = roll_no.clone();
        }
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
        if let Some(remarks) = &self.remarks {
            entry.remarks = remarks.clone();
        }
    }
}
