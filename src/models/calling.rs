use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason given when calling an absent student's contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbsenceReason {
    Medical,
    Leave,
    #[serde(rename = "Family Emergency")]
    FamilyEmergency,
    Other,
    #[default]
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

impl AbsenceReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbsenceReason::Medical => "Medical",
            AbsenceReason::Leave => "Leave",
            AbsenceReason::FamilyEmergency => "Family Emergency",
            AbsenceReason::Other => "Other",
            AbsenceReason::NotSpecified => "Not Specified",
        }
    }

    /// Convert CLI input ("family-emergency", "Family Emergency", "medical"...) → enum
    pub fn from_input(s: &str) -> Option<Self> {
        let norm: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match norm.as_str() {
            "medical" => Some(Self::Medical),
            "leave" => Some(Self::Leave),
            "familyemergency" | "family" | "emergency" => Some(Self::FamilyEmergency),
            "other" => Some(Self::Other),
            "notspecified" | "" => Some(Self::NotSpecified),
            _ => None,
        }
    }
}

impl fmt::Display for AbsenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One phone/email follow-up with an absent student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingRecord {
    pub id: u64,
    pub student_roll_no: String,
    pub date: NaiveDate,
    pub contact: String,
    #[serde(default)]
    pub reason: AbsenceReason,
    #[serde(default)]
    pub notes: String,
}
