//! Data model: drafts, submitted records, students and calling records.

pub mod calling;
pub mod class_info;
pub mod record;
pub mod status;
pub mod student;

pub use calling::{AbsenceReason, CallingRecord};
pub use class_info::{ClassField, ClassInfo, Profile};
pub use record::{AttendanceRecord, Draft, natural_key};
pub use status::AttendanceStatus;
pub use student::{StudentEntry, StudentPatch};
