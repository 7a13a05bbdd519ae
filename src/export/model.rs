// src/export/model.rs

use crate::models::AttendanceRecord;
use serde::Serialize;

/// Flat row for CSV export: one line per student entry of a record.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordRow {
    pub record_id: String,
    pub date: String,
    pub class_name: String,
    pub department: String,
    pub year: String,
    pub semester: String,
    pub cc_name: String,
    pub roll_no: String,
    pub name: String,
    pub status: String,
    pub remarks: String,
    pub submitted_at: String,
    pub submitted_by: String,
}

impl RecordRow {
    pub fn from_record(record: &AttendanceRecord) -> Vec<RecordRow> {
        record
            .students
            .iter()
            .map(|s| RecordRow {
                record_id: record.id.clone(),
                date: record.date.format("%Y-%m-%d").to_string(),
                class_name: record.class_info.class_name.clone(),
                department: record.class_info.department.clone(),
                year: record.class_info.year.clone(),
                semester: record.class_info.semester.clone(),
                cc_name: record.class_info.cc_name.clone(),
                roll_no: s.roll_no.clone(),
                name: s.name.clone(),
                status: s.status.as_str().to_string(),
                remarks: s.remarks.clone(),
                submitted_at: record.submitted_at.to_rfc3339(),
                submitted_by: record.submitted_by.clone(),
            })
            .collect()
    }
}
