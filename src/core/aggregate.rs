//! Pure summaries over a record snapshot. Nothing here keeps state: every
//! view recomputes from the snapshot it currently holds.

use crate::models::{AttendanceRecord, AttendanceStatus, StudentEntry};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub present: usize,
    pub absent: usize,
    pub leave: usize,
    pub medical: usize,
}

impl StatusCounts {
    pub fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Leave => self.leave += 1,
            AttendanceStatus::Medical => self.medical += 1,
        }
    }

    pub fn get(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Leave => self.leave,
            AttendanceStatus::Medical => self.medical,
        }
    }

    pub fn total(&self) -> usize {
        self.present + self.absent + self.leave + self.medical
    }
}

/// Status tally of one student list.
pub fn tally(students: &[StudentEntry]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for s in students {
        counts.add(s.status);
    }
    counts
}

/// Sum of every student status across all records.
pub fn counts_by_status(records: &[AttendanceRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for s in records.iter().flat_map(|r| r.students.iter()) {
        counts.add(s.status);
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentHistory {
    pub roll_no: String,
    /// Name of the first entry seen for this roll number.
    pub name: String,
    pub history: Vec<HistoryEntry>,
}

impl StudentHistory {
    pub fn counts(&self) -> StatusCounts {
        let mut c = StatusCounts::default();
        for h in &self.history {
            c.add(h.status);
        }
        c
    }
}

/// Group every student entry by roll number.
///
/// Students come out in first-seen order and each history follows the
/// iteration order of `records` (no sorting).
pub fn per_student(records: &[AttendanceRecord]) -> Vec<StudentHistory> {
    let mut out: Vec<StudentHistory> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        for s in &record.students {
            let i = *index.entry(s.roll_no.as_str()).or_insert_with(|| {
                out.push(StudentHistory {
                    roll_no: s.roll_no.clone(),
                    name: s.name.clone(),
                    history: Vec::new(),
                });
                out.len() - 1
            });

            out[i].history.push(HistoryEntry {
                date: record.date,
                status: s.status,
                remarks: s.remarks.clone(),
            });
        }
    }

    out
}

/// Drill-down for one roll number.
pub fn student_history(records: &[AttendanceRecord], roll_no: &str) -> Option<StudentHistory> {
    per_student(records)
        .into_iter()
        .find(|s| s.roll_no == roll_no)
}

pub fn per_department<'a>(
    records: &'a [AttendanceRecord],
    department: &str,
) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.class_info.department == department)
        .collect()
}

pub fn per_class<'a>(records: &'a [AttendanceRecord], class_name: &str) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.class_info.class_name == class_name)
        .collect()
}

/// Record count of each configured department, in configuration order.
pub fn department_overview(
    records: &[AttendanceRecord],
    departments: &[String],
) -> Vec<(String, usize)> {
    departments
        .iter()
        .map(|d| (d.clone(), per_department(records, d).len()))
        .collect()
}

/// Record count of each class name, in first-seen order. Records without a
/// class name are left out.
pub fn class_overview(records: &[AttendanceRecord]) -> Vec<(String, usize)> {
    let mut names: Vec<&str> = Vec::new();
    for r in records {
        let name = r.class_info.class_name.as_str();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }

    names
        .into_iter()
        .map(|n| (n.to_string(), per_class(records, n).len()))
        .collect()
}

/// Daily report order: newest date first, ties keep snapshot order.
pub fn by_date_desc(records: &[AttendanceRecord]) -> Vec<&AttendanceRecord> {
    let mut out: Vec<&AttendanceRecord> = records.iter().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}
