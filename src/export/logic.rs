// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordRow;
use crate::models::{AttendanceRecord, Draft, Profile};
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// File name of the draft backup: `attendance_<class>_<date>.json`.
    pub fn draft_file_name(draft: &Draft, profile: Profile) -> String {
        let id = draft.class_info.identifier(profile);
        let class = if id.is_empty() {
            "draft".to_string()
        } else {
            id.replace(['/', '\\', ' '], "_")
        };
        format!("attendance_{}_{}.json", class, draft.date.format("%Y-%m-%d"))
    }

    /// Write the current draft as pretty JSON into `dir`.
    pub fn export_draft(
        draft: &Draft,
        profile: Profile,
        dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(Self::draft_file_name(draft, profile));

        ensure_writable(&path, force)?;
        export_json(draft, &path)?;
        Ok(path)
    }

    /// Export the submitted records snapshot.
    ///
    /// JSON keeps the full record documents, CSV flattens them to one row per
    /// student entry.
    pub fn export_records(
        records: &[AttendanceRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if records.is_empty() {
            warning("No attendance records submitted yet.");
            return Ok(());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => export_json(records, path)?,
            ExportFormat::Csv => {
                let rows: Vec<RecordRow> =
                    records.iter().flat_map(RecordRow::from_record).collect();
                export_csv(&rows, path)?
            }
        }

        Ok(())
    }
}
