use super::draft::print_students;
use super::open_form;
use crate::cli::parser::{Commands, StudentAction};
use crate::environment::Environment;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceStatus, StudentPatch};
use crate::ui::messages::success;

fn build_patch(
    roll: &Option<String>,
    name: &Option<String>,
    status: &Option<String>,
    remarks: &Option<String>,
) -> AppResult<StudentPatch> {
    let status = match status {
        Some(s) => Some(
            AttendanceStatus::from_input(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?,
        ),
        None => None,
    };

    Ok(StudentPatch {
        roll_no: roll.clone(),
        name: name.clone(),
        status,
        remarks: remarks.clone(),
    })
}

/// Rows are shown and addressed from 1.
fn row_index(row: usize) -> AppResult<usize> {
    row.checked_sub(1).ok_or(AppError::InvalidIndex(row))
}

/// Handle the `student` command.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Student { action } = cmd {
        let mut form = open_form(env);

        match action {
            StudentAction::Add {
                roll,
                name,
                status,
                remarks,
            } => {
                let patch = build_patch(roll, name, status, remarks)?;
                let idx = form.add_student(&patch)?;
                success(format!("Student added at row {}.", idx + 1));
            }
            StudentAction::Set {
                row,
                roll,
                name,
                status,
                remarks,
            } => {
                let patch = build_patch(roll, name, status, remarks)?;
                if patch.is_empty() {
                    return Err(AppError::ValidationFailed(
                        "Nothing to update: pass at least one of --roll, --name, --status, --remarks".into(),
                    ));
                }
                form.update_student(row_index(*row)?, &patch)?;
                success(format!("Row {row} updated."));
            }
            StudentAction::Del { row } => {
                let removed = form.remove_student(row_index(*row)?)?;
                let who = if removed.name.is_empty() {
                    format!("row {row}")
                } else {
                    removed.name
                };
                success(format!("Removed {who}."));
            }
            StudentAction::List => {}
        }

        print_students(form.draft());
    }

    Ok(())
}
