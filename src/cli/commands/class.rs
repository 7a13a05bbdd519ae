use super::open_form;
use crate::cli::parser::Commands;
use crate::environment::Environment;
use crate::errors::{AppError, AppResult};
use crate::models::ClassField;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_date_arg;

/// Handle the `class` command: update class information of the draft.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Class {
        department,
        year,
        class_name,
        semester,
        cc_name,
        total_students,
    } = cmd
    {
        let updates = [
            (ClassField::Department, department),
            (ClassField::Year, year),
            (ClassField::ClassName, class_name),
            (ClassField::Semester, semester),
            (ClassField::CcName, cc_name),
            (ClassField::TotalStudents, total_students),
        ];

        if updates.iter().all(|(_, v)| v.is_none()) {
            return Err(AppError::ValidationFailed(
                "Nothing to update: pass at least one of --department, --year, --class-name, --semester, --cc, --total".into(),
            ));
        }

        if let Some(d) = department
            && !d.is_empty()
            && !env.departments.iter().any(|known| known == d)
        {
            warning(format!(
                "Department '{}' is not in the configured list ({})",
                d,
                env.departments.join(", ")
            ));
        }
        if let Some(y) = year
            && !y.is_empty()
            && !env.years.iter().any(|known| known == y)
        {
            warning(format!(
                "Year '{}' is not in the configured list ({})",
                y,
                env.years.join(", ")
            ));
        }

        let mut form = open_form(env);
        for (field, value) in updates {
            if let Some(v) = value {
                form.update_class_info(field, v)?;
            }
        }

        let id = form.draft().class_info.identifier(env.profile);
        if id.is_empty() {
            success("Class information updated.");
        } else {
            success(format!("Class information updated ({id})."));
        }
    }

    Ok(())
}

/// Handle the `date` command: set the attendance date of the draft.
pub fn handle_date(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Date { date } = cmd {
        let d = parse_date_arg(date)?;

        let mut form = open_form(env);
        form.set_date(d)?;

        success(format!("Attendance date set to {d}."));
        if d > crate::utils::date::today() {
            info("Note: the attendance date is in the future.");
        }
    }

    Ok(())
}
