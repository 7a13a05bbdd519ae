use crate::cli::parser::{CallAction, Commands};
use crate::core::calling::{CallingLog, NewCall};
use crate::environment::Environment;
use crate::errors::{AppError, AppResult};
use crate::models::AbsenceReason;
use crate::ui::messages::{header, info, success};
use crate::utils::date::{parse_date_arg, today};

fn print_calls(log: &CallingLog) {
    header("Calling Records");

    if log.list().is_empty() {
        info("No calling records yet.");
        return;
    }

    for (i, call) in log.list().iter().enumerate() {
        println!(
            "{:>3}. Roll {} · {} · {} · {}",
            i + 1,
            call.student_roll_no,
            call.date.format("%Y-%m-%d"),
            call.contact,
            call.reason
        );
        if !call.notes.trim().is_empty() {
            for line in textwrap::wrap(&call.notes, 70) {
                println!("     {line}");
            }
        }
    }
}

/// Handle the `call` command.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Call { action } = cmd {
        let mut log = CallingLog::load(env.storage.clone());

        match action {
            CallAction::Add {
                roll,
                date,
                contact,
                reason,
                notes,
            } => {
                let date = match date {
                    Some(d) => parse_date_arg(d)?,
                    None => today(),
                };
                let reason = match reason {
                    Some(r) => AbsenceReason::from_input(r)
                        .ok_or_else(|| AppError::InvalidReason(r.clone()))?,
                    None => AbsenceReason::default(),
                };

                let added = log.add(NewCall {
                    student_roll_no: roll.clone(),
                    date: Some(date),
                    contact: contact.clone(),
                    reason,
                    notes: notes.clone().unwrap_or_default(),
                })?;
                success(format!(
                    "Call record added for roll {} ({}).",
                    added.student_roll_no, added.reason
                ));
            }
            CallAction::List => print_calls(&log),
            CallAction::Del { row } => {
                let idx = row.checked_sub(1).ok_or(AppError::InvalidIndex(*row))?;
                let removed = log.remove(idx)?;
                success(format!(
                    "Removed call record for roll {}.",
                    removed.student_roll_no
                ));
            }
        }
    }

    Ok(())
}
