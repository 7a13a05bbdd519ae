use crate::cli::parser::Commands;
use crate::core::clock::SystemClock;
use crate::core::session::Session;
use crate::environment::Environment;
use crate::errors::AppResult;
use crate::ui::messages::{demo_banner, info, success};

/// Handle the `submit` command.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Submit = cmd {
        if env.is_demo() {
            demo_banner();
        }

        let mut session = Session::open(env, SystemClock)?;

        match session.submit()? {
            Some(record) => {
                success(format!(
                    "Attendance submitted successfully! ({}, {} students)",
                    record.id,
                    record.students.len()
                ));
                info(format!(
                    "{} record(s) stored. Draft reset for {}.",
                    session.records().len(),
                    session.form.draft().date.format("%Y-%m-%d")
                ));
            }
            None => info("A submission is already in progress."),
        }

        session.close();
    }

    Ok(())
}
