use super::open_form;
use crate::cli::parser::Commands;
use crate::core::clock::SystemClock;
use crate::core::session::Session;
use crate::environment::Environment;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Export {
        records,
        format,
        output,
        force,
    } = cmd
    {
        if *records {
            let session = Session::open(env, SystemClock)?;
            let path = match output {
                Some(p) => expand_tilde(p),
                None => PathBuf::from(format!("attendance_records.{}", format.as_str())),
            };
            ExportLogic::export_records(&session.records(), *format, &path, *force)?;
        } else {
            let form = open_form(env);
            let dir = output
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| PathBuf::from("."));
            ExportLogic::export_draft(form.draft(), env.profile, &dir, *force)?;
        }
    }
    Ok(())
}
