use crate::config::Config;
use crate::db::initialize::open_store;
use crate::db::log::audit;
use crate::environment::{Backend, Environment};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the home directory (if missing)
///  - the configuration file (kept when already present)
///  - the document store, when a backend is configured
pub fn handle(env: &Environment) -> AppResult<()> {
    info("Initializing rAttendance…");

    let (path, created) = Config::init_all(&env.home)?;
    if created {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    match &env.backend {
        Backend::Local => {
            warning("Backend not configured: records will be stored locally (demo mode).");
            info("Set backend.api_key and backend.project_id in the config file to use a shared store.");
        }
        Backend::Remote { database, project_id } => {
            let pool = open_store(database)?;
            success(format!("Document store: {}", database.display()));

            if let Err(e) = audit(
                &pool.conn,
                "init",
                project_id,
                &format!("Document store initialized at {}", database.display()),
            ) {
                log::warn!("Failed to write internal log: {e}");
            }
        }
    }

    success("rAttendance initialization completed!");
    Ok(())
}
