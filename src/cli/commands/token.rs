use crate::cli::parser::Commands;
use crate::environment::{Backend, Environment};
use crate::errors::{AppError, AppResult};
use crate::identity::SqliteIdentityProvider;
use crate::ui::messages::{info, success};

/// Handle the `token` command: issue a bootstrap token for a user id.
pub fn handle(cmd: &Commands, env: &Environment) -> AppResult<()> {
    if let Commands::Token { issue } = cmd {
        let Backend::Remote { database, .. } = &env.backend else {
            return Err(AppError::Identity(
                "tokens need a configured backend (demo mode has no identity service)".into(),
            ));
        };

        let provider = SqliteIdentityProvider::open(database, env.storage.clone())?;
        let token = provider.issue_token(issue)?;

        success(format!("Token issued for '{}'.", issue.trim()));
        info("Set it as 'initial_auth_token' in the configuration file:");
        println!("{token}");
    }

    Ok(())
}
