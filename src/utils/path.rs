//! Path utilities: expand ~ and resolve the home directory of the app.

use crate::config::Config;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if (path == "~" || path.starts_with("~/"))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches('~').trim_start_matches('/'));
    }
    PathBuf::from(path)
}

/// `--home` override when given, the platform default otherwise.
pub fn resolve_home(custom: Option<&str>) -> PathBuf {
    match custom {
        Some(p) if !p.trim().is_empty() => expand_tilde(p.trim()),
        _ => Config::config_dir(),
    }
}
