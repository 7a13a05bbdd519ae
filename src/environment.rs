//! Process-wide environment, built once at startup from the configuration
//! and passed by reference to the components that need it.

use crate::config::Config;
use crate::models::Profile;
use crate::storage::LocalStorage;
use std::path::{Path, PathBuf};

/// App namespace used when no backend is configured.
pub const DEMO_APP_ID: &str = "demo-app-id";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Shared document store.
    Remote,
    /// Local-storage fallback ("demo mode").
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Remote { project_id: String, database: PathBuf },
    Local,
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Remote { .. } => BackendKind::Remote,
            Backend::Local => BackendKind::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Environment {
    pub home: PathBuf,
    pub backend: Backend,
    pub app_id: String,
    pub bootstrap_token: Option<String>,
    pub profile: Profile,
    pub departments: Vec<String>,
    pub years: Vec<String>,
    pub admin_password: String,
    pub storage: LocalStorage,
}

impl Environment {
    /// Select the backend from the configuration.
    /// Placeholder or absent credentials deterministically select demo mode.
    pub fn from_config(cfg: &Config, home: &Path) -> Self {
        let (backend, app_id) = if cfg.backend.is_placeholder() {
            log::info!("Backend not configured properly. Running in demo mode.");
            (Backend::Local, DEMO_APP_ID.to_string())
        } else {
            let app_id = if cfg.app_id.trim().is_empty() {
                crate::config::default_app_id()
            } else {
                cfg.app_id.clone()
            };
            (
                Backend::Remote {
                    project_id: cfg.backend.project_id.clone(),
                    database: cfg.database_path(home),
                },
                app_id,
            )
        };

        let bootstrap_token = cfg
            .initial_auth_token
            .as_ref()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Self {
            home: home.to_path_buf(),
            backend,
            app_id,
            bootstrap_token,
            profile: cfg.profile,
            departments: cfg.departments.clone(),
            years: cfg.years.clone(),
            admin_password: cfg.admin_password.clone(),
            storage: LocalStorage::new(home),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.backend.kind() == BackendKind::Local
    }

    /// Collection path of the attendance records inside the document store.
    pub fn records_collection(&self) -> String {
        format!("artifacts/{}/public/data/attendance_records", self.app_id)
    }
}
