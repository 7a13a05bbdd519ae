use crate::errors::{AppError, AppResult};
use crate::models::Profile;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // missing-key check / fill, see src/config/migrate.rs

/// Placeholder values shipped in the sample configuration.
pub const PLACEHOLDER_API_KEY: &str = "demo-api-key";
pub const PLACEHOLDER_PROJECT_ID: &str = "demo-project";

pub const CONFIG_FILE_NAME: &str = "rattendance.conf";
pub const DOCUMENT_STORE_FILE_NAME: &str = "documents.sqlite";

/// Backend connection descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub project_id: String,
    /// Path of the shared document store file. Empty → `<home>/documents.sqlite`.
    #[serde(default)]
    pub database: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            project_id: PLACEHOLDER_PROJECT_ID.to_string(),
            database: String::new(),
        }
    }
}

impl BackendConfig {
    /// Absent or placeholder credentials mean "no backend".
    pub fn is_placeholder(&self) -> bool {
        self.api_key.trim().is_empty()
            || self.api_key == PLACEHOLDER_API_KEY
            || self.project_id.trim().is_empty()
            || self.project_id == PLACEHOLDER_PROJECT_ID
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default = "default_app_id")]
    pub app_id: String,
    #[serde(default)]
    pub initial_auth_token: Option<String>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,
    #[serde(default = "default_years")]
    pub years: Vec<String>,
    /// UI convenience gate for the admin dashboard. Not an authorization mechanism.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

pub(crate) fn default_app_id() -> String {
    "default-app-id".to_string()
}

pub(crate) fn default_departments() -> Vec<String> {
    ["CE", "CO-A", "CO-B", "EE", "EJ", "IF"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub(crate) fn default_years() -> Vec<String> {
    ["1st Year", "2nd Year", "3rd Year"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub(crate) fn default_admin_password() -> String {
    "admin2025".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            app_id: default_app_id(),
            initial_auth_token: None,
            profile: Profile::default(),
            departments: default_departments(),
            years: default_years(),
            admin_password: default_admin_password(),
        }
    }
}

impl Config {
    /// Return the standard home directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rattendance")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rattendance")
        }
    }

    /// Return the full path of the config file inside `home`
    pub fn config_file(home: &Path) -> PathBuf {
        home.join(CONFIG_FILE_NAME)
    }

    /// Load configuration from `home`, or return defaults if not found
    pub fn load(home: &Path) -> AppResult<Self> {
        let path = Self::config_file(home);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, home: &Path) -> AppResult<()> {
        fs::create_dir_all(home)?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(home), yaml)?;
        Ok(())
    }

    /// Resolved path of the document store file.
    pub fn database_path(&self, home: &Path) -> PathBuf {
        if self.backend.database.trim().is_empty() {
            home.join(DOCUMENT_STORE_FILE_NAME)
        } else {
            let p = expand_tilde(&self.backend.database);
            if p.is_absolute() { p } else { home.join(p) }
        }
    }

    /// Initialize the home directory and write the configuration file.
    /// An existing configuration is left untouched.
    pub fn init_all(home: &Path) -> AppResult<(PathBuf, bool)> {
        fs::create_dir_all(home)?;

        let path = Self::config_file(home);
        if path.exists() {
            return Ok((path, false));
        }

        Self::default().save(home)?;
        Ok((path, true))
    }
}
