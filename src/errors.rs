//! Unified application error type.
//! All modules (storage, repository, core, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Document store
    // ---------------------------
    #[error("Document store error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid attendance status: {0} (use present, absent, leave or medical)")]
    InvalidStatus(String),

    #[error("Invalid absence reason: {0}")]
    InvalidReason(String),

    #[error("No student at row {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Submission workflow
    // ---------------------------
    #[error("Authenticating... please wait a moment and try again")]
    NotReady,

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Error saving data. Please check connection ({0})")]
    SubmitFailed(String),

    #[error("Identity provider error: {0}")]
    Identity(String),

    #[error("Incorrect password")]
    AccessDenied,

    // ---------------------------
    // Config / export
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
