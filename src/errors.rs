//! Unified application error type.
//! Stores, engine, report and CLI all return AppError so that the trigger
//! handlers see one error surface.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Stored data
    // ---------------------------
    #[error("Malformed log line in {}: {line:?}", path.display())]
    MalformedLogLine { path: PathBuf, line: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp (expected YYYYMMDD-HHMMSS): {0}")]
    InvalidTimestamp(String),

    #[error("Invalid location (expected IN or OUT): {0}")]
    InvalidLocation(String),

    #[error("Invalid period (expected YYYY or YYYY-MM): {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Report output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
