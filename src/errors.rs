//! Unified application error type.
//! The store, the alert evaluator and the CLI shell all return AppError so
//! callers can tell validation, lookup and storage failures apart.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Caller input
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("Event not found with ID: {0}")]
    NotFound(i64),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True when the failure comes from the persistence layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Io(_) | AppError::Db(_) | AppError::Migration(_))
    }

    /// Process exit code used by the CLI shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) | AppError::InvalidTime(_) => 2,
            AppError::NotFound(_) => 3,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
