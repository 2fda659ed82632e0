//! Unified application error type.
//! Every layer (db, core, cli) returns AppError so the dispatcher in
//! `lib.rs` has a single place where failures turn into user messages.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Cannot open database '{path}': {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("No place with id {0}")]
    NotFound(i64),

    // ---------------------------
    // Session / permissions
    // ---------------------------
    #[error("You must be logged in (use --user <NAME>)")]
    NotLoggedIn,

    #[error("User '{0}' is not allowed to do this (admin only)")]
    NotAdmin(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid opening hours '{0}'")]
    InvalidHours(String),

    #[error("Invalid price tier '{0}'")]
    InvalidPrice(String),

    #[error("Invalid rating {0}: must be between 1.0 and 5.0")]
    InvalidRating(f64),

    // ---------------------------
    // Import / export
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
