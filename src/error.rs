//! Error types for the rulekit library.

use std::path::PathBuf;

use thiserror::Error;

/// Library-wide result alias
pub type Result<T> = std::result::Result<T, RulekitError>;

/// Errors surfaced by rulekit operations.
///
/// Note that malformed rule documents do NOT produce a `RulekitError` during
/// loading - they are collected as [`crate::rules::LoadWarning`]s so that a
/// partially valid rules directory still yields a usable store.
#[derive(Debug, Error)]
pub enum RulekitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("rules directory not found: {0}")]
    RulesDirNotFound(PathBuf),

    #[error("unknown rule id: {0}")]
    UnknownRule(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("{0}")]
    Other(String),
}
