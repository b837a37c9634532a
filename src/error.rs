//! Error types for marvin
//!
//! Only unexpected failures live here. Policy-driven early exits (no branch,
//! no open PR, not mergeable) are [`crate::flow::Stop`] values instead.

use thiserror::Error;

/// Errors that fail a run
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or missing action input
    #[error("configuration error: {0}")]
    Config(String),

    /// Event payload or repository context could not be loaded
    #[error("event error: {0}")]
    Event(String),

    /// GitHub API call failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Raw HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for Error {
    fn from(e: octocrab::Error) -> Self {
        Self::GitHubApi(e.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
