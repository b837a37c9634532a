//! Reporter - collapse a run into its externally visible result
//!
//! | Outcome     | `result`  | exit code |
//! |-------------|-----------|-----------|
//! | Completed   | success   | 0         |
//! | Stopped     | (none)    | 0         |
//! | Failed      | failure   | 1         |
//!
//! A neutral stop never reports `failure`, even though a human reading the
//! log sees "the step stopped" in both cases.

use crate::actions::ActionReport;
use crate::error::{Error, Result};
use crate::flow::Stop;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Structured result value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Sequence reached its end
    Success,
    /// An unexpected error occurred
    Failure,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// `{ "result": "success" | "failure" }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Terminal status
    pub result: RunStatus,
}

/// Terminal state of a run
#[derive(Debug)]
pub enum RunOutcome {
    /// Every configured step ran
    Completed(ActionReport),
    /// Neutral, policy-driven stop
    Stopped(Stop),
    /// Unexpected error
    Failed(Error),
}

impl RunOutcome {
    /// Structured result; `None` for neutral stops
    pub const fn result(&self) -> Option<RunResult> {
        match self {
            Self::Completed(_) => Some(RunResult {
                result: RunStatus::Success,
            }),
            Self::Failed(_) => Some(RunResult {
                result: RunStatus::Failure,
            }),
            Self::Stopped(_) => None,
        }
    }

    /// Process exit code
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Completed(_) | Self::Stopped(_) => 0,
            Self::Failed(_) => 1,
        }
    }
}

/// Append `result=<status>` to the runner's output file
pub fn write_output(path: &Path, result: RunResult) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    writeln!(file, "result={}", result.result)?;
    Ok(())
}

/// Format a workflow command that marks the step failed
pub fn failure_annotation(error: &Error) -> String {
    // Workflow commands end at the first newline
    let message = error
        .to_string()
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{message}")
}
