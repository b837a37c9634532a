//! Neutral stops
//!
//! A [`Stop`] ends the run early without marking it failed. Components return
//! `Result<Flow<T>>`: `Err` for real failures, `Break(Stop)` for policy
//! stops, `Continue(T)` to carry on.

use std::ops::ControlFlow;

/// Continue with a value or stop neutrally
pub type Flow<T> = ControlFlow<Stop, T>;

/// Policy-driven early termination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stop {
    /// Payload has neither a PR reference nor the fields for branch lookup
    MissingPullRequest,
    /// No branch in the payload satisfies the filters
    NoMatchingBranch {
        /// Event commit SHA
        sha: String,
    },
    /// No open PR for the resolved head ref
    NoOpenPullRequest {
        /// `owner:branch` head ref that was queried
        head: String,
    },
    /// Mergeability gate blocked the merge
    NotMergeable {
        /// PR number
        number: u64,
        /// Why the gate refused
        reason: String,
    },
    /// GitHub answered the merge call without merging
    MergeDeclined {
        /// PR number
        number: u64,
        /// Message returned by GitHub
        message: Option<String>,
    },
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingPullRequest => {
                write!(f, "Event payload has no pull request and no commit to resolve one from")
            }
            Self::NoMatchingBranch { sha } => {
                write!(f, "Couldn't find a branch for {sha} that matches the configuration")
            }
            Self::NoOpenPullRequest { head } => {
                write!(f, "Couldn't find an open pull request for {head}")
            }
            Self::NotMergeable { number, reason } => {
                write!(f, "Pull request #{number} is not mergeable: {reason}")
            }
            Self::MergeDeclined { number, message } => {
                write!(f, "Pull request #{number} was not merged")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }
    }
}

/// Unwrap a `Flow`, returning `Ok(Break(stop))` from the enclosing function on a stop
#[macro_export]
macro_rules! proceed {
    ($flow:expr) => {
        match $flow {
            ::std::ops::ControlFlow::Continue(value) => value,
            ::std::ops::ControlFlow::Break(stop) => {
                return Ok(::std::ops::ControlFlow::Break(stop));
            }
        }
    };
}
