//! Core types for marvin

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Repository the run acts on (`owner/repo`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoSlug {
    /// Create a slug from its parts
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(owner, repo))
            }
            _ => Err(Error::Event(format!(
                "invalid repository '{s}', expected owner/repo"
            ))),
        }
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// An open pull request as returned by a head-ref listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Head branch name
    pub head_ref: String,
    /// Last update time
    pub updated_at: Option<DateTime<Utc>>,
}

/// GitHub's `mergeable_state` classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeableState {
    /// No conflicts, checks green, up to date
    Clean,
    /// Merge conflicts
    Dirty,
    /// Mergeable with failing or pending non-required checks
    Unstable,
    /// Blocked by branch protection
    Blocked,
    /// Head is behind the base branch
    Behind,
    /// PR is a draft
    Draft,
    /// Mergeable, pre-receive hooks pending
    HasHooks,
    /// Not computed yet, or a state this client does not know
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for MergeableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Dirty => write!(f, "dirty"),
            Self::Unstable => write!(f, "unstable"),
            Self::Blocked => write!(f, "blocked"),
            Self::Behind => write!(f, "behind"),
            Self::Draft => write!(f, "draft"),
            Self::HasHooks => write!(f, "has_hooks"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Current PR state used by the mergeability gate
///
/// Always fetched fresh; never cached beyond a single run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Head branch name
    pub head_ref: String,
    /// Web URL for the PR
    pub html_url: String,
    /// Whether PR can be merged
    /// - `Some(true)` = mergeable
    /// - `Some(false)` = has conflicts
    /// - `None` = unknown (GitHub still computing)
    pub mergeable: Option<bool>,
    /// Freshness/conflict classification
    pub mergeable_state: MergeableState,
    /// Last update time
    pub updated_at: Option<DateTime<Utc>>,
}

/// Result of a merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// Whether the merge was successful
    pub merged: bool,
    /// The SHA of the merge commit (if successful)
    pub sha: Option<String>,
    /// Message from the merge operation (especially on failure)
    pub message: Option<String>,
}

/// Merge strategy/method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMethod {
    /// Create a merge commit
    Merge,
    /// Squash all commits into one
    Squash,
    /// Rebase commits onto base branch
    Rebase,
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Squash => write!(f, "squash"),
            Self::Rebase => write!(f, "rebase"),
        }
    }
}

impl FromStr for MergeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "merge" => Ok(Self::Merge),
            "squash" => Ok(Self::Squash),
            "rebase" => Ok(Self::Rebase),
            other => Err(Error::Config(format!(
                "unknown merge method '{other}', expected merge, squash or rebase"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_slug_parse() {
        let slug: RepoSlug = "octo/hello".parse().unwrap();
        assert_eq!(slug, RepoSlug::new("octo", "hello"));
        assert_eq!(slug.to_string(), "octo/hello");
    }

    #[test]
    fn test_repo_slug_rejects_malformed() {
        for bad in ["", "octo", "/hello", "octo/", "a/b/c"] {
            assert!(bad.parse::<RepoSlug>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_mergeable_state_unrecognized_is_unknown() {
        let state: MergeableState = serde_json::from_str("\"something_new\"").unwrap();
        assert_eq!(state, MergeableState::Unknown);
        let state: MergeableState = serde_json::from_str("\"has_hooks\"").unwrap();
        assert_eq!(state, MergeableState::HasHooks);
    }
}
