//! Event payload and repository context
//!
//! A read-only view of the webhook payload that triggered the run. Only the
//! fields the resolvers look at are modelled; everything else is ignored.

use crate::error::{Error, Result};
use crate::types::RepoSlug;
use serde::Deserialize;
use std::path::Path;

/// Webhook payload (push/status or pull-request events)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// Present on pull-request events
    #[serde(default)]
    pub pull_request: Option<PullRequestRef>,
    /// Commit SHA the event refers to
    #[serde(default)]
    pub sha: Option<String>,
    /// Repository the event came from
    #[serde(default)]
    pub repository: Option<Repository>,
    /// Branches containing the event commit
    #[serde(default)]
    pub branches: Vec<BranchRef>,
}

/// Direct pull-request reference carried by the payload
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {
    /// PR number
    #[serde(default)]
    pub number: Option<u64>,
}

/// Repository section of the payload
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name
    #[serde(default)]
    pub name: Option<String>,
    /// Repository owner
    pub owner: Owner,
}

/// Repository owner
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    /// Login of the user or organization
    pub login: String,
}

/// A branch listed in the payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BranchRef {
    /// Branch name
    pub name: String,
    /// Whether branch protection is enabled
    #[serde(default)]
    pub protected: bool,
    /// Head commit of the branch
    pub commit: CommitRef,
}

/// Commit pointer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRef {
    /// Commit SHA
    pub sha: String,
}

impl BranchRef {
    /// Convenience constructor
    pub fn new(name: impl Into<String>, protected: bool, sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protected,
            commit: CommitRef { sha: sha.into() },
        }
    }
}

impl EventPayload {
    /// Parse a payload from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Event(format!("invalid event payload: {e}")))
    }

    /// Load the payload from the file the runner wrote
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Event(format!("failed to read event file {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// PR number when the event is itself a pull-request event
    pub fn pull_request_number(&self) -> Option<u64> {
        self.pull_request.as_ref().and_then(|pr| pr.number)
    }

    /// Owner login used to build `owner:branch` head refs
    pub fn head_owner(&self) -> Option<&str> {
        self.repository.as_ref().map(|r| r.owner.login.as_str())
    }
}

/// Everything the pipeline knows about the triggering event
#[derive(Debug, Clone)]
pub struct EventContext {
    /// Repository API calls target
    pub repo: RepoSlug,
    /// Parsed webhook payload
    pub payload: EventPayload,
}

impl EventContext {
    /// Bundle a repository and payload
    pub const fn new(repo: RepoSlug, payload: EventPayload) -> Self {
        Self { repo, payload }
    }
}
