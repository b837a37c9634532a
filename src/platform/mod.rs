//! Platform service for pull-request operations
//!
//! Exposes exactly the remote operations the pipeline consumes, so the
//! pipeline can run against GitHub or a test double.

mod github;

pub use github::{DEFAULT_API_URL, GitHubService};

use crate::error::Result;
use crate::types::{MergeMethod, MergeResult, PullRequest, PullRequestDetails, RepoSlug};
use async_trait::async_trait;

/// Platform service trait for PR operations
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// List open PRs whose head is `head` (`owner:branch`), most recently updated first
    async fn list_open_prs(&self, head: &str) -> Result<Vec<PullRequest>>;

    /// Get current PR state, including mergeability
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails>;

    /// Submit an approving review
    async fn approve_pr(&self, pr_number: u64) -> Result<()>;

    /// Attach a label to the PR
    async fn add_label(&self, pr_number: u64, label: &str) -> Result<()>;

    /// Merge the PR; `None` uses the repository's default method
    async fn merge_pr(&self, pr_number: u64, method: Option<MergeMethod>) -> Result<MergeResult>;

    /// Repository this service targets
    fn repo(&self) -> &RepoSlug;
}
