//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{
    MergeMethod, MergeResult, MergeableState, PullRequest, PullRequestDetails, RepoSlug,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Raw pull request payload, limited to the gate's fields
///
/// Fetched with reqwest so `mergeable_state` keeps GitHub's exact string.
#[derive(Deserialize)]
struct PullRequestState {
    number: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    html_url: String,
    head: HeadRef,
    mergeable: Option<bool>,
    #[serde(default)]
    mergeable_state: MergeableState,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct HeadRef {
    #[serde(rename = "ref")]
    ref_field: String,
}

#[derive(Serialize)]
struct ReviewRequest<'a> {
    event: &'a str,
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    repo: RepoSlug,
    /// Token for raw HTTP requests
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
    /// API base URL without trailing slash
    api_url: String,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `api_url` defaults to [`DEFAULT_API_URL`]; GitHub Enterprise runners
    /// pass their own through `GITHUB_API_URL`.
    pub fn new(token: &str, repo: RepoSlug, api_url: Option<&str>) -> Result<Self> {
        let api_url = api_url
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_url.as_str())
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("marvin")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            repo,
            token: token.to_string(),
            http_client,
            api_url,
        })
    }

    fn pulls_url(&self, pr_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{pr_number}",
            self.api_url, self.repo.owner, self.repo.repo
        )
    }
}

/// Helper to convert octocrab PR to our `PullRequest` type
fn pr_from_octocrab(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        head_ref: pr.head.ref_field.clone(),
        updated_at: pr.updated_at,
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn list_open_prs(&self, head: &str) -> Result<Vec<PullRequest>> {
        debug!(head, "listing open PRs");

        let prs = self
            .client
            .pulls(&self.repo.owner, &self.repo.repo)
            .list()
            .head(head)
            .state(octocrab::params::State::Open)
            .sort(octocrab::params::pulls::Sort::Updated)
            .direction(octocrab::params::Direction::Descending)
            .send()
            .await?;

        let result: Vec<PullRequest> = prs.items.iter().map(pr_from_octocrab).collect();
        debug!(head, count = result.len(), "listed open PRs");
        Ok(result)
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        debug!(pr_number, "getting PR details");

        let state: PullRequestState = self
            .http_client
            .get(self.pulls_url(pr_number))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch PR #{pr_number}: {e}")))?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse PR #{pr_number}: {e}")))?;

        let details = PullRequestDetails {
            number: state.number,
            title: state.title,
            head_ref: state.head.ref_field,
            html_url: state.html_url,
            mergeable: state.mergeable,
            mergeable_state: state.mergeable_state,
            updated_at: state.updated_at,
        };

        debug!(
            pr_number,
            mergeable = ?details.mergeable,
            mergeable_state = %details.mergeable_state,
            "got PR details"
        );
        Ok(details)
    }

    async fn approve_pr(&self, pr_number: u64) -> Result<()> {
        debug!(pr_number, "creating approving review");

        self.http_client
            .post(format!("{}/reviews", self.pulls_url(pr_number)))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&ReviewRequest { event: "APPROVE" })
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to approve PR #{pr_number}: {e}")))?
            .error_for_status()?;

        debug!(pr_number, "approved PR");
        Ok(())
    }

    async fn add_label(&self, pr_number: u64, label: &str) -> Result<()> {
        debug!(pr_number, label, "adding label");
        self.client
            .issues(&self.repo.owner, &self.repo.repo)
            .add_labels(pr_number, &[label.to_string()])
            .await?;
        debug!(pr_number, label, "added label");
        Ok(())
    }

    async fn merge_pr(&self, pr_number: u64, method: Option<MergeMethod>) -> Result<MergeResult> {
        debug!(pr_number, method = ?method, "merging PR");

        let pulls = self.client.pulls(&self.repo.owner, &self.repo.repo);
        let mut builder = pulls.merge(pr_number);
        if let Some(method) = method {
            builder = builder.method(match method {
                MergeMethod::Merge => octocrab::params::pulls::MergeMethod::Merge,
                MergeMethod::Squash => octocrab::params::pulls::MergeMethod::Squash,
                MergeMethod::Rebase => octocrab::params::pulls::MergeMethod::Rebase,
            });
        }

        let result = builder
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Merge failed: {e}")))?;

        let merge_result = MergeResult {
            merged: result.merged,
            sha: result.sha,
            message: result.message,
        };

        debug!(
            pr_number,
            merged = merge_result.merged,
            sha = ?merge_result.sha,
            "merge complete"
        );
        Ok(merge_result)
    }

    fn repo(&self) -> &RepoSlug {
        &self.repo
    }
}
