//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use marvin::error::{Error, Result};
use marvin::platform::PlatformService;
use marvin::types::{
    MergeMethod, MergeResult, MergeableState, PullRequest, PullRequestDetails, RepoSlug,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded platform call, in the order it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    ListOpenPrs(String),
    GetPrDetails(u64),
    Approve(u64),
    AddLabel(u64, String),
    Merge(u64, Option<MergeMethod>),
}

impl PlatformCall {
    /// Whether this call changes remote state
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Approve(_) | Self::AddLabel(..) | Self::Merge(..))
    }
}

/// Simple mock platform service for testing
///
/// Features:
/// - Ordered call log for sequencing assertions
/// - Configurable responses per head ref / PR
/// - Error injection for failure path testing
pub struct MockPlatformService {
    repo: RepoSlug,
    list_responses: Mutex<HashMap<String, Vec<PullRequest>>>,
    pr_details_responses: Mutex<HashMap<u64, PullRequestDetails>>,
    merge_responses: Mutex<HashMap<u64, MergeResult>>,
    calls: Mutex<Vec<PlatformCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    error_on_details: Mutex<Option<String>>,
    error_on_approve: Mutex<Option<String>>,
    error_on_label: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock targeting `repo`
    pub fn new(repo: RepoSlug) -> Self {
        Self {
            repo,
            list_responses: Mutex::new(HashMap::new()),
            pr_details_responses: Mutex::new(HashMap::new()),
            merge_responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_details: Mutex::new(None),
            error_on_approve: Mutex::new(None),
            error_on_label: Mutex::new(None),
            error_on_merge: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `list_open_prs` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_pr_details` return an error
    pub fn fail_details(&self, msg: &str) {
        *self.error_on_details.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `approve_pr` return an error
    pub fn fail_approve(&self, msg: &str) {
        *self.error_on_approve.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_label` return an error
    pub fn fail_label(&self, msg: &str) {
        *self.error_on_label.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pr` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    // === Canned responses ===

    /// Set the open PRs returned for a head ref
    pub fn set_open_prs(&self, head: &str, prs: Vec<PullRequest>) {
        self.list_responses
            .lock()
            .unwrap()
            .insert(head.to_string(), prs);
    }

    /// Set the PR state returned by `get_pr_details`
    pub fn set_pr_state(&self, pr_number: u64, mergeable: Option<bool>, state: MergeableState) {
        self.pr_details_responses.lock().unwrap().insert(
            pr_number,
            PullRequestDetails {
                number: pr_number,
                title: format!("PR {pr_number}"),
                head_ref: "feature".to_string(),
                html_url: format!("https://github.com/test/repo/pull/{pr_number}"),
                mergeable,
                mergeable_state: state,
                updated_at: None,
            },
        );
    }

    /// Helper to set up a PR the gate will let through
    pub fn setup_mergeable_pr(&self, pr_number: u64) {
        self.set_pr_state(pr_number, Some(true), MergeableState::Clean);
    }

    /// Set the response for `merge_pr` for a specific PR
    pub fn set_merge_response(&self, pr_number: u64, result: MergeResult) {
        self.merge_responses
            .lock()
            .unwrap()
            .insert(pr_number, result);
    }

    // === Call verification methods ===

    /// All calls, in order
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that changed remote state
    pub fn mutations(&self) -> Vec<PlatformCall> {
        self.calls()
            .into_iter()
            .filter(PlatformCall::is_mutation)
            .collect()
    }

    /// Assert that `merge_pr` was NOT called
    pub fn assert_merge_not_called(&self) {
        let calls = self.calls();
        assert!(
            !calls.iter().any(|c| matches!(c, PlatformCall::Merge(..))),
            "Expected merge_pr NOT to be called but it was: {calls:?}"
        );
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn injected(slot: &Mutex<Option<String>>) -> Result<()> {
        match slot.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::GitHubApi(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn list_open_prs(&self, head: &str) -> Result<Vec<PullRequest>> {
        self.record(PlatformCall::ListOpenPrs(head.to_string()));
        Self::injected(&self.error_on_list)?;

        let responses = self.list_responses.lock().unwrap();
        Ok(responses.get(head).cloned().unwrap_or_default())
    }

    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        self.record(PlatformCall::GetPrDetails(pr_number));
        Self::injected(&self.error_on_details)?;

        let responses = self.pr_details_responses.lock().unwrap();
        responses.get(&pr_number).cloned().ok_or_else(|| {
            Error::GitHubApi(format!(
                "get_pr_details: no response configured for PR #{pr_number}"
            ))
        })
    }

    async fn approve_pr(&self, pr_number: u64) -> Result<()> {
        self.record(PlatformCall::Approve(pr_number));
        Self::injected(&self.error_on_approve)
    }

    async fn add_label(&self, pr_number: u64, label: &str) -> Result<()> {
        self.record(PlatformCall::AddLabel(pr_number, label.to_string()));
        Self::injected(&self.error_on_label)
    }

    async fn merge_pr(&self, pr_number: u64, method: Option<MergeMethod>) -> Result<MergeResult> {
        self.record(PlatformCall::Merge(pr_number, method));
        Self::injected(&self.error_on_merge)?;

        let responses = self.merge_responses.lock().unwrap();
        Ok(responses.get(&pr_number).cloned().unwrap_or(MergeResult {
            merged: true,
            sha: Some(format!("merged_sha_{pr_number}")),
            message: None,
        }))
    }

    fn repo(&self) -> &RepoSlug {
        &self.repo
    }
}
