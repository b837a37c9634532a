//! Pull request resolution
//!
//! A PR number carried by the payload always wins. Otherwise the branch is
//! resolved from the payload and the most recently updated open PR for it is
//! looked up.

use crate::config::Configuration;
use crate::error::Result;
use crate::event::EventPayload;
use crate::flow::{Flow, Stop};
use crate::platform::PlatformService;
use crate::resolve::branch::{BranchFilter, resolve_branch};
use crate::types::PullRequest;
use std::cmp::Reverse;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Build the `owner:branch` head ref used to query PRs
pub fn head_ref(owner: &str, branch: &str) -> String {
    format!("{owner}:{branch}")
}

/// Pick the most recently updated PR
///
/// The sort is stable, so ties keep the listing's order. PRs without a
/// timestamp sort last.
pub fn select_most_recent(prs: &[PullRequest]) -> Option<u64> {
    let mut sorted: Vec<&PullRequest> = prs.iter().collect();
    sorted.sort_by_key(|pr| Reverse(pr.updated_at));
    sorted.first().map(|pr| pr.number)
}

/// Resolve the single PR the event refers to
pub async fn resolve_pull_request(
    payload: &EventPayload,
    config: &Configuration,
    platform: &dyn PlatformService,
) -> Result<Flow<u64>> {
    if let Some(number) = payload.pull_request_number() {
        info!(pr_number = number, "Found pull request in event payload");
        return Ok(ControlFlow::Continue(number));
    }

    let (Some(owner), Some(sha)) = (payload.head_owner(), payload.sha.as_deref()) else {
        return Ok(ControlFlow::Break(Stop::MissingPullRequest));
    };
    info!(sha, "Resolving pull request from commit");

    let filter = BranchFilter::from_config(sha, config);
    let Ok(branch) = resolve_branch(&payload.branches, &filter) else {
        debug!(branches = ?payload.branches, "no branch matched");
        return Ok(ControlFlow::Break(Stop::NoMatchingBranch {
            sha: sha.to_string(),
        }));
    };
    debug!(branch, "found branch");

    let head = head_ref(owner, branch);
    let prs = platform.list_open_prs(&head).await?;
    debug!(
        head = %head,
        numbers = ?prs.iter().map(|pr| pr.number).collect::<Vec<_>>(),
        "found open PRs"
    );

    match select_most_recent(&prs) {
        Some(number) => {
            info!(pr_number = number, head = %head, "Resolved pull request");
            Ok(ControlFlow::Continue(number))
        }
        None => Ok(ControlFlow::Break(Stop::NoOpenPullRequest { head })),
    }
}
