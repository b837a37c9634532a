//! Mergeability gate
//!
//! A PR may only be merged when GitHub reports it as mergeable AND its
//! mergeable state is `clean`. Not computed yet, conflicted, pending checks
//! and behind base all block.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::types::{MergeableState, PullRequestDetails};
use tracing::debug;

/// Gate decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Merge may proceed
    Allowed,
    /// Merge must not happen
    Blocked(String),
}

impl Gate {
    /// Whether the merge may proceed
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decide from already-fetched state
pub fn evaluate(details: &PullRequestDetails) -> Gate {
    match (details.mergeable, details.mergeable_state) {
        (Some(true), MergeableState::Clean) => Gate::Allowed,
        (None, _) => Gate::Blocked("mergeable status not computed yet".to_string()),
        (Some(false), state) => Gate::Blocked(format!("has merge conflicts (state: {state})")),
        (Some(true), state) => Gate::Blocked(format!("mergeable state is {state}, not clean")),
    }
}

/// Fetch fresh PR state and decide
///
/// Call right before merging; earlier state may be stale.
pub async fn check(platform: &dyn PlatformService, pr_number: u64) -> Result<Gate> {
    let details = platform.get_pr_details(pr_number).await?;
    let gate = evaluate(&details);
    debug!(pr_number, gate = ?gate, "checked mergeability");
    Ok(gate)
}
