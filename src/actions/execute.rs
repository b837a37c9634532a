//! Action execution - effectful operations
//!
//! Runs an `ActionPlan` against the platform one step at a time. Each call is
//! awaited before the next starts, and a neutral stop ends the sequence.

use crate::actions::plan::{Action, ActionPlan};
use crate::error::Result;
use crate::flow::{Flow, Stop};
use crate::gate::{self, Gate};
use crate::platform::PlatformService;
use crate::proceed;
use crate::types::MergeResult;
use std::ops::ControlFlow;
use tracing::info;

/// What the sequence did to the PR
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionReport {
    /// PR the actions ran against
    pub pr_number: u64,
    /// Whether an approving review was submitted
    pub approved: bool,
    /// Label that was attached
    pub labeled: Option<String>,
    /// Merge outcome, when a merge happened
    pub merge: Option<MergeResult>,
}

/// Execute the action plan (EFFECTFUL)
pub async fn execute_actions(
    plan: &ActionPlan,
    pr_number: u64,
    platform: &dyn PlatformService,
) -> Result<Flow<ActionReport>> {
    let mut report = ActionReport {
        pr_number,
        ..ActionReport::default()
    };

    for step in &plan.steps {
        match step {
            Action::Approve => {
                info!("Creating approving review for pull request #{pr_number}");
                platform.approve_pr(pr_number).await?;
                info!("Approved pull request #{pr_number}");
                report.approved = true;
            }
            Action::Label(label) => {
                info!("Adding label '{label}' to pull request #{pr_number}");
                platform.add_label(pr_number, label).await?;
                report.labeled = Some(label.clone());
            }
            Action::Merge(method) => {
                proceed!(ensure_mergeable(platform, pr_number).await?);

                info!("Merging pull request #{pr_number}");
                let result = platform.merge_pr(pr_number, *method).await?;
                if !result.merged {
                    return Ok(ControlFlow::Break(Stop::MergeDeclined {
                        number: pr_number,
                        message: result.message,
                    }));
                }
                let sha_display = result.sha.as_deref().unwrap_or("(no sha)");
                info!("Merged pull request #{pr_number}: {sha_display}");
                report.merge = Some(result);
            }
        }
    }

    Ok(ControlFlow::Continue(report))
}

async fn ensure_mergeable(platform: &dyn PlatformService, pr_number: u64) -> Result<Flow<()>> {
    match gate::check(platform, pr_number).await? {
        Gate::Allowed => Ok(ControlFlow::Continue(())),
        Gate::Blocked(reason) => Ok(ControlFlow::Break(Stop::NotMergeable {
            number: pr_number,
            reason,
        })),
    }
}
