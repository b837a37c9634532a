//! Top-level pipeline: resolve, act, report

use crate::actions::{ActionReport, execute_actions, plan_actions};
use crate::config::Configuration;
use crate::error::Result;
use crate::event::EventContext;
use crate::flow::Flow;
use crate::platform::PlatformService;
use crate::proceed;
use crate::report::RunOutcome;
use crate::resolve::resolve_pull_request;
use std::ops::ControlFlow;
use tracing::{debug, info};

/// Run the whole pipeline against `platform`
pub async fn run(
    config: &Configuration,
    event: &EventContext,
    platform: &dyn PlatformService,
) -> RunOutcome {
    match try_run(config, event, platform).await {
        Ok(ControlFlow::Continue(report)) => RunOutcome::Completed(report),
        Ok(ControlFlow::Break(stop)) => RunOutcome::Stopped(stop),
        Err(e) => RunOutcome::Failed(e),
    }
}

async fn try_run(
    config: &Configuration,
    event: &EventContext,
    platform: &dyn PlatformService,
) -> Result<Flow<ActionReport>> {
    debug!(repo = %event.repo, "starting run");

    let pr_number = proceed!(resolve_pull_request(&event.payload, config, platform).await?);

    let plan = plan_actions(config);
    if plan.is_empty() {
        info!("No actions configured for pull request #{pr_number}");
    } else {
        debug!(
            steps = ?plan.steps.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "planned actions"
        );
    }

    execute_actions(&plan, pr_number, platform).await
}
