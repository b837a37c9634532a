//! Action sequencer
//!
//! Two-phase pattern:
//! 1. Plan - create `ActionPlan` from the configuration (pure, testable)
//! 2. Execute - approve, label, merge in that order (effectful)

mod execute;
mod plan;

pub use execute::{ActionReport, execute_actions};
pub use plan::{Action, ActionPlan, plan_actions};
