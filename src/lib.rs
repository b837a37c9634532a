//! marvin - approve, label and merge the pull request behind a GitHub event
//!
//! The pipeline maps an event payload to exactly one pull request, then runs
//! the configured actions against it. Merging is guarded by GitHub's own
//! mergeability classification, checked right before the merge call.
//!
//! Policy-driven early exits are [`flow::Stop`] values threaded back to
//! [`run::run`], never process exits.

pub mod actions;
pub mod config;
pub mod error;
pub mod event;
pub mod flow;
pub mod gate;
pub mod platform;
pub mod report;
pub mod resolve;
pub mod run;
pub mod types;
