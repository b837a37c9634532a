//! Mapping an event to exactly one pull request
//!
//! Two steps:
//! 1. Branch - pick one branch from the payload (pure)
//! 2. Pull request - direct reference, or newest open PR for the branch

mod branch;
mod pull_request;

pub use branch::{BranchFilter, NoMatchingBranch, resolve_branch};
pub use pull_request::{head_ref, resolve_pull_request, select_most_recent};
