//! Branch resolution - pure selection over the payload's branch list

use crate::config::Configuration;
use crate::event::BranchRef;

/// Filters a branch must pass to be picked
#[derive(Debug, Clone)]
pub struct BranchFilter<'a> {
    /// Event commit SHA the branch head must equal
    pub sha: &'a str,
    /// Exact protection flag required
    pub protected: bool,
    /// Allowed names; empty allows every branch
    pub allow_list: &'a [String],
}

impl<'a> BranchFilter<'a> {
    /// Build the filter for `sha` from the run configuration
    pub fn from_config(sha: &'a str, config: &'a Configuration) -> Self {
        Self {
            sha,
            protected: config.only_protected_branches,
            allow_list: &config.source_branches,
        }
    }

    /// Whether `branch` qualifies
    ///
    /// Protection must match exactly: with `protected == false` a protected
    /// branch is rejected too.
    pub fn matches(&self, branch: &BranchRef) -> bool {
        !branch.name.is_empty()
            && branch.commit.sha == self.sha
            && branch.protected == self.protected
            && (self.allow_list.is_empty() || self.allow_list.contains(&branch.name))
    }
}

/// No branch in the payload passed the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMatchingBranch;

/// Pick the first qualifying branch, in payload order
pub fn resolve_branch<'b>(
    branches: &'b [BranchRef],
    filter: &BranchFilter<'_>,
) -> Result<&'b str, NoMatchingBranch> {
    branches
        .iter()
        .find(|branch| filter.matches(branch))
        .map(|branch| branch.name.as_str())
        .ok_or(NoMatchingBranch)
}
