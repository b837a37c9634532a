//! Run configuration
//!
//! Built once from the raw action inputs and handed by reference to every
//! component that needs it. Never mutated afterwards.

use crate::error::{Error, Result};
use crate::types::MergeMethod;

/// Raw action inputs, exactly as the workflow runner provides them
///
/// Booleans are the strings the runner hands over; only `"true"` is truthy.
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    /// API token
    pub token: String,
    /// `approve` input
    pub approve: String,
    /// `merge` input
    pub merge: String,
    /// `label` input
    pub label: String,
    /// `mergeMethod` input
    pub merge_method: String,
    /// `onlyProtectedBranches` input
    pub only_protected_branches: String,
    /// `sourceBranches` input (comma-separated)
    pub source_branches: String,
}

/// Immutable run configuration
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    /// API token
    pub token: String,
    /// Submit an approving review
    pub approve: bool,
    /// Merge once the gate allows it
    pub merge: bool,
    /// Label to attach
    pub label: Option<String>,
    /// Merge strategy; `None` leaves the choice to GitHub
    pub merge_method: Option<MergeMethod>,
    /// Required value of the branch protection flag
    pub only_protected_branches: bool,
    /// Branch allow-list; empty means no filtering
    pub source_branches: Vec<String>,
}

impl Configuration {
    /// Parse raw inputs into a configuration
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self> {
        if inputs.token.trim().is_empty() {
            return Err(Error::Config("input 'token' is required".to_string()));
        }

        let merge_method = match inputs.merge_method.trim() {
            "" => None,
            method => Some(method.parse()?),
        };

        Ok(Self {
            token: inputs.token.clone(),
            approve: is_true(&inputs.approve),
            merge: is_true(&inputs.merge),
            label: Some(inputs.label.trim())
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            merge_method,
            only_protected_branches: is_true(&inputs.only_protected_branches),
            source_branches: parse_branch_list(&inputs.source_branches),
        })
    }

    /// True when no action flag is set and the run will make no mutations
    pub const fn is_noop(&self) -> bool {
        !self.approve && !self.merge && self.label.is_none()
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("token", &"***")
            .field("approve", &self.approve)
            .field("merge", &self.merge)
            .field("label", &self.label)
            .field("merge_method", &self.merge_method)
            .field("only_protected_branches", &self.only_protected_branches)
            .field("source_branches", &self.source_branches)
            .finish()
    }
}

fn is_true(value: &str) -> bool {
    value == "true"
}

fn parse_branch_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
