//! Action planning - pure functions for deciding what to do
//!
//! No I/O happens here. The plan only depends on the configuration, so the
//! order and gating of steps can be tested without a platform.

use crate::config::Configuration;
use crate::types::MergeMethod;

/// A single step in the action plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit an approving review
    Approve,
    /// Attach a label
    Label(String),
    /// Merge after the mergeability gate allows it
    Merge(Option<MergeMethod>),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::Label(label) => write!(f, "label '{label}'"),
            Self::Merge(Some(method)) => write!(f, "merge ({method})"),
            Self::Merge(None) => write!(f, "merge"),
        }
    }
}

/// Ordered steps to perform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPlan {
    /// Steps in execution order: approve, label, merge
    pub steps: Vec<Action>,
}

impl ActionPlan {
    /// Check if the plan performs no mutation
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Create the action plan (PURE)
///
/// Disabled flags contribute no step at all.
#[must_use]
pub fn plan_actions(config: &Configuration) -> ActionPlan {
    let mut steps = Vec::new();

    if config.approve {
        steps.push(Action::Approve);
    }
    if let Some(label) = &config.label {
        steps.push(Action::Label(label.clone()));
    }
    if config.merge {
        steps.push(Action::Merge(config.merge_method));
    }

    ActionPlan { steps }
}
