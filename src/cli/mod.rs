//! Command-line and environment inputs
//!
//! Every action input can come from a flag or from the `INPUT_*` variable the
//! workflow runner sets.

pub mod context;

use clap::Parser;
use marvin::config::ActionInputs;
use std::path::PathBuf;

/// Approve, label and merge the pull request behind a GitHub event
#[derive(Parser, Debug)]
#[command(name = "marvin")]
#[command(version)]
pub struct Cli {
    /// API token
    #[arg(long, env = "INPUT_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Submit an approving review ("true" to enable)
    #[arg(long, env = "INPUT_APPROVE", default_value = "")]
    pub approve: String,

    /// Merge the pull request ("true" to enable)
    #[arg(long, env = "INPUT_MERGE", default_value = "")]
    pub merge: String,

    /// Label to attach
    #[arg(long, env = "INPUT_LABEL", default_value = "")]
    pub label: String,

    /// Merge method: merge, squash or rebase
    #[arg(long, env = "INPUT_MERGEMETHOD", default_value = "")]
    pub merge_method: String,

    /// Only consider protected branches ("true") or only unprotected ones
    #[arg(long, env = "INPUT_ONLYPROTECTEDBRANCHES", default_value = "")]
    pub only_protected_branches: String,

    /// Comma-separated branch allow-list
    #[arg(long, env = "INPUT_SOURCEBRANCHES", default_value = "")]
    pub source_branches: String,

    /// Path to the event payload JSON
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Repository in format owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// File the step result is appended to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Runner debug flag ("1" enables debug logging)
    #[arg(long, env = "RUNNER_DEBUG", default_value = "")]
    pub runner_debug: String,
}

impl Cli {
    /// Raw action inputs
    pub fn inputs(&self) -> ActionInputs {
        ActionInputs {
            token: self.token.clone(),
            approve: self.approve.clone(),
            merge: self.merge.clone(),
            label: self.label.clone(),
            merge_method: self.merge_method.clone(),
            only_protected_branches: self.only_protected_branches.clone(),
            source_branches: self.source_branches.clone(),
        }
    }

    /// Whether the runner asked for debug output
    pub fn is_debug(&self) -> bool {
        self.runner_debug == "1"
    }
}
