//! Run context
//!
//! Gathers everything a run needs before the pipeline starts.

use crate::cli::Cli;
use marvin::config::Configuration;
use marvin::error::{Error, Result};
use marvin::event::{EventContext, EventPayload};
use marvin::platform::{GitHubService, PlatformService};
use marvin::types::RepoSlug;
use tracing::debug;

/// Shared context for a single run
///
/// This struct encapsulates the setup needed by the pipeline:
/// - Parsing the action inputs
/// - Loading the event payload
/// - Determining the target repository
/// - Creating the platform service
pub struct RunContext {
    /// Immutable run configuration
    pub config: Configuration,
    /// Triggering event
    pub event: EventContext,
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
}

impl RunContext {
    /// Create a new run context
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Configuration::from_inputs(&cli.inputs())?;
        debug!(config = ?config, "loaded configuration");

        // Without an event file there is nothing to resolve; the pipeline
        // turns an empty payload into a neutral stop.
        let payload = match &cli.event_path {
            Some(path) => EventPayload::from_file(path)?,
            None => EventPayload::default(),
        };

        let repo = repo_slug(cli.repository.as_deref(), &payload)?;
        debug!(repo = %repo, "target repository");

        let platform = GitHubService::new(&config.token, repo.clone(), cli.api_url.as_deref())?;

        Ok(Self {
            config,
            event: EventContext::new(repo, payload),
            platform: Box::new(platform),
        })
    }
}

/// `GITHUB_REPOSITORY` wins; the payload's repository is the fallback
fn repo_slug(repository: Option<&str>, payload: &EventPayload) -> Result<RepoSlug> {
    if let Some(repository) = repository.filter(|r| !r.is_empty()) {
        return repository.parse();
    }

    payload
        .repository
        .as_ref()
        .and_then(|r| Some(RepoSlug::new(&r.owner.login, r.name.as_deref()?)))
        .ok_or_else(|| {
            Error::Event("repository unknown: set GITHUB_REPOSITORY or --repository".to_string())
        })
}
