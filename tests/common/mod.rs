//! Shared test fixtures

#![allow(dead_code)]

pub mod mock_platform;

pub use mock_platform::{MockPlatformService, PlatformCall};

use chrono::{TimeZone, Utc};
use marvin::config::Configuration;
use marvin::event::{BranchRef, EventContext, EventPayload};
use marvin::types::{PullRequest, RepoSlug};

pub const SHA: &str = "4f1c2b7e9d";

pub fn repo() -> RepoSlug {
    RepoSlug::new("octo", "hello")
}

pub fn mock() -> MockPlatformService {
    MockPlatformService::new(repo())
}

/// Configuration with every action disabled
pub fn config() -> Configuration {
    Configuration {
        token: "test-token".to_string(),
        approve: false,
        merge: false,
        label: None,
        merge_method: None,
        only_protected_branches: false,
        source_branches: vec![],
    }
}

/// Pull-request event payload carrying `number`
pub fn pull_request_event(number: u64) -> EventContext {
    let payload = EventPayload::from_json(&format!(
        r#"{{"action": "opened", "pull_request": {{"number": {number}}}}}"#
    ))
    .unwrap();
    EventContext::new(repo(), payload)
}

/// Status event payload for `SHA` listing `branches`
pub fn status_event(branches: Vec<BranchRef>) -> EventContext {
    let mut payload = EventPayload::from_json(
        r#"{"sha": "4f1c2b7e9d", "state": "success", "repository": {"name": "hello", "owner": {"login": "octo"}}}"#,
    )
    .unwrap();
    payload.branches = branches;
    EventContext::new(repo(), payload)
}

/// Open PR updated `hour` hours into 2026-01-01
pub fn make_pr(number: u64, head: &str, hour: u32) -> PullRequest {
    PullRequest {
        number,
        head_ref: head.to_string(),
        updated_at: Some(Utc.with_ymd_and_hms(2026, 1, 1, hour, 0, 0).unwrap()),
    }
}
