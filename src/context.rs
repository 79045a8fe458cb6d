//! Run context derived from the CI environment
//!
//! Resolves:
//! - Workspace root (GITHUB_WORKSPACE or CLI override)
//! - Repository owner/name (GITHUB_REPOSITORY or CLI override)
//! - Target branch: pull_request.base.ref from the event payload at
//!   GITHUB_EVENT_PATH, falling back to "master" when no pull-request
//!   context is present

use crate::cli::CliArgs;
use crate::error::ContextError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Branch used when the event payload carries no pull-request base ref
pub const DEFAULT_TARGET_BRANCH: &str = "master";

/// Repository identifier as "owner" and "name"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoSlug {
    /// Parse an "owner/name" slug
    pub fn parse(value: &str) -> Result<Self, ContextError> {
        match value.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ContextError::malformed_repository(value)),
        }
    }
}

/// Resolved context for a single run
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Workspace root containing the checkout
    pub workspace: PathBuf,
    /// Repository slug, present only when one was configured
    pub repo: Option<RepoSlug>,
    /// Branch the change under test will merge into
    pub target_branch: String,
}

impl RunContext {
    /// Resolve the run context from CLI arguments and the environment
    pub fn resolve(args: &CliArgs) -> Result<Self, ContextError> {
        let repo = match &args.repository {
            Some(slug) => Some(RepoSlug::parse(slug)?),
            None => None,
        };

        let target_branch = match &args.target_branch {
            Some(branch) => branch.clone(),
            None => target_branch_from_env()?,
        };

        Ok(Self {
            workspace: args.workspace_root(),
            repo,
            target_branch,
        })
    }

    /// Repository slug, or an error naming the missing configuration
    pub fn require_repo(&self) -> Result<&RepoSlug, ContextError> {
        self.repo
            .as_ref()
            .ok_or_else(|| ContextError::missing("GITHUB_REPOSITORY (or --repository)"))
    }
}

/// Read the target branch from the event payload named by GITHUB_EVENT_PATH.
///
/// An unset variable falls back to the default branch; a payload that is set
/// but unreadable or malformed is an error.
fn target_branch_from_env() -> Result<String, ContextError> {
    match std::env::var_os("GITHUB_EVENT_PATH") {
        Some(path) => target_branch_from_event(Path::new(&path)),
        None => Ok(DEFAULT_TARGET_BRANCH.to_string()),
    }
}

/// Relevant slice of a GitHub event payload
#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    base: Option<BaseRef>,
}

#[derive(Debug, Deserialize)]
struct BaseRef {
    #[serde(rename = "ref")]
    reference: Option<String>,
}

/// Extract pull_request.base.ref from an event payload file
pub fn target_branch_from_event(path: &Path) -> Result<String, ContextError> {
    let content = std::fs::read_to_string(path).map_err(|e| ContextError::EventPayload {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let event: EventPayload =
        serde_json::from_str(&content).map_err(|e| ContextError::EventPayload {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let base_ref = event
        .pull_request
        .and_then(|pr| pr.base)
        .and_then(|base| base.reference);

    Ok(base_ref.unwrap_or_else(|| DEFAULT_TARGET_BRANCH.to_string()))
}
