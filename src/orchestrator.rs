//! Run orchestration for the version gate
//!
//! Workflow: read local manifest → extract version → fetch the target-branch
//! manifest → extract again → judge the update → report.
//!
//! Error policy (asymmetric, kept deliberately):
//! - extraction failures on the local manifest fail the run
//! - anything that goes wrong on the target-branch side (fetch failure,
//!   remote extraction failure) skips the comparison without failing
//! - a NotUpgraded or auxiliary-mismatch verdict fails the run
//!
//! The outcome is an explicit value threaded back to the caller; there is
//! no process-global failure flag.

use crate::check::{UpdateChecker, UpdateStatus};
use crate::cli::CliArgs;
use crate::context::RunContext;
use crate::error::ExtractError;
use crate::manifest::extract_version;
use crate::remote::{ContentFetcher, GitHubClient};

/// Result of a single gate run
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// Extracted version from the local manifest; set whenever extraction
    /// succeeded, even if the run later fails
    pub version: Option<String>,
    /// User-facing failure messages; non-empty means the run failed
    pub failures: Vec<String>,
    /// Informational messages (skipped checks, comparison details)
    pub notices: Vec<String>,
}

impl RunOutcome {
    /// Whether the run must be marked failed
    pub fn is_failure(&self) -> bool {
        !self.failures.is_empty()
    }

    fn fail(mut self, message: impl Into<String>) -> Self {
        self.failures.push(message.into());
        self
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }
}

/// Orchestrator coordinating one gate run
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Resolved CI context
    context: RunContext,
    /// Fetcher override; when absent a GitHubClient is built on demand
    fetcher: Option<Box<dyn ContentFetcher + Send + Sync>>,
}

impl Orchestrator {
    /// Create an orchestrator that talks to the real GitHub API
    pub fn new(args: CliArgs, context: RunContext) -> Self {
        Self {
            args,
            context,
            fetcher: None,
        }
    }

    /// Create an orchestrator with a custom content fetcher (for testing)
    pub fn with_fetcher(
        args: CliArgs,
        context: RunContext,
        fetcher: Box<dyn ContentFetcher + Send + Sync>,
    ) -> Self {
        Self {
            args,
            context,
            fetcher: Some(fetcher),
        }
    }

    /// Run the gate
    pub async fn run(&self) -> RunOutcome {
        let mut outcome = RunOutcome::default();

        // Step 1: extract the version from the local (branch-under-test) manifest
        let local_path = self.context.workspace.join(&self.args.file_to_check);
        let content = match std::fs::read_to_string(&local_path) {
            Ok(content) => content,
            Err(e) => {
                return outcome.fail(ExtractError::read_error(local_path, e).to_string());
            }
        };

        let local_version = match extract_version(&content, &self.args.file_to_check) {
            Ok(version) => version,
            Err(e) => return outcome.fail(e.to_string()),
        };
        outcome.version = Some(local_version.clone());

        if !self.args.check_version_update {
            return outcome;
        }

        // Step 2: fetch the same manifest from the target branch
        let remote_content = match self.fetch_target_manifest(&mut outcome).await {
            Fetched::Content(content) => content,
            Fetched::Skipped => return outcome,
            Fetched::Fatal(message) => return outcome.fail(message),
        };

        // Step 3: extract the target-branch version; failures here mean
        // there is no comparable history, so the check is skipped
        let target_version = match extract_version(&remote_content, &self.args.file_to_check) {
            Ok(version) => version,
            Err(e) => {
                outcome.notice(skip_message(&self.args.file_to_check, &e.to_string()));
                return outcome;
            }
        };

        // Step 4: judge the update
        let checker = UpdateChecker::new(&self.context.workspace);
        let verdict =
            checker.check_update(&target_version, &local_version, &self.args.additional_files());

        match verdict.status {
            UpdateStatus::Indeterminate => {
                outcome.notice(format!(
                    "Cannot compare `{}` and `{}` as semantic versions! No version check required.",
                    target_version, local_version
                ));
            }
            UpdateStatus::NotUpgraded => {
                outcome.notice(format!("targetVersion: {}", target_version));
                outcome.notice(format!("branchVersion: {}", local_version));
            }
            UpdateStatus::Upgraded(_) => {}
        }

        outcome.failures.extend(verdict.failure_messages());
        outcome
    }

    /// Fetch the manifest from the target branch, classifying the result
    async fn fetch_target_manifest(&self, outcome: &mut RunOutcome) -> Fetched {
        let path = &self.args.file_to_check;
        let branch = &self.context.target_branch;

        let result = match &self.fetcher {
            Some(fetcher) => fetcher.fetch_file(path, branch).await,
            None => {
                let slug = match self.context.require_repo() {
                    Ok(slug) => slug,
                    Err(e) => return Fetched::Fatal(e.to_string()),
                };
                match GitHubClient::new(&slug.owner, &slug.name, &self.args.token) {
                    Ok(client) => client.fetch_file(path, branch).await,
                    Err(e) => Err(e),
                }
            }
        };

        match result {
            Ok(content) => Fetched::Content(content),
            Err(e) => {
                outcome.notice(skip_message(path, &e.to_string()));
                Fetched::Skipped
            }
        }
    }
}

/// Outcome of the target-branch fetch step
enum Fetched {
    /// Raw manifest content from the target branch
    Content(String),
    /// No comparable history; the check is skipped
    Skipped,
    /// Misconfiguration that must fail the run
    Fatal(String),
}

fn skip_message(file: &str, error: &str) -> String {
    format!(
        "Cannot resolve `{}` in target branch! No version check required. ErrMsg => {}",
        file, error
    )
}
