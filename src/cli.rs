//! CLI argument parsing module for version-gate
//!
//! Arguments mirror the action's inputs and fall back to the `INPUT_*`
//! environment variables GitHub Actions sets for a step, so the binary can
//! be invoked either directly or from a workflow.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Project version bump gate for CI
#[derive(Parser, Debug, Clone)]
#[command(
    name = "version-gate",
    version,
    about = "Extracts a project version from a manifest and verifies it was bumped against a target branch"
)]
pub struct CliArgs {
    /// GitHub API token used to fetch the target-branch manifest
    #[arg(long, env = "INPUT_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,

    /// Manifest path, relative to the workspace root (pom.xml, package.json or version.txt)
    #[arg(long, env = "INPUT_FILE_TO_CHECK")]
    pub file_to_check: String,

    /// Comma-separated list of additional files whose bodies must reflect the bump
    #[arg(long, env = "INPUT_ADDITIONAL_FILES_TO_CHECK", default_value = "")]
    pub additional_files_to_check: String,

    /// Compare the local version against the target branch and fail when no bump occurred
    #[arg(
        long,
        env = "INPUT_CHECK_VERSION_UPDATE",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub check_version_update: bool,

    /// Workspace root containing the checkout (default: current directory)
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Repository slug "owner/name" used for the target-branch fetch
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Target branch override; defaults to the pull-request base ref, then "master"
    #[arg(long)]
    pub target_branch: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Split the comma-separated auxiliary file list, trimming entries and
    /// dropping empty ones
    pub fn additional_files(&self) -> Vec<String> {
        self.additional_files_to_check
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Workspace root, defaulting to the current directory
    pub fn workspace_root(&self) -> PathBuf {
        self.workspace.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base_args() -> Vec<&'static str> {
        vec!["version-gate", "--file-to-check", "package.json"]
    }

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(base_args());
        assert_eq!(args.file_to_check, "package.json");
        assert_eq!(args.token, "");
        assert_eq!(args.additional_files_to_check, "");
        assert!(!args.check_version_update);
        assert!(args.workspace.is_none());
        assert!(args.repository.is_none());
        assert!(args.target_branch.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_check_version_update_bare_flag() {
        let mut argv = base_args();
        argv.push("--check-version-update");
        let args = CliArgs::parse_from(argv);
        assert!(args.check_version_update);
    }

    #[test]
    fn test_check_version_update_explicit_false() {
        let mut argv = base_args();
        argv.push("--check-version-update");
        argv.push("false");
        let args = CliArgs::parse_from(argv);
        assert!(!args.check_version_update);
    }

    #[test]
    fn test_additional_files_empty() {
        let args = CliArgs::parse_from(base_args());
        assert!(args.additional_files().is_empty());
    }

    #[test]
    fn test_additional_files_split_and_trim() {
        let mut argv = base_args();
        argv.push("--additional-files-to-check");
        argv.push("README.md, docs/install.md ,,Chart.yaml");
        let args = CliArgs::parse_from(argv);
        assert_eq!(
            args.additional_files(),
            vec!["README.md", "docs/install.md", "Chart.yaml"]
        );
    }

    #[test]
    fn test_workspace_root_default() {
        let args = CliArgs::parse_from(base_args());
        assert_eq!(args.workspace_root(), PathBuf::from("."));
    }

    #[test]
    fn test_workspace_root_explicit() {
        let mut argv = base_args();
        argv.push("--workspace");
        argv.push("/checkout");
        let args = CliArgs::parse_from(argv);
        assert_eq!(args.workspace_root(), PathBuf::from("/checkout"));
    }

    #[test]
    fn test_repository_and_target_branch() {
        let mut argv = base_args();
        argv.extend(["--repository", "octo/widget", "--target-branch", "main"]);
        let args = CliArgs::parse_from(argv);
        assert_eq!(args.repository.as_deref(), Some("octo/widget"));
        assert_eq!(args.target_branch.as_deref(), Some("main"));
    }

    #[test]
    fn test_quiet_flags() {
        let mut argv = base_args();
        argv.push("-q");
        let args = CliArgs::parse_from(argv);
        assert!(args.quiet);
    }
}
