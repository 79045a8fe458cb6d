//! Integration tests for version-gate
//!
//! These tests verify:
//! - Version extraction across the supported manifest formats
//! - Update judgment with auxiliary file confirmation
//! - The full run flow against a stubbed target-branch fetcher

use async_trait::async_trait;
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use version_gate::check::{SemverBump, UpdateChecker, UpdateStatus};
use version_gate::cli::CliArgs;
use version_gate::context::RunContext;
use version_gate::error::{ExtractError, FetchError};
use version_gate::manifest::extract_version;
use version_gate::orchestrator::Orchestrator;
use version_gate::remote::ContentFetcher;

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Fetcher stub serving a fixed target-branch manifest
struct FixedFetcher(Result<String, &'static str>);

#[async_trait]
impl ContentFetcher for FixedFetcher {
    async fn fetch_file(&self, path: &str, reference: &str) -> Result<String, FetchError> {
        match &self.0 {
            Ok(body) => Ok(body.clone()),
            Err(_) => Err(FetchError::not_found(path, reference)),
        }
    }
}

fn gate_args(file: &str, workspace: &Path, aux: &str) -> CliArgs {
    CliArgs::parse_from([
        "version-gate",
        "--file-to-check",
        file,
        "--workspace",
        workspace.to_str().unwrap(),
        "--additional-files-to-check",
        aux,
        "--check-version-update",
    ])
}

fn gate_context(workspace: &Path) -> RunContext {
    RunContext {
        workspace: workspace.to_path_buf(),
        repo: None,
        target_branch: "master".to_string(),
    }
}

mod version_extraction {
    use super::*;

    #[test]
    fn test_extracts_from_all_supported_formats() {
        let pom = r#"<?xml version="1.0"?>
<project>
    <groupId>com.example</groupId>
    <artifactId>widget</artifactId>
    <version>4.5.6</version>
</project>"#;
        assert_eq!(extract_version(pom, "pom.xml").unwrap(), "4.5.6");

        let package = r#"{"name": "widget", "version": "1.2.0"}"#;
        assert_eq!(extract_version(package, "package.json").unwrap(), "1.2.0");

        assert_eq!(extract_version("7.8.9\n", "version.txt").unwrap(), "7.8.9");
    }

    #[test]
    fn test_unsupported_name_is_reported_not_panicked() {
        for name in ["build.gradle", "Cargo.toml", "VERSION", "pom.yaml", ""] {
            let result = extract_version("irrelevant", name);
            assert!(
                matches!(result, Err(ExtractError::UnsupportedFormat { .. })),
                "expected UnsupportedFormat for {:?}",
                name
            );
        }
    }

    #[test]
    fn test_never_invents_a_value() {
        assert!(extract_version(r#"{"name": "x"}"#, "package.json").is_err());
        assert!(extract_version("<project></project>", "pom.xml").is_err());
        assert!(extract_version("   \n", "version.txt").is_err());
    }
}

mod update_check {
    use super::*;

    #[test]
    fn test_identical_versions_never_pass() {
        let dir = create_test_dir();
        let checker = UpdateChecker::new(dir.path());
        for version in ["1.0.0", "0.0.1", "2.3.4-rc.1"] {
            let verdict = checker.check_update(version, version, &[]);
            assert_eq!(verdict.status, UpdateStatus::NotUpgraded);
            assert!(verdict.is_failure());
        }
    }

    #[test]
    fn test_every_bump_kind_passes() {
        let dir = create_test_dir();
        let checker = UpdateChecker::new(dir.path());
        let cases = [
            ("1.0.0", "2.0.0", SemverBump::Major),
            ("1.0.0", "1.1.0", SemverBump::Minor),
            ("1.0.0", "1.0.1", SemverBump::Patch),
            ("1.0.0-alpha.1", "1.0.0-alpha.2", SemverBump::Prerelease),
        ];
        for (old, new, expected) in cases {
            let verdict = checker.check_update(old, new, &[]);
            assert_eq!(verdict.status, UpdateStatus::Upgraded(expected));
            assert!(!verdict.is_failure());
        }
    }

    #[test]
    fn test_aux_mismatch_overrides_successful_bump() {
        let dir = create_test_dir();
        fs::write(dir.path().join("Chart.yaml"), "appVersion: 1.1.0").unwrap();

        let checker = UpdateChecker::new(dir.path());
        let verdict = checker.check_update("1.1.0", "1.2.0", &["Chart.yaml".to_string()]);

        assert_eq!(verdict.status, UpdateStatus::Upgraded(SemverBump::Minor));
        assert!(verdict.is_failure());
        assert_eq!(verdict.violations[0].file, "Chart.yaml");
    }

    #[test]
    fn test_aux_confirmation_passes_when_bump_is_reflected() {
        let dir = create_test_dir();
        fs::write(dir.path().join("Chart.yaml"), "appVersion: 1.2.0").unwrap();
        fs::write(dir.path().join("README.md"), "Latest release: 1.2.0").unwrap();

        let checker = UpdateChecker::new(dir.path());
        let aux = vec!["Chart.yaml".to_string(), "README.md".to_string()];
        let verdict = checker.check_update("1.1.0", "1.2.0", &aux);

        assert!(!verdict.is_failure());
        assert!(verdict.violations.is_empty());
    }
}

mod full_run {
    use super::*;

    #[tokio::test]
    async fn test_package_json_bump_scenario() {
        // feature branch at 1.2.0, target branch at 1.1.0
        let dir = create_test_dir();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "widget", "version": "1.2.0"}"#,
        )
        .unwrap();

        let orchestrator = Orchestrator::with_fetcher(
            gate_args("package.json", dir.path(), ""),
            gate_context(dir.path()),
            Box::new(FixedFetcher(Ok(
                r#"{"name": "widget", "version": "1.1.0"}"#.to_string()
            ))),
        );
        let outcome = orchestrator.run().await;

        assert_eq!(outcome.version.as_deref(), Some("1.2.0"));
        assert!(!outcome.is_failure());
    }

    #[tokio::test]
    async fn test_version_txt_unchanged_scenario() {
        // "2.0.0\n" on both branches fails the run
        let dir = create_test_dir();
        fs::write(dir.path().join("version.txt"), "2.0.0\n").unwrap();

        let orchestrator = Orchestrator::with_fetcher(
            gate_args("version.txt", dir.path(), ""),
            gate_context(dir.path()),
            Box::new(FixedFetcher(Ok("2.0.0\n".to_string()))),
        );
        let outcome = orchestrator.run().await;

        assert!(outcome.is_failure());
        assert_eq!(
            outcome.failures,
            vec!["You have to update the project version!"]
        );
    }

    #[tokio::test]
    async fn test_remote_not_found_scenario() {
        // no manifest on the target branch: check skipped, run succeeds
        let dir = create_test_dir();
        fs::write(dir.path().join("version.txt"), "1.0.0\n").unwrap();

        let orchestrator = Orchestrator::with_fetcher(
            gate_args("version.txt", dir.path(), ""),
            gate_context(dir.path()),
            Box::new(FixedFetcher(Err("not found"))),
        );
        let outcome = orchestrator.run().await;

        assert!(!outcome.is_failure());
        assert_eq!(outcome.version.as_deref(), Some("1.0.0"));
        assert!(outcome
            .notices
            .iter()
            .any(|n| n.contains("Cannot resolve `version.txt` in target branch!")));
    }

    #[tokio::test]
    async fn test_auxiliary_files_checked_after_bump() {
        let dir = create_test_dir();
        fs::write(dir.path().join("pom.xml"), pom_with_version("1.4.0")).unwrap();
        fs::write(dir.path().join("README.md"), "Widget 1.4.0 is out").unwrap();
        fs::write(dir.path().join("install.md"), "mvn install widget:1.3.0").unwrap();

        let orchestrator = Orchestrator::with_fetcher(
            gate_args("pom.xml", dir.path(), "README.md, install.md"),
            gate_context(dir.path()),
            Box::new(FixedFetcher(Ok(pom_with_version("1.3.0")))),
        );
        let outcome = orchestrator.run().await;

        assert!(outcome.is_failure());
        assert_eq!(
            outcome.failures,
            vec!["You have to update the project version in \"install.md\"!"]
        );
    }

    fn pom_with_version(version: &str) -> String {
        format!(
            "<project><artifactId>widget</artifactId><version>{}</version></project>",
            version
        )
    }
}
