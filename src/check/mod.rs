//! Version update judgment
//!
//! This module decides whether a version change is an acceptable upgrade:
//! - Step 1: semantic comparison of the target-branch version against the
//!   branch-under-test version
//! - Step 2: auxiliary-file confirmation, only entered when step 1 saw an
//!   upgrade - every listed file must contain the new version and must not
//!   contain the old one
//!
//! The checker never mutates its inputs; its only side effect is reading
//! auxiliary file bodies from the workspace.

mod semver_diff;

pub use semver_diff::{diff, parse_lenient, SemverBump};

use std::path::PathBuf;

/// Why an auxiliary file failed confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Body does not contain the new version, or still contains the old one
    StaleVersion,
    /// Body could not be read at all
    Unreadable(String),
}

/// A single auxiliary file that does not reflect the version bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryViolation {
    /// File path as listed in the configuration
    pub file: String,
    /// What went wrong
    pub kind: ViolationKind,
}

impl AuxiliaryViolation {
    /// User-facing failure message naming the offending file
    pub fn message(&self) -> String {
        format!("You have to update the project version in \"{}\"!", self.file)
    }
}

/// Outcome of the primary semantic comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The new version is a strict semver upgrade of the old one
    Upgraded(SemverBump),
    /// Equal versions or a downgrade
    NotUpgraded,
    /// One of the versions is not valid semver, so no judgment is possible
    Indeterminate,
}

/// Full verdict of a version update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVerdict {
    /// Outcome of the semantic comparison
    pub status: UpdateStatus,
    /// Auxiliary files that do not reflect the bump; only populated when
    /// the comparison itself succeeded
    pub violations: Vec<AuxiliaryViolation>,
}

impl UpdateVerdict {
    fn upgraded(bump: SemverBump, violations: Vec<AuxiliaryViolation>) -> Self {
        Self {
            status: UpdateStatus::Upgraded(bump),
            violations,
        }
    }

    fn not_upgraded() -> Self {
        Self {
            status: UpdateStatus::NotUpgraded,
            violations: Vec::new(),
        }
    }

    fn indeterminate() -> Self {
        Self {
            status: UpdateStatus::Indeterminate,
            violations: Vec::new(),
        }
    }

    /// Whether this verdict must fail the run.
    ///
    /// Indeterminate is non-fatal: with no comparable version history the
    /// check is skipped rather than failed.
    pub fn is_failure(&self) -> bool {
        match self.status {
            UpdateStatus::NotUpgraded => true,
            UpdateStatus::Upgraded(_) => !self.violations.is_empty(),
            UpdateStatus::Indeterminate => false,
        }
    }

    /// User-facing failure messages, in check order
    pub fn failure_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if self.status == UpdateStatus::NotUpgraded {
            messages.push("You have to update the project version!".to_string());
        }
        for violation in &self.violations {
            messages.push(violation.message());
        }
        messages
    }
}

/// Version update checker bound to a workspace root
pub struct UpdateChecker {
    /// Root the auxiliary file paths are resolved against
    workspace: PathBuf,
}

impl UpdateChecker {
    /// Create a checker resolving auxiliary files against `workspace`
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    /// Check whether `new_version` is an acceptable upgrade of
    /// `old_version`, confirming `aux_files` when the bump succeeded
    pub fn check_update(
        &self,
        old_version: &str,
        new_version: &str,
        aux_files: &[String],
    ) -> UpdateVerdict {
        let (old, new) = match (parse_lenient(old_version), parse_lenient(new_version)) {
            (Some(old), Some(new)) => (old, new),
            _ => return UpdateVerdict::indeterminate(),
        };

        let bump = match diff(&old, &new) {
            Some(bump) => bump,
            None => return UpdateVerdict::not_upgraded(),
        };

        let mut violations = Vec::new();
        for file in aux_files {
            if let Some(kind) = self.check_auxiliary_file(file, old_version, new_version) {
                violations.push(AuxiliaryViolation {
                    file: file.clone(),
                    kind,
                });
            }
        }

        UpdateVerdict::upgraded(bump, violations)
    }

    /// Confirm one auxiliary file reflects the bump; `None` means it does
    fn check_auxiliary_file(
        &self,
        file: &str,
        old_version: &str,
        new_version: &str,
    ) -> Option<ViolationKind> {
        let path = self.workspace.join(file.trim());
        let body = match std::fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) => return Some(ViolationKind::Unreadable(e.to_string())),
        };

        if !body.contains(new_version) || body.contains(old_version) {
            return Some(ViolationKind::StaleVersion);
        }
        None
    }
}
