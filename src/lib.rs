//! version-gate - project version bump verification library
//!
//! This library provides the core functionality for a CI gate that:
//! - Extracts a project version from a build manifest
//!   (pom.xml, package.json, version.txt)
//! - Fetches the same manifest from a target branch via the GitHub API
//! - Verifies the version was bumped using semantic-version rules
//! - Confirms auxiliary files mention the new version

pub mod check;
pub mod cli;
pub mod context;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod remote;
