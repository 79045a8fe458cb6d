//! version-gate - project version bump gate for CI
//!
//! Extracts a project version from a build manifest (pom.xml, package.json
//! or version.txt), optionally compares it against the target branch via
//! the GitHub API, and fails the run when the version was not bumped.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use version_gate::cli::CliArgs;
use version_gate::context::RunContext;
use version_gate::orchestrator::Orchestrator;
use version_gate::output::ActionReporter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("version-gate v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("File to check: {}", args.file_to_check);
    }

    let context = RunContext::resolve(&args)?;
    if args.verbose {
        eprintln!("Workspace: {}", context.workspace.display());
        eprintln!("Target branch: {}", context.target_branch);
    }

    let reporter = ActionReporter::from_env(args.quiet);
    let orchestrator = Orchestrator::new(args, context);
    let outcome = orchestrator.run().await;

    let mut stdout = io::stdout().lock();
    reporter.report(&outcome, &mut stdout)?;
    stdout.flush()?;

    if outcome.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
