//! `ontograph-conformance`: checks the object contract against built-in fixtures.
//!
//! Runs the complete conformance suite:
//! - Determinism and identity of graph-bound wrappers
//! - Cross-representation equality and detach totality
//! - Bulk annotation dedup and the label walkthrough
//! - Merge associativity
//!
//! **Usage:**
//! ```text
//! ontograph-conformance [--config <path>] [--json]
//! ```
//!
//! Log output is controlled by `RUST_LOG` (default `warn`). Exits non-zero
//! if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use ontograph_conformance::{run_all, ConformanceReport, Severity, SuiteOptions};
use ontograph_objects::ModelConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the ontograph conformance suite.
#[derive(Parser)]
#[command(
    name = "ontograph-conformance",
    about = "Check graph-backed OWL objects against the equality, annotation, merge and detach contract"
)]
struct Args {
    /// TOML model configuration to run the suite under (default: built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ModelConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => ModelConfig::default(),
    };
    tracing::debug!(?config, "running conformance suite");

    let report = run_all(&SuiteOptions { config })?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        print_text(&report);
    }

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }
    Ok(())
}

fn print_text(report: &ConformanceReport) {
    println!("ontograph Conformance Report");
    println!("============================");
    println!();

    for result in &report.results {
        let status = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{}] {}: {}", status, result.validator, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        report.failure_count()
    );
    if report.all_passed() {
        println!("Conformance PASSED.");
    }
}
