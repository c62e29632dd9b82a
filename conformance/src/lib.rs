//! ontograph conformance suite.
//!
//! Executable checks of the object contract of `ontograph-objects`, run
//! against built-in Turtle fixtures under a chosen [`ModelConfig`].
//!
//! # Conformance Scope
//!
//! | Validator | Property |
//! |-----------|----------|
//! | `objects/determinism` | Fresh wrappers over one graph state agree |
//! | `objects/identity/triple` | Shared triple means equal, content unread |
//! | `objects/identity/content` | Equal content means equal, any triple |
//! | `objects/detach/equality` | Detached objects equal their wrappers |
//! | `objects/detach/totality` | Detaching needs neither graph nor model |
//! | `objects/annotations/dedup` | Equal bulk annotations collapse |
//! | `objects/annotations/walkthrough` | The `rdfs:label` walkthrough |
//! | `objects/merge` | Merge is associative and refuses unequal objects |
//!
//! Checks that cannot apply under the chosen configuration (for instance
//! annotation checks with bulk annotations disabled) report a warning.
//!
//! # Entry Point
//!
//! ```
//! use ontograph_conformance::{run_all, SuiteOptions};
//!
//! let report = run_all(&SuiteOptions::default()).expect("fixtures parse");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod fixtures;
pub mod report;
pub mod validators;

use ontograph_objects::ModelConfig;

pub use report::{ConformanceReport, Severity, TestResult};

/// Options of one suite run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuiteOptions {
    /// Configuration of every model the validators load.
    pub config: ModelConfig,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Determinism
/// 2. Triple identity and content over triple
/// 3. Cross-representation equality and detach totality
/// 4. Annotation dedup
/// 5. Merge associativity
/// 6. Annotation walkthrough
///
/// # Errors
///
/// Returns an error only if a fixture fails to parse.
pub fn run_all(options: &SuiteOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1. Determinism
    report.extend(validators::determinism::validate(options)?);

    // 2. Identity
    report.extend(validators::identity::validate(options)?);

    // 3. Detach
    report.extend(validators::detach::validate(options)?);

    // 4. Annotation dedup
    report.extend(validators::annotations::validate(options)?);

    // 5. Merge
    report.extend(validators::merge::validate(options)?);

    // 6. Walkthrough
    report.extend(validators::walkthrough::validate(options)?);

    tracing::debug!(
        checks = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}
