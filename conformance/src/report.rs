//! Outcomes of the conformance checks and the report that collects them.
//!
//! A report serializes to JSON for the `--json` mode of the binary; the
//! text mode reads the same fields.

use serde::Serialize;

/// How a check ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The property held.
    Pass,
    /// The check did not run under the current configuration.
    Warning,
    /// The property was violated.
    Failure,
}

/// The outcome of one check.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Slash-separated check name, e.g. `objects/merge/associativity`.
    pub validator: String,
    /// One-line summary.
    pub message: String,
    /// How the check ended.
    pub severity: Severity,
    /// Continuation lines of a multi-line failure message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    fn new(severity: Severity, validator: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut lines = message.lines().map(str::to_owned);
        let summary = lines.next().unwrap_or_default();
        Self {
            validator: validator.into(),
            message: summary,
            severity,
            details: lines.collect(),
        }
    }

    /// A check whose property held.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Pass, validator, message)
    }

    /// A violated property. Lines after the first become `details`.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Failure, validator, message)
    }

    /// A check skipped under the current configuration.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, validator, message)
    }

    /// Returns true for [`Severity::Failure`].
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Every result of a suite run, in the order the checks ran.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// Results in run order.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Moves the results of a validator's report into this one.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Records a check: `passed` is the message on success, the error
    /// string becomes the failure message.
    pub fn record(&mut self, validator: &str, passed: &str, outcome: Result<(), String>) {
        self.push(match outcome {
            Ok(()) => TestResult::pass(validator, passed),
            Err(message) => TestResult::fail(validator, message),
        });
    }

    /// Number of results with `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if no check failed. Skipped checks do not count against
    /// the run.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn warnings_do_not_fail_the_report() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("a", "ok"));
        report.push(TestResult::warn("b", "skipped"));
        assert!(report.all_passed());
        report.record("c", "ok", Err("broken".to_owned()));
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.count(Severity::Pass), 1);
    }

    #[test]
    fn multi_line_failures_split_into_details() {
        let result = TestResult::fail("objects/merge", "merge differs\nleft: A\nright: B");
        assert_eq!(result.message, "merge differs");
        assert_eq!(result.details, vec!["left: A", "right: B"]);
    }

    #[test]
    fn serializes_without_empty_details() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("objects/determinism", "ok"));
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"results":[{"validator":"objects/determinism","message":"ok","severity":"pass"}]}"#
        );
    }
}
