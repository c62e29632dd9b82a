//! Annotation dedup validator.
//!
//! Two textually distinct reification resources encoding the same
//! `(property, value)` pair yield exactly one collected annotation.

use ontograph_graph::{vocab, GraphNode, Triple};
use ontograph_objects::{ObjectKind, OntModel};

use crate::fixtures;
use crate::report::{ConformanceReport, TestResult};
use crate::validators::{failed, load};
use crate::SuiteOptions;

const VALIDATOR: &str = "objects/annotations/dedup";

/// Runs the annotation dedup check.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate(options: &SuiteOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    if !options.config.allow_bulk_annotations {
        report.push(TestResult::warn(VALIDATOR, "Skipped: bulk annotations are disabled"));
        return Ok(report);
    }

    let doc = [
        fixtures::PLAIN_LABEL,
        fixtures::LABEL_COMMENT,
        fixtures::SECOND_LABEL_COMMENT,
    ]
    .concat();
    let model = load("annotated-label", &doc, options)?;
    report.record(
        VALIDATOR,
        "Equal annotations from distinct resources collapse into one",
        dedup(&model),
    );
    Ok(report)
}

fn dedup(model: &OntModel) -> Result<(), String> {
    let statement = Triple::new(
        GraphNode::uri("http://example.org/Foo"),
        GraphNode::uri(vocab::RDFS_LABEL),
        GraphNode::string("x"),
    );
    // split mode keys each axiom to one resource; the unanchored wrapper sees both
    let axiom = model
        .statement(ObjectKind::AnnotationAssertion, &statement)
        .map_err(|e| failed("lookup", e))?;
    let annotations = axiom.annotations().map_err(|e| failed("collection", e))?;
    match annotations.as_slice() {
        [only] if only.origins().count() == 2 => Ok(()),
        [only] => Err(format!(
            "collapsed annotation owns {} resources, expected 2",
            only.origins().count()
        )),
        other => Err(format!("{} annotations collected, expected 1", other.len())),
    }
}
