//! Identity validators.
//!
//! - Triple identity: two wrappers of a kind that is unique per triple and
//!   share their triple are equal without materializing content.
//! - Content over triple: wrappers on different triples with identical
//!   canonical content are equal, whatever their history.

use ontograph_graph::{vocab, Graph, GraphNode, Triple};
use ontograph_objects::{objects_equal, ObjectKind, OntModel, OntObject};

use crate::fixtures;
use crate::report::{ConformanceReport, TestResult};
use crate::validators::{failed, load, parse_fixture};
use crate::SuiteOptions;

/// Runs the triple-identity and content-over-triple checks.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate(options: &SuiteOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let validator = "objects/identity/triple";
    let kind = ObjectKind::AnnotationAssertion;
    if options.config.is_unique_per_triple(kind) {
        let model = load("annotated-label", fixtures::PLAIN_LABEL, options)?;
        report.record(
            validator,
            "Wrappers sharing a triple are equal before any content is read",
            triple_identity(&model, kind),
        );
    } else {
        report.push(TestResult::warn(
            validator,
            format!("Skipped: {kind} is not unique per triple under this configuration"),
        ));
    }

    let validator = "objects/identity/content";
    if options.config.allow_bulk_annotations {
        let model = load("comment-copies", fixtures::COMMENT_COPIES, options)?;
        let appended = parse_fixture("copy-sub-annotation", fixtures::COPY_SUB_ANNOTATION)?;
        report.record(
            validator,
            "Copies on different triples compare by canonical content",
            content_over_triple(&model, &appended),
        );
    } else {
        report.push(TestResult::warn(
            validator,
            "Skipped: bulk annotations are disabled",
        ));
    }

    Ok(report)
}

fn label_statement() -> Triple {
    Triple::new(
        GraphNode::uri("http://example.org/Foo"),
        GraphNode::uri(vocab::RDFS_LABEL),
        GraphNode::string("x"),
    )
}

fn triple_identity(model: &OntModel, kind: ObjectKind) -> Result<(), String> {
    let triple = label_statement();
    let a = model.statement(kind, &triple).map_err(|e| failed("lookup", e))?;
    let b = model.statement(kind, &triple).map_err(|e| failed("lookup", e))?;
    if a.ptr_eq(&b) {
        return Err("factory returned one shared instance".to_owned());
    }
    if !objects_equal(&a, &b).map_err(|e| failed("equality", e))? {
        return Err("wrappers on the same triple are not equal".to_owned());
    }
    if a.is_content_cached() || b.is_content_cached() {
        return Err("equality materialized content".to_owned());
    }
    Ok(())
}

fn copy(model: &OntModel, label: &str) -> Result<OntObject, String> {
    let triple = Triple::new(
        GraphNode::blank(label),
        GraphNode::uri(vocab::RDFS_COMMENT),
        GraphNode::string("same"),
    );
    model
        .statement(ObjectKind::Annotation, &triple)
        .map_err(|e| failed(&format!("annotation on _:{label}"), e))
}

fn content_over_triple(model: &OntModel, appended: &Graph) -> Result<(), String> {
    let equal = |a: &OntObject, b: &OntObject| objects_equal(a, b).map_err(|e| failed("equality", e));

    model.update(|graph| graph.extend(appended.iter().cloned()));
    let (a, b) = (copy(model, "a")?, copy(model, "b")?);
    if equal(&a, &b)? {
        return Err("copy with an appended sub-annotation compares equal".to_owned());
    }

    model.update(|graph| {
        for triple in appended.iter() {
            if !triple.predicate.is(vocab::RDFS_COMMENT) {
                graph.remove(triple);
            }
        }
    });
    let (a, b) = (copy(model, "a")?, copy(model, "b")?);
    if a.node_ref().same_triple(b.node_ref()) {
        return Err("copies share a triple".to_owned());
    }
    if !equal(&a, &b)? {
        return Err("copies with identical content are not equal".to_owned());
    }
    let (ha, hb) = (
        a.hash_code().map_err(|e| failed("hash", e))?,
        b.hash_code().map_err(|e| failed("hash", e))?,
    );
    if ha != hb {
        return Err(format!("equal copies hash differently: {ha} versus {hb}"));
    }
    Ok(())
}
