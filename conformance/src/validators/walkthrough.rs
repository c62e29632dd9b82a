//! Annotation walkthrough.
//!
//! `ex:Foo rdfs:label "x"` starts without annotations on a simple wrapper.
//! Adding one reification resource with `rdfs:comment "y"` yields exactly
//! that annotation, grows the content by one item and changes the hash,
//! while the wrapper keeps its triple.

use ontograph_graph::{vocab, Graph, GraphNode, Triple};
use ontograph_objects::{ObjectKind, OntModel, OntObject, OwlObject, Part};

use crate::fixtures;
use crate::report::{ConformanceReport, TestResult};
use crate::validators::{failed, load, parse_fixture};
use crate::SuiteOptions;

const VALIDATOR: &str = "objects/annotations/walkthrough";

/// Runs the walkthrough.
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
    let model = load("plain-label", fixtures::PLAIN_LABEL, options)?;
    let extra = parse_fixture("label-comment", fixtures::LABEL_COMMENT)?;
    report.record(
        VALIDATOR,
        "One reification resource adds exactly one annotation",
        walkthrough(&model, &extra, options.config.simple_wrappers),
    );
    Ok(report)
}

fn statement(model: &OntModel) -> Result<OntObject, String> {
    let triple = Triple::new(
        GraphNode::uri("http://example.org/Foo"),
        GraphNode::uri(vocab::RDFS_LABEL),
        GraphNode::string("x"),
    );
    model
        .statement(ObjectKind::AnnotationAssertion, &triple)
        .map_err(|e| failed("lookup", e))
}

fn walkthrough(model: &OntModel, extra: &Graph, simple_wrappers: bool) -> Result<(), String> {
    let before = statement(model)?;
    if before.is_simple() != simple_wrappers {
        return Err(format!("plain statement has simple = {}", before.is_simple()));
    }
    let count = before.annotations().map_err(|e| failed("collection", e))?.len();
    if count != 0 {
        return Err(format!("plain statement has {count} annotations"));
    }
    let content = before.content().map_err(|e| failed("content", e))?;
    let (before_len, before_section) = (content.len(), content.annotations().len());
    let before_hash = before.hash_code().map_err(|e| failed("hash", e))?;

    model.update(|graph| graph.extend(extra.iter().cloned()));

    let after = statement(model)?;
    if after.is_simple() {
        return Err("annotated statement still uses the simple wrapper".to_owned());
    }
    let annotations = after.annotations().map_err(|e| failed("collection", e))?;
    let [annotation] = annotations.as_slice() else {
        return Err(format!("{} annotations collected, expected 1", annotations.len()));
    };
    expect_comment_y(annotation)?;

    let content = after.content().map_err(|e| failed("content", e))?;
    if content.len() != before_len + 1 || content.annotations().len() != before_section + 1 {
        return Err(format!(
            "content grew from {before_len} to {} items",
            content.len()
        ));
    }
    if after.hash_code().map_err(|e| failed("hash", e))? == before_hash {
        return Err("hash did not change".to_owned());
    }
    if !after.node_ref().same_triple(before.node_ref()) {
        return Err("statement moved to another triple".to_owned());
    }
    Ok(())
}

fn expect_comment_y(annotation: &OntObject) -> Result<(), String> {
    let parts = annotation.parts().map_err(|e| failed("parts", e))?;
    match parts.as_slice() {
        [Part::Entity(_, property), Part::Literal(value)]
            if *property == vocab::RDFS_COMMENT && value.lexical() == "y" =>
        {
            Ok(())
        }
        _ => Err(format!("collected {annotation}, expected (rdfs:comment, \"y\")")),
    }
}
