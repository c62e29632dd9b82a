//! Merge associativity validator.
//!
//! `merge(merge(A, B), C)` and `merge(A, merge(B, C))` own the same triple
//! set and have the same canonical content and hash.

use std::collections::BTreeSet;

use ontograph_graph::{vocab, GraphNode, Triple};
use ontograph_objects::{merge, objects_equal, ObjectError, ObjectKind, OntModel, OntObject};

use crate::fixtures;
use crate::report::ConformanceReport;
use crate::validators::{failed, load};
use crate::SuiteOptions;

const VALIDATOR: &str = "objects/merge";

/// Runs the merge checks.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate(options: &SuiteOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let model = load("comment-copies", fixtures::COMMENT_COPIES, options)?;
    report.record(
        &format!("{VALIDATOR}/associativity"),
        "Merge grouping does not change triples, content or hash",
        associativity(&model),
    );
    report.record(
        &format!("{VALIDATOR}/refusal"),
        "Objects with different content refuse to merge",
        refusal(&model),
    );
    Ok(report)
}

fn comment(model: &OntModel, subject: GraphNode, value: &str) -> Result<OntObject, String> {
    let triple = Triple::new(subject, GraphNode::uri(vocab::RDFS_COMMENT), GraphNode::string(value));
    model
        .statement(ObjectKind::Annotation, &triple)
        .map_err(|e| failed("lookup", e))
}

fn triple_set(object: &OntObject) -> Result<BTreeSet<Triple>, String> {
    Ok(object
        .triples()
        .map_err(|e| failed("triples", e))?
        .into_iter()
        .collect())
}

fn associativity(model: &OntModel) -> Result<(), String> {
    let a = comment(model, GraphNode::blank("a"), "same")?;
    let b = comment(model, GraphNode::blank("b"), "same")?;
    let c = comment(model, GraphNode::blank("c"), "same")?;
    let merged = |x: &OntObject, y: &OntObject| merge(x, y).map_err(|e| failed("merge", e));

    let left = merged(&merged(&a, &b)?, &c)?;
    let right = merged(&a, &merged(&b, &c)?)?;

    let (lt, rt) = (triple_set(&left)?, triple_set(&right)?);
    if lt != rt {
        return Err(format!("{} triples versus {}", lt.len(), rt.len()));
    }
    if lt.len() != 3 {
        return Err(format!("merged object owns {} triples, expected 3", lt.len()));
    }
    let (lh, rh) = (
        left.hash_code().map_err(|e| failed("hash", e))?,
        right.hash_code().map_err(|e| failed("hash", e))?,
    );
    if lh != rh {
        return Err(format!("hash {lh} versus {rh}"));
    }
    if !objects_equal(&left, &right).map_err(|e| failed("equality", e))? {
        return Err("groupings are not equal".to_owned());
    }
    Ok(())
}

fn refusal(model: &OntModel) -> Result<(), String> {
    let a = comment(model, GraphNode::blank("a"), "same")?;
    let other = comment(model, GraphNode::uri("http://example.org/Foo"), "other")?;
    match merge(&a, &other) {
        Err(ObjectError::UnsupportedMerge { .. }) => Ok(()),
        Err(e) => Err(failed("unexpected error", e)),
        Ok(_) => Err("unequal objects merged".to_owned()),
    }
}
