//! Bulk-annotation collection.
//!
//! A statement `S` is annotated by `(P, V)` when some blank resource `R`
//! carries `owl:annotatedSource`, `owl:annotatedProperty` and
//! `owl:annotatedTarget` equal to the parts of `S`, plus the edge
//! `R P V`. Each such edge becomes an annotation wrapper rooted at
//! `(R, P, V)`; its own sub-annotations are found the same way one level
//! down, when its content is materialized.

use ontograph_graph::{vocab, GraphNode, GraphRead, Triple};

use crate::error::Result;
use crate::factory::{ModelObjectFactory, ObjectFactory};
use crate::merge::merge_sorted;
use crate::object::OntObject;
use crate::part::{canonical_cmp, try_sort_by};

/// Reification resources of `statement`, restricted to `anchor` when given.
/// Empty when bulk annotations are disabled.
pub(crate) fn resources(
    factory: &ModelObjectFactory,
    statement: &Triple,
    anchor: Option<&GraphNode>,
) -> Vec<GraphNode> {
    if !factory.config().allow_bulk_annotations {
        return Vec::new();
    }
    factory
        .graph()
        .reification_resources(&statement.subject, &statement.predicate, &statement.object)
        .into_iter()
        .filter(|r| anchor.map_or(true, |a| a == r))
        .collect()
}

/// Collects the annotations of `statement`: one wrapper per annotation edge
/// of every matching reification resource, sorted canonically, with
/// structurally equal entries merged into one.
pub(crate) fn collect(
    factory: &ModelObjectFactory,
    statement: &Triple,
    anchor: Option<&GraphNode>,
) -> Result<Vec<OntObject>> {
    let resources = resources(factory, statement, anchor);
    if resources.is_empty() {
        return Ok(Vec::new());
    }
    let mut found = Vec::new();
    for resource in &resources {
        for edge in factory.graph().find(Some(resource), None, None) {
            if edge
                .predicate
                .as_uri()
                .is_some_and(vocab::is_reification_predicate)
            {
                continue;
            }
            let annotation = factory.get_annotation(&edge)?;
            annotation.content_in(factory)?;
            found.push(annotation);
        }
    }
    let edges = found.len();
    try_sort_by(&mut found, |a, b| canonical_cmp(a, b))?;
    let annotations = merge_sorted(found)?;
    tracing::debug!(
        statement = %statement,
        resources = resources.len(),
        edges,
        distinct = annotations.len(),
        "collected annotations"
    );
    Ok(annotations)
}
