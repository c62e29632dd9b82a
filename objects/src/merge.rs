//! Reconciling structurally equal wrappers rooted at different places.
//!
//! A merged object keeps the identity and content of the left operand and
//! additionally owns the origins of the right one, so its triples are the
//! union of both sides.

use crate::equality::objects_equal;
use crate::error::{ObjectError, Result};
use crate::object::{OntObject, Origin};

/// Merges `b` into `a`.
///
/// Merging an object with itself, or with an object whose origins `a`
/// already owns, returns `a` unchanged.
///
/// # Errors
///
/// Returns [`ObjectError::UnsupportedMerge`] if the kinds differ or the
/// objects are not structurally equal. Content materialization failures
/// propagate.
pub fn merge(a: &OntObject, b: &OntObject) -> Result<OntObject> {
    if a.ptr_eq(b) {
        return Ok(a.clone());
    }
    if a.kind() != b.kind() {
        return Err(ObjectError::UnsupportedMerge {
            left: a.kind(),
            right: b.kind(),
            reason: "objects of different kinds".to_owned(),
        });
    }
    if !objects_equal(a, b)? {
        return Err(ObjectError::UnsupportedMerge {
            left: a.kind(),
            right: b.kind(),
            reason: "objects are not structurally equal".to_owned(),
        });
    }

    let added: Vec<Origin> = b
        .origins()
        .filter(|origin| !a.origins().any(|known| known == *origin))
        .cloned()
        .collect();
    if added.is_empty() {
        return Ok(a.clone());
    }

    let content = a.content()?.clone();
    let origins: Vec<Origin> = a.origins().skip(1).cloned().chain(added).collect();
    tracing::debug!(
        kind = %a.kind(),
        root = %a.node_ref(),
        origins = origins.len() + 1,
        "merged equal objects"
    );
    Ok(OntObject::with_origins(a, origins, content))
}

/// Collapses runs of equal objects in a canonically sorted list into one
/// merged object each.
pub(crate) fn merge_sorted(sorted: Vec<OntObject>) -> Result<Vec<OntObject>> {
    let mut out: Vec<OntObject> = Vec::with_capacity(sorted.len());
    for object in sorted {
        if let Some(last) = out.last_mut() {
            if objects_equal(&*last, &object)? {
                *last = merge(&*last, &object)?;
                continue;
            }
        }
        out.push(object);
    }
    Ok(out)
}
