//! Determinism validator.
//!
//! Content, hash and equality computed twice, on fresh wrappers over the
//! same graph state, must agree.

use ontograph_objects::{objects_equal, OntModel, OntObject};

use crate::fixtures;
use crate::report::ConformanceReport;
use crate::validators::{failed, load};
use crate::SuiteOptions;

const VALIDATOR: &str = "objects/determinism";

/// Runs the determinism checks.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate(options: &SuiteOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let first = load("ontology", fixtures::ONTOLOGY, options)?;
    let second = load("ontology", fixtures::ONTOLOGY, options)?;

    report.record(
        &format!("{VALIDATOR}/models"),
        "Independent models over the same document agree on every axiom",
        agree(&first, &second),
    );
    report.record(
        &format!("{VALIDATOR}/rediscovery"),
        "Rediscovering axioms in one model yields identical results",
        agree(&first, &first),
    );
    Ok(report)
}

fn agree(left: &OntModel, right: &OntModel) -> Result<(), String> {
    let a = left.axioms().map_err(|e| failed("axiom discovery", e))?;
    let b = right.axioms().map_err(|e| failed("axiom discovery", e))?;
    if a.len() != b.len() {
        return Err(format!("{} axioms versus {}", a.len(), b.len()));
    }
    for (x, y) in a.iter().zip(&b) {
        same(x, y).map_err(|e| failed(&x.to_string(), e))?;
    }
    Ok(())
}

fn same(x: &OntObject, y: &OntObject) -> Result<(), String> {
    if x.kind() != y.kind() {
        return Err(format!("kind {} versus {}", x.kind(), y.kind()));
    }
    let (hx, hy) = (
        x.hash_code().map_err(|e| e.to_string())?,
        y.hash_code().map_err(|e| e.to_string())?,
    );
    if hx != hy {
        return Err(format!("hash {hx} versus {hy}"));
    }
    if x.content().map_err(|e| e.to_string())?.len() != y.content().map_err(|e| e.to_string())?.len() {
        return Err("content length differs".to_owned());
    }
    if !objects_equal(x, y).map_err(|e| e.to_string())? {
        return Err(format!("not equal to {y}"));
    }
    Ok(())
}
