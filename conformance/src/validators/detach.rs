//! Detach validators.
//!
//! - Cross-representation equality: a detached object equals, and hashes
//!   like, the wrapper it came from.
//! - Totality: detaching a materialized wrapper succeeds after its model is
//!   gone, so it neither reads the graph nor keeps the model alive.

use ontograph_objects::{
    objects_equal, OntModel, OntObject, OwlObject, StandaloneFactory, StandaloneObject,
};

use crate::fixtures;
use crate::report::{ConformanceReport, TestResult};
use crate::validators::{failed, load};
use crate::SuiteOptions;

/// Runs the detach checks.
///
/// # Errors
///
/// Returns an error if a fixture does not parse.
pub fn validate(options: &SuiteOptions) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let model = load("ontology", fixtures::ONTOLOGY, options)?;
    let objects = match discover(&model) {
        Ok(objects) => objects,
        Err(message) => {
            report.push(TestResult::fail("objects/detach", message));
            return Ok(report);
        }
    };
    report.record(
        "objects/detach/equality",
        "Detached objects equal their wrappers and share their hash",
        cross_representation(&objects),
    );

    drop(model);
    report.record(
        "objects/detach/totality",
        "Materialized wrappers detach without their model",
        totality(&objects),
    );
    Ok(report)
}

/// Every axiom and SWRL atom, with content materialized.
fn discover(model: &OntModel) -> Result<Vec<OntObject>, String> {
    let mut objects = model.axioms().map_err(|e| failed("axiom discovery", e))?;
    objects.extend(model.swrl_atoms().map_err(|e| failed("atom discovery", e))?);
    for object in &objects {
        object.content().map_err(|e| failed(&object.to_string(), e))?;
    }
    Ok(objects)
}

fn detach(object: &OntObject) -> Result<StandaloneObject, String> {
    object
        .erase(&StandaloneFactory)
        .map_err(|e| failed(&format!("detaching {object}"), e))
}

fn cross_representation(objects: &[OntObject]) -> Result<(), String> {
    for object in objects {
        let detached = detach(object)?;
        let equal = objects_equal(object, &detached).map_err(|e| failed("equality", e))?;
        let reverse = objects_equal(&detached, object).map_err(|e| failed("equality", e))?;
        if !(equal && reverse) {
            return Err(format!("{object} differs from {detached}"));
        }
        let (ho, hd) = (
            object.hash_code().map_err(|e| failed("hash", e))?,
            detached.hash_code().map_err(|e| failed("hash", e))?,
        );
        if ho != hd {
            return Err(format!("{object}: hash {ho} versus detached {hd}"));
        }
    }
    Ok(())
}

fn totality(objects: &[OntObject]) -> Result<(), String> {
    for object in objects {
        if object.model().is_alive() {
            return Err("model outlived its owner".to_owned());
        }
        let detached = detach(object)?;
        if detached.kind() != object.kind() {
            return Err(format!("{object} detached as {}", detached.kind()));
        }
    }
    Ok(())
}
