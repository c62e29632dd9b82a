//! Detaching wrappers into graph-independent objects.

#![allow(clippy::unwrap_used)]

mod common;

use std::collections::HashSet;

use ontograph_objects::{
    objects_equal, Component, EntityKind, ObjectError, ObjectKind, OwlObject, StandaloneFactory,
    StandaloneObject,
};

#[test]
fn every_axiom_survives_detaching() {
    let model = common::model(common::ONTOLOGY);
    for axiom in model.axioms().unwrap() {
        let detached = axiom.erase(&StandaloneFactory).unwrap();
        assert_eq!(detached.kind(), axiom.kind());
        assert!(axiom == detached, "{axiom} differs from {detached}");
        assert!(detached == axiom);
        assert_eq!(detached.hash_code().unwrap(), axiom.hash_code().unwrap());
        assert_eq!(detached.parts().unwrap().len(), axiom.parts().unwrap().len());
    }
}

#[test]
fn hand_built_object_equals_wrapper() {
    let model = common::model(common::ONTOLOGY);
    let class = |local: &str| Component::Entity(EntityKind::Class, format!("http://example.org/{local}"));
    let union = StandaloneObject::new(ObjectKind::ObjectUnionOf, vec![class("A"), class("B")]).unwrap();
    let expected = StandaloneObject::new(
        ObjectKind::SubClassOf,
        vec![class("C"), Component::Object(union)],
    )
    .unwrap();

    let axioms = model.axioms_of(ObjectKind::SubClassOf).unwrap();
    let found: Vec<_> = axioms.iter().filter(|a| **a == expected).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].hash_code().unwrap(), expected.hash_code().unwrap());
}

#[test]
fn detached_objects_hash_consistently_in_std_collections() {
    let model = common::model(common::ONTOLOGY);
    let detached: HashSet<StandaloneObject> = model
        .axioms()
        .unwrap()
        .iter()
        .map(|axiom| axiom.erase(&StandaloneFactory).unwrap())
        .collect();
    let again: HashSet<StandaloneObject> = common::model(common::ONTOLOGY)
        .axioms()
        .unwrap()
        .iter()
        .map(|axiom| axiom.erase(&StandaloneFactory).unwrap())
        .collect();
    assert_eq!(detached.len(), model.axioms().unwrap().len());
    assert_eq!(detached, again);
}

#[test]
fn materialized_wrappers_detach_after_model_is_gone() {
    let model = common::model(common::ONTOLOGY);
    let axioms = model.axioms().unwrap();
    for axiom in &axioms {
        axiom.content().unwrap();
    }
    let cold = model.entity(EntityKind::Class, "http://example.org/A");
    drop(model);

    for axiom in &axioms {
        assert!(!axiom.model().is_alive());
        let detached = axiom.erase(&StandaloneFactory).unwrap();
        assert!(objects_equal(axiom, &detached).unwrap());
    }
    // entities carry their content in the root node
    assert!(cold.erase(&StandaloneFactory).is_ok());
}

#[test]
fn cold_composite_reports_released_model() {
    let model = common::model(common::PLAIN_LABEL);
    let statement = model
        .statement(ObjectKind::AnnotationAssertion, &common::label_statement())
        .unwrap();
    drop(model);
    assert!(matches!(
        statement.erase(&StandaloneFactory),
        Err(ObjectError::ModelReleased)
    ));
}
