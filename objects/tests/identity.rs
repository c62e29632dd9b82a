//! Determinism and the triple-identity shortcut.

#![allow(clippy::unwrap_used)]

mod common;

use ontograph_objects::{canonical_cmp, objects_equal, ObjectKind, OwlObject};

#[test]
fn discovers_every_axiom_family() {
    let model = common::model(common::ONTOLOGY);
    let axioms = model.axioms().unwrap();
    let count = |kind| axioms.iter().filter(|a| a.kind() == kind).count();
    assert_eq!(count(ObjectKind::Declaration), 6);
    assert_eq!(count(ObjectKind::SubClassOf), 5);
    assert_eq!(count(ObjectKind::DisjointClasses), 2);
    assert_eq!(count(ObjectKind::SubPropertyChainOf), 1);
    assert_eq!(count(ObjectKind::ClassAssertion), 1);
    assert_eq!(count(ObjectKind::ObjectPropertyAssertion), 1);
    assert_eq!(count(ObjectKind::DataPropertyAssertion), 1);
    assert_eq!(count(ObjectKind::AnnotationAssertion), 1);
    assert_eq!(axioms.len(), 18);
}

#[test]
fn fresh_models_agree_on_content_and_hash() {
    let first = common::model(common::ONTOLOGY).axioms().unwrap();
    let second = common::model(common::ONTOLOGY).axioms().unwrap();
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.kind(), b.kind());
        assert_eq!(a.hash_code().unwrap(), b.hash_code().unwrap());
        assert!(objects_equal(a, b).unwrap());
        assert_eq!(canonical_cmp(a, b).unwrap(), std::cmp::Ordering::Equal);
    }
}

#[test]
fn repeated_reads_of_one_wrapper_are_stable() {
    let model = common::model(common::ONTOLOGY);
    for axiom in model.axioms().unwrap() {
        let hash = axiom.hash_code().unwrap();
        let parts = axiom.parts().unwrap().len();
        assert_eq!(axiom.hash_code().unwrap(), hash);
        assert_eq!(axiom.parts().unwrap().len(), parts);
    }
}

#[test]
fn same_triple_needs_no_content() {
    let model = common::model(common::ONTOLOGY);
    let triple = model
        .axioms_of(ObjectKind::SubPropertyChainOf)
        .unwrap()
        .remove(0)
        .node_ref()
        .to_triple()
        .unwrap();
    let a = model.statement(ObjectKind::SubPropertyChainOf, &triple).unwrap();
    let b = model.statement(ObjectKind::SubPropertyChainOf, &triple).unwrap();
    assert!(a.is_unique_per_triple());
    assert!(objects_equal(&a, &b).unwrap());
    assert!(!a.is_content_cached() && !b.is_content_cached());
}

#[test]
fn property_chain_keeps_list_order_and_duplicates() {
    let model = common::model(common::ONTOLOGY);
    let chain = model.axioms_of(ObjectKind::SubPropertyChainOf).unwrap().remove(0);
    let rendered: Vec<String> = chain.parts().unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "ObjectProperty(<http://example.org/q>)",
            "ObjectProperty(<http://example.org/p>)",
            "ObjectProperty(<http://example.org/p>)",
        ]
    );
}

#[test]
fn swrl_atoms_nest_variables() {
    let model = common::model(common::ONTOLOGY);
    let atoms = model.swrl_atoms().unwrap();
    assert_eq!(atoms.len(), 2);
    assert_eq!(atoms[0].kind(), ObjectKind::SwrlClassAtom);
    let variable = atoms[0].content().unwrap().body()[1].as_object().unwrap().clone();
    assert_eq!(variable.kind(), ObjectKind::SwrlVariable);
    assert_eq!(variable.iri(), Some("http://example.org/x"));
    let property_atom = &atoms[1];
    let parts = property_atom.parts().unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[2].to_string(), "NamedIndividual(<http://example.org/j>)");
}
