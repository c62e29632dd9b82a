//! Property-based tests for the equality, hash and ordering contract.

#![allow(clippy::unwrap_used)]

mod common;

use std::cmp::Ordering;

use ontograph_objects::{
    canonical_cmp, Component, EntityKind, ObjectKind, OntObject, OwlObject, StandaloneObject,
};
use proptest::prelude::*;

fn class(index: u8) -> Component<StandaloneObject> {
    Component::Entity(EntityKind::Class, format!("http://example.org/C{index}"))
}

/// A turtle document with one union per operand ordering.
fn union_document(orderings: &[Vec<u8>]) -> String {
    let mut doc = String::from("@prefix owl: <http://www.w3.org/2002/07/owl#> .\n");
    doc.push_str("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n");
    for (n, operands) in orderings.iter().enumerate() {
        let members: Vec<String> = operands
            .iter()
            .map(|i| format!("<http://example.org/C{i}>"))
            .collect();
        doc.push_str(&format!(
            "<http://example.org/S{n}> rdfs:subClassOf [ owl:unionOf ( {} ) ] .\n",
            members.join(" ")
        ));
    }
    doc
}

fn unions(doc: &str) -> Vec<OntObject> {
    let model = common::model(doc);
    let mut found: Vec<OntObject> = model
        .axioms_of(ObjectKind::SubClassOf)
        .unwrap()
        .iter()
        .map(|axiom| axiom.content().unwrap().body()[1].as_object().unwrap().clone())
        .collect();
    found.sort_by(|a, b| a.node_ref().location().cmp(b.node_ref().location()));
    found
}

proptest! {
    /// Operand order and duplicates never change a set expression.
    #[test]
    fn prop_union_ignores_operand_order(operands in prop::collection::vec(0u8..6, 1..6)) {
        let mut reversed = operands.clone();
        reversed.reverse();
        let found = unions(&union_document(&[operands.clone(), reversed]));
        prop_assert_eq!(found.len(), 2);
        prop_assert_eq!(&found[0], &found[1]);
        prop_assert_eq!(found[0].hash_code().unwrap(), found[1].hash_code().unwrap());

        let detached = StandaloneObject::new(
            ObjectKind::ObjectUnionOf,
            operands.iter().copied().map(class).collect(),
        )
        .unwrap();
        prop_assert!(found[0] == detached);
        prop_assert_eq!(found[0].hash_code().unwrap(), detached.hash_code().unwrap());
    }

    /// Content is identical across independently built models.
    #[test]
    fn prop_reads_are_deterministic(operands in prop::collection::vec(0u8..6, 1..6)) {
        let doc = union_document(&[operands]);
        let first = unions(&doc);
        let second = unions(&doc);
        prop_assert_eq!(first[0].hash_code().unwrap(), second[0].hash_code().unwrap());
        let parts_a: Vec<String> = first[0].parts().unwrap().iter().map(ToString::to_string).collect();
        let parts_b: Vec<String> = second[0].parts().unwrap().iter().map(ToString::to_string).collect();
        prop_assert_eq!(parts_a, parts_b);
    }

    /// The canonical order is total and antisymmetric on detached objects.
    #[test]
    fn prop_canonical_order_is_antisymmetric(
        a in prop::collection::vec(0u8..4, 1..4),
        b in prop::collection::vec(0u8..4, 1..4),
    ) {
        let build = |operands: &[u8]| {
            StandaloneObject::new(
                ObjectKind::ObjectIntersectionOf,
                operands.iter().copied().map(class).collect(),
            )
            .unwrap()
        };
        let (x, y) = (build(&a), build(&b));
        let forward = canonical_cmp(&x, &y).unwrap();
        let backward = canonical_cmp(&y, &x).unwrap();
        prop_assert_eq!(forward, backward.reverse());
        prop_assert_eq!(forward == Ordering::Equal, x == y);
    }

    /// Operands of a read union come out in ascending canonical order.
    #[test]
    fn prop_operands_are_sorted(operands in prop::collection::vec(0u8..8, 2..7)) {
        let found = unions(&union_document(&[operands]));
        let parts = found[0].parts().unwrap();
        for pair in parts.windows(2) {
            prop_assert_eq!(pair[0].canonical_cmp(&pair[1]).unwrap(), Ordering::Less);
        }
    }
}
