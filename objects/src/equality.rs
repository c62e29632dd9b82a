//! Structural equality across representations.
//!
//! Comparison short-circuits in a fixed order: identity, kind, then either
//! the graph-bound rules (shared origin, hash, content arrays) or, when one
//! side is foreign, hash followed by an element-wise walk of both public
//! part streams.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::content::content_equal;
use crate::error::Result;
use crate::object::OntObject;
use crate::part::{canonical_cmp, OwlObject};
use crate::standalone::StandaloneObject;

/// Structural equality of any two objects.
///
/// Two graph-bound wrappers sharing an origin are equal without
/// materializing content when their kind is unique per triple.
///
/// # Errors
///
/// Propagates content materialization failures of graph-bound operands.
pub fn objects_equal(a: &dyn OwlObject, b: &dyn OwlObject) -> Result<bool> {
    if std::ptr::addr_eq(a, b) {
        return Ok(true);
    }
    if a.kind() != b.kind() {
        return Ok(false);
    }
    match (a.as_ont_object(), b.as_ont_object()) {
        (Some(x), Some(y)) => bound_equal(x, y),
        _ => foreign_equal(a, b),
    }
}

fn bound_equal(a: &OntObject, b: &OntObject) -> Result<bool> {
    if a.ptr_eq(b) || a.shares_origin(b) {
        return Ok(true);
    }
    content_equal(a.content()?, b.content()?)
}

fn foreign_equal(a: &dyn OwlObject, b: &dyn OwlObject) -> Result<bool> {
    if a.hash_code()? != b.hash_code()? {
        return Ok(false);
    }
    let (pa, pb) = (a.parts()?, b.parts()?);
    if pa.len() != pb.len() {
        return Ok(false);
    }
    for (x, y) in pa.iter().zip(pb.iter()) {
        if !x.structural_eq(y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn lenient_eq(a: &dyn OwlObject, b: &dyn OwlObject) -> bool {
    objects_equal(a, b).unwrap_or_else(|error| {
        tracing::warn!(kind = %a.kind(), %error, "equality check failed, treating as unequal");
        false
    })
}

impl PartialEq for OntObject {
    fn eq(&self, other: &Self) -> bool {
        lenient_eq(self, other)
    }
}

impl Eq for OntObject {}

impl PartialEq<StandaloneObject> for OntObject {
    fn eq(&self, other: &StandaloneObject) -> bool {
        lenient_eq(self, other)
    }
}

impl PartialEq<OntObject> for StandaloneObject {
    fn eq(&self, other: &OntObject) -> bool {
        lenient_eq(self, other)
    }
}

impl Hash for OntObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match OntObject::hash_code(self) {
            Ok(code) => code.hash(state),
            Err(error) => {
                tracing::warn!(object = %self, %error, "hashing by location");
                self.node_ref().location().hash(state);
            }
        }
    }
}

fn lenient_cmp(a: &dyn OwlObject, b: &dyn OwlObject) -> Option<Ordering> {
    canonical_cmp(a, b)
        .map_err(|error| {
            tracing::warn!(kind = %a.kind(), %error, "objects are unordered");
        })
        .ok()
}

impl PartialOrd for OntObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        lenient_cmp(self, other)
    }
}

impl PartialOrd for StandaloneObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        lenient_cmp(self, other)
    }
}

impl PartialOrd<StandaloneObject> for OntObject {
    fn partial_cmp(&self, other: &StandaloneObject) -> Option<Ordering> {
        lenient_cmp(self, other)
    }
}

impl PartialOrd<OntObject> for StandaloneObject {
    fn partial_cmp(&self, other: &OntObject) -> Option<Ordering> {
        lenient_cmp(self, other)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::factory::ObjectFactory;
    use crate::standalone::StandaloneFactory;
    use crate::{EntityKind, ModelConfig, ObjectKind, OntModel};
    use ontograph_graph::turtle::parse_turtle;
    use ontograph_graph::{vocab, GraphNode, GraphRead, Triple};

    const DOC: &str = r#"
        @prefix ex: <http://example.org/> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

        ex:A a owl:Class .
        ex:B a owl:Class .
        ex:X rdfs:subClassOf [ owl:unionOf ( ex:A ex:B ) ] .
        ex:Y rdfs:subClassOf [ owl:unionOf ( ex:B ex:A ) ] .
        ex:Foo rdfs:label "x" .
        _:r1 owl:annotatedSource ex:Foo ;
            owl:annotatedProperty rdfs:label ;
            owl:annotatedTarget "x" ;
            rdfs:comment "y" .
        _:r2 owl:annotatedSource ex:Foo ;
            owl:annotatedProperty rdfs:label ;
            owl:annotatedTarget "x" ;
            rdfs:comment "y" .
    "#;

    fn model(config: ModelConfig) -> OntModel {
        OntModel::new(parse_turtle(DOC).unwrap(), config)
    }

    fn unions(model: &OntModel) -> Vec<OntObject> {
        model
            .axioms_of(ObjectKind::SubClassOf)
            .unwrap()
            .iter()
            .map(|axiom| axiom.content().unwrap().body()[1].as_object().unwrap().clone())
            .collect()
    }

    fn label_triple() -> Triple {
        Triple::new(
            GraphNode::uri("http://example.org/Foo"),
            GraphNode::uri(vocab::RDFS_LABEL),
            GraphNode::string("x"),
        )
    }

    #[test]
    fn kind_mismatch_is_never_equal() {
        let model = model(ModelConfig::default());
        let class = model.entity(EntityKind::Class, "http://example.org/A");
        let individual = model.entity(EntityKind::NamedIndividual, "http://example.org/A");
        assert!(!objects_equal(&class, &individual).unwrap());
        assert_eq!(class, class.clone());
    }

    #[test]
    fn same_triple_is_equal_without_content() {
        let model = model(ModelConfig::default());
        let a = model.statement(ObjectKind::AnnotationAssertion, &label_triple()).unwrap();
        let b = model.statement(ObjectKind::AnnotationAssertion, &label_triple()).unwrap();
        assert!(!a.ptr_eq(&b));
        assert!(objects_equal(&a, &b).unwrap());
        assert!(!a.is_content_cached());
        assert!(!b.is_content_cached());
    }

    #[test]
    fn different_blank_roots_with_same_operands_are_equal() {
        let model = model(ModelConfig::default());
        let unions = unions(&model);
        assert_eq!(unions.len(), 2);
        assert_ne!(unions[0].node_ref(), unions[1].node_ref());
        assert_eq!(unions[0], unions[1]);
        assert_eq!(unions[0].hash_code().unwrap(), unions[1].hash_code().unwrap());
    }

    #[test]
    fn annotations_on_different_resources_compare_by_content() {
        let model = model(ModelConfig::default());
        let graph = model.snapshot();
        let comments = graph.find(None, Some(&GraphNode::uri(vocab::RDFS_COMMENT)), None);
        assert_eq!(comments.len(), 2);
        let a = model.statement(ObjectKind::Annotation, &comments[0]).unwrap();
        let b = model.statement(ObjectKind::Annotation, &comments[1]).unwrap();
        assert!(!a.shares_origin(&b));
        assert!(objects_equal(&a, &b).unwrap());
    }

    #[test]
    fn split_mode_compares_anchored_axioms_by_content() {
        let config = ModelConfig {
            split_axiom_annotations: true,
            ..ModelConfig::default()
        };
        let model = model(config);
        let factory = model.factory();
        let resources = graph_resources(&model);
        let anchored = |resource: &GraphNode| {
            factory
                .get_axiom(ObjectKind::AnnotationAssertion, &label_triple(), Some(resource))
                .unwrap()
        };
        let (a, b) = (anchored(&resources[0]), anchored(&resources[1]));
        assert!(!a.is_unique_per_triple());
        assert!(!a.shares_origin(&b));
        assert!(objects_equal(&a, &b).unwrap());
        assert!(a.is_content_cached());
    }

    fn graph_resources(model: &OntModel) -> Vec<GraphNode> {
        let t = label_triple();
        model
            .snapshot()
            .reification_resources(&t.subject, &t.predicate, &t.object)
    }

    #[test]
    fn partial_order_follows_canonical_order() {
        let model = model(ModelConfig::default());
        let a = model.entity(EntityKind::Class, "http://example.org/A");
        let b = model.entity(EntityKind::Class, "http://example.org/B");
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
        assert_eq!(a.partial_cmp(&a.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn partial_order_spans_representations() {
        let model = model(ModelConfig::default());
        let a = model.entity(EntityKind::Class, "http://example.org/A");
        let b = model.entity(EntityKind::Class, "http://example.org/B");
        let detached_a = a.erase(&StandaloneFactory).unwrap();
        let detached_b = b.erase(&StandaloneFactory).unwrap();

        assert_eq!(detached_a.partial_cmp(&detached_b), Some(Ordering::Less));
        assert_eq!(a.partial_cmp(&detached_a), Some(Ordering::Equal));
        assert_eq!(detached_b.partial_cmp(&a), Some(Ordering::Greater));
        assert!(a < detached_b);
        assert!(detached_a < b);
    }
}
