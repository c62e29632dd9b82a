//! Object factories: the only way wrappers come into existence.
//!
//! The core resolves every nested content item through [`ObjectFactory`].
//! [`ModelObjectFactory`] is the graph-backed implementation; it classifies
//! anonymous structures from their own edges and decides whether a
//! statement can use the cheap simple wrapper.

use std::sync::Arc;

use ontograph_graph::{vocab, BlankId, Graph, GraphNode, GraphRead, Literal, Triple};

use crate::config::ModelConfig;
use crate::error::{ObjectError, Result};
use crate::kind::{EntityKind, ObjectKind};
use crate::model::ModelRef;
use crate::node_ref::GraphNodeRef;
use crate::object::{OntObject, Origin};

/// Creates wrappers, one method per primitive or expression family.
pub trait ObjectFactory {
    /// Named entity wrapper.
    fn get_entity(&self, kind: EntityKind, iri: &str) -> OntObject;

    /// Literal wrapper.
    fn get_literal(&self, literal: &Literal) -> OntObject;

    /// Anonymous individual wrapper.
    fn get_anonymous_individual(&self, id: &BlankId) -> OntObject;

    /// Property wrapper for a declared (or built-in annotation) property.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] if `node` is not a known property.
    fn get_property(&self, node: &GraphNode) -> Result<OntObject>;

    /// Class expression wrapper: a named class or an anonymous expression.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] if `node` is a literal or a blank
    /// node with no recognizable expression shape.
    fn get_class_expression(&self, node: &GraphNode) -> Result<OntObject>;

    /// Data range wrapper: a named datatype or an anonymous literal enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] for unrecognized nodes.
    fn get_data_range(&self, node: &GraphNode) -> Result<OntObject>;

    /// SWRL variable wrapper.
    fn get_swrl_variable(&self, iri: &str) -> OntObject;

    /// SWRL atom wrapper.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] if `node` is not typed as an atom.
    fn get_swrl_atom(&self, node: &GraphNode) -> Result<OntObject>;

    /// Annotation wrapper rooted at the `(R, P, V)` edge of a reification
    /// resource (or of any annotated subject).
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::DanglingReference`] if the triple is not asserted.
    fn get_annotation(&self, triple: &Triple) -> Result<OntObject>;

    /// Axiom wrapper rooted at `triple`. `anchor` selects one reification
    /// resource in split mode.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::DanglingReference`] if the triple is not
    /// asserted and [`ObjectError::Structural`] if `kind` is not an axiom.
    fn get_axiom(&self, kind: ObjectKind, triple: &Triple, anchor: Option<&GraphNode>) -> Result<OntObject>;
}

/// Graph-backed factory over one snapshot of an [`OntModel`](crate::OntModel).
#[derive(Clone, Debug)]
pub struct ModelObjectFactory {
    model: ModelRef,
    graph: Arc<Graph>,
    config: ModelConfig,
}

impl ModelObjectFactory {
    pub(crate) fn new(model: ModelRef, graph: Arc<Graph>, config: ModelConfig) -> Self {
        Self {
            model,
            graph,
            config,
        }
    }

    /// The snapshot this factory reads.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The model configuration.
    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn node_object(&self, kind: ObjectKind, node: GraphNode) -> OntObject {
        let origin = Origin::new(GraphNodeRef::node(node, self.model.clone()), None);
        OntObject::new(kind, origin, false, self.config)
    }

    fn statement_object(
        &self,
        kind: ObjectKind,
        triple: &Triple,
        anchor: Option<&GraphNode>,
    ) -> Result<OntObject> {
        if !self.graph.contains(triple) {
            return Err(ObjectError::DanglingReference(triple.clone()));
        }
        let simple = self.config.simple_wrappers
            && anchor.is_none()
            && !self.has_reification(triple);
        let origin = Origin::new(
            GraphNodeRef::from_triple(triple, self.model.clone()),
            anchor.cloned(),
        );
        Ok(OntObject::new(kind, origin, simple, self.config))
    }

    /// Returns true if at least one reification resource annotates `triple`.
    fn has_reification(&self, triple: &Triple) -> bool {
        !self
            .graph
            .reification_resources(&triple.subject, &triple.predicate, &triple.object)
            .is_empty()
    }

    /// Rebuilds an unmerged wrapper for one origin of `kind`.
    pub(crate) fn rebuild(&self, kind: ObjectKind, origin: &Origin) -> Result<OntObject> {
        let location = origin.node_ref();
        match location.as_triple() {
            Some(triple) if kind == ObjectKind::Annotation => self.get_annotation(&triple),
            Some(triple) => self.get_axiom(kind, &triple, origin.anchor()),
            None => Ok(self.node_object(kind, location.subject().clone())),
        }
    }

    fn declared_as(&self, node: &GraphNode, kind: EntityKind) -> bool {
        self.graph.has_type(node, kind.declaration_type())
    }

    /// Built-in vocabulary check. Any failure to view `node` as a class
    /// means "not built-in".
    pub fn is_builtin_entity(&self, node: &GraphNode) -> bool {
        match self.get_class_expression(node) {
            Ok(object) => object.iri().is_some_and(vocab::is_builtin),
            Err(error) => {
                tracing::trace!(%node, %error, "not viewable as a class, treating as non-built-in");
                false
            }
        }
    }
}

impl ObjectFactory for ModelObjectFactory {
    fn get_entity(&self, kind: EntityKind, iri: &str) -> OntObject {
        self.node_object(kind.object_kind(), GraphNode::uri(iri))
    }

    fn get_literal(&self, literal: &Literal) -> OntObject {
        self.node_object(ObjectKind::Literal, GraphNode::Literal(literal.clone()))
    }

    fn get_anonymous_individual(&self, id: &BlankId) -> OntObject {
        self.node_object(ObjectKind::AnonymousIndividual, GraphNode::BlankId(id.clone()))
    }

    fn get_property(&self, node: &GraphNode) -> Result<OntObject> {
        let iri = node
            .as_uri()
            .ok_or_else(|| ObjectError::structural(node, "property must be a URI"))?;
        let kind = [
            EntityKind::ObjectProperty,
            EntityKind::DataProperty,
            EntityKind::AnnotationProperty,
        ]
        .into_iter()
        .find(|kind| self.declared_as(node, *kind))
        .or_else(|| vocab::is_builtin_annotation_property(iri).then_some(EntityKind::AnnotationProperty))
        .ok_or_else(|| ObjectError::structural(node, "not a declared property"))?;
        Ok(self.get_entity(kind, iri))
    }

    fn get_class_expression(&self, node: &GraphNode) -> Result<OntObject> {
        match node {
            GraphNode::UriRef(iri) => Ok(self.get_entity(EntityKind::Class, iri)),
            GraphNode::Literal(_) => Err(ObjectError::structural(node, "literal is not a class expression")),
            GraphNode::BlankId(_) => {
                let g = &self.graph;
                let kind = if g.object(node, vocab::OWL_UNION_OF).is_some() {
                    ObjectKind::ObjectUnionOf
                } else if g.object(node, vocab::OWL_INTERSECTION_OF).is_some() {
                    ObjectKind::ObjectIntersectionOf
                } else if g.object(node, vocab::OWL_ONE_OF).is_some() {
                    ObjectKind::ObjectOneOf
                } else if g.object(node, vocab::OWL_COMPLEMENT_OF).is_some() {
                    ObjectKind::ObjectComplementOf
                } else if let Some(property) = g.object(node, vocab::OWL_ON_PROPERTY) {
                    let data = self.declared_as(&property, EntityKind::DataProperty);
                    if g.object(node, vocab::OWL_SOME_VALUES_FROM).is_some() {
                        if data {
                            ObjectKind::DataSomeValuesFrom
                        } else {
                            ObjectKind::ObjectSomeValuesFrom
                        }
                    } else if g.object(node, vocab::OWL_ALL_VALUES_FROM).is_some() && !data {
                        ObjectKind::ObjectAllValuesFrom
                    } else if g.object(node, vocab::OWL_HAS_VALUE).is_some() && !data {
                        ObjectKind::ObjectHasValue
                    } else {
                        return Err(ObjectError::structural(node, "unsupported restriction"));
                    }
                } else {
                    return Err(ObjectError::structural(node, "blank node is not a class expression"));
                };
                Ok(self.node_object(kind, node.clone()))
            }
        }
    }

    fn get_data_range(&self, node: &GraphNode) -> Result<OntObject> {
        match node {
            GraphNode::UriRef(iri) => Ok(self.get_entity(EntityKind::Datatype, iri)),
            GraphNode::BlankId(_) if self.graph.object(node, vocab::OWL_ONE_OF).is_some() => {
                Ok(self.node_object(ObjectKind::DataOneOf, node.clone()))
            }
            _ => Err(ObjectError::structural(node, "not a data range")),
        }
    }

    fn get_swrl_variable(&self, iri: &str) -> OntObject {
        self.node_object(ObjectKind::SwrlVariable, GraphNode::uri(iri))
    }

    fn get_swrl_atom(&self, node: &GraphNode) -> Result<OntObject> {
        let kind = [
            (vocab::SWRL_CLASS_ATOM, ObjectKind::SwrlClassAtom),
            (vocab::SWRL_INDIVIDUAL_PROPERTY_ATOM, ObjectKind::SwrlObjectPropertyAtom),
            (vocab::SWRL_DATAVALUED_PROPERTY_ATOM, ObjectKind::SwrlDataPropertyAtom),
            (vocab::SWRL_BUILTIN_ATOM, ObjectKind::SwrlBuiltInAtom),
        ]
        .into_iter()
        .find(|(ty, _)| self.graph.has_type(node, ty))
        .map(|(_, kind)| kind)
        .ok_or_else(|| ObjectError::structural(node, "not a SWRL atom"))?;
        Ok(self.node_object(kind, node.clone()))
    }

    fn get_annotation(&self, triple: &Triple) -> Result<OntObject> {
        self.statement_object(ObjectKind::Annotation, triple, None)
    }

    fn get_axiom(&self, kind: ObjectKind, triple: &Triple, anchor: Option<&GraphNode>) -> Result<OntObject> {
        if !kind.is_axiom() {
            return Err(ObjectError::Structural(format!("{kind} is not an axiom kind")));
        }
        self.statement_object(kind, triple, anchor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{ModelConfig, OntModel};
    use ontograph_graph::turtle::parse_turtle;

    const DOC: &str = r#"
        @prefix ex: <http://example.org/> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix swrl: <http://www.w3.org/2003/11/swrl#> .

        ex:p a owl:ObjectProperty .
        ex:d a owl:DatatypeProperty .
        ex:u owl:unionOf ( ex:A ex:B ) .
        _:some owl:onProperty ex:p ; owl:someValuesFrom ex:A .
        _:data owl:onProperty ex:d ; owl:someValuesFrom ex:dt .
        _:all owl:onProperty ex:p ; owl:allValuesFrom ex:A .
        _:val owl:onProperty ex:p ; owl:hasValue ex:i .
        _:odd owl:onProperty ex:p .
        _:enum owl:oneOf ( "a" "b" ) .
        _:atom a swrl:ClassAtom ; swrl:classPredicate ex:A ; swrl:argument1 ex:x .
    "#;

    fn factory() -> (OntModel, ModelObjectFactory) {
        let model = OntModel::new(parse_turtle(DOC).unwrap(), ModelConfig::default());
        let factory = model.factory();
        (model, factory)
    }

    fn blank_with(factory: &ModelObjectFactory, predicate: &str, object: &GraphNode) -> GraphNode {
        factory
            .graph()
            .subjects(predicate, object)
            .into_iter()
            .find(GraphNode::is_blank)
            .unwrap()
    }

    #[test]
    fn classifies_restrictions_by_property_declaration() {
        let (_model, f) = factory();
        let ex_d = GraphNode::uri("http://example.org/d");
        let ex_dt = GraphNode::uri("http://example.org/dt");
        let data = blank_with(&f, vocab::OWL_SOME_VALUES_FROM, &ex_dt);
        assert_eq!(
            f.get_class_expression(&data).unwrap().kind(),
            ObjectKind::DataSomeValuesFrom
        );
        assert!(f.declared_as(&ex_d, EntityKind::DataProperty));

        let ex_a = GraphNode::uri("http://example.org/A");
        let some = blank_with(&f, vocab::OWL_SOME_VALUES_FROM, &ex_a);
        assert_eq!(
            f.get_class_expression(&some).unwrap().kind(),
            ObjectKind::ObjectSomeValuesFrom
        );
        let all = blank_with(&f, vocab::OWL_ALL_VALUES_FROM, &ex_a);
        assert_eq!(
            f.get_class_expression(&all).unwrap().kind(),
            ObjectKind::ObjectAllValuesFrom
        );
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        let (_model, f) = factory();
        let odd = f
            .graph()
            .find(None, Some(&GraphNode::uri(vocab::OWL_ON_PROPERTY)), None)
            .into_iter()
            .map(|t| t.subject)
            .find(|s| {
                f.graph().object(s, vocab::OWL_SOME_VALUES_FROM).is_none()
                    && f.graph().object(s, vocab::OWL_ALL_VALUES_FROM).is_none()
                    && f.graph().object(s, vocab::OWL_HAS_VALUE).is_none()
            })
            .unwrap();
        assert!(matches!(
            f.get_class_expression(&odd),
            Err(ObjectError::Structural(_))
        ));
        assert!(f.get_class_expression(&GraphNode::string("x")).is_err());
    }

    #[test]
    fn properties_need_declaration_or_builtin() {
        let (_model, f) = factory();
        let p = f.get_property(&GraphNode::uri("http://example.org/p")).unwrap();
        assert_eq!(p.kind(), ObjectKind::ObjectProperty);
        let label = f.get_property(&GraphNode::uri(vocab::RDFS_LABEL)).unwrap();
        assert_eq!(label.kind(), ObjectKind::AnnotationProperty);
        assert!(f.get_property(&GraphNode::uri("http://example.org/q")).is_err());
    }

    #[test]
    fn builtin_check_swallows_conversion_failures() {
        let (_model, f) = factory();
        assert!(f.is_builtin_entity(&GraphNode::uri(vocab::OWL_THING)));
        assert!(!f.is_builtin_entity(&GraphNode::uri("http://example.org/A")));
        assert!(!f.is_builtin_entity(&GraphNode::string("not a class")));
    }

    #[test]
    fn atoms_and_data_ranges() {
        let (_model, f) = factory();
        let atom = f
            .graph()
            .subjects(vocab::RDF_TYPE, &GraphNode::uri(vocab::SWRL_CLASS_ATOM))
            .pop()
            .unwrap();
        assert_eq!(f.get_swrl_atom(&atom).unwrap().kind(), ObjectKind::SwrlClassAtom);
        let enumeration = f
            .graph()
            .find(None, Some(&GraphNode::uri(vocab::OWL_ONE_OF)), None)
            .pop()
            .unwrap()
            .subject;
        assert_eq!(f.get_data_range(&enumeration).unwrap().kind(), ObjectKind::DataOneOf);
    }

    #[test]
    fn axioms_require_axiom_kinds_and_live_triples() {
        let (_model, f) = factory();
        let triple = f.graph().triples()[0].clone();
        assert!(f.get_axiom(ObjectKind::Class, &triple, None).is_err());
        let missing = Triple::new(
            GraphNode::uri("http://example.org/nope"),
            GraphNode::uri(vocab::RDFS_LABEL),
            GraphNode::string("x"),
        );
        assert!(matches!(
            f.get_annotation(&missing),
            Err(ObjectError::DanglingReference(_))
        ));
    }
}
