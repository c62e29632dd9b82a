//! Per-position argument codecs of the composite shapes.
//!
//! Each slot knows how to turn a graph node into a content item
//! ([`Slot::decode`]), how to present a content item as a [`Part`]
//! ([`Slot::part`]), and which parts a standalone object may put in that
//! position ([`Slot::accepts`]). Adding an argument kind means adding a
//! slot, not touching equality or hashing.

use ontograph_graph::{vocab, GraphNode, GraphRead};

use crate::content::ContentItem;
use crate::error::{ObjectError, Result};
use crate::factory::{ModelObjectFactory, ObjectFactory};
use crate::kind::{EntityKind, ObjectKind};
use crate::node_ref::Location;
use crate::part::Part;

/// One argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A bare IRI.
    Iri,
    /// A named entity of a fixed kind.
    Entity(EntityKind),
    /// The entity of a declaration; its kind comes from the declaration type.
    DeclaredEntity,
    /// A named class or an anonymous class expression.
    ClassExpression,
    /// A named or anonymous individual.
    Individual,
    /// A literal.
    Literal,
    /// A named datatype or an anonymous data range.
    DataRange,
    /// Annotation value: IRI, anonymous individual or literal.
    AnnotationValue,
    /// Annotation subject: IRI or anonymous individual.
    AnnotationSubject,
    /// SWRL individual argument: variable, named or anonymous individual.
    IArg,
    /// SWRL data argument: variable or literal.
    DArg,
    /// A nested annotation.
    Annotation,
}

impl Slot {
    /// Decodes a graph node into a content item.
    pub(crate) fn decode(
        self,
        factory: &ModelObjectFactory,
        node: &GraphNode,
        location: &Location,
    ) -> Result<ContentItem> {
        let item = match (self, node) {
            (Slot::Iri | Slot::Entity(_), GraphNode::UriRef(_)) => ContentItem::Node(node.clone()),
            (Slot::DeclaredEntity, GraphNode::UriRef(iri)) => {
                let kind = match location {
                    Location::Triple { object, .. } => object
                        .as_uri()
                        .and_then(EntityKind::from_declaration_type),
                    Location::Node(_) => None,
                }
                .ok_or_else(|| ObjectError::structural(node, "declaration without entity type"))?;
                ContentItem::Object(factory.get_entity(kind, iri))
            }
            (Slot::ClassExpression, GraphNode::UriRef(_)) => ContentItem::Node(node.clone()),
            (Slot::ClassExpression, GraphNode::BlankId(_)) => {
                ContentItem::Object(factory.get_class_expression(node)?)
            }
            (Slot::DataRange, GraphNode::UriRef(_)) => ContentItem::Node(node.clone()),
            (Slot::DataRange, GraphNode::BlankId(_)) => {
                ContentItem::Object(factory.get_data_range(node)?)
            }
            (
                Slot::Individual | Slot::AnnotationSubject,
                GraphNode::UriRef(_) | GraphNode::BlankId(_),
            ) => ContentItem::Node(node.clone()),
            (Slot::Literal, GraphNode::Literal(_)) | (Slot::AnnotationValue, _) => {
                ContentItem::Node(node.clone())
            }
            (Slot::IArg, GraphNode::UriRef(iri)) => {
                if factory.graph().has_type(node, vocab::SWRL_VARIABLE) {
                    ContentItem::Object(factory.get_swrl_variable(iri))
                } else {
                    ContentItem::Node(node.clone())
                }
            }
            (Slot::IArg, GraphNode::BlankId(_)) => ContentItem::Node(node.clone()),
            (Slot::DArg, GraphNode::UriRef(iri)) => ContentItem::Object(factory.get_swrl_variable(iri)),
            (Slot::DArg, GraphNode::Literal(_)) => ContentItem::Node(node.clone()),
            (slot, node) => {
                return Err(ObjectError::structural(
                    node,
                    format!("not allowed in {slot:?} position"),
                ))
            }
        };
        Ok(item)
    }

    /// Presents a content item stored in this slot as a part.
    #[must_use]
    pub(crate) fn part(self, item: &ContentItem) -> Part<'_> {
        match item {
            ContentItem::Object(object) => Part::object(object),
            ContentItem::Node(GraphNode::BlankId(id)) => Part::Anonymous(id),
            ContentItem::Node(GraphNode::Literal(literal)) => Part::Literal(literal),
            ContentItem::Node(GraphNode::UriRef(iri)) => match self {
                Slot::Entity(kind) => Part::Entity(kind, iri),
                Slot::ClassExpression => Part::Entity(EntityKind::Class, iri),
                Slot::DataRange => Part::Entity(EntityKind::Datatype, iri),
                Slot::Individual | Slot::IArg => Part::Entity(EntityKind::NamedIndividual, iri),
                Slot::Iri
                | Slot::DeclaredEntity
                | Slot::Literal
                | Slot::AnnotationValue
                | Slot::AnnotationSubject
                | Slot::DArg
                | Slot::Annotation => Part::Iri(iri),
            },
        }
    }

    /// Returns true if a standalone object may carry `part` in this slot.
    #[must_use]
    pub fn accepts(self, part: &Part<'_>) -> bool {
        match (self, part) {
            (Slot::Iri, Part::Iri(_)) => true,
            (Slot::Entity(kind), Part::Entity(k, _)) => kind == *k,
            (Slot::DeclaredEntity, Part::Entity(..)) => true,
            (Slot::ClassExpression, Part::Entity(k, _)) => *k == EntityKind::Class,
            (Slot::ClassExpression, Part::Object(o)) => o.kind().is_class_expression(),
            (Slot::Individual, Part::Entity(k, _)) => *k == EntityKind::NamedIndividual,
            (Slot::Individual, Part::Anonymous(_)) => true,
            (Slot::Literal, Part::Literal(_)) => true,
            (Slot::DataRange, Part::Entity(k, _)) => *k == EntityKind::Datatype,
            (Slot::DataRange, Part::Object(o)) => o.kind().is_data_range(),
            (Slot::AnnotationValue, Part::Iri(_) | Part::Anonymous(_) | Part::Literal(_)) => true,
            (Slot::AnnotationSubject, Part::Iri(_) | Part::Anonymous(_)) => true,
            (Slot::IArg, Part::Entity(k, _)) => *k == EntityKind::NamedIndividual,
            (Slot::IArg, Part::Anonymous(_)) => true,
            (Slot::DArg, Part::Literal(_)) => true,
            (Slot::IArg | Slot::DArg, Part::Object(o)) => o.kind() == ObjectKind::SwrlVariable,
            (Slot::Annotation, Part::Object(o)) => o.kind() == ObjectKind::Annotation,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_graph::{BlankId, Literal};

    #[test]
    fn uri_parts_follow_slot() {
        let item = ContentItem::Node(GraphNode::uri("http://example.org/x"));
        assert!(matches!(
            Slot::ClassExpression.part(&item),
            Part::Entity(EntityKind::Class, _)
        ));
        assert!(matches!(
            Slot::Individual.part(&item),
            Part::Entity(EntityKind::NamedIndividual, _)
        ));
        assert!(matches!(Slot::AnnotationValue.part(&item), Part::Iri(_)));
        assert!(matches!(
            Slot::Entity(EntityKind::ObjectProperty).part(&item),
            Part::Entity(EntityKind::ObjectProperty, _)
        ));
    }

    #[test]
    fn blank_and_literal_parts_ignore_slot() {
        let blank = ContentItem::Node(GraphNode::blank("b"));
        let literal = ContentItem::Node(GraphNode::string("v"));
        for slot in [Slot::Individual, Slot::AnnotationValue, Slot::IArg] {
            assert!(matches!(slot.part(&blank), Part::Anonymous(_)));
        }
        assert!(matches!(Slot::DArg.part(&literal), Part::Literal(_)));
    }

    #[test]
    fn accepts_matches_decoding_rules() {
        let lit = Literal::string("v");
        let id = BlankId::new("b");
        assert!(Slot::AnnotationValue.accepts(&Part::Literal(&lit)));
        assert!(!Slot::AnnotationSubject.accepts(&Part::Literal(&lit)));
        assert!(Slot::IArg.accepts(&Part::Anonymous(&id)));
        assert!(!Slot::DArg.accepts(&Part::Anonymous(&id)));
        assert!(Slot::DeclaredEntity.accepts(&Part::Entity(EntityKind::Datatype, "x")));
        assert!(!Slot::ClassExpression.accepts(&Part::Entity(EntityKind::Datatype, "x")));
    }
}
