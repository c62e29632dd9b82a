//! Object kinds: the structural type discriminator of every wrapper.
//!
//! The declaration order of [`ObjectKind`] is the cross-kind canonical
//! order, and [`ObjectKind::ordinal`] seeds the hash fold.

use std::fmt;

use ontograph_graph::vocab;

/// The six kinds of named OWL entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// `owl:Class`.
    Class,
    /// `rdfs:Datatype`.
    Datatype,
    /// `owl:ObjectProperty`.
    ObjectProperty,
    /// `owl:DatatypeProperty`.
    DataProperty,
    /// `owl:AnnotationProperty`.
    AnnotationProperty,
    /// `owl:NamedIndividual`.
    NamedIndividual,
}

impl EntityKind {
    /// Every entity kind, in canonical order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Class,
        EntityKind::Datatype,
        EntityKind::ObjectProperty,
        EntityKind::DataProperty,
        EntityKind::AnnotationProperty,
        EntityKind::NamedIndividual,
    ];

    /// Returns the `rdf:type` object that declares an entity of this kind.
    #[must_use]
    pub fn declaration_type(self) -> &'static str {
        match self {
            EntityKind::Class => vocab::OWL_CLASS,
            EntityKind::Datatype => vocab::RDFS_DATATYPE,
            EntityKind::ObjectProperty => vocab::OWL_OBJECT_PROPERTY,
            EntityKind::DataProperty => vocab::OWL_DATATYPE_PROPERTY,
            EntityKind::AnnotationProperty => vocab::OWL_ANNOTATION_PROPERTY,
            EntityKind::NamedIndividual => vocab::OWL_NAMED_INDIVIDUAL,
        }
    }

    /// Maps a declaration type IRI back to its entity kind.
    #[must_use]
    pub fn from_declaration_type(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.declaration_type() == iri)
    }

    /// Returns the object kind of wrappers for this entity kind.
    #[must_use]
    pub fn object_kind(self) -> ObjectKind {
        match self {
            EntityKind::Class => ObjectKind::Class,
            EntityKind::Datatype => ObjectKind::Datatype,
            EntityKind::ObjectProperty => ObjectKind::ObjectProperty,
            EntityKind::DataProperty => ObjectKind::DataProperty,
            EntityKind::AnnotationProperty => ObjectKind::AnnotationProperty,
            EntityKind::NamedIndividual => ObjectKind::NamedIndividual,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.object_kind(), f)
    }
}

/// Structural type of a wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectKind {
    /// Named class.
    Class,
    /// Named datatype.
    Datatype,
    /// Named object property.
    ObjectProperty,
    /// Named data property.
    DataProperty,
    /// Named annotation property.
    AnnotationProperty,
    /// Named individual.
    NamedIndividual,
    /// Blank-node individual.
    AnonymousIndividual,
    /// Literal value.
    Literal,
    /// `owl:unionOf` class expression.
    ObjectUnionOf,
    /// `owl:intersectionOf` class expression.
    ObjectIntersectionOf,
    /// `owl:oneOf` enumeration of individuals.
    ObjectOneOf,
    /// `owl:complementOf` class expression.
    ObjectComplementOf,
    /// Existential restriction on an object property.
    ObjectSomeValuesFrom,
    /// Universal restriction on an object property.
    ObjectAllValuesFrom,
    /// Value restriction on an object property.
    ObjectHasValue,
    /// Existential restriction on a data property.
    DataSomeValuesFrom,
    /// `owl:oneOf` enumeration of literals.
    DataOneOf,
    /// SWRL variable.
    SwrlVariable,
    /// SWRL class atom.
    SwrlClassAtom,
    /// SWRL individual property atom.
    SwrlObjectPropertyAtom,
    /// SWRL data-valued property atom.
    SwrlDataPropertyAtom,
    /// SWRL built-in atom.
    SwrlBuiltInAtom,
    /// Annotation `(property, value, sub-annotations)`.
    Annotation,
    /// Entity declaration axiom.
    Declaration,
    /// `rdfs:subClassOf` axiom.
    SubClassOf,
    /// Disjoint classes axiom, pairwise or `owl:AllDisjointClasses`.
    DisjointClasses,
    /// Class assertion axiom.
    ClassAssertion,
    /// Object property assertion axiom.
    ObjectPropertyAssertion,
    /// Data property assertion axiom.
    DataPropertyAssertion,
    /// Annotation assertion axiom.
    AnnotationAssertion,
    /// `owl:propertyChainAxiom` axiom.
    SubPropertyChainOf,
}

impl ObjectKind {
    /// Position in the canonical kind order.
    #[must_use]
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Stable display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Class => "Class",
            ObjectKind::Datatype => "Datatype",
            ObjectKind::ObjectProperty => "ObjectProperty",
            ObjectKind::DataProperty => "DataProperty",
            ObjectKind::AnnotationProperty => "AnnotationProperty",
            ObjectKind::NamedIndividual => "NamedIndividual",
            ObjectKind::AnonymousIndividual => "AnonymousIndividual",
            ObjectKind::Literal => "Literal",
            ObjectKind::ObjectUnionOf => "ObjectUnionOf",
            ObjectKind::ObjectIntersectionOf => "ObjectIntersectionOf",
            ObjectKind::ObjectOneOf => "ObjectOneOf",
            ObjectKind::ObjectComplementOf => "ObjectComplementOf",
            ObjectKind::ObjectSomeValuesFrom => "ObjectSomeValuesFrom",
            ObjectKind::ObjectAllValuesFrom => "ObjectAllValuesFrom",
            ObjectKind::ObjectHasValue => "ObjectHasValue",
            ObjectKind::DataSomeValuesFrom => "DataSomeValuesFrom",
            ObjectKind::DataOneOf => "DataOneOf",
            ObjectKind::SwrlVariable => "Variable",
            ObjectKind::SwrlClassAtom => "ClassAtom",
            ObjectKind::SwrlObjectPropertyAtom => "ObjectPropertyAtom",
            ObjectKind::SwrlDataPropertyAtom => "DataPropertyAtom",
            ObjectKind::SwrlBuiltInAtom => "BuiltInAtom",
            ObjectKind::Annotation => "Annotation",
            ObjectKind::Declaration => "Declaration",
            ObjectKind::SubClassOf => "SubClassOf",
            ObjectKind::DisjointClasses => "DisjointClasses",
            ObjectKind::ClassAssertion => "ClassAssertion",
            ObjectKind::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            ObjectKind::DataPropertyAssertion => "DataPropertyAssertion",
            ObjectKind::AnnotationAssertion => "AnnotationAssertion",
            ObjectKind::SubPropertyChainOf => "SubPropertyChainOf",
        }
    }

    /// Returns the entity kind for named entities.
    #[must_use]
    pub fn as_entity(self) -> Option<EntityKind> {
        match self {
            ObjectKind::Class => Some(EntityKind::Class),
            ObjectKind::Datatype => Some(EntityKind::Datatype),
            ObjectKind::ObjectProperty => Some(EntityKind::ObjectProperty),
            ObjectKind::DataProperty => Some(EntityKind::DataProperty),
            ObjectKind::AnnotationProperty => Some(EntityKind::AnnotationProperty),
            ObjectKind::NamedIndividual => Some(EntityKind::NamedIndividual),
            _ => None,
        }
    }

    /// Named entities, anonymous individuals and literals. A primitive is
    /// fully identified by its node and never touches the graph.
    #[must_use]
    pub fn is_primitive(self) -> bool {
        self.as_entity().is_some()
            || matches!(self, ObjectKind::AnonymousIndividual | ObjectKind::Literal)
    }

    /// Axiom kinds.
    #[must_use]
    pub fn is_axiom(self) -> bool {
        self >= ObjectKind::Declaration
    }

    /// Statement-like kinds, rooted at a triple rather than a node.
    #[must_use]
    pub fn is_statement(self) -> bool {
        self >= ObjectKind::Annotation
    }

    /// Kinds that may stand where a class expression is expected.
    #[must_use]
    pub fn is_class_expression(self) -> bool {
        self == ObjectKind::Class
            || (self >= ObjectKind::ObjectUnionOf && self <= ObjectKind::DataSomeValuesFrom)
    }

    /// Kinds that may stand where a data range is expected.
    #[must_use]
    pub fn is_data_range(self) -> bool {
        matches!(self, ObjectKind::Datatype | ObjectKind::DataOneOf)
    }

    /// SWRL atom kinds.
    #[must_use]
    pub fn is_swrl_atom(self) -> bool {
        self >= ObjectKind::SwrlClassAtom && self <= ObjectKind::SwrlBuiltInAtom
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_types_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(
                EntityKind::from_declaration_type(kind.declaration_type()),
                Some(kind)
            );
            assert_eq!(kind.object_kind().as_entity(), Some(kind));
        }
        assert_eq!(EntityKind::from_declaration_type(vocab::OWL_THING), None);
    }

    #[test]
    fn families_partition_kinds() {
        assert!(ObjectKind::Literal.is_primitive());
        assert!(!ObjectKind::SwrlVariable.is_primitive());
        assert!(ObjectKind::Annotation.is_statement());
        assert!(!ObjectKind::Annotation.is_axiom());
        assert!(ObjectKind::SubPropertyChainOf.is_axiom());
        assert!(ObjectKind::DataSomeValuesFrom.is_class_expression());
        assert!(!ObjectKind::DataOneOf.is_class_expression());
        assert!(ObjectKind::SwrlBuiltInAtom.is_swrl_atom());
        assert!(!ObjectKind::SwrlVariable.is_swrl_atom());
    }

    #[test]
    fn ordinal_follows_declaration_order() {
        assert_eq!(ObjectKind::Class.ordinal(), 0);
        assert!(ObjectKind::Annotation.ordinal() < ObjectKind::Declaration.ordinal());
        assert!(ObjectKind::Class < ObjectKind::NamedIndividual);
    }
}
