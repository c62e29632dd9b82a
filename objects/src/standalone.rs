//! Graph-independent objects.
//!
//! [`StandaloneObject`] is the foreign representation produced by detaching
//! (and usable on its own): it owns its components outright, hashes with
//! the same fold as graph-bound wrappers and compares equal to them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ontograph_graph::{BlankId, Literal};

use crate::composite;
use crate::detach::{Component, ForeignFactory};
use crate::equality::objects_equal;
use crate::error::{ObjectError, Result};
use crate::hash;
use crate::kind::{EntityKind, ObjectKind};
use crate::part::{try_dedup_by, try_sort_by, OwlObject, Part};

#[derive(Debug)]
struct StandaloneInner {
    kind: ObjectKind,
    components: Vec<Component<StandaloneObject>>,
    hash: i64,
}

/// An immutable object with no graph or model reference.
#[derive(Clone, Debug)]
pub struct StandaloneObject(Arc<StandaloneInner>);

impl StandaloneObject {
    /// Builds a validated object. Set operands and annotations are brought
    /// into canonical order and deduplicated; nested primitives collapse
    /// into primitive components.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] if a component is not allowed in
    /// its position or the component count does not fit `kind`.
    pub fn new(kind: ObjectKind, components: Vec<Component<StandaloneObject>>) -> Result<Self> {
        let shape = composite::shape(kind);
        let mut components: Vec<_> = components.into_iter().map(collapse).collect();
        let fixed = shape.fixed.len();
        if components.len() < fixed {
            return Err(ObjectError::Structural(format!(
                "{kind} needs {fixed} components, got {}",
                components.len()
            )));
        }

        let annotations_start = if shape.annotated {
            fixed
                + components[fixed..]
                    .iter()
                    .take_while(|c| !is_annotation(c))
                    .count()
        } else {
            components.len()
        };
        if shape.operands.is_none() && annotations_start != fixed {
            return Err(ObjectError::Structural(format!(
                "{kind} takes exactly {fixed} components"
            )));
        }

        for (index, component) in components.iter().enumerate() {
            let slot = shape.slot_at(index, annotations_start);
            if !slot.accepts(&component.as_part()) {
                return Err(ObjectError::Structural(format!(
                    "{kind}: {} not allowed in {slot:?} position {index}",
                    component.as_part()
                )));
            }
        }

        let annotations = components.split_off(annotations_start);
        let mut operands = components.split_off(fixed);
        if let Some((composite::Operands::Set(_), _)) = shape.operands {
            operands = canonical_set(operands)?;
        }
        components.extend(operands);
        components.extend(canonical_set(annotations)?);
        Ok(Self::assemble(kind, components))
    }

    /// Builds an object from components already in canonical order.
    fn assemble(kind: ObjectKind, components: Vec<Component<StandaloneObject>>) -> Self {
        let hash = match components.as_slice() {
            [only] if kind.is_primitive() => component_hash(only),
            _ => hash::fold(hash::seed(kind), components.iter().map(component_hash)),
        };
        Self(Arc::new(StandaloneInner {
            kind,
            components,
            hash,
        }))
    }

    /// A named entity.
    #[must_use]
    pub fn entity(kind: EntityKind, iri: impl Into<String>) -> Self {
        Self::assemble(kind.object_kind(), vec![Component::Entity(kind, iri.into())])
    }

    /// A literal.
    #[must_use]
    pub fn literal(literal: Literal) -> Self {
        Self::assemble(ObjectKind::Literal, vec![Component::Literal(literal)])
    }

    /// An anonymous individual.
    #[must_use]
    pub fn anonymous(id: BlankId) -> Self {
        Self::assemble(ObjectKind::AnonymousIndividual, vec![Component::Anonymous(id)])
    }

    /// A SWRL variable.
    #[must_use]
    pub fn swrl_variable(iri: impl Into<String>) -> Self {
        Self::assemble(ObjectKind::SwrlVariable, vec![Component::Iri(iri.into())])
    }

    /// An annotation `(property, value)` with optional sub-annotations.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] if `value` is not an IRI,
    /// anonymous individual or literal, or a sub-annotation is not an
    /// annotation.
    pub fn annotation(
        property: impl Into<String>,
        value: Component<StandaloneObject>,
        annotations: Vec<StandaloneObject>,
    ) -> Result<Self> {
        let mut components = vec![
            Component::Entity(EntityKind::AnnotationProperty, property.into()),
            value,
        ];
        components.extend(annotations.into_iter().map(Component::Object));
        Self::new(ObjectKind::Annotation, components)
    }

    /// The components, in canonical content order.
    #[must_use]
    pub fn components(&self) -> &[Component<StandaloneObject>] {
        &self.0.components
    }

    /// The nested annotations.
    #[must_use]
    pub fn annotations(&self) -> Vec<&StandaloneObject> {
        self.0
            .components
            .iter()
            .filter_map(|c| match c {
                Component::Object(o) if o.0.kind == ObjectKind::Annotation => Some(o),
                _ => None,
            })
            .collect()
    }
}

fn is_annotation(component: &Component<StandaloneObject>) -> bool {
    matches!(component, Component::Object(o) if o.0.kind == ObjectKind::Annotation)
}

/// Replaces a nested primitive object by its primitive component.
fn collapse(component: Component<StandaloneObject>) -> Component<StandaloneObject> {
    match component {
        Component::Object(object) if object.0.kind.is_primitive() => {
            object.0.components.first().cloned().unwrap_or(Component::Object(object))
        }
        other => other,
    }
}

fn canonical_set(mut items: Vec<Component<StandaloneObject>>) -> Result<Vec<Component<StandaloneObject>>> {
    try_sort_by(&mut items, |a, b| a.as_part().canonical_cmp(&b.as_part()))?;
    try_dedup_by(items, |a, b| a.as_part().structural_eq(&b.as_part()))
}

fn component_hash(component: &Component<StandaloneObject>) -> i64 {
    match component {
        Component::Iri(iri) => hash::iri_hash(iri),
        Component::Entity(kind, iri) => hash::entity_hash(*kind, iri),
        Component::Anonymous(id) => hash::anonymous_hash(id),
        Component::Literal(literal) => hash::literal_hash(literal),
        Component::Object(object) => object.0.hash,
    }
}

impl OwlObject for StandaloneObject {
    fn kind(&self) -> ObjectKind {
        self.0.kind
    }

    fn hash_code(&self) -> Result<i64> {
        Ok(self.0.hash)
    }

    fn parts(&self) -> Result<Vec<Part<'_>>> {
        Ok(self.0.components.iter().map(Component::as_part).collect())
    }

    fn primitive_part(&self) -> Option<Part<'_>> {
        if self.0.kind.is_primitive() {
            self.0.components.first().map(Component::as_part)
        } else {
            None
        }
    }
}

impl PartialEq for StandaloneObject {
    fn eq(&self, other: &Self) -> bool {
        objects_equal(self, other).unwrap_or(false)
    }
}

impl Eq for StandaloneObject {}

impl Hash for StandaloneObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash.hash(state);
    }
}

impl fmt::Display for StandaloneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.0.kind)?;
        for (index, component) in self.0.components.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match component {
                Component::Object(object) => write!(f, "{object}")?,
                other => write!(f, "{}", other.as_part())?,
            }
        }
        f.write_str(")")
    }
}

/// [`ForeignFactory`] producing [`StandaloneObject`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandaloneFactory;

impl ForeignFactory for StandaloneFactory {
    type Object = StandaloneObject;

    fn build(&self, kind: ObjectKind, components: Vec<Component<StandaloneObject>>) -> StandaloneObject {
        StandaloneObject::assemble(kind, components)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::part::canonical_cmp;

    fn label(value: &str) -> StandaloneObject {
        StandaloneObject::annotation(
            "http://www.w3.org/2000/01/rdf-schema#label",
            Component::Literal(Literal::string(value)),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn primitive_hash_matches_part_hash() {
        let class = StandaloneObject::entity(EntityKind::Class, "http://example.org/A");
        assert_eq!(
            class.hash_code().unwrap(),
            hash::entity_hash(EntityKind::Class, "http://example.org/A")
        );
        let lit = StandaloneObject::literal(Literal::string("x"));
        assert_eq!(lit.hash_code().unwrap(), hash::literal_hash(&Literal::string("x")));
    }

    #[test]
    fn set_operands_are_canonicalized() {
        let a = StandaloneObject::entity(EntityKind::Class, "http://example.org/A");
        let b = StandaloneObject::entity(EntityKind::Class, "http://example.org/B");
        let ab = StandaloneObject::new(
            ObjectKind::ObjectUnionOf,
            vec![Component::Object(b.clone()), Component::Object(a.clone()), Component::Object(b)],
        )
        .unwrap();
        let ba = StandaloneObject::new(
            ObjectKind::ObjectUnionOf,
            vec![
                Component::Entity(EntityKind::Class, "http://example.org/A".into()),
                Component::Entity(EntityKind::Class, "http://example.org/B".into()),
            ],
        )
        .unwrap();
        assert_eq!(ab.components().len(), 2);
        assert_eq!(ab, ba);
        assert_eq!(ab.hash_code().unwrap(), ba.hash_code().unwrap());
    }

    #[test]
    fn annotations_are_sorted_and_deduplicated() {
        let outer = StandaloneObject::annotation(
            "http://www.w3.org/2000/01/rdf-schema#comment",
            Component::Literal(Literal::string("c")),
            vec![label("z"), label("a"), label("z")],
        )
        .unwrap();
        let nested = outer.annotations();
        assert_eq!(nested.len(), 2);
        assert_eq!(
            canonical_cmp(nested[0], nested[1]).unwrap(),
            std::cmp::Ordering::Less
        );
    }

    #[test]
    fn rejects_misplaced_components() {
        let literal_subject = StandaloneObject::new(
            ObjectKind::SubClassOf,
            vec![
                Component::Literal(Literal::string("x")),
                Component::Entity(EntityKind::Class, "http://example.org/B".into()),
            ],
        );
        assert!(matches!(literal_subject, Err(ObjectError::Structural(_))));
        let too_many = StandaloneObject::new(
            ObjectKind::ObjectComplementOf,
            vec![
                Component::Entity(EntityKind::Class, "http://example.org/A".into()),
                Component::Entity(EntityKind::Class, "http://example.org/B".into()),
            ],
        );
        assert!(too_many.is_err());
    }

    #[test]
    fn display_renders_nested_structure() {
        let variable = StandaloneObject::swrl_variable("urn:swrl#x");
        let atom = StandaloneObject::new(
            ObjectKind::SwrlClassAtom,
            vec![
                Component::Entity(EntityKind::Class, "http://example.org/A".into()),
                Component::Object(variable),
            ],
        )
        .unwrap();
        assert_eq!(
            atom.to_string(),
            "ClassAtom(Class(<http://example.org/A>) Variable(<urn:swrl#x>))"
        );
    }
}
