//! Detaching graph-bound objects into foreign representations.

use ontograph_graph::{BlankId, Literal};

use crate::error::{ObjectError, Result};
use crate::kind::{EntityKind, ObjectKind};
use crate::object::OntObject;
use crate::part::{OwlObject, Part};

/// A fully resolved component handed to a [`ForeignFactory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Component<O> {
    /// A bare IRI.
    Iri(String),
    /// A named entity.
    Entity(EntityKind, String),
    /// An anonymous individual.
    Anonymous(BlankId),
    /// A literal.
    Literal(Literal),
    /// A nested, already detached object.
    Object(O),
}

impl<O: OwlObject> Component<O> {
    /// Views the component as a part. Primitive nested objects collapse to
    /// their primitive part.
    #[must_use]
    pub fn as_part(&self) -> Part<'_> {
        match self {
            Component::Iri(iri) => Part::Iri(iri),
            Component::Entity(kind, iri) => Part::Entity(*kind, iri),
            Component::Anonymous(id) => Part::Anonymous(id),
            Component::Literal(literal) => Part::Literal(literal),
            Component::Object(object) => Part::object(object),
        }
    }
}

/// Builds graph-independent objects from resolved components.
pub trait ForeignFactory {
    /// The foreign object type.
    type Object;

    /// Builds one object. `components` are in canonical content order.
    fn build(&self, kind: ObjectKind, components: Vec<Component<Self::Object>>) -> Self::Object;
}

/// Detaches `object` and, recursively, every nested wrapper.
///
/// Once the content of `object` has been materialized this performs no
/// graph access and cannot fail.
pub(crate) fn erase<F: ForeignFactory>(object: &OntObject, factory: &F) -> Result<F::Object> {
    let components = object
        .parts()?
        .into_iter()
        .map(|part| component(part, factory))
        .collect::<Result<Vec<_>>>()?;
    Ok(factory.build(object.kind(), components))
}

fn component<F: ForeignFactory>(part: Part<'_>, factory: &F) -> Result<Component<F::Object>> {
    Ok(match part {
        Part::Iri(iri) => Component::Iri(iri.to_owned()),
        Part::Entity(kind, iri) => Component::Entity(kind, iri.to_owned()),
        Part::Anonymous(id) => Component::Anonymous(id.clone()),
        Part::Literal(literal) => Component::Literal(literal.clone()),
        Part::Object(nested) => {
            let nested = nested.as_ont_object().ok_or_else(|| {
                ObjectError::Structural(format!("{} component is not graph-bound", nested.kind()))
            })?;
            Component::Object(erase(nested, factory)?)
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{ModelConfig, OntModel};
    use ontograph_graph::turtle::parse_turtle;

    /// Renders objects as nested strings.
    struct Printer;

    impl ForeignFactory for Printer {
        type Object = String;

        fn build(&self, kind: ObjectKind, components: Vec<Component<String>>) -> String {
            let rendered: Vec<String> = components
                .into_iter()
                .map(|c| match c {
                    Component::Iri(iri) => iri,
                    Component::Entity(kind, iri) => format!("{kind}:{iri}"),
                    Component::Anonymous(id) => id.to_string(),
                    Component::Literal(literal) => literal.to_string(),
                    Component::Object(nested) => nested,
                })
                .collect();
            format!("{kind}({})", rendered.join(" "))
        }
    }

    #[test]
    fn erase_recurses_into_nested_wrappers() {
        let doc = r#"
            @prefix ex: <http://example.org/> .
            @prefix owl: <http://www.w3.org/2002/07/owl#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            ex:p a owl:ObjectProperty .
            ex:C rdfs:subClassOf [ owl:onProperty ex:p ; owl:someValuesFrom ex:D ] .
        "#;
        let model = OntModel::new(parse_turtle(doc).unwrap(), ModelConfig::default());
        let axiom = model.axioms_of(ObjectKind::SubClassOf).unwrap().pop().unwrap();
        let erased = axiom.erase(&Printer).unwrap();
        assert_eq!(
            erased,
            "SubClassOf(Class:http://example.org/C ObjectSomeValuesFrom(\
             ObjectProperty:http://example.org/p Class:http://example.org/D))"
        );
    }
}
