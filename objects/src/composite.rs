//! Composite shapes: one generic reader and triple emitter for every kind.
//!
//! A [`Shape`] lists the fixed argument positions of a kind (each a slot
//! codec plus where its node comes from), an optional operand section
//! (canonical set or ordered list), and whether a trailing annotation
//! section follows. Set-operand and fixed-arity composites share the same
//! cache, hash and equality code; only the table differs.

use std::collections::BTreeSet;

use ontograph_graph::{vocab, Graph, GraphNode, GraphRead, Triple};

use crate::annotations;
use crate::content::{Content, ContentItem};
use crate::error::{ObjectError, Result};
use crate::factory::ModelObjectFactory;
use crate::hash;
use crate::kind::{EntityKind, ObjectKind};
use crate::node_ref::Location;
use crate::object::OntObject;
use crate::part::{try_dedup_by, try_sort_by};
use crate::slot::Slot;

/// Where the node of a fixed position comes from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Source {
    /// The root node itself.
    Root,
    /// Subject of the root triple.
    Subject,
    /// Predicate of the root triple.
    Predicate,
    /// Object of the root triple.
    Object,
    /// Object of the given edge off the root node.
    Edge(&'static str),
}

/// Operand section semantics.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Operands {
    /// Canonically sorted, duplicate-free.
    Set(Slot),
    /// Graph list order.
    Ordered(Slot),
}

impl Operands {
    pub(crate) fn slot(self) -> Slot {
        match self {
            Operands::Set(slot) | Operands::Ordered(slot) => slot,
        }
    }
}

/// Where the operand nodes come from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum OperandSource {
    /// RDF list at the given edge off the root node (or the root subject).
    List(&'static str),
    /// RDF list at the object of the root triple.
    ObjectList,
    /// Subject and object of `owl:disjointWith`, or the `owl:members` list
    /// of an `owl:AllDisjointClasses` node.
    Disjoint,
}

/// Layout of one kind's content array.
#[derive(Debug)]
pub(crate) struct Shape {
    pub(crate) fixed: &'static [(Slot, Source)],
    pub(crate) operands: Option<(Operands, OperandSource)>,
    pub(crate) annotated: bool,
}

impl Shape {
    const fn fixed(fixed: &'static [(Slot, Source)]) -> Self {
        Self {
            fixed,
            operands: None,
            annotated: false,
        }
    }

    const fn set(slot: Slot, list: &'static str) -> Self {
        Self {
            fixed: &[],
            operands: Some((Operands::Set(slot), OperandSource::List(list))),
            annotated: false,
        }
    }

    const fn axiom(fixed: &'static [(Slot, Source)]) -> Self {
        Self {
            fixed,
            operands: None,
            annotated: true,
        }
    }

    /// Slot of the item at `index`, given where the annotation section starts.
    pub(crate) fn slot_at(&self, index: usize, annotations_start: usize) -> Slot {
        if index >= annotations_start {
            Slot::Annotation
        } else if let Some((slot, _)) = self.fixed.get(index) {
            *slot
        } else {
            self.operands.map_or(Slot::Annotation, |(operands, _)| operands.slot())
        }
    }
}

const OBJECT_PROPERTY: Slot = Slot::Entity(EntityKind::ObjectProperty);
const DATA_PROPERTY: Slot = Slot::Entity(EntityKind::DataProperty);
const ANNOTATION_PROPERTY: Slot = Slot::Entity(EntityKind::AnnotationProperty);

static CLASS: Shape = Shape::fixed(&[(Slot::Entity(EntityKind::Class), Source::Root)]);
static DATATYPE: Shape = Shape::fixed(&[(Slot::Entity(EntityKind::Datatype), Source::Root)]);
static OBJECT_PROPERTY_ENTITY: Shape = Shape::fixed(&[(OBJECT_PROPERTY, Source::Root)]);
static DATA_PROPERTY_ENTITY: Shape = Shape::fixed(&[(DATA_PROPERTY, Source::Root)]);
static ANNOTATION_PROPERTY_ENTITY: Shape = Shape::fixed(&[(ANNOTATION_PROPERTY, Source::Root)]);
static NAMED_INDIVIDUAL: Shape =
    Shape::fixed(&[(Slot::Entity(EntityKind::NamedIndividual), Source::Root)]);
static ANONYMOUS_INDIVIDUAL: Shape = Shape::fixed(&[(Slot::Individual, Source::Root)]);
static LITERAL: Shape = Shape::fixed(&[(Slot::Literal, Source::Root)]);

static UNION_OF: Shape = Shape::set(Slot::ClassExpression, vocab::OWL_UNION_OF);
static INTERSECTION_OF: Shape = Shape::set(Slot::ClassExpression, vocab::OWL_INTERSECTION_OF);
static ONE_OF: Shape = Shape::set(Slot::Individual, vocab::OWL_ONE_OF);
static COMPLEMENT_OF: Shape =
    Shape::fixed(&[(Slot::ClassExpression, Source::Edge(vocab::OWL_COMPLEMENT_OF))]);
static SOME_VALUES_FROM: Shape = Shape::fixed(&[
    (OBJECT_PROPERTY, Source::Edge(vocab::OWL_ON_PROPERTY)),
    (Slot::ClassExpression, Source::Edge(vocab::OWL_SOME_VALUES_FROM)),
]);
static ALL_VALUES_FROM: Shape = Shape::fixed(&[
    (OBJECT_PROPERTY, Source::Edge(vocab::OWL_ON_PROPERTY)),
    (Slot::ClassExpression, Source::Edge(vocab::OWL_ALL_VALUES_FROM)),
]);
static HAS_VALUE: Shape = Shape::fixed(&[
    (OBJECT_PROPERTY, Source::Edge(vocab::OWL_ON_PROPERTY)),
    (Slot::Individual, Source::Edge(vocab::OWL_HAS_VALUE)),
]);
static DATA_SOME_VALUES_FROM: Shape = Shape::fixed(&[
    (DATA_PROPERTY, Source::Edge(vocab::OWL_ON_PROPERTY)),
    (Slot::DataRange, Source::Edge(vocab::OWL_SOME_VALUES_FROM)),
]);
static DATA_ONE_OF: Shape = Shape::set(Slot::Literal, vocab::OWL_ONE_OF);

static SWRL_VARIABLE: Shape = Shape::fixed(&[(Slot::Iri, Source::Root)]);
static SWRL_CLASS_ATOM: Shape = Shape::fixed(&[
    (Slot::ClassExpression, Source::Edge(vocab::SWRL_CLASS_PREDICATE)),
    (Slot::IArg, Source::Edge(vocab::SWRL_ARGUMENT1)),
]);
static SWRL_OBJECT_PROPERTY_ATOM: Shape = Shape::fixed(&[
    (OBJECT_PROPERTY, Source::Edge(vocab::SWRL_PROPERTY_PREDICATE)),
    (Slot::IArg, Source::Edge(vocab::SWRL_ARGUMENT1)),
    (Slot::IArg, Source::Edge(vocab::SWRL_ARGUMENT2)),
]);
static SWRL_DATA_PROPERTY_ATOM: Shape = Shape::fixed(&[
    (DATA_PROPERTY, Source::Edge(vocab::SWRL_PROPERTY_PREDICATE)),
    (Slot::IArg, Source::Edge(vocab::SWRL_ARGUMENT1)),
    (Slot::DArg, Source::Edge(vocab::SWRL_ARGUMENT2)),
]);
static SWRL_BUILTIN_ATOM: Shape = Shape {
    fixed: &[(Slot::Iri, Source::Edge(vocab::SWRL_BUILTIN))],
    operands: Some((Operands::Ordered(Slot::DArg), OperandSource::List(vocab::SWRL_ARGUMENTS))),
    annotated: false,
};

static ANNOTATION: Shape = Shape::axiom(&[
    (ANNOTATION_PROPERTY, Source::Predicate),
    (Slot::AnnotationValue, Source::Object),
]);
static DECLARATION: Shape = Shape::axiom(&[(Slot::DeclaredEntity, Source::Subject)]);
static SUB_CLASS_OF: Shape = Shape::axiom(&[
    (Slot::ClassExpression, Source::Subject),
    (Slot::ClassExpression, Source::Object),
]);
static DISJOINT_CLASSES: Shape = Shape {
    fixed: &[],
    operands: Some((Operands::Set(Slot::ClassExpression), OperandSource::Disjoint)),
    annotated: true,
};
static CLASS_ASSERTION: Shape = Shape::axiom(&[
    (Slot::ClassExpression, Source::Object),
    (Slot::Individual, Source::Subject),
]);
static OBJECT_PROPERTY_ASSERTION: Shape = Shape::axiom(&[
    (OBJECT_PROPERTY, Source::Predicate),
    (Slot::Individual, Source::Subject),
    (Slot::Individual, Source::Object),
]);
static DATA_PROPERTY_ASSERTION: Shape = Shape::axiom(&[
    (DATA_PROPERTY, Source::Predicate),
    (Slot::Individual, Source::Subject),
    (Slot::Literal, Source::Object),
]);
static ANNOTATION_ASSERTION: Shape = Shape::axiom(&[
    (ANNOTATION_PROPERTY, Source::Predicate),
    (Slot::AnnotationSubject, Source::Subject),
    (Slot::AnnotationValue, Source::Object),
]);
static SUB_PROPERTY_CHAIN_OF: Shape = Shape {
    fixed: &[(OBJECT_PROPERTY, Source::Subject)],
    operands: Some((Operands::Ordered(OBJECT_PROPERTY), OperandSource::ObjectList)),
    annotated: true,
};

/// Returns the content layout of `kind`.
pub(crate) fn shape(kind: ObjectKind) -> &'static Shape {
    match kind {
        ObjectKind::Class => &CLASS,
        ObjectKind::Datatype => &DATATYPE,
        ObjectKind::ObjectProperty => &OBJECT_PROPERTY_ENTITY,
        ObjectKind::DataProperty => &DATA_PROPERTY_ENTITY,
        ObjectKind::AnnotationProperty => &ANNOTATION_PROPERTY_ENTITY,
        ObjectKind::NamedIndividual => &NAMED_INDIVIDUAL,
        ObjectKind::AnonymousIndividual => &ANONYMOUS_INDIVIDUAL,
        ObjectKind::Literal => &LITERAL,
        ObjectKind::ObjectUnionOf => &UNION_OF,
        ObjectKind::ObjectIntersectionOf => &INTERSECTION_OF,
        ObjectKind::ObjectOneOf => &ONE_OF,
        ObjectKind::ObjectComplementOf => &COMPLEMENT_OF,
        ObjectKind::ObjectSomeValuesFrom => &SOME_VALUES_FROM,
        ObjectKind::ObjectAllValuesFrom => &ALL_VALUES_FROM,
        ObjectKind::ObjectHasValue => &HAS_VALUE,
        ObjectKind::DataSomeValuesFrom => &DATA_SOME_VALUES_FROM,
        ObjectKind::DataOneOf => &DATA_ONE_OF,
        ObjectKind::SwrlVariable => &SWRL_VARIABLE,
        ObjectKind::SwrlClassAtom => &SWRL_CLASS_ATOM,
        ObjectKind::SwrlObjectPropertyAtom => &SWRL_OBJECT_PROPERTY_ATOM,
        ObjectKind::SwrlDataPropertyAtom => &SWRL_DATA_PROPERTY_ATOM,
        ObjectKind::SwrlBuiltInAtom => &SWRL_BUILTIN_ATOM,
        ObjectKind::Annotation => &ANNOTATION,
        ObjectKind::Declaration => &DECLARATION,
        ObjectKind::SubClassOf => &SUB_CLASS_OF,
        ObjectKind::DisjointClasses => &DISJOINT_CLASSES,
        ObjectKind::ClassAssertion => &CLASS_ASSERTION,
        ObjectKind::ObjectPropertyAssertion => &OBJECT_PROPERTY_ASSERTION,
        ObjectKind::DataPropertyAssertion => &DATA_PROPERTY_ASSERTION,
        ObjectKind::AnnotationAssertion => &ANNOTATION_ASSERTION,
        ObjectKind::SubPropertyChainOf => &SUB_PROPERTY_CHAIN_OF,
    }
}

/// Folds the hash of a content array.
///
/// Primitives hash as their single part so that a wrapper and a plain
/// primitive component agree.
pub(crate) fn content_hash(kind: ObjectKind, items: &[ContentItem], annotations_start: usize) -> Result<i64> {
    let shape = shape(kind);
    if kind.is_primitive() {
        return match items {
            [item] => shape.slot_at(0, annotations_start).part(item).hash_code(),
            _ => Err(ObjectError::Structural(format!(
                "{kind} must have exactly one component"
            ))),
        };
    }
    let mut acc = hash::seed(kind);
    for (index, item) in items.iter().enumerate() {
        let part = shape.slot_at(index, annotations_start).part(item);
        acc = hash::combine(acc, part.hash_code()?);
    }
    Ok(acc)
}

/// Content of an object identified by its root node alone (primitives and
/// SWRL variables). Performs no graph access.
pub(crate) fn root_content(kind: ObjectKind, root: &GraphNode) -> Result<Content> {
    let items = vec![ContentItem::Node(root.clone())];
    let hash = content_hash(kind, &items, 1)?;
    Ok(Content::new(items, 1, hash))
}

fn triple_part(location: &Location, source: Source) -> Option<&GraphNode> {
    match (location, source) {
        (Location::Node(node), Source::Root) => Some(node),
        (Location::Triple { subject, .. }, Source::Subject) => Some(subject),
        (Location::Triple { predicate, .. }, Source::Predicate) => Some(predicate),
        (Location::Triple { object, .. }, Source::Object) => Some(object),
        _ => None,
    }
}

fn resolve(graph: &Graph, location: &Location, source: Source) -> Result<GraphNode> {
    if let Source::Edge(predicate) = source {
        let root = location_root(location);
        return graph
            .object(root, predicate)
            .ok_or_else(|| ObjectError::structural(root, format!("missing <{predicate}>")));
    }
    triple_part(location, source).cloned().ok_or_else(|| {
        ObjectError::Structural(format!("{source:?} is not available at {location}"))
    })
}

fn location_root(location: &Location) -> &GraphNode {
    match location {
        Location::Node(node) => node,
        Location::Triple { subject, .. } => subject,
    }
}

/// Head of the operand list and the edge pointing at it, if any.
fn operand_list(
    graph: &Graph,
    location: &Location,
    source: OperandSource,
) -> Result<Option<(Option<Triple>, GraphNode)>> {
    let root = location_root(location);
    let edge_list = |predicate: &str| -> Result<Option<(Option<Triple>, GraphNode)>> {
        let head = graph
            .object(root, predicate)
            .ok_or_else(|| ObjectError::structural(root, format!("missing <{predicate}>")))?;
        let edge = Triple::new(root.clone(), GraphNode::uri(predicate), head.clone());
        Ok(Some((Some(edge), head)))
    };
    match (source, location) {
        (OperandSource::List(predicate), _) => edge_list(predicate),
        (OperandSource::ObjectList, Location::Triple { object, .. }) => Ok(Some((None, object.clone()))),
        (OperandSource::Disjoint, Location::Triple { predicate, .. })
            if predicate.is(vocab::OWL_DISJOINT_WITH) =>
        {
            Ok(None)
        }
        (OperandSource::Disjoint, Location::Triple { .. }) => edge_list(vocab::OWL_MEMBERS),
        (_, Location::Node(node)) => Err(ObjectError::structural(node, "operand list needs a triple root")),
    }
}

fn operand_nodes(graph: &Graph, location: &Location, source: OperandSource) -> Result<Vec<GraphNode>> {
    match operand_list(graph, location, source)? {
        Some((_, head)) => Ok(graph.list_members(&head)?),
        None => match location {
            Location::Triple { subject, object, .. } => Ok(vec![subject.clone(), object.clone()]),
            Location::Node(node) => Err(ObjectError::structural(node, "pairwise operands need a triple root")),
        },
    }
}

/// Decodes one node and materializes a nested wrapper from the same
/// snapshot.
fn decode(slot: Slot, factory: &ModelObjectFactory, node: &GraphNode, location: &Location) -> Result<ContentItem> {
    let item = slot.decode(factory, node, location)?;
    if let ContentItem::Object(nested) = &item {
        nested.content_in(factory)?;
    }
    Ok(item)
}

/// Materializes the content of a graph-bound composite.
pub(crate) fn read(object: &OntObject, factory: &ModelObjectFactory) -> Result<Content> {
    let kind = object.kind();
    let shape = shape(kind);
    let location = object.node_ref().location();
    let graph = factory.graph();

    let mut items = Vec::with_capacity(shape.fixed.len());
    for (slot, source) in shape.fixed {
        let node = resolve(graph, location, *source)?;
        items.push(decode(*slot, factory, &node, location)?);
    }

    if let Some((operands, source)) = shape.operands {
        let slot = operands.slot();
        let mut decoded = operand_nodes(graph, location, source)?
            .iter()
            .map(|node| decode(slot, factory, node, location))
            .collect::<Result<Vec<_>>>()?;
        if let Operands::Set(_) = operands {
            try_sort_by(&mut decoded, |a, b| slot.part(a).canonical_cmp(&slot.part(b)))?;
            decoded = try_dedup_by(decoded, |a, b| slot.part(a).structural_eq(&slot.part(b)))?;
        }
        items.extend(decoded);
    }

    let annotations_start = items.len();
    // Annotations come from `factory`'s snapshot whatever the simple flag says.
    if shape.annotated {
        if let Some(triple) = object.node_ref().as_triple() {
            let collected = annotations::collect(factory, &triple, object.anchor())?;
            items.extend(collected.into_iter().map(ContentItem::Object));
        }
    }

    let hash = content_hash(kind, &items, annotations_start)?;
    tracing::trace!(%kind, root = %location, items = items.len(), "materialized content");
    Ok(Content::new(items, annotations_start, hash))
}

/// Adds the triples of one origin of `object` to `out`: its root triple,
/// structural edges and list cells, nested objects' triples, and the
/// structural triples of its reification resources.
pub(crate) fn emit(
    object: &OntObject,
    content: &Content,
    factory: &ModelObjectFactory,
    out: &mut BTreeSet<Triple>,
) -> Result<()> {
    let kind = object.kind();
    if kind.is_primitive() {
        return Ok(());
    }
    let shape = shape(kind);
    let graph = factory.graph();
    let location = object.node_ref().location();

    match location {
        Location::Node(root) => {
            out.extend(graph.find(Some(root), Some(&GraphNode::uri(vocab::RDF_TYPE)), None));
        }
        Location::Triple { .. } => {
            out.insert(object.node_ref().to_triple_in(graph)?);
        }
    }

    for ((_, source), item) in shape.fixed.iter().zip(content.body()) {
        if let Source::Edge(predicate) = source {
            out.insert(Triple::new(
                location_root(location).clone(),
                GraphNode::uri(*predicate),
                item.graph_node().clone(),
            ));
        }
    }

    if let Some((_, source)) = shape.operands {
        if let Some((edge, head)) = operand_list(graph, location, source)? {
            out.extend(edge);
            out.extend(graph.list_triples(&head)?);
        }
    }

    for item in content.items() {
        if let ContentItem::Object(nested) = item {
            out.extend(nested.triples()?);
        }
    }

    if shape.annotated && !content.annotations().is_empty() {
        if let Some(triple) = object.node_ref().as_triple() {
            for resource in annotations::resources(factory, &triple, object.anchor()) {
                out.extend(
                    graph
                        .find(Some(&resource), None, None)
                        .into_iter()
                        .filter(|t| t.predicate.as_uri().is_some_and(vocab::is_reification_predicate)),
                );
            }
        }
    }
    Ok(())
}
