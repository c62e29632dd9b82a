//! Graph-bound object wrappers.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use ontograph_graph::{GraphNode, Triple};

use crate::cache::ContentCache;
use crate::composite;
use crate::config::ModelConfig;
use crate::content::{Content, ContentItem};
use crate::detach::{self, ForeignFactory};
use crate::error::Result;
use crate::factory::ModelObjectFactory;
use crate::kind::ObjectKind;
use crate::merge;
use crate::model::ModelRef;
use crate::node_ref::GraphNodeRef;
use crate::part::{OwlObject, Part};

/// One graph location an object is rooted at.
///
/// `anchor` pins a statement to a single reification resource; it is only
/// set for axioms discovered in split mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    node_ref: GraphNodeRef,
    anchor: Option<GraphNode>,
}

impl Origin {
    /// Creates an origin.
    #[must_use]
    pub fn new(node_ref: GraphNodeRef, anchor: Option<GraphNode>) -> Self {
        Self { node_ref, anchor }
    }

    /// The graph location.
    #[must_use]
    pub fn node_ref(&self) -> &GraphNodeRef {
        &self.node_ref
    }

    /// The reification resource this origin is pinned to, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&GraphNode> {
        self.anchor.as_ref()
    }
}

struct ObjectInner {
    kind: ObjectKind,
    origin: Origin,
    merged: Vec<Origin>,
    simple: bool,
    config: ModelConfig,
    cache: ContentCache,
}

/// An immutable, typed view of a node or triple of an [`OntModel`](crate::OntModel).
///
/// Wrappers start cold; content is read from the graph on first need and
/// then frozen. Cloning is cheap and shares the content cache.
#[derive(Clone)]
pub struct OntObject(Arc<ObjectInner>);

impl OntObject {
    pub(crate) fn new(kind: ObjectKind, origin: Origin, simple: bool, config: ModelConfig) -> Self {
        Self(Arc::new(ObjectInner {
            kind,
            origin,
            merged: Vec::new(),
            simple,
            config,
            cache: ContentCache::new(),
        }))
    }

    /// Builds a merged object that adopts `base`'s identity and content and
    /// additionally owns the triples of `merged`.
    pub(crate) fn with_origins(base: &OntObject, merged: Vec<Origin>, content: Content) -> Self {
        Self(Arc::new(ObjectInner {
            kind: base.0.kind,
            origin: base.0.origin.clone(),
            merged,
            simple: base.0.simple,
            config: base.0.config,
            cache: ContentCache::with(content),
        }))
    }

    /// Structural type discriminator.
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.0.kind
    }

    /// Where the object is rooted.
    #[must_use]
    pub fn node_ref(&self) -> &GraphNodeRef {
        &self.0.origin.node_ref
    }

    /// The reification resource this object is pinned to, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<&GraphNode> {
        self.0.origin.anchor()
    }

    /// The model handle.
    #[must_use]
    pub fn model(&self) -> &ModelRef {
        self.node_ref().model()
    }

    /// The primary origin followed by every origin absorbed by merging.
    pub fn origins(&self) -> impl Iterator<Item = &Origin> {
        std::iter::once(&self.0.origin).chain(&self.0.merged)
    }

    /// Returns true if this object was produced by merging distinct roots.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        !self.0.merged.is_empty()
    }

    /// Returns true for the cheap statement variant: the statement had no
    /// reification resource when this wrapper was created.
    ///
    /// The flag is a creation-time observation. Content is always read from
    /// the snapshot current at first access, so annotations added after
    /// creation are still collected.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.0.simple
    }

    /// Returns true if two wrappers of this kind on the same triple are
    /// necessarily equal under the model configuration.
    #[must_use]
    pub fn is_unique_per_triple(&self) -> bool {
        self.0.config.is_unique_per_triple(self.0.kind)
    }

    /// Returns true once content has been materialized.
    #[must_use]
    pub fn is_content_cached(&self) -> bool {
        self.0.cache.is_cached()
    }

    /// The IRI of a named entity or SWRL variable.
    #[must_use]
    pub fn iri(&self) -> Option<&str> {
        if self.0.kind.as_entity().is_some() || self.0.kind == ObjectKind::SwrlVariable {
            self.node_ref().subject().as_uri()
        } else {
            None
        }
    }

    /// Returns true if both handles share one wrapper.
    #[must_use]
    pub fn ptr_eq(&self, other: &OntObject) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Same primary location in the same model, and for kinds that are not
    /// unique per triple, the same anchor.
    pub(crate) fn shares_origin(&self, other: &OntObject) -> bool {
        let (a, b) = (&self.0.origin, &other.0.origin);
        a.node_ref == b.node_ref && (self.is_unique_per_triple() || a.anchor == b.anchor)
    }

    fn is_root_only(&self) -> bool {
        self.0.kind.is_primitive() || self.0.kind == ObjectKind::SwrlVariable
    }

    /// The materialized content, reading the model's current snapshot on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::ModelReleased`](crate::ObjectError::ModelReleased)
    /// if the content is cold and the model is gone,
    /// [`ObjectError::Structural`](crate::ObjectError::Structural) for
    /// malformed structures or excessive nesting, and
    /// [`ObjectError::Graph`](crate::ObjectError::Graph) for broken lists.
    pub fn content(&self) -> Result<&Content> {
        if let Some(content) = self.0.cache.get() {
            return Ok(content);
        }
        if self.is_root_only() {
            return self.materialize(|| composite::root_content(self.kind(), self.node_ref().subject()));
        }
        let factory = self.model().factory()?;
        self.content_in(&factory)
    }

    /// The materialized content, reading `factory`'s snapshot on first use.
    pub(crate) fn content_in(&self, factory: &ModelObjectFactory) -> Result<&Content> {
        if self.is_root_only() {
            return self.materialize(|| composite::root_content(self.kind(), self.node_ref().subject()));
        }
        self.materialize(|| composite::read(self, factory))
    }

    fn materialize(&self, compute: impl FnOnce() -> Result<Content>) -> Result<&Content> {
        self.0.cache.get_or_compute(self.0.config.max_nesting_depth, compute)
    }

    /// Hash code folded from the content.
    ///
    /// # Errors
    ///
    /// Same conditions as [`content`](Self::content).
    pub fn hash_code(&self) -> Result<i64> {
        Ok(self.content()?.hash())
    }

    /// The annotation section, in canonical order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`content`](Self::content).
    pub fn annotations(&self) -> Result<Vec<OntObject>> {
        Ok(self
            .content()?
            .annotations()
            .iter()
            .filter_map(ContentItem::as_object)
            .cloned()
            .collect())
    }

    /// Every graph triple this object consists of, sorted. Merged objects
    /// report the union over all of their origins.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::ModelReleased`](crate::ObjectError::ModelReleased)
    /// if the model is gone, and
    /// [`ObjectError::DanglingReference`](crate::ObjectError::DanglingReference)
    /// if a root triple has been removed.
    pub fn triples(&self) -> Result<Vec<Triple>> {
        if self.0.kind.is_primitive() {
            return Ok(Vec::new());
        }
        let mut out = BTreeSet::new();
        let factory = self.model().factory()?;
        let content = self.content_in(&factory)?;
        composite::emit(self, content, &factory, &mut out)?;
        for origin in &self.0.merged {
            let factory = origin.node_ref().model().factory()?;
            let other = factory.rebuild(self.0.kind, origin)?;
            let content = other.content_in(&factory)?;
            composite::emit(&other, content, &factory, &mut out)?;
        }
        Ok(out.into_iter().collect())
    }

    /// Produces a graph-independent copy through `factory`.
    ///
    /// # Errors
    ///
    /// Fails only if content is still cold and cannot be materialized.
    pub fn erase<F: ForeignFactory>(&self, factory: &F) -> Result<F::Object> {
        detach::erase(self, factory)
    }

    /// Merges a structurally equal object rooted elsewhere into this one.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::UnsupportedMerge`](crate::ObjectError::UnsupportedMerge)
    /// for different kinds or unequal content.
    pub fn merge(&self, other: &OntObject) -> Result<OntObject> {
        merge::merge(self, other)
    }
}

impl OwlObject for OntObject {
    fn kind(&self) -> ObjectKind {
        self.0.kind
    }

    fn hash_code(&self) -> Result<i64> {
        OntObject::hash_code(self)
    }

    fn parts(&self) -> Result<Vec<Part<'_>>> {
        let content = self.content()?;
        let shape = composite::shape(self.0.kind);
        let start = content.annotations_start();
        Ok(content
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| shape.slot_at(index, start).part(item))
            .collect())
    }

    fn primitive_part(&self) -> Option<Part<'_>> {
        match (self.0.kind, self.node_ref().subject()) {
            (ObjectKind::AnonymousIndividual, GraphNode::BlankId(id)) => Some(Part::Anonymous(id)),
            (ObjectKind::Literal, GraphNode::Literal(literal)) => Some(Part::Literal(literal)),
            (kind, GraphNode::UriRef(iri)) => kind.as_entity().map(|entity| Part::Entity(entity, iri)),
            _ => None,
        }
    }

    fn as_ont_object(&self) -> Option<&OntObject> {
        Some(self)
    }
}

impl fmt::Debug for OntObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntObject")
            .field("kind", &self.0.kind)
            .field("location", self.node_ref().location())
            .field("anchor", &self.0.origin.anchor)
            .field("merged", &self.0.merged.len())
            .field("simple", &self.0.simple)
            .field("cached", &self.is_content_cached())
            .finish()
    }
}

impl fmt::Display for OntObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.0.kind, self.node_ref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{EntityKind, OntModel};
    use ontograph_graph::turtle::parse_turtle;
    use ontograph_graph::{vocab, GraphRead};

    const DOC: &str = r#"
        @prefix ex: <http://example.org/> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

        ex:A a owl:Class .
        ex:B a owl:Class .
        ex:C a owl:Class ; rdfs:subClassOf [ owl:unionOf ( ex:B ex:A ex:B ) ] .
    "#;

    fn model() -> OntModel {
        OntModel::new(parse_turtle(DOC).unwrap(), ModelConfig::default())
    }

    fn subclass_axiom(model: &OntModel) -> OntObject {
        model.axioms_of(ObjectKind::SubClassOf).unwrap().pop().unwrap()
    }

    #[test]
    fn entities_need_no_graph() {
        let model = model();
        let class = model.entity(EntityKind::Class, "http://example.org/A");
        drop(model);
        assert_eq!(class.iri(), Some("http://example.org/A"));
        assert!(class.hash_code().is_ok());
        assert!(class.triples().unwrap().is_empty());
    }

    #[test]
    fn union_operands_are_sorted_and_distinct() {
        let model = model();
        let axiom = subclass_axiom(&model);
        let union = axiom.content().unwrap().body()[1].as_object().unwrap().clone();
        assert_eq!(union.kind(), ObjectKind::ObjectUnionOf);
        let parts = union.parts().unwrap();
        let rendered: Vec<String> = parts.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["Class(<http://example.org/A>)", "Class(<http://example.org/B>)"]
        );
    }

    #[test]
    fn triples_cover_nested_structure() {
        let model = model();
        let axiom = subclass_axiom(&model);
        let triples = axiom.triples().unwrap();
        // root triple, unionOf edge, three list cells with first and rest
        assert_eq!(triples.len(), 8);
        let graph = model.snapshot();
        assert!(triples.iter().all(|t| graph.contains(t)));
    }

    #[test]
    fn content_is_cached_once_read() {
        let model = model();
        let axiom = subclass_axiom(&model);
        let fresh = model
            .statement(ObjectKind::SubClassOf, &axiom.node_ref().to_triple().unwrap())
            .unwrap();
        assert!(!fresh.is_content_cached());
        let first = fresh.content().unwrap().clone();
        assert!(fresh.is_content_cached());
        assert!(first.ptr_eq(fresh.content().unwrap()));
    }

    #[test]
    fn released_model_fails_cold_content() {
        let model = model();
        let triple = model
            .snapshot()
            .find(None, Some(&GraphNode::uri(vocab::RDFS_SUBCLASS_OF)), None)
            .pop()
            .unwrap();
        let axiom = model.statement(ObjectKind::SubClassOf, &triple).unwrap();
        drop(model);
        assert!(matches!(
            axiom.content(),
            Err(crate::ObjectError::ModelReleased)
        ));
    }
}
