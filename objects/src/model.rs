//! The model that owns a graph, and the non-owning handle wrappers keep.
//!
//! [`OntModel`] holds its graph behind a copy-on-write snapshot. Content
//! materialization takes one snapshot and reads only that, so nested
//! materialization never re-enters the lock and a concurrent
//! [`OntModel::update`] never blocks a reader halfway through an object.
//!
//! Wrappers hold a [`ModelRef`] (a `Weak`), never an `OntModel`: a forgotten
//! wrapper must not keep the whole graph alive.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};

use ontograph_graph::{vocab, Graph, GraphNode, GraphRead, Triple};

use crate::config::ModelConfig;
use crate::error::{ObjectError, Result};
use crate::factory::{ModelObjectFactory, ObjectFactory};
use crate::kind::{EntityKind, ObjectKind};
use crate::merge::merge_sorted;
use crate::object::OntObject;
use crate::part::{canonical_cmp, try_sort_by};

pub(crate) struct ModelShared {
    graph: RwLock<Arc<Graph>>,
    config: ModelConfig,
}

/// A graph together with the configuration its wrappers are built under.
///
/// Cloning an `OntModel` clones the handle, not the graph.
///
/// # Example
///
/// ```
/// use ontograph_graph::{vocab, Graph, GraphNode};
/// use ontograph_objects::{EntityKind, ModelConfig, OntModel, ObjectKind};
///
/// let mut graph = Graph::new();
/// graph.insert_parts(
///     GraphNode::uri("http://example.org/A"),
///     GraphNode::uri(vocab::RDF_TYPE),
///     GraphNode::uri(vocab::OWL_CLASS),
/// );
/// let model = OntModel::new(graph, ModelConfig::default());
/// let axioms = model.axioms().unwrap();
/// assert_eq!(axioms.len(), 1);
/// assert_eq!(axioms[0].kind(), ObjectKind::Declaration);
///
/// let class = model.entity(EntityKind::Class, "http://example.org/A");
/// assert_eq!(class.hash_code().unwrap(), class.hash_code().unwrap());
/// ```
#[derive(Clone)]
pub struct OntModel {
    shared: Arc<ModelShared>,
}

impl OntModel {
    /// Wraps a graph.
    #[must_use]
    pub fn new(graph: Graph, config: ModelConfig) -> Self {
        Self {
            shared: Arc::new(ModelShared {
                graph: RwLock::new(Arc::new(graph)),
                config,
            }),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.shared.config
    }

    /// Returns the current graph snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Graph> {
        self.shared.snapshot()
    }

    /// Mutates the graph. Readers holding an older snapshot keep it;
    /// wrappers whose content is already cached are not invalidated.
    pub fn update<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        let mut guard = self
            .shared
            .graph
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(Arc::make_mut(&mut guard))
    }

    /// Returns a non-owning handle to this model.
    #[must_use]
    pub fn handle(&self) -> ModelRef {
        ModelRef(Arc::downgrade(&self.shared))
    }

    /// Returns an object factory over the current snapshot.
    #[must_use]
    pub fn factory(&self) -> ModelObjectFactory {
        ModelObjectFactory::new(self.handle(), self.snapshot(), self.shared.config)
    }

    /// Returns the wrapper for a named entity.
    #[must_use]
    pub fn entity(&self, kind: EntityKind, iri: &str) -> OntObject {
        self.factory().get_entity(kind, iri)
    }

    /// Returns the wrapper for a statement-like object rooted at `triple`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::DanglingReference`] if the triple is not in
    /// the graph and [`ObjectError::Structural`] if `kind` is not
    /// statement-like.
    pub fn statement(&self, kind: ObjectKind, triple: &Triple) -> Result<OntObject> {
        let factory = self.factory();
        if kind == ObjectKind::Annotation {
            factory.get_annotation(triple)
        } else {
            factory.get_axiom(kind, triple, None)
        }
    }

    /// Discovers every axiom in the graph.
    ///
    /// Internal triples of class expressions, lists, atoms and reification
    /// resources are skipped. The result is in canonical order and
    /// structurally equal axioms are merged into one wrapper.
    ///
    /// An axiom whose content cannot be read (an unsupported restriction,
    /// a cyclic or malformed structure) is logged at `warn` and left out;
    /// the rest of the graph is still returned.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures that are not local to one axiom,
    /// such as a wrapper rooted at a triple missing from the snapshot.
    pub fn axioms(&self) -> Result<Vec<OntObject>> {
        let factory = self.factory();
        let graph = factory.graph();
        let split = self.shared.config.split_axiom_annotations;
        let mut found = Vec::new();
        let mut skipped = 0_usize;
        for triple in graph.iter() {
            let Some(kind) = classify_axiom(&factory, triple) else {
                continue;
            };
            let anchors = if split {
                graph.reification_resources(&triple.subject, &triple.predicate, &triple.object)
            } else {
                Vec::new()
            };
            let mut candidates = Vec::with_capacity(anchors.len().max(1));
            if anchors.is_empty() {
                candidates.push(factory.get_axiom(kind, triple, None)?);
            } else {
                for anchor in &anchors {
                    candidates.push(factory.get_axiom(kind, triple, Some(anchor))?);
                }
            }
            for axiom in candidates {
                if readable(&axiom, &factory)? {
                    found.push(axiom);
                } else {
                    skipped += 1;
                }
            }
        }
        let discovered = found.len();
        try_sort_by(&mut found, |a, b| canonical_cmp(a, b))?;
        let axioms = merge_sorted(found)?;
        tracing::debug!(discovered, skipped, distinct = axioms.len(), "axiom discovery");
        Ok(axioms)
    }

    /// Discovers the axioms of one kind.
    ///
    /// # Errors
    ///
    /// Same conditions as [`axioms`](Self::axioms).
    pub fn axioms_of(&self, kind: ObjectKind) -> Result<Vec<OntObject>> {
        Ok(self
            .axioms()?
            .into_iter()
            .filter(|axiom| axiom.kind() == kind)
            .collect())
    }

    /// Lists the SWRL atoms in the graph, in canonical order.
    ///
    /// Atoms whose content cannot be read are skipped, as in
    /// [`axioms`](Self::axioms).
    ///
    /// # Errors
    ///
    /// Same conditions as [`axioms`](Self::axioms).
    pub fn swrl_atoms(&self) -> Result<Vec<OntObject>> {
        let factory = self.factory();
        let graph = factory.graph();
        let mut atoms = Vec::new();
        for atom_type in [
            vocab::SWRL_CLASS_ATOM,
            vocab::SWRL_INDIVIDUAL_PROPERTY_ATOM,
            vocab::SWRL_DATAVALUED_PROPERTY_ATOM,
            vocab::SWRL_BUILTIN_ATOM,
        ] {
            for node in graph.subjects(vocab::RDF_TYPE, &GraphNode::uri(atom_type)) {
                let atom = factory.get_swrl_atom(&node)?;
                if readable(&atom, &factory)? {
                    atoms.push(atom);
                }
            }
        }
        try_sort_by(&mut atoms, |a, b| canonical_cmp(a, b))?;
        Ok(atoms)
    }
}

impl fmt::Debug for OntModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntModel")
            .field("triples", &self.snapshot().len())
            .field("config", &self.shared.config)
            .finish()
    }
}

impl ModelShared {
    fn snapshot(&self) -> Arc<Graph> {
        Arc::clone(&self.graph.read().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Non-owning handle to an [`OntModel`].
#[derive(Clone)]
pub struct ModelRef(Weak<ModelShared>);

impl ModelRef {
    /// Resolves the handle.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::ModelReleased`] if every `OntModel` clone has
    /// been dropped.
    pub fn upgrade(&self) -> Result<OntModel> {
        self.0
            .upgrade()
            .map(|shared| OntModel { shared })
            .ok_or(ObjectError::ModelReleased)
    }

    /// Returns a factory over the model's current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::ModelReleased`] if the model is gone.
    pub fn factory(&self) -> Result<ModelObjectFactory> {
        Ok(self.upgrade()?.factory())
    }

    /// Returns true if both handles point at the same model.
    #[must_use]
    pub fn same_model(&self, other: &ModelRef) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }

    /// Returns true while the model is alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_model(other)
    }
}

impl Eq for ModelRef {}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelRef")
            .field(&if self.is_alive() { "alive" } else { "released" })
            .finish()
    }
}

/// Blank subjects that belong to another object's structure rather than
/// rooting axioms of their own.
/// Reads `object`'s content up front. Structural and list failures are
/// local to one object and reported as `false`; anything else propagates.
fn readable(object: &OntObject, factory: &ModelObjectFactory) -> Result<bool> {
    match object.content_in(factory) {
        Ok(_) => Ok(true),
        Err(err @ (ObjectError::Structural(_) | ObjectError::Graph(_))) => {
            tracing::warn!(
                kind = %object.kind(),
                root = %object.node_ref(),
                error = %err,
                "skipping unreadable object"
            );
            Ok(false)
        }
        Err(err) => Err(err),
    }
}

fn is_structural_blank(graph: &Graph, node: &GraphNode) -> bool {
    if !node.is_blank() {
        return false;
    }
    const STRUCTURAL_EDGES: &[&str] = &[
        vocab::RDF_FIRST,
        vocab::OWL_ANNOTATED_SOURCE,
        vocab::OWL_ON_PROPERTY,
        vocab::OWL_UNION_OF,
        vocab::OWL_INTERSECTION_OF,
        vocab::OWL_ONE_OF,
        vocab::OWL_COMPLEMENT_OF,
    ];
    const STRUCTURAL_TYPES: &[&str] = &[
        vocab::OWL_RESTRICTION,
        vocab::OWL_AXIOM,
        vocab::OWL_ANNOTATION,
        vocab::OWL_CLASS,
        vocab::RDFS_DATATYPE,
        vocab::SWRL_CLASS_ATOM,
        vocab::SWRL_INDIVIDUAL_PROPERTY_ATOM,
        vocab::SWRL_DATAVALUED_PROPERTY_ATOM,
        vocab::SWRL_BUILTIN_ATOM,
    ];
    STRUCTURAL_EDGES
        .iter()
        .any(|p| graph.object(node, p).is_some())
        || STRUCTURAL_TYPES.iter().any(|t| graph.has_type(node, t))
}

/// Maps an asserted triple to the kind of axiom it roots, if any.
fn classify_axiom(factory: &ModelObjectFactory, triple: &Triple) -> Option<ObjectKind> {
    let graph = factory.graph();
    if is_structural_blank(graph, &triple.subject) {
        return None;
    }
    let predicate = triple.predicate.as_uri()?;
    match predicate {
        vocab::RDF_TYPE => {
            let type_iri = triple.object.as_uri();
            if let Some(ty) = type_iri {
                if triple.subject.is_uri() && EntityKind::from_declaration_type(ty).is_some() {
                    return Some(ObjectKind::Declaration);
                }
                if ty == vocab::OWL_ALL_DISJOINT_CLASSES {
                    return Some(ObjectKind::DisjointClasses);
                }
            }
            if triple.object.is_literal() || factory.is_builtin_entity(&triple.object) {
                None
            } else {
                Some(ObjectKind::ClassAssertion)
            }
        }
        vocab::RDFS_SUBCLASS_OF => Some(ObjectKind::SubClassOf),
        vocab::OWL_DISJOINT_WITH => Some(ObjectKind::DisjointClasses),
        vocab::OWL_PROPERTY_CHAIN_AXIOM => Some(ObjectKind::SubPropertyChainOf),
        _ => match factory.get_property(&triple.predicate).ok()?.kind() {
            ObjectKind::ObjectProperty if !triple.object.is_literal() => {
                Some(ObjectKind::ObjectPropertyAssertion)
            }
            ObjectKind::DataProperty if triple.object.is_literal() => {
                Some(ObjectKind::DataPropertyAssertion)
            }
            ObjectKind::AnnotationProperty => Some(ObjectKind::AnnotationAssertion),
            _ => None,
        },
    }
}
