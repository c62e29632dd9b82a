//! Where in the graph an object lives.

use std::fmt;

use ontograph_graph::{GraphNode, GraphRead, Triple};

use crate::error::{ObjectError, Result};
use crate::model::ModelRef;

/// A node (resource-like objects) or the three parts of a triple
/// (statement-like objects).
///
/// A statement is identified by its parts rather than a triple handle: a
/// graph need not hand back the same handle for repeated lookups of the
/// same triple.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    /// A single node.
    Node(GraphNode),
    /// A `(subject, predicate, object)` edge.
    Triple {
        /// Subject part.
        subject: GraphNode,
        /// Predicate part.
        predicate: GraphNode,
        /// Object part.
        object: GraphNode,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Node(node) => write!(f, "{node}"),
            Location::Triple {
                subject,
                predicate,
                object,
            } => write!(f, "{subject} {predicate} {object}"),
        }
    }
}

/// A location plus a non-owning handle to the model it belongs to.
#[derive(Clone, Debug)]
pub struct GraphNodeRef {
    location: Location,
    model: ModelRef,
}

impl GraphNodeRef {
    /// References a single node.
    #[must_use]
    pub fn node(node: GraphNode, model: ModelRef) -> Self {
        Self {
            location: Location::Node(node),
            model,
        }
    }

    /// References a triple by its parts.
    #[must_use]
    pub fn triple(subject: GraphNode, predicate: GraphNode, object: GraphNode, model: ModelRef) -> Self {
        Self {
            location: Location::Triple {
                subject,
                predicate,
                object,
            },
            model,
        }
    }

    /// References an existing triple value.
    #[must_use]
    pub fn from_triple(triple: &Triple, model: ModelRef) -> Self {
        Self::triple(
            triple.subject.clone(),
            triple.predicate.clone(),
            triple.object.clone(),
            model,
        )
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the model handle.
    #[must_use]
    pub fn model(&self) -> &ModelRef {
        &self.model
    }

    /// The node itself for node references, the subject for triples.
    #[must_use]
    pub fn subject(&self) -> &GraphNode {
        match &self.location {
            Location::Node(node) => node,
            Location::Triple { subject, .. } => subject,
        }
    }

    /// The predicate part of a triple reference.
    #[must_use]
    pub fn predicate(&self) -> Option<&GraphNode> {
        match &self.location {
            Location::Node(_) => None,
            Location::Triple { predicate, .. } => Some(predicate),
        }
    }

    /// The object part of a triple reference.
    #[must_use]
    pub fn object(&self) -> Option<&GraphNode> {
        match &self.location {
            Location::Node(_) => None,
            Location::Triple { object, .. } => Some(object),
        }
    }

    /// Returns true if both references are rooted at the same subject (or node).
    #[must_use]
    pub fn same_subject(&self, other: &GraphNodeRef) -> bool {
        self.subject() == other.subject()
    }

    /// Returns true if both triple references share a predicate.
    #[must_use]
    pub fn same_predicate(&self, other: &GraphNodeRef) -> bool {
        self.predicate().is_some() && self.predicate() == other.predicate()
    }

    /// Returns true if both triple references share an object.
    #[must_use]
    pub fn same_object(&self, other: &GraphNodeRef) -> bool {
        self.object().is_some() && self.object() == other.object()
    }

    /// Returns true if both references name the same triple (or the same node).
    #[must_use]
    pub fn same_triple(&self, other: &GraphNodeRef) -> bool {
        self.location == other.location
    }

    /// Returns true if both references belong to the same model.
    #[must_use]
    pub fn same_model(&self, other: &GraphNodeRef) -> bool {
        self.model.same_model(&other.model)
    }

    /// The triple value of a triple reference, without consulting the graph.
    #[must_use]
    pub fn as_triple(&self) -> Option<Triple> {
        match &self.location {
            Location::Node(_) => None,
            Location::Triple {
                subject,
                predicate,
                object,
            } => Some(Triple::new(subject.clone(), predicate.clone(), object.clone())),
        }
    }

    /// Re-resolves the live triple from the model's current graph.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] for node references,
    /// [`ObjectError::ModelReleased`] if the model is gone and
    /// [`ObjectError::DanglingReference`] if the triple is no longer asserted.
    pub fn to_triple(&self) -> Result<Triple> {
        let graph = self.model.upgrade()?.snapshot();
        self.to_triple_in(graph.as_ref())
    }

    /// Re-resolves the live triple from `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] for node references and
    /// [`ObjectError::DanglingReference`] if the triple is not asserted.
    pub fn to_triple_in(&self, graph: &dyn GraphRead) -> Result<Triple> {
        let triple = self
            .as_triple()
            .ok_or_else(|| ObjectError::structural(self.subject(), "node reference has no triple"))?;
        if graph.contains(&triple) {
            Ok(triple)
        } else {
            Err(ObjectError::DanglingReference(triple))
        }
    }
}

impl PartialEq for GraphNodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_triple(other) && self.same_model(other)
    }
}

impl Eq for GraphNodeRef {}

impl fmt::Display for GraphNodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.location, f)
    }
}
