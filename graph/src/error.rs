//! Error type for graph reads and fixture loading.

use thiserror::Error;

use crate::node::GraphNode;

/// Failures raised by the graph read primitives and the Turtle loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An RDF list is cyclic, lacks `rdf:first`/`rdf:rest`, or ends in a literal.
    #[error("malformed rdf:List at {node}: {reason}")]
    MalformedList {
        /// The list cell where the walk stopped.
        node: GraphNode,
        /// What was wrong with it.
        reason: String,
    },

    /// A parsed term cannot be represented as a [`GraphNode`]
    /// (e.g. an RDF-star quoted triple or a variable).
    #[error("unsupported term: {0}")]
    UnsupportedTerm(String),

    /// The Turtle source failed to parse.
    #[error("turtle parse error: {0}")]
    Turtle(String),
}

impl GraphError {
    /// Creates a malformed list error.
    pub fn malformed_list(node: &GraphNode, reason: impl Into<String>) -> Self {
        GraphError::MalformedList {
            node: node.clone(),
            reason: reason.into(),
        }
    }
}
