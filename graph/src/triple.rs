//! RDF triple value.

use std::fmt;

use crate::node::GraphNode;

/// A `(subject, predicate, object)` edge.
///
/// The derived order is SPO-lexicographic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject node (URI or blank).
    pub subject: GraphNode,
    /// Predicate node (URI).
    pub predicate: GraphNode,
    /// Object node.
    pub object: GraphNode,
}

impl Triple {
    /// Creates a triple from its three parts.
    #[must_use]
    pub fn new(subject: GraphNode, predicate: GraphNode, object: GraphNode) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Returns true if every bound position of the pattern matches.
    #[must_use]
    pub fn matches(
        &self,
        subject: Option<&GraphNode>,
        predicate: Option<&GraphNode>,
        object: Option<&GraphNode>,
    ) -> bool {
        subject.map_or(true, |s| *s == self.subject)
            && predicate.map_or(true, |p| *p == self.predicate)
            && object.map_or(true, |o| *o == self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
