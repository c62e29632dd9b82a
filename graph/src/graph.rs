//! In-memory triple store and the read primitives consumed by the object layer.
//!
//! [`GraphRead`] is the seam: the object layer only ever reads through it.
//! [`Graph`] is the reference implementation, a set of triples indexed by
//! subject, predicate and object.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;
use crate::node::GraphNode;
use crate::triple::Triple;
use crate::vocab;

/// Read primitives over a triple graph.
///
/// Only [`contains`](GraphRead::contains) and [`find`](GraphRead::find)
/// are required; every other primitive is derived from them and may be
/// overridden by stores with better indexes.
pub trait GraphRead {
    /// Returns true if the triple is asserted.
    fn contains(&self, triple: &Triple) -> bool;

    /// Lists every triple matching the pattern (`None` = wildcard), in SPO order.
    fn find(
        &self,
        subject: Option<&GraphNode>,
        predicate: Option<&GraphNode>,
        object: Option<&GraphNode>,
    ) -> Vec<Triple>;

    /// Lists the objects of every `(subject, predicate, ?)` edge.
    fn objects(&self, subject: &GraphNode, predicate: &str) -> Vec<GraphNode> {
        self.find(Some(subject), Some(&GraphNode::uri(predicate)), None)
            .into_iter()
            .map(|t| t.object)
            .collect()
    }

    /// Returns the first object of `(subject, predicate, ?)`, if any.
    fn object(&self, subject: &GraphNode, predicate: &str) -> Option<GraphNode> {
        self.objects(subject, predicate).into_iter().next()
    }

    /// Lists the subjects of every `(?, predicate, object)` edge.
    fn subjects(&self, predicate: &str, object: &GraphNode) -> Vec<GraphNode> {
        self.find(None, Some(&GraphNode::uri(predicate)), Some(object))
            .into_iter()
            .map(|t| t.subject)
            .collect()
    }

    /// Returns true if `(node, rdf:type, type_iri)` is asserted.
    fn has_type(&self, node: &GraphNode, type_iri: &str) -> bool {
        self.contains(&Triple::new(
            node.clone(),
            GraphNode::uri(vocab::RDF_TYPE),
            GraphNode::uri(type_iri),
        ))
    }

    /// Walks an `rdf:List` and returns its members in list order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedList`] if a cell is revisited, lacks
    /// `rdf:first` or `rdf:rest`, or if the head is a literal.
    fn list_members(&self, head: &GraphNode) -> Result<Vec<GraphNode>, GraphError> {
        let mut members = Vec::new();
        walk_list(self, head, |_, first, _| members.push(first.clone()))?;
        Ok(members)
    }

    /// Lists the `rdf:first`/`rdf:rest` triples of an `rdf:List`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`list_members`](GraphRead::list_members).
    fn list_triples(&self, head: &GraphNode) -> Result<Vec<Triple>, GraphError> {
        let first = GraphNode::uri(vocab::RDF_FIRST);
        let rest_p = GraphNode::uri(vocab::RDF_REST);
        let mut triples = Vec::new();
        walk_list(self, head, |cell, item, rest| {
            triples.push(Triple::new(cell.clone(), first.clone(), item.clone()));
            triples.push(Triple::new(cell.clone(), rest_p.clone(), rest.clone()));
        })?;
        Ok(triples)
    }

    /// Lists the blank reification resources `R` with
    /// `R owl:annotatedSource s ; owl:annotatedProperty p ; owl:annotatedTarget o`.
    fn reification_resources(
        &self,
        subject: &GraphNode,
        predicate: &GraphNode,
        object: &GraphNode,
    ) -> Vec<GraphNode> {
        let annotated_property = GraphNode::uri(vocab::OWL_ANNOTATED_PROPERTY);
        let annotated_target = GraphNode::uri(vocab::OWL_ANNOTATED_TARGET);
        self.subjects(vocab::OWL_ANNOTATED_SOURCE, subject)
            .into_iter()
            .filter(|r| r.is_blank())
            .filter(|r| {
                self.contains(&Triple::new(
                    r.clone(),
                    annotated_property.clone(),
                    predicate.clone(),
                )) && self.contains(&Triple::new(
                    r.clone(),
                    annotated_target.clone(),
                    object.clone(),
                ))
            })
            .collect()
    }
}

/// Visits each cell of an `rdf:List` as `(cell, first, rest)`.
fn walk_list<G, F>(graph: &G, head: &GraphNode, mut visit: F) -> Result<(), GraphError>
where
    G: GraphRead + ?Sized,
    F: FnMut(&GraphNode, &GraphNode, &GraphNode),
{
    let mut seen = BTreeSet::new();
    let mut cell = head.clone();
    while !cell.is(vocab::RDF_NIL) {
        if cell.is_literal() {
            return Err(GraphError::malformed_list(&cell, "literal in list position"));
        }
        if !seen.insert(cell.clone()) {
            return Err(GraphError::malformed_list(&cell, "cycle"));
        }
        let first = graph
            .object(&cell, vocab::RDF_FIRST)
            .ok_or_else(|| GraphError::malformed_list(&cell, "missing rdf:first"))?;
        let rest = graph
            .object(&cell, vocab::RDF_REST)
            .ok_or_else(|| GraphError::malformed_list(&cell, "missing rdf:rest"))?;
        visit(&cell, &first, &rest);
        cell = rest;
    }
    Ok(())
}

/// An indexed set of triples.
///
/// Set semantics: inserting a triple twice keeps one copy. Every index
/// holds the triples in SPO order, so [`find`](GraphRead::find) output is
/// deterministic.
///
/// # Example
///
/// ```
/// use ontograph_graph::{Graph, GraphNode, GraphRead};
///
/// let mut graph = Graph::new();
/// let s = GraphNode::uri("http://example.org/s");
/// let p = GraphNode::uri("http://example.org/p");
/// graph.insert_parts(s.clone(), p.clone(), GraphNode::string("a"));
/// graph.insert_parts(s.clone(), p.clone(), GraphNode::string("a"));
/// assert_eq!(graph.len(), 1);
/// assert_eq!(graph.find(Some(&s), None, None).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    by_subject: BTreeMap<GraphNode, BTreeSet<Triple>>,
    by_predicate: BTreeMap<GraphNode, BTreeSet<Triple>>,
    by_object: BTreeMap<GraphNode, BTreeSet<Triple>>,
    len: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        let added = self
            .by_subject
            .entry(triple.subject.clone())
            .or_default()
            .insert(triple.clone());
        if !added {
            return false;
        }
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .insert(triple.clone());
        self.by_object
            .entry(triple.object.clone())
            .or_default()
            .insert(triple);
        self.len += 1;
        true
    }

    /// Adds a triple given by its parts.
    pub fn insert_parts(&mut self, subject: GraphNode, predicate: GraphNode, object: GraphNode) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Removes a triple. Returns false if it was absent.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        if !remove_indexed(&mut self.by_subject, &triple.subject, triple) {
            return false;
        }
        remove_indexed(&mut self.by_predicate, &triple.predicate, triple);
        remove_indexed(&mut self.by_object, &triple.object, triple);
        self.len -= 1;
        true
    }

    /// Iterates over every triple in SPO order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.by_subject.values().flat_map(|set| set.iter())
    }

    /// Returns every triple in SPO order.
    #[must_use]
    pub fn triples(&self) -> Vec<Triple> {
        self.iter().cloned().collect()
    }
}

fn remove_indexed(
    index: &mut BTreeMap<GraphNode, BTreeSet<Triple>>,
    key: &GraphNode,
    triple: &Triple,
) -> bool {
    let Some(set) = index.get_mut(key) else {
        return false;
    };
    let removed = set.remove(triple);
    if set.is_empty() {
        index.remove(key);
    }
    removed
}

impl GraphRead for Graph {
    fn contains(&self, triple: &Triple) -> bool {
        self.by_subject
            .get(&triple.subject)
            .is_some_and(|set| set.contains(triple))
    }

    fn find(
        &self,
        subject: Option<&GraphNode>,
        predicate: Option<&GraphNode>,
        object: Option<&GraphNode>,
    ) -> Vec<Triple> {
        // Scan the narrowest bound index.
        let candidates: Box<dyn Iterator<Item = &Triple>> = match (subject, predicate, object) {
            (Some(s), _, _) => match self.by_subject.get(s) {
                Some(set) => Box::new(set.iter()),
                None => return Vec::new(),
            },
            (None, _, Some(o)) => match self.by_object.get(o) {
                Some(set) => Box::new(set.iter()),
                None => return Vec::new(),
            },
            (None, Some(p), None) => match self.by_predicate.get(p) {
                Some(set) => Box::new(set.iter()),
                None => return Vec::new(),
            },
            (None, None, None) => Box::new(self.iter()),
        };
        candidates
            .filter(|t| t.matches(subject, predicate, object))
            .cloned()
            .collect()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.insert(triple);
        }
    }
}
