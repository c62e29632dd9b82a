//! RDF graph primitives for the ontograph object layer.
//!
//! The `ontograph-graph` crate provides the pieces the object layer treats
//! as external collaborators: immutable node and triple values, an
//! in-memory indexed triple store, the read primitives the object layer
//! consumes ([`GraphRead`]), and the RDF/OWL/SWRL vocabulary.
//!
//! # Entry Point
//!
//! ```
//! use ontograph_graph::{vocab, Graph, GraphNode, GraphRead, Literal};
//!
//! let mut graph = Graph::new();
//! graph.insert_parts(
//!     GraphNode::uri("http://example.org/Foo"),
//!     GraphNode::uri(vocab::RDFS_LABEL),
//!     GraphNode::literal(Literal::string("x")),
//! );
//! assert_eq!(graph.len(), 1);
//! assert!(graph
//!     .object(&GraphNode::uri("http://example.org/Foo"), vocab::RDFS_LABEL)
//!     .is_some());
//! ```
//!
//! # Loading
//!
//! ```
//! let graph = ontograph_graph::turtle::parse_turtle(
//!     "<http://example.org/a> <http://example.org/p> \"v\" .",
//! )
//! .unwrap();
//! assert_eq!(graph.len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graph;
pub mod node;
pub mod ntriples;
pub mod triple;
pub mod turtle;
pub mod vocab;

pub use error::GraphError;
pub use graph::{Graph, GraphRead};
pub use node::{BlankId, GraphNode, Literal};
pub use triple::Triple;
