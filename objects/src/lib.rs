//! Typed, immutable OWL objects over RDF graphs.
//!
//! The `ontograph-objects` crate presents the entities, expressions, axioms
//! and annotations stored as triples of a graph as value objects with a
//! structural equality, hash and ordering contract, shared with objects
//! that carry no graph reference at all.
//!
//! - [`OntModel`] owns a graph and hands out wrappers ([`OntObject`]).
//! - Wrappers are cold until first use; their content is then read from one
//!   graph snapshot and frozen ([`ContentCache`]).
//! - [`objects_equal`] compares any two [`OwlObject`]s: graph-bound wrappers
//!   by origin then content, foreign objects by hash then parts.
//! - Bulk annotations (reification resources) are collected, sorted and
//!   deduplicated into the annotation section of every statement.
//! - [`merge`] reconciles equal wrappers rooted at different places;
//!   [`OntObject::erase`] detaches a wrapper through a [`ForeignFactory`].
//!
//! # Entry Point
//!
//! ```
//! use ontograph_graph::turtle::parse_turtle;
//! use ontograph_objects::{ModelConfig, ObjectKind, OntModel, OwlObject, StandaloneFactory};
//!
//! let graph = parse_turtle(
//!     r#"
//!     @prefix ex: <http://example.org/> .
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     ex:B rdfs:subClassOf ex:A .
//!     "#,
//! )
//! .unwrap();
//! let model = OntModel::new(graph, ModelConfig::default());
//! let axiom = model.axioms_of(ObjectKind::SubClassOf).unwrap().remove(0);
//!
//! let detached = axiom.erase(&StandaloneFactory).unwrap();
//! assert!(axiom == detached);
//! assert_eq!(axiom.hash_code().unwrap(), detached.hash_code().unwrap());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod annotations;
pub mod cache;
mod composite;
pub mod config;
pub mod content;
pub mod detach;
pub mod equality;
pub mod error;
pub mod factory;
pub mod hash;
pub mod kind;
pub mod merge;
pub mod model;
pub mod node_ref;
pub mod object;
pub mod part;
pub mod slot;
pub mod standalone;

pub use cache::ContentCache;
pub use config::ModelConfig;
pub use content::{Content, ContentItem};
pub use detach::{Component, ForeignFactory};
pub use equality::objects_equal;
pub use error::{ObjectError, Result};
pub use factory::{ModelObjectFactory, ObjectFactory};
pub use kind::{EntityKind, ObjectKind};
pub use merge::merge;
pub use model::{ModelRef, OntModel};
pub use node_ref::{GraphNodeRef, Location};
pub use object::{OntObject, Origin};
pub use part::{canonical_cmp, OwlObject, Part};
pub use slot::Slot;
pub use standalone::{StandaloneFactory, StandaloneObject};
