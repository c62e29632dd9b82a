//! Error type for the object layer.

use ontograph_graph::{GraphError, GraphNode, Triple};
use thiserror::Error;

use crate::kind::ObjectKind;

/// Failures raised while materializing, comparing, merging or detaching objects.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// A statement-like object's triple is no longer in the graph.
    #[error("dangling reference: {0} is no longer in the graph")]
    DanglingReference(Triple),

    /// A node occupies a position or has a shape the object kind does not allow.
    #[error("structural error: {0}")]
    Structural(String),

    /// A merge was requested between objects that cannot be merged.
    #[error("cannot merge {left} with {right}: {reason}")]
    UnsupportedMerge {
        /// Kind of the object that initiated the merge.
        left: ObjectKind,
        /// Kind of the other object.
        right: ObjectKind,
        /// Why the merge was refused.
        reason: String,
    },

    /// The model behind a wrapper has been dropped.
    #[error("the backing model has been released")]
    ModelReleased,

    /// A graph read primitive failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A configuration document failed to parse.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObjectError {
    /// Creates a structural error located at `node`.
    pub fn structural(node: &GraphNode, reason: impl AsRef<str>) -> Self {
        ObjectError::Structural(format!("{node}: {}", reason.as_ref()))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ObjectError>;
