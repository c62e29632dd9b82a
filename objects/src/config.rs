//! Model configuration, loaded from TOML.
//!
//! ```
//! use ontograph_objects::ModelConfig;
//!
//! let config = ModelConfig::from_toml_str("split-axiom-annotations = true").unwrap();
//! assert!(config.split_axiom_annotations);
//! assert!(config.allow_bulk_annotations);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kind::ObjectKind;

/// Behavior switches of an [`OntModel`](crate::OntModel).
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Read reification resources as annotations. When false, annotation
    /// sections are always empty.
    pub allow_bulk_annotations: bool,
    /// Produce one axiom per reification resource instead of one per triple.
    pub split_axiom_annotations: bool,
    /// Use the cheap wrapper variant for statements without reification resources.
    pub simple_wrappers: bool,
    /// Bound on nested content materialization. Each level is a recursion
    /// frame on the reading thread; raise it only where the stack allows.
    pub max_nesting_depth: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            allow_bulk_annotations: true,
            split_axiom_annotations: false,
            simple_wrappers: true,
            max_nesting_depth: 32,
        }
    }
}

impl ModelConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Config`](crate::ObjectError::Config) if the
    /// document is not valid TOML or contains unknown keys.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Io`](crate::ObjectError::Io) if the file cannot
    /// be read, or [`ObjectError::Config`](crate::ObjectError::Config) if it
    /// does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    /// Returns true if two wrappers of `kind` rooted at the same triple are
    /// always the same object.
    ///
    /// Axioms lose this property in split mode, where one triple can back
    /// several axioms that differ only in their annotations.
    #[must_use]
    pub fn is_unique_per_triple(&self, kind: ObjectKind) -> bool {
        !(kind.is_axiom() && self.split_axiom_annotations)
    }
}
