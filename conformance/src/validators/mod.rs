//! One validator per property of the object contract.
//!
//! Every validator loads its own fixture models, so validators are
//! independent of each other and of execution order.

pub mod annotations;
pub mod detach;
pub mod determinism;
pub mod identity;
pub mod merge;
pub mod walkthrough;

use anyhow::Context;
use ontograph_graph::turtle::parse_turtle;
use ontograph_graph::Graph;
use ontograph_objects::OntModel;

use crate::SuiteOptions;

/// Loads a fixture into a fresh model configured by `options`.
pub(crate) fn load(name: &str, src: &str, options: &SuiteOptions) -> anyhow::Result<OntModel> {
    Ok(OntModel::new(parse_fixture(name, src)?, options.config))
}

/// Parses a fixture graph.
pub(crate) fn parse_fixture(name: &str, src: &str) -> anyhow::Result<Graph> {
    parse_turtle(src).with_context(|| format!("failed to parse fixture {name}"))
}

/// Renders an object error as a check failure message.
pub(crate) fn failed(what: &str, error: impl std::fmt::Display) -> String {
    format!("{what}: {error}")
}
