//! Turtle loading through `sophia_turtle`.
//!
//! Fixture graphs in the conformance suite and the integration tests are
//! written as Turtle strings; this module turns them into a [`Graph`].

use sophia_api::source::{StreamError, TripleSource};
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::turtle;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::node::{GraphNode, Literal};
use crate::triple::Triple;

/// Parses a Turtle document into a new [`Graph`].
///
/// Blank node labels are kept as the parser reports them, so two loads of
/// the same document agree on blank ids.
///
/// # Errors
///
/// Returns [`GraphError::Turtle`] on a syntax error and
/// [`GraphError::UnsupportedTerm`] for quoted triples or variables.
pub fn parse_turtle(src: &str) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    turtle::parse_str(src)
        .try_for_each_triple(|t| -> Result<(), GraphError> {
            let triple = Triple::new(convert(t.s())?, convert(t.p())?, convert(t.o())?);
            graph.insert(triple);
            Ok(())
        })
        .map_err(|e| match e {
            StreamError::SourceError(e) => GraphError::Turtle(e.to_string()),
            StreamError::SinkError(e) => e,
        })?;
    tracing::debug!(triples = graph.len(), "loaded turtle graph");
    Ok(graph)
}

fn convert<T: Term>(term: T) -> Result<GraphNode, GraphError> {
    match term.kind() {
        TermKind::Iri => term
            .iri()
            .map(|iri| GraphNode::uri(iri.as_str()))
            .ok_or_else(|| GraphError::UnsupportedTerm("IRI without text".to_string())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| GraphNode::blank(id.as_str()))
            .ok_or_else(|| GraphError::UnsupportedTerm("blank node without label".to_string())),
        TermKind::Literal => {
            let lexical = term
                .lexical_form()
                .ok_or_else(|| GraphError::UnsupportedTerm("literal without lexical form".to_string()))?;
            let literal = match (term.language_tag(), term.datatype()) {
                (Some(tag), _) => Literal::lang_string(&*lexical, tag.as_str()),
                (None, Some(dt)) => Literal::typed(&*lexical, dt.as_str()),
                (None, None) => Literal::string(&*lexical),
            };
            Ok(GraphNode::Literal(literal))
        }
        other => Err(GraphError::UnsupportedTerm(format!("{other:?}"))),
    }
}
