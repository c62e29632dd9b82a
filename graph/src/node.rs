//! Graph node values: URI references, blank node ids and literals.
//!
//! A [`GraphNode`] identifies one position of a triple. All three variants
//! are cheap to clone (`Arc<str>` payloads) and compare by value.

use std::fmt;
use std::sync::Arc;

use crate::vocab;

/// Blank node identifier.
///
/// Blank ids are stable within one graph and carry no global meaning.
/// The label is stored without the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Creates a blank id from a label (without `_:`).
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Returns the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF literal: lexical form, datatype IRI and optional language tag.
///
/// # Invariants
///
/// - The datatype is always present; plain strings use `xsd:string`.
/// - A language-tagged literal has datatype `rdf:langString`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: Arc<str>,
    lang: Option<Arc<str>>,
}

impl Literal {
    /// Creates a typed literal.
    pub fn typed(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(datatype.as_ref()),
            lang: None,
        }
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl AsRef<str>) -> Self {
        Self::typed(lexical, vocab::XSD_STRING)
    }

    /// Creates an `rdf:langString` literal. The tag is lower-cased.
    pub fn lang_string(lexical: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(vocab::RDF_LANG_STRING),
            lang: Some(Arc::from(lang.as_ref().to_ascii_lowercase().as_str())),
        }
    }

    /// Returns the lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Returns the datatype IRI.
    #[must_use]
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// Returns the language tag, if any.
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_lexical(&self.lexical))?;
        match &self.lang {
            Some(lang) => write!(f, "@{lang}"),
            None if &*self.datatype == vocab::XSD_STRING => Ok(()),
            None => write!(f, "^^<{}>", self.datatype),
        }
    }
}

/// Escapes a lexical form for N-Triples output.
pub(crate) fn escape_lexical(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// One node of the graph.
///
/// Equality is value equality on the union. The derived order
/// (`UriRef < BlankId < Literal`, then by payload) is total and is used by
/// the graph indexes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GraphNode {
    /// An absolute URI reference.
    UriRef(Arc<str>),
    /// An anonymous resource.
    BlankId(BlankId),
    /// A literal value.
    Literal(Literal),
}

impl GraphNode {
    /// Creates a URI node.
    pub fn uri(iri: impl AsRef<str>) -> Self {
        GraphNode::UriRef(Arc::from(iri.as_ref()))
    }

    /// Creates a blank node.
    pub fn blank(label: impl AsRef<str>) -> Self {
        GraphNode::BlankId(BlankId::new(label))
    }

    /// Wraps a literal.
    #[must_use]
    pub fn literal(literal: Literal) -> Self {
        GraphNode::Literal(literal)
    }

    /// Shorthand for an `xsd:string` literal node.
    pub fn string(lexical: impl AsRef<str>) -> Self {
        GraphNode::Literal(Literal::string(lexical))
    }

    /// Returns true for URI nodes.
    #[must_use]
    pub fn is_uri(&self) -> bool {
        matches!(self, GraphNode::UriRef(_))
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, GraphNode::BlankId(_))
    }

    /// Returns true for literal nodes.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, GraphNode::Literal(_))
    }

    /// Returns the URI, if this is a URI node.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            GraphNode::UriRef(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the blank id, if this is a blank node.
    #[must_use]
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            GraphNode::BlankId(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the literal, if this is a literal node.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            GraphNode::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true if this node is the URI `iri`.
    #[must_use]
    pub fn is(&self, iri: &str) -> bool {
        self.as_uri() == Some(iri)
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphNode::UriRef(iri) => write!(f, "<{iri}>"),
            GraphNode::BlankId(id) => write!(f, "{id}"),
            GraphNode::Literal(lit) => write!(f, "{lit}"),
        }
    }
}

impl From<Literal> for GraphNode {
    fn from(literal: Literal) -> Self {
        GraphNode::Literal(literal)
    }
}

impl From<BlankId> for GraphNode {
    fn from(id: BlankId) -> Self {
        GraphNode::BlankId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_id_display() {
        let id = BlankId::new("b0");
        assert_eq!(id.as_str(), "b0");
        assert_eq!(id.to_string(), "_:b0");
    }

    #[test]
    fn literal_display_forms() {
        assert_eq!(Literal::string("x").to_string(), "\"x\"");
        assert_eq!(Literal::lang_string("chat", "FR").to_string(), "\"chat\"@fr");
        assert_eq!(
            Literal::typed("1", vocab::XSD_INTEGER).to_string(),
            "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(Literal::string("a\"b").to_string(), "\"a\\\"b\"");
    }

    #[test]
    fn lang_string_uses_rdf_lang_string() {
        let lit = Literal::lang_string("x", "en");
        assert_eq!(lit.datatype(), vocab::RDF_LANG_STRING);
        assert_eq!(lit.lang(), Some("en"));
    }

    #[test]
    fn node_variant_order() {
        let uri = GraphNode::uri("http://z.org");
        let blank = GraphNode::blank("a");
        let lit = GraphNode::string("a");
        assert!(uri < blank);
        assert!(blank < lit);
    }

    #[test]
    fn node_accessors() {
        let uri = GraphNode::uri("http://example.org/a");
        assert!(uri.is_uri());
        assert!(uri.is("http://example.org/a"));
        assert_eq!(uri.as_blank(), None);

        let blank = GraphNode::blank("x");
        assert_eq!(blank.as_blank().map(BlankId::as_str), Some("x"));
        assert!(blank.as_uri().is_none());

        let lit = GraphNode::string("v");
        assert_eq!(lit.as_literal().map(Literal::lexical), Some("v"));
    }
}
