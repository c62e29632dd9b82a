//! The label statement `ex:Foo rdfs:label "x"` and reification resources
//! annotating it.

/// The bare statement, with no reification resource.
pub const PLAIN_LABEL: &str = r#"
@prefix ex:   <http://example.org/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

ex:Foo rdfs:label "x" .
"#;

/// One reification resource carrying `rdfs:comment "y"`.
pub const LABEL_COMMENT: &str = r#"
@prefix ex:   <http://example.org/> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

_:r a owl:Axiom ;
    owl:annotatedSource ex:Foo ;
    owl:annotatedProperty rdfs:label ;
    owl:annotatedTarget "x" ;
    rdfs:comment "y" .
"#;

/// A textually distinct resource encoding the same `(rdfs:comment, "y")`.
pub const SECOND_LABEL_COMMENT: &str = r#"
@prefix ex:   <http://example.org/> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

_:s owl:annotatedSource ex:Foo ;
    owl:annotatedProperty rdfs:label ;
    owl:annotatedTarget "x" ;
    rdfs:comment "y" .
"#;
