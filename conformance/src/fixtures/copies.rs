//! Annotations that are copies of one another.

/// Three resources carrying the same comment, plus an unrelated one.
pub const COMMENT_COPIES: &str = r#"
@prefix ex:   <http://example.org/> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

_:a rdfs:comment "same" .
_:b rdfs:comment "same" .
_:c rdfs:comment "same" .
ex:Foo rdfs:comment "other" .
"#;

/// A sub-annotation appended to the copy rooted at `_:b`.
pub const COPY_SUB_ANNOTATION: &str = r#"
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

_:b rdfs:comment "same" .
_:extra a owl:Annotation ;
    owl:annotatedSource _:b ;
    owl:annotatedProperty rdfs:comment ;
    owl:annotatedTarget "same" ;
    rdfs:label "appended" .
"#;
