//! Shared fixtures for the integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use ontograph_graph::turtle::parse_turtle;
use ontograph_graph::{vocab, GraphNode, Triple};
use ontograph_objects::{ModelConfig, OntModel};

/// A small ontology touching every expression family.
pub const ONTOLOGY: &str = r#"
    @prefix ex: <http://example.org/> .
    @prefix owl: <http://www.w3.org/2002/07/owl#> .
    @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
    @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
    @prefix swrl: <http://www.w3.org/2003/11/swrl#> .

    ex:A a owl:Class ; rdfs:label "A" .
    ex:B a owl:Class .
    ex:C a owl:Class ;
        rdfs:subClassOf [ owl:unionOf ( ex:B ex:A ) ] ,
                        [ a owl:Restriction ; owl:onProperty ex:p ; owl:someValuesFrom ex:B ] ,
                        [ a owl:Restriction ; owl:onProperty ex:age ; owl:someValuesFrom xsd:integer ] .
    ex:D rdfs:subClassOf [ owl:complementOf ex:A ] .
    ex:E rdfs:subClassOf [ owl:oneOf ( ex:i ex:j ) ] .
    ex:A owl:disjointWith ex:B .
    [ a owl:AllDisjointClasses ; owl:members ( ex:A ex:B ex:C ) ] .
    ex:p a owl:ObjectProperty .
    ex:q a owl:ObjectProperty ; owl:propertyChainAxiom ( ex:p ex:p ) .
    ex:age a owl:DatatypeProperty .
    ex:i a ex:A ; ex:p ex:j ; ex:age "42"^^xsd:integer .

    ex:x a swrl:Variable .
    [ a swrl:ClassAtom ; swrl:classPredicate ex:A ; swrl:argument1 ex:x ] .
    [ a swrl:IndividualPropertyAtom ; swrl:propertyPredicate ex:p ;
      swrl:argument1 ex:x ; swrl:argument2 ex:j ] .
"#;

/// The statement of the annotation walkthrough.
pub const PLAIN_LABEL: &str = r#"
    @prefix ex: <http://example.org/> .
    @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
    ex:Foo rdfs:label "x" .
"#;

/// One reification resource annotating the walkthrough statement.
pub const LABEL_COMMENT: &str = r#"
    @prefix ex: <http://example.org/> .
    @prefix owl: <http://www.w3.org/2002/07/owl#> .
    @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
    _:r a owl:Axiom ;
        owl:annotatedSource ex:Foo ;
        owl:annotatedProperty rdfs:label ;
        owl:annotatedTarget "x" ;
        rdfs:comment "y" .
"#;

pub fn model(doc: &str) -> OntModel {
    model_with(doc, ModelConfig::default())
}

pub fn model_with(doc: &str, config: ModelConfig) -> OntModel {
    OntModel::new(parse_turtle(doc).unwrap(), config)
}

pub fn label_statement() -> Triple {
    Triple::new(
        GraphNode::uri("http://example.org/Foo"),
        GraphNode::uri(vocab::RDFS_LABEL),
        GraphNode::string("x"),
    )
}
