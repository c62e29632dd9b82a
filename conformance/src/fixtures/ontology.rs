//! A small ontology touching every object family.
//!
//! Declarations, set and fixed-arity class expressions, disjointness, a
//! property chain, assertions of every kind, annotation assertions and two
//! SWRL atoms.

/// Ontology exercising every object family.
pub const ONTOLOGY: &str = r#"
@prefix ex:   <http://example.org/> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix swrl: <http://www.w3.org/2003/11/swrl#> .

ex:A a owl:Class ; rdfs:label "A" .
ex:B a owl:Class .
ex:C a owl:Class ;
    rdfs:subClassOf [ owl:unionOf ( ex:B ex:A ) ] ,
                    [ a owl:Restriction ; owl:onProperty ex:p ; owl:allValuesFrom ex:B ] ,
                    [ a owl:Restriction ; owl:onProperty ex:p ; owl:hasValue ex:j ] ,
                    [ a owl:Restriction ; owl:onProperty ex:age ; owl:someValuesFrom xsd:integer ] .
ex:D rdfs:subClassOf [ owl:complementOf [ owl:intersectionOf ( ex:A ex:B ) ] ] .
ex:E rdfs:subClassOf [ owl:oneOf ( ex:i ex:j ) ] .
ex:A owl:disjointWith ex:B .
[ a owl:AllDisjointClasses ; owl:members ( ex:A ex:B ex:C ) ] .

ex:p a owl:ObjectProperty .
ex:q a owl:ObjectProperty ; owl:propertyChainAxiom ( ex:p ex:p ) .
ex:age a owl:DatatypeProperty .

ex:i a ex:A ; ex:p ex:j ; ex:age "42"^^xsd:integer .
ex:j rdfs:comment "second individual"@en .

ex:x a swrl:Variable .
[ a swrl:ClassAtom ; swrl:classPredicate ex:A ; swrl:argument1 ex:x ] .
[ a swrl:IndividualPropertyAtom ; swrl:propertyPredicate ex:p ;
  swrl:argument1 ex:x ; swrl:argument2 ex:j ] .
"#;
