//! Standard IRI constants used across the object layer.

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// SWRL namespace.
pub const SWRL: &str = "http://www.w3.org/2003/11/swrl#";
/// SWRL built-ins namespace.
pub const SWRLB: &str = "http://www.w3.org/2003/11/swrlb#";

// RDF
/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:first`.
pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
/// `rdf:rest`.
pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
/// `rdf:nil`.
pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
/// `rdf:List`.
pub const RDF_LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
/// `rdf:langString`.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

// RDFS
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:seeAlso`.
pub const RDFS_SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
/// `rdfs:isDefinedBy`.
pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `rdfs:Datatype`.
pub const RDFS_DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";

// OWL declarations
/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:AnnotationProperty`.
pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
/// `owl:NamedIndividual`.
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
/// `owl:Thing`.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";

// OWL class expressions
/// `owl:Restriction`.
pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
/// `owl:onProperty`.
pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
/// `owl:someValuesFrom`.
pub const OWL_SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
/// `owl:allValuesFrom`.
pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
/// `owl:hasValue`.
pub const OWL_HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
/// `owl:unionOf`.
pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
/// `owl:intersectionOf`.
pub const OWL_INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
/// `owl:oneOf`.
pub const OWL_ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";
/// `owl:complementOf`.
pub const OWL_COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";

// OWL axioms
/// `owl:disjointWith`.
pub const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
/// `owl:AllDisjointClasses`.
pub const OWL_ALL_DISJOINT_CLASSES: &str = "http://www.w3.org/2002/07/owl#AllDisjointClasses";
/// `owl:members`.
pub const OWL_MEMBERS: &str = "http://www.w3.org/2002/07/owl#members";
/// `owl:propertyChainAxiom`.
pub const OWL_PROPERTY_CHAIN_AXIOM: &str = "http://www.w3.org/2002/07/owl#propertyChainAxiom";

// OWL reification
/// `owl:Axiom`.
pub const OWL_AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
/// `owl:Annotation`.
pub const OWL_ANNOTATION: &str = "http://www.w3.org/2002/07/owl#Annotation";
/// `owl:annotatedSource`.
pub const OWL_ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
/// `owl:annotatedProperty`.
pub const OWL_ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
/// `owl:annotatedTarget`.
pub const OWL_ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";

// OWL annotation properties
/// `owl:versionInfo`.
pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
/// `owl:deprecated`.
pub const OWL_DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";

// XSD datatypes
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

// SWRL
/// `swrl:Variable`.
pub const SWRL_VARIABLE: &str = "http://www.w3.org/2003/11/swrl#Variable";
/// `swrl:ClassAtom`.
pub const SWRL_CLASS_ATOM: &str = "http://www.w3.org/2003/11/swrl#ClassAtom";
/// `swrl:IndividualPropertyAtom`.
pub const SWRL_INDIVIDUAL_PROPERTY_ATOM: &str =
    "http://www.w3.org/2003/11/swrl#IndividualPropertyAtom";
/// `swrl:DatavaluedPropertyAtom`.
pub const SWRL_DATAVALUED_PROPERTY_ATOM: &str =
    "http://www.w3.org/2003/11/swrl#DatavaluedPropertyAtom";
/// `swrl:BuiltinAtom`.
pub const SWRL_BUILTIN_ATOM: &str = "http://www.w3.org/2003/11/swrl#BuiltinAtom";
/// `swrl:classPredicate`.
pub const SWRL_CLASS_PREDICATE: &str = "http://www.w3.org/2003/11/swrl#classPredicate";
/// `swrl:propertyPredicate`.
pub const SWRL_PROPERTY_PREDICATE: &str = "http://www.w3.org/2003/11/swrl#propertyPredicate";
/// `swrl:argument1`.
pub const SWRL_ARGUMENT1: &str = "http://www.w3.org/2003/11/swrl#argument1";
/// `swrl:argument2`.
pub const SWRL_ARGUMENT2: &str = "http://www.w3.org/2003/11/swrl#argument2";
/// `swrl:builtin`.
pub const SWRL_BUILTIN: &str = "http://www.w3.org/2003/11/swrl#builtin";
/// `swrl:arguments`.
pub const SWRL_ARGUMENTS: &str = "http://www.w3.org/2003/11/swrl#arguments";

/// Annotation properties every ontology may use without declaring them.
pub const BUILTIN_ANNOTATION_PROPERTIES: &[&str] = &[
    RDFS_LABEL,
    RDFS_COMMENT,
    RDFS_SEE_ALSO,
    RDFS_IS_DEFINED_BY,
    OWL_VERSION_INFO,
    OWL_DEPRECATED,
    "http://www.w3.org/2002/07/owl#priorVersion",
    "http://www.w3.org/2002/07/owl#backwardCompatibleWith",
    "http://www.w3.org/2002/07/owl#incompatibleWith",
];

/// Predicates that make up a reification resource rather than annotate it.
pub const REIFICATION_PREDICATES: &[&str] = &[
    RDF_TYPE,
    OWL_ANNOTATED_SOURCE,
    OWL_ANNOTATED_PROPERTY,
    OWL_ANNOTATED_TARGET,
];

/// Returns true if `iri` belongs to one of the reserved vocabularies
/// (RDF, RDFS, OWL, XSD, SWRL, SWRL built-ins).
#[must_use]
pub fn is_builtin(iri: &str) -> bool {
    [RDF, RDFS, OWL, XSD, SWRL, SWRLB]
        .iter()
        .any(|ns| iri.starts_with(ns))
}

/// Returns true for the built-in annotation properties.
#[must_use]
pub fn is_builtin_annotation_property(iri: &str) -> bool {
    BUILTIN_ANNOTATION_PROPERTIES.contains(&iri)
}

/// Returns true for the structural predicates of a reification resource.
#[must_use]
pub fn is_reification_predicate(iri: &str) -> bool {
    REIFICATION_PREDICATES.contains(&iri)
}
