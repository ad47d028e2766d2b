//! [SHACL](https://www.w3.org/TR/shacl/) vocabulary constants.
//!
//! Laid out like the namespace modules of `oxrdf::vocab`; the published
//! `oxrdf` crate does not ship a SHACL namespace.

use oxrdf::NamedNodeRef;

/// The SHACL namespace: `http://www.w3.org/ns/shacl#`
pub const NAMESPACE: &str = "http://www.w3.org/ns/shacl#";

// === SHAPE CLASSES ===
/// The class of all shapes.
pub const SHAPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#Shape");
/// The class of all node shapes.
pub const NODE_SHAPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#NodeShape");
/// The class of all property shapes.
pub const PROPERTY_SHAPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#PropertyShape");

// === TARGET DECLARATIONS ===
/// Links a shape to a class whose instances are to be validated.
pub const TARGET_CLASS: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetClass");
/// Links a shape to specific focus nodes.
pub const TARGET_NODE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetNode");
/// Links a shape to subjects of triples with a specific predicate.
pub const TARGET_SUBJECTS_OF: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetSubjectsOf");
/// Links a shape to objects of triples with a specific predicate.
pub const TARGET_OBJECTS_OF: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#targetObjectsOf");

// === PROPERTY PATHS ===
/// Specifies a property path for a property shape.
pub const PATH: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#path");
/// RDF list of alternative paths.
pub const ALTERNATIVE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#alternativePath");
/// Inverse path operator.
pub const INVERSE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#inversePath");
/// Zero-or-more path operator.
pub const ZERO_OR_MORE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#zeroOrMorePath");
/// One-or-more path operator.
pub const ONE_OR_MORE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#oneOrMorePath");
/// Zero-or-one path operator.
pub const ZERO_OR_ONE_PATH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#zeroOrOnePath");

// === VALUE TYPE CONSTRAINTS ===
/// Specifies the required class of all value nodes.
pub const CLASS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#class");
/// Specifies the datatype of all value nodes.
pub const DATATYPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#datatype");
/// Specifies the RDF node kind of all value nodes.
pub const NODE_KIND: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#nodeKind");

// === NODE KIND VALUES ===
/// Node kind: IRI.
pub const IRI: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#IRI");
/// Node kind: blank node.
pub const BLANK_NODE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#BlankNode");
/// Node kind: literal.
pub const LITERAL: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#Literal");
/// Node kind: blank node or IRI.
pub const BLANK_NODE_OR_IRI: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#BlankNodeOrIRI");
/// Node kind: blank node or literal.
pub const BLANK_NODE_OR_LITERAL: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#BlankNodeOrLiteral");
/// Node kind: IRI or literal.
pub const IRI_OR_LITERAL: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#IRIOrLiteral");

// === CARDINALITY CONSTRAINTS ===
/// Minimum number of values in the set of value nodes.
pub const MIN_COUNT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#minCount");
/// Maximum number of values in the set of value nodes.
pub const MAX_COUNT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#maxCount");

// === VALUE RANGE CONSTRAINTS ===
/// Minimum exclusive bound.
pub const MIN_EXCLUSIVE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#minExclusive");
/// Minimum inclusive bound.
pub const MIN_INCLUSIVE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#minInclusive");
/// Maximum exclusive bound.
pub const MAX_EXCLUSIVE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#maxExclusive");
/// Maximum inclusive bound.
pub const MAX_INCLUSIVE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#maxInclusive");

// === STRING CONSTRAINTS ===
/// Minimum string length.
pub const MIN_LENGTH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#minLength");
/// Maximum string length.
pub const MAX_LENGTH: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#maxLength");
/// Regular expression pattern all value nodes must match.
pub const PATTERN: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#pattern");
/// Optional regular expression flags for `sh:pattern`.
pub const FLAGS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#flags");
/// RDF list of allowed language tags.
pub const LANGUAGE_IN: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#languageIn");
/// No two value nodes may share a language tag.
pub const UNIQUE_LANG: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#uniqueLang");

// === PROPERTY PAIR CONSTRAINTS ===
/// Value nodes must equal the values of the given property.
pub const EQUALS: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#equals");
/// Value nodes must be disjoint with the values of the given property.
pub const DISJOINT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#disjoint");
/// Value nodes must be less than the values of the given property.
pub const LESS_THAN: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#lessThan");
/// Value nodes must be less than or equal to the values of the given property.
pub const LESS_THAN_OR_EQUALS: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#lessThanOrEquals");

// === LOGICAL CONSTRAINTS ===
/// Value nodes must not conform to the given shape.
pub const NOT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#not");
/// Value nodes must conform to all shapes in the list.
pub const AND: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#and");
/// Value nodes must conform to at least one shape in the list.
pub const OR: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#or");
/// Value nodes must conform to exactly one shape in the list.
pub const XONE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#xone");

// === SHAPE-BASED CONSTRAINTS ===
/// Value nodes must conform to the given node shape.
pub const NODE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#node");
/// Links a shape to its property shapes.
pub const PROPERTY: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#property");
/// Qualified value shape.
pub const QUALIFIED_VALUE_SHAPE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#qualifiedValueShape");
/// Minimum count for the qualified value shape.
pub const QUALIFIED_MIN_COUNT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#qualifiedMinCount");
/// Maximum count for the qualified value shape.
pub const QUALIFIED_MAX_COUNT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#qualifiedMaxCount");
/// Sibling qualified value shapes must be disjoint.
pub const QUALIFIED_VALUE_SHAPES_DISJOINT: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#qualifiedValueShapesDisjoint");

// === OTHER CONSTRAINTS ===
/// Only the shape's own properties are allowed on the focus node.
pub const CLOSED: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#closed");
/// Properties exempt from the closedness check.
pub const IGNORED_PROPERTIES: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#ignoredProperties");
/// At least one value node must equal the given term.
pub const HAS_VALUE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#hasValue");
/// RDF list of allowed values.
pub const IN: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#in");

// === SPARQL CONSTRAINTS ===
/// Links a shape to a SPARQL-based constraint.
pub const SPARQL: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#sparql");

// === METADATA ===
/// Whether the shape is deactivated.
pub const DEACTIVATED: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#deactivated");
/// Human-readable name of the shape.
pub const NAME: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#name");
/// Human-readable description of the shape.
pub const DESCRIPTION: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/ns/shacl#description");
