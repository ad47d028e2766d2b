//! Facet extraction.
//!
//! [`Facets::of`] reads every constraint facet SHACL can attach to a shape
//! term into one typed bundle. Extraction is per-term and on demand so that
//! anonymous shapes reached through logical operators or `sh:node` can be
//! read without having been discovered up front.

use oxrdf::{Graph, Literal, NamedNode, NamedNodeRef, Term};

use crate::error::ShaclParseError;
use crate::model::ShapeId;
use crate::path::PropertyPath;
use crate::reader;
use crate::vocab;

/// SHACL node kind values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `sh:IRI`
    Iri,
    /// `sh:BlankNode`
    BlankNode,
    /// `sh:Literal`
    Literal,
    /// `sh:BlankNodeOrIRI`
    BlankNodeOrIri,
    /// `sh:BlankNodeOrLiteral`
    BlankNodeOrLiteral,
    /// `sh:IRIOrLiteral`
    IriOrLiteral,
}

impl NodeKind {
    /// Maps a `sh:nodeKind` value to the corresponding kind.
    pub fn from_term(term: &Term) -> Option<Self> {
        let Term::NamedNode(n) = term else {
            return None;
        };
        match n.as_ref() {
            n if n == vocab::IRI => Some(Self::Iri),
            n if n == vocab::BLANK_NODE => Some(Self::BlankNode),
            n if n == vocab::LITERAL => Some(Self::Literal),
            n if n == vocab::BLANK_NODE_OR_IRI => Some(Self::BlankNodeOrIri),
            n if n == vocab::BLANK_NODE_OR_LITERAL => Some(Self::BlankNodeOrLiteral),
            n if n == vocab::IRI_OR_LITERAL => Some(Self::IriOrLiteral),
            _ => None,
        }
    }
}

/// Qualified value shape constraint (`sh:qualifiedValueShape`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedShape {
    /// The qualified shape.
    pub shape: ShapeId,
    /// `sh:qualifiedMinCount`
    pub min_count: Option<u32>,
    /// `sh:qualifiedMaxCount`
    pub max_count: Option<u32>,
    /// `sh:qualifiedValueShapesDisjoint`
    pub disjoint: bool,
}

/// All constraint facets of one shape term.
#[derive(Debug, Clone, Default)]
pub struct Facets {
    /// `sh:path`, present on property shapes.
    pub path: Option<PropertyPath>,

    /// `sh:nodeKind`
    pub node_kind: Option<NodeKind>,
    /// `sh:datatype`
    pub datatype: Option<NamedNode>,
    /// `sh:class` (repeatable)
    pub classes: Vec<NamedNode>,
    /// `sh:in`, resolved to its ordered element list.
    pub in_values: Option<Vec<Term>>,
    /// `sh:hasValue` (repeatable)
    pub has_value: Vec<Term>,

    /// `sh:pattern`
    pub pattern: Option<String>,
    /// `sh:flags`
    pub flags: Option<String>,
    /// `sh:minLength`
    pub min_length: Option<u32>,
    /// `sh:maxLength`
    pub max_length: Option<u32>,
    /// `sh:minInclusive`
    pub min_inclusive: Option<Literal>,
    /// `sh:maxInclusive`
    pub max_inclusive: Option<Literal>,
    /// `sh:minExclusive`
    pub min_exclusive: Option<Literal>,
    /// `sh:maxExclusive`
    pub max_exclusive: Option<Literal>,

    /// `sh:minCount`
    pub min_count: Option<u32>,
    /// `sh:maxCount`
    pub max_count: Option<u32>,

    /// `sh:languageIn`, resolved to its tag list.
    pub language_in: Vec<String>,
    /// `sh:uniqueLang`
    pub unique_lang: bool,

    /// `sh:equals` (repeatable)
    pub equals: Vec<NamedNode>,
    /// `sh:disjoint` (repeatable)
    pub disjoint: Vec<NamedNode>,
    /// `sh:lessThan` (repeatable)
    pub less_than: Vec<NamedNode>,
    /// `sh:lessThanOrEquals` (repeatable)
    pub less_than_or_equals: Vec<NamedNode>,

    /// `sh:not` (repeatable), child shape terms.
    pub not: Vec<Term>,
    /// `sh:and`, resolved child shape term list.
    pub and: Option<Vec<Term>>,
    /// `sh:or`, resolved child shape term list.
    pub or: Option<Vec<Term>>,
    /// `sh:xone`, resolved child shape term list.
    pub xone: Option<Vec<Term>>,

    /// `sh:node` (repeatable), referenced shapes.
    pub node: Vec<ShapeId>,
    /// `sh:property` (repeatable), child property shapes in graph order.
    pub properties: Vec<ShapeId>,
    /// `sh:qualifiedValueShape` with its counts.
    pub qualified: Option<QualifiedShape>,

    /// `sh:closed`
    pub closed: bool,
    /// `sh:ignoredProperties`, resolved to its element list.
    pub ignored_properties: Vec<NamedNode>,
    /// `sh:deactivated`
    pub deactivated: bool,
    /// `sh:sparql` constraint nodes, kept opaque.
    pub sparql: Vec<Term>,

    /// `sh:name`
    pub name: Option<String>,
    /// `sh:description`
    pub description: Option<String>,
}

impl Facets {
    /// Reads all facets of `term` from `graph`.
    pub fn of(graph: &Graph, term: &Term) -> Result<Self, ShaclParseError> {
        let mut facets = Self {
            node_kind: reader::object(graph, term, vocab::NODE_KIND)
                .as_ref()
                .and_then(NodeKind::from_term),
            datatype: named_object(graph, term, vocab::DATATYPE),
            classes: named_objects(graph, term, vocab::CLASS),
            has_value: reader::objects(graph, term, vocab::HAS_VALUE),
            pattern: reader::string_value(graph, term, vocab::PATTERN),
            flags: reader::string_value(graph, term, vocab::FLAGS),
            min_length: count_value(graph, term, vocab::MIN_LENGTH),
            max_length: count_value(graph, term, vocab::MAX_LENGTH),
            min_inclusive: reader::literal_value(graph, term, vocab::MIN_INCLUSIVE),
            max_inclusive: reader::literal_value(graph, term, vocab::MAX_INCLUSIVE),
            min_exclusive: reader::literal_value(graph, term, vocab::MIN_EXCLUSIVE),
            max_exclusive: reader::literal_value(graph, term, vocab::MAX_EXCLUSIVE),
            min_count: count_value(graph, term, vocab::MIN_COUNT),
            max_count: count_value(graph, term, vocab::MAX_COUNT),
            unique_lang: reader::boolean_value(graph, term, vocab::UNIQUE_LANG).unwrap_or(false),
            equals: named_objects(graph, term, vocab::EQUALS),
            disjoint: named_objects(graph, term, vocab::DISJOINT),
            less_than: named_objects(graph, term, vocab::LESS_THAN),
            less_than_or_equals: named_objects(graph, term, vocab::LESS_THAN_OR_EQUALS),
            not: reader::objects(graph, term, vocab::NOT),
            node: shape_ids(graph, term, vocab::NODE)?,
            properties: shape_ids(graph, term, vocab::PROPERTY)?,
            deactivated: reader::boolean_value(graph, term, vocab::DEACTIVATED).unwrap_or(false),
            sparql: reader::objects(graph, term, vocab::SPARQL),
            name: reader::string_value(graph, term, vocab::NAME),
            description: reader::string_value(graph, term, vocab::DESCRIPTION),
            ..Self::default()
        };

        if let Some(path_term) = reader::object(graph, term, vocab::PATH) {
            facets.path = Some(PropertyPath::parse(graph, path_term.as_ref())?);
        }

        if let Some(head) = reader::object(graph, term, vocab::IN) {
            facets.in_values = Some(reader::list(graph, head, term)?);
        }

        if let Some(head) = reader::object(graph, term, vocab::LANGUAGE_IN) {
            for element in reader::list(graph, head, term)? {
                if let Term::Literal(lit) = element {
                    facets.language_in.push(lit.value().to_owned());
                }
            }
        }

        facets.and = shape_term_list(graph, term, vocab::AND)?;
        facets.or = shape_term_list(graph, term, vocab::OR)?;
        facets.xone = shape_term_list(graph, term, vocab::XONE)?;

        if reader::boolean_value(graph, term, vocab::CLOSED).unwrap_or(false) {
            facets.closed = true;
            if let Some(head) = reader::object(graph, term, vocab::IGNORED_PROPERTIES) {
                for element in reader::list(graph, head, term)? {
                    if let Term::NamedNode(n) = element {
                        facets.ignored_properties.push(n);
                    }
                }
            }
        }

        if let Some(qvs) = reader::object(graph, term, vocab::QUALIFIED_VALUE_SHAPE) {
            let shape = ShapeId::from_term(&qvs).ok_or_else(|| {
                ShaclParseError::invalid_shape(
                    term.clone(),
                    "sh:qualifiedValueShape must be an IRI or blank node",
                )
            })?;
            facets.qualified = Some(QualifiedShape {
                shape,
                min_count: count_value(graph, term, vocab::QUALIFIED_MIN_COUNT),
                max_count: count_value(graph, term, vocab::QUALIFIED_MAX_COUNT),
                disjoint: reader::boolean_value(graph, term, vocab::QUALIFIED_VALUE_SHAPES_DISJOINT)
                    .unwrap_or(false),
            });
        }

        Ok(facets)
    }

    /// Returns true if any scalar (node-constraint) facet is set.
    pub fn has_scalar_facets(&self) -> bool {
        self.node_kind.is_some()
            || self.datatype.is_some()
            || self.in_values.is_some()
            || !self.has_value.is_empty()
            || self.pattern.is_some()
            || self.min_length.is_some()
            || self.max_length.is_some()
            || self.min_inclusive.is_some()
            || self.max_inclusive.is_some()
            || self.min_exclusive.is_some()
            || self.max_exclusive.is_some()
            || !self.language_in.is_empty()
    }

    /// Returns true if any logical operator (`sh:not`/`sh:and`/`sh:or`/`sh:xone`) is set.
    pub fn has_logical(&self) -> bool {
        !self.not.is_empty() || self.and.is_some() || self.or.is_some() || self.xone.is_some()
    }

    /// Returns true if the shape term constrains anything at all.
    pub fn is_constraining(&self) -> bool {
        self.has_scalar_facets()
            || self.has_logical()
            || !self.classes.is_empty()
            || !self.node.is_empty()
            || !self.properties.is_empty()
            || self.closed
    }
}

fn named_object(graph: &Graph, term: &Term, predicate: NamedNodeRef<'_>) -> Option<NamedNode> {
    match reader::object(graph, term, predicate)? {
        Term::NamedNode(n) => Some(n),
        _ => None,
    }
}

fn named_objects(graph: &Graph, term: &Term, predicate: NamedNodeRef<'_>) -> Vec<NamedNode> {
    reader::objects(graph, term, predicate)
        .into_iter()
        .filter_map(|t| match t {
            Term::NamedNode(n) => Some(n),
            _ => None,
        })
        .collect()
}

fn count_value(graph: &Graph, term: &Term, predicate: NamedNodeRef<'_>) -> Option<u32> {
    reader::integer_value(graph, term, predicate).and_then(|n| u32::try_from(n).ok())
}

fn shape_ids(
    graph: &Graph,
    term: &Term,
    predicate: NamedNodeRef<'_>,
) -> Result<Vec<ShapeId>, ShaclParseError> {
    reader::objects(graph, term, predicate)
        .into_iter()
        .map(|t| {
            ShapeId::from_term(&t).ok_or_else(|| {
                ShaclParseError::invalid_shape(
                    term.clone(),
                    "Shape reference must be an IRI or blank node",
                )
            })
        })
        .collect()
}

fn shape_term_list(
    graph: &Graph,
    term: &Term,
    predicate: NamedNodeRef<'_>,
) -> Result<Option<Vec<Term>>, ShaclParseError> {
    match reader::object(graph, term, predicate) {
        Some(head) => Ok(Some(reader::list(graph, head, term)?)),
        None => Ok(None),
    }
}
