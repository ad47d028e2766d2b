//! SHACL property paths.
//!
//! Parses the property path forms of the SHACL specification:
//! - Predicate path (simple IRI)
//! - Sequence path (RDF list of paths)
//! - Alternative path (`sh:alternativePath`)
//! - Inverse path (`sh:inversePath`)
//! - Zero-or-more path (`sh:zeroOrMorePath`)
//! - One-or-more path (`sh:oneOrMorePath`)
//! - Zero-or-one path (`sh:zeroOrOnePath`)

use oxrdf::{Graph, NamedNode, Term, TermRef};
use std::fmt;

use crate::error::ShaclParseError;
use crate::reader;
use crate::vocab;

/// A SHACL property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    /// A simple predicate path (IRI).
    Predicate(NamedNode),

    /// A sequence of paths (traversed in order).
    Sequence(Vec<PropertyPath>),

    /// Alternative paths (any one can match).
    Alternative(Vec<PropertyPath>),

    /// Inverse path (traversed in reverse direction).
    Inverse(Box<PropertyPath>),

    /// Zero or more repetitions of the path.
    ZeroOrMore(Box<PropertyPath>),

    /// One or more repetitions of the path.
    OneOrMore(Box<PropertyPath>),

    /// Zero or one occurrence of the path.
    ZeroOrOne(Box<PropertyPath>),
}

impl PropertyPath {
    /// Creates a predicate path from a named node.
    pub fn predicate(predicate: impl Into<NamedNode>) -> Self {
        Self::Predicate(predicate.into())
    }

    /// Creates an inverse path.
    pub fn inverse(path: PropertyPath) -> Self {
        Self::Inverse(Box::new(path))
    }

    /// Creates a one-or-more path.
    pub fn one_or_more(path: PropertyPath) -> Self {
        Self::OneOrMore(Box::new(path))
    }

    /// Parses a property path from a term in an RDF graph.
    pub fn parse(graph: &Graph, term: TermRef<'_>) -> Result<Self, ShaclParseError> {
        match term {
            // Simple predicate path (IRI)
            TermRef::NamedNode(node) => Ok(Self::Predicate(node.into_owned())),

            // Complex path (blank node with path operators)
            TermRef::BlankNode(bnode) => {
                let bnode_term: Term = bnode.into_owned().into();

                if let Some(list_head) = reader::object(graph, &bnode_term, vocab::ALTERNATIVE_PATH)
                {
                    let paths = parse_path_list(graph, list_head, &bnode_term)?;
                    return Ok(Self::Alternative(paths));
                }

                if let Some(inner) = reader::object(graph, &bnode_term, vocab::INVERSE_PATH) {
                    let inner_path = Self::parse(graph, inner.as_ref())?;
                    return Ok(Self::Inverse(Box::new(inner_path)));
                }

                if let Some(inner) = reader::object(graph, &bnode_term, vocab::ZERO_OR_MORE_PATH) {
                    let inner_path = Self::parse(graph, inner.as_ref())?;
                    return Ok(Self::ZeroOrMore(Box::new(inner_path)));
                }

                if let Some(inner) = reader::object(graph, &bnode_term, vocab::ONE_OR_MORE_PATH) {
                    let inner_path = Self::parse(graph, inner.as_ref())?;
                    return Ok(Self::OneOrMore(Box::new(inner_path)));
                }

                if let Some(inner) = reader::object(graph, &bnode_term, vocab::ZERO_OR_ONE_PATH) {
                    let inner_path = Self::parse(graph, inner.as_ref())?;
                    return Ok(Self::ZeroOrOne(Box::new(inner_path)));
                }

                // Sequence path (RDF list starting from this blank node)
                if reader::is_list_head(graph, &bnode_term) {
                    let paths = parse_path_list(graph, bnode_term.clone(), &bnode_term)?;
                    if paths.len() >= 2 {
                        return Ok(Self::Sequence(paths));
                    }
                }

                Err(ShaclParseError::invalid_property_path(
                    bnode_term,
                    "Unknown property path structure",
                ))
            }

            TermRef::Literal(_) => Err(ShaclParseError::invalid_property_path(
                term.into_owned(),
                "Property path must be an IRI or blank node",
            )),
        }
    }

    /// Returns true if this is a simple predicate path.
    pub fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }

    /// Returns the predicate if this is a simple predicate path.
    pub fn as_predicate(&self) -> Option<&NamedNode> {
        match self {
            Self::Predicate(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(p) => write!(f, "<{}>", p.as_str()),
            Self::Sequence(paths) => {
                write!(f, "(")?;
                for (i, p) in paths.iter().enumerate() {
                    if i > 0 {
                        write!(f, " / ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ")")
            }
            Self::Alternative(paths) => {
                write!(f, "(")?;
                for (i, p) in paths.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{p}")?;
                }
                write!(f, ")")
            }
            Self::Inverse(p) => write!(f, "^{p}"),
            Self::ZeroOrMore(p) => write!(f, "{p}*"),
            Self::OneOrMore(p) => write!(f, "{p}+"),
            Self::ZeroOrOne(p) => write!(f, "{p}?"),
        }
    }
}

fn parse_path_list(
    graph: &Graph,
    list_head: Term,
    origin: &Term,
) -> Result<Vec<PropertyPath>, ShaclParseError> {
    reader::list(graph, list_head, origin)?
        .into_iter()
        .map(|element| PropertyPath::parse(graph, element.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{vocab::rdf, BlankNode, Triple};

    fn nn(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    #[test]
    fn test_predicate_path() {
        let graph = Graph::new();
        let p = nn("http://example.org/p");
        let path = PropertyPath::parse(&graph, p.as_ref().into()).unwrap();
        assert_eq!(path, PropertyPath::Predicate(p));
        assert!(path.is_predicate());
    }

    #[test]
    fn test_inverse_path() {
        let mut graph = Graph::new();
        let node = BlankNode::default();
        let p = nn("http://example.org/child");
        graph.insert(&Triple::new(node.clone(), vocab::INVERSE_PATH, p.clone()));

        let path = PropertyPath::parse(&graph, node.as_ref().into()).unwrap();
        assert_eq!(path, PropertyPath::inverse(PropertyPath::Predicate(p)));
    }

    #[test]
    fn test_one_or_more_path() {
        let mut graph = Graph::new();
        let node = BlankNode::default();
        let p = nn("http://example.org/part");
        graph.insert(&Triple::new(node.clone(), vocab::ONE_OR_MORE_PATH, p.clone()));

        let path = PropertyPath::parse(&graph, node.as_ref().into()).unwrap();
        assert_eq!(path, PropertyPath::one_or_more(PropertyPath::Predicate(p)));
        assert_eq!(path.to_string(), "<http://example.org/part>+");
    }

    #[test]
    fn test_alternative_path() {
        let mut graph = Graph::new();
        let node = BlankNode::default();
        let cell1 = BlankNode::default();
        let cell2 = BlankNode::default();
        let a = nn("http://example.org/a");
        let b = nn("http://example.org/b");
        graph.insert(&Triple::new(
            node.clone(),
            vocab::ALTERNATIVE_PATH,
            cell1.clone(),
        ));
        graph.insert(&Triple::new(cell1.clone(), rdf::FIRST, a.clone()));
        graph.insert(&Triple::new(cell1, rdf::REST, cell2.clone()));
        graph.insert(&Triple::new(cell2.clone(), rdf::FIRST, b.clone()));
        graph.insert(&Triple::new(cell2, rdf::REST, rdf::NIL));

        let path = PropertyPath::parse(&graph, node.as_ref().into()).unwrap();
        assert_eq!(
            path,
            PropertyPath::Alternative(vec![
                PropertyPath::Predicate(a),
                PropertyPath::Predicate(b)
            ])
        );
    }

    #[test]
    fn test_sequence_path() {
        let mut graph = Graph::new();
        let cell1 = BlankNode::default();
        let cell2 = BlankNode::default();
        let a = nn("http://example.org/a");
        let b = nn("http://example.org/b");
        graph.insert(&Triple::new(cell1.clone(), rdf::FIRST, a.clone()));
        graph.insert(&Triple::new(cell1.clone(), rdf::REST, cell2.clone()));
        graph.insert(&Triple::new(cell2.clone(), rdf::FIRST, b.clone()));
        graph.insert(&Triple::new(cell2, rdf::REST, rdf::NIL));

        let path = PropertyPath::parse(&graph, cell1.as_ref().into()).unwrap();
        assert_eq!(
            path,
            PropertyPath::Sequence(vec![PropertyPath::Predicate(a), PropertyPath::Predicate(b)])
        );
        assert_eq!(
            path.to_string(),
            "(<http://example.org/a> / <http://example.org/b>)"
        );
    }

    #[test]
    fn test_unknown_path_structure_is_rejected() {
        let graph = Graph::new();
        let node = BlankNode::default();
        assert!(PropertyPath::parse(&graph, node.as_ref().into()).is_err());
    }
}
