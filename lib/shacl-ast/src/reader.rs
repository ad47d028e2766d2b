//! Read-only lookup helpers over an RDF graph.
//!
//! Thin pattern-matching facade used by shape discovery, facet extraction and
//! property path parsing: single/multi object lookup, typed literal
//! accessors, and RDF list resolution (the encoding SHACL uses for `sh:in`,
//! `sh:and`, `sh:or`, `sh:xone` and `sh:ignoredProperties`).

use oxrdf::{vocab::rdf, Graph, Literal, NamedNodeRef, Term};
use rustc_hash::FxHashSet;

use crate::error::ShaclParseError;

/// Returns one object of `subject` under `predicate`, if any.
pub fn object(graph: &Graph, subject: &Term, predicate: NamedNodeRef<'_>) -> Option<Term> {
    match subject {
        Term::NamedNode(n) => graph
            .object_for_subject_predicate(n, predicate)
            .map(|t| t.into_owned()),
        Term::BlankNode(b) => graph
            .object_for_subject_predicate(b, predicate)
            .map(|t| t.into_owned()),
        Term::Literal(_) => None,
    }
}

/// Returns all objects of `subject` under `predicate`.
pub fn objects(graph: &Graph, subject: &Term, predicate: NamedNodeRef<'_>) -> Vec<Term> {
    match subject {
        Term::NamedNode(n) => graph
            .objects_for_subject_predicate(n, predicate)
            .map(|t| t.into_owned())
            .collect(),
        Term::BlankNode(b) => graph
            .objects_for_subject_predicate(b, predicate)
            .map(|t| t.into_owned())
            .collect(),
        Term::Literal(_) => Vec::new(),
    }
}

/// Returns the lexical value of a literal object, if any.
pub fn string_value(graph: &Graph, subject: &Term, predicate: NamedNodeRef<'_>) -> Option<String> {
    match object(graph, subject, predicate)? {
        Term::Literal(lit) => Some(lit.value().to_owned()),
        _ => None,
    }
}

/// Returns an integer-valued literal object, if any.
pub fn integer_value(graph: &Graph, subject: &Term, predicate: NamedNodeRef<'_>) -> Option<i64> {
    match object(graph, subject, predicate)? {
        Term::Literal(lit) => lit.value().parse().ok(),
        _ => None,
    }
}

/// Returns a boolean-valued literal object, if any.
pub fn boolean_value(graph: &Graph, subject: &Term, predicate: NamedNodeRef<'_>) -> Option<bool> {
    match object(graph, subject, predicate)? {
        Term::Literal(lit) => match lit.value() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Returns a literal object, if any.
pub fn literal_value(graph: &Graph, subject: &Term, predicate: NamedNodeRef<'_>) -> Option<Literal> {
    match object(graph, subject, predicate)? {
        Term::Literal(lit) => Some(lit),
        _ => None,
    }
}

/// Returns true if `term` looks like the head of an RDF list.
pub fn is_list_head(graph: &Graph, term: &Term) -> bool {
    object(graph, term, rdf::FIRST).is_some()
}

/// Resolves an RDF list head into its ordered element sequence.
///
/// `origin` is the shape the list belongs to, used for error reporting.
/// Cyclic `rdf:rest` chains are detected and reported rather than looped.
pub fn list(graph: &Graph, head: Term, origin: &Term) -> Result<Vec<Term>, ShaclParseError> {
    let mut elements = Vec::new();
    let mut seen = FxHashSet::default();
    let mut current = head;

    loop {
        if let Term::NamedNode(n) = &current {
            if n.as_ref() == rdf::NIL {
                return Ok(elements);
            }
        }

        if !seen.insert(current.clone()) {
            return Err(ShaclParseError::circular_list(current));
        }

        let first = object(graph, &current, rdf::FIRST).ok_or_else(|| {
            ShaclParseError::invalid_rdf_list(origin.clone(), "Missing rdf:first")
        })?;
        elements.push(first);

        current = object(graph, &current, rdf::REST).ok_or_else(|| {
            ShaclParseError::invalid_rdf_list(origin.clone(), "Missing rdf:rest")
        })?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{BlankNode, NamedNode, Triple};

    fn nn(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    fn list_graph(elements: &[&str]) -> (Graph, Term) {
        let mut graph = Graph::new();
        let mut cells: Vec<BlankNode> = (0..elements.len()).map(|_| BlankNode::default()).collect();
        for (i, element) in elements.iter().enumerate() {
            graph.insert(&Triple::new(cells[i].clone(), rdf::FIRST, nn(element)));
            if i + 1 < elements.len() {
                graph.insert(&Triple::new(cells[i].clone(), rdf::REST, cells[i + 1].clone()));
            } else {
                graph.insert(&Triple::new(cells[i].clone(), rdf::REST, rdf::NIL));
            }
        }
        let head = Term::BlankNode(cells.remove(0));
        (graph, head)
    }

    #[test]
    fn test_list_resolution_preserves_order() {
        let (graph, head) = list_graph(&[
            "http://example.org/a",
            "http://example.org/b",
            "http://example.org/c",
        ]);
        let origin = head.clone();
        let elements = list(&graph, head, &origin).unwrap();
        assert_eq!(
            elements,
            [
                Term::NamedNode(nn("http://example.org/a")),
                Term::NamedNode(nn("http://example.org/b")),
                Term::NamedNode(nn("http://example.org/c")),
            ]
        );
    }

    #[test]
    fn test_empty_list_is_nil() {
        let graph = Graph::new();
        let head = Term::NamedNode(rdf::NIL.into_owned());
        assert!(list(&graph, head.clone(), &head).unwrap().is_empty());
    }

    #[test]
    fn test_circular_list_is_rejected() {
        let mut graph = Graph::new();
        let cell = BlankNode::default();
        graph.insert(&Triple::new(
            cell.clone(),
            rdf::FIRST,
            nn("http://example.org/a"),
        ));
        graph.insert(&Triple::new(cell.clone(), rdf::REST, cell.clone()));
        let head = Term::BlankNode(cell);
        assert!(matches!(
            list(&graph, head.clone(), &head),
            Err(ShaclParseError::CircularList { .. })
        ));
    }

    #[test]
    fn test_truncated_list_is_rejected() {
        let mut graph = Graph::new();
        let cell = BlankNode::default();
        graph.insert(&Triple::new(
            cell.clone(),
            rdf::FIRST,
            nn("http://example.org/a"),
        ));
        let head = Term::BlankNode(cell);
        assert!(matches!(
            list(&graph, head.clone(), &head),
            Err(ShaclParseError::InvalidRdfList { .. })
        ));
    }

    #[test]
    fn test_typed_accessors() {
        let mut graph = Graph::new();
        let s = nn("http://example.org/s");
        graph.insert(&Triple::new(
            s.clone(),
            nn("http://example.org/count"),
            Literal::new_typed_literal("4", oxrdf::vocab::xsd::INTEGER),
        ));
        graph.insert(&Triple::new(
            s.clone(),
            nn("http://example.org/flag"),
            Literal::new_typed_literal("true", oxrdf::vocab::xsd::BOOLEAN),
        ));
        let subject = Term::NamedNode(s);
        assert_eq!(
            integer_value(&graph, &subject, nn("http://example.org/count").as_ref()),
            Some(4)
        );
        assert_eq!(
            boolean_value(&graph, &subject, nn("http://example.org/flag").as_ref()),
            Some(true)
        );
        assert_eq!(
            integer_value(&graph, &subject, nn("http://example.org/flag").as_ref()),
            None
        );
    }
}
