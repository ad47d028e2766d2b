//! SHACL shape discovery.
//!
//! This module finds the shapes declared in a shapes graph:
//! - [`ShapeId`] - Identifier for shapes (IRI or blank node)
//! - [`Target`] - Target declarations for selecting focus nodes
//! - [`NodeShape`] - A discovered node shape and its targets
//! - [`ShapesGraph`] - All shapes discovered in an RDF graph, in graph order
//!
//! Discovery is deliberately shallow: constraints are read lazily per shape
//! term through [`Facets::of`](crate::Facets::of), because logical operators
//! and `sh:node` references can reach anonymous shapes that no type triple
//! announces.

use oxrdf::{
    vocab::{rdf, rdfs},
    BlankNode, Graph, NamedNode, NamedOrBlankNode, NamedOrBlankNodeRef, Term, TermRef,
};
use rustc_hash::FxHashSet;

use crate::error::ShaclParseError;
use crate::reader;
use crate::vocab;

/// Unique identifier for a shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeId {
    /// Named shape (IRI).
    Named(NamedNode),
    /// Anonymous shape (blank node).
    Blank(BlankNode),
}

impl ShapeId {
    /// Creates a shape ID from a named or blank node.
    pub fn from_named_or_blank(node: NamedOrBlankNode) -> Self {
        match node {
            NamedOrBlankNode::NamedNode(n) => Self::Named(n),
            NamedOrBlankNode::BlankNode(b) => Self::Blank(b),
        }
    }

    /// Creates a shape ID from a term, if the term can identify a shape.
    pub fn from_term(term: &Term) -> Option<Self> {
        match term {
            Term::NamedNode(n) => Some(Self::Named(n.clone())),
            Term::BlankNode(b) => Some(Self::Blank(b.clone())),
            Term::Literal(_) => None,
        }
    }

    /// Converts to a Term.
    pub fn to_term(&self) -> Term {
        match self {
            Self::Named(n) => Term::NamedNode(n.clone()),
            Self::Blank(b) => Term::BlankNode(b.clone()),
        }
    }

    /// Returns the shape ID as a named node if it is one.
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Blank(_) => None,
        }
    }
}

impl From<NamedNode> for ShapeId {
    fn from(n: NamedNode) -> Self {
        Self::Named(n)
    }
}

impl From<BlankNode> for ShapeId {
    fn from(b: BlankNode) -> Self {
        Self::Blank(b)
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(n) => write!(f, "<{}>", n.as_str()),
            Self::Blank(b) => write!(f, "_:{}", b.as_str()),
        }
    }
}

/// Target declaration for selecting focus nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Target all instances of a class.
    Class(NamedNode),
    /// Target a specific node.
    Node(Term),
    /// Target all subjects of triples with the given predicate.
    SubjectsOf(NamedNode),
    /// Target all objects of triples with the given predicate.
    ObjectsOf(NamedNode),
    /// Implicit target (shape is also a class).
    Implicit(NamedNode),
}

impl Target {
    /// Returns the targeted class for class-like targets.
    pub fn as_class(&self) -> Option<&NamedNode> {
        match self {
            Self::Class(c) | Self::Implicit(c) => Some(c),
            Self::Node(_) | Self::SubjectsOf(_) | Self::ObjectsOf(_) => None,
        }
    }
}

/// A node shape discovered in a shapes graph.
#[derive(Debug, Clone)]
pub struct NodeShape {
    /// Shape identifier.
    pub id: ShapeId,
    /// Target declarations.
    pub targets: Vec<Target>,
}

impl NodeShape {
    /// Returns a reference to the shape ID.
    pub fn id(&self) -> &ShapeId {
        &self.id
    }
}

/// All shapes discovered in an RDF shapes graph.
///
/// Shapes are kept in graph discovery order, which is stable for equal graph
/// content, so downstream consumers produce deterministic output.
#[derive(Debug, Clone, Default)]
pub struct ShapesGraph {
    node_shapes: Vec<NodeShape>,
    property_shapes: Vec<ShapeId>,
    declared: FxHashSet<ShapeId>,
}

impl ShapesGraph {
    /// Creates a new empty shapes graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers shapes in an RDF graph.
    pub fn from_graph(graph: &Graph) -> Result<Self, ShaclParseError> {
        let mut shapes = Self::new();

        // Explicitly typed node shapes
        for subject in graph.subjects_for_predicate_object(rdf::TYPE, vocab::NODE_SHAPE) {
            let id = ShapeId::from_named_or_blank(subject.into_owned());
            shapes.add_node_shape(graph, id);
        }

        // Subjects typed sh:Shape that are also classes (implicit targets)
        for subject in graph.subjects_for_predicate_object(rdf::TYPE, vocab::SHAPE) {
            let id = ShapeId::from_named_or_blank(subject.into_owned());
            if !shapes.declared.contains(&id) && is_class(graph, &id) {
                shapes.add_node_shape(graph, id);
            }
        }

        // Standalone property shapes: typed, carrying a path, and not nested
        // under some shape's sh:property
        let nested = nested_property_shapes(graph);
        for subject in graph.subjects_for_predicate_object(rdf::TYPE, vocab::PROPERTY_SHAPE) {
            let id = ShapeId::from_named_or_blank(subject.into_owned());
            if shapes.declared.contains(&id) || nested.contains(&id) {
                continue;
            }
            if reader::object(graph, &id.to_term(), vocab::PATH).is_some() {
                shapes.declared.insert(id.clone());
                shapes.property_shapes.push(id);
            }
        }

        Ok(shapes)
    }

    fn add_node_shape(&mut self, graph: &Graph, id: ShapeId) {
        if !self.declared.insert(id.clone()) {
            return;
        }
        let term = id.to_term();
        let mut targets = parse_targets(graph, &term);
        if let ShapeId::Named(n) = &id {
            if is_class(graph, &id) {
                targets.push(Target::Implicit(n.clone()));
            }
        }
        self.node_shapes.push(NodeShape { id, targets });
    }

    /// Returns the discovered node shapes in graph order.
    pub fn node_shapes(&self) -> &[NodeShape] {
        &self.node_shapes
    }

    /// Returns the discovered standalone property shapes in graph order.
    pub fn property_shapes(&self) -> &[ShapeId] {
        &self.property_shapes
    }

    /// Returns true if the given ID belongs to a discovered shape.
    pub fn is_declared(&self, id: &ShapeId) -> bool {
        self.declared.contains(id)
    }

    /// Returns true if no shapes were discovered.
    pub fn is_empty(&self) -> bool {
        self.node_shapes.is_empty() && self.property_shapes.is_empty()
    }

    /// Returns the number of discovered shapes.
    pub fn len(&self) -> usize {
        self.node_shapes.len() + self.property_shapes.len()
    }
}

fn is_class(graph: &Graph, id: &ShapeId) -> bool {
    let subject: NamedOrBlankNodeRef<'_> = match id {
        ShapeId::Named(n) => n.as_ref().into(),
        ShapeId::Blank(b) => b.as_ref().into(),
    };
    graph
        .objects_for_subject_predicate(subject, rdf::TYPE)
        .any(|t| t == TermRef::NamedNode(rdfs::CLASS))
}

fn nested_property_shapes(graph: &Graph) -> FxHashSet<ShapeId> {
    graph
        .triples_for_predicate(vocab::PROPERTY)
        .filter_map(|t| ShapeId::from_term(&t.object.into_owned()))
        .collect()
}

fn parse_targets(graph: &Graph, shape_term: &Term) -> Vec<Target> {
    let mut targets = Vec::new();

    for obj in reader::objects(graph, shape_term, vocab::TARGET_CLASS) {
        if let Term::NamedNode(class) = obj {
            targets.push(Target::Class(class));
        }
    }
    for obj in reader::objects(graph, shape_term, vocab::TARGET_NODE) {
        targets.push(Target::Node(obj));
    }
    for obj in reader::objects(graph, shape_term, vocab::TARGET_SUBJECTS_OF) {
        if let Term::NamedNode(pred) = obj {
            targets.push(Target::SubjectsOf(pred));
        }
    }
    for obj in reader::objects(graph, shape_term, vocab::TARGET_OBJECTS_OF) {
        if let Term::NamedNode(pred) = obj {
            targets.push(Target::ObjectsOf(pred));
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::Triple;

    fn nn(iri: &str) -> NamedNode {
        NamedNode::new(iri).unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        let shapes = ShapesGraph::from_graph(&graph).unwrap();
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_discovers_node_shape_with_target() {
        let mut graph = Graph::new();
        let shape = nn("http://example.org/PersonShape");
        let class = nn("http://example.org/Person");
        graph.insert(&Triple::new(shape.clone(), rdf::TYPE, vocab::NODE_SHAPE));
        graph.insert(&Triple::new(
            shape.clone(),
            vocab::TARGET_CLASS,
            class.clone(),
        ));

        let shapes = ShapesGraph::from_graph(&graph).unwrap();
        assert_eq!(shapes.len(), 1);
        let node_shape = &shapes.node_shapes()[0];
        assert_eq!(node_shape.id, ShapeId::Named(shape));
        assert_eq!(node_shape.targets, [Target::Class(class)]);
    }

    #[test]
    fn test_implicit_class_target() {
        let mut graph = Graph::new();
        let shape = nn("http://example.org/Person");
        graph.insert(&Triple::new(shape.clone(), rdf::TYPE, vocab::NODE_SHAPE));
        graph.insert(&Triple::new(shape.clone(), rdf::TYPE, rdfs::CLASS));

        let shapes = ShapesGraph::from_graph(&graph).unwrap();
        assert_eq!(
            shapes.node_shapes()[0].targets,
            [Target::Implicit(shape)]
        );
    }

    #[test]
    fn test_standalone_property_shape() {
        let mut graph = Graph::new();
        let prop = nn("http://example.org/NameProperty");
        graph.insert(&Triple::new(prop.clone(), rdf::TYPE, vocab::PROPERTY_SHAPE));
        graph.insert(&Triple::new(
            prop.clone(),
            vocab::PATH,
            nn("http://example.org/name"),
        ));

        let shapes = ShapesGraph::from_graph(&graph).unwrap();
        assert_eq!(shapes.property_shapes(), [ShapeId::Named(prop)]);
    }

    #[test]
    fn test_nested_property_shape_is_not_standalone() {
        let mut graph = Graph::new();
        let shape = nn("http://example.org/PersonShape");
        let prop = nn("http://example.org/NameProperty");
        graph.insert(&Triple::new(shape.clone(), rdf::TYPE, vocab::NODE_SHAPE));
        graph.insert(&Triple::new(shape, vocab::PROPERTY, prop.clone()));
        graph.insert(&Triple::new(prop.clone(), rdf::TYPE, vocab::PROPERTY_SHAPE));
        graph.insert(&Triple::new(
            prop,
            vocab::PATH,
            nn("http://example.org/name"),
        ));

        let shapes = ShapesGraph::from_graph(&graph).unwrap();
        assert!(shapes.property_shapes().is_empty());
        assert_eq!(shapes.node_shapes().len(), 1);
    }

    #[test]
    fn test_shape_without_path_is_not_a_property_shape() {
        let mut graph = Graph::new();
        let prop = nn("http://example.org/Dangling");
        graph.insert(&Triple::new(prop, rdf::TYPE, vocab::PROPERTY_SHAPE));

        let shapes = ShapesGraph::from_graph(&graph).unwrap();
        assert!(shapes.is_empty());
    }
}
