//! Per-conversion state.

use oxrdf::{Graph, NamedNode, Term};
use rustc_hash::{FxHashMap, FxHashSet};
use shacl_ast::{ShapeId, ShapesGraph};
use shex_ast::{Schema, ShapeLabel};

/// A diagnostic recorded while converting, attached to the result rather
/// than printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// The shape term the diagnostic concerns, if any.
    pub shape: Option<Term>,
    /// Human-readable description of what was degraded or dropped.
    pub message: String,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.shape {
            Some(shape) => write!(f, "{shape}: {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// State for one conversion call.
///
/// Owns the target-class index, the memoization set that breaks recursion on
/// cyclic shape graphs, the declaration arena being built, and the warning
/// list. Discarded when the call returns.
pub(crate) struct Context<'a> {
    pub(crate) graph: &'a Graph,
    pub(crate) shapes: &'a ShapesGraph,
    /// Class IRI -> declaring shape. Last declaration wins for classes
    /// targeted by several shapes.
    class_index: FxHashMap<NamedNode, ShapeId>,
    /// Shapes whose translation has started; entries are added before
    /// recursing into a shape's own children, so a re-entrant reference
    /// resolves to a label instead of re-triggering translation.
    pub(crate) visited: FxHashSet<ShapeId>,
    pub(crate) schema: Schema,
    pub(crate) warnings: Vec<Warning>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(graph: &'a Graph, shapes: &'a ShapesGraph) -> Self {
        let mut class_index = FxHashMap::default();
        for node_shape in shapes.node_shapes() {
            for target in &node_shape.targets {
                if let Some(class) = target.as_class() {
                    class_index.insert(class.clone(), node_shape.id().clone());
                }
            }
        }
        Self {
            graph,
            shapes,
            class_index,
            visited: FxHashSet::default(),
            schema: Schema::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns the shape declaring the given class as a target, if any.
    pub(crate) fn shape_for_class(&self, class: &NamedNode) -> Option<&ShapeId> {
        self.class_index.get(class)
    }

    pub(crate) fn warn(&mut self, shape: Option<&Term>, message: impl Into<String>) {
        self.warnings.push(Warning {
            shape: shape.cloned(),
            message: message.into(),
        });
    }
}

/// The output label a SHACL shape is declared under.
pub(crate) fn label_of(id: &ShapeId) -> ShapeLabel {
    match id {
        ShapeId::Named(n) => ShapeLabel::Iri(n.clone()),
        ShapeId::Blank(b) => ShapeLabel::BNode(b.clone()),
    }
}
