//! ShEx schema model types.
//!
//! This module defines the abstract syntax of a ShEx schema:
//! - [`ShapeLabel`] - Identifier for shape declarations (IRI or blank node)
//! - [`ShapeExpr`] - Shape expression (constraints on a focus node)
//! - [`TripleExpr`] - Triple expression (required/repeated predicate patterns)
//! - [`NodeConstraint`] - Constraints on node values (datatype, facets, value sets)
//! - [`Cardinality`] - Min/max occurrences for triple constraints
//! - [`Schema`] - Insertion-ordered collection of shape declarations

use oxrdf::{BlankNode, Literal, NamedNode, NamedOrBlankNode, Term};
use rustc_hash::FxHashMap;

use crate::error::SchemaError;

/// Unique identifier for a shape declaration (shape label in ShEx terminology).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeLabel {
    /// Named shape (IRI).
    Iri(NamedNode),
    /// Anonymous shape (blank node).
    BNode(BlankNode),
}

impl ShapeLabel {
    /// Creates a shape label from a named or blank node.
    pub fn from_named_or_blank(node: NamedOrBlankNode) -> Self {
        match node {
            NamedOrBlankNode::NamedNode(n) => Self::Iri(n),
            NamedOrBlankNode::BlankNode(b) => Self::BNode(b),
        }
    }

    /// Converts to a Term.
    pub fn to_term(&self) -> Term {
        match self {
            Self::Iri(n) => Term::NamedNode(n.clone()),
            Self::BNode(b) => Term::BlankNode(b.clone()),
        }
    }

    /// Returns the shape label as a named node if it is one.
    pub fn as_iri(&self) -> Option<&NamedNode> {
        match self {
            Self::Iri(n) => Some(n),
            Self::BNode(_) => None,
        }
    }
}

impl From<NamedNode> for ShapeLabel {
    fn from(n: NamedNode) -> Self {
        Self::Iri(n)
    }
}

impl From<BlankNode> for ShapeLabel {
    fn from(b: BlankNode) -> Self {
        Self::BNode(b)
    }
}

impl std::fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(n) => write!(f, "<{}>", n.as_str()),
            Self::BNode(b) => write!(f, "_:{}", b.as_str()),
        }
    }
}

/// Shape expression.
///
/// Shape expressions can be combined and composed using logical operators,
/// and can reference other declarations by label. A [`ShapeExpr::ShapeRef`]
/// is a weak reference: it names a declaration but confers no ownership and
/// must resolve against the enclosing [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeExpr {
    /// Conjunction of shape expressions (AND).
    ShapeAnd(Vec<ShapeExpr>),

    /// Disjunction of shape expressions (OR).
    ShapeOr(Vec<ShapeExpr>),

    /// Negation of a shape expression (NOT).
    ShapeNot(Box<ShapeExpr>),

    /// Node constraint - validates properties of the focus node itself.
    NodeConstraint(NodeConstraint),

    /// Shape with a triple expression - validates the focus node's triples.
    Shape(Shape),

    /// Weak reference to another declaration by label.
    ShapeRef(ShapeLabel),
}

impl ShapeExpr {
    /// Returns true if this is a shape reference.
    pub fn is_ref(&self) -> bool {
        matches!(self, Self::ShapeRef(_))
    }

    /// Returns the shape label if this is a reference.
    pub fn as_ref_label(&self) -> Option<&ShapeLabel> {
        match self {
            Self::ShapeRef(label) => Some(label),
            _ => None,
        }
    }

    /// Collects all weak references in this expression (recursive).
    pub fn collect_refs(&self) -> Vec<&ShapeLabel> {
        let mut refs = Vec::new();
        self.collect_refs_impl(&mut refs);
        refs
    }

    fn collect_refs_impl<'a>(&'a self, refs: &mut Vec<&'a ShapeLabel>) {
        match self {
            Self::ShapeAnd(exprs) | Self::ShapeOr(exprs) => {
                for expr in exprs {
                    expr.collect_refs_impl(refs);
                }
            }
            Self::ShapeNot(expr) => expr.collect_refs_impl(refs),
            Self::ShapeRef(label) => refs.push(label),
            Self::Shape(shape) => {
                if let Some(expression) = &shape.expression {
                    expression.collect_refs_impl(refs);
                }
            }
            Self::NodeConstraint(_) => {}
        }
    }
}

/// Shape with a triple expression.
///
/// Validates triples where the focus node is the subject (or object, for
/// inverse constraints), matching against the contained triple expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    /// Whether this is a closed shape (no extra properties allowed).
    pub closed: bool,

    /// Properties exempt from the closedness check.
    pub extra: Vec<NamedNode>,

    /// Triple expression that must be satisfied, if any.
    ///
    /// A shape without an expression is permissive: every node satisfies it.
    pub expression: Option<TripleExpr>,

    /// Annotations for this shape.
    pub annotations: Vec<Annotation>,
}

impl Shape {
    /// Creates a new empty (permissive) shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shape around a triple expression.
    pub fn with_expression(expression: TripleExpr) -> Self {
        Self {
            expression: Some(expression),
            ..Self::default()
        }
    }

    /// Returns true if this shape constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.expression.is_none() && !self.closed
    }
}

/// Triple expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TripleExpr {
    /// A single predicate/value constraint with cardinality.
    TripleConstraint(TripleConstraint),

    /// Ordered group; every member must be satisfied.
    EachOf(Vec<TripleExpr>),

    /// Choice group; exactly one member must be satisfied.
    OneOf(Vec<TripleExpr>),
}

impl TripleExpr {
    /// Groups triple expressions: a single expression stays bare, several
    /// become an [`TripleExpr::EachOf`].
    pub fn each_of(mut exprs: Vec<TripleExpr>) -> Option<TripleExpr> {
        match exprs.len() {
            0 => None,
            1 => exprs.pop(),
            _ => Some(Self::EachOf(exprs)),
        }
    }

    fn collect_refs_impl<'a>(&'a self, refs: &mut Vec<&'a ShapeLabel>) {
        match self {
            Self::TripleConstraint(tc) => {
                if let Some(value_expr) = &tc.value_expr {
                    value_expr.collect_refs_impl(refs);
                }
            }
            Self::EachOf(exprs) | Self::OneOf(exprs) => {
                for expr in exprs {
                    expr.collect_refs_impl(refs);
                }
            }
        }
    }
}

/// Constraint on a triple pattern.
///
/// Specifies a predicate and optional value expression that values must match,
/// along with cardinality constraints (min/max occurrences).
#[derive(Debug, Clone, PartialEq)]
pub struct TripleConstraint {
    /// Predicate IRI for this constraint.
    pub predicate: NamedNode,

    /// Whether this constraint is inverse (focus node is object).
    pub inverse: bool,

    /// Optional shape expression that values must satisfy.
    pub value_expr: Option<Box<ShapeExpr>>,

    /// Cardinality constraint (min/max occurrences).
    pub cardinality: Cardinality,

    /// Annotations for this constraint.
    pub annotations: Vec<Annotation>,
}

impl TripleConstraint {
    /// Creates a new triple constraint with the given predicate.
    pub fn new(predicate: NamedNode) -> Self {
        Self {
            predicate,
            inverse: false,
            value_expr: None,
            cardinality: Cardinality::default(),
            annotations: Vec::new(),
        }
    }

    /// Sets the value expression for this constraint.
    pub fn with_value_expr(mut self, value_expr: ShapeExpr) -> Self {
        self.value_expr = Some(Box::new(value_expr));
        self
    }

    /// Sets the cardinality for this constraint.
    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Sets whether this constraint is inverse.
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }
}

/// Cardinality constraint (min/max occurrences).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    /// Minimum number of occurrences.
    pub min: u32,

    /// Maximum number of occurrences (None = unbounded).
    pub max: Option<u32>,
}

impl Cardinality {
    /// Creates a cardinality constraint with min and max.
    pub fn new(min: u32, max: Option<u32>) -> Result<Self, SchemaError> {
        if let Some(max_val) = max {
            if max_val < min {
                return Err(SchemaError::invalid_cardinality(min, max_val));
            }
        }
        Ok(Self { min, max })
    }

    /// Creates a cardinality constraint for exactly n occurrences.
    pub fn exactly(n: u32) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    /// Creates a cardinality constraint for 0 or 1 occurrence.
    pub fn optional() -> Self {
        Self {
            min: 0,
            max: Some(1),
        }
    }

    /// Creates a cardinality constraint for 0 or more occurrences (*).
    pub fn zero_or_more() -> Self {
        Self { min: 0, max: None }
    }

    /// Creates a cardinality constraint for 1 or more occurrences (+).
    pub fn one_or_more() -> Self {
        Self { min: 1, max: None }
    }

    /// Returns true if this cardinality allows the given count.
    pub fn allows(&self, count: u32) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    /// Returns true if this is the default cardinality (exactly 1).
    pub fn is_default(&self) -> bool {
        self.min == 1 && self.max == Some(1)
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::exactly(1)
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (0, None) => write!(f, "*"),
            (1, None) => write!(f, "+"),
            (0, Some(1)) => write!(f, "?"),
            (min, None) => write!(f, "{{{min},}}"),
            (min, Some(max)) if min == max => write!(f, "{{{min}}}"),
            (min, Some(max)) => write!(f, "{{{min},{max}}}"),
        }
    }
}

/// Node constraint - validates properties of nodes.
///
/// Can constrain node kind, datatype, string facets (length, pattern),
/// numeric facets (min/max bounds), and value sets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeConstraint {
    /// Required node kind (IRI, blank node, literal, non-literal).
    pub node_kind: Option<NodeKind>,

    /// Required datatype for literals.
    pub datatype: Option<NamedNode>,

    /// String facets (length, pattern).
    pub string_facets: Vec<StringFacet>,

    /// Numeric facets (min/max bounds).
    pub numeric_facets: Vec<NumericFacet>,

    /// Value set constraint.
    pub values: Vec<ValueSetValue>,
}

impl NodeConstraint {
    /// Creates a new empty node constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node constraint with the given node kind.
    pub fn with_node_kind(node_kind: NodeKind) -> Self {
        Self {
            node_kind: Some(node_kind),
            ..Self::default()
        }
    }

    /// Creates a node constraint with the given datatype.
    pub fn with_datatype(datatype: NamedNode) -> Self {
        Self {
            datatype: Some(datatype),
            ..Self::default()
        }
    }

    /// Returns true if this constraint is empty.
    pub fn is_empty(&self) -> bool {
        self.node_kind.is_none()
            && self.datatype.is_none()
            && self.string_facets.is_empty()
            && self.numeric_facets.is_empty()
            && self.values.is_empty()
    }
}

/// Node kind constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// IRI node.
    Iri,
    /// Blank node.
    BNode,
    /// Literal value.
    Literal,
    /// Non-literal (IRI or blank node).
    NonLiteral,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri => write!(f, "IRI"),
            Self::BNode => write!(f, "BNODE"),
            Self::Literal => write!(f, "LITERAL"),
            Self::NonLiteral => write!(f, "NONLITERAL"),
        }
    }
}

/// String facet constraint (length, pattern).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFacet {
    /// Minimum string length.
    MinLength(u32),
    /// Maximum string length.
    MaxLength(u32),
    /// Regular expression pattern.
    Pattern {
        /// Regex pattern.
        pattern: String,
        /// Optional regex flags.
        flags: Option<String>,
    },
}

/// Numeric facet constraint (min/max bounds).
///
/// The bound is kept as the original typed literal; it is only constructed
/// for literals whose datatype is numeric.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericFacet {
    /// Minimum inclusive value.
    MinInclusive(Literal),
    /// Minimum exclusive value.
    MinExclusive(Literal),
    /// Maximum inclusive value.
    MaxInclusive(Literal),
    /// Maximum exclusive value.
    MaxExclusive(Literal),
}

/// Value in a value set constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueSetValue {
    /// Exact RDF term (IRI or literal).
    ObjectValue(Term),

    /// Any literal with the given language tag.
    Language(String),
}

impl ValueSetValue {
    /// Creates an object value from a term.
    pub fn object(term: impl Into<Term>) -> Self {
        Self::ObjectValue(term.into())
    }

    /// Creates a language-tag value.
    pub fn language(tag: impl Into<String>) -> Self {
        Self::Language(tag.into())
    }
}

/// Annotation on shapes or triple constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Annotation predicate.
    pub predicate: NamedNode,
    /// Annotation value.
    pub object: Term,
}

impl Annotation {
    /// Creates a new annotation.
    pub fn new(predicate: impl Into<NamedNode>, object: impl Into<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A single shape declaration: a label bound to a shape expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDecl {
    /// Declaration label.
    pub label: ShapeLabel,
    /// Declared shape expression.
    pub expr: ShapeExpr,
}

/// Collection of shape declarations (schema in ShEx terminology).
///
/// Labels are unique and insertion order is preserved, so two identical
/// conversion runs produce structurally identical schemas.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    decls: Vec<ShapeDecl>,
    index: FxHashMap<ShapeLabel, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, replacing any previous one with the same label.
    pub fn insert(&mut self, label: ShapeLabel, expr: ShapeExpr) {
        if let Some(&i) = self.index.get(&label) {
            self.decls[i].expr = expr;
        } else {
            self.index.insert(label.clone(), self.decls.len());
            self.decls.push(ShapeDecl { label, expr });
        }
    }

    /// Gets a declared expression by label.
    pub fn get(&self, label: &ShapeLabel) -> Option<&ShapeExpr> {
        self.index.get(label).map(|&i| &self.decls[i].expr)
    }

    /// Returns true if the label is declared.
    pub fn contains(&self, label: &ShapeLabel) -> bool {
        self.index.contains_key(label)
    }

    /// Returns an iterator over all labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &ShapeLabel> {
        self.decls.iter().map(|d| &d.label)
    }

    /// Returns the declarations in insertion order.
    pub fn decls(&self) -> &[ShapeDecl] {
        &self.decls
    }

    /// Returns mutable access to the declarations.
    pub fn decls_mut(&mut self) -> &mut [ShapeDecl] {
        &mut self.decls
    }

    /// Returns true if the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Returns the labels of all dangling weak references in the schema.
    pub fn dangling_refs(&self) -> Vec<&ShapeLabel> {
        let mut dangling = Vec::new();
        for decl in &self.decls {
            for label in decl.expr.collect_refs() {
                if !self.index.contains_key(label) {
                    dangling.push(label);
                }
            }
        }
        dangling
    }
}
