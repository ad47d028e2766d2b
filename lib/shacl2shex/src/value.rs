//! Value expression translation.
//!
//! Maps the constraint facets of a shape term to a ShEx shape expression.
//! Rules are tried in order and the first that applies wins:
//!
//! 1. `sh:not` - negation of the recursively translated child
//! 2. `sh:or` - disjunction over the resolvable children
//! 3. `sh:and` - conjunction over the resolvable children
//! 4. `sh:xone` - exact exclusive-or encoding (see [`crate::logic`])
//! 5. `sh:class` targeted by a declared shape - weak reference to that shape
//! 6. `sh:class` otherwise - synthesized `rdf:type` triple constraint
//! 7. `sh:node` - reference, inlining anonymous shapes under their own label
//! 8. scalar facets - a node constraint

use oxrdf::{vocab::rdf, Literal, NamedNode, Term};
use regex::Regex;
use shacl_ast::{Facets, ShapeId};
use shex_ast::{
    NodeConstraint, NodeKind, NumericFacet, Shape, ShapeExpr, StringFacet, TripleConstraint,
    TripleExpr, ValueSetValue,
};

use crate::context::{label_of, Context};
use crate::convert;
use crate::logic;

/// Translates the facets of a node- or property-level shape term into a value
/// expression. Returns `None` if nothing is translatable.
pub(crate) fn value_expr(cx: &mut Context<'_>, term: &Term, facets: &Facets) -> Option<ShapeExpr> {
    logical_expr(cx, term, facets).or_else(|| non_logical_expr(cx, term, facets))
}

/// Rules 1-4: logical operators.
pub(crate) fn logical_expr(
    cx: &mut Context<'_>,
    term: &Term,
    facets: &Facets,
) -> Option<ShapeExpr> {
    if !facets.not.is_empty() {
        let mut negations = Vec::new();
        for child in &facets.not {
            match child_expr(cx, child) {
                Some(expr) => negations.push(logic::negate(expr)),
                None => cx.warn(Some(term), format!("Dropped unresolvable sh:not child {child}")),
            }
        }
        if let Some(expr) = logic::conjoin(negations) {
            return Some(expr);
        }
    }

    if let Some(children) = &facets.or {
        if let Some(expr) = logic::disjoin(resolve_children(cx, term, "sh:or", children)) {
            return Some(expr);
        }
    }

    if let Some(children) = &facets.and {
        if let Some(expr) = logic::conjoin(resolve_children(cx, term, "sh:and", children)) {
            return Some(expr);
        }
    }

    if let Some(children) = &facets.xone {
        let branches = resolve_children(cx, term, "sh:xone", children);
        if branches.len() >= 2 {
            return Some(logic::exactly_one(branches));
        }
        cx.warn(
            Some(term),
            "sh:xone needs at least two resolvable branches; constraint dropped",
        );
    }

    None
}

/// Rules 5-8: class references, shape references, scalar facets.
pub(crate) fn non_logical_expr(
    cx: &mut Context<'_>,
    term: &Term,
    facets: &Facets,
) -> Option<ShapeExpr> {
    if !facets.classes.is_empty() {
        return Some(class_expr(cx, term, facets));
    }

    if !facets.node.is_empty() {
        let mut refs = Vec::new();
        for id in &facets.node {
            match node_ref_label(cx, id) {
                Some(label) => refs.push(ShapeExpr::ShapeRef(label)),
                None => cx.warn(Some(term), format!("Dropped unresolvable sh:node reference {id}")),
            }
        }
        if let Some(expr) = logic::conjoin(refs) {
            return Some(expr);
        }
    }

    node_constraint_expr(cx, term, facets)
}

/// Rules 5 and 6: `sh:class`.
///
/// A single class that some declared shape targets becomes a reference to
/// that shape; anything else becomes a shape requiring a matching `rdf:type`
/// value. A node kind facet joins in by conjunction either way.
fn class_expr(cx: &mut Context<'_>, term: &Term, facets: &Facets) -> ShapeExpr {
    let class_part = match facets.classes.as_slice() {
        [class] => match cx.shape_for_class(class) {
            Some(shape_id) => ShapeExpr::ShapeRef(label_of(shape_id)),
            None => type_check_expr(&facets.classes),
        },
        _ => type_check_expr(&facets.classes),
    };

    match facets.node_kind {
        Some(kind) => {
            let constraint =
                ShapeExpr::NodeConstraint(NodeConstraint::with_node_kind(map_node_kind(
                    cx,
                    term,
                    kind,
                )));
            ShapeExpr::ShapeAnd(vec![constraint, class_part])
        }
        None => class_part,
    }
}

/// Synthesizes `Shape { rdf:type [classes] }`.
fn type_check_expr(classes: &[NamedNode]) -> ShapeExpr {
    let values = classes
        .iter()
        .map(|class| ValueSetValue::object(class.clone()))
        .collect();
    let constraint = NodeConstraint {
        values,
        ..NodeConstraint::default()
    };
    let tc = TripleConstraint::new(rdf::TYPE.into_owned())
        .with_value_expr(ShapeExpr::NodeConstraint(constraint));
    ShapeExpr::Shape(Shape::with_expression(TripleExpr::TripleConstraint(tc)))
}

/// Rule 7: resolves a `sh:node` reference to a declaration label, translating
/// and declaring anonymous shapes on first sight.
fn node_ref_label(cx: &mut Context<'_>, id: &ShapeId) -> Option<shex_ast::ShapeLabel> {
    if cx.shapes.is_declared(id) || cx.visited.contains(id) {
        return Some(label_of(id));
    }

    let term = id.to_term();
    let facets = match Facets::of(cx.graph, &term) {
        Ok(facets) => facets,
        Err(e) => {
            cx.warn(Some(&term), format!("Unreadable shape reference: {e}"));
            return None;
        }
    };
    if !facets.is_constraining() {
        return None;
    }

    cx.visited.insert(id.clone());
    let expr = convert::shape_expr(cx, &term, &facets)?;
    let label = label_of(id);
    cx.schema.insert(label.clone(), expr);
    Some(label)
}

/// Translates one child of a logical operator.
///
/// Children that are themselves declared shapes stay weak references; inline
/// anonymous children are translated in place. Re-entrant references resolve
/// to a label, which keeps translation of cyclic graphs finite.
fn child_expr(cx: &mut Context<'_>, term: &Term) -> Option<ShapeExpr> {
    let id = ShapeId::from_term(term)?;

    if cx.shapes.is_declared(&id) || cx.visited.contains(&id) {
        return Some(ShapeExpr::ShapeRef(label_of(&id)));
    }

    let facets = match Facets::of(cx.graph, term) {
        Ok(facets) => facets,
        Err(e) => {
            cx.warn(Some(term), format!("Unreadable shape: {e}"));
            return None;
        }
    };
    if !facets.is_constraining() {
        return None;
    }

    cx.visited.insert(id.clone());
    let expr = convert::shape_expr(cx, term, &facets);
    cx.visited.remove(&id);
    expr
}

fn resolve_children(
    cx: &mut Context<'_>,
    term: &Term,
    operator: &str,
    children: &[Term],
) -> Vec<ShapeExpr> {
    let mut exprs = Vec::new();
    for child in children {
        match child_expr(cx, child) {
            Some(expr) => exprs.push(expr),
            None => cx.warn(
                Some(term),
                format!("Dropped unresolvable {operator} child {child}"),
            ),
        }
    }
    exprs
}

/// Rule 8: scalar facets into a node constraint.
pub(crate) fn node_constraint_expr(
    cx: &mut Context<'_>,
    term: &Term,
    facets: &Facets,
) -> Option<ShapeExpr> {
    let mut constraint = NodeConstraint::new();

    if let Some(kind) = facets.node_kind {
        constraint.node_kind = Some(map_node_kind(cx, term, kind));
    }
    if let Some(datatype) = &facets.datatype {
        constraint.datatype = Some(datatype.clone());
    }

    if let Some(values) = &facets.in_values {
        match shared_literal_datatype(values) {
            // Every listed literal shares one datatype: collapse the list to
            // a bare datatype facet. The explicit enumeration is lost.
            Some(datatype) if constraint.datatype.is_none() => {
                constraint.datatype = Some(datatype);
            }
            _ => {
                for value in values {
                    match value {
                        Term::NamedNode(_) | Term::Literal(_) => {
                            constraint.values.push(ValueSetValue::object(value.clone()));
                        }
                        Term::BlankNode(_) => cx.warn(
                            Some(term),
                            "Blank node in sh:in cannot appear in a ShEx value set; dropped",
                        ),
                    }
                }
            }
        }
    }

    for value in &facets.has_value {
        match value {
            Term::NamedNode(_) | Term::Literal(_) => {
                constraint.values.push(ValueSetValue::object(value.clone()));
            }
            Term::BlankNode(_) => cx.warn(
                Some(term),
                "Blank node in sh:hasValue cannot appear in a ShEx value set; dropped",
            ),
        }
    }

    for tag in &facets.language_in {
        constraint.values.push(ValueSetValue::language(tag.clone()));
    }

    if let Some(pattern) = &facets.pattern {
        if Regex::new(pattern).is_err() {
            cx.warn(
                Some(term),
                format!("sh:pattern {pattern:?} is not a valid regular expression; kept verbatim"),
            );
        }
        constraint.string_facets.push(StringFacet::Pattern {
            pattern: pattern.clone(),
            flags: facets.flags.clone(),
        });
    }
    if let Some(n) = facets.min_length {
        constraint.string_facets.push(StringFacet::MinLength(n));
    }
    if let Some(n) = facets.max_length {
        constraint.string_facets.push(StringFacet::MaxLength(n));
    }

    let bounds: [(&Option<Literal>, fn(Literal) -> NumericFacet, &str); 4] = [
        (&facets.min_inclusive, NumericFacet::MinInclusive, "sh:minInclusive"),
        (&facets.max_inclusive, NumericFacet::MaxInclusive, "sh:maxInclusive"),
        (&facets.min_exclusive, NumericFacet::MinExclusive, "sh:minExclusive"),
        (&facets.max_exclusive, NumericFacet::MaxExclusive, "sh:maxExclusive"),
    ];
    for (literal, make_facet, name) in bounds {
        if let Some(literal) = literal {
            if is_numeric_literal(literal) {
                constraint.numeric_facets.push(make_facet(literal.clone()));
            } else {
                cx.warn(
                    Some(term),
                    format!("{name} bound {literal} is not a numeric literal; dropped"),
                );
            }
        }
    }

    if constraint.is_empty() {
        None
    } else {
        Some(ShapeExpr::NodeConstraint(constraint))
    }
}

/// Maps a SHACL node kind onto ShEx's four kinds.
///
/// `sh:BlankNodeOrLiteral` and `sh:IRIOrLiteral` have no ShEx counterpart and
/// approximate to `LITERAL`, with a warning recording the loosening.
pub(crate) fn map_node_kind(
    cx: &mut Context<'_>,
    term: &Term,
    kind: shacl_ast::NodeKind,
) -> NodeKind {
    match kind {
        shacl_ast::NodeKind::Iri => NodeKind::Iri,
        shacl_ast::NodeKind::BlankNode => NodeKind::BNode,
        shacl_ast::NodeKind::Literal => NodeKind::Literal,
        shacl_ast::NodeKind::BlankNodeOrIri => NodeKind::NonLiteral,
        shacl_ast::NodeKind::BlankNodeOrLiteral | shacl_ast::NodeKind::IriOrLiteral => {
            cx.warn(
                Some(term),
                "Node kind has no ShEx equivalent; approximated as LITERAL",
            );
            NodeKind::Literal
        }
    }
}

/// Returns the datatype shared by every element, when all elements are
/// literals of one datatype.
fn shared_literal_datatype(values: &[Term]) -> Option<NamedNode> {
    let Some(Term::Literal(first)) = values.first() else {
        return None;
    };
    let datatype = first.datatype();
    values
        .iter()
        .all(|v| matches!(v, Term::Literal(lit) if lit.datatype() == datatype))
        .then(|| datatype.into_owned())
}

/// Returns true if the literal has a numeric datatype and a parseable value.
fn is_numeric_literal(literal: &Literal) -> bool {
    use oxrdf::vocab::xsd;
    use oxsdatatypes::{Decimal, Double, Float, Integer};

    let datatype = literal.datatype();
    let value = literal.value();
    if datatype == xsd::DECIMAL {
        value.parse::<Decimal>().is_ok()
    } else if datatype == xsd::DOUBLE {
        value.parse::<Double>().is_ok()
    } else if datatype == xsd::FLOAT {
        value.parse::<Float>().is_ok()
    } else if [
        xsd::INTEGER,
        xsd::LONG,
        xsd::INT,
        xsd::SHORT,
        xsd::BYTE,
        xsd::NON_NEGATIVE_INTEGER,
        xsd::NON_POSITIVE_INTEGER,
        xsd::POSITIVE_INTEGER,
        xsd::NEGATIVE_INTEGER,
        xsd::UNSIGNED_LONG,
        xsd::UNSIGNED_INT,
        xsd::UNSIGNED_SHORT,
        xsd::UNSIGNED_BYTE,
    ]
    .contains(&datatype)
    {
        value.parse::<Integer>().is_ok()
    } else {
        false
    }
}
