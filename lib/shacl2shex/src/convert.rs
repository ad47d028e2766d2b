//! Shape assembly and the public conversion entry point.

use oxrdf::{vocab::rdfs, vocab::xsd, Graph, Literal, Term};
use shacl_ast::{vocab, Facets, ShapeId, ShapesGraph};
use shex_ast::{
    Annotation, Cardinality, Schema, Shape, ShapeExpr, TripleConstraint, TripleExpr,
};

use crate::context::{label_of, Context};
use crate::error::ConversionError;
use crate::prune;
use crate::value;
use crate::Warning;

/// Result of a successful conversion: the schema plus everything that was
/// degraded or dropped along the way.
#[derive(Debug)]
pub struct Conversion {
    /// The produced ShEx schema. Every weak reference in it resolves.
    pub schema: Schema,
    /// Diagnostics accumulated during conversion, in processing order.
    pub warnings: Vec<Warning>,
}

/// Converts a SHACL shapes graph into a ShEx schema.
///
/// One declaration is produced per discovered SHACL shape, in graph order.
/// Constructs without a ShEx counterpart are degraded to annotated
/// best-effort expressions or skipped; each such decision is recorded in
/// [`Conversion::warnings`]. Only a structurally unusable shapes graph makes
/// the whole call fail.
pub fn shacl_to_shex(graph: &Graph) -> Result<Conversion, ConversionError> {
    let shapes = ShapesGraph::from_graph(graph)?;
    let mut cx = Context::new(graph, &shapes);

    for node_shape in shapes.node_shapes() {
        declare_node_shape(&mut cx, node_shape.id());
    }
    for property_shape in shapes.property_shapes() {
        declare_property_shape(&mut cx, property_shape);
    }

    let Context {
        mut schema,
        warnings,
        ..
    } = cx;
    prune::prune(&mut schema);
    Ok(Conversion { schema, warnings })
}

/// Declares one discovered node shape.
fn declare_node_shape(cx: &mut Context<'_>, id: &ShapeId) {
    if !cx.visited.insert(id.clone()) {
        return;
    }
    let term = id.to_term();
    let facets = match Facets::of(cx.graph, &term) {
        Ok(facets) => facets,
        Err(e) => {
            cx.warn(Some(&term), format!("Skipped shape: {e}"));
            return;
        }
    };

    match shape_expr(cx, &term, &facets) {
        Some(expr) => cx.schema.insert(label_of(id), expr),
        None => cx.warn(
            Some(&term),
            "Shape has no translatable constraints; no declaration emitted",
        ),
    }
}

/// Declares one standalone property shape as a shape around its single
/// triple constraint.
fn declare_property_shape(cx: &mut Context<'_>, id: &ShapeId) {
    if !cx.visited.insert(id.clone()) {
        return;
    }
    if let Some(expression) = property_triple_expr(cx, id) {
        cx.schema.insert(
            label_of(id),
            ShapeExpr::Shape(Shape::with_expression(expression)),
        );
    }
}

/// Assembles the shape expression for a node shape term.
///
/// Property shapes become triple constraints grouped under one `Shape`; a
/// node-level node kind joins by conjunction; a logical operator joins the
/// result by an outer conjunction. Returns `None` when nothing is
/// translatable.
pub(crate) fn shape_expr(cx: &mut Context<'_>, term: &Term, facets: &Facets) -> Option<ShapeExpr> {
    if facets.deactivated {
        // Still declared, but contributing no active constraints.
        let mut shape = Shape::new();
        shape.annotations.push(Annotation::new(
            rdfs::COMMENT,
            Literal::new_simple_literal("deactivated in the source shapes graph"),
        ));
        return Some(ShapeExpr::Shape(shape));
    }

    let mut triple_exprs = Vec::new();
    for property in &facets.properties {
        if let Some(expression) = property_triple_expr(cx, property) {
            triple_exprs.push(expression);
        }
    }

    let expression = TripleExpr::each_of(triple_exprs);
    let props_expr = if expression.is_some() || facets.closed {
        let mut shape = Shape {
            closed: facets.closed,
            extra: facets.ignored_properties.clone(),
            expression,
            annotations: Vec::new(),
        };
        if let Some(name) = &facets.name {
            shape.annotations.push(Annotation::new(
                rdfs::LABEL,
                Literal::new_simple_literal(name.clone()),
            ));
        }
        if let Some(description) = &facets.description {
            shape.annotations.push(Annotation::new(
                rdfs::COMMENT,
                Literal::new_simple_literal(description.clone()),
            ));
        }
        for constraint in &facets.sparql {
            shape.annotations.push(Annotation::new(vocab::SPARQL, constraint.clone()));
        }
        Some(ShapeExpr::Shape(shape))
    } else {
        None
    };
    if !facets.sparql.is_empty() {
        let message = if props_expr.is_some() {
            "SPARQL constraint preserved as an opaque annotation; it is not translated"
        } else {
            "SPARQL constraint dropped; no shape expression to carry it"
        };
        cx.warn(Some(term), message);
    }

    let node_expr = if props_expr.is_some() {
        facets.node_kind.map(|kind| {
            ShapeExpr::NodeConstraint(shex_ast::NodeConstraint::with_node_kind(
                value::map_node_kind(cx, term, kind),
            ))
        })
    } else {
        value::non_logical_expr(cx, term, facets)
    };

    let base = match (node_expr, props_expr) {
        (Some(node), Some(props)) => Some(ShapeExpr::ShapeAnd(vec![node, props])),
        (Some(node), None) => Some(node),
        (None, Some(props)) => Some(props),
        (None, None) => None,
    };

    let logical = value::logical_expr(cx, term, facets);

    match (base, logical) {
        (Some(base), Some(logical)) => Some(ShapeExpr::ShapeAnd(vec![base, logical])),
        (Some(base), None) => Some(base),
        (None, Some(logical)) => Some(logical),
        (None, None) => None,
    }
}

/// Translates one property shape into a triple constraint.
///
/// Unrepresentable paths and property shapes with nothing translatable are
/// skipped with a warning; the enclosing shape keeps its other properties.
fn property_triple_expr(cx: &mut Context<'_>, id: &ShapeId) -> Option<TripleExpr> {
    let term = id.to_term();
    let facets = match Facets::of(cx.graph, &term) {
        Ok(facets) => facets,
        Err(e) => {
            cx.warn(Some(&term), format!("Skipped property shape: {e}"));
            return None;
        }
    };
    if facets.deactivated {
        return None;
    }

    let Some(path) = &facets.path else {
        cx.warn(Some(&term), "Property shape without sh:path; skipped");
        return None;
    };
    let translated = match crate::paths::translate(path) {
        Ok(translated) => translated,
        Err(e) => {
            cx.warn(Some(&term), format!("Skipped property: {e}"));
            return None;
        }
    };

    let min = facets.min_count.unwrap_or(0);
    let cardinality = match Cardinality::new(min, facets.max_count) {
        Ok(cardinality) => cardinality,
        Err(e) => {
            cx.warn(Some(&term), format!("Skipped property: {e}"));
            return None;
        }
    };

    let value_expr = value::value_expr(cx, &term, &facets);

    let mut annotations = translated.annotations;
    let before_degraded = annotations.len();
    degraded_annotations(cx, &term, &facets, &mut annotations);
    let has_degraded = annotations.len() > before_degraded;

    if value_expr.is_none()
        && !has_degraded
        && facets.min_count.is_none()
        && facets.max_count.is_none()
        && !facets.is_constraining()
    {
        cx.warn(
            Some(&term),
            "Property shape constrains nothing ShEx can express; skipped",
        );
        return None;
    }

    let value_expr = if translated.repeat {
        // One-level unrolling of a one-or-more path: one hop over the
        // predicate, then either another hop or the original target.
        let inner = TripleConstraint {
            predicate: translated.predicate.clone(),
            inverse: translated.inverse,
            value_expr: value_expr.clone().map(Box::new),
            cardinality,
            annotations: Vec::new(),
        };
        let mut branches = vec![ShapeExpr::Shape(Shape::with_expression(
            TripleExpr::TripleConstraint(inner),
        ))];
        branches.extend(value_expr);
        Some(ShapeExpr::ShapeOr(branches))
    } else {
        value_expr
    };

    let tc = TripleConstraint {
        predicate: translated.predicate,
        inverse: translated.inverse,
        value_expr: value_expr.map(Box::new),
        cardinality,
        annotations,
    };
    Some(TripleExpr::TripleConstraint(tc))
}

/// Carries constraints ShEx cannot express as annotations on the triple
/// constraint, each with a warning: `sh:uniqueLang`, the property pair
/// constraints, qualified value shape bounds, and SPARQL constraints.
fn degraded_annotations(
    cx: &mut Context<'_>,
    term: &Term,
    facets: &Facets,
    annotations: &mut Vec<Annotation>,
) {
    if facets.unique_lang {
        annotations.push(Annotation::new(
            vocab::UNIQUE_LANG,
            Literal::new_typed_literal("true", xsd::BOOLEAN),
        ));
        cx.warn(
            Some(term),
            "sh:uniqueLang has no ShEx equivalent; recorded as an annotation",
        );
    }

    let pairs = [
        (vocab::EQUALS, &facets.equals, "sh:equals"),
        (vocab::DISJOINT, &facets.disjoint, "sh:disjoint"),
        (vocab::LESS_THAN, &facets.less_than, "sh:lessThan"),
        (
            vocab::LESS_THAN_OR_EQUALS,
            &facets.less_than_or_equals,
            "sh:lessThanOrEquals",
        ),
    ];
    for (predicate, properties, name) in pairs {
        for property in properties {
            annotations.push(Annotation::new(predicate, property.clone()));
        }
        if !properties.is_empty() {
            cx.warn(
                Some(term),
                format!("{name} has no ShEx equivalent; recorded as an annotation"),
            );
        }
    }

    if let Some(qualified) = &facets.qualified {
        annotations.push(Annotation::new(
            vocab::QUALIFIED_VALUE_SHAPE,
            qualified.shape.to_term(),
        ));
        for (predicate, count) in [
            (vocab::QUALIFIED_MIN_COUNT, qualified.min_count),
            (vocab::QUALIFIED_MAX_COUNT, qualified.max_count),
        ] {
            if let Some(count) = count {
                annotations.push(Annotation::new(
                    predicate,
                    Literal::new_typed_literal(count.to_string(), xsd::INTEGER),
                ));
            }
        }
        cx.warn(
            Some(term),
            "sh:qualifiedValueShape bounds recorded as annotations only",
        );
    }

    for constraint in &facets.sparql {
        annotations.push(Annotation::new(vocab::SPARQL, constraint.clone()));
        cx.warn(
            Some(term),
            "SPARQL constraint preserved as an opaque annotation; it is not translated",
        );
    }
}
