//! Consistency pass over the produced schema.
//!
//! Translation can leave weak references to shapes that never got a
//! declaration (undeclared `sh:node` targets, logical children that failed
//! to translate, re-entrant references into shapes that were later skipped).
//! This pass rewrites every declaration so that each remaining reference
//! resolves, neutralizing dangling ones according to their position:
//!
//! - a dangling branch of an AND/OR is dropped (the whole node is replaced
//!   by a permissive shape if no branch survives);
//! - a NOT over a dangling reference is replaced as a whole, since dropping
//!   only the inner reference would invert satisfiability;
//! - a dangling triple-constraint value leaves the constraint in place with
//!   an unconstrained value;
//! - a dangling declaration body becomes an empty permissive shape.

use rustc_hash::FxHashSet;
use shex_ast::{Schema, Shape, ShapeExpr, ShapeLabel, TripleExpr};

/// Restores the no-dangling-references invariant on `schema`.
pub(crate) fn prune(schema: &mut Schema) {
    let declared: FxHashSet<ShapeLabel> = schema.labels().cloned().collect();
    for decl in schema.decls_mut() {
        if !prune_expr(&mut decl.expr, &declared) {
            decl.expr = ShapeExpr::Shape(Shape::new());
        }
    }
}

/// Rewrites `expr` in place; returns false if the expression itself is
/// dangling and must be neutralized by its parent.
fn prune_expr(expr: &mut ShapeExpr, declared: &FxHashSet<ShapeLabel>) -> bool {
    match expr {
        ShapeExpr::ShapeRef(label) => declared.contains(label),
        ShapeExpr::ShapeAnd(branches) | ShapeExpr::ShapeOr(branches) => {
            branches.retain_mut(|branch| prune_expr(branch, declared));
            !branches.is_empty()
        }
        ShapeExpr::ShapeNot(inner) => prune_expr(inner, declared),
        ShapeExpr::NodeConstraint(_) => true,
        ShapeExpr::Shape(shape) => {
            if let Some(expression) = &mut shape.expression {
                prune_triple_expr(expression, declared);
            }
            true
        }
    }
}

fn prune_triple_expr(expr: &mut TripleExpr, declared: &FxHashSet<ShapeLabel>) {
    match expr {
        TripleExpr::TripleConstraint(tc) => {
            if let Some(value_expr) = &mut tc.value_expr {
                if !prune_expr(value_expr, declared) {
                    tc.value_expr = None;
                }
            }
        }
        TripleExpr::EachOf(exprs) | TripleExpr::OneOf(exprs) => {
            for expr in exprs {
                prune_triple_expr(expr, declared);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;
    use shex_ast::{NodeConstraint, NodeKind, TripleConstraint};

    fn label(iri: &str) -> ShapeLabel {
        ShapeLabel::from(NamedNode::new(iri).unwrap())
    }

    fn nc() -> ShapeExpr {
        ShapeExpr::NodeConstraint(NodeConstraint::with_node_kind(NodeKind::Iri))
    }

    #[test]
    fn test_dangling_declaration_body_becomes_permissive_shape() {
        let mut schema = Schema::new();
        schema.insert(
            label("http://example.org/A"),
            ShapeExpr::ShapeRef(label("http://example.org/Missing")),
        );
        prune(&mut schema);
        assert_eq!(
            schema.get(&label("http://example.org/A")),
            Some(&ShapeExpr::Shape(Shape::new()))
        );
    }

    #[test]
    fn test_resolvable_ref_is_kept() {
        let mut schema = Schema::new();
        schema.insert(label("http://example.org/B"), nc());
        schema.insert(
            label("http://example.org/A"),
            ShapeExpr::ShapeRef(label("http://example.org/B")),
        );
        prune(&mut schema);
        assert_eq!(
            schema.get(&label("http://example.org/A")),
            Some(&ShapeExpr::ShapeRef(label("http://example.org/B")))
        );
    }

    #[test]
    fn test_dangling_or_branch_is_dropped() {
        let mut schema = Schema::new();
        schema.insert(
            label("http://example.org/A"),
            ShapeExpr::ShapeOr(vec![
                nc(),
                ShapeExpr::ShapeRef(label("http://example.org/Missing")),
            ]),
        );
        prune(&mut schema);
        assert_eq!(
            schema.get(&label("http://example.org/A")),
            Some(&ShapeExpr::ShapeOr(vec![nc()]))
        );
    }

    #[test]
    fn test_not_over_dangling_ref_is_replaced_whole() {
        let mut schema = Schema::new();
        schema.insert(
            label("http://example.org/A"),
            ShapeExpr::ShapeNot(Box::new(ShapeExpr::ShapeRef(label(
                "http://example.org/Missing",
            )))),
        );
        prune(&mut schema);
        assert_eq!(
            schema.get(&label("http://example.org/A")),
            Some(&ShapeExpr::Shape(Shape::new()))
        );
    }

    #[test]
    fn test_dangling_value_expr_is_cleared_but_constraint_kept() {
        let mut schema = Schema::new();
        let tc = TripleConstraint::new(NamedNode::new("http://example.org/p").unwrap())
            .with_value_expr(ShapeExpr::ShapeRef(label("http://example.org/Missing")));
        schema.insert(
            label("http://example.org/A"),
            ShapeExpr::Shape(Shape::with_expression(TripleExpr::TripleConstraint(tc))),
        );
        prune(&mut schema);

        let Some(ShapeExpr::Shape(shape)) = schema.get(&label("http://example.org/A")) else {
            panic!("expected a shape");
        };
        let Some(TripleExpr::TripleConstraint(tc)) = &shape.expression else {
            panic!("expected a triple constraint");
        };
        assert!(tc.value_expr.is_none());
    }

    #[test]
    fn test_nested_and_inside_not_collapses() {
        let mut schema = Schema::new();
        schema.insert(
            label("http://example.org/A"),
            ShapeExpr::ShapeNot(Box::new(ShapeExpr::ShapeAnd(vec![ShapeExpr::ShapeRef(
                label("http://example.org/Missing"),
            )]))),
        );
        prune(&mut schema);
        assert_eq!(
            schema.get(&label("http://example.org/A")),
            Some(&ShapeExpr::Shape(Shape::new()))
        );
    }
}
