//! Logical combination of shape expressions.

use shex_ast::ShapeExpr;

/// Combines expressions with AND. A single expression stays bare.
pub(crate) fn conjoin(mut exprs: Vec<ShapeExpr>) -> Option<ShapeExpr> {
    match exprs.len() {
        0 => None,
        1 => exprs.pop(),
        _ => Some(ShapeExpr::ShapeAnd(exprs)),
    }
}

/// Combines expressions with OR. A single expression stays bare.
pub(crate) fn disjoin(mut exprs: Vec<ShapeExpr>) -> Option<ShapeExpr> {
    match exprs.len() {
        0 => None,
        1 => exprs.pop(),
        _ => Some(ShapeExpr::ShapeOr(exprs)),
    }
}

/// Negates an expression.
pub(crate) fn negate(expr: ShapeExpr) -> ShapeExpr {
    ShapeExpr::ShapeNot(Box::new(expr))
}

/// Encodes "exactly one of" over the given branches.
///
/// ShEx has no native exclusive-or operator, but the semantics are expressible
/// exactly: for each branch `Bi`, require `Bi AND NOT (B1 OR ... Bi-1 OR Bi+1
/// ... OR Bn)`, then take the OR over those conjunctions. The result holds iff
/// exactly one branch holds.
///
/// Callers must supply at least two branches.
pub(crate) fn exactly_one(branches: Vec<ShapeExpr>) -> ShapeExpr {
    debug_assert!(branches.len() >= 2);
    let arms = branches
        .iter()
        .enumerate()
        .map(|(i, branch)| {
            let others: Vec<ShapeExpr> = branches
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, other)| other.clone())
                .collect();
            let excluded = disjoin(others).map(negate);
            match excluded {
                Some(excluded) => ShapeExpr::ShapeAnd(vec![branch.clone(), excluded]),
                None => branch.clone(),
            }
        })
        .collect();
    ShapeExpr::ShapeOr(arms)
}
