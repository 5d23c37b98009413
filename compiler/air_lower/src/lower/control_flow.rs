//! Conditionals and loops.
//!
//! Loop bodies go through the placeholder trim (`lower_cons`); `if`
//! branches only do when `LowerOptions::trim_branch_placeholders` is set.

use air_ir::{HmExpr, HmExprKind, LlKind, LlNode, Lowered};

use super::Lowerer;
use crate::LowerError;

/// Builtin whose curried two-argument call is lowered to `for_range`.
const RANGE_BUILTIN: &str = "range";

impl Lowerer<'_> {
    pub(super) fn lower_if(
        &self,
        expr: &HmExpr,
        test: &HmExpr,
        body: &HmExpr,
        orelse: &HmExpr,
    ) -> Result<LlNode, LowerError> {
        let ty = self.type_of(expr)?;
        let test = self.lower_single(test, "If", "test")?;
        let body = self.lower_branch(body)?;
        let orelse = self.lower_branch(orelse)?;
        Ok(LlNode::new(
            LlKind::If {
                test: Box::new(test),
                body: Box::new(body),
                orelse: Box::new(orelse),
            },
            ty,
        ))
    }

    fn lower_branch(&self, branch: &HmExpr) -> Result<Lowered, LowerError> {
        if self.options.trim_branch_placeholders {
            self.lower_cons(branch)
        } else {
            self.lower_expr(branch)
        }
    }

    /// `for target in range(start)(end)` becomes `for_range`; any other
    /// iterable is kept as a generic `for`.
    pub(super) fn lower_for(
        &self,
        expr: &HmExpr,
        target: &HmExpr,
        iter: &HmExpr,
        body: &HmExpr,
    ) -> Result<LlNode, LowerError> {
        let ty = self.type_of(expr)?;
        let target = Box::new(self.lower_single(target, "For", "target")?);

        let kind = if let Some((start, end)) = range_bounds(iter) {
            tracing::trace!("recognized range loop");
            LlKind::ForRange {
                target,
                start: Box::new(self.lower_single(start, "For", "start")?),
                end: Box::new(self.lower_single(end, "For", "end")?),
                body: Box::new(self.lower_cons(body)?),
            }
        } else {
            LlKind::For {
                target,
                iter: Box::new(self.lower_single(iter, "For", "iter")?),
                body: Box::new(self.lower_cons(body)?),
            }
        };
        Ok(LlNode::new(kind, ty))
    }

    pub(super) fn lower_while(
        &self,
        expr: &HmExpr,
        test: &HmExpr,
        body: &HmExpr,
    ) -> Result<LlNode, LowerError> {
        let ty = self.type_of(expr)?;
        let test = self.lower_single(test, "While", "test")?;
        let body = self.lower_cons(body)?;
        Ok(LlNode::new(
            LlKind::While {
                test: Box::new(test),
                body: Box::new(body),
            },
            ty,
        ))
    }
}

/// Bounds of `range(start)(end)`, matched structurally.
fn range_bounds(iter: &HmExpr) -> Option<(&HmExpr, &HmExpr)> {
    let HmExprKind::Apply { func, arg: end } = &iter.kind else {
        return None;
    };
    let HmExprKind::Apply { func: range, arg: start } = &func.kind else {
        return None;
    };
    (range.kind.as_ident() == Some(RANGE_BUILTIN)).then_some((&**start, &**end))
}
