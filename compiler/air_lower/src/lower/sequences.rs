//! Statement sequences: cons-cell flattening and the loop-body trim.

use air_ir::{HmExpr, HmExprKind, LlNode, Lowered};

use super::Lowerer;
use crate::LowerError;

impl Lowerer<'_> {
    /// Flatten a `Body` cons chain into one ordered statement list.
    ///
    /// Walks the `other` spine iteratively. An element that itself lowers
    /// to a sequence is spliced in place.
    pub(super) fn lower_body(&self, expr: &HmExpr) -> Result<Vec<LlNode>, LowerError> {
        let mut statements = Vec::new();
        let mut cursor = expr;
        while let HmExprKind::Body { expression, other } = &cursor.kind {
            statements.extend(self.lower_expr(expression)?.into_vec());
            cursor = &**other;
        }
        statements.extend(self.lower_expr(cursor)?.into_vec());
        Ok(statements)
    }

    /// Lower a loop body, dropping a trailing placeholder identifier.
    ///
    /// Loop forms always end their body with a bare reference that yields
    /// the loop's value; it is not a statement. A lone identifier is kept.
    pub(super) fn lower_cons(&self, body: &HmExpr) -> Result<Lowered, LowerError> {
        match self.lower_expr(body)? {
            Lowered::Seq(mut statements)
                if statements.len() > 1 && statements.last().is_some_and(LlNode::is_ident) =>
            {
                statements.pop();
                tracing::trace!(remaining = statements.len(), "trimmed trailing placeholder");
                Ok(Lowered::Seq(statements))
            }
            lowered => Ok(lowered),
        }
    }
}
