//! Let-binding lowering.
//!
//! `let f = lambda ...` becomes a named `method`; any other binding becomes
//! an `assignment`. The binding is always the first statement, followed by
//! the lowered continuation.

use air_ir::{HmExpr, HmExprKind, Let, LlKind, LlNode, Method};

use super::Lowerer;
use crate::LowerError;

impl Lowerer<'_> {
    pub(super) fn lower_let(
        &self,
        expr: &HmExpr,
        binding: &Let,
    ) -> Result<Vec<LlNode>, LowerError> {
        let Some(defn_ty) = binding.defn.ty.clone() else {
            return Err(LowerError::malformed(
                expr.kind_name(),
                format!("definition of `{}` has no inferred type", binding.name),
            ));
        };
        let label = LlNode::ident(binding.name.as_str(), defn_ty.clone());

        let bound = if let HmExprKind::Lambda { return_type, .. } = &binding.defn.kind {
            let body = self.lower_lambda(&binding.defn)?;
            LlNode::new(
                LlKind::Method(Box::new(Method {
                    label,
                    body,
                    // The definition's own declared result, i.e. the rest of
                    // the curried chain for multi-parameter functions.
                    return_type: return_type.clone(),
                    native: binding.native,
                    vars: binding.vars.clone(),
                })),
                defn_ty,
            )
        } else {
            let right = self.lower_single(&binding.defn, "Let", "defn")?;
            LlNode::new(
                LlKind::Assignment {
                    label: Box::new(label),
                    right: Box::new(right),
                },
                self.type_of(expr)?,
            )
        };

        let rest = self.lower_expr(&binding.body)?;
        let mut statements = Vec::with_capacity(1 + rest.as_slice().len());
        statements.push(bound);
        statements.extend(rest.into_vec());
        Ok(statements)
    }
}
