//! Uncurrying of lambdas and applications.
//!
//! Inference works on single-parameter lambdas and single-argument
//! applications. Code generation wants multi-parameter functions and
//! multi-argument calls, with built-in operators as explicit `binop` nodes.

use std::collections::VecDeque;

use air_ir::{BinaryOp, HmExpr, HmExprKind, LlKind, LlNode, Lowered, Type};

use super::Lowerer;
use crate::stack::ensure_sufficient_stack;
use crate::LowerError;

/// A `lambda` under construction while a curried chain is unwound.
struct LambdaFrame {
    /// Parameters seen so far, innermost last. Each enclosing frame
    /// prepends its own.
    args: VecDeque<LlNode>,
    body: Lowered,
    return_type: Option<Type>,
    /// Type of the innermost lambda; enclosing frames keep it.
    ty: Type,
}

impl Lowerer<'_> {
    // Lambdas

    /// Collapse `lambda x: lambda y: ... body` into one `lambda(x, y, ...)`.
    pub(super) fn lower_lambda(&self, expr: &HmExpr) -> Result<LlNode, LowerError> {
        let frame = self.uncurry_lambda(expr)?;
        Ok(LlNode::new(
            LlKind::Lambda {
                args: Vec::from(frame.args),
                body: Box::new(frame.body),
                return_type: frame.return_type,
            },
            frame.ty,
        ))
    }

    fn uncurry_lambda(&self, expr: &HmExpr) -> Result<LambdaFrame, LowerError> {
        let HmExprKind::Lambda {
            param,
            body,
            return_type,
        } = &expr.kind
        else {
            return Err(LowerError::malformed(
                expr.kind_name(),
                "expected a lambda definition",
            ));
        };
        let ty = self.type_of(expr)?;
        let Some(param_ty) = ty.param().cloned() else {
            return Err(LowerError::malformed(
                expr.kind_name(),
                format!("type `{ty}` of the lambda over `{param}` is not a function type"),
            ));
        };

        // Base case is the innermost non-lambda body.
        let mut frame = if matches!(body.kind, HmExprKind::Lambda { .. }) {
            ensure_sufficient_stack(|| self.uncurry_lambda(body))?
        } else {
            LambdaFrame {
                args: VecDeque::new(),
                body: self.lower_expr(body)?,
                return_type: return_type.clone(),
                ty,
            }
        };
        frame.args.push_front(LlNode::ident(param.as_str(), param_ty));
        Ok(frame)
    }

    // Applications

    /// Uncurry `f(a)(b)...` into `apply(f, [a, b, ...])`, or
    /// `op(a)(b)` into `binop(a op b)` for a reserved operator `op`.
    ///
    /// Only the exact two-argument operator shape becomes a `binop`. The
    /// call node carries the type of the outermost application.
    pub(super) fn lower_apply(
        &self,
        expr: &HmExpr,
        func: &HmExpr,
        arg: &HmExpr,
    ) -> Result<LlNode, LowerError> {
        let ty = self.type_of(expr)?;

        let HmExprKind::Apply {
            func: inner_func,
            arg: inner_arg,
        } = &func.kind
        else {
            let function = self.lower_single(func, "Apply", "fn")?;
            let arg = self.lower_single(arg, "Apply", "arg")?;
            return Ok(LlNode::new(
                LlKind::Apply {
                    function: Box::new(function),
                    args: vec![arg],
                },
                ty,
            ));
        };

        if let Some(op) = self.reserved_operator(inner_func) {
            tracing::trace!(op = op.as_symbol(), "recognized operator call");
            let left = self.lower_single(inner_arg, "Apply", "arg")?;
            let right = self.lower_single(arg, "Apply", "arg")?;
            return Ok(LlNode::new(
                LlKind::BinOp {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                ty,
            ));
        }

        let callee = ensure_sufficient_stack(|| self.lower_apply(func, inner_func, inner_arg))?;
        let arg = self.lower_single(arg, "Apply", "arg")?;
        let kind = match callee.kind {
            LlKind::Apply { function, mut args } => {
                args.push(arg);
                LlKind::Apply { function, args }
            }
            // The result of an operator call is itself being called.
            kind => LlKind::Apply {
                function: Box::new(LlNode::new(kind, callee.ty)),
                args: vec![arg],
            },
        };
        Ok(LlNode::new(kind, ty))
    }

    /// Operator named by a reserved identifier in function position.
    fn reserved_operator(&self, func: &HmExpr) -> Option<BinaryOp> {
        let name = func.kind.as_ident()?;
        BinaryOp::from_reserved_name(name, &self.options.operator_sentinel)
    }
}
