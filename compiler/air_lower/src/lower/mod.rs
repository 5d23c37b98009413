//! Typed HM tree → low-level tree lowering.
//!
//! Every `HmExprKind` variant is routed to one rule:
//! - `Body` → flat statement list (`sequences`)
//! - `Let` → `method` or `assignment` followed by its continuation (`bindings`)
//! - `Lambda`, `Apply` → uncurried `lambda`, `apply` or `binop` (`curry`)
//! - `If`, `For`, `While` → explicit control flow, `for_range` recognition (`control_flow`)
//! - atoms and `AList` map directly
//! - `Letrec`, `Tuple`, `Dict` have no low-level form and are rejected

mod bindings;
mod control_flow;
mod curry;
mod sequences;

use air_ir::{HmExpr, HmExprKind, LlKind, LlNode, Lowered, Type};

use crate::stack::ensure_sufficient_stack;
use crate::{LowerError, LowerOptions};

/// Lower a compilation unit with default options.
///
/// A unit that lowers to several statements is wrapped in a `source` node
/// typed as its last statement; a single-node unit is returned as is.
pub fn lower(expr: &HmExpr) -> Result<LlNode, LowerError> {
    lower_with(expr, &LowerOptions::default())
}

/// Lower a compilation unit.
///
/// All-or-nothing: on error no partial tree is returned.
pub fn lower_with(expr: &HmExpr, options: &LowerOptions) -> Result<LlNode, LowerError> {
    tracing::debug!(root = expr.kind_name(), "lowering compilation unit");
    let node = match Lowerer::new(options).lower_expr(expr)? {
        Lowered::Node(node) => node,
        Lowered::Seq(statements) => {
            let Some(last) = statements.last() else {
                return Err(LowerError::malformed(
                    expr.kind_name(),
                    "compilation unit lowered to no statements",
                ));
            };
            let ty = last.ty.clone();
            LlNode::new(LlKind::Source { statements }, ty)
        }
    };
    let statements = match &node.kind {
        LlKind::Source { statements } => statements.len(),
        _ => 1,
    };
    tracing::debug!(root = node.kind_name(), statements, "lowered compilation unit");
    Ok(node)
}

/// Lower one expression without wrapping sequences in `source`.
pub fn lower_expr(expr: &HmExpr, options: &LowerOptions) -> Result<Lowered, LowerError> {
    Lowerer::new(options).lower_expr(expr)
}

/// State for one lowering run. Read-only; all output is returned by value.
pub(crate) struct Lowerer<'a> {
    options: &'a LowerOptions,
}

impl<'a> Lowerer<'a> {
    pub(crate) fn new(options: &'a LowerOptions) -> Self {
        Lowerer { options }
    }

    /// Route `expr` to the rule for its kind.
    pub(crate) fn lower_expr(&self, expr: &HmExpr) -> Result<Lowered, LowerError> {
        ensure_sufficient_stack(|| self.dispatch(expr))
    }

    fn dispatch(&self, expr: &HmExpr) -> Result<Lowered, LowerError> {
        tracing::trace!(kind = expr.kind_name(), "lowering node");
        match &expr.kind {
            HmExprKind::Body { .. } => self.lower_body(expr).map(Lowered::Seq),
            HmExprKind::Let(binding) => self.lower_let(expr, binding).map(Lowered::Seq),
            HmExprKind::Lambda { .. } => self.lower_lambda(expr).map(Lowered::Node),
            HmExprKind::Integer(value) => self.lower_atom(expr, LlKind::Integer(*value)),
            HmExprKind::Float(value) => self.lower_atom(expr, LlKind::Float(*value)),
            HmExprKind::Boolean(value) => self.lower_atom(expr, LlKind::Boolean(*value)),
            HmExprKind::String(value) => self.lower_atom(expr, LlKind::String(value.clone())),
            HmExprKind::Ident(name) => self.lower_atom(expr, LlKind::Ident(name.clone())),
            HmExprKind::Apply { func, arg } => {
                self.lower_apply(expr, func, arg).map(Lowered::Node)
            }
            HmExprKind::List(items) => self.lower_list(expr, items).map(Lowered::Node),
            HmExprKind::If { test, body, orelse } => {
                self.lower_if(expr, test, body, orelse).map(Lowered::Node)
            }
            HmExprKind::For { target, iter, body } => {
                self.lower_for(expr, target, iter, body).map(Lowered::Node)
            }
            HmExprKind::While { test, body } => {
                self.lower_while(expr, test, body).map(Lowered::Node)
            }
            HmExprKind::Letrec(_) | HmExprKind::Tuple(_) | HmExprKind::Dict(_) => {
                Err(LowerError::unsupported(expr.kind_name()))
            }
        }
    }

    /// Lower `expr` into a slot of `parent` that holds exactly one node.
    pub(super) fn lower_single(
        &self,
        expr: &HmExpr,
        parent: &'static str,
        slot: &'static str,
    ) -> Result<LlNode, LowerError> {
        match self.lower_expr(expr)? {
            Lowered::Node(node) => Ok(node),
            Lowered::Seq(statements) => Err(LowerError::malformed(
                parent,
                format!(
                    "`{slot}` must be a single expression, found {} statements",
                    statements.len()
                ),
            )),
        }
    }

    /// Inferred type of `expr`, required by every rule.
    pub(super) fn type_of(&self, expr: &HmExpr) -> Result<Type, LowerError> {
        expr.ty
            .clone()
            .ok_or_else(|| LowerError::malformed(expr.kind_name(), "missing inferred type"))
    }

    fn lower_atom(&self, expr: &HmExpr, kind: LlKind) -> Result<Lowered, LowerError> {
        let ty = self.type_of(expr)?;
        Ok(Lowered::Node(LlNode::new(kind, ty)))
    }

    fn lower_list(&self, expr: &HmExpr, items: &[HmExpr]) -> Result<LlNode, LowerError> {
        let ty = self.type_of(expr)?;
        let items = items
            .iter()
            .map(|item| self.lower_single(item, "AList", "items"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LlNode::new(LlKind::List { items }, ty))
    }
}
