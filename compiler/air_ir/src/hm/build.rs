//! Shorthand constructors for typed input trees.
//!
//! Inference output is verbose to write by hand; these helpers derive the
//! types of curried lambdas, applications and cons cells from their parts
//! the same way inference would. Used by tests here and downstream.

use super::{HmExpr, HmExprKind, Let};
use crate::types::Type;

pub fn int(value: i64) -> HmExpr {
    HmExpr::new(HmExprKind::Integer(value), Type::int())
}

pub fn float(value: f64) -> HmExpr {
    HmExpr::new(HmExprKind::Float(value), Type::float())
}

pub fn boolean(value: bool) -> HmExpr {
    HmExpr::new(HmExprKind::Boolean(value), Type::bool())
}

pub fn string(value: &str) -> HmExpr {
    HmExpr::new(HmExprKind::String(value.to_owned()), Type::string())
}

pub fn ident(name: &str, ty: Type) -> HmExpr {
    HmExpr::new(HmExprKind::Ident(name.to_owned()), ty)
}

/// `lambda param: body`, typed `param_ty -> body.ty`.
pub fn lambda(param: &str, param_ty: Type, body: HmExpr) -> HmExpr {
    let result = body.ty.clone().unwrap_or_else(Type::none);
    HmExpr::new(
        HmExprKind::Lambda {
            param: param.to_owned(),
            return_type: body.ty.clone(),
            body: Box::new(body),
        },
        Type::function(param_ty, result),
    )
}

/// Curried lambda over `params`, outermost parameter first.
pub fn lambdas(params: &[(&str, Type)], body: HmExpr) -> HmExpr {
    params
        .iter()
        .rev()
        .fold(body, |acc, (param, ty)| lambda(param, ty.clone(), acc))
}

/// `func(arg)`, typed as the result of `func`'s function type.
pub fn apply(func: HmExpr, arg: HmExpr) -> HmExpr {
    let ty = func.ty.as_ref().and_then(Type::result).cloned();
    HmExpr {
        kind: HmExprKind::Apply {
            func: Box::new(func),
            arg: Box::new(arg),
        },
        ty,
    }
}

/// Curried call `func(a)(b)...`.
pub fn call(func: HmExpr, args: Vec<HmExpr>) -> HmExpr {
    args.into_iter().fold(func, apply)
}

/// Curried call of the reserved operator `name` (e.g. `_add__`).
pub fn operator(name: &str, left: HmExpr, right: HmExpr, result: Type) -> HmExpr {
    let param = |e: &HmExpr| e.ty.clone().unwrap_or_else(Type::none);
    let op_ty = Type::curried(&[param(&left), param(&right)], result);
    call(ident(name, op_ty), vec![left, right])
}

/// `range(start)(end)` over the builtin `range`.
pub fn range(start: HmExpr, end: HmExpr) -> HmExpr {
    let range_ty = Type::curried(
        &[Type::int(), Type::int()],
        Type::app("List", vec![Type::int()]),
    );
    call(ident("range", range_ty), vec![start, end])
}

/// Cons cell; typed as the rest of the sequence.
pub fn cons(expression: HmExpr, other: HmExpr) -> HmExpr {
    let ty = other.ty.clone();
    HmExpr {
        kind: HmExprKind::Body {
            expression: Box::new(expression),
            other: Box::new(other),
        },
        ty,
    }
}

/// Cons chain `init[0]; init[1]; ...; last`.
pub fn seq(init: Vec<HmExpr>, last: HmExpr) -> HmExpr {
    init.into_iter().rev().fold(last, |acc, e| cons(e, acc))
}

fn binding(name: &str, defn: HmExpr, body: HmExpr, native: bool) -> Let {
    Let {
        name: name.to_owned(),
        defn: Box::new(defn),
        body: Box::new(body),
        native,
        vars: Vec::new(),
    }
}

/// `let name = defn in body`, typed as `body`.
pub fn let_in(name: &str, defn: HmExpr, body: HmExpr) -> HmExpr {
    let ty = body.ty.clone();
    HmExpr {
        kind: HmExprKind::Let(binding(name, defn, body, false)),
        ty,
    }
}

/// Runtime-provided binding with generalized type variables.
pub fn let_native(name: &str, defn: HmExpr, body: HmExpr, vars: Vec<Type>) -> HmExpr {
    let ty = body.ty.clone();
    let mut bound = binding(name, defn, body, true);
    bound.vars = vars;
    HmExpr {
        kind: HmExprKind::Let(bound),
        ty,
    }
}

pub fn letrec(name: &str, defn: HmExpr, body: HmExpr) -> HmExpr {
    let ty = body.ty.clone();
    HmExpr {
        kind: HmExprKind::Letrec(binding(name, defn, body, false)),
        ty,
    }
}

pub fn list(items: Vec<HmExpr>, elem: Type) -> HmExpr {
    HmExpr::new(HmExprKind::List(items), Type::app("List", vec![elem]))
}

pub fn if_else(test: HmExpr, body: HmExpr, orelse: HmExpr) -> HmExpr {
    let ty = body.ty.clone();
    HmExpr {
        kind: HmExprKind::If {
            test: Box::new(test),
            body: Box::new(body),
            orelse: Box::new(orelse),
        },
        ty,
    }
}

pub fn for_in(target: HmExpr, iter: HmExpr, body: HmExpr) -> HmExpr {
    HmExpr::new(
        HmExprKind::For {
            target: Box::new(target),
            iter: Box::new(iter),
            body: Box::new(body),
        },
        Type::none(),
    )
}

pub fn while_loop(test: HmExpr, body: HmExpr) -> HmExpr {
    HmExpr::new(
        HmExprKind::While {
            test: Box::new(test),
            body: Box::new(body),
        },
        Type::none(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lambdas_type_is_curried() {
        let f = lambdas(
            &[("x", Type::int()), ("y", Type::float())],
            ident("x", Type::int()),
        );
        assert_eq!(
            f.ty,
            Some(Type::curried(&[Type::int(), Type::float()], Type::int()))
        );
    }

    #[test]
    fn call_peels_one_arrow_per_argument() {
        let f_ty = Type::curried(&[Type::int(), Type::int()], Type::bool());
        let partial = apply(ident("f", f_ty.clone()), int(1));
        assert_eq!(partial.ty, Some(Type::function(Type::int(), Type::bool())));
        let full = call(ident("f", f_ty), vec![int(1), int(2)]);
        assert_eq!(full.ty, Some(Type::bool()));
    }

    #[test]
    fn seq_builds_right_nested_cons_cells() {
        let chain = seq(vec![int(1), int(2)], int(3));
        let HmExprKind::Body { expression, other } = &chain.kind else {
            panic!("expected Body, got {}", chain.kind_name());
        };
        assert_eq!(**expression, int(1));
        assert_eq!(other.kind_name(), "Body");
    }

    #[test]
    fn seq_without_init_is_the_last_expression() {
        assert_eq!(seq(Vec::new(), int(7)), int(7));
    }
}
