//! Property-based tests for lowering.
//!
//! Generates curried lambdas, curried calls and cons chains of random
//! shape and checks the structural guarantees of the pass:
//! 1. Uncurrying keeps arity and parameter order
//! 2. Curried calls keep argument count and order
//! 3. Cons chains flatten to one list of the same length and order

#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use air_ir::hm::build::{call, ident, int, lambdas, seq};
use air_ir::{HmExpr, LlKind, LlNode, Lowered, Type};
use air_lower::{lower_expr, LowerOptions};
use proptest::prelude::*;

// -- Strategies --

/// Parameter names; unique by construction.
fn params_strategy() -> impl Strategy<Value = Vec<String>> {
    (1usize..12).prop_map(|n| (0..n).map(|i| format!("p{i}")).collect())
}

fn base_type_strategy() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::int()),
        Just(Type::float()),
        Just(Type::bool()),
        Just(Type::string()),
    ]
}

fn lower_default(expr: &HmExpr) -> Lowered {
    air_lower::init_tracing();
    match lower_expr(expr, &LowerOptions::default()) {
        Ok(lowered) => lowered,
        Err(err) => panic!("lowering failed: {err}"),
    }
}

fn single(lowered: Lowered) -> LlNode {
    match lowered {
        Lowered::Node(node) => node,
        Lowered::Seq(nodes) => panic!("expected one node, got {}", nodes.len()),
    }
}

// -- Properties --

proptest! {
    #[test]
    fn uncurried_lambda_keeps_arity_and_order(
        names in params_strategy(),
        ty in base_type_strategy(),
    ) {
        let params: Vec<(&str, Type)> = names.iter().map(|n| (n.as_str(), ty.clone())).collect();
        let node = single(lower_default(&lambdas(&params, int(0))));
        let LlKind::Lambda { args, .. } = &node.kind else {
            panic!("expected lambda, got {}", node.kind_name());
        };
        prop_assert_eq!(args.len(), names.len());
        let lowered: Vec<String> = args.iter().filter_map(|a| a.label()).collect();
        prop_assert_eq!(&lowered, &names);
        prop_assert!(args.iter().all(|a| a.ty == ty));
    }

    #[test]
    fn uncurried_call_keeps_argument_order(values in prop::collection::vec(any::<i64>(), 1..12)) {
        let fn_ty = Type::curried(&vec![Type::int(); values.len()], Type::bool());
        let expr = call(ident("f", fn_ty), values.iter().copied().map(int).collect());
        let node = single(lower_default(&expr));
        let LlKind::Apply { function, args } = &node.kind else {
            panic!("expected apply, got {}", node.kind_name());
        };
        prop_assert_eq!(function.label(), Some("f".to_owned()));
        let lowered: Vec<i64> = args
            .iter()
            .filter_map(|a| match a.kind {
                LlKind::Integer(v) => Some(v),
                _ => None,
            })
            .collect();
        prop_assert_eq!(lowered, values);
        prop_assert_eq!(node.ty, Type::bool());
    }

    #[test]
    fn cons_chain_flattens_preserving_order(values in prop::collection::vec(any::<i64>(), 2..64)) {
        let (last, init) = values.split_last().map_or((0, &[][..]), |(l, i)| (*l, i));
        let chain = seq(init.iter().copied().map(int).collect(), int(last));
        let Lowered::Seq(statements) = lower_default(&chain) else {
            panic!("expected a statement list");
        };
        let lowered: Vec<i64> = statements
            .iter()
            .filter_map(|s| match s.kind {
                LlKind::Integer(v) => Some(v),
                _ => None,
            })
            .collect();
        prop_assert_eq!(lowered, values);
    }
}
