use super::*;
use pretty_assertions::assert_eq;

fn int_ty() -> Type {
    Type::int()
}

fn ident(name: &str) -> LlNode {
    LlNode::ident(name, int_ty())
}

fn integer(value: i64) -> LlNode {
    LlNode::new(LlKind::Integer(value), int_ty())
}

fn add(left: LlNode, right: LlNode) -> LlNode {
    LlNode::new(
        LlKind::BinOp {
            op: BinaryOp::Add,
            left: Box::new(left),
            right: Box::new(right),
        },
        int_ty(),
    )
}

fn add_method() -> LlNode {
    let fn_ty = Type::curried(&[int_ty(), int_ty()], int_ty());
    let lambda = LlNode::new(
        LlKind::Lambda {
            args: vec![ident("x"), ident("y")],
            body: Box::new(Lowered::Node(add(ident("x"), ident("y")))),
            return_type: Some(int_ty()),
        },
        fn_ty.clone(),
    );
    LlNode::new(
        LlKind::Method(Box::new(Method {
            label: LlNode::ident("add", fn_ty.clone()),
            body: lambda,
            return_type: Some(int_ty()),
            native: false,
            vars: Vec::new(),
        })),
        fn_ty,
    )
}

#[test]
fn atoms_render_as_kind_label_type() {
    assert_eq!(ident("x").to_string(), "ident[x] @ Int");
    assert_eq!(integer(42).to_string(), "integer[42] @ Int");
    assert_eq!(
        LlNode::new(LlKind::Boolean(true), Type::bool()).to_string(),
        "boolean[true] @ Bool"
    );
    assert_eq!(
        LlNode::new(LlKind::String("hi".into()), Type::string()).to_string(),
        "string[hi] @ String"
    );
    assert_eq!(
        LlNode::new(LlKind::Float(2.5), Type::float()).to_string(),
        "float[2.5] @ Float"
    );
}

#[test]
fn atoms_have_no_extra_attributes() {
    assert!(ident("x").attributes().is_empty());
    assert_eq!(ident("x").label().as_deref(), Some("x"));
    assert_eq!(add(ident("x"), integer(1)).label(), None);
}

#[test]
fn binop_renders_generically() {
    let rendered = add(ident("x"), integer(1)).to_string();
    assert_eq!(
        rendered,
        "binop: @ Int\n  op = +\n  left = ident[x] @ Int\n  right = integer[1] @ Int"
    );
}

#[test]
fn apply_renders_call_style() {
    let call = LlNode::new(
        LlKind::Apply {
            function: Box::new(LlNode::ident("f", Type::var(0))),
            args: vec![integer(1), ident("y")],
        },
        int_ty(),
    );
    assert_eq!(
        call.to_string(),
        "call ident[f] @ a0(integer[1] @ Int, ident[y] @ Int) @ Int"
    );
}

#[test]
fn assignment_renders_label_and_value() {
    let assign = LlNode::new(
        LlKind::Assignment {
            label: Box::new(ident("z")),
            right: Box::new(integer(3)),
        },
        int_ty(),
    );
    assert_eq!(
        assign.to_string(),
        "assignment[ident[z] @ Int : integer[3] @ Int] @ Int"
    );
}

#[test]
fn method_renders_signature_and_indented_body() {
    assert_eq!(
        add_method().to_string(),
        "method add(ident[x] @ Int, ident[y] @ Int) -> Int @ (Int -> (Int -> Int))\n\
         \x20 binop: @ Int\n\
         \x20   op = +\n\
         \x20   left = ident[x] @ Int\n\
         \x20   right = ident[y] @ Int"
    );
}

#[test]
fn source_indents_each_statement() {
    let method = add_method();
    let tail = LlNode::ident("add", method.ty.clone());
    let source = LlNode::new(
        LlKind::Source {
            statements: vec![method, tail.clone()],
        },
        tail.ty.clone(),
    );
    let expected = "\
source: @ (Int -> (Int -> Int))
  method add(ident[x] @ Int, ident[y] @ Int) -> Int @ (Int -> (Int -> Int))
    binop: @ Int
      op = +
      left = ident[x] @ Int
      right = ident[y] @ Int
  ident[add] @ (Int -> (Int -> Int))";
    assert_eq!(source.to_string(), expected);
}

#[test]
fn sequence_bodies_render_as_lists() {
    let while_node = LlNode::new(
        LlKind::While {
            test: Box::new(LlNode::new(LlKind::Boolean(true), Type::bool())),
            body: Box::new(Lowered::Seq(vec![integer(1), ident("x")])),
        },
        Type::none(),
    );
    assert_eq!(
        while_node.to_string(),
        "while: @ None\n  test = boolean[true] @ Bool\n  body = [integer[1] @ Int, ident[x] @ Int]"
    );
}

#[test]
fn nested_generic_nodes_keep_relative_indentation() {
    let for_range = LlNode::new(
        LlKind::ForRange {
            target: Box::new(ident("i")),
            start: Box::new(integer(0)),
            end: Box::new(integer(10)),
            body: Box::new(Lowered::Node(add(ident("i"), integer(1)))),
        },
        Type::none(),
    );
    let expected = "\
for_range: @ None
  target = ident[i] @ Int
  start = integer[0] @ Int
  end = integer[10] @ Int
  body = binop: @ Int
    op = +
    left = ident[i] @ Int
    right = integer[1] @ Int";
    assert_eq!(for_range.to_string(), expected);
}

#[test]
fn render_at_depth_indents_first_line() {
    assert_eq!(ident("x").render(2), "    ident[x] @ Int");
}

#[test]
fn render_at_depth_shifts_every_line() {
    let method = add_method();
    let shifted: Vec<String> = method
        .to_string()
        .lines()
        .map(|line| format!("  {line}"))
        .collect();
    assert_eq!(method.render(1), shifted.join("\n"));
}

#[test]
fn method_attributes_include_pass_through_annotations() {
    let method = add_method();
    let names: Vec<_> = method.attributes().into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        ["label", "body", "a_native", "a_vars", "a_return_type"]
    );
}

#[test]
fn lowered_views() {
    let single = Lowered::from(ident("x"));
    assert!(!single.is_seq());
    assert_eq!(single.as_slice().len(), 1);

    let seq = Lowered::Seq(vec![ident("x"), integer(2)]);
    assert!(seq.is_seq());
    assert_eq!(seq.to_string(), "ident[x] @ Int\ninteger[2] @ Int");
    assert_eq!(seq.into_vec().len(), 2);
}

#[test]
fn kind_names_are_lowercase_discriminants() {
    assert_eq!(add_method().kind_name(), "method");
    assert_eq!(add(ident("a"), ident("b")).kind_name(), "binop");
    let for_range = LlNode::new(
        LlKind::ForRange {
            target: Box::new(ident("i")),
            start: Box::new(integer(0)),
            end: Box::new(integer(1)),
            body: Box::new(Lowered::Seq(Vec::new())),
        },
        Type::none(),
    );
    assert_eq!(for_range.kind_name(), "for_range");
}
