use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_base_and_var() {
    assert_eq!(Type::int().to_string(), "Int");
    assert_eq!(Type::var(3).to_string(), "a3");
}

#[test]
fn display_function_is_parenthesized() {
    let ty = Type::function(Type::int(), Type::bool());
    assert_eq!(ty.to_string(), "(Int -> Bool)");
}

#[test]
fn display_applied_operator() {
    let ty = Type::app("Dict", vec![Type::string(), Type::app("List", vec![Type::int()])]);
    assert_eq!(ty.to_string(), "Dict[String, List[Int]]");
}

#[test]
fn curried_nests_to_the_right() {
    let ty = Type::curried(&[Type::int(), Type::float()], Type::bool());
    assert_eq!(ty.to_string(), "(Int -> (Float -> Bool))");
    assert_eq!(ty.param(), Some(&Type::int()));
    assert_eq!(
        ty.result(),
        Some(&Type::function(Type::float(), Type::bool()))
    );
}

#[test]
fn curried_with_no_params_is_the_result() {
    assert_eq!(Type::curried(&[], Type::int()), Type::int());
}

#[test]
fn param_of_non_function_is_none() {
    assert_eq!(Type::int().param(), None);
    assert_eq!(Type::var(0).param(), None);
    assert_eq!(Type::app("List", vec![Type::int()]).param(), None);
}
