//! Hindley-Milner type descriptors.
//!
//! Every input node arrives from inference carrying one of these. The
//! lowering pass copies them onto output nodes without interpreting them,
//! with one exception: a lambda's parameter type is read from the first
//! argument of its function type.

use std::fmt;

/// Name of the function-arrow type operator.
pub const ARROW: &str = "->";

/// Type variable produced by inference.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeVar(pub u32);

/// Inferred type of a node.
///
/// Base types are nullary operators (`Int`, `Bool`, ...). Functions are the
/// `->` operator over `[param, result]`, so a curried function of arity n
/// is a right-nested chain of n arrows.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// Unresolved (or generalized) type variable.
    Var(TypeVar),
    /// Type constructor applied to argument types.
    Operator { name: String, types: Vec<Type> },
}

impl Type {
    /// Nullary type constructor, e.g. `Int`.
    pub fn con(name: impl Into<String>) -> Self {
        Type::Operator {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Type constructor with arguments, e.g. `List[Int]`.
    pub fn app(name: impl Into<String>, types: Vec<Type>) -> Self {
        Type::Operator {
            name: name.into(),
            types,
        }
    }

    /// Single-parameter function type `param -> result`.
    pub fn function(param: Type, result: Type) -> Self {
        Type::app(ARROW, vec![param, result])
    }

    /// Curried function type over `params`, ending in `result`.
    ///
    /// `curried(&[a, b], r)` is `a -> (b -> r)`.
    pub fn curried(params: &[Type], result: Type) -> Self {
        params
            .iter()
            .rev()
            .fold(result, |acc, param| Type::function(param.clone(), acc))
    }

    pub fn var(id: u32) -> Self {
        Type::Var(TypeVar(id))
    }

    pub fn int() -> Self {
        Type::con("Int")
    }

    pub fn float() -> Self {
        Type::con("Float")
    }

    pub fn bool() -> Self {
        Type::con("Bool")
    }

    pub fn string() -> Self {
        Type::con("String")
    }

    pub fn none() -> Self {
        Type::con("None")
    }

    /// Argument types of an operator; empty for variables.
    pub fn types(&self) -> &[Type] {
        match self {
            Type::Var(_) => &[],
            Type::Operator { types, .. } => types,
        }
    }

    /// Whether this is a `->` type.
    pub fn is_function(&self) -> bool {
        matches!(self, Type::Operator { name, types } if name == ARROW && types.len() == 2)
    }

    /// Parameter type of a function type (`types[0]`).
    pub fn param(&self) -> Option<&Type> {
        if self.is_function() {
            self.types().first()
        } else {
            None
        }
    }

    /// Result type of a function type (`types[1]`).
    pub fn result(&self) -> Option<&Type> {
        if self.is_function() {
            self.types().get(1)
        } else {
            None
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Var(TypeVar(id)) => write!(f, "a{id}"),
            Type::Operator { name, types } if name == ARROW && types.len() == 2 => {
                write!(f, "({} -> {})", types[0], types[1])
            }
            Type::Operator { name, types } if types.is_empty() => f.write_str(name),
            Type::Operator { name, types } => {
                write!(f, "{name}[")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests;
