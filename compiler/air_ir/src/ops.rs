//! Reserved operator identifiers.
//!
//! Inference sees every built-in binary operator as an ordinary curried
//! function whose name follows the `<sentinel>_<opname>__` convention, e.g.
//! `a__add__`. The lowering pass maps these back to explicit operators.

/// Binary operators recognized from reserved identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Gt,
    Lt,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }

    /// Look up the operator encoded by a reserved-name suffix (`_add__`).
    ///
    /// `_substract__` is the spelling older inference front ends emit for
    /// subtraction and is accepted alongside `_subtract__`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "_add__" => Some(Self::Add),
            "_subtract__" | "_substract__" => Some(Self::Sub),
            "_mult__" => Some(Self::Mul),
            "_divide__" => Some(Self::Div),
            "_gt__" => Some(Self::Gt),
            "_lt__" => Some(Self::Lt),
            _ => None,
        }
    }

    /// Recognize a reserved operator identifier.
    ///
    /// The `sentinel` prefix is stripped when present; a name that already
    /// starts at the `_<opname>__` suffix matches without it.
    pub fn from_reserved_name(name: &str, sentinel: &str) -> Option<Self> {
        let suffix = match name.strip_prefix(sentinel) {
            Some(rest) if !sentinel.is_empty() && rest.starts_with('_') => rest,
            _ => name,
        };
        Self::from_suffix(suffix)
    }
}
