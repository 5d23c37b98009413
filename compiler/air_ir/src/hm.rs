//! Typed input tree produced by Hindley-Milner inference.
//!
//! The tree is curried and functional: every lambda takes one parameter,
//! every application passes one argument, and statement sequences are
//! cons cells (`Body`). Each node carries the type inference assigned to
//! it. The lowering pass reads this tree and never mutates it.

pub mod build;

use crate::types::Type;

/// A typed input node.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HmExpr {
    pub kind: HmExprKind,
    /// Inferred type. `None` only when the producer broke its contract.
    pub ty: Option<Type>,
}

impl HmExpr {
    pub fn new(kind: HmExprKind, ty: Type) -> Self {
        HmExpr { kind, ty: Some(ty) }
    }

    /// A node without an inferred type.
    pub fn untyped(kind: HmExprKind) -> Self {
        HmExpr { kind, ty: None }
    }

    /// Kind name, as reported in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// `let v = defn in body`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Let {
    pub name: String,
    pub defn: Box<HmExpr>,
    pub body: Box<HmExpr>,
    /// The binding is provided by the runtime.
    pub native: bool,
    /// Type variables generalized at this binding.
    pub vars: Vec<Type>,
}

/// Input node kinds.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HmExprKind {
    /// Cons cell of a statement sequence: `expression` then `other`.
    Body {
        expression: Box<HmExpr>,
        other: Box<HmExpr>,
    },
    Let(Let),
    /// Single-parameter function. Its type is `param -> result`.
    Lambda {
        param: String,
        body: Box<HmExpr>,
        return_type: Option<Type>,
    },

    // Atoms
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Ident(String),

    /// Single-argument application.
    Apply {
        func: Box<HmExpr>,
        arg: Box<HmExpr>,
    },
    List(Vec<HmExpr>),
    If {
        test: Box<HmExpr>,
        body: Box<HmExpr>,
        orelse: Box<HmExpr>,
    },
    For {
        target: Box<HmExpr>,
        iter: Box<HmExpr>,
        body: Box<HmExpr>,
    },
    While {
        test: Box<HmExpr>,
        body: Box<HmExpr>,
    },

    // Produced by inference but without a low-level form.
    Letrec(Let),
    Tuple(Vec<HmExpr>),
    Dict(Vec<(HmExpr, HmExpr)>),
}

impl HmExprKind {
    /// Kind name, as reported in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            HmExprKind::Body { .. } => "Body",
            HmExprKind::Let(_) => "Let",
            HmExprKind::Lambda { .. } => "Lambda",
            HmExprKind::Integer(_) => "Integer",
            HmExprKind::Float(_) => "Float",
            HmExprKind::Boolean(_) => "Boolean",
            HmExprKind::String(_) => "String",
            HmExprKind::Ident(_) => "Ident",
            HmExprKind::Apply { .. } => "Apply",
            HmExprKind::List(_) => "AList",
            HmExprKind::If { .. } => "If",
            HmExprKind::For { .. } => "For",
            HmExprKind::While { .. } => "While",
            HmExprKind::Letrec(_) => "Letrec",
            HmExprKind::Tuple(_) => "Tuple",
            HmExprKind::Dict(_) => "Dict",
        }
    }

    /// Identifier name, if this is an `Ident`.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            HmExprKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}
