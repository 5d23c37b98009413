//! Low-level output tree.
//!
//! Uncurried, explicit-control-flow form handed to code generation:
//! multi-argument functions and calls, explicit binary operators, flat
//! statement sequences and explicit loops. Every node keeps the type
//! inference assigned to the input node it was lowered from.

mod render;

use crate::ops::BinaryOp;
use crate::types::Type;

/// A lowered node.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LlNode {
    pub kind: LlKind,
    pub ty: Type,
}

/// Lowering result for a slot that may hold a statement sequence.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lowered {
    Node(LlNode),
    Seq(Vec<LlNode>),
}

/// Named function declaration produced from `let f = lambda ...`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Method {
    /// `ident` node naming the function.
    pub label: LlNode,
    /// The uncurried `lambda`.
    pub body: LlNode,
    pub return_type: Option<Type>,
    pub native: bool,
    pub vars: Vec<Type>,
}

/// Output node kinds.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LlKind {
    /// Top-level statement list of a compilation unit.
    Source { statements: Vec<LlNode> },
    Method(Box<Method>),
    Assignment {
        label: Box<LlNode>,
        right: Box<LlNode>,
    },

    // Atoms
    Ident(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),

    Lambda {
        args: Vec<LlNode>,
        body: Box<Lowered>,
        return_type: Option<Type>,
    },
    BinOp {
        op: BinaryOp,
        left: Box<LlNode>,
        right: Box<LlNode>,
    },
    Apply {
        function: Box<LlNode>,
        args: Vec<LlNode>,
    },
    List { items: Vec<LlNode> },
    If {
        test: Box<LlNode>,
        body: Box<Lowered>,
        orelse: Box<Lowered>,
    },
    For {
        target: Box<LlNode>,
        iter: Box<LlNode>,
        body: Box<Lowered>,
    },
    ForRange {
        target: Box<LlNode>,
        start: Box<LlNode>,
        end: Box<LlNode>,
        body: Box<Lowered>,
    },
    While {
        test: Box<LlNode>,
        body: Box<Lowered>,
    },
}

/// Attribute value, as enumerated for the diagnostic renderer.
#[derive(Copy, Clone, Debug)]
pub enum Attr<'a> {
    Node(&'a LlNode),
    Nodes(&'a [LlNode]),
    Lowered(&'a Lowered),
    Type(Option<&'a Type>),
    Op(BinaryOp),
    Flag(bool),
    Types(&'a [Type]),
}

impl LlNode {
    pub fn new(kind: LlKind, ty: Type) -> Self {
        LlNode { kind, ty }
    }

    /// Identifier reference.
    pub fn ident(name: impl Into<String>, ty: Type) -> Self {
        LlNode::new(LlKind::Ident(name.into()), ty)
    }

    /// Kind discriminant name.
    pub const fn kind_name(&self) -> &'static str {
        match &self.kind {
            LlKind::Source { .. } => "source",
            LlKind::Method(_) => "method",
            LlKind::Assignment { .. } => "assignment",
            LlKind::Ident(_) => "ident",
            LlKind::Integer(_) => "integer",
            LlKind::Float(_) => "float",
            LlKind::Boolean(_) => "boolean",
            LlKind::String(_) => "string",
            LlKind::Lambda { .. } => "lambda",
            LlKind::BinOp { .. } => "binop",
            LlKind::Apply { .. } => "apply",
            LlKind::List { .. } => "list",
            LlKind::If { .. } => "if",
            LlKind::For { .. } => "for",
            LlKind::ForRange { .. } => "for_range",
            LlKind::While { .. } => "while",
        }
    }

    /// Whether this is a bare identifier reference.
    pub fn is_ident(&self) -> bool {
        matches!(self.kind, LlKind::Ident(_))
    }

    /// Literal text of an atom (`ident`, `integer`, ...), `None` otherwise.
    pub fn label(&self) -> Option<String> {
        match &self.kind {
            LlKind::Ident(name) | LlKind::String(name) => Some(name.clone()),
            LlKind::Integer(value) => Some(value.to_string()),
            LlKind::Float(value) => Some(value.to_string()),
            LlKind::Boolean(value) => Some(value.to_string()),
            _ => None,
        }
    }

    /// Kind-specific attributes in declaration order, excluding the type.
    ///
    /// Atoms have none beyond their label (see [`LlNode::label`]).
    pub fn attributes(&self) -> Vec<(&'static str, Attr<'_>)> {
        match &self.kind {
            LlKind::Ident(_)
            | LlKind::Integer(_)
            | LlKind::Float(_)
            | LlKind::Boolean(_)
            | LlKind::String(_) => Vec::new(),
            LlKind::Source { statements } => vec![("expressions", Attr::Nodes(statements))],
            LlKind::Method(method) => vec![
                ("label", Attr::Node(&method.label)),
                ("body", Attr::Node(&method.body)),
                ("a_native", Attr::Flag(method.native)),
                ("a_vars", Attr::Types(&method.vars)),
                ("a_return_type", Attr::Type(method.return_type.as_ref())),
            ],
            LlKind::Assignment { label, right } => {
                vec![("label", Attr::Node(label)), ("right", Attr::Node(right))]
            }
            LlKind::Lambda {
                args,
                body,
                return_type,
            } => vec![
                ("args", Attr::Nodes(args)),
                ("body", Attr::Lowered(body)),
                ("a_return_type", Attr::Type(return_type.as_ref())),
            ],
            LlKind::BinOp { op, left, right } => vec![
                ("op", Attr::Op(*op)),
                ("left", Attr::Node(left)),
                ("right", Attr::Node(right)),
            ],
            LlKind::Apply { function, args } => {
                vec![("function", Attr::Node(function)), ("args", Attr::Nodes(args))]
            }
            LlKind::List { items } => vec![("items", Attr::Nodes(items))],
            LlKind::If { test, body, orelse } => vec![
                ("test", Attr::Node(test)),
                ("body", Attr::Lowered(body)),
                ("orelse", Attr::Lowered(orelse)),
            ],
            LlKind::For { target, iter, body } => vec![
                ("target", Attr::Node(target)),
                ("iter", Attr::Node(iter)),
                ("body", Attr::Lowered(body)),
            ],
            LlKind::ForRange {
                target,
                start,
                end,
                body,
            } => vec![
                ("target", Attr::Node(target)),
                ("start", Attr::Node(start)),
                ("end", Attr::Node(end)),
                ("body", Attr::Lowered(body)),
            ],
            LlKind::While { test, body } => {
                vec![("test", Attr::Node(test)), ("body", Attr::Lowered(body))]
            }
        }
    }
}

impl Lowered {
    /// Statements in order; a single node is a one-element slice.
    pub fn as_slice(&self) -> &[LlNode] {
        match self {
            Lowered::Node(node) => std::slice::from_ref(node),
            Lowered::Seq(nodes) => nodes,
        }
    }

    pub fn into_vec(self) -> Vec<LlNode> {
        match self {
            Lowered::Node(node) => vec![node],
            Lowered::Seq(nodes) => nodes,
        }
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Lowered::Seq(_))
    }
}

impl From<LlNode> for Lowered {
    fn from(node: LlNode) -> Self {
        Lowered::Node(node)
    }
}

#[cfg(test)]
mod tests;
