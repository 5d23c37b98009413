//! Structural text rendering of lowered trees.
//!
//! Diagnostic only: used for debugging output and snapshot tests, never by
//! code generation. Output is deterministic for a given tree.
//!
//! ```text
//! source: @ (Int -> (Int -> Int))
//!   method add(ident[x] @ Int, ident[y] @ Int) -> Int @ (Int -> (Int -> Int))
//!     binop: @ Int
//!       op = +
//!       left = ident[x] @ Int
//!       right = ident[y] @ Int
//!   ident[add] @ (Int -> (Int -> Int))
//! ```

use std::fmt::{self, Write};

use super::{Attr, LlKind, LlNode, Lowered};
use crate::types::Type;

const INDENT: &str = "  ";

impl LlNode {
    /// Render this tree starting at indentation `depth`.
    pub fn render(&self, depth: usize) -> String {
        Indented { node: self, depth }.to_string()
    }
}

/// A node rendered at a fixed starting depth.
struct Indented<'a> {
    node: &'a LlNode,
    depth: usize,
}

impl fmt::Display for Indented<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.node, self.depth, true)
    }
}

impl fmt::Display for LlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0, true)
    }
}

impl fmt::Display for Lowered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lowered::Node(node) => write_node(f, node, 0, true),
            Lowered::Seq(nodes) => write_lines(f, nodes, 0),
        }
    }
}

fn offset(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

/// One node per line, each at `depth`.
fn write_lines(out: &mut impl Write, nodes: &[LlNode], depth: usize) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.write_char('\n')?;
        }
        write_node(out, node, depth, true)?;
    }
    Ok(())
}

/// Comma-separated inline nodes; continuation lines stay at `depth`.
fn write_inline_list(out: &mut impl Write, nodes: &[LlNode], depth: usize) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_node(out, node, depth, false)?;
    }
    Ok(())
}

fn write_bracketed(out: &mut impl Write, nodes: &[LlNode], depth: usize) -> fmt::Result {
    out.write_char('[')?;
    write_inline_list(out, nodes, depth)?;
    out.write_char(']')
}

fn write_type(out: &mut impl Write, ty: Option<&Type>) -> fmt::Result {
    match ty {
        Some(ty) => write!(out, "{ty}"),
        None => out.write_char('_'),
    }
}

/// Write `node` at `depth`. With `lead == false` the first line is not
/// indented, for nodes rendered after a `name = ` prefix.
fn write_node(out: &mut impl Write, node: &LlNode, depth: usize, lead: bool) -> fmt::Result {
    if lead {
        offset(out, depth)?;
    }
    if let Some(label) = node.label() {
        return write!(out, "{}[{label}] @ {}", node.kind_name(), node.ty);
    }
    match &node.kind {
        LlKind::Method(method) => {
            let name = method.label.label().unwrap_or_default();
            let (args, body, ret) = match &method.body.kind {
                LlKind::Lambda {
                    args,
                    body,
                    return_type,
                } => (args.as_slice(), Some(&**body), return_type.as_ref()),
                _ => (&[][..], None, method.return_type.as_ref()),
            };
            write!(out, "method {name}(")?;
            write_inline_list(out, args, depth)?;
            out.write_str(") -> ")?;
            write_type(out, ret.or(method.return_type.as_ref()))?;
            writeln!(out, " @ {}", node.ty)?;
            match body {
                Some(body) => write_lines(out, body.as_slice(), depth + 1),
                None => write_node(out, &method.body, depth + 1, true),
            }
        }
        LlKind::Assignment { label, right } => {
            out.write_str("assignment[")?;
            write_node(out, label, depth, false)?;
            out.write_str(" : ")?;
            write_node(out, right, depth, false)?;
            write!(out, "] @ {}", node.ty)
        }
        LlKind::Source { statements } => {
            write!(out, "source: @ {}", node.ty)?;
            if !statements.is_empty() {
                out.write_char('\n')?;
                write_lines(out, statements, depth + 1)?;
            }
            Ok(())
        }
        LlKind::Apply { function, args } => {
            out.write_str("call ")?;
            write_node(out, function, depth, false)?;
            out.write_char('(')?;
            write_inline_list(out, args, depth)?;
            write!(out, ") @ {}", node.ty)
        }
        _ => write_generic(out, node, depth),
    }
}

/// Header line, then one `name = value` line per attribute.
fn write_generic(out: &mut impl Write, node: &LlNode, depth: usize) -> fmt::Result {
    write!(out, "{}: @ {}", node.kind_name(), node.ty)?;
    for (name, value) in node.attributes() {
        out.write_char('\n')?;
        offset(out, depth + 1)?;
        write!(out, "{name} = ")?;
        write_attr(out, value, depth + 1)?;
    }
    Ok(())
}

fn write_attr(out: &mut impl Write, value: Attr<'_>, depth: usize) -> fmt::Result {
    match value {
        Attr::Node(node) | Attr::Lowered(Lowered::Node(node)) => {
            write_node(out, node, depth, false)
        }
        Attr::Nodes(nodes) => write_bracketed(out, nodes, depth),
        Attr::Lowered(Lowered::Seq(nodes)) => write_bracketed(out, nodes, depth),
        Attr::Type(ty) => write_type(out, ty),
        Attr::Op(op) => out.write_str(op.as_symbol()),
        Attr::Flag(flag) => write!(out, "{flag}"),
        Attr::Types(types) => {
            out.write_char('[')?;
            for (i, ty) in types.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write!(out, "{ty}")?;
            }
            out.write_char(']')
        }
    }
}
