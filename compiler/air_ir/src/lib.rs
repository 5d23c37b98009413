//! Airtight IR - tree types for the low-level lowering pass
//!
//! This crate holds the data on both sides of lowering:
//! - `Type`: Hindley-Milner type descriptors attached to every node
//! - `HmExpr`: the typed, curried input tree produced by inference
//! - `LlNode`: the uncurried, explicit-control-flow output tree
//! - `BinaryOp`: the reserved operator identifiers and their symbols
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for every tree type, for
//!   hand-off to an out-of-process code generator.

pub mod hm;
pub mod ll;
mod ops;
mod types;

pub use hm::{HmExpr, HmExprKind, Let};
pub use ll::{Attr, LlKind, LlNode, Lowered, Method};
pub use ops::BinaryOp;
pub use types::{Type, TypeVar, ARROW};
