//! Low-level lowering for the Airtight compiler.
//!
//! Transforms the typed, curried tree produced by Hindley-Milner inference
//! (`HmExpr`) into the flat, uncurried tree consumed by code generation
//! (`LlNode`).
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Rewrite/Validate → HM Inference → **Lower** → Code generation
//! ```
//!
//! # What Happens During Lowering
//!
//! 1. **Uncurrying**: nested single-parameter lambdas become one
//!    multi-parameter `lambda`; curried call chains become one `apply`.
//! 2. **Operator recognition**: `a__add__(x)(y)` becomes `binop(x + y)`.
//! 3. **Sequence flattening**: `Body` cons cells become statement lists.
//! 4. **Bindings**: `let` becomes a `method` (lambda bound) or an
//!    `assignment`, followed by its continuation.
//! 5. **Loops**: `for x in range(a)(b)` becomes `for_range`; loop bodies
//!    lose their trailing placeholder identifier.
//!
//! Types are copied from input to output nodes and never checked.
//!
//! # Debugging
//!
//! Call [`init_tracing`] and set `RUST_LOG`:
//! - `RUST_LOG=air_lower=debug` - one line per compilation unit and error
//! - `RUST_LOG=air_lower=trace` - every dispatched node and rewrite

mod error;
mod lower;
mod options;
mod stack;

pub use error::LowerError;
pub use lower::{lower, lower_expr, lower_with};
pub use options::LowerOptions;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Installs a subscriber only when
/// `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host application may already own the global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
