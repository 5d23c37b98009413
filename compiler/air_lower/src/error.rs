//! Lowering errors.
//!
//! Lowering has no local recovery: the first error aborts the whole
//! compilation unit and is handed back to the driver for reporting.

/// Error raised while lowering a typed tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// No lowering rule exists for this input kind.
    #[error("unsupported construct: no lowering rule for `{kind}` nodes")]
    UnsupportedConstruct { kind: &'static str },
    /// A node of a known kind lacks something its rule needs. Points at a
    /// bug in the stage that produced the tree.
    #[error("malformed `{kind}` node: {detail}")]
    MalformedNode { kind: &'static str, detail: String },
}

impl LowerError {
    pub(crate) fn unsupported(kind: &'static str) -> Self {
        tracing::debug!(kind, "no lowering rule");
        LowerError::UnsupportedConstruct { kind }
    }

    pub(crate) fn malformed(kind: &'static str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::debug!(kind, %detail, "malformed input node");
        LowerError::MalformedNode { kind, detail }
    }

    /// Input kind the error was raised for.
    pub fn kind(&self) -> &'static str {
        match self {
            LowerError::UnsupportedConstruct { kind } | LowerError::MalformedNode { kind, .. } => {
                *kind
            }
        }
    }
}
