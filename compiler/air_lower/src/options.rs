//! Lowering configuration.
//!
//! # Environment Variables
//!
//! Read by [`LowerOptions::from_env`]:
//!
//! - `AIR_OPERATOR_SENTINEL`: prefix of reserved operator identifiers
//!   (default `a_`, so `a__add__` is `+`).
//! - `AIR_TRIM_BRANCHES`: `1`/`true`/`yes` applies the loop-body placeholder
//!   trim to `if` branches as well.

/// Options for one lowering run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LowerOptions {
    /// Prefix stripped from an identifier before matching it against the
    /// `_<opname>__` operator suffixes.
    pub operator_sentinel: String,
    /// Trim a trailing placeholder identifier from `if` branches, the way
    /// loop bodies are always trimmed. Off by default.
    pub trim_branch_placeholders: bool,
}

impl LowerOptions {
    /// Sentinel used by the inference front end.
    pub const DEFAULT_SENTINEL: &'static str = "a_";

    const SENTINEL_VAR: &'static str = "AIR_OPERATOR_SENTINEL";
    const TRIM_BRANCHES_VAR: &'static str = "AIR_TRIM_BRANCHES";

    /// Defaults, overridden by the `AIR_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(sentinel) = lookup(Self::SENTINEL_VAR) {
            options.operator_sentinel = sentinel;
        }
        if let Some(flag) = lookup(Self::TRIM_BRANCHES_VAR) {
            options.trim_branch_placeholders = parse_flag(&flag);
        }
        options
    }

    #[must_use]
    pub fn with_operator_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.operator_sentinel = sentinel.into();
        self
    }

    #[must_use]
    pub fn with_trim_branch_placeholders(mut self, trim: bool) -> Self {
        self.trim_branch_placeholders = trim;
        self
    }
}

impl Default for LowerOptions {
    fn default() -> Self {
        LowerOptions {
            operator_sentinel: Self::DEFAULT_SENTINEL.to_owned(),
            trim_branch_placeholders: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
