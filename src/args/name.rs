//! Canonical `-name` form for flag storage and lookup.

use std::fmt;

use serde::Serialize;

/// Prefix that turns `-noX` into a negation of `-X`.
pub const NEGATION_PREFIX: &str = "no";

/// A flag name normalized to exactly one leading dash.
///
/// `X`, `-X` and `--X` all canonicalize to `-X`. Names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FlagName(String);

impl FlagName {
    /// Canonicalize a query name. Returns `None` when nothing is left after
    /// stripping dashes.
    pub fn canonical(raw: &str) -> Option<Self> {
        let bare = strip_dashes(raw);
        if bare.is_empty() {
            return None;
        }
        Some(Self::from_bare(bare))
    }

    /// Build from a name that already had its dashes stripped.
    pub(crate) fn from_bare(bare: &str) -> Self {
        let mut name = String::with_capacity(bare.len() + 1);
        name.push('-');
        name.push_str(bare);
        Self(name)
    }

    /// The name with its leading dash, e.g. `-verbose`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip one leading dash, then at most one more.
///
/// `-x` and `--x` are equivalent; `---x` keeps a dash in the name.
pub(crate) fn strip_dashes(raw: &str) -> &str {
    let rest = raw.strip_prefix('-').unwrap_or(raw);
    rest.strip_prefix('-').unwrap_or(rest)
}

/// Split `-noX` style names into their base flag.
///
/// The bare name `no` is not a negation; it has no base to negate.
pub(crate) fn negated_base(bare: &str) -> Option<&str> {
    bare.strip_prefix(NEGATION_PREFIX)
        .filter(|base| !base.is_empty())
}
