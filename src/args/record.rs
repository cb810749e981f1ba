//! Per-flag record — everything seen for one flag name during a parse.

use serde::Serialize;

/// Resolved state of a single flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FlagState<'a> {
    /// Never seen.
    Unset,
    /// A positive occurrence won; carries its value.
    Present(&'a str),
    /// Only negations were seen.
    Negated,
}

/// What the parser observed for one flag.
///
/// Positive occurrences and negations are tracked independently; resolution
/// lets any positive occurrence win regardless of order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagRecord {
    /// Direct positive values (`-X`, `-X=v`) in command-line order.
    values: Vec<String>,
    last_positive_index: Option<usize>,
    /// Last `-noX=0`, which counts as `-X` with no value.
    cancelled_index: Option<usize>,
    last_negated_index: Option<usize>,
}

impl FlagRecord {
    pub(crate) fn push_positive(&mut self, index: usize, value: String) {
        self.values.push(value);
        self.last_positive_index = Some(index);
    }

    pub(crate) fn cancel_negation(&mut self, index: usize) {
        self.cancelled_index = Some(index);
    }

    pub(crate) fn push_negation(&mut self, index: usize) {
        self.last_negated_index = Some(index);
    }

    /// Effective positive value. A direct occurrence keeps its own value even
    /// when a cancelled negation appears later.
    pub fn last_positive_value(&self) -> Option<&str> {
        match self.values.last() {
            Some(value) => Some(value),
            None => self.cancelled_index.map(|_| ""),
        }
    }

    /// Position of the occurrence behind `last_positive_value`.
    pub fn last_positive_index(&self) -> Option<usize> {
        self.last_positive_index.or(self.cancelled_index)
    }

    pub fn last_negated_index(&self) -> Option<usize> {
        self.last_negated_index
    }

    /// Whether a `-noX` assertion was seen, whatever else was.
    pub fn negated(&self) -> bool {
        self.last_negated_index.is_some()
    }

    pub fn has_positive(&self) -> bool {
        self.last_positive_value().is_some()
    }

    /// Every direct positive value, oldest first.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Apply the precedence rule: any positive occurrence beats any negation.
    pub fn state(&self) -> FlagState<'_> {
        match self.last_positive_value() {
            Some(value) => FlagState::Present(value),
            None if self.negated() => FlagState::Negated,
            None => FlagState::Unset,
        }
    }
}
