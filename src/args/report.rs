//! Serializable view of a parsed store.

use std::fmt;

use serde::Serialize;

use crate::args::name::FlagName;
use crate::args::record::FlagState;
use crate::args::store::ParsedArguments;

/// Resolved state of one flag, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagSnapshot<'a> {
    pub name: &'a FlagName,
    pub state: FlagState<'a>,
    /// Every direct positive value, oldest first.
    pub values: &'a [String],
    pub negated: bool,
    pub last_positive_index: Option<usize>,
    pub last_negated_index: Option<usize>,
}

impl ParsedArguments {
    /// One snapshot per flag, sorted by name.
    pub fn snapshot(&self) -> Vec<FlagSnapshot<'_>> {
        self.records()
            .map(|(name, record)| FlagSnapshot {
                name,
                state: record.state(),
                values: record.values(),
                negated: record.negated(),
                last_positive_index: record.last_positive_index(),
                last_negated_index: record.last_negated_index(),
            })
            .collect()
    }
}

impl fmt::Display for FlagSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            FlagState::Present(value) => write!(f, "{} = {:?}", self.name, value)?,
            FlagState::Negated => write!(f, "{} negated", self.name)?,
            FlagState::Unset => write!(f, "{} unset", self.name)?,
        }
        if self.values.len() > 1 {
            write!(f, " (all: {})", self.values.join(", "))?;
        }
        Ok(())
    }
}
