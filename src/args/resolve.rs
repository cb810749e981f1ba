//! Typed accessors — resolve a flag's effective value with default fallback.
//!
//! None of the plain accessors fail. Unset flags return the caller's default,
//! negated flags read as false or unset, and bad integers read as zero.

use crate::args::error::ArgError;
use crate::args::name::FlagName;
use crate::args::record::FlagState;
use crate::args::store::ParsedArguments;
use crate::args::value::{int_or_zero, BoolReading};

impl ParsedArguments {
    /// Effective state of a flag after precedence.
    pub fn state(&self, name: &str) -> FlagState<'_> {
        self.record(name)
            .map(|record| record.state())
            .unwrap_or(FlagState::Unset)
    }

    /// Boolean value, or `default` when the flag was never given.
    ///
    /// `-X`, `-X=1` and `-noX=0` read as true; `-X=0` and `-noX` as false.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        match self.state(name) {
            FlagState::Present(value) => BoolReading::of(value).is_truthy(),
            FlagState::Negated => false,
            FlagState::Unset => default,
        }
    }

    /// String value verbatim, or `default` unless positively given.
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.state(name) {
            FlagState::Present(value) => value,
            FlagState::Negated | FlagState::Unset => default,
        }
    }

    /// Integer value, or `default` unless positively given.
    ///
    /// A value that is not a base-10 integer reads as `0`, not as `default`.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.state(name) {
            FlagState::Present(value) => int_or_zero(value),
            FlagState::Negated | FlagState::Unset => default,
        }
    }

    /// Integer value that reports malformed input. `Ok(None)` unless
    /// positively given.
    pub fn try_get_int(&self, name: &str) -> Result<Option<i64>, ArgError> {
        let Some(flag) = FlagName::canonical(name) else {
            return Ok(None);
        };
        let FlagState::Present(value) = self.state(flag.as_str()) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|source| ArgError::InvalidInteger {
                flag,
                value: value.to_string(),
                source,
            })
    }

    /// Every positive value of a repeated flag, oldest first.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.record(name)
            .map(|record| record.values())
            .unwrap_or_default()
    }

    /// Whether the flag resolves to a positive occurrence.
    pub fn is_set(&self, name: &str) -> bool {
        self.record(name).is_some_and(|record| record.has_positive())
    }

    /// Whether the flag resolves negated: negation seen, no positive.
    pub fn is_negated(&self, name: &str) -> bool {
        matches!(self.state(name), FlagState::Negated)
    }
}
