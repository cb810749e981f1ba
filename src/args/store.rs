//! Parsed argument store — built once per parse, read-only afterwards.

use std::collections::BTreeMap;
use std::ffi::OsStr;

use crate::args::name::FlagName;
use crate::args::record::FlagRecord;
use crate::args::token::{tokenize, Token};

/// Every flag seen on one command line, keyed by canonical name.
///
/// Immutable once built. Re-parsing produces a fresh store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    records: BTreeMap<FlagName, FlagRecord>,
}

/// Parse raw arguments (program name excluded) into a store.
pub fn parse<I, S>(raw_args: I) -> ParsedArguments
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ArgsBuilder::from_args(raw_args).build()
}

/// Parse OS-encoded arguments. Entries that are not valid UTF-8 are read
/// lossily, so invalid bytes become U+FFFD instead of failing the parse.
pub fn parse_os<I, S>(raw_args: I) -> ParsedArguments
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    parse(
        raw_args
            .into_iter()
            .map(|arg| arg.as_ref().to_string_lossy().into_owned()),
    )
}

impl ParsedArguments {
    /// Parse the current process arguments, skipping the program name.
    pub fn from_env() -> Self {
        parse_os(std::env::args_os().skip(1))
    }

    /// Record for a flag, looked up by any dash spelling.
    pub fn record(&self, name: &str) -> Option<&FlagRecord> {
        let name = FlagName::canonical(name)?;
        self.records.get(&name)
    }

    /// Canonical names of every flag seen, sorted.
    pub fn flags(&self) -> impl Iterator<Item = &FlagName> {
        self.records.keys()
    }

    pub(crate) fn records(&self) -> impl Iterator<Item = (&FlagName, &FlagRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Accumulates tokens into records before freezing them into a store.
#[derive(Debug, Clone, Default)]
pub struct ArgsBuilder {
    records: BTreeMap<FlagName, FlagRecord>,
    next_index: usize,
    skipped: usize,
}

impl ArgsBuilder {
    /// Start with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize and record raw arguments in order.
    pub fn from_args<I, S>(raw_args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for token in tokenize(raw_args) {
            builder.push(token);
        }
        builder
    }

    /// Record one token at the next position.
    pub fn push(&mut self, token: Token) {
        let index = self.next_index;
        self.next_index += 1;

        let asserts_negation = token.asserts_negation();
        match token {
            Token::Positive { name, value } => {
                self.records.entry(name).or_default().push_positive(index, value);
            }
            Token::Negated { name, .. } => {
                let record = self.records.entry(name).or_default();
                if asserts_negation {
                    record.push_negation(index);
                } else {
                    record.cancel_negation(index);
                }
            }
            Token::Skipped(_) => self.skipped += 1,
        }
    }

    /// Set a value only if the flag was not given at all, negated or not.
    ///
    /// Returns whether the value was applied. A name that canonicalizes to
    /// nothing is never applied.
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        let Some(name) = FlagName::canonical(name) else {
            return false;
        };
        if self.records.contains_key(&name) {
            tracing::debug!(flag = %name, "soft set ignored, flag already given");
            return false;
        }

        let index = self.next_index;
        self.next_index += 1;
        tracing::debug!(flag = %name, value, "soft set applied");
        self.records
            .entry(name)
            .or_default()
            .push_positive(index, value.to_string());
        true
    }

    /// `soft_set` with `1` or `0`.
    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        self.soft_set(name, if value { "1" } else { "0" })
    }

    /// Freeze into an immutable store.
    pub fn build(self) -> ParsedArguments {
        tracing::debug!(
            flags = self.records.len(),
            skipped = self.skipped,
            "parsed arguments"
        );
        ParsedArguments {
            records: self.records,
        }
    }
}
