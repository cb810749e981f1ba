//! Process-wide argument holder.
//!
//! Holds the current store behind an `Arc`. Re-parsing swaps the whole store,
//! so readers keep whichever complete parse they already picked up.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::args::store::{parse, ParsedArguments};

/// Cloneable handle to the current parsed arguments.
#[derive(Debug, Clone, Default)]
pub struct SharedArgs {
    inner: Arc<RwLock<Arc<ParsedArguments>>>,
}

impl SharedArgs {
    /// Create a holder from an already parsed store.
    pub fn new(parsed: ParsedArguments) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(parsed))),
        }
    }

    /// Parse `raw_args` and replace the current store with the result.
    pub fn reset<I, S>(&self, raw_args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = Arc::new(parse(raw_args));
        *self.inner.write() = parsed;
    }

    /// The store as of now. Later resets do not affect the returned value.
    pub fn current(&self) -> Arc<ParsedArguments> {
        Arc::clone(&self.inner.read())
    }
}
