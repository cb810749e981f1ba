use std::num::ParseIntError;

use thiserror::Error;

use crate::args::name::FlagName;

/// Errors from the strict accessors.
///
/// The regular accessors never fail; these are for callers that want to
/// report bad input instead of degrading it.
#[derive(Debug, Error)]
pub enum ArgError {
    #[error("Flag '{flag}' expects an integer, got '{value}': {source}")]
    InvalidInteger {
        flag: FlagName,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
