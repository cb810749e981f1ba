//! Argument parsing and resolution.
//!
//! ```text
//! Raw args → Tokenize → Record → ParsedArguments → typed accessors
//! ```
//!
//! `-flag`, `--flag` and `-flag=value` all name the same flag. `-noflag`
//! negates `flag` unless any positive occurrence of `flag` is present, in
//! which case the positive occurrence wins regardless of order.
//!
//! Any name starting with `no` is read as a negation, so a flag called
//! `notify` can only be reached as `-tify`'s negation. This is inherent to
//! the convention and kept as is.

mod error;
mod name;
mod record;
mod report;
mod resolve;
mod shared;
mod store;
mod token;
mod value;

pub use error::ArgError;
pub use name::{FlagName, NEGATION_PREFIX};
pub use record::{FlagRecord, FlagState};
pub use report::FlagSnapshot;
pub use shared::SharedArgs;
pub use store::{parse, parse_os, ArgsBuilder, ParsedArguments};
pub use token::{tokenize, Token};
pub use value::{int_or_zero, BoolReading};
