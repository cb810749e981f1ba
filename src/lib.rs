//! Tolerant `-flag` argument parsing with typed, default-aware accessors.

pub mod args;
pub mod logging;
