//! Error types for phrase resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid phrase: {0}")]
    Format(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error("Ambiguous month: {0}")]
    AmbiguousMonth(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
