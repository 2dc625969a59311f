//! Error types for the RPSLS core

/// Errors raised by the core at its boundaries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RpslsError {
    /// Input outside the five-throw domain
    #[error("invalid throw {0:?}: expected one of r, p, s, l, k (or a full name)")]
    InvalidThrow(String),

    /// Not enough rounds recorded for the requested view
    #[error("match history too short: need {needed} round(s), {recorded} recorded")]
    EmptyHistory { needed: usize, recorded: usize },
}

pub type Result<T> = std::result::Result<T, RpslsError>;
