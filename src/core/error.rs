//! Errors raised when constructing core values.

use thiserror::Error;

/// Errors that can occur when building a [`Condition`](super::Condition).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Condition ordinal {0} is out of range (expected 0..=4)")]
    InvalidOrdinal(u8),

    #[error("Unknown condition name '{0}'")]
    UnknownName(String),
}
