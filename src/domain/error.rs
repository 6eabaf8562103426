//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent misuse of the containers and cursors.
/// These are independent of configuration and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// `next()` was called on a cursor that has nothing left to yield.
    #[error("cursor exhausted: no further elements")]
    Exhausted,

    #[error("duplicate value rejected by binary search tree: {value}")]
    DuplicateValue { value: String },

    #[error("unknown item category: {0} (expected any, weapon, ring or potion)")]
    UnknownCategory(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
