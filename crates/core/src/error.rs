//! Error types for arrayops
//!
//! The default operations never fail: absent fields resolve to `None` and
//! mixed-type keys are ordered by kind. Errors only surface from parsing a
//! sort order and from strict sorting.

use thiserror::Error;

/// Errors raised by arrayops operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sort order string other than "asc" or "desc"
    #[error("invalid sort order '{0}', expected \"asc\" or \"desc\"")]
    InvalidSortOrder(String),

    /// Two sort keys of different kinds (or an absent key) under a strict comparison
    #[error("cannot compare {left} with {right}")]
    IncomparableValues {
        /// Kind of the left-hand key
        left: &'static str,
        /// Kind of the right-hand key
        right: &'static str,
    },
}

/// Result type alias for arrayops operations
pub type Result<T> = std::result::Result<T, Error>;
