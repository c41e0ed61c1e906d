//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `eamod-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed literal text.  `offset` is the byte position in the input.
    #[error("literal parse error at byte {offset}: {reason}")]
    Parse { offset: usize, reason: String },

    /// A well-formed literal that has the wrong structure for the caller
    /// (e.g. a flat list where a nested one was expected).
    #[error("unexpected literal: expected {expected}, found {found}")]
    Unexpected { expected: &'static str, found: String },

    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },
}

/// Shorthand result type for `eamod-core`.
pub type CoreResult<T> = Result<T, CoreError>;
