//! Error types for tally-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-sheets-core
#[derive(Debug, Error)]
pub enum Error {
    /// Identifier does not match the letter+digit address pattern
    #[error("Malformed cell address: {0}")]
    MalformedAddress(String),

    /// Column letters denote a column past the single-letter limit
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Range bounds do not decode as cell addresses
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),
}
