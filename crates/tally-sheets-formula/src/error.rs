//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
///
/// All of these are contained per-cell by the recomputation engine (the
/// cell's display value becomes `ERR`); none aborts a sheet-wide pass.
#[derive(Debug, Error)]
pub enum FormulaError {
    /// Formula parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Range aggregate references undecodable bounds
    #[error("Invalid range: {0}")]
    Range(String),

    /// Formula evaluation error
    #[error("Evaluation error: {0}")]
    Evaluation(String),
}
