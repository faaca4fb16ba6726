//! The materialized cell record

use crate::cell::{CellFormat, CellValue};
use serde::{Deserialize, Serialize};

/// A single materialized cell
///
/// `raw` is the user-entered string; `value` is derived by recomputation and
/// never set directly. Loading a cell without a `value` seeds it with empty
/// text until the first recomputation pass resolves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// User-entered string; may be empty, a literal, or a formula (`=...`)
    #[serde(default)]
    pub raw: String,
    /// Last computed display value
    #[serde(default)]
    pub value: CellValue,
    /// Style flags, carried through recomputation unchanged
    #[serde(default, skip_serializing_if = "CellFormat::is_default")]
    pub format: CellFormat,
}

impl Cell {
    /// Create a cell from raw content, with an unresolved value
    pub fn from_raw<S: Into<String>>(raw: S) -> Self {
        Self {
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Check if the raw content is a formula
    pub fn is_formula(&self) -> bool {
        self.raw.starts_with('=')
    }
}
