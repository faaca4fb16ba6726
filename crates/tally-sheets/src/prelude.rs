//! Convenience re-exports for common usage
//!
//! ```rust
//! use tally_sheets::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.set_cell_raw("A1".parse().unwrap(), "1");
//! ```

pub use crate::engine::Spreadsheet;
pub use crate::recalc::{recompute_all, RecalcStats};
pub use tally_sheets_core::{
    Cell, CellAddress, CellFormat, CellRange, CellValue, Error, Result, Sheet, MAX_COLS,
};
