//! # tally-sheets
//!
//! A small in-memory spreadsheet engine: a sparse grid of addressable cells,
//! each holding a literal or a formula, re-resolved whole-sheet whenever raw
//! content changes.
//!
//! Formulas support arithmetic over numeric literals and cell references
//! (`=A1*2+B3`) plus the `SUM` and `AVG` range aggregates (`=SUM(B1:B5)`).
//! Evaluation failures are data, not errors: the failing cell displays `ERR`
//! and the rest of the sheet resolves normally.
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//!
//! sheet.set_cell_raw("A1".parse().unwrap(), "1");
//! sheet.set_cell_raw("A2".parse().unwrap(), "2");
//! sheet.set_cell_raw("A3".parse().unwrap(), "=SUM(A1:A2)");
//!
//! assert_eq!(sheet.cell_display(&"A3".parse().unwrap()), "3");
//!
//! // The sheet round-trips through its flat JSON interchange form
//! let json = sheet.export_sheet().unwrap();
//! let mut reloaded = Spreadsheet::new();
//! reloaded.load_sheet(&json).unwrap();
//! assert_eq!(reloaded.cell_display(&"A3".parse().unwrap()), "3");
//! ```

pub mod engine;
pub mod prelude;
pub mod recalc;

// Re-export engine types
pub use engine::Spreadsheet;
pub use recalc::{recompute_all, RecalcStats};

// Re-export core types
pub use tally_sheets_core::{
    Cell, CellAddress, CellFormat, CellRange, CellValue, Error, Result, Sheet, MAX_COLS,
};

// Re-export formula types
pub use tally_sheets_formula::{
    evaluate, evaluate_formula, parse, parse_formula, AggregateKind, BinaryOperator, EvalContext,
    Expr, Formula, FormulaError, FormulaResult, ParsedCell, UnaryOperator,
};
