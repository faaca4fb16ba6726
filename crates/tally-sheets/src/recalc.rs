//! Whole-sheet recomputation
//!
//! A recomputation pass visits every materialized cell in row-major address
//! order and resolves its display value against a snapshot of the values the
//! input sheet held when the pass started. The pass is functional: the input
//! sheet is not mutated, and a complete new sheet comes back.
//!
//! Because the snapshot is fixed at pass start, a formula referencing another
//! cell sees that cell's value from the previous completed pass. Dependency
//! chains therefore converge one level per pass, and cycles never error; they
//! lag. A sheet edited one cell at a time stays at its fixpoint, so repeated
//! passes with no intervening edits are idempotent.

use tally_sheets_core::{Cell, CellValue, Sheet};
use tally_sheets_formula::{self as formula, EvalContext, ParsedCell};
use tracing::{debug, warn};

/// Statistics from a recomputation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecalcStats {
    /// Total number of cells visited
    pub cells: usize,
    /// Number of cells holding formulas
    pub formulas: usize,
    /// Number of formulas contained as `ERR`
    pub errors: usize,
}

/// Re-evaluate every cell of a sheet
///
/// Evaluation failures never abort the pass: the failing cell's value
/// becomes `ERR` and every other cell resolves independently.
pub fn recompute_all(input: &Sheet) -> (Sheet, RecalcStats) {
    let ctx = EvalContext::new(input);
    let mut output = Sheet::with_dims(input.rows(), input.cols());
    let mut stats = RecalcStats::default();

    for (&addr, cell) in input.cells() {
        stats.cells += 1;

        let value = match formula::parse(&cell.raw) {
            Ok(ParsedCell::Literal) => CellValue::text(cell.raw.clone()),
            Ok(ParsedCell::Formula(parsed)) => {
                stats.formulas += 1;
                match formula::evaluate_formula(&parsed, &ctx) {
                    Ok(value) => value,
                    Err(e) => {
                        stats.errors += 1;
                        warn!(cell = %addr, error = %e, "formula evaluation failed");
                        CellValue::Error
                    }
                }
            }
            Err(e) => {
                stats.formulas += 1;
                stats.errors += 1;
                warn!(cell = %addr, error = %e, "formula parse failed");
                CellValue::Error
            }
        };

        output.insert(
            addr,
            Cell {
                raw: cell.raw.clone(),
                value,
                format: cell.format,
            },
        );
    }

    debug!(
        cells = stats.cells,
        formulas = stats.formulas,
        errors = stats.errors,
        "recomputed sheet"
    );

    (output, stats)
}
