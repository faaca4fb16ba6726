//! Range aggregate functions

use crate::ast::AggregateKind;
use crate::evaluator::EvalContext;
use tally_sheets_core::{CellRange, CellValue};

/// Reduce a rectangular range to a single value
///
/// Every cell in the rectangle contributes its numeric interpretation, or
/// zero when absent or non-numeric, and every cell counts toward AVG's
/// denominator. SUM yields a number; AVG renders as text with two fractional
/// digits.
pub fn aggregate(kind: AggregateKind, range: &CellRange, ctx: &EvalContext) -> CellValue {
    let mut sum = 0.0;
    let mut count: u64 = 0;

    for addr in range.cells() {
        sum += ctx.number_at(addr);
        count += 1;
    }

    match kind {
        AggregateKind::Sum => CellValue::Number(sum),
        // A normalized range always holds at least one cell
        AggregateKind::Avg => CellValue::Text(format!("{:.2}", sum / count as f64)),
    }
}
