//! Formula evaluator
//!
//! Evaluates expression trees against a snapshot of resolved cell values.
//! The snapshot is whatever the sheet held at the start of the current
//! recomputation pass, so chained formulas see the previous pass's values
//! and converge one level per pass. That single-pass model is deliberate;
//! there is no dependency ordering and no cycle detection.

use crate::ast::{BinaryOperator, Expr, Formula, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions;
use tally_sheets_core::{CellAddress, CellValue, Sheet};

/// Read-only view of the resolved values a pass evaluates against
pub struct EvalContext<'a> {
    sheet: &'a Sheet,
}

impl<'a> EvalContext<'a> {
    /// Create a context over a sheet's current values
    pub fn new(sheet: &'a Sheet) -> Self {
        Self { sheet }
    }

    /// Numeric interpretation of a cell's resolved value
    ///
    /// Absent cells and non-numeric values count as zero, matching the
    /// reference-substitution policy.
    pub fn number_at(&self, addr: CellAddress) -> f64 {
        self.sheet
            .value(&addr)
            .and_then(CellValue::as_number)
            .unwrap_or(0.0)
    }
}

/// Evaluate a parsed formula to its resolved cell value
pub fn evaluate_formula(formula: &Formula, ctx: &EvalContext) -> FormulaResult<CellValue> {
    match formula {
        Formula::Aggregate { kind, range } => Ok(functions::aggregate(*kind, range, ctx)),
        Formula::Expr(expr) => {
            let n = evaluate(expr, ctx)?;
            if !n.is_finite() {
                return Err(FormulaError::Evaluation("non-finite result".into()));
            }
            Ok(CellValue::Number(n))
        }
    }
}

/// Evaluate an arithmetic expression tree
pub fn evaluate(expr: &Expr, ctx: &EvalContext) -> FormulaResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),

        Expr::CellRef(addr) => Ok(ctx.number_at(*addr)),

        Expr::UnaryOp { op, operand } => {
            let n = evaluate(operand, ctx)?;
            match op {
                UnaryOperator::Negate => Ok(-n),
            }
        }

        Expr::BinaryOp { op, left, right } => {
            let l = evaluate(left, ctx)?;
            let r = evaluate(right, ctx)?;
            match op {
                BinaryOperator::Add => Ok(l + r),
                BinaryOperator::Subtract => Ok(l - r),
                BinaryOperator::Multiply => Ok(l * r),
                BinaryOperator::Divide => {
                    if r == 0.0 {
                        Err(FormulaError::Evaluation("division by zero".into()))
                    } else {
                        Ok(l / r)
                    }
                }
            }
        }
    }
}
