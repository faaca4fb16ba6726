//! Tests for the engine boundary: edits, aggregates, and error containment

use pretty_assertions::assert_eq;
use tally_sheets::prelude::*;

fn addr(s: &str) -> CellAddress {
    s.parse().unwrap()
}

#[test]
fn test_sum_over_partially_filled_range() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "1");
    sheet.set_cell_raw(addr("A2"), "2");
    // A3 is never set
    sheet.set_cell_raw(addr("B1"), "=SUM(A1:A3)");

    assert_eq!(sheet.cell_display(&addr("B1")), "3");
}

#[test]
fn test_avg_renders_with_two_fractional_digits() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "4");
    sheet.set_cell_raw(addr("A2"), "6");
    sheet.set_cell_raw(addr("B1"), "=AVG(A1:A2)");

    assert_eq!(sheet.cell_display(&addr("B1")), "5.00");
    assert_eq!(
        sheet.cell(&addr("B1")).unwrap().value,
        CellValue::text("5.00")
    );
}

#[test]
fn test_avg_counts_absent_cells_in_denominator() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "3");
    sheet.set_cell_raw(addr("A2"), "3");
    sheet.set_cell_raw(addr("B1"), "=AVG(A1:A3)");

    assert_eq!(sheet.cell_display(&addr("B1")), "2.00");
}

#[test]
fn test_literal_text_displays_unchanged_and_counts_as_zero() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("B1"), "hello");
    sheet.set_cell_raw(addr("B2"), "=B1+1");

    assert_eq!(sheet.cell_display(&addr("B1")), "hello");
    assert_eq!(sheet.cell_display(&addr("B2")), "1");
}

#[test]
fn test_numeric_literals_keep_their_text_form() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "007");

    // Display is the raw string, not a coerced number...
    assert_eq!(sheet.cell_display(&addr("A1")), "007");

    // ...but references interpret it numerically
    sheet.set_cell_raw(addr("A2"), "=A1+1");
    assert_eq!(sheet.cell_display(&addr("A2")), "8");
}

#[test]
fn test_errors_are_contained_per_cell() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "10");
    sheet.set_cell_raw(addr("B1"), "=1/0");
    sheet.set_cell_raw(addr("B2"), "=)(");
    sheet.set_cell_raw(addr("C1"), "=A1*2");

    assert_eq!(sheet.cell_display(&addr("B1")), "ERR");
    assert_eq!(sheet.cell_display(&addr("B2")), "ERR");

    // Unrelated cells in the same pass are unaffected
    assert_eq!(sheet.cell_display(&addr("A1")), "10");
    assert_eq!(sheet.cell_display(&addr("C1")), "20");
}

#[test]
fn test_referencing_an_err_cell_counts_as_zero() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "=1/0");
    sheet.set_cell_raw(addr("B1"), "=A1+5");

    assert_eq!(sheet.cell_display(&addr("A1")), "ERR");
    assert_eq!(sheet.cell_display(&addr("B1")), "5");
}

#[test]
fn test_deleting_a_cell_drops_it_from_aggregates() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "1");
    sheet.set_cell_raw(addr("A2"), "2");
    sheet.set_cell_raw(addr("A3"), "3");
    sheet.set_cell_raw(addr("B1"), "=SUM(A1:A3)");
    assert_eq!(sheet.cell_display(&addr("B1")), "6");

    sheet.set_cell_raw(addr("A2"), "");
    assert_eq!(sheet.cell_display(&addr("B1")), "4");
    assert_eq!(sheet.cell_display(&addr("A2")), "");
}

#[test]
fn test_recompute_is_idempotent_at_fixpoint() {
    // Built one edit at a time, the sheet is always at its fixpoint
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "1");
    sheet.set_cell_raw(addr("B1"), "=A1+1");
    sheet.set_cell_raw(addr("C1"), "=B1+1");
    assert_eq!(sheet.cell_display(&addr("C1")), "3");

    let before = sheet.sheet().clone();
    sheet.recompute();
    assert_eq!(*sheet.sheet(), before);
    sheet.recompute();
    assert_eq!(*sheet.sheet(), before);
}

#[test]
fn test_cold_acyclic_sheet_converges() {
    // A raw-only bulk load starts with nothing resolved; each pass resolves
    // one more dependency level, then the sheet stays fixed.
    let mut raw = Sheet::new();
    raw.set_raw(addr("A1"), "1");
    raw.set_raw(addr("B1"), "=A1+1");

    let (first, _) = recompute_all(&raw);
    let (second, _) = recompute_all(&first);
    let (third, _) = recompute_all(&second);

    assert_eq!(second.value(&addr("B1")), Some(&CellValue::Number(2.0)));
    assert_eq!(second, third);
}

#[test]
fn test_case_insensitive_formulas() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "2");
    sheet.set_cell_raw(addr("A2"), "4");
    sheet.set_cell_raw(addr("B1"), "=sum(a1:a2)");
    sheet.set_cell_raw(addr("B2"), "=a1*a2");

    assert_eq!(sheet.cell_display(&addr("B1")), "6");
    assert_eq!(sheet.cell_display(&addr("B2")), "8");
}

#[test]
fn test_formula_may_reference_outside_visible_grid() {
    let mut sheet = Spreadsheet::new();
    assert_eq!(sheet.rows(), 10);

    // Z100 is outside the default 10x10 grid
    sheet.set_cell_raw(addr("Z100"), "7");
    sheet.set_cell_raw(addr("A1"), "=Z100+1");

    assert_eq!(sheet.cell_display(&addr("A1")), "8");
}

#[test]
fn test_aggregate_with_bad_bounds_is_err() {
    let mut sheet = Spreadsheet::new();
    sheet.set_cell_raw(addr("A1"), "=SUM(A0:A3)");
    assert_eq!(sheet.cell_display(&addr("A1")), "ERR");
}
