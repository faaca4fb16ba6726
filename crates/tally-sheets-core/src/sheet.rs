//! The sparse sheet container

use crate::cell::{Cell, CellAddress, CellFormat, CellValue};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Default number of visible rows in a new sheet
pub const DEFAULT_ROWS: u32 = 10;

/// Default number of visible columns in a new sheet
pub const DEFAULT_COLS: u16 = 10;

/// A sheet: a sparse mapping from [`CellAddress`] to [`Cell`], plus the
/// visible grid dimensions
///
/// Only cells with content are materialized. The dimensions bound the
/// renderable region but not addressability: a formula may reference a cell
/// outside the visible grid. The address-keyed `BTreeMap` iterates row-major,
/// which fixes the deterministic evaluation order of a recomputation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    cells: BTreeMap<CellAddress, Cell>,
    rows: u32,
    cols: u16,
}

impl Sheet {
    /// Create an empty sheet with the default grid dimensions
    pub fn new() -> Self {
        Self::with_dims(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create an empty sheet with the given grid dimensions
    pub fn with_dims(rows: u32, cols: u16) -> Self {
        Self {
            cells: BTreeMap::new(),
            rows,
            cols,
        }
    }

    /// Number of visible rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of visible columns
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Grow the visible grid by one row
    pub fn add_row(&mut self) {
        self.rows += 1;
    }

    /// Grow the visible grid by one column
    pub fn add_col(&mut self) {
        self.cols += 1;
    }

    /// Replace the visible grid dimensions
    pub fn resize(&mut self, rows: u32, cols: u16) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Number of materialized cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells are materialized
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell, if materialized
    pub fn cell(&self, addr: &CellAddress) -> Option<&Cell> {
        self.cells.get(addr)
    }

    /// Get a cell's resolved value, if the cell is materialized
    pub fn value(&self, addr: &CellAddress) -> Option<&CellValue> {
        self.cells.get(addr).map(|c| &c.value)
    }

    /// Iterate over materialized cells in row-major address order
    pub fn cells(&self) -> impl Iterator<Item = (&CellAddress, &Cell)> {
        self.cells.iter()
    }

    /// Insert a complete cell record, replacing any existing one
    pub fn insert(&mut self, addr: CellAddress, cell: Cell) {
        self.cells.insert(addr, cell);
    }

    /// Set a cell's raw content
    ///
    /// Creates the cell on first write and preserves its format on updates.
    /// Clearing the raw content of a cell with default format removes the
    /// entry entirely; a styled cell keeps its (empty) entry so the style
    /// survives. The stale `value` stands until the next recomputation.
    pub fn set_raw<S: Into<String>>(&mut self, addr: CellAddress, raw: S) {
        let raw = raw.into();
        if raw.is_empty() {
            match self.cells.get_mut(&addr) {
                Some(cell) if cell.format.is_default() => {
                    self.cells.remove(&addr);
                }
                Some(cell) => {
                    cell.raw.clear();
                }
                None => {}
            }
        } else {
            self.cells.entry(addr).or_default().raw = raw;
        }
    }

    /// Clear a cell's raw content
    pub fn clear(&mut self, addr: CellAddress) {
        self.set_raw(addr, "");
    }

    /// A cell's format flags (default for unmaterialized cells)
    pub fn format(&self, addr: &CellAddress) -> CellFormat {
        self.cells.get(addr).map(|c| c.format).unwrap_or_default()
    }

    /// Update a cell's format flags, materializing the cell if needed
    pub fn set_format(&mut self, addr: CellAddress, format: CellFormat) {
        self.cells.entry(addr).or_default().format = format;
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

// The interchange form is the flat identifier-keyed cell map alone; grid
// dimensions are hosting-session state and are not persisted.
impl Serialize for Sheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sheet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = BTreeMap::deserialize(deserializer)?;
        Ok(Self {
            cells,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn addr(s: &str) -> CellAddress {
        s.parse().unwrap()
    }

    #[test]
    fn test_set_raw_materializes_and_updates() {
        let mut sheet = Sheet::new();
        assert!(sheet.is_empty());

        sheet.set_raw(addr("A1"), "1");
        sheet.set_raw(addr("A1"), "2");
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.cell(&addr("A1")).unwrap().raw, "2");
    }

    #[test]
    fn test_clearing_unstyled_cell_removes_entry() {
        let mut sheet = Sheet::new();
        sheet.set_raw(addr("A1"), "1");
        sheet.clear(addr("A1"));
        assert!(sheet.cell(&addr("A1")).is_none());
    }

    #[test]
    fn test_clearing_styled_cell_keeps_style() {
        let mut sheet = Sheet::new();
        sheet.set_raw(addr("A1"), "1");
        sheet.set_format(
            addr("A1"),
            CellFormat {
                bold: true,
                bg: false,
            },
        );

        sheet.clear(addr("A1"));
        let cell = sheet.cell(&addr("A1")).unwrap();
        assert_eq!(cell.raw, "");
        assert!(cell.format.bold);
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let mut sheet = Sheet::new();
        sheet.set_raw(addr("B2"), "d");
        sheet.set_raw(addr("A2"), "c");
        sheet.set_raw(addr("B1"), "b");
        sheet.set_raw(addr("A1"), "a");

        let order: Vec<String> = sheet.cells().map(|(a, _)| a.to_string()).collect();
        assert_eq!(order, vec!["A1", "B1", "A2", "B2"]);
    }

    #[test]
    fn test_grow_dimensions() {
        let mut sheet = Sheet::new();
        assert_eq!(sheet.rows(), DEFAULT_ROWS);
        assert_eq!(sheet.cols(), DEFAULT_COLS);

        sheet.add_row();
        sheet.add_col();
        assert_eq!(sheet.rows(), DEFAULT_ROWS + 1);
        assert_eq!(sheet.cols(), DEFAULT_COLS + 1);
    }

    #[test]
    fn test_serde_flat_map() {
        let mut sheet = Sheet::new();
        sheet.set_raw(addr("A1"), "1");
        sheet.set_raw(addr("B1"), "=A1+1");

        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(
            json,
            "{\"A1\":{\"raw\":\"1\",\"value\":\"\"},\"B1\":{\"raw\":\"=A1+1\",\"value\":\"\"}}"
        );

        let back: Sheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_formula_may_reference_outside_grid() {
        // Dimensions bound rendering only; content outside them is allowed
        let mut sheet = Sheet::with_dims(2, 2);
        sheet.set_raw(addr("Z100"), "5");
        assert_eq!(sheet.cell(&addr("Z100")).unwrap().raw, "5");
    }
}
