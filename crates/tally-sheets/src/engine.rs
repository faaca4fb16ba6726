//! The engine boundary consumed by a hosting UI

use crate::recalc::{recompute_all, RecalcStats};
use tally_sheets_core::{Cell, CellAddress, CellFormat, Sheet};

/// An in-memory spreadsheet
///
/// Owns the current [`Sheet`] and keeps it resolved: every raw-content
/// mutation triggers a whole-sheet recomputation before returning. Format
/// toggles and dimension changes are not raw-content mutations and leave the
/// computed values untouched.
///
/// # Example
///
/// ```rust
/// use tally_sheets::{CellAddress, Spreadsheet};
///
/// let mut sheet = Spreadsheet::new();
/// let a1: CellAddress = "A1".parse().unwrap();
/// let b1: CellAddress = "B1".parse().unwrap();
///
/// sheet.set_cell_raw(a1, "2");
/// sheet.set_cell_raw(b1, "=A1*3");
///
/// assert_eq!(sheet.cell_display(&b1), "6");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Spreadsheet {
    sheet: Sheet,
}

impl Spreadsheet {
    /// Create an empty spreadsheet with default grid dimensions
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing sheet, resolving its values immediately
    pub fn from_sheet(sheet: Sheet) -> Self {
        let (sheet, _) = recompute_all(&sheet);
        Self { sheet }
    }

    /// The current resolved sheet
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Update one cell's raw content and recompute the whole sheet
    pub fn set_cell_raw<S: Into<String>>(&mut self, addr: CellAddress, raw: S) -> RecalcStats {
        self.sheet.set_raw(addr, raw);
        self.recompute()
    }

    /// Clear one cell's raw content and recompute the whole sheet
    pub fn clear_cell(&mut self, addr: CellAddress) -> RecalcStats {
        self.sheet.clear(addr);
        self.recompute()
    }

    /// Bulk-replace the sheet from its JSON interchange form and recompute
    ///
    /// Entries may carry previously resolved `value`s; those seed the first
    /// pass's snapshot, so an exported sheet reloads into the same state it
    /// was exported from.
    pub fn load_sheet(&mut self, json: &str) -> Result<RecalcStats, serde_json::Error> {
        let mut loaded: Sheet = serde_json::from_str(json)?;
        // Grid dimensions are session state, not part of the interchange form
        loaded.resize(self.sheet.rows(), self.sheet.cols());
        self.sheet = loaded;
        Ok(self.recompute())
    }

    /// Serialize the full cell mapping as the flat JSON interchange object
    pub fn export_sheet(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.sheet)
    }

    /// A cell's resolved value rendered for display, empty when absent
    pub fn cell_display(&self, addr: &CellAddress) -> String {
        self.sheet
            .value(addr)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    /// Full cell data, if the cell is materialized
    pub fn cell(&self, addr: &CellAddress) -> Option<&Cell> {
        self.sheet.cell(addr)
    }

    /// Flip a cell's bold flag; does not trigger recomputation
    pub fn toggle_bold(&mut self, addr: CellAddress) {
        let mut format = self.sheet.format(&addr);
        format.bold = !format.bold;
        self.sheet.set_format(addr, format);
    }

    /// Flip a cell's background highlight flag; does not trigger recomputation
    pub fn toggle_bg(&mut self, addr: CellAddress) {
        let mut format = self.sheet.format(&addr);
        format.bg = !format.bg;
        self.sheet.set_format(addr, format);
    }

    /// A cell's format flags
    pub fn format(&self, addr: &CellAddress) -> CellFormat {
        self.sheet.format(addr)
    }

    /// Number of visible rows
    pub fn rows(&self) -> u32 {
        self.sheet.rows()
    }

    /// Number of visible columns
    pub fn cols(&self) -> u16 {
        self.sheet.cols()
    }

    /// Grow the visible grid by one row
    pub fn add_row(&mut self) {
        self.sheet.add_row();
    }

    /// Grow the visible grid by one column
    pub fn add_col(&mut self) {
        self.sheet.add_col();
    }

    /// Run a recomputation pass over the current sheet
    pub fn recompute(&mut self) -> RecalcStats {
        let (sheet, stats) = recompute_all(&self.sheet);
        self.sheet = sheet;
        stats
    }
}
