//! # tally-sheets-core
//!
//! Core data structures for the tally-sheets spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout tally-sheets:
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and rectangular ranges
//! - [`CellValue`] - Resolved display values (numbers, text, the `ERR` marker)
//! - [`CellFormat`] - Independent boolean style flags
//! - [`Sheet`] - The sparse cell container with its grid dimensions
//!
//! ## Example
//!
//! ```rust
//! use tally_sheets_core::{CellAddress, Sheet};
//!
//! let mut sheet = Sheet::new();
//!
//! // Using string addresses
//! let a1: CellAddress = "A1".parse().unwrap();
//! sheet.set_raw(a1, "Hello");
//!
//! // Or using row/column indices (0-based)
//! sheet.set_raw(CellAddress::new(0, 1), "42");
//!
//! assert_eq!(sheet.cell(&a1).map(|c| c.raw.as_str()), Some("Hello"));
//! ```

pub mod cell;
pub mod error;
pub mod sheet;

// Re-exports for convenience
pub use cell::{Cell, CellAddress, CellFormat, CellRange, CellValue};
pub use error::{Error, Result};
pub use sheet::Sheet;

/// Maximum number of columns in a sheet (single-letter columns, A-Z)
pub const MAX_COLS: u16 = 26;
