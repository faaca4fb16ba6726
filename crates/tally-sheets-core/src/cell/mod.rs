//! Cell-related types
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangular range of cells (e.g., "B1:B5")
//! - [`CellValue`] - The resolved display value
//! - [`CellFormat`] - Style flags
//! - [`Cell`] - Complete cell data: raw content, value, and format

mod address;
mod data;
mod format;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use data::Cell;
pub use format::CellFormat;
pub use value::CellValue;
