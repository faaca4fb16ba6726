//! Cell style flags

use serde::{Deserialize, Serialize};

/// Independent boolean style flags carried on a cell
///
/// Orthogonal to evaluation: recomputation passes the flags through
/// unchanged, and toggling a flag never triggers recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellFormat {
    /// Bold text
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    /// Background highlight
    #[serde(default, skip_serializing_if = "is_false")]
    pub bg: bool,
}

impl CellFormat {
    /// Check if no flags are set
    pub fn is_default(&self) -> bool {
        *self == CellFormat::default()
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_are_skipped() {
        let json = serde_json::to_string(&CellFormat::default()).unwrap();
        assert_eq!(json, "{}");

        let json = serde_json::to_string(&CellFormat {
            bold: true,
            bg: false,
        })
        .unwrap();
        assert_eq!(json, "{\"bold\":true}");
    }

    #[test]
    fn test_missing_flags_deserialize_as_unset() {
        let format: CellFormat = serde_json::from_str("{\"bg\":true}").unwrap();
        assert!(!format.bold);
        assert!(format.bg);
    }
}
