//! Resolved cell values

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Display marker for a contained evaluation failure
const ERR_MARKER: &str = "ERR";

/// The resolved display value of a cell
///
/// Literals resolve to [`CellValue::Text`] with no numeric coercion; numeric
/// interpretation happens only when another formula references the cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric formula result
    Number(f64),
    /// Literal text, or a textual formula result (AVG renders as text)
    Text(String),
    /// Contained evaluation failure, displayed as the literal `ERR`
    Error,
}

impl CellValue {
    /// Create a text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Numeric interpretation of the value, if it has one
    ///
    /// Text parses as a whole (trimmed); partial prefixes like `"5x"` do not
    /// count as numeric. Returns `None` for `ERR` and non-numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            CellValue::Error => None,
        }
    }

    /// Check if this value is the `ERR` marker
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Text(s) => f.write_str(s),
            CellValue::Error => f.write_str(ERR_MARKER),
        }
    }
}

// Values serialize as plain JSON scalars, numbers as numbers and text as
// strings; `ERR` becomes the marker string and reads back as text, which
// evaluates identically.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Error => serializer.serialize_str(ERR_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ValueVisitor;

        impl Visitor<'_> for ValueVisitor {
            type Value = CellValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a string")
            }

            fn visit_f64<E: de::Error>(self, n: f64) -> Result<CellValue, E> {
                Ok(CellValue::Number(n))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<CellValue, E> {
                Ok(CellValue::Number(n as f64))
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<CellValue, E> {
                Ok(CellValue::Number(n as f64))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<CellValue, E> {
                Ok(CellValue::Text(s.to_string()))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number() {
        assert_eq!(CellValue::Number(3.5).as_number(), Some(3.5));
        assert_eq!(CellValue::text("42").as_number(), Some(42.0));
        assert_eq!(CellValue::text(" 2.5 ").as_number(), Some(2.5));
        assert_eq!(CellValue::text("hello").as_number(), None);
        assert_eq!(CellValue::text("5x").as_number(), None);
        assert_eq!(CellValue::text("").as_number(), None);
        assert_eq!(CellValue::Error.as_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::Number(3.25).to_string(), "3.25");
        assert_eq!(CellValue::text("hi").to_string(), "hi");
        assert_eq!(CellValue::Error.to_string(), "ERR");
    }

    #[test]
    fn test_serde_scalars() {
        assert_eq!(serde_json::to_string(&CellValue::Number(3.0)).unwrap(), "3.0");
        assert_eq!(
            serde_json::to_string(&CellValue::text("hi")).unwrap(),
            "\"hi\""
        );
        assert_eq!(serde_json::to_string(&CellValue::Error).unwrap(), "\"ERR\"");

        assert_eq!(
            serde_json::from_str::<CellValue>("42").unwrap(),
            CellValue::Number(42.0)
        );
        assert_eq!(
            serde_json::from_str::<CellValue>("\"42\"").unwrap(),
            CellValue::text("42")
        );
        // The marker reads back as text; recomputation regenerates it
        assert_eq!(
            serde_json::from_str::<CellValue>("\"ERR\"").unwrap(),
            CellValue::text("ERR")
        );
    }
}
