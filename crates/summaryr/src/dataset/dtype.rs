//! Declared element kinds for dataset columns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared element type of a column.
///
/// The names follow the conventions of dataframe libraries so that
/// summaries read the same as the output users already know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    /// 64-bit floating point numbers.
    #[serde(rename = "float64")]
    Float64,
    /// 64-bit signed integers.
    #[serde(rename = "int64")]
    Int64,
    /// Timestamps without timezone.
    #[serde(rename = "datetime64[ns]")]
    DateTime,
    /// Boolean values.
    #[serde(rename = "bool")]
    Bool,
    /// Anything else: text and mixed values.
    #[serde(rename = "object")]
    Object,
}

impl DType {
    /// Returns true if this is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::Float64)
    }

    /// Returns true if this is an integer type.
    pub fn is_integer(&self) -> bool {
        matches!(self, DType::Int64)
    }

    /// Returns true if this is a date/time type.
    pub fn is_temporal(&self) -> bool {
        matches!(self, DType::DateTime)
    }

    /// Display name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Float64 => "float64",
            DType::Int64 => "int64",
            DType::DateTime => "datetime64[ns]",
            DType::Bool => "bool",
            DType::Object => "object",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_are_exclusive() {
        for dtype in [DType::Float64, DType::Int64, DType::DateTime, DType::Bool, DType::Object] {
            let hits = [dtype.is_float(), dtype.is_integer(), dtype.is_temporal()]
                .iter()
                .filter(|&&b| b)
                .count();
            assert!(hits <= 1, "{dtype} matched {hits} predicates");
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(DType::Float64.to_string(), "float64");
        assert_eq!(DType::DateTime.to_string(), "datetime64[ns]");
        assert_eq!(DType::Object.to_string(), "object");
    }

    #[test]
    fn test_serialized_names_match_display() {
        for dtype in [DType::Float64, DType::Int64, DType::DateTime, DType::Bool, DType::Object] {
            let value = serde_json::to_value(dtype).unwrap();
            assert_eq!(value, serde_json::Value::String(dtype.name().to_string()));
        }
    }
}
