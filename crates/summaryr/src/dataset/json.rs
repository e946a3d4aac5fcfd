//! Decoding datasets from loosely typed JSON.
//!
//! A JSON dataset is an object mapping column names to arrays of cells,
//! e.g. `{"x": [1.5, null, 3.0], "label": ["a", "b", null]}`. Column
//! kinds are inferred from the cells; `null` is the missing marker.

use serde_json::{Map, Value};

use super::column::{bool_label, Column, ColumnData};
use super::datetime::parse_datetime;
use super::Dataset;
use crate::error::{Result, SummaryError};

/// Runtime type name of a JSON value, as used in type errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Dataset {
    /// Decode a dataset from a JSON object of column arrays.
    ///
    /// Fails with a type error when `value` is not an object or a column
    /// is not an array, and with a length error for ragged columns.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(columns) = value else {
            return Err(SummaryError::type_error(
                "dataset",
                "tabular dataset",
                json_type_name(value),
            ));
        };
        decode_columns(columns)
    }
}

fn decode_columns(columns: &Map<String, Value>) -> Result<Dataset> {
    // Type-check every column before building any of them.
    let mut arrays = Vec::with_capacity(columns.len());
    for (name, cells) in columns {
        match cells {
            Value::Array(cells) => arrays.push((name, cells)),
            other => {
                return Err(SummaryError::type_error(
                    "dataset",
                    "tabular dataset",
                    format!("object with {} column '{}'", json_type_name(other), name),
                ));
            }
        }
    }

    let mut dataset = Dataset::new();
    for (name, cells) in arrays {
        dataset.push_column(Column::new(name.clone(), decode_cells(cells)))?;
    }
    Ok(dataset)
}

fn decode_cells(cells: &[Value]) -> ColumnData {
    let present: Vec<&Value> = cells.iter().filter(|v| !v.is_null()).collect();

    if present.is_empty() {
        return ColumnData::Float(vec![None; cells.len()]);
    }

    if present.iter().all(|v| v.is_i64()) {
        return ColumnData::Integer(cells.iter().map(Value::as_i64).collect());
    }

    if present.iter().all(|v| v.is_number()) {
        return ColumnData::Float(cells.iter().map(Value::as_f64).collect());
    }

    if present.iter().all(|v| v.is_boolean()) {
        return ColumnData::Boolean(cells.iter().map(Value::as_bool).collect());
    }

    if present
        .iter()
        .all(|v| v.as_str().and_then(parse_datetime).is_some())
    {
        return ColumnData::Temporal(
            cells
                .iter()
                .map(|v| v.as_str().and_then(parse_datetime))
                .collect(),
        );
    }

    ColumnData::Text(
        cells
            .iter()
            .map(|v| match v {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                Value::Bool(b) => Some(bool_label(*b).to_string()),
                other => Some(other.to_string()),
            })
            .collect(),
    )
}
