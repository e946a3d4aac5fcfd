//! Column type inference for parsed text tables.

use tracing::debug;

use super::column::{Column, ColumnData};
use super::datetime::parse_datetime;
use super::dtype::DType;
use super::Dataset;
use crate::error::Result;
use crate::input::DataTable;

/// Settings for type inference.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Detect date and timestamp columns.
    pub parse_dates: bool,
    /// Detect `true`/`false`/`yes`/`no` columns.
    pub parse_booleans: bool,
    /// Store integer columns that contain missing cells as floats.
    pub integers_with_nulls_as_float: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            parse_dates: true,
            parse_booleans: true,
            integers_with_nulls_as_float: false,
        }
    }
}

/// Converts string tables into typed datasets.
#[derive(Debug, Clone, Default)]
pub struct TypeInferrer {
    config: InferenceConfig,
}

impl TypeInferrer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Infer a declared type for every column and convert the cells.
    pub fn infer(&self, table: &DataTable) -> Result<Dataset> {
        let mut dataset = Dataset::new();
        for (name, cells) in table.columns() {
            let cells: Vec<Option<&str>> = cells.iter().map(Option::as_deref).collect();

            let dtype = self.infer_dtype(&cells);
            debug!(column = %name, %dtype, "inferred column type");
            dataset.push_column(Column::new(name, convert(&cells, dtype)))?;
        }
        Ok(dataset)
    }

    /// Pick the declared type for a column from its non-missing cells.
    fn infer_dtype(&self, cells: &[Option<&str>]) -> DType {
        let present: Vec<&str> = cells.iter().flatten().copied().collect();

        // An all-missing column reads as NaN floats.
        if present.is_empty() {
            return DType::Float64;
        }

        if present.iter().all(|v| v.parse::<i64>().is_ok()) {
            let has_missing = present.len() < cells.len();
            if has_missing && self.config.integers_with_nulls_as_float {
                return DType::Float64;
            }
            return DType::Int64;
        }

        if present.iter().all(|v| v.parse::<f64>().is_ok()) {
            return DType::Float64;
        }

        if self.config.parse_booleans && present.iter().all(|v| parse_bool(v).is_some()) {
            return DType::Bool;
        }

        if self.config.parse_dates && present.iter().all(|v| parse_datetime(v).is_some()) {
            return DType::DateTime;
        }

        DType::Object
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// Convert cells to typed values. `dtype` must have been inferred from the
/// same cells, so every present cell parses.
fn convert(cells: &[Option<&str>], dtype: DType) -> ColumnData {
    match dtype {
        DType::Float64 => ColumnData::Float(
            cells.iter().map(|c| c.and_then(|v| v.parse::<f64>().ok())).collect(),
        ),
        DType::Int64 => ColumnData::Integer(
            cells.iter().map(|c| c.and_then(|v| v.parse::<i64>().ok())).collect(),
        ),
        DType::DateTime => {
            ColumnData::Temporal(cells.iter().map(|c| c.and_then(parse_datetime)).collect())
        }
        DType::Bool => ColumnData::Boolean(cells.iter().map(|c| c.and_then(parse_bool)).collect()),
        DType::Object => ColumnData::Text(cells.iter().map(|c| c.map(str::to_string)).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::from_rows(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    fn dtypes(dataset: &Dataset) -> Vec<DType> {
        dataset.columns().iter().map(Column::dtype).collect()
    }

    #[test]
    fn test_infer_column_kinds() {
        let table = make_table(
            vec!["int", "float", "date", "flag", "text"],
            vec![
                vec!["1", "1.5", "2023-01-01", "true", "a"],
                vec!["2", "2", "2023-01-02", "no", "b"],
                vec!["3", "3.25", "2023-01-03 12:00:00", "Yes", "7"],
            ],
        );
        let dataset = TypeInferrer::new().infer(&table).unwrap();

        assert_eq!(
            dtypes(&dataset),
            vec![DType::Int64, DType::Float64, DType::DateTime, DType::Bool, DType::Object]
        );
    }

    #[test]
    fn test_missing_cells_become_none() {
        let table = make_table(vec!["value"], vec![vec!["1"], vec!["NA"], vec!["3"], vec![""]]);
        let dataset = TypeInferrer::new().infer(&table).unwrap();

        assert_eq!(
            dataset.columns()[0].data,
            ColumnData::Integer(vec![Some(1), None, Some(3), None])
        );
    }

    #[test]
    fn test_integers_with_nulls_as_float() {
        let table = make_table(vec!["value"], vec![vec!["1"], vec!["NA"]]);
        let inferrer = TypeInferrer::with_config(InferenceConfig {
            integers_with_nulls_as_float: true,
            ..InferenceConfig::default()
        });
        let dataset = inferrer.infer(&table).unwrap();

        assert_eq!(dataset.columns()[0].data, ColumnData::Float(vec![Some(1.0), None]));
    }

    #[test]
    fn test_all_missing_column_is_float() {
        let table = make_table(vec!["empty"], vec![vec![""], vec!["NA"]]);
        let dataset = TypeInferrer::new().infer(&table).unwrap();
        assert_eq!(dtypes(&dataset), vec![DType::Float64]);
    }

    #[test]
    fn test_dates_disabled_stay_text() {
        let table = make_table(vec!["when"], vec![vec!["2023-01-01"], vec!["2023-02-01"]]);
        let inferrer = TypeInferrer::with_config(InferenceConfig {
            parse_dates: false,
            ..InferenceConfig::default()
        });
        let dataset = inferrer.infer(&table).unwrap();
        assert_eq!(dtypes(&dataset), vec![DType::Object]);
    }
}
