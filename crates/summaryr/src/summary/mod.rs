//! Per-column summaries.
//!
//! Each column gets one of three treatments, chosen from its declared
//! type in a fixed priority order:
//!
//! 1. float columns are numeric;
//! 2. integer columns are numeric when `treat_integer_as_numeric` is set;
//! 3. date/time columns are temporal;
//! 4. everything else is categorical.

mod categorical;
mod numeric;
mod record;
pub mod render;

pub use categorical::{value_counts, CategoricalSummary, Category, CategoryCount};
pub use numeric::{NumericSummary, TemporalSummary};
pub use record::{Summary, SummaryRecord, NOTE_LABEL, OTHER_COUNT_LABEL};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::SummaryConfig;
use crate::dataset::{Column, ColumnData, DType, Dataset};
use crate::error::Result;

/// How a column is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    Numeric,
    Temporal,
    Categorical,
}

impl Treatment {
    /// Pick the treatment for a declared type. First match wins.
    pub fn classify(dtype: DType, config: &SummaryConfig) -> Self {
        if dtype.is_float() {
            Treatment::Numeric
        } else if config.treat_integer_as_numeric && dtype.is_integer() {
            Treatment::Numeric
        } else if dtype.is_temporal() {
            Treatment::Temporal
        } else {
            Treatment::Categorical
        }
    }
}

/// Summarize one column.
pub fn summarize_column(column: &Column, config: &SummaryConfig) -> SummaryRecord {
    let dtype = column.dtype();
    let treatment = Treatment::classify(dtype, config);
    debug!(column = %column.name, %dtype, ?treatment, "summarizing column");

    match (treatment, &column.data) {
        (Treatment::Numeric, ColumnData::Float(values)) => {
            SummaryRecord::Numeric(NumericSummary::from_values(values.iter().copied(), dtype))
        }
        (Treatment::Numeric, ColumnData::Integer(values)) => SummaryRecord::Numeric(
            NumericSummary::from_values(values.iter().map(|v| v.map(|n| n as f64)), dtype),
        ),
        (Treatment::Temporal, ColumnData::Temporal(values)) => {
            SummaryRecord::Temporal(TemporalSummary::from_values(values, dtype))
        }
        (_, data) => SummaryRecord::Categorical(CategoricalSummary::from_column(
            data,
            config.value_count_threshold,
        )),
    }
}

/// Summarize every column of a dataset, in column order.
///
/// Prints the rendered summary to stdout when `config.pretty_print` is set.
pub fn summarize(dataset: &Dataset, config: &SummaryConfig) -> Summary {
    let mut summary = Summary::with_capacity(dataset.column_count());
    for column in dataset.columns() {
        summary.insert(column.name.clone(), summarize_column(column, config));
    }

    if config.pretty_print {
        render::print_summary(&summary);
    }

    summary
}

/// Summarize a loosely typed JSON dataset with JSON options.
///
/// Every argument is type-checked before any column is processed: the
/// dataset must be an object of column arrays, and the options must hold
/// a boolean `treat_integer_as_numeric`, an integer
/// `value_count_threshold` and a boolean `pretty_print` when present.
pub fn summarize_json(dataset: &Value, options: &Value) -> Result<Summary> {
    let dataset = Dataset::from_json(dataset)?;
    let config = SummaryConfig::from_json(options)?;
    Ok(summarize(&dataset, &config))
}
