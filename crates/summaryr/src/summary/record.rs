//! Summary records and the per-dataset summary map.

use std::ops::Index;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;

use super::categorical::CategoricalSummary;
use super::numeric::{NumericSummary, TemporalSummary};
use crate::dataset::datetime::format_datetime;
use crate::dataset::DType;

/// Label of the pooled rare-category entry.
pub const OTHER_COUNT_LABEL: &str = "other_count *";
/// Label of the rollup note entry.
pub const NOTE_LABEL: &str = "* note:";

/// Summary of one column, by treatment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryRecord {
    Numeric(NumericSummary),
    Temporal(TemporalSummary),
    Categorical(CategoricalSummary),
}

impl SummaryRecord {
    /// Declared type of the summarized column.
    pub fn dtype(&self) -> DType {
        match self {
            SummaryRecord::Numeric(s) => s.dtype,
            SummaryRecord::Temporal(s) => s.dtype,
            SummaryRecord::Categorical(s) => s.dtype,
        }
    }

    /// Missing-value count for numeric and temporal records, when non-zero.
    pub fn nulls(&self) -> Option<usize> {
        match self {
            SummaryRecord::Numeric(s) => s.nulls,
            SummaryRecord::Temporal(s) => s.nulls,
            SummaryRecord::Categorical(_) => None,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericSummary> {
        match self {
            SummaryRecord::Numeric(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_temporal(&self) -> Option<&TemporalSummary> {
        match self {
            SummaryRecord::Temporal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalSummary> {
        match self {
            SummaryRecord::Categorical(s) => Some(s),
            _ => None,
        }
    }

    /// The record as ordered label/value pairs, trailing metadata last.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        let mut push = |label: &str, value: String| entries.push((label.to_string(), value));

        match self {
            SummaryRecord::Numeric(s) => {
                push("count", s.count.to_string());
                push("mean", format_stat(s.mean));
                push("std", format_stat(s.std));
                push("min", format_stat(s.min));
                push("25%", format_stat(s.q1));
                push("50%", format_stat(s.median));
                push("75%", format_stat(s.q3));
                push("max", format_stat(s.max));
                if let Some(nulls) = s.nulls {
                    push("nulls", nulls.to_string());
                }
                push("dtype", s.dtype.to_string());
            }
            SummaryRecord::Temporal(s) => {
                let instant = |v: Option<NaiveDateTime>| {
                    v.as_ref().map_or_else(|| "NaT".to_string(), format_datetime)
                };
                push("count", s.count.to_string());
                push("mean", instant(s.mean));
                push("min", instant(s.min));
                push("25%", instant(s.q1));
                push("50%", instant(s.median));
                push("75%", instant(s.q3));
                push("max", instant(s.max));
                if let Some(nulls) = s.nulls {
                    push("nulls", nulls.to_string());
                }
                push("dtype", s.dtype.to_string());
            }
            SummaryRecord::Categorical(s) => {
                for c in &s.counts {
                    push(&c.value.to_string(), c.count.to_string());
                }
                if let Some(other) = s.other_count {
                    push(OTHER_COUNT_LABEL, other.to_string());
                }
                push("dtype", s.dtype.to_string());
                if let Some(note) = &s.note {
                    push(NOTE_LABEL, note.clone());
                }
            }
        }

        entries
    }
}

/// Format a statistic: six decimals at most, `NaN` when undefined.
fn format_stat(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return "NaN".to_string();
    };
    let mut s = format!("{v:.6}");
    let trimmed = s.trim_end_matches('0').len();
    s.truncate(trimmed);
    if s.ends_with('.') {
        s.push('0');
    }
    s
}

/// Per-column summaries keyed by column name, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    records: IndexMap<String, SummaryRecord>,
}

impl Summary {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, name: String, record: SummaryRecord) {
        self.records.insert(name, record);
    }

    pub fn get(&self, column: &str) -> Option<&SummaryRecord> {
        self.records.get(column)
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SummaryRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the summary, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, SummaryRecord> {
        self.records
    }
}

impl Index<&str> for Summary {
    type Output = SummaryRecord;

    fn index(&self, column: &str) -> &SummaryRecord {
        &self.records[column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::categorical::{Category, CategoryCount};

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(Some(5.843333333)), "5.843333");
        assert_eq!(format_stat(Some(3.0)), "3.0");
        assert_eq!(format_stat(Some(0.25)), "0.25");
        assert_eq!(format_stat(None), "NaN");
        assert_eq!(format_stat(Some(f64::NAN)), "NaN");
    }

    #[test]
    fn test_numeric_entries_order() {
        let record = SummaryRecord::Numeric(NumericSummary::from_values(
            [Some(1.0), None, Some(3.0)],
            DType::Float64,
        ));
        let labels: Vec<String> = record.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max", "nulls", "dtype"]
        );
    }

    #[test]
    fn test_category_named_dtype_does_not_collide() {
        let record = SummaryRecord::Categorical(CategoricalSummary::from_counts(
            vec![CategoryCount {
                value: Category::value("dtype"),
                count: 2,
            }],
            1,
            DType::Object,
        ));
        let entries = record.entries();
        assert_eq!(entries[0], ("dtype".to_string(), "2".to_string()));
        assert_eq!(entries[1], ("dtype".to_string(), "object".to_string()));

        let categorical = record.as_categorical().unwrap();
        assert_eq!(categorical.count_of(&Category::value("dtype")), Some(2));
    }

    #[test]
    fn test_rolled_up_entries_end_with_note() {
        let record = SummaryRecord::Categorical(CategoricalSummary::from_counts(
            vec![
                CategoryCount { value: Category::value("a"), count: 5 },
                CategoryCount { value: Category::value("b"), count: 1 },
                CategoryCount { value: Category::Missing, count: 1 },
            ],
            2,
            DType::Object,
        ));
        let labels: Vec<String> = record.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(labels, vec!["a", OTHER_COUNT_LABEL, "dtype", NOTE_LABEL]);
    }
}
