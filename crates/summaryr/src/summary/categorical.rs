//! Frequency tables and the rare-category rollup.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::dataset::datetime::format_datetime;
use crate::dataset::{bool_label, ColumnData, DType};

/// A distinct value of a categorical column.
///
/// Values are compared by their display form. The missing marker is a
/// category of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Missing,
    Value(String),
}

impl Category {
    pub fn value(s: impl Into<String>) -> Self {
        Category::Value(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Category::Missing)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Missing => f.write_str("NaN"),
            Category::Value(s) => f.write_str(s),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Category::Missing => serializer.serialize_none(),
            Category::Value(s) => serializer.serialize_str(s),
        }
    }
}

/// Occurrence count of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: Category,
    pub count: usize,
}

/// Frequency table of a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalSummary {
    /// Retained categories, most frequent first.
    pub counts: Vec<CategoryCount>,
    /// Total of the rare categories pooled by the rollup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_count: Option<usize>,
    /// Explanation attached when the rollup applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub dtype: DType,
}

impl CategoricalSummary {
    /// Count the values of a column and apply the rollup for `threshold`.
    pub fn from_column(data: &ColumnData, threshold: i64) -> Self {
        Self::from_counts(value_counts(data), threshold, data.dtype())
    }

    /// Apply the rollup to counts already sorted by descending frequency.
    ///
    /// Categories counted fewer than `threshold` times are rare. They are
    /// pooled only when `threshold > 1` and at least two are rare.
    pub fn from_counts(counts: Vec<CategoryCount>, threshold: i64, dtype: DType) -> Self {
        let is_rare = |c: &CategoryCount| i64::try_from(c.count).map_or(false, |n| n < threshold);
        let rare = counts.iter().filter(|c| is_rare(c)).count();

        if threshold > 1 && rare > 1 {
            let (kept, pooled): (Vec<_>, Vec<_>) = counts.into_iter().partition(|c| !is_rare(c));
            Self {
                counts: kept,
                other_count: Some(pooled.iter().map(|c| c.count).sum()),
                note: Some(format!("at least two value counts <{threshold} threshold")),
                dtype,
            }
        } else {
            Self {
                counts,
                other_count: None,
                note: None,
                dtype,
            }
        }
    }

    /// Whether rare categories were pooled.
    pub fn is_rolled_up(&self) -> bool {
        self.other_count.is_some()
    }

    /// Count for a category, if it was retained.
    pub fn count_of(&self, category: &Category) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| &c.value == category)
            .map(|c| c.count)
    }

    /// Sum of retained counts and the pooled count.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum::<usize>() + self.other_count.unwrap_or(0)
    }
}

/// Occurrence counts of every distinct value, missing included, most
/// frequent first. Equal counts keep first-appearance order.
pub fn value_counts(data: &ColumnData) -> Vec<CategoryCount> {
    let mut counts: IndexMap<Category, usize> = IndexMap::new();
    for category in categories(data) {
        *counts.entry(category).or_insert(0) += 1;
    }

    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(value, count)| CategoryCount { value, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Coerce each value to its generic display form.
fn categories(data: &ColumnData) -> Box<dyn Iterator<Item = Category> + '_> {
    fn wrap<T>(value: &Option<T>, show: impl Fn(&T) -> String) -> Category {
        value.as_ref().map_or(Category::Missing, |v| Category::Value(show(v)))
    }

    match data {
        ColumnData::Float(v) => Box::new(v.iter().map(|x| match x {
            Some(f) if !f.is_nan() => Category::Value(f.to_string()),
            _ => Category::Missing,
        })),
        ColumnData::Integer(v) => Box::new(v.iter().map(|x| wrap(x, i64::to_string))),
        ColumnData::Temporal(v) => Box::new(v.iter().map(|x| wrap(x, format_datetime))),
        ColumnData::Boolean(v) => Box::new(v.iter().map(|x| wrap(x, |b| bool_label(*b).to_string()))),
        ColumnData::Text(v) => Box::new(v.iter().map(|x| wrap(x, String::clone))),
    }
}
