//! Typed tabular datasets.
//!
//! A [`Dataset`] is an ordered list of equally long, uniquely named
//! [`Column`]s. Datasets are built directly, inferred from a parsed
//! [`crate::DataTable`] with [`TypeInferrer`], or decoded from JSON.

mod column;
pub mod datetime;
mod dtype;
mod inference;
mod json;

pub(crate) use column::bool_label;
pub use column::{Column, ColumnData};
pub use dtype::DType;
pub use inference::{InferenceConfig, TypeInferrer};
pub use json::json_type_name;

use crate::error::{Result, SummaryError};

/// An ordered collection of named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from columns, checking lengths and names.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let mut dataset = Self::new();
        for column in columns {
            dataset.push_column(column)?;
        }
        Ok(dataset)
    }

    /// Append a column.
    ///
    /// Fails if the name is already taken or the length differs from the
    /// columns already present.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.column(&column.name).is_some() {
            return Err(SummaryError::DuplicateColumn(column.name));
        }
        if let Some(expected) = self.row_count() {
            let actual = column.len();
            if actual != expected {
                return Err(SummaryError::ColumnLength {
                    column: column.name,
                    expected,
                    actual,
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Builder-style [`Dataset::push_column`].
    pub fn with_column(mut self, column: Column) -> Result<Self> {
        self.push_column(column)?;
        Ok(self)
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, or `None` for a dataset without columns.
    pub fn row_count(&self) -> Option<usize> {
        self.columns.first().map(Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_ragged_columns() {
        let err = Dataset::new()
            .with_column(Column::float("a", vec![Some(1.0), Some(2.0)]))
            .and_then(|d| d.with_column(Column::integer("b", vec![Some(1)])))
            .unwrap_err();

        match err {
            SummaryError::ColumnLength { column, expected, actual } => {
                assert_eq!(column, "b");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = Dataset::from_columns([
            Column::integer("a", vec![Some(1)]),
            Column::integer("a", vec![Some(2)]),
        ])
        .unwrap_err();
        assert!(matches!(err, SummaryError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_preserves_column_order() {
        let dataset = Dataset::from_columns([
            Column::integer("z", vec![Some(1)]),
            Column::integer("a", vec![Some(2)]),
            Column::integer("m", vec![Some(3)]),
        ])
        .unwrap();
        assert_eq!(dataset.column_names().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(dataset.row_count(), Some(1));
    }
}
