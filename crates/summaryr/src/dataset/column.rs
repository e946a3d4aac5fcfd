//! Typed columns.

use chrono::NaiveDateTime;

use super::dtype::DType;

/// Display label of a boolean cell.
pub(crate) fn bool_label(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Values of a column, tagged by their declared kind.
///
/// `None` is the missing marker for every kind. Float columns also treat
/// `NaN` as missing.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Float(Vec<Option<f64>>),
    Integer(Vec<Option<i64>>),
    Temporal(Vec<Option<NaiveDateTime>>),
    Boolean(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    /// The declared type of these values.
    pub fn dtype(&self) -> DType {
        match self {
            ColumnData::Float(_) => DType::Float64,
            ColumnData::Integer(_) => DType::Int64,
            ColumnData::Temporal(_) => DType::DateTime,
            ColumnData::Boolean(_) => DType::Bool,
            ColumnData::Text(_) => DType::Object,
        }
    }

    /// Number of values, missing ones included.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float(v) => v.len(),
            ColumnData::Integer(v) => v.len(),
            ColumnData::Temporal(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing values.
    pub fn missing_count(&self) -> usize {
        match self {
            ColumnData::Float(v) => v.iter().filter(|x| !matches!(x, Some(f) if !f.is_nan())).count(),
            ColumnData::Integer(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnData::Temporal(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnData::Boolean(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnData::Text(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }
}

/// A named column of a [`crate::Dataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column values.
    pub data: ColumnData,
}

impl Column {
    /// Create a column from a name and values.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn float(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ColumnData::Float(values))
    }

    pub fn integer(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Self::new(name, ColumnData::Integer(values))
    }

    pub fn temporal(name: impl Into<String>, values: Vec<Option<NaiveDateTime>>) -> Self {
        Self::new(name, ColumnData::Temporal(values))
    }

    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Self::new(name, ColumnData::Boolean(values))
    }

    /// Create a text column. Accepts anything string-like.
    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<Option<S>>) -> Self {
        Self::new(
            name,
            ColumnData::Text(values.into_iter().map(|v| v.map(Into::into)).collect()),
        )
    }

    /// The declared type of this column.
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of missing values.
    pub fn missing_count(&self) -> usize {
        self.data.missing_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_counts_as_missing() {
        let col = Column::float("x", vec![Some(1.0), Some(f64::NAN), None]);
        assert_eq!(col.missing_count(), 2);
        assert_eq!(col.len(), 3);
    }

    #[test]
    fn test_text_constructor_accepts_str() {
        let col = Column::text("c", vec![Some("a"), None]);
        assert_eq!(col.dtype(), DType::Object);
        assert_eq!(col.missing_count(), 1);
    }
}
