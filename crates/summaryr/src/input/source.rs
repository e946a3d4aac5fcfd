//! Raw text tables and the file they were read from.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Cell spellings read as a missing value, compared case-insensitively.
const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", "none", "nil", ".", "-"];

/// Whether a raw cell stands for a missing value.
pub fn is_missing_marker(cell: &str) -> bool {
    let cell = cell.trim();
    MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m))
}

/// Field separator of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
    Pipe,
    Other(u8),
}

impl Delimiter {
    /// Separators tried by auto-detection, in order of preference.
    pub const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Tab,
        Delimiter::Comma,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'\t' => Delimiter::Tab,
            b',' => Delimiter::Comma,
            b';' => Delimiter::Semicolon,
            b'|' => Delimiter::Pipe,
            other => Delimiter::Other(other),
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Pipe => b'|',
            Delimiter::Other(byte) => byte,
        }
    }

    /// Format label recorded in [`SourceMetadata::format`].
    pub fn format_name(self) -> &'static str {
        match self {
            Delimiter::Tab => "tsv",
            Delimiter::Comma => "csv",
            Delimiter::Semicolon => "csv-semicolon",
            Delimiter::Pipe => "psv",
            Delimiter::Other(_) => "delimited",
        }
    }
}

/// A parsed text table, stored column by column.
///
/// Missing markers are already resolved to `None`, so
/// [`crate::dataset::TypeInferrer`] only sees present values.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    headers: Vec<String>,
    columns: Vec<Vec<Option<String>>>,
    rows: usize,
}

impl DataTable {
    /// Build a table from header names and row-major records.
    ///
    /// Short records are padded with missing cells; fields beyond the
    /// header are dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut columns: Vec<Vec<Option<String>>> =
            headers.iter().map(|_| Vec::with_capacity(rows.len())).collect();
        let row_count = rows.len();

        for row in rows {
            let mut fields = row.into_iter();
            for column in columns.iter_mut() {
                let cell = fields.next().filter(|f| !is_missing_marker(f));
                column.push(cell.map(|f| f.trim().to_string()));
            }
        }

        Self {
            headers,
            columns,
            rows: row_count,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows, header excluded.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column(&self, index: usize) -> Option<&[Option<String>]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    /// Header names paired with their cells, in file order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    /// A present cell; `None` for missing cells and out-of-range positions.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.columns.get(column)?.get(row)?.as_deref()
    }
}

/// Where a summarized table came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without directories.
    pub file: String,
    pub path: std::path::PathBuf,
    /// `sha256:` followed by the hex digest of the file contents.
    pub hash: String,
    pub size_bytes: u64,
    /// Format label derived from the delimiter (csv, tsv, ...).
    pub format: String,
    pub row_count: usize,
    pub column_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe a file from its raw contents and the table parsed from them.
    pub fn describe(path: &Path, contents: &[u8], delimiter: Delimiter, table: &DataTable) -> Self {
        Self {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            hash: content_hash(contents),
            size_bytes: contents.len() as u64,
            format: delimiter.format_name().to_string(),
            row_count: table.row_count(),
            column_count: table.column_count(),
            loaded_at: Utc::now(),
        }
    }
}

fn content_hash(contents: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(contents))
}
