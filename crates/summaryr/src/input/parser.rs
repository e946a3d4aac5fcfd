//! Delimited-text reading with delimiter sniffing.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::source::{DataTable, Delimiter, SourceMetadata};
use crate::error::{Result, SummaryError};

/// Records sampled per candidate when sniffing the delimiter.
const SNIFF_RECORDS: usize = 10;

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Field separator byte (None = sniff it from the contents).
    pub delimiter: Option<u8>,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
}

/// Reads delimited text with a header row into a [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read a file and describe where it came from.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| SummaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let delimiter = self.delimiter_for(&contents)?;
        debug!(
            path = %path.display(),
            format = delimiter.format_name(),
            bytes = contents.len(),
            "parsing delimited file"
        );

        let table = self.read_table(&contents, delimiter)?;
        let source = SourceMetadata::describe(path, &contents, delimiter, &table);
        Ok((table, source))
    }

    /// Parse in-memory text.
    pub fn parse_str(&self, text: &str) -> Result<DataTable> {
        let delimiter = self.delimiter_for(text.as_bytes())?;
        self.read_table(text.as_bytes(), delimiter)
    }

    fn delimiter_for(&self, contents: &[u8]) -> Result<Delimiter> {
        match self.config.delimiter {
            Some(byte) => Ok(Delimiter::from_byte(byte)),
            None => sniff_delimiter(contents),
        }
    }

    fn read_table(&self, contents: &[u8], delimiter: Delimiter) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.byte())
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(SummaryError::EmptyData("No columns found".to_string()));
        }

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let mut rows = Vec::new();
        for record in reader.records().take(limit) {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        if rows.is_empty() {
            return Err(SummaryError::EmptyData("No data rows found".to_string()));
        }
        Ok(DataTable::from_rows(headers, rows))
    }
}

/// Pick the candidate separator that splits the leading records most
/// regularly.
///
/// A candidate must yield at least two fields on the first record. Equal
/// field counts across the sample beat ragged ones, then more fields win,
/// then the earlier candidate. Quoting is handled by the csv reader, so
/// separators inside quoted fields do not count. Falls back to comma for
/// single-column files.
fn sniff_delimiter(contents: &[u8]) -> Result<Delimiter> {
    if contents.iter().all(u8::is_ascii_whitespace) {
        return Err(SummaryError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best: Option<(Delimiter, (bool, usize))> = None;
    for candidate in Delimiter::CANDIDATES {
        let widths = field_widths(contents, candidate);
        let Some(&first) = widths.first() else {
            continue;
        };
        if first < 2 {
            continue;
        }

        let score = (widths.iter().all(|&w| w == first), first);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }

    Ok(best.map_or(Delimiter::Comma, |(delimiter, _)| delimiter))
}

/// Field counts of the leading records under one candidate separator.
fn field_widths(contents: &[u8], delimiter: Delimiter) -> Vec<usize> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.byte())
        .from_reader(contents)
        .records()
        .take(SNIFF_RECORDS)
        .map_while(|record| record.ok())
        .map(|record| record.len())
        .collect()
}
