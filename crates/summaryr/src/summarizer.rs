//! Main Summarizer struct and public API.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::SummaryConfig;
use crate::dataset::{Dataset, InferenceConfig, TypeInferrer};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::summary::{self, Summary};

/// Configuration for the whole file-to-summary pipeline.
#[derive(Debug, Clone, Default)]
pub struct SummarizerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Type inference configuration.
    pub inference: InferenceConfig,
    /// Summary options.
    pub summary: SummaryConfig,
}

/// Result of summarizing a data file.
#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Per-column summaries.
    pub summary: Summary,
}

impl FileSummary {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads tabular files and summarizes their columns.
pub struct Summarizer {
    config: SummarizerConfig,
    parser: Parser,
    inferrer: TypeInferrer,
}

impl Summarizer {
    /// Create a new summarizer with default configuration.
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create a summarizer with custom configuration.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let inferrer = TypeInferrer::with_config(config.inference.clone());
        Self {
            config,
            parser,
            inferrer,
        }
    }

    pub fn treat_integer_as_numeric(mut self, enabled: bool) -> Self {
        self.config.summary.treat_integer_as_numeric = enabled;
        self
    }

    pub fn value_count_threshold(mut self, threshold: i64) -> Self {
        self.config.summary.value_count_threshold = threshold;
        self
    }

    pub fn pretty_print(mut self, enabled: bool) -> Self {
        self.config.summary.pretty_print = enabled;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize an in-memory dataset.
    pub fn summarize(&self, dataset: &Dataset) -> Summary {
        summary::summarize(dataset, &self.config.summary)
    }

    /// Parse a file and infer its column types.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;
        let dataset = self.inferrer.infer(&table)?;
        info!(
            file = %source.file,
            rows = source.row_count,
            columns = source.column_count,
            "loaded dataset"
        );
        Ok((dataset, source))
    }

    /// Parse, infer and summarize a file.
    pub fn summarize_file(&self, path: impl AsRef<Path>) -> Result<FileSummary> {
        let (dataset, source) = self.load(path)?;
        let summary = self.summarize(&dataset);
        Ok(FileSummary { source, summary })
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}
