//! summaryr: R-style per-column summaries for tabular datasets.
//!
//! Every column of a dataset is classified from its declared type and
//! summarized accordingly:
//!
//! - **Numeric** (floats, and integers on request): count, mean, standard
//!   deviation, min, quartiles, max, plus the missing-value count.
//! - **Temporal** (dates and timestamps): the same statistics on the
//!   timeline, without a spread measure.
//! - **Categorical** (everything else): value counts, missing values
//!   included, with rare categories optionally pooled into one bucket.
//!
//! # Example
//!
//! ```no_run
//! use summaryr::Summarizer;
//!
//! let summarizer = Summarizer::new().value_count_threshold(6);
//! let result = summarizer.summarize_file("iris.csv").unwrap();
//!
//! for (column, record) in result.summary.iter() {
//!     println!("{column}: {}", record.dtype());
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod summary;

mod summarizer;

pub use crate::summarizer::{FileSummary, Summarizer, SummarizerConfig};
pub use config::SummaryConfig;
pub use dataset::{Column, ColumnData, DType, Dataset, InferenceConfig, TypeInferrer};
pub use error::{Result, SummaryError};
pub use input::{DataTable, Delimiter, Parser, ParserConfig, SourceMetadata};
pub use summary::{
    summarize, summarize_json, CategoricalSummary, Category, CategoryCount, NumericSummary,
    Summary, SummaryRecord, TemporalSummary, Treatment,
};
