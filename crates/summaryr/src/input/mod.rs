//! Input parsing and data source handling.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{is_missing_marker, DataTable, Delimiter, SourceMetadata};
