//! CLI command implementations.

pub mod describe;
pub mod schema;

use summaryr::ParserConfig;

/// Parser configuration from the `--delimiter` and `--max-rows` flags.
pub(crate) fn parser_config(
    delimiter: Option<char>,
    max_rows: Option<usize>,
) -> Result<ParserConfig, Box<dyn std::error::Error>> {
    let delimiter = match delimiter {
        Some(c) if c.is_ascii() => Some(c as u8),
        Some(c) => return Err(format!("Delimiter must be a single ASCII character, got '{}'", c).into()),
        None => None,
    };
    Ok(ParserConfig { delimiter, max_rows })
}
