//! Schema command - show the inferred type of every column.

use std::path::PathBuf;

use colored::Colorize;
use summaryr::{Summarizer, SummarizerConfig, Treatment};

pub fn run(
    file: PathBuf,
    delimiter: Option<char>,
    max_rows: Option<usize>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let summarizer = Summarizer::with_config(SummarizerConfig {
        parser: super::parser_config(delimiter, max_rows)?,
        ..SummarizerConfig::default()
    });
    let (dataset, source) = summarizer.load(&file)?;

    println!(
        "{} {}",
        "Schema of".cyan().bold(),
        source.file.white()
    );
    println!();
    println!(
        "  {:24} {:16} {:>8} {:>8}",
        "column".yellow().bold(),
        "dtype".yellow().bold(),
        "missing".yellow().bold(),
        "rows".yellow().bold()
    );

    let summary_config = &summarizer.config().summary;
    for column in dataset.columns() {
        let missing = column.missing_count();
        let missing_text = if missing > 0 {
            missing.to_string().red()
        } else {
            missing.to_string().normal()
        };
        println!(
            "  {:24} {:16} {:>8} {:>8}",
            column.name,
            column.dtype().to_string(),
            missing_text,
            column.len()
        );
        if verbose {
            let treatment = Treatment::classify(column.dtype(), summary_config);
            println!("  {:24} {}", "", format!("{:?} treatment", treatment).dimmed());
        }
    }

    println!();
    println!(
        "{} rows, {} columns, format {}",
        source.row_count.to_string().white().bold(),
        source.column_count.to_string().white().bold(),
        source.format
    );

    Ok(())
}
