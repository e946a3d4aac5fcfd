//! Describe command - summarize every column of a data file.

use std::fs;

use colored::Colorize;
use summaryr::summary::render::render;
use summaryr::{FileSummary, InferenceConfig, Summarizer, SummarizerConfig, SummaryConfig};
use tracing::debug;

use crate::cli::DescribeArgs;

/// Where the rendered console summary goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Console {
    Off,
    Stdout,
    /// JSON owns stdout.
    Stderr,
}

impl Console {
    fn choose(pretty_requested: bool, json_to_stdout: bool, json_to_file: bool) -> Self {
        match (pretty_requested || !(json_to_stdout || json_to_file), json_to_stdout) {
            (false, _) => Console::Off,
            (true, false) => Console::Stdout,
            (true, true) => Console::Stderr,
        }
    }
}

pub fn run(args: DescribeArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let mut summary_config = match &args.options {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("Cannot read options file {}: {}", path.display(), e))?;
            let value: serde_json::Value = serde_json::from_str(&text)?;
            SummaryConfig::from_json(&value)?
        }
        None => SummaryConfig::default(),
    };

    if args.int_as_numeric {
        summary_config.treat_integer_as_numeric = true;
    }
    if let Some(threshold) = args.threshold {
        summary_config.value_count_threshold = threshold;
    }

    let pretty_requested = args.pretty || summary_config.pretty_print;
    let console = Console::choose(pretty_requested, args.json, args.output.is_some());
    if pretty_requested {
        colored::control::set_override(true);
    }
    // The library prints to stdout; stderr rendering is done here.
    summary_config.pretty_print = console == Console::Stdout;
    debug!(?summary_config, ?console, "summary options");

    let config = SummarizerConfig {
        parser: super::parser_config(args.delimiter, args.max_rows)?,
        inference: InferenceConfig {
            parse_dates: !args.no_dates,
            integers_with_nulls_as_float: args.int_nulls_as_float,
            ..InferenceConfig::default()
        },
        summary: summary_config,
    };
    let summarizer = Summarizer::with_config(config);

    let (dataset, source) = summarizer.load(&args.file)?;

    let header = format!(
        "{} {} ({} rows, {} columns)",
        "Summary of".cyan().bold(),
        source.file.white(),
        source.row_count,
        source.column_count
    );
    match console {
        Console::Stdout => {
            println!("{header}");
            if verbose {
                println!("{} {}", "Source hash:".dimmed(), source.hash.dimmed());
            }
            println!();
        }
        Console::Stderr => eprintln!("{header}\n"),
        Console::Off => {}
    }

    let summary = summarizer.summarize(&dataset);
    if console == Console::Stderr {
        eprintln!("{}", render(&summary));
    }
    let result = FileSummary { source, summary };

    if args.json || args.output.is_some() {
        let json = result.to_json()?;
        if args.json {
            println!("{}", json);
        }
        if let Some(path) = &args.output {
            fs::write(path, &json).map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
            eprintln!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
    }

    Ok(())
}
