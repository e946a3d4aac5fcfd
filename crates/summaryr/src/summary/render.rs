//! Console rendering of summaries.

use colored::Colorize;

use super::record::{Summary, SummaryRecord};

/// Render one record as aligned `label  value` lines.
///
/// Labels are left-aligned and values right-aligned to common widths.
pub fn render_record(record: &SummaryRecord) -> String {
    let entries = record.entries();
    let label_width = entries.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let value_width = entries.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);

    entries
        .iter()
        .map(|(label, value)| format!("{label:<label_width$}    {value:>value_width$}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render every column: a bold `name:` header followed by the record,
/// with a blank line between columns.
pub fn render(summary: &Summary) -> String {
    summary
        .iter()
        .map(|(name, record)| format!("{}\n{}", format!("{name}:").bold(), render_record(record)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Write the rendered summary to stdout.
///
/// Bold headers follow `colored`'s terminal detection; set
/// `colored::control::set_override` to force them on piped output.
pub fn print_summary(summary: &Summary) {
    println!("{}", render(summary));
}
