//! Output formatting for query results.

use clap::ValueEnum;
use logquery_core::log::LogEntry;
use serde_json::Value;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Format query results for output.
pub fn format_entries(entries: &[LogEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(entries).unwrap_or_default(),
        OutputFormat::Pretty => format_pretty(entries),
    }
}

/// Format a record as a single line: timestamp, level, then attributes.
pub fn format_entry(entry: &LogEntry) -> String {
    let mut output = format!("{} [{}]", entry.time_stamp, entry.log_level);
    for (name, value) in &entry.attributes {
        match value {
            Value::String(s) => output.push_str(&format!(" {}={}", name, s)),
            other => output.push_str(&format!(" {}={}", name, other)),
        }
    }
    output
}

fn format_pretty(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No log entries found.".to_string();
    }
    let mut output = format!("LOG ENTRIES ({})\n", entries.len());
    output.push_str(&"-".repeat(40));
    for entry in entries {
        output.push('\n');
        output.push_str(&format_entry(entry));
    }
    output
}
