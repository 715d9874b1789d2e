//! Per-block summary printed after a run

use console::Style;
use qettableslib::BlockReport;

/// Output format of the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    /// One `file: mentions=.. maxtnum=.. rows=..` line per block
    Text,
    /// Pretty-printed JSON array of reports
    Json,
}

impl SummaryFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => SummaryFormat::Json,
            _ => SummaryFormat::Text,
        }
    }
}

/// Render the summary of all written blocks.
pub fn render_summary(reports: &[BlockReport], format: SummaryFormat) -> anyhow::Result<String> {
    match format {
        SummaryFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(reports)?)),
        SummaryFormat::Text => {
            let file_style = Style::new().bold();
            Ok(reports
                .iter()
                .map(|r| {
                    format!(
                        "{}: mentions={} maxtnum={} rows={}\n",
                        file_style.apply_to(r.file.display()),
                        r.mentions,
                        r.max_terminal_number,
                        r.rows
                    )
                })
                .collect())
        }
    }
}
