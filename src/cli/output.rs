//! Run summary formatting
//!
//! The rendered table itself goes to the output file; what reaches stdout
//! is a short summary of the run, as human-readable text or JSON.

use crate::catalog::generator::RunSummary;
use anyhow::{Context, Result};

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Human,
    Json,
}

pub fn format_summary(summary: &RunSummary, format: SummaryFormat) -> Result<String> {
    match format {
        SummaryFormat::Human => Ok(format_human(summary)),
        SummaryFormat::Json => {
            serde_json::to_string_pretty(summary).context("Failed to serialize run summary")
        }
    }
}

fn format_human(summary: &RunSummary) -> String {
    let mut lines = vec![
        format!("Base path: {}", summary.base_path.display()),
        format!("Found {} service files", summary.discovered),
    ];

    if summary.discovered == 0 {
        lines.push("No service files found!".to_string());
        return lines.join("\n");
    }

    lines.push(format!("Deprecated services: {}", summary.deprecated_excluded));

    if let Some(output) = &summary.output {
        lines.push(format!("Wrote {} rows to {}", summary.rows, output.display()));
    } else if summary.drift {
        lines.push("Services table is out of date".to_string());
    } else {
        lines.push("Services table is up to date".to_string());
    }

    lines.join("\n")
}
