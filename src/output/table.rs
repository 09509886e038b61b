//! Markdown table rendering
//!
//! Column widths are self-sizing: each column is as wide as its longest
//! cell or its header, measured in characters rather than bytes so the
//! DRM glyph column stays one cell wide. Rows are sorted by service name,
//! case-insensitively, before the display transform is applied.

use crate::catalog::record::ServiceRecord;
use chrono::{DateTime, Local};

const HEADERS: [&str; 5] = ["Site Name", "Stream Type", "DRM", "Max Resolution", "Region"];

const DRM_PRESENT: &str = "✅";
const DRM_ABSENT: &str = "❌";

const TIMESTAMP_PREFIX: &str = "*Last updated:";

/// Renders the services overview document.
///
/// The caller supplies the generation timestamp so rendering stays a pure
/// function of its inputs.
pub fn render_table(records: &[ServiceRecord], generated_at: DateTime<Local>) -> String {
    let mut sorted: Vec<&ServiceRecord> = records.iter().collect();
    sorted.sort_by_cached_key(|r| r.name.to_lowercase());

    let rows: Vec<[String; 5]> = sorted
        .iter()
        .map(|record| {
            [
                display_label(&record.name),
                record.stream_type_display().to_string(),
                drm_glyph(record.supports_drm).to_string(),
                record.max_resolution_display().to_string(),
                record.region_display().to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (width, header) in widths.iter_mut().zip(HEADERS.iter()) {
        *width = char_len(header);
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(char_len(cell));
        }
    }

    let mut lines = vec!["# Services Overview".to_string(), String::new()];

    let header_cells: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(header, *width))
        .collect();
    lines.push(format!("| {} |", header_cells.join(" | ")));

    let separators: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
    lines.push(format!("|{}|", separators.join("|")));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(format!(
        "{} {}*",
        TIMESTAMP_PREFIX,
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(String::new());

    lines.join("\n")
}

/// Compares two rendered documents, ignoring the timestamp line.
///
/// Used by check mode: regenerating an unchanged catalog alters only the
/// timestamp, which must not count as drift.
pub fn matches_ignoring_timestamp(left: &str, right: &str) -> bool {
    without_timestamp(left) == without_timestamp(right)
}

fn without_timestamp(document: &str) -> Vec<&str> {
    document
        .lines()
        .filter(|line| !line.starts_with(TIMESTAMP_PREFIX))
        .collect()
}

fn drm_glyph(supports_drm: bool) -> &'static str {
    if supports_drm {
        DRM_PRESENT
    } else {
        DRM_ABSENT
    }
}

/// Human-readable label: underscores become spaces, then each word is
/// title-cased the way Python's `str.title` does it (a letter following a
/// non-letter is uppercased, every other letter lowercased).
fn display_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut label = String::with_capacity(spaced.len());
    let mut prev_is_letter = false;
    for ch in spaced.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                label.extend(ch.to_lowercase());
            } else {
                label.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            label.push(ch);
            prev_is_letter = false;
        }
    }
    label
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Left-justify to `width` characters
fn pad(value: &str, width: usize) -> String {
    let mut padded = String::from(value);
    for _ in char_len(value)..width {
        padded.push(' ');
    }
    padded
}
