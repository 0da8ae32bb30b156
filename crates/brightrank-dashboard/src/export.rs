//! CSV export of report mentions.

use brightrank_core::Report;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::DashboardError;

const CSV_HEADER: &str = "Platform,Snippet,Sentiment,Date";

/// Mentions of `report` as CSV.
///
/// The header row is bare; every data field is double-quoted with embedded
/// quotes doubled. Rows are separated by `\n` with no trailing newline.
///
/// # Errors
///
/// Returns [`DashboardError::Csv`] if a row cannot be encoded.
pub fn mentions_csv(report: &Report) -> Result<String, DashboardError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for mention in &report.analysis.mentions {
        writer.write_record([
            mention.platform.as_str(),
            mention.snippet.as_str(),
            mention.sentiment.as_str(),
            mention.date.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DashboardError::Csv(e.into_error().into()))?;
    let rows = String::from_utf8_lossy(&bytes);

    let mut out = String::from(CSV_HEADER);
    if let Some(rows) = rows.strip_suffix('\n') {
        out.push('\n');
        out.push_str(rows);
    }
    Ok(out)
}

/// File name for a report's mention export: every character outside
/// `[A-Za-z0-9]` becomes `_`, the result is lowercased, and `_mentions.csv`
/// is appended.
#[must_use]
pub fn export_filename(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{slug}_mentions.csv")
}
