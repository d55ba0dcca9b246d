//! CSV export of the feedback list
//!
//! Column order is fixed and every field is quoted, with embedded quotes
//! doubled by the writer. Newlines inside comments are collapsed to single
//! spaces so each record stays on one line.

use crate::model::FeedbackEntry;
use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the exported file.
pub const CSV_FILE: &str = "student-feedback.csv";

/// Fixed header row of the export.
pub const CSV_HEADER: [&str; 7] = [
    "Student Name",
    "Email",
    "Project",
    "Locality",
    "Rating",
    "Comments",
    "Created",
];

/// Result of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written to this path.
    Written(PathBuf),
    /// The list was empty; no file was produced.
    NothingToExport,
}

/// Export the list to `path`. An empty list produces no file and is
/// reported so the caller can raise a user-visible notice.
pub fn export_csv(entries: &[FeedbackEntry], path: &Path) -> Result<ExportOutcome> {
    if entries.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let csv = csv_string(entries)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create export directory {}", parent.display())
            })?;
        }
    }
    fs::write(path, csv).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = entries.len(), "exported CSV");
    Ok(ExportOutcome::Written(path.to_path_buf()))
}

/// Build the CSV document as a string.
pub fn csv_string(entries: &[FeedbackEntry]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        let comments = collapse_newlines(entry.comments_export());
        let created = entry.created.to_rfc3339();
        writer.write_record([
            entry.student_name.as_str(),
            entry.email.as_str(),
            entry.project.as_str(),
            entry.locality_export(),
            entry.rating.as_str(),
            comments.as_str(),
            created.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Collapse line breaks to single spaces so a record stays on one line.
fn collapse_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace('\n', " ")
}
