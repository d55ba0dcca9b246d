//! HTML report of the feedback list
//!
//! Renders the entries as an HTML table, the same projection the results
//! pane shows on screen. Building the markup is a pure string function so
//! the escaping rules are testable on their own.

use crate::model::FeedbackEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the written report.
pub const REPORT_FILE: &str = "student-feedback.html";

/// Replace `& < > " '` with named entities before insertion into markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the entry list as an HTML table.
///
/// Rows carry a 1-based row number and every field HTML-escaped. An empty
/// list renders a placeholder paragraph instead of a table.
pub fn render_table(entries: &[FeedbackEntry]) -> String {
    if entries.is_empty() {
        return "<p class=\"empty\">No feedback submitted yet.</p>\n".to_string();
    }

    let mut html = String::new();
    html.push_str("<table>\n<thead>\n<tr>");
    for heading in [
        "#", "Name", "Email", "Project", "Locality", "Rating", "Comments", "Created",
    ] {
        html.push_str(&format!("<th>{heading}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for (idx, entry) in entries.iter().enumerate() {
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", idx + 1));
        for field in [
            entry.student_name.as_str(),
            entry.email.as_str(),
            entry.project.as_str(),
            entry.locality_export(),
            entry.rating.as_str(),
            entry.comments_export(),
        ] {
            html.push_str(&format!("<td>{}</td>", escape_html(field)));
        }
        html.push_str(&format!("<td>{}</td>", entry.formatted_created()));
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// Write the report as a standalone HTML document.
pub fn write_report(entries: &[FeedbackEntry], path: &Path) -> Result<PathBuf> {
    let body = render_table(entries);
    let document = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Student Feedback</title>\n</head>\n<body>\n<h1>Student Feedback</h1>\n{body}</body>\n</html>\n"
    );
    fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), count = entries.len(), "wrote HTML report");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> FeedbackEntry {
        FeedbackEntry {
            student_name: "<script>".to_string(),
            email: "a@b.com".to_string(),
            project: "Tom & Jerry".to_string(),
            locality: None,
            rating: "5".to_string(),
            comments: Some("she said \"hi\", then 'bye'".to_string()),
            created: "2024-05-01T10:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_escape_html_covers_all_five() {
        assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_script_tag_never_unescaped() {
        let html = render_table(&[entry()]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_rows_numbered_from_one() {
        let entries = vec![entry(), entry()];
        let html = render_table(&entries);
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn test_absent_optionals_render_empty() {
        let html = render_table(&[entry()]);
        // Locality is absent: an empty cell, not "null" or "undefined".
        assert!(html.contains("<td></td>"));
        assert!(!html.contains("null"));
        assert!(!html.contains("undefined"));
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let html = render_table(&[]);
        assert!(!html.contains("<table>"));
        assert!(html.contains("No feedback submitted yet."));
    }

    #[test]
    fn test_quotes_in_comments_escaped() {
        let html = render_table(&[entry()]);
        assert!(html.contains("she said &quot;hi&quot;, then &#39;bye&#39;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }
}
