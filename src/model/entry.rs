//! Data model for a single feedback submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One feedback submission record.
///
/// Serialized field names match the persisted slot layout
/// (`studentName`, `email`, ... `created`), so data written by earlier
/// versions of the slot stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub student_name: String,
    pub email: String,
    pub project: String,
    #[serde(default)]
    pub locality: Option<String>,
    pub rating: String,
    #[serde(default)]
    pub comments: Option<String>,
    /// Assigned once at submit time, never mutated afterwards.
    pub created: DateTime<Utc>,
}

impl FeedbackEntry {
    /// Locality for table display; absent values show as an em-dash.
    pub fn locality_display(&self) -> &str {
        match self.locality.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => "—",
        }
    }

    /// Comments for table display.
    pub fn comments_display(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }

    /// Locality as exported: absent values become the empty string.
    pub fn locality_export(&self) -> &str {
        self.locality.as_deref().unwrap_or("")
    }

    /// Comments as exported: absent values become the empty string.
    pub fn comments_export(&self) -> &str {
        self.comments.as_deref().unwrap_or("")
    }

    pub fn formatted_created(&self) -> String {
        self.created.format("%Y-%m-%d %H:%M").to_string()
    }
}
