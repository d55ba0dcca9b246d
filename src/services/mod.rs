//! Services - persistence and export
//!
//! Side-effecting operations on the feedback list: the JSON slot, the CSV
//! export, and the HTML report.

pub mod export;
pub mod report;
pub mod store;

pub use export::{export_csv, ExportOutcome, CSV_FILE};
pub use report::{write_report, REPORT_FILE};
pub use store::{Store, SLOT_FILE};
