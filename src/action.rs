//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to key events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus & Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch focus between the form and the entries table
    SwitchPane,
    /// Focus the next form field
    NextField,
    /// Focus the previous form field
    PrevField,
    /// Select the next table row
    NextEntry,
    /// Select the previous table row
    PrevEntry,
    /// Jump to the first table row
    FirstEntry,
    /// Jump to the last table row
    LastEntry,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a character to the focused field
    Input(char),
    /// Remove the last character from the focused field
    Backspace,
    /// Cycle the rating selector forward
    NextRating,
    /// Cycle the rating selector backward
    PrevRating,
    /// Validate the form and append the entry
    SubmitForm,

    // ─────────────────────────────────────────────────────────────────────────
    // Entry Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Delete the currently selected entry
    DeleteSelected,
    /// Wipe the persisted slot (after confirmation)
    ClearAll,
    /// Export the list as CSV
    ExportCsv,
    /// Write the HTML report
    ExportReport,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open clear-all confirmation dialog
    OpenClearConfirm,
    /// Open help overlay
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SwitchPane => write!(f, "SwitchPane"),
            Action::NextField => write!(f, "NextField"),
            Action::PrevField => write!(f, "PrevField"),
            Action::NextEntry => write!(f, "NextEntry"),
            Action::PrevEntry => write!(f, "PrevEntry"),
            Action::FirstEntry => write!(f, "FirstEntry"),
            Action::LastEntry => write!(f, "LastEntry"),
            Action::Input(c) => write!(f, "Input('{}')", c),
            Action::Backspace => write!(f, "Backspace"),
            Action::NextRating => write!(f, "NextRating"),
            Action::PrevRating => write!(f, "PrevRating"),
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::DeleteSelected => write!(f, "DeleteSelected"),
            Action::ClearAll => write!(f, "ClearAll"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::ExportReport => write!(f, "ExportReport"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenClearConfirm => write!(f, "OpenClearConfirm"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
