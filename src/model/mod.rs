//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `FeedbackEntry` - one persisted feedback submission
//! - `FormFields` / `validate` - form input and its validation
//! - `ModalStack` - modal overlay management
//! - `FocusPane` - presentation state

pub mod entry;
pub mod form;
pub mod modal;
pub mod ui;

// Re-export commonly used types
pub use entry::FeedbackEntry;
pub use form::{validate, FormFields, ValidationError};
pub use modal::{Modal, ModalStack};
pub use ui::FocusPane;
