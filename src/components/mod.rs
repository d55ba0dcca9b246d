//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod clear_dialog;
pub mod entries;
pub mod form;
pub mod help_dialog;
pub mod layout;
pub mod notice;
pub mod quit_dialog;

pub use clear_dialog::ClearDialog;
pub use entries::EntriesComponent;
pub use form::FormComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use notice::NoticeDialog;
pub use quit_dialog::QuitDialog;
