//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App owns the store handle and the loaded entry list;
//! every mutation goes through the store and reloads the list, so the
//! table always shows what is actually persisted.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, ClearDialog, EntriesComponent, FormComponent, HelpDialog, NoticeDialog,
    QuitDialog,
};
use crate::config::Config;
use crate::model::{validate, FeedbackEntry, FocusPane, Modal, ModalStack};
use crate::services::{export_csv, write_report, ExportOutcome, Store};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main application state - coordinates between components
pub struct App {
    /// Handle to the persisted slot
    store: Store,

    /// Loaded configuration
    config: Config,

    /// Entry list as last loaded from the store
    pub entries: Vec<FeedbackEntry>,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Which pane receives input
    pub focus: FocusPane,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message shown in the help bar
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form: FormComponent,
    pub entries_view: EntriesComponent,
    pub quit_dialog: QuitDialog,
    pub clear_dialog: ClearDialog,
    pub help_dialog: HelpDialog,
    pub notice: NoticeDialog,
}

impl App {
    /// Create a new App around an injected store.
    pub fn new(store: Store, config: Config) -> App {
        let entries = store.load();
        let mut entries_view = EntriesComponent::new();
        entries_view.clamp_selection(entries.len());
        let form = FormComponent::new(config.rating_labels.clone());

        App {
            store,
            config,
            entries,
            modals: ModalStack::new(),
            focus: FocusPane::Form,
            should_quit: false,
            status_message: None,
            form,
            entries_view,
            quit_dialog: QuitDialog,
            clear_dialog: ClearDialog,
            help_dialog: HelpDialog,
            notice: NoticeDialog,
        }
    }

    /// Reload the list from the store and re-fit the table selection.
    fn refresh(&mut self) {
        self.entries = self.store.load();
        self.entries_view.clamp_selection(self.entries.len());
    }

    fn set_focus(&mut self, focus: FocusPane) {
        self.focus = focus;
        self.form.focused = focus == FocusPane::Form;
        self.entries_view.focused = focus == FocusPane::Entries;
    }

    fn submit_form(&mut self) {
        let fields = self.form.form_fields();
        match validate(&fields) {
            Ok(entry) => match self.store.append(entry) {
                Ok(_) => {
                    self.refresh();
                    self.form.reset();
                    self.status_message = Some("Feedback recorded".to_string());
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to persist entry");
                    self.modals.push(Modal::Notice {
                        message: format!("Failed to save: {e}"),
                    });
                }
            },
            Err(e) => {
                self.modals.push(Modal::Notice {
                    message: e.to_string(),
                });
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.entries_view.selected else {
            return;
        };
        match self.store.remove(index) {
            Ok(_) => {
                self.refresh();
                self.status_message = Some("Entry deleted".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, index, "failed to delete entry");
                self.modals.push(Modal::Notice {
                    message: format!("Failed to delete: {e}"),
                });
            }
        }
    }

    fn clear_all(&mut self) {
        self.modals.pop();
        match self.store.clear() {
            Ok(()) => {
                self.refresh();
                self.status_message = Some("All entries cleared".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to clear slot");
                self.modals.push(Modal::Notice {
                    message: format!("Failed to clear: {e}"),
                });
            }
        }
    }

    fn export_csv(&mut self) {
        match export_csv(&self.entries, &self.config.csv_path()) {
            Ok(ExportOutcome::Written(path)) => {
                self.status_message = Some(format!(
                    "Exported {} entries to {}",
                    self.entries.len(),
                    path.display()
                ));
            }
            Ok(ExportOutcome::NothingToExport) => {
                self.modals.push(Modal::Notice {
                    message: "No data to export".to_string(),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "CSV export failed");
                self.modals.push(Modal::Notice {
                    message: format!("Export failed: {e}"),
                });
            }
        }
    }

    fn export_report(&mut self) {
        match write_report(&self.entries, &self.config.report_path()) {
            Ok(path) => {
                self.status_message = Some(format!("Report written to {}", path.display()));
            }
            Err(e) => {
                tracing::error!(error = %e, "report export failed");
                self.modals.push(Modal::Notice {
                    message: format!("Report failed: {e}"),
                });
            }
        }
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status_message {
            Some(msg) => Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Green),
            )),
            None => {
                let hints = match self.focus {
                    FocusPane::Form => " Tab Next field   Enter Submit   Esc Table",
                    FocusPane::Entries => {
                        " j/k Select   d Delete   e CSV   r Report   C Clear   ? Help   q Quit"
                    }
                };
                Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
            }
        };
        frame.render_widget(Paragraph::new(text), area);
    }
}

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top() {
            return match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
                Modal::ClearConfirm => self.clear_dialog.handle_key_event(key),
                Modal::Notice { .. } => self.notice.handle_key_event(key),
                Modal::Help => self.help_dialog.handle_key_event(key),
            };
        }

        match self.focus {
            FocusPane::Form => self.form.handle_key_event(key),
            FocusPane::Entries => self.entries_view.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // Any action except the idle tick retires the last status message.
        if action != Action::Tick {
            self.status_message = None;
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Focus & Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::SwitchPane => {
                self.set_focus(self.focus.toggled());
            }
            Action::NextEntry => self.entries_view.next(self.entries.len()),
            Action::PrevEntry => self.entries_view.previous(self.entries.len()),
            Action::FirstEntry => self.entries_view.first(self.entries.len()),
            Action::LastEntry => self.entries_view.last(self.entries.len()),

            // ─────────────────────────────────────────────────────────────────
            // Form Editing (delegate to FormComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::Input(_)
            | Action::Backspace
            | Action::NextField
            | Action::PrevField
            | Action::NextRating
            | Action::PrevRating => {
                self.form.update(action)?;
            }
            Action::SubmitForm => self.submit_form(),

            // ─────────────────────────────────────────────────────────────────
            // Entry Operations
            // ─────────────────────────────────────────────────────────────────
            Action::DeleteSelected => self.delete_selected(),
            Action::ClearAll => self.clear_all(),
            Action::ExportCsv => self.export_csv(),
            Action::ExportReport => self.export_report(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenClearConfirm => self.modals.push(Modal::ClearConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        self.form.draw(frame, layout.form)?;
        self.entries_view
            .draw_entries(frame, layout.entries, &self.entries)?;
        self.draw_help_bar(frame, layout.help);

        // Modals render bottom to top; only the top one gets input.
        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in modals {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::ClearConfirm => self.clear_dialog.draw(frame, area)?,
                Modal::Notice { message } => self.notice.draw_message(frame, area, &message)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormFields;
    use crate::services::SLOT_FILE;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join(SLOT_FILE));
        let config = Config {
            export_dir: Some(dir.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        (dir, App::new(store, config))
    }

    fn fill_valid_form(app: &mut App) {
        app.form.fields = FormFields {
            student_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            project: "Engines".to_string(),
            locality: String::new(),
            rating: String::new(),
            comments: String::new(),
        };
        app.form.next_rating();
    }

    #[test]
    fn test_submit_valid_form_persists_and_resets() {
        let (_dir, mut app) = test_app();
        fill_valid_form(&mut app);

        app.update(Action::SubmitForm).unwrap();

        assert_eq!(app.entries.len(), 1);
        assert_eq!(app.entries[0].student_name, "Ada");
        assert!(app.form.fields.student_name.is_empty());
        assert!(app.modals.is_empty());
        assert_eq!(app.status_message, Some("Feedback recorded".to_string()));
    }

    #[test]
    fn test_submit_invalid_email_blocks_and_keeps_list() {
        let (_dir, mut app) = test_app();
        fill_valid_form(&mut app);
        app.form.fields.email = "not-an-email".to_string();

        app.update(Action::SubmitForm).unwrap();

        assert_eq!(app.entries.len(), 0);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Notice {
                message: "A valid email is required".to_string()
            })
        );
        // Inputs are kept so the user can fix them.
        assert_eq!(app.form.fields.student_name, "Ada");
    }

    #[test]
    fn test_delete_selected_removes_exactly_one() {
        let (_dir, mut app) = test_app();
        for name in ["Ada", "Grace", "Edsger"] {
            fill_valid_form(&mut app);
            app.form.fields.student_name = name.to_string();
            app.update(Action::SubmitForm).unwrap();
        }

        app.entries_view.selected = Some(1);
        app.update(Action::DeleteSelected).unwrap();

        assert_eq!(app.entries.len(), 2);
        assert_eq!(app.entries[0].student_name, "Ada");
        assert_eq!(app.entries[1].student_name, "Edsger");
        assert_eq!(app.entries_view.selected, Some(1));
    }

    #[test]
    fn test_delete_with_no_selection_is_noop() {
        let (_dir, mut app) = test_app();
        app.entries_view.selected = None;
        app.update(Action::DeleteSelected).unwrap();
        assert!(app.entries.is_empty());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_clear_all_requires_then_consumes_confirmation() {
        let (_dir, mut app) = test_app();
        fill_valid_form(&mut app);
        app.update(Action::SubmitForm).unwrap();
        assert_eq!(app.entries.len(), 1);

        app.update(Action::OpenClearConfirm).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::ClearConfirm));

        app.update(Action::ClearAll).unwrap();
        assert!(app.entries.is_empty());
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_export_empty_list_raises_notice() {
        let (dir, mut app) = test_app();
        app.update(Action::ExportCsv).unwrap();

        assert_eq!(
            app.modals.top(),
            Some(&Modal::Notice {
                message: "No data to export".to_string()
            })
        );
        assert!(!dir.path().join("student-feedback.csv").exists());
    }

    #[test]
    fn test_export_writes_file_and_sets_status() {
        let (dir, mut app) = test_app();
        fill_valid_form(&mut app);
        app.update(Action::SubmitForm).unwrap();

        app.update(Action::ExportCsv).unwrap();

        assert!(app.modals.is_empty());
        assert!(dir.path().join("student-feedback.csv").exists());
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with("Exported 1 entries"));
    }

    #[test]
    fn test_switch_pane_moves_focus() {
        let (_dir, mut app) = test_app();
        assert_eq!(app.focus, FocusPane::Form);
        assert!(app.form.focused);

        app.update(Action::SwitchPane).unwrap();
        assert_eq!(app.focus, FocusPane::Entries);
        assert!(app.entries_view.focused);
        assert!(!app.form.focused);
    }

    #[test]
    fn test_quit_flow() {
        let (_dir, mut app) = test_app();
        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
