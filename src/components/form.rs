//! Entry form component
//!
//! Field-by-field keyboard entry for a new feedback submission. The
//! component only collects raw text; validation happens in
//! [`crate::model::form::validate`] when the form is submitted.

use crate::action::Action;
use crate::component::Component;
use crate::model::FormFields;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The form fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StudentName,
    Email,
    Project,
    Locality,
    Rating,
    Comments,
}

impl FormField {
    fn next(self) -> FormField {
        match self {
            FormField::StudentName => FormField::Email,
            FormField::Email => FormField::Project,
            FormField::Project => FormField::Locality,
            FormField::Locality => FormField::Rating,
            FormField::Rating => FormField::Comments,
            FormField::Comments => FormField::StudentName,
        }
    }

    fn prev(self) -> FormField {
        match self {
            FormField::StudentName => FormField::Comments,
            FormField::Email => FormField::StudentName,
            FormField::Project => FormField::Email,
            FormField::Locality => FormField::Project,
            FormField::Rating => FormField::Locality,
            FormField::Comments => FormField::Rating,
        }
    }

    fn label(self) -> &'static str {
        match self {
            FormField::StudentName => "Student name *",
            FormField::Email => "Email *",
            FormField::Project => "Project / Subject *",
            FormField::Locality => "Locality",
            FormField::Rating => "Rating *",
            FormField::Comments => "Comments",
        }
    }

    const ALL: [FormField; 6] = [
        FormField::StudentName,
        FormField::Email,
        FormField::Project,
        FormField::Locality,
        FormField::Rating,
        FormField::Comments,
    ];
}

/// Entry form component
pub struct FormComponent {
    /// Raw text of the free-form fields
    pub fields: FormFields,
    /// Currently focused field
    pub focus: FormField,
    /// Labels offered by the rating selector
    pub rating_labels: Vec<String>,
    /// Index into `rating_labels`; `None` until a rating is picked
    pub rating_index: Option<usize>,
    /// Whether this pane currently receives input
    pub focused: bool,
}

impl FormComponent {
    pub fn new(rating_labels: Vec<String>) -> Self {
        Self {
            fields: FormFields::default(),
            focus: FormField::StudentName,
            rating_labels,
            rating_index: None,
            focused: true,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::StudentName => Some(&mut self.fields.student_name),
            FormField::Email => Some(&mut self.fields.email),
            FormField::Project => Some(&mut self.fields.project),
            FormField::Locality => Some(&mut self.fields.locality),
            // Rating is picked from the label list, not typed.
            FormField::Rating => None,
            FormField::Comments => Some(&mut self.fields.comments),
        }
    }

    fn text_of(&self, field: FormField) -> &str {
        match field {
            FormField::StudentName => &self.fields.student_name,
            FormField::Email => &self.fields.email,
            FormField::Project => &self.fields.project,
            FormField::Locality => &self.fields.locality,
            FormField::Rating => "",
            FormField::Comments => &self.fields.comments,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn next_rating(&mut self) {
        let len = self.rating_labels.len();
        if len == 0 {
            return;
        }
        self.rating_index = Some(match self.rating_index {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn prev_rating(&mut self) {
        let len = self.rating_labels.len();
        if len == 0 {
            return;
        }
        self.rating_index = Some(match self.rating_index {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
    }

    /// Raw field values as submitted, rating taken from the selector.
    pub fn form_fields(&self) -> FormFields {
        let rating = self
            .rating_index
            .and_then(|i| self.rating_labels.get(i))
            .cloned()
            .unwrap_or_default();
        FormFields {
            rating,
            ..self.fields.clone()
        }
    }

    /// Reset all inputs after a successful submit.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.rating_index = None;
        self.focus = FormField::StudentName;
    }

    fn rating_line(&self) -> String {
        match self.rating_index.and_then(|i| self.rating_labels.get(i)) {
            Some(label) => format!("◂ {label} ▸"),
            None => "◂ select ▸".to_string(),
        }
    }
}

impl Component for FormComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Esc => Some(Action::SwitchPane),
            KeyCode::Left if self.focus == FormField::Rating => Some(Action::PrevRating),
            KeyCode::Right if self.focus == FormField::Rating => Some(Action::NextRating),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Input(c) => self.input_char(c),
            Action::Backspace => self.backspace(),
            Action::NextField => self.next_field(),
            Action::PrevField => self.prev_field(),
            Action::NextRating => self.next_rating(),
            Action::PrevRating => self.prev_rating(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let mut lines = vec![Line::from("")];

        for field in FormField::ALL {
            let is_focused = self.focused && field == self.focus;
            let marker = if is_focused { "> " } else { "  " };

            lines.push(Line::from(Span::styled(
                format!("{marker}{}", field.label()),
                if is_focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            )));

            let value = if field == FormField::Rating {
                self.rating_line()
            } else if is_focused {
                format!("{}_", self.text_of(field))
            } else {
                self.text_of(field).to_string()
            };

            lines.push(Line::from(Span::styled(
                format!("  {value}"),
                if is_focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Enter  Submit    * required",
            Style::default().fg(Color::DarkGray),
        )));

        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New Feedback ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(paragraph, area);
        Ok(())
    }
}
