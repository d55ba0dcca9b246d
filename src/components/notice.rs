//! Notice popup component
//!
//! A blocking message box used for validation failures and export
//! notices. Any key dismisses it; until then nothing else receives input.

use crate::action::Action;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Blocking notice popup; the message lives in the modal stack entry.
#[derive(Default)]
pub struct NoticeDialog;

impl NoticeDialog {
    pub fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(Some(Action::CloseModal))
    }

    pub fn draw_message(&self, frame: &mut Frame, area: Rect, message: &str) -> Result<()> {
        let width = (message.len() as u16 + 6).clamp(30, 60);
        let popup_area = centered_popup(area, width, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Notice ")
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
