//! Help dialog showing all key bindings

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help overlay
#[derive(Default)]
pub struct HelpDialog;

fn binding(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {key:<11}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description.to_string()),
    ])
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 52, 20);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                " Form",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            binding("Tab/↓ ↑", "Next / previous field"),
            binding("← →", "Pick a rating"),
            binding("Enter", "Submit the form"),
            binding("Esc", "Jump to the submissions table"),
            Line::from(""),
            Line::from(Span::styled(
                " Submissions",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            binding("j/k ↓ ↑", "Select row"),
            binding("g/G", "First / last row"),
            binding("d/Del", "Delete selected entry"),
            binding("e", "Export CSV"),
            binding("r", "Write HTML report"),
            binding("C", "Clear all entries"),
            binding("Tab/Esc", "Back to the form"),
            binding("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                " Press Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
