//! Submissions table component
//!
//! Projects the current entry list into the visible table. The component
//! never caches entries; the app hands it the freshly loaded list on every
//! draw. When the list is empty the table is replaced by a placeholder.

use crate::action::Action;
use crate::model::FeedbackEntry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a single column may grow.
const MAX_COL_WIDTH: usize = 28;

const HEADERS: [&str; 8] = [
    "#", "Name", "Email", "Project", "Locality", "Rating", "Comments", "Created",
];

/// Submissions table with a selectable row
pub struct EntriesComponent {
    /// Selected row index, `None` while the list is empty
    pub selected: Option<usize>,
    /// First visible row
    scroll: usize,
    /// Whether this pane currently receives input
    pub focused: bool,
}

impl Default for EntriesComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl EntriesComponent {
    pub fn new() -> Self {
        Self {
            selected: None,
            scroll: 0,
            focused: false,
        }
    }

    /// Re-fit the selection after the list changed length.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = if len == 0 {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(len - 1))
        };
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(0);
        }
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(len - 1);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextEntry),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevEntry),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstEntry),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastEntry),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Char('e') => Some(Action::ExportCsv),
            KeyCode::Char('r') => Some(Action::ExportReport),
            KeyCode::Char('C') => Some(Action::OpenClearConfirm),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Tab | KeyCode::Esc => Some(Action::SwitchPane),
            _ => None,
        };
        Ok(action)
    }

    /// Build display cells for each entry: 1-based row number first.
    pub fn build_rows(entries: &[FeedbackEntry]) -> Vec<Vec<String>> {
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                vec![
                    (idx + 1).to_string(),
                    entry.student_name.clone(),
                    entry.email.clone(),
                    entry.project.clone(),
                    entry.locality_display().to_string(),
                    entry.rating.clone(),
                    entry.comments_display().to_string(),
                    entry.formatted_created(),
                ]
            })
            .collect()
    }

    fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }
        for width in &mut widths {
            *width = (*width).min(MAX_COL_WIDTH);
        }
        widths
    }

    fn truncate(cell: &str, width: usize) -> String {
        if cell.width() <= width {
            return cell.to_string();
        }
        let mut out = String::new();
        for c in cell.chars() {
            if out.width() + 4 > width {
                break;
            }
            out.push(c);
        }
        format!("{out}...")
    }

    fn row_spans(row: &[String], widths: &[usize], style: Style) -> Vec<Span<'static>> {
        row.iter()
            .enumerate()
            .flat_map(|(i, cell)| {
                let width = widths.get(i).copied().unwrap_or(8);
                let truncated = Self::truncate(cell, width);
                let pad = width.saturating_sub(truncated.width());
                vec![
                    Span::styled(format!("{truncated}{}", " ".repeat(pad)), style),
                    Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect()
    }

    /// Draw the table (or the empty-state placeholder) for the given list.
    pub fn draw_entries(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entries: &[FeedbackEntry],
    ) -> Result<()> {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Submissions ({}) ", entries.len()))
            .border_style(Style::default().fg(border_color));

        if entries.is_empty() {
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No feedback submitted yet.",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    "Fill in the form and press Enter.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
            frame.render_widget(placeholder, area);
            return Ok(());
        }

        let rows = Self::build_rows(entries);
        let widths = Self::column_widths(&rows);

        let mut lines = Vec::new();
        let header_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let header_row: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        lines.push(Line::from(Self::row_spans(
            &header_row,
            &widths,
            header_style,
        )));

        let separator: String = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));

        // Keep the selected row inside the visible window.
        let visible = area.height.saturating_sub(4) as usize;
        if let Some(sel) = self.selected {
            if sel < self.scroll {
                self.scroll = sel;
            } else if visible > 0 && sel >= self.scroll + visible {
                self.scroll = sel + 1 - visible;
            }
        }

        for (idx, row) in rows.iter().enumerate().skip(self.scroll) {
            let style = if Some(idx) == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Self::row_spans(row, &widths, style)));
        }

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> FeedbackEntry {
        FeedbackEntry {
            student_name: name.to_string(),
            email: "a@b.com".to_string(),
            project: "P".to_string(),
            locality: None,
            rating: "5".to_string(),
            comments: None,
            created: "2024-05-01T10:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let rows = EntriesComponent::build_rows(&[entry("Ada"), entry("Grace")]);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[1][0], "2");
        assert_eq!(rows[1][1], "Grace");
    }

    #[test]
    fn test_absent_locality_displays_dash() {
        let rows = EntriesComponent::build_rows(&[entry("Ada")]);
        assert_eq!(rows[0][4], "—");
        assert_eq!(rows[0][6], "");
    }

    #[test]
    fn test_selection_clamps_after_deletion() {
        let mut c = EntriesComponent::new();
        c.selected = Some(2);
        c.clamp_selection(2);
        assert_eq!(c.selected, Some(1));
        c.clamp_selection(0);
        assert_eq!(c.selected, None);
        c.clamp_selection(3);
        assert_eq!(c.selected, Some(0));
    }

    #[test]
    fn test_navigation_bounds() {
        let mut c = EntriesComponent::new();
        c.next(0);
        assert_eq!(c.selected, None);

        c.next(3);
        assert_eq!(c.selected, Some(0));
        c.next(3);
        c.next(3);
        c.next(3);
        assert_eq!(c.selected, Some(2));

        c.previous(3);
        assert_eq!(c.selected, Some(1));
        c.first(3);
        assert_eq!(c.selected, Some(0));
        c.last(3);
        assert_eq!(c.selected, Some(2));
    }

    #[test]
    fn test_truncate_respects_width() {
        let cell = "a-rather-long-project-name";
        let out = EntriesComponent::truncate(cell, 10);
        assert!(out.ends_with("..."));
        assert!(out.width() <= 10);
        assert_eq!(EntriesComponent::truncate("short", 10), "short");
    }
}
