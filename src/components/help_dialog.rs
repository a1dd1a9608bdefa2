//! Help dialog showing all keyboard shortcuts

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Key bindings shown in the help overlay, as (key, description) pairs
/// grouped by section. An empty key starts a new section.
const BINDINGS: &[(&str, &str)] = &[
    ("", "Navigation"),
    ("j/k, ↓/↑", "Move between rows"),
    ("g/G", "First / last row on the page"),
    ("Tab / Shift+Tab", "Cycle status tabs (all, active, banned)"),
    ("h/l, ←/→", "Previous / next page"),
    ("", "Table"),
    ("1-5", "Sort by column; repeat to flip direction"),
    ("z", "Cycle rows per page (5, 10, 25)"),
    ("d", "Toggle dense rows"),
    ("/", "Search by name"),
    ("f", "Filter by role"),
    ("Esc", "Clear active filters"),
    ("", "Courses"),
    ("n", "New course"),
    ("Enter", "Row actions menu"),
    ("e", "Edit selected course"),
    ("x", "Delete selected course"),
    ("R", "Reload from server"),
    ("", "General"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Keyboard shortcut reference overlay
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let popup_height = 24u16.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let mut lines = Vec::new();
        for &(key, description) in BINDINGS {
            if key.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    description,
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<16}", key), Style::default().fg(Color::Yellow)),
                    Span::styled(description, Style::default().fg(Color::White)),
                ]));
            }
        }

        let visible = (popup_height as usize).saturating_sub(2);
        let max_offset = lines.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let paragraph = Paragraph::new(lines)
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(paragraph, popup_area);

        Ok(())
    }
}
