//! Row action menu component
//!
//! The overflow menu of a table row: Edit or Delete the course it was
//! opened for. Its cursor is local UI state and never leaks into the
//! table's model.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

const MENU_ENTRIES: &[&str] = &["Edit", "Delete"];

/// Action menu for the selected row
pub struct RowMenuDialog {
    /// Title of the course the menu was opened for
    pub course_title: String,
    pub selected_index: usize,
    list_state: ListState,
}

impl Default for RowMenuDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl RowMenuDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            course_title: String::new(),
            selected_index: 0,
            list_state,
        }
    }

    /// Point the menu at a course and reset the cursor
    pub fn open_for(&mut self, course_title: &str) {
        self.course_title = course_title.to_string();
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < MENU_ENTRIES.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for RowMenuDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Enter => match self.selected_index {
                0 => Some(Action::EditSelected),
                _ => Some(Action::DeleteSelected),
            },
            KeyCode::Char('e') => Some(Action::EditSelected),
            KeyCode::Char('x') => Some(Action::DeleteSelected),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 36, 8);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = MENU_ENTRIES
            .iter()
            .map(|&entry| {
                let style = if entry == "Delete" {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(entry, style)))
            })
            .collect();

        let mut title = self.course_title.clone();
        if title.len() > 28 {
            title.truncate(25);
            title.push_str("...");
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, popup_area, &mut self.list_state);
        Ok(())
    }
}
