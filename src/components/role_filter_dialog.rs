//! Role filter dialog component
//!
//! Allows restricting the course table to a single role. The role list is
//! closed and known ahead of time; the first entry is the `all` sentinel.

use crate::action::Action;
use crate::component::Component;
use crate::model::ROLE_OPTIONS;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Role filter dialog
pub struct RoleFilterDialog {
    pub selected_index: usize,
    list_state: ListState,
    /// Active role filter when the dialog was opened, if any
    current_filter: Option<String>,
}

impl Default for RoleFilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleFilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
            current_filter: None,
        }
    }

    /// Reset the dialog against the currently active filter
    pub fn open_with(&mut self, current_filter: Option<&str>) {
        self.current_filter = current_filter.map(String::from);

        // Start the cursor on the active role, or the sentinel
        self.selected_index = current_filter
            .and_then(|role| ROLE_OPTIONS.iter().position(|&r| r == role))
            .map(|idx| idx + 1)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    /// The role under the cursor (None means the `all` sentinel)
    pub fn selected_role(&self) -> Option<&'static str> {
        if self.selected_index == 0 {
            None
        } else {
            ROLE_OPTIONS.get(self.selected_index - 1).copied()
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < ROLE_OPTIONS.len() {
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

impl Component for RoleFilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => match self.selected_role() {
                Some(role) => Some(Action::SetRoleFilter(role.to_string())),
                None => Some(Action::ClearRoleFilter),
            },
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
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (ROLE_OPTIONS.len() as u16 + 9).min(area.height.saturating_sub(2));

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Role list
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header_text = match self.current_filter {
            Some(ref role) => format!("Current: {}", role),
            None => "No role filter active".to_string(),
        };
        let header = Paragraph::new(Line::from(Span::styled(
            header_text,
            Style::default().fg(Color::Cyan),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by Role ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(vec![
            Span::styled(
                if self.current_filter.is_none() {
                    "● "
                } else {
                    "  "
                },
                Style::default().fg(Color::Green),
            ),
            Span::styled("all roles", Style::default().fg(Color::DarkGray)),
        ]))];

        for &role in ROLE_OPTIONS {
            let is_current = self.current_filter.as_deref() == Some(role);
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    if is_current { "● " } else { "  " },
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    role,
                    if is_current {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}
