//! Create/edit course form component
//!
//! Modal form hosting every editable field of a course. The form performs
//! its own network call on submit (through the API worker) and the App
//! applies the resulting record when the response arrives; while the
//! request is in flight the form is locked.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::{CourseDraft, CourseRecord, CourseStatus, ROLE_OPTIONS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Instructor,
    Author,
    Language,
    Price,
    ImageUrl,
    FullName,
    Role,
    Status,
}

const FIELDS: &[FormField] = &[
    FormField::Title,
    FormField::Instructor,
    FormField::Author,
    FormField::Language,
    FormField::Price,
    FormField::ImageUrl,
    FormField::FullName,
    FormField::Role,
    FormField::Status,
];

impl FormField {
    fn label(&self) -> &str {
        match self {
            FormField::Title => "Title",
            FormField::Instructor => "Instructor",
            FormField::Author => "Author",
            FormField::Language => "Language",
            FormField::Price => "Price",
            FormField::ImageUrl => "Image URL",
            FormField::FullName => "Full name",
            FormField::Role => "Role",
            FormField::Status => "Status",
        }
    }

    /// Option fields cycle with ←/→ instead of taking typed input
    fn is_choice(&self) -> bool {
        matches!(self, FormField::Role | FormField::Status)
    }
}

/// Create/edit course form
pub struct CourseFormDialog {
    /// Id of the course being edited; None when creating
    pub editing: Option<String>,
    focus: usize,
    title: String,
    instructor: String,
    author: String,
    language: String,
    price: String,
    image_url: String,
    full_name: String,
    role_index: usize,
    status: CourseStatus,
    pub error: Option<String>,
    /// Locked while the save request is in flight
    pub submitting: bool,
}

impl Default for CourseFormDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseFormDialog {
    pub fn new() -> Self {
        Self {
            editing: None,
            focus: 0,
            title: String::new(),
            instructor: String::new(),
            author: String::new(),
            language: String::new(),
            price: String::new(),
            image_url: String::new(),
            full_name: String::new(),
            role_index: 0,
            status: CourseStatus::Active,
            error: None,
            submitting: false,
        }
    }

    /// Reset to an empty form for a new course
    pub fn open_create(&mut self) {
        *self = Self::new();
    }

    /// Prefill from an existing record
    pub fn open_edit(&mut self, course: &CourseRecord) {
        *self = Self::new();
        self.editing = Some(course.id.clone());
        self.title = course.title.clone();
        self.instructor = course.instructor.clone();
        self.author = course.author.clone();
        self.language = course.language.clone();
        self.price = course.price.to_string();
        self.image_url = course.image_url.clone().unwrap_or_default();
        self.full_name = course.full_name.clone();
        self.role_index = ROLE_OPTIONS
            .iter()
            .position(|&r| r == course.role)
            .unwrap_or(0);
        self.status = course.status;
    }

    /// Validate the inputs and produce the request draft
    pub fn validate(&self) -> Result<CourseDraft, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| format!("Price is not a number: {}", self.price))?;
        if price < 0.0 {
            return Err("Price cannot be negative".to_string());
        }

        let image_url = self.image_url.trim();
        Ok(CourseDraft {
            title: self.title.trim().to_string(),
            instructor: self.instructor.trim().to_string(),
            author: self.author.trim().to_string(),
            language: self.language.trim().to_string(),
            price,
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            full_name: self.full_name.trim().to_string(),
            role: ROLE_OPTIONS[self.role_index].to_string(),
            status: self.status,
        })
    }

    pub fn mark_submitting(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// Unlock the form after a failed save
    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    fn focused(&self) -> FormField {
        FIELDS[self.focus]
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELDS.len();
    }

    fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            FIELDS.len() - 1
        } else {
            self.focus - 1
        };
    }

    fn text_value_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::Instructor => Some(&mut self.instructor),
            FormField::Author => Some(&mut self.author),
            FormField::Language => Some(&mut self.language),
            FormField::Price => Some(&mut self.price),
            FormField::ImageUrl => Some(&mut self.image_url),
            FormField::FullName => Some(&mut self.full_name),
            FormField::Role | FormField::Status => None,
        }
    }

    fn cycle_choice(&mut self, forward: bool) {
        match self.focused() {
            FormField::Role => {
                let len = ROLE_OPTIONS.len();
                self.role_index = if forward {
                    (self.role_index + 1) % len
                } else {
                    (self.role_index + len - 1) % len
                };
            }
            FormField::Status => {
                self.status = match self.status {
                    CourseStatus::Active => CourseStatus::Banned,
                    CourseStatus::Banned => CourseStatus::Active,
                };
            }
            _ => {}
        }
    }

    fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Instructor => self.instructor.clone(),
            FormField::Author => self.author.clone(),
            FormField::Language => self.language.clone(),
            FormField::Price => self.price.clone(),
            FormField::ImageUrl => self.image_url.clone(),
            FormField::FullName => self.full_name.clone(),
            FormField::Role => ROLE_OPTIONS[self.role_index].to_string(),
            FormField::Status => self.status.label().to_string(),
        }
    }
}

impl Component for CourseFormDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.submitting {
            // The request is not cancellable; wait for its response
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SubmitCourseForm)
            }
            KeyCode::Enter => {
                if self.focus == FIELDS.len() - 1 {
                    Some(Action::SubmitCourseForm)
                } else {
                    self.focus_next();
                    None
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus_next();
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.focus_prev();
                None
            }
            KeyCode::Left if self.focused().is_choice() => {
                self.cycle_choice(false);
                None
            }
            KeyCode::Right if self.focused().is_choice() => {
                self.cycle_choice(true);
                None
            }
            KeyCode::Backspace => {
                let field = self.focused();
                if let Some(value) = self.text_value_mut(field) {
                    value.pop();
                }
                None
            }
            KeyCode::Char(c) => {
                let field = self.focused();
                if let Some(value) = self.text_value_mut(field) {
                    value.push(c);
                }
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, FIELDS.len() as u16 + 7);
        frame.render_widget(Clear, popup_area);

        let title = if self.editing.is_some() {
            " Edit Course "
        } else {
            " Create Course "
        };

        let mut lines = vec![Line::from("")];
        for (idx, &field) in FIELDS.iter().enumerate() {
            let is_focused = idx == self.focus;
            let cursor = if is_focused && !field.is_choice() && !self.submitting {
                "▏"
            } else {
                ""
            };
            let value = if field.is_choice() {
                format!("‹ {} ›", self.display_value(field))
            } else {
                format!("{}{}", self.display_value(field), cursor)
            };

            let label_style = if is_focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let value_style = if is_focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("  {:<11}", field.label()), label_style),
                Span::styled(value, value_style),
            ]));
        }

        lines.push(Line::from(""));
        if self.submitting {
            lines.push(Line::from(Span::styled(
                "  Saving…",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(ref error) = self.error {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("  Ctrl+S ", Style::default().fg(Color::Yellow)),
                Span::raw("Save  "),
                Span::styled(" ↑/↓ ", Style::default().fg(Color::Cyan)),
                Span::raw("Field  "),
                Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
                Span::raw("Cancel"),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> CourseRecord {
        CourseRecord {
            id: "c-1".to_string(),
            title: "React Basics".to_string(),
            instructor: "Ada".to_string(),
            author: "Ada Lovelace".to_string(),
            language: "English".to_string(),
            price: 19.5,
            image_url: Some("https://cdn.example.com/react.png".to_string()),
            full_name: "React Basics".to_string(),
            role: "ui designer".to_string(),
            status: CourseStatus::Banned,
        }
    }

    #[test]
    fn test_open_edit_prefills_fields() {
        let mut form = CourseFormDialog::new();
        form.open_edit(&sample_course());

        assert_eq!(form.editing.as_deref(), Some("c-1"));
        let draft = form.validate().unwrap();
        assert_eq!(draft.title, "React Basics");
        assert_eq!(draft.price, 19.5);
        assert_eq!(draft.role, "ui designer");
        assert_eq!(draft.status, CourseStatus::Banned);
    }

    #[test]
    fn test_validate_requires_title() {
        let mut form = CourseFormDialog::new();
        form.price = "10".to_string();

        assert!(form.validate().is_err());
        form.title = "New course".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_price() {
        let mut form = CourseFormDialog::new();
        form.title = "T".to_string();

        form.price = "abc".to_string();
        assert!(form.validate().is_err());

        form.price = "-1".to_string();
        assert!(form.validate().is_err());

        form.price = "19.99".to_string();
        assert_eq!(form.validate().unwrap().price, 19.99);
    }

    #[test]
    fn test_empty_image_url_becomes_none() {
        let mut form = CourseFormDialog::new();
        form.title = "T".to_string();
        form.price = "0".to_string();

        assert!(form.validate().unwrap().image_url.is_none());

        form.image_url = "https://example.com/x.png".to_string();
        assert_eq!(
            form.validate().unwrap().image_url.as_deref(),
            Some("https://example.com/x.png")
        );
    }

    #[test]
    fn test_submit_failed_unlocks_form() {
        let mut form = CourseFormDialog::new();
        form.mark_submitting();
        assert!(form.submitting);

        form.submit_failed("server returned 500".to_string());
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("server returned 500"));
    }
}
