//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App owns the domain state and is the only place the course
//! collection is mutated; everything else proposes changes through
//! Actions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_course_screen, CourseFormDialog, CourseListComponent, CourseRenderContext, HelpDialog,
    QuitDialog, RoleFilterDialog, RowMenuDialog,
};
use crate::config::Config;
use crate::model::{DomainState, LoadState, Modal, ModalStack};
use crate::services::{ApiEvent, ApiWorker, CourseApi};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tracing::{error, info};

/// Main application state - coordinates between components
pub struct App {
    /// Domain state (the course collection and its load lifecycle)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Background API worker
    worker: ApiWorker,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Transient success notice shown in the status bar
    pub status_message: Option<String>,

    /// Transient failure notice shown in the status bar
    pub error: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub list: CourseListComponent,
    pub form: CourseFormDialog,
    pub role_filter_dialog: RoleFilterDialog,
    pub row_menu: RowMenuDialog,
    pub help_dialog: HelpDialog,
    pub quit_dialog: QuitDialog,
}

impl App {
    /// Create a new App instance talking to the configured API
    pub fn new(config: &Config) -> App {
        App {
            domain: DomainState::new(),
            modals: ModalStack::new(),
            worker: ApiWorker::new(CourseApi::new(config.api_base_url.clone())),
            should_quit: false,
            status_message: None,
            error: None,
            list: CourseListComponent::new(),
            form: CourseFormDialog::new(),
            role_filter_dialog: RoleFilterDialog::new(),
            row_menu: RowMenuDialog::new(),
            help_dialog: HelpDialog::default(),
            quit_dialog: QuitDialog,
        }
    }

    /// Drain completed API requests and fold them into the domain state
    fn poll_api_events(&mut self) {
        while let Some(event) = self.worker.try_next() {
            match event {
                ApiEvent::CoursesLoaded(Ok(courses)) => {
                    info!(count = courses.len(), "course collection loaded");
                    self.domain.replace_all(courses);
                    let total = self.list.filtered(&self.domain.courses).len();
                    self.list.controls.clamp_page(total);
                    self.list.select_first(&self.domain.courses);
                }
                ApiEvent::CoursesLoaded(Err(e)) => {
                    error!("failed to load courses: {e}");
                    self.domain.load_state = LoadState::Failed(e.to_string());
                }
                ApiEvent::CourseDeleted { id, result } => {
                    self.domain.end_mutation(&id);
                    match result {
                        Ok(()) => {
                            info!(id = %id, "course deleted");
                            self.domain.remove_course(&id);
                            self.status_message =
                                Some("Delete Course successfully".to_string());
                            self.error = None;
                            let total = self.list.filtered(&self.domain.courses).len();
                            self.list.controls.clamp_page(total);
                            self.list.clamp_selection(&self.domain.courses);
                        }
                        Err(e) => {
                            error!(id = %id, "failed to delete course: {e}");
                            self.error = Some(format!("Delete failed: {e}"));
                        }
                    }
                }
                ApiEvent::CourseSaved { id, result } => {
                    if let Some(ref id) = id {
                        self.domain.end_mutation(id);
                    }
                    match result {
                        Ok(course) => {
                            info!(id = %course.id, "course saved");
                            self.domain.apply_saved(course, id.as_deref());
                            // The modal closes on success whether or not the
                            // update found its target
                            if matches!(self.modals.top(), Some(Modal::CourseForm { .. })) {
                                self.modals.pop();
                            }
                            self.form.submitting = false;
                            self.status_message = Some(
                                if id.is_some() {
                                    "Update Course successfully"
                                } else {
                                    "Create Course successfully"
                                }
                                .to_string(),
                            );
                            self.error = None;
                            self.list.clamp_selection(&self.domain.courses);
                        }
                        Err(e) => {
                            error!("failed to save course: {e}");
                            self.form.submit_failed(e.to_string());
                        }
                    }
                }
            }
        }
    }

    /// Open the edit form for the selected course
    fn edit_selected(&mut self) {
        let Some(course) = self.list.selected_course(&self.domain.courses) else {
            return;
        };
        if self.domain.is_in_flight(&course.id) {
            self.status_message = Some("A change for this course is still in flight".to_string());
            return;
        }
        if matches!(self.modals.top(), Some(Modal::RowMenu)) {
            self.modals.pop();
        }
        self.form.open_edit(&course);
        self.modals.push(Modal::CourseForm {
            editing: Some(course.id),
        });
    }

    /// Delete the selected course through the API
    fn delete_selected(&mut self) {
        let Some(course) = self.list.selected_course(&self.domain.courses) else {
            return;
        };
        if self.domain.is_in_flight(&course.id) {
            self.status_message = Some("A change for this course is still in flight".to_string());
            return;
        }
        if matches!(self.modals.top(), Some(Modal::RowMenu)) {
            self.modals.pop();
        }
        info!(id = %course.id, "deleting course");
        self.domain.begin_mutation(&course.id);
        self.worker.delete_course(course.id);
    }

    /// Validate the form and hand its draft to the worker
    fn submit_form(&mut self) {
        if self.form.submitting {
            return;
        }
        match self.form.validate() {
            Ok(draft) => {
                let id = self.form.editing.clone();
                if let Some(ref id) = id {
                    self.domain.begin_mutation(id);
                }
                self.form.mark_submitting();
                self.worker.save_course(draft, id);
            }
            Err(message) => {
                self.form.error = Some(message);
            }
        }
    }

    fn reload_courses(&mut self) {
        info!("reloading course collection");
        self.domain.load_state = LoadState::Loading;
        self.status_message = None;
        self.error = None;
        self.worker.fetch_courses();
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::RowMenu => self.row_menu.handle_key_event(key),
            Modal::CourseForm { .. } => self.form.handle_key_event(key),
            Modal::RoleFilter => self.role_filter_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        info!("fetching course collection");
        self.worker.fetch_courses();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }
        if self.list.search_mode {
            return self.handle_search_key_event(key);
        }
        self.list.handle_key_event(key)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.poll_api_events(),
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to CourseListComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow => self.list.next_row(&self.domain.courses),
            Action::PrevRow => self.list.prev_row(&self.domain.courses),
            Action::FirstRow => self.list.select_first(&self.domain.courses),
            Action::LastRow => self.list.select_last(&self.domain.courses),
            Action::NextTab => self.list.next_tab(&self.domain.courses),
            Action::PrevTab => self.list.prev_tab(&self.domain.courses),

            // ─────────────────────────────────────────────────────────────────
            // Pagination & Display
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => self.list.next_page(&self.domain.courses),
            Action::PrevPage => self.list.prev_page(&self.domain.courses),
            Action::CycleRowsPerPage => self.list.cycle_rows_per_page(&self.domain.courses),
            Action::ToggleDense => self.list.toggle_dense(),
            Action::SortBy(column) => self.list.sort_by(column, &self.domain.courses),

            // ─────────────────────────────────────────────────────────────────
            // Name Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.list.enter_search_mode(),
            Action::ExitSearchMode => self.list.exit_search_mode(),
            Action::SearchInput(c) => self.list.search_input(c, &self.domain.courses),
            Action::SearchBackspace => self.list.search_backspace(&self.domain.courses),
            Action::ClearFilters => self.list.clear_filters(&self.domain.courses),

            // ─────────────────────────────────────────────────────────────────
            // Role Filter
            // ─────────────────────────────────────────────────────────────────
            Action::OpenRoleFilter => {
                self.role_filter_dialog
                    .open_with(self.list.filter.role.as_deref());
                self.modals.push(Modal::RoleFilter);
            }
            Action::SetRoleFilter(role) => {
                self.list.set_role_filter(role, &self.domain.courses);
                self.modals.pop();
            }
            Action::ClearRoleFilter => {
                self.list.clear_role_filter(&self.domain.courses);
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenRowMenu => {
                if let Some(course) = self.list.selected_course(&self.domain.courses) {
                    self.row_menu.open_for(&course.title);
                    self.modals.push(Modal::RowMenu);
                }
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Course Mutations
            // ─────────────────────────────────────────────────────────────────
            Action::OpenCreateForm => {
                self.form.open_create();
                self.modals.push(Modal::CourseForm { editing: None });
            }
            Action::EditSelected => self.edit_selected(),
            Action::DeleteSelected => self.delete_selected(),
            Action::SubmitCourseForm => self.submit_form(),
            Action::ReloadCourses => self.reload_courses(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = CourseRenderContext {
            domain: &self.domain,
            status_message: self.status_message.as_deref(),
            error: self.error.as_deref(),
        };
        draw_course_screen(frame, area, &mut self.list, &ctx)?;

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::RowMenu => self.row_menu.draw(frame, area)?,
                Modal::CourseForm { .. } => self.form.draw(frame, area)?,
                Modal::RoleFilter => self.role_filter_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseRecord, CourseStatus};

    fn course(id: &str, title: &str) -> CourseRecord {
        CourseRecord {
            id: id.to_string(),
            title: title.to_string(),
            instructor: String::new(),
            author: String::new(),
            language: String::new(),
            price: 0.0,
            image_url: None,
            full_name: title.to_string(),
            role: "leader".to_string(),
            status: CourseStatus::Active,
        }
    }

    fn app_with_courses() -> App {
        let mut app = App::new(&Config::default());
        app.domain
            .replace_all(vec![course("c-0", "A"), course("c-1", "B")]);
        app.list.select_first(&app.domain.courses);
        app
    }

    #[test]
    fn test_open_create_form_pushes_modal() {
        let mut app = app_with_courses();
        app.update(Action::OpenCreateForm).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::CourseForm { editing: None }));
    }

    #[test]
    fn test_edit_selected_prefills_and_opens_form() {
        let mut app = app_with_courses();
        app.update(Action::EditSelected).unwrap();
        assert_eq!(
            app.modals.top(),
            Some(&Modal::CourseForm {
                editing: Some("c-0".to_string())
            })
        );
    }

    #[test]
    fn test_edit_blocked_while_mutation_in_flight() {
        let mut app = app_with_courses();
        app.domain.begin_mutation("c-0");

        app.update(Action::EditSelected).unwrap();

        assert!(app.modals.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_force_quit_sets_flag() {
        let mut app = app_with_courses();
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_row_menu_needs_a_selection() {
        let mut app = App::new(&Config::default());
        app.update(Action::OpenRowMenu).unwrap();
        assert!(app.modals.is_empty());
    }
}
