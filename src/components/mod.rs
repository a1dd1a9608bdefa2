//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod course_form;
pub mod course_list;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod role_filter_dialog;
pub mod row;
pub mod row_menu;

pub use course_form::CourseFormDialog;
pub use course_list::{draw_course_screen, CourseListComponent, CourseRenderContext};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup, MainLayout};
pub use quit_dialog::QuitDialog;
pub use role_filter_dialog::RoleFilterDialog;
pub use row_menu::RowMenuDialog;
