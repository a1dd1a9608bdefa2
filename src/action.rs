//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

use crate::model::CourseColumn;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; drains completed API requests
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next row on the current page
    NextRow,
    /// Move to the previous row on the current page
    PrevRow,
    /// Jump to the first row of the page
    FirstRow,
    /// Jump to the last row of the page
    LastRow,
    /// Switch to the next status tab
    NextTab,
    /// Switch to the previous status tab
    PrevTab,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination & Display
    // ─────────────────────────────────────────────────────────────────────────
    /// Advance one page
    NextPage,
    /// Go back one page
    PrevPage,
    /// Cycle through the allowed rows-per-page values
    CycleRowsPerPage,
    /// Toggle dense row display
    ToggleDense,
    /// Sort by a column; repeating flips the direction
    SortBy(CourseColumn),

    // ─────────────────────────────────────────────────────────────────────────
    // Name Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter name search mode
    EnterSearchMode,
    /// Exit name search mode
    ExitSearchMode,
    /// Add character to the name filter
    SearchInput(char),
    /// Remove last character from the name filter
    SearchBackspace,
    /// Reset all filters to their defaults
    ClearFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Role Filter
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the role filter dialog
    OpenRoleFilter,
    /// Restrict to one role
    SetRoleFilter(String),
    /// Back to the `all` sentinel
    ClearRoleFilter,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the action menu for the selected row
    OpenRowMenu,
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open the keyboard shortcut reference
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Course Mutations
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the form empty, for a new course
    OpenCreateForm,
    /// Open the form prefilled with the selected course
    EditSelected,
    /// Delete the selected course
    DeleteSelected,
    /// Validate the form and send its draft to the API
    SubmitCourseForm,
    /// Re-fetch the full collection
    ReloadCourses,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::CycleRowsPerPage => write!(f, "CycleRowsPerPage"),
            Action::ToggleDense => write!(f, "ToggleDense"),
            Action::SortBy(column) => write!(f, "SortBy({})", column.label()),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ClearFilters => write!(f, "ClearFilters"),
            Action::OpenRoleFilter => write!(f, "OpenRoleFilter"),
            Action::SetRoleFilter(role) => write!(f, "SetRoleFilter({})", role),
            Action::ClearRoleFilter => write!(f, "ClearRoleFilter"),
            Action::OpenRowMenu => write!(f, "OpenRowMenu"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::OpenCreateForm => write!(f, "OpenCreateForm"),
            Action::EditSelected => write!(f, "EditSelected"),
            Action::DeleteSelected => write!(f, "DeleteSelected"),
            Action::SubmitCourseForm => write!(f, "SubmitCourseForm"),
            Action::ReloadCourses => write!(f, "ReloadCourses"),
        }
    }
}
