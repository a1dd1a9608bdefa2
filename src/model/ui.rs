//! UI state - presentation state separate from domain data

use super::course::CourseStatus;

/// Status tab above the course table
///
/// Doubles as the status filter; `All` is the sentinel that disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab {
    #[default]
    All,
    Active,
    Banned,
}

impl StatusTab {
    pub fn all() -> Vec<StatusTab> {
        vec![StatusTab::All, StatusTab::Active, StatusTab::Banned]
    }

    pub fn name(&self) -> &str {
        match self {
            StatusTab::All => "all",
            StatusTab::Active => "active",
            StatusTab::Banned => "banned",
        }
    }

    /// The status this tab restricts to, or `None` for the sentinel
    pub fn status(&self) -> Option<CourseStatus> {
        match self {
            StatusTab::All => None,
            StatusTab::Active => Some(CourseStatus::Active),
            StatusTab::Banned => Some(CourseStatus::Banned),
        }
    }
}

/// Lifecycle of the collection fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}
