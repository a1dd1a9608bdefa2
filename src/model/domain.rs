//! Domain state - the in-memory course collection and its mutation rules
//!
//! The collection is a client-side snapshot of the server's. After the
//! initial fetch it is only mutated in response to successful server
//! responses; a concurrent writer elsewhere can make it diverge until the
//! next explicit reload.

use std::collections::HashSet;

use tracing::warn;

use super::course::CourseRecord;
use super::ui::LoadState;

/// Domain state owned exclusively by the root component
#[derive(Debug, Default)]
pub struct DomainState {
    /// Full snapshot of the remote collection, in server order
    pub courses: Vec<CourseRecord>,
    /// Lifecycle of the collection fetch
    pub load_state: LoadState,
    /// Ids with a delete or update currently in flight
    in_flight: HashSet<String>,
}

impl DomainState {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            load_state: LoadState::Loading,
            in_flight: HashSet::new(),
        }
    }

    /// Replace the collection with a fresh server snapshot
    pub fn replace_all(&mut self, courses: Vec<CourseRecord>) {
        self.courses = courses;
        self.load_state = LoadState::Loaded;
    }

    /// Apply a successful create/update reported by the form
    ///
    /// With an id, the matching record is replaced in place, keeping the same
    /// position, siblings untouched. An id with no match is dropped
    /// without structural error. Without an id the record is prepended.
    /// Returns false only for the dropped case.
    pub fn apply_saved(&mut self, course: CourseRecord, id: Option<&str>) -> bool {
        match id {
            Some(id) => {
                if let Some(existing) = self.courses.iter_mut().find(|c| c.id == id) {
                    *existing = course;
                    true
                } else {
                    warn!(id = %id, "update for unknown course id dropped");
                    false
                }
            }
            None => {
                self.courses.insert(0, course);
                true
            }
        }
    }

    /// Remove the record with the given id, leaving all others in order
    ///
    /// Returns false when no record matches.
    pub fn remove_course(&mut self, id: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        self.courses.len() != before
    }

    /// Mark an id as having a mutation in flight
    pub fn begin_mutation(&mut self, id: &str) {
        self.in_flight.insert(id.to_string());
    }

    pub fn end_mutation(&mut self, id: &str) {
        self.in_flight.remove(id);
    }

    /// True while a delete or update for this id is awaiting its response
    pub fn is_in_flight(&self, id: &str) -> bool {
        self.in_flight.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::CourseStatus;

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
            role: String::new(),
            status: CourseStatus::Active,
        }
    }

    fn state_with(ids: &[&str]) -> DomainState {
        let mut state = DomainState::new();
        state.replace_all(ids.iter().map(|id| course(id, id)).collect());
        state
    }

    #[test]
    fn test_remove_course_removes_exactly_one() {
        let mut state = state_with(&["a", "b", "c"]);

        assert!(state.remove_course("b"));
        let ids: Vec<&str> = state.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert!(!state.remove_course("missing"));
        assert_eq!(state.courses.len(), 2);
    }

    #[test]
    fn test_apply_saved_replaces_in_place() {
        let mut state = state_with(&["a", "b", "c"]);

        let updated = course("b", "B updated");
        assert!(state.apply_saved(updated, Some("b")));

        let ids: Vec<&str> = state.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(state.courses[1].title, "B updated");
    }

    #[test]
    fn test_apply_saved_unknown_id_is_dropped() {
        let mut state = state_with(&["a", "b"]);

        assert!(!state.apply_saved(course("x", "X"), Some("x")));
        assert_eq!(state.courses.len(), 2);
    }

    #[test]
    fn test_apply_saved_without_id_prepends() {
        let mut state = state_with(&["a", "b"]);

        assert!(state.apply_saved(course("new", "New"), None));
        let ids: Vec<&str> = state.courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "a", "b"]);
    }

    #[test]
    fn test_in_flight_tracking() {
        let mut state = state_with(&["a"]);
        assert!(!state.is_in_flight("a"));

        state.begin_mutation("a");
        assert!(state.is_in_flight("a"));

        state.end_mutation("a");
        assert!(!state.is_in_flight("a"));
    }
}
