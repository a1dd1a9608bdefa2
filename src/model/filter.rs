//! Client-side filtering, sorting and pagination of the course collection
//!
//! The whole pipeline is pure: it never mutates the input collection and
//! always produces a fresh sequence. Order of operations is fixed: stable
//! sort first, then name, status and role filters.

use std::cmp::Ordering;

use super::course::CourseRecord;
use super::ui::StatusTab;

/// Sortable columns of the course table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseColumn {
    #[default]
    Title,
    Instructor,
    Author,
    Language,
    Price,
}

impl CourseColumn {
    pub fn all() -> Vec<CourseColumn> {
        vec![
            CourseColumn::Title,
            CourseColumn::Instructor,
            CourseColumn::Author,
            CourseColumn::Language,
            CourseColumn::Price,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            CourseColumn::Title => "Name",
            CourseColumn::Instructor => "Instructor",
            CourseColumn::Author => "Author",
            CourseColumn::Language => "Language",
            CourseColumn::Price => "Price",
        }
    }
}

/// Sort direction for the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// The three filters restricting the visible set
///
/// Ephemeral, client-only state; reset only by explicit user action.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Case-insensitive substring matched against `full_name`
    pub name: String,
    /// Exact role match; `None` is the `all` sentinel
    pub role: Option<String>,
    /// Status restriction driven by the active tab
    pub status: StatusTab,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when any of the three filters is non-default
    pub fn is_active(&self) -> bool {
        !self.name.is_empty() || self.role.is_some() || self.status != StatusTab::All
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.role = None;
        self.status = StatusTab::All;
    }
}

/// Compare two records on a single column
///
/// Price needs a total order even though it is an `f64`; the wire format
/// cannot produce NaN but the comparator must not panic if it ever does.
fn compare_by(a: &CourseRecord, b: &CourseRecord, column: CourseColumn) -> Ordering {
    match column {
        CourseColumn::Title => a.title.cmp(&b.title),
        CourseColumn::Instructor => a.instructor.cmp(&b.instructor),
        CourseColumn::Author => a.author.cmp(&b.author),
        CourseColumn::Language => a.language.cmp(&b.language),
        CourseColumn::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
    }
}

/// Sort and filter the collection for display
///
/// 1. Stable sort: records are paired with their original index and ties
///    on the comparator fall back to index order.
/// 2. Non-empty name filter retains records whose full name contains the
///    query, case-insensitively.
/// 3. A non-`All` status tab retains records with that exact status.
/// 4. A non-sentinel role retains records with that exact role.
pub fn apply_sort_filter(
    courses: &[CourseRecord],
    column: CourseColumn,
    direction: SortDirection,
    filter: &FilterState,
) -> Vec<CourseRecord> {
    let mut decorated: Vec<(usize, &CourseRecord)> = courses.iter().enumerate().collect();
    decorated.sort_by(|(ia, a), (ib, b)| {
        let ord = match direction {
            SortDirection::Asc => compare_by(a, b, column),
            SortDirection::Desc => compare_by(b, a, column),
        };
        ord.then(ia.cmp(ib))
    });

    let mut result: Vec<CourseRecord> = decorated.into_iter().map(|(_, c)| c.clone()).collect();

    if !filter.name.is_empty() {
        let query = filter.name.to_lowercase();
        result.retain(|c| c.full_name.to_lowercase().contains(&query));
    }

    if let Some(status) = filter.status.status() {
        result.retain(|c| c.status == status);
    }

    if let Some(ref role) = filter.role {
        result.retain(|c| c.role == *role);
    }

    result
}

/// "No results" condition: empty result while at least one filter is active
///
/// Evaluated post-filter, pre-pagination.
pub fn is_not_found(filtered: &[CourseRecord], filter: &FilterState) -> bool {
    filtered.is_empty() && filter.is_active()
}

/// The contiguous window of the filtered sequence shown on one page
pub fn page_slice<T>(rows: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let start = page.saturating_mul(rows_per_page);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + rows_per_page).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::course::CourseStatus;

    fn course(id: &str, full_name: &str, role: &str, status: CourseStatus) -> CourseRecord {
        CourseRecord {
            id: id.to_string(),
            title: full_name.to_string(),
            instructor: String::new(),
            author: String::new(),
            language: String::new(),
            price: 0.0,
            image_url: None,
            full_name: full_name.to_string(),
            role: role.to_string(),
            status,
        }
    }

    fn priced(id: &str, title: &str, price: f64) -> CourseRecord {
        let mut c = course(id, title, "leader", CourseStatus::Active);
        c.price = price;
        c
    }

    fn ids(courses: &[CourseRecord]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_filter_returns_subsequence() {
        let data = vec![
            course("a", "React Basics", "leader", CourseStatus::Active),
            course("b", "Advanced SQL", "leader", CourseStatus::Banned),
            course("c", "React Native", "ui designer", CourseStatus::Active),
        ];
        let filter = FilterState {
            name: "react".to_string(),
            ..FilterState::default()
        };

        let result = apply_sort_filter(&data, CourseColumn::Title, SortDirection::Asc, &filter);

        // Never invents or duplicates records
        for c in &result {
            assert_eq!(data.iter().filter(|d| d.id == c.id).count(), 1);
        }
        let mut seen = std::collections::HashSet::new();
        assert!(result.iter().all(|c| seen.insert(c.id.clone())));
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        // Same price everywhere: original order must survive the sort
        let data = vec![
            priced("a", "Zeta", 10.0),
            priced("b", "Alpha", 10.0),
            priced("c", "Mid", 10.0),
        ];
        let result = apply_sort_filter(
            &data,
            CourseColumn::Price,
            SortDirection::Asc,
            &FilterState::new(),
        );
        assert_eq!(ids(&result), vec!["a", "b", "c"]);

        let result = apply_sort_filter(
            &data,
            CourseColumn::Price,
            SortDirection::Desc,
            &FilterState::new(),
        );
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_price_descending() {
        let data = vec![
            priced("cheap", "A", 5.0),
            priced("dear", "B", 50.0),
            priced("mid", "C", 20.0),
        ];
        let result = apply_sort_filter(
            &data,
            CourseColumn::Price,
            SortDirection::Desc,
            &FilterState::new(),
        );
        assert_eq!(ids(&result), vec!["dear", "mid", "cheap"]);
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let data = vec![course("x", "ABc", "leader", CourseStatus::Active)];
        let filter = FilterState {
            name: "ab".to_string(),
            ..FilterState::default()
        };
        let result = apply_sort_filter(&data, CourseColumn::Title, SortDirection::Asc, &filter);
        assert_eq!(ids(&result), vec!["x"]);
    }

    #[test]
    fn test_sentinel_filters_are_no_ops() {
        let data = vec![
            course("a", "One", "leader", CourseStatus::Active),
            course("b", "Two", "ui designer", CourseStatus::Banned),
        ];
        let result = apply_sort_filter(
            &data,
            CourseColumn::Title,
            SortDirection::Asc,
            &FilterState::new(),
        );
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_role_filter_restricts_to_exact_match() {
        let data = vec![
            course("a", "One", "leader", CourseStatus::Active),
            course("b", "Two", "ui designer", CourseStatus::Active),
            course("c", "Three", "ui/ux designer", CourseStatus::Active),
        ];
        let filter = FilterState {
            role: Some("ui designer".to_string()),
            ..FilterState::default()
        };
        let result = apply_sort_filter(&data, CourseColumn::Title, SortDirection::Asc, &filter);
        assert_eq!(ids(&result), vec!["b"]);
    }

    #[test]
    fn test_status_tab_scenario() {
        // Statuses [active, banned, active]: tab `banned` yields the one
        // matching record, tab `all` yields all three in sort order.
        let data = vec![
            course("a", "A", "leader", CourseStatus::Active),
            course("b", "B", "leader", CourseStatus::Banned),
            course("c", "C", "leader", CourseStatus::Active),
        ];

        let banned = FilterState {
            status: StatusTab::Banned,
            ..FilterState::default()
        };
        let result = apply_sort_filter(&data, CourseColumn::Title, SortDirection::Asc, &banned);
        assert_eq!(ids(&result), vec!["b"]);

        let result = apply_sort_filter(
            &data,
            CourseColumn::Title,
            SortDirection::Asc,
            &FilterState::new(),
        );
        assert_eq!(ids(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_name_filter_scenario() {
        let data = vec![
            course("a", "React Basics", "leader", CourseStatus::Active),
            course("b", "Advanced SQL", "leader", CourseStatus::Active),
        ];
        let filter = FilterState {
            name: "react".to_string(),
            ..FilterState::default()
        };
        let result = apply_sort_filter(&data, CourseColumn::Title, SortDirection::Asc, &filter);
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_is_not_found_requires_active_filter() {
        let empty: Vec<CourseRecord> = Vec::new();
        assert!(!is_not_found(&empty, &FilterState::new()));

        let filter = FilterState {
            name: "missing".to_string(),
            ..FilterState::default()
        };
        assert!(is_not_found(&empty, &filter));

        let data = vec![course("a", "A", "leader", CourseStatus::Active)];
        assert!(!is_not_found(&data, &filter));
    }

    #[test]
    fn test_page_slice_length_law() {
        let rows: Vec<u32> = (0..23).collect();

        assert_eq!(page_slice(&rows, 0, 10).len(), 10);
        assert_eq!(page_slice(&rows, 1, 10).len(), 10);
        assert_eq!(page_slice(&rows, 2, 10).len(), 3);
        assert_eq!(page_slice(&rows, 2, 10), &[20, 21, 22]);
        // page*rows_per_page >= len: empty
        assert!(page_slice(&rows, 3, 10).is_empty());
        assert!(page_slice(&rows, 100, 10).is_empty());
        assert!(page_slice::<u32>(&[], 0, 10).is_empty());
    }

    #[test]
    fn test_input_collection_is_untouched() {
        let data = vec![
            course("b", "B", "leader", CourseStatus::Active),
            course("a", "A", "leader", CourseStatus::Active),
        ];
        let before = ids(&data)
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let _ = apply_sort_filter(
            &data,
            CourseColumn::Title,
            SortDirection::Asc,
            &FilterState::new(),
        );
        assert_eq!(ids(&data), before);
    }
}
