//! Course list component - Main application screen
//!
//! Displays the status tabs, filter toolbar, the course table, pagination
//! footer and the status/help bars. Owns the presentation state of the
//! table: sort key, page cursor, density, the three filters, and row
//! selection within the visible page. The collection itself stays with
//! the App.

use crate::action::Action;
use crate::component::Component;
use crate::components::row::{course_row, empty_row};
use crate::components::{calculate_main_layout, MainLayout};
use crate::model::{
    apply_sort_filter, empty_rows, is_not_found, page_slice, CourseColumn, CourseRecord,
    DomainState, FilterState, LoadState, StatusTab, TableControls,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs},
    Frame,
};

/// Main course table component
///
/// Navigation and filter state live here; the App routes Actions into the
/// mutation methods and passes the collection in by reference.
pub struct CourseListComponent {
    /// Sort, pagination and density state
    pub controls: TableControls,
    /// Name/role/status filters
    pub filter: FilterState,
    /// Whether typed keys feed the name filter
    pub search_mode: bool,
    /// Row selection within the visible page
    pub table_state: TableState,
}

impl Default for CourseListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseListComponent {
    pub fn new() -> Self {
        Self {
            controls: TableControls::new(),
            filter: FilterState::new(),
            search_mode: false,
            table_state: TableState::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────────

    /// The filtered and sorted sequence the table pages over
    pub fn filtered(&self, courses: &[CourseRecord]) -> Vec<CourseRecord> {
        apply_sort_filter(
            courses,
            self.controls.sort_column,
            self.controls.sort_direction,
            &self.filter,
        )
    }

    fn page_len(&self, courses: &[CourseRecord]) -> usize {
        let filtered = self.filtered(courses);
        page_slice(&filtered, self.controls.page, self.controls.rows_per_page).len()
    }

    /// The course under the cursor, if any
    pub fn selected_course(&self, courses: &[CourseRecord]) -> Option<CourseRecord> {
        let filtered = self.filtered(courses);
        let slice = page_slice(&filtered, self.controls.page, self.controls.rows_per_page);
        slice.get(self.table_state.selected()?).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Select the first row of the page, or nothing when it is empty
    pub fn select_first(&mut self, courses: &[CourseRecord]) {
        if self.page_len(courses) > 0 {
            self.table_state.select(Some(0));
        } else {
            self.table_state.select(None);
        }
    }

    /// Keep the selection within the current page after the view changed
    pub fn clamp_selection(&mut self, courses: &[CourseRecord]) {
        let len = self.page_len(courses);
        if len == 0 {
            self.table_state.select(None);
        } else {
            let selected = self.table_state.selected().unwrap_or(0);
            self.table_state.select(Some(selected.min(len - 1)));
        }
    }

    pub fn next_row(&mut self, courses: &[CourseRecord]) {
        let len = self.page_len(courses);
        if len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(current) if current + 1 < len => current + 1,
            // Wrap to the first row
            _ => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn prev_row(&mut self, courses: &[CourseRecord]) {
        let len = self.page_len(courses);
        if len == 0 {
            return;
        }
        let prev = match self.table_state.selected() {
            Some(current) if current > 0 => current - 1,
            // Wrap to the last row
            _ => len - 1,
        };
        self.table_state.select(Some(prev));
    }

    pub fn select_last(&mut self, courses: &[CourseRecord]) {
        let len = self.page_len(courses);
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    pub fn next_tab(&mut self, courses: &[CourseRecord]) {
        let tabs = StatusTab::all();
        let current = tabs
            .iter()
            .position(|t| *t == self.filter.status)
            .unwrap_or(0);
        self.filter.status = tabs[(current + 1) % tabs.len()];
        self.controls.page = 0;
        self.select_first(courses);
    }

    pub fn prev_tab(&mut self, courses: &[CourseRecord]) {
        let tabs = StatusTab::all();
        let current = tabs
            .iter()
            .position(|t| *t == self.filter.status)
            .unwrap_or(0);
        self.filter.status = tabs[(current + tabs.len() - 1) % tabs.len()];
        self.controls.page = 0;
        self.select_first(courses);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    /// Any filter change resets the page so the view cannot land past the
    /// end of the shrunken sequence
    pub fn search_input(&mut self, c: char, courses: &[CourseRecord]) {
        self.filter.name.push(c);
        self.controls.page = 0;
        self.select_first(courses);
    }

    pub fn search_backspace(&mut self, courses: &[CourseRecord]) {
        self.filter.name.pop();
        self.controls.page = 0;
        self.select_first(courses);
    }

    pub fn set_role_filter(&mut self, role: String, courses: &[CourseRecord]) {
        self.filter.role = Some(role);
        self.controls.page = 0;
        self.select_first(courses);
    }

    pub fn clear_role_filter(&mut self, courses: &[CourseRecord]) {
        self.filter.role = None;
        self.controls.page = 0;
        self.select_first(courses);
    }

    pub fn clear_filters(&mut self, courses: &[CourseRecord]) {
        self.filter.clear();
        self.controls.page = 0;
        self.select_first(courses);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sort & pagination
    // ─────────────────────────────────────────────────────────────────────────

    pub fn sort_by(&mut self, column: CourseColumn, courses: &[CourseRecord]) {
        self.controls.sort_by(column);
        self.clamp_selection(courses);
    }

    pub fn next_page(&mut self, courses: &[CourseRecord]) {
        let total = self.filtered(courses).len();
        self.controls.next_page(total);
        self.select_first(courses);
    }

    pub fn prev_page(&mut self, courses: &[CourseRecord]) {
        self.controls.prev_page();
        self.select_first(courses);
    }

    pub fn cycle_rows_per_page(&mut self, courses: &[CourseRecord]) {
        self.controls.cycle_rows_per_page();
        self.select_first(courses);
    }

    pub fn toggle_dense(&mut self) {
        self.controls.toggle_dense();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for CourseListComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') => Some(Action::FirstRow),
            KeyCode::Char('G') => Some(Action::LastRow),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),

            // Pagination & display
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('z') => Some(Action::CycleRowsPerPage),
            KeyCode::Char('d') => Some(Action::ToggleDense),

            // Sort columns
            KeyCode::Char('1') => Some(Action::SortBy(CourseColumn::Title)),
            KeyCode::Char('2') => Some(Action::SortBy(CourseColumn::Instructor)),
            KeyCode::Char('3') => Some(Action::SortBy(CourseColumn::Author)),
            KeyCode::Char('4') => Some(Action::SortBy(CourseColumn::Language)),
            KeyCode::Char('5') => Some(Action::SortBy(CourseColumn::Price)),

            // Filters
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('f') => Some(Action::OpenRoleFilter),
            KeyCode::Esc if self.filter.is_active() => Some(Action::ClearFilters),

            // Courses
            KeyCode::Char('n') => Some(Action::OpenCreateForm),
            KeyCode::Enter => Some(Action::OpenRowMenu),
            KeyCode::Char('e') => Some(Action::EditSelected),
            KeyCode::Char('x') => Some(Action::DeleteSelected),
            KeyCode::Char('R') => Some(Action::ReloadCourses),

            // General
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_course_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the course screen
pub struct CourseRenderContext<'a> {
    pub domain: &'a DomainState,
    pub status_message: Option<&'a str>,
    pub error: Option<&'a str>,
}

/// Draw the course screen
pub fn draw_course_screen(
    frame: &mut Frame,
    area: Rect,
    list: &mut CourseListComponent,
    ctx: &CourseRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    render_tabs(frame, layout.tabs, list);
    render_toolbar(frame, layout.toolbar, list);

    match ctx.domain.load_state {
        LoadState::Loading => render_message(
            frame,
            layout.table,
            "Loading courses…",
            Style::default().fg(Color::Yellow),
        ),
        LoadState::Failed(ref message) => render_load_error(frame, layout.table, message),
        LoadState::Loaded => render_table(frame, &layout, list, ctx.domain),
    }

    render_status_bar(frame, layout.status, list, ctx);
    render_help_bar(frame, layout.help, list);

    Ok(())
}

fn render_tabs(frame: &mut Frame, area: Rect, list: &CourseListComponent) {
    let all_tabs = StatusTab::all();
    let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
    let selected = all_tabs
        .iter()
        .position(|t| *t == list.filter.status)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_toolbar(frame: &mut Frame, area: Rect, list: &CourseListComponent) {
    let mut spans = vec![Span::styled(" Name: ", Style::default().fg(Color::DarkGray))];

    if list.search_mode {
        spans.push(Span::styled(
            format!("{}▏", list.filter.name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    } else if list.filter.name.is_empty() {
        spans.push(Span::styled("(any)", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(
            list.filter.name.clone(),
            Style::default().fg(Color::White),
        ));
    }

    spans.push(Span::styled(
        "   Role: ",
        Style::default().fg(Color::DarkGray),
    ));
    match list.filter.role {
        Some(ref role) => spans.push(Span::styled(
            role.clone(),
            Style::default().fg(Color::White),
        )),
        None => spans.push(Span::styled("all", Style::default().fg(Color::DarkGray))),
    }

    let title = if list.search_mode {
        " Filters (searching) "
    } else {
        " Filters "
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if list.search_mode {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            }),
    );
    frame.render_widget(paragraph, area);
}

fn render_table(
    frame: &mut Frame,
    layout: &MainLayout,
    list: &mut CourseListComponent,
    domain: &DomainState,
) {
    let filtered = list.filtered(&domain.courses);
    let slice = page_slice(&filtered, list.controls.page, list.controls.rows_per_page);
    let dense = list.controls.dense;

    let header_cells: Vec<Cell> = CourseColumn::all()
        .into_iter()
        .enumerate()
        .map(|(idx, column)| {
            let active = column == list.controls.sort_column;
            let arrow = if active {
                format!(" {}", list.controls.sort_direction.arrow())
            } else {
                String::new()
            };
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Cell::from(Span::styled(
                format!("{} {}{}", idx + 1, column.label(), arrow),
                style,
            ))
        })
        .collect();
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let mut rows: Vec<Row> = slice
        .iter()
        .map(|course| course_row(course, dense, domain.is_in_flight(&course.id)))
        .collect();
    for _ in 0..empty_rows(
        list.controls.page,
        list.controls.rows_per_page,
        filtered.len(),
    ) {
        rows.push(empty_row(dense));
    }

    let widths = [
        Constraint::Percentage(34),
        Constraint::Percentage(18),
        Constraint::Percentage(18),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Courses ({}) ", filtered.len()))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, layout.table, &mut list.table_state);

    if is_not_found(&filtered, &list.filter) {
        render_message(
            frame,
            layout.table,
            "No results found. Adjust or clear the filters (Esc)",
            Style::default().fg(Color::Yellow),
        );
    } else if filtered.is_empty() {
        render_message(
            frame,
            layout.table,
            "No courses yet. Press n to create one",
            Style::default().fg(Color::DarkGray),
        );
    }

    render_pagination(frame, layout.pagination, list, filtered.len());
}

/// Centered one-line message inside the table area
fn render_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    if area.height == 0 {
        return;
    }
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x + 1, y, area.width.saturating_sub(2), 1);
    let paragraph =
        Paragraph::new(Line::from(Span::styled(message, style))).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, line_area);
}

fn render_load_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Failed to load courses",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" R ", Style::default().fg(Color::Yellow)),
            Span::raw("Retry"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, area);
}

fn render_pagination(frame: &mut Frame, area: Rect, list: &CourseListComponent, total: usize) {
    let page_count = list.controls.page_count(total);

    let mut spans = vec![
        Span::styled(
            format!(" Page {}/{} ", list.controls.page + 1, page_count),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} courses ", total),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" {} rows/page ", list.controls.rows_per_page),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if list.controls.dense {
        spans.push(Span::styled(
            " dense ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    list: &CourseListComponent,
    ctx: &CourseRenderContext,
) {
    let mut spans = vec![];

    if let Some(error) = ctx.error {
        spans.push(Span::styled(
            format!(" {} ", error),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(message) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Green),
        ));
    } else if let Some(course) = list.selected_course(&ctx.domain.courses) {
        spans.push(Span::styled(
            format!(" {} ", course.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("by {} • {} • {}", course.instructor, course.language, course.price_label()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, list: &CourseListComponent) {
    let spans = if list.search_mode {
        vec![
            Span::styled(" type ", Style::default().fg(Color::Cyan)),
            Span::raw("Filter by name  "),
            Span::styled(" Enter/Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Done"),
        ]
    } else {
        vec![
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Rows  "),
            Span::styled(" h/l ", Style::default().fg(Color::Cyan)),
            Span::raw("Pages  "),
            Span::styled(" Tab ", Style::default().fg(Color::Cyan)),
            Span::raw("Status  "),
            Span::styled(" / ", Style::default().fg(Color::Yellow)),
            Span::raw("Search  "),
            Span::styled(" f ", Style::default().fg(Color::Yellow)),
            Span::raw("Role  "),
            Span::styled(" n ", Style::default().fg(Color::Green)),
            Span::raw("New  "),
            Span::styled(" Enter ", Style::default().fg(Color::Green)),
            Span::raw("Actions  "),
            Span::styled(" ? ", Style::default().fg(Color::Magenta)),
            Span::raw("Help  "),
            Span::styled(" q ", Style::default().fg(Color::Red)),
            Span::raw("Quit"),
        ]
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CourseStatus;

    fn course(id: &str, full_name: &str, status: CourseStatus) -> CourseRecord {
        CourseRecord {
            id: id.to_string(),
            title: full_name.to_string(),
            instructor: String::new(),
            author: String::new(),
            language: String::new(),
            price: 0.0,
            image_url: None,
            full_name: full_name.to_string(),
            role: "leader".to_string(),
            status,
        }
    }

    fn many(count: usize) -> Vec<CourseRecord> {
        (0..count)
            .map(|i| course(&format!("c-{i}"), &format!("Course {i:02}"), CourseStatus::Active))
            .collect()
    }

    #[test]
    fn test_search_input_resets_page() {
        let courses = many(30);
        let mut list = CourseListComponent::new();
        list.next_page(&courses);
        assert_eq!(list.controls.page, 1);

        list.search_input('c', &courses);
        assert_eq!(list.controls.page, 0);
    }

    #[test]
    fn test_tab_change_resets_page() {
        let courses = many(30);
        let mut list = CourseListComponent::new();
        list.next_page(&courses);

        list.next_tab(&courses);
        assert_eq!(list.filter.status, StatusTab::Active);
        assert_eq!(list.controls.page, 0);
    }

    #[test]
    fn test_role_filter_resets_page() {
        let courses = many(30);
        let mut list = CourseListComponent::new();
        list.next_page(&courses);

        list.set_role_filter("leader".to_string(), &courses);
        assert_eq!(list.controls.page, 0);
        assert_eq!(list.filter.role.as_deref(), Some("leader"));
    }

    #[test]
    fn test_selected_course_respects_page_offset() {
        let courses = many(15);
        let mut list = CourseListComponent::new();
        list.select_first(&courses);
        assert_eq!(list.selected_course(&courses).unwrap().id, "c-0");

        list.next_page(&courses);
        // rows_per_page defaults to 10, so page 1 starts at the 11th row
        assert_eq!(list.selected_course(&courses).unwrap().id, "c-10");
    }

    #[test]
    fn test_row_navigation_wraps() {
        let courses = many(3);
        let mut list = CourseListComponent::new();
        list.select_first(&courses);

        list.prev_row(&courses);
        assert_eq!(list.table_state.selected(), Some(2));
        list.next_row(&courses);
        assert_eq!(list.table_state.selected(), Some(0));
    }

    #[test]
    fn test_selection_cleared_when_page_empty() {
        let courses = many(3);
        let mut list = CourseListComponent::new();
        list.select_first(&courses);

        list.search_input('z', &courses);
        list.search_input('z', &courses);
        assert_eq!(list.table_state.selected(), None);
    }
}
