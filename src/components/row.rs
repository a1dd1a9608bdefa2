//! Table row rendering for a single course
//!
//! Pure presentation: one record in, one styled `Row` out. Edit/delete
//! actions live in the row menu dialog, not here.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row},
};

use crate::model::CourseRecord;

/// Row height in each density mode
pub fn row_height(dense: bool) -> u16 {
    if dense {
        1
    } else {
        2
    }
}

/// Render one course as a table row
///
/// Columns: title (with a cover marker), instructor, author, language,
/// price with the currency suffix. Rows with a mutation in flight are
/// dimmed and lose their actions until the response arrives.
pub fn course_row(course: &CourseRecord, dense: bool, in_flight: bool) -> Row<'static> {
    let marker = if course.image_url.is_some() {
        Span::styled("󰋩 ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("  ", Style::default())
    };

    let title_style = if in_flight {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let text_style = if in_flight {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = Line::from(vec![
        marker,
        Span::styled(course.title.clone(), title_style),
        if in_flight {
            Span::styled(" …", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]);

    Row::new(vec![
        Cell::from(title),
        Cell::from(Span::styled(course.instructor.clone(), text_style)),
        Cell::from(Span::styled(course.author.clone(), text_style)),
        Cell::from(Span::styled(course.language.clone(), text_style)),
        Cell::from(Span::styled(course.price_label(), text_style)),
    ])
    .height(row_height(dense))
}

/// Filler row keeping the table height constant on the last page
pub fn empty_row(dense: bool) -> Row<'static> {
    Row::new(vec![Cell::from(""), Cell::from(""), Cell::from(""), Cell::from(""), Cell::from("")])
        .height(row_height(dense))
}
