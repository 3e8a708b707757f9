//! Breadcrumb trail as a styled terminal line.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::breadcrumb::{segments, BreadcrumbItem, Segment, SEPARATOR};

pub fn breadcrumb_line(items: &[BreadcrumbItem]) -> Line<'static> {
    let spans: Vec<Span<'static>> = segments(items)
        .into_iter()
        .map(|segment| match segment {
            Segment::Link { label, .. } => Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Segment::Current { label } => Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Segment::Separator => Span::styled(
                format!(" {SEPARATOR} "),
                Style::default().fg(Color::DarkGray),
            ),
        })
        .collect();

    Line::from(spans)
}
