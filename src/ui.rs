//! The UI renders the host's patch-driven state into the terminal.
//!
//! Layout mirrors the hosted page: a title block at its resting position,
//! the nav strip (pinned to the top row once the engine sets the fixed
//! flag), the scrolled document pane and a status line with the location
//! fragment. The draw pass also feeds the real pane height back to the host
//! so trigger offsets track the terminal size.

use crate::tui_host::TuiHost;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders one frame; `selected` is the keyboard cursor in the strip.
pub fn draw(f: &mut Frame, host: &mut TuiHost, selected: usize) {
    let constraints: Vec<Constraint> = if host.fixed {
        vec![
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let (strip_area, doc_area, status_area) = if host.fixed {
        (chunks[0], chunks[1], chunks[2])
    } else {
        draw_title(f, host, chunks[0]);
        (chunks[1], chunks[2], chunks[3])
    };

    host.viewport_height = i64::from(doc_area.height);

    draw_strip(f, host, selected, strip_area);
    draw_document(f, host, doc_area);
    draw_status(f, host, status_area);
}

fn draw_title(f: &mut Frame, host: &TuiHost, area: Rect) {
    let name = host.document.path.display().to_string();
    let title = Paragraph::new(vec![
        Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ]);
    f.render_widget(title, area);
}

fn draw_strip(f: &mut Frame, host: &TuiHost, selected: usize, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    for (index, item) in host.nav_items.iter().enumerate().skip(host.strip_offset) {
        let mut style = Style::default();
        if host.active_id.as_deref() == Some(item.identifier.as_str()) {
            style = style
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
        }
        if index == selected {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", item.label), style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_document(f: &mut Frame, host: &TuiHost, area: Rect) {
    let start = usize::try_from(host.scroll_offset).unwrap_or(0);
    let end = (start + usize::from(area.height)).min(host.document.lines.len());

    let heading_lines: Vec<usize> = host
        .document
        .headings
        .iter()
        .filter_map(|heading| usize::try_from(heading.line).ok())
        .collect();

    let lines: Vec<Line> = host.document.lines[start..end]
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            if heading_lines.contains(&(start + offset)) {
                Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(text.clone())
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_status(f: &mut Frame, host: &TuiHost, area: Rect) {
    let fragment = host
        .fragment
        .as_deref()
        .map_or_else(String::new, |id| format!("#{id}"));
    let status = format!(
        "{fragment}  |  up/down scroll · left/right select · enter jump · r reload · q quit"
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
