use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::catalog::{RowView, Slide};

use super::layout::{ACCENT, CHECKED, DELETE, PLAY, RowColumns, UNCHECKED};

pub(super) fn list_items<'a>(
    rows: impl Iterator<Item = &'a RowView>,
    columns: &RowColumns,
    cursor: usize,
) -> Vec<ListItem<'static>> {
    rows.map(|row| {
        let item = ListItem::new(row_line(row, columns));
        if row.index == cursor {
            item.style(Style::default().bg(Color::DarkGray))
        } else {
            item
        }
    })
    .collect()
}

pub(super) fn row_line(row: &RowView, columns: &RowColumns) -> Line<'static> {
    if row.slide == Slide::SlidOut {
        return Line::from(Span::styled(
            format!("<- delete {}?", row.filename),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let (r, g, b) = row.accent.rgb;
    let name_style = if row.selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let date_width = usize::from(columns.date.end - columns.date.start);

    Line::from(vec![
        Span::raw(if row.selected { CHECKED } else { UNCHECKED }),
        Span::raw(" "),
        Span::styled(ACCENT, Style::default().fg(Color::Rgb(r, g, b))),
        Span::raw(" "),
        Span::styled(fit(&row.name, columns.name_width()), name_style),
        Span::raw(" "),
        Span::styled(PLAY, Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(fit(&row.timestamp, date_width), Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(DELETE, Style::default().fg(Color::Red)),
    ])
}

/// Pad or cut `s` to exactly `width` chars.
pub(super) fn fit(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        return format!("{s:<width$}");
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}
