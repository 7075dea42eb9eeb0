use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::catalog::RowView;

use super::super::super::RenderCtx;

pub(super) fn detail_lines(
    row: Option<&RowView>,
    banner: Option<&str>,
    ctx: &RenderCtx,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(banner) = banner {
        lines.push(Line::from(Span::styled(
            format!("Reload failed: {banner} (r to retry)"),
            Style::default().fg(Color::Red),
        )));
    }

    let Some(row) = row else {
        return lines;
    };
    let label = Style::default().fg(Color::Gray);
    lines.push(Line::from(vec![
        Span::styled("file      ", label),
        Span::raw(row.filename.clone()),
    ]));
    if row.name != row.filename {
        lines.push(Line::from(vec![
            Span::styled("editing   ", label),
            Span::raw(row.name.clone()),
        ]));
    }
    let recorded = if row.timestamp.is_empty() {
        "unknown".to_string()
    } else {
        row.timestamp.clone()
    };
    lines.push(Line::from(vec![
        Span::styled("recorded  ", label),
        Span::raw(recorded),
    ]));
    if let Some(url) = &row.audio_url {
        lines.push(Line::from(vec![
            Span::styled("audio     ", label),
            Span::raw(url.clone()),
        ]));
    }

    let mut hints = "space select  e rename  p play  x delete".to_string();
    if ctx.gestures {
        hints.push_str("  swipe left to delete");
    }
    lines.push(Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))));
    lines
}
