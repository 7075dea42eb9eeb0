use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::super::{Modal, ModalKind};

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 80);
    let h = match modal.kind {
        ModalKind::Viewer => area.height.saturating_sub(6).clamp(8, 22),
        _ => 8,
    };
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w.min(area.width),
        height: h.min(area.height),
    };

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;

    match &modal.kind {
        ModalKind::Viewer | ModalKind::ConfirmDelete(_) | ModalKind::ConfirmDeleteSelected(_) => {
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }

        ModalKind::Rename { .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);
            frame.render_widget(
                Paragraph::new(modal.input.buf.as_str())
                    .block(Block::default().borders(Borders::ALL).title("Name")),
                parts[1],
            );
            let x = modal.input.cursor as u16;
            frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
        }
    }
}

fn modal_title(modal: &Modal) -> Line<'static> {
    let hint = match modal.kind {
        ModalKind::Viewer => "Esc",
        ModalKind::ConfirmDelete(_) | ModalKind::ConfirmDeleteSelected(_) => "y/n",
        ModalKind::Rename { .. } => "Enter save  Esc cancel",
    };
    Line::from(vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(hint, Style::default().fg(Color::Gray)),
    ])
}
