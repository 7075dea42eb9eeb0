use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, Paragraph, Wrap};

use crate::catalog::{CatalogView, Placeholder, RowTarget};

use super::super::{RenderCtx, point_in_rect, render_view_chrome_with_header};

mod details;
mod layout;
mod rows;

use self::layout::RowColumns;

#[derive(Debug, Default)]
pub(in crate::tui_shell) struct RecordingsView {
    pub(in crate::tui_shell) selected_row: usize,
    /// First visible row.
    pub(in crate::tui_shell) offset: usize,
    /// Where the rows were last drawn; empty while a placeholder is shown.
    pub(in crate::tui_shell) list_area: Rect,
}

impl RecordingsView {
    pub(in crate::tui_shell) fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub(in crate::tui_shell) fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.selected_row = 0;
            return;
        }
        self.selected_row = (self.selected_row + 1).min(len - 1);
    }

    /// Keep the cursor on an existing row after the list shrank.
    pub(in crate::tui_shell) fn clamp(&mut self, len: usize) {
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
        self.offset = self.offset.min(self.selected_row);
    }

    fn scroll_into_view(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected_row < self.offset {
            self.offset = self.selected_row;
        } else if self.selected_row >= self.offset + height {
            self.offset = self.selected_row + 1 - height;
        }
    }

    /// Which row, and which part of it, is under the pointer.
    pub(in crate::tui_shell) fn hit_test(
        &self,
        column: u16,
        row: u16,
        len: usize,
    ) -> Option<(usize, RowTarget)> {
        if !point_in_rect(column, row, self.list_area) {
            return None;
        }
        let idx = self.offset + usize::from(row - self.list_area.y);
        if idx >= len {
            return None;
        }
        let columns = RowColumns::for_width(self.list_area.width);
        Some((idx, columns.target_at(column - self.list_area.x)))
    }

    pub(in crate::tui_shell) fn render(
        &mut self,
        frame: &mut ratatui::Frame,
        area: Rect,
        ctx: &RenderCtx,
        view: &CatalogView,
    ) {
        let header = Line::from(vec![Span::styled(
            "Recordings",
            Style::default().fg(Color::Yellow),
        )]);
        let inner = render_view_chrome_with_header(frame, header, area);

        let (rows, banner) = match view {
            CatalogView::Placeholder(placeholder) => {
                self.list_area = Rect::default();
                frame.render_widget(
                    Paragraph::new(placeholder_lines(placeholder, ctx)).wrap(Wrap { trim: false }),
                    inner,
                );
                return;
            }
            CatalogView::Rows { rows, banner } => (rows, banner),
        };

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        let list_block = Block::default().borders(Borders::BOTTOM);
        let list_area = list_block.inner(parts[0]);
        frame.render_widget(list_block, parts[0]);

        self.clamp(rows.len());
        self.scroll_into_view(usize::from(list_area.height));
        self.list_area = list_area;

        let columns = RowColumns::for_width(list_area.width);
        let visible = rows
            .iter()
            .skip(self.offset)
            .take(usize::from(list_area.height));
        let items = rows::list_items(visible, &columns, self.selected_row);
        frame.render_widget(List::new(items), list_area);

        let current = rows.get(self.selected_row);
        frame.render_widget(
            Paragraph::new(details::detail_lines(current, banner.as_deref(), ctx))
                .wrap(Wrap { trim: false }),
            parts[1],
        );
    }
}

fn placeholder_lines(placeholder: &Placeholder, ctx: &RenderCtx) -> Vec<Line<'static>> {
    match placeholder {
        Placeholder::Loading => vec![Line::from(Span::styled(
            "Loading recordings...",
            Style::default().fg(Color::Gray),
        ))],
        Placeholder::Empty if ctx.loading => vec![Line::from("Refreshing...")],
        Placeholder::Empty => vec![Line::from("No recordings found.")],
        Placeholder::Failed { message } => vec![
            Line::from(Span::styled(
                format!("Failed to load recordings: {message}"),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "Press r to retry.",
                Style::default().fg(Color::Gray),
            )),
        ],
    }
}
