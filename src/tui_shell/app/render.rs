use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let mut spans = vec![
        Span::styled(
            "Guestbook",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.base_url.to_string(), Style::default().fg(Color::Gray)),
    ];
    if app.catalog.batch_controls_visible() {
        let summary = app.catalog.selection_summary();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            select_all_label(summary, app.catalog.len()),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            "   a all  s download  D delete  S download all",
            Style::default().fg(Color::DarkGray),
        ));
    }
    if app.catalog.is_loading() || app.worker.in_flight() > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("working...", Style::default().fg(Color::Yellow)));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Recordings
    let ctx = RenderCtx {
        loading: app.catalog.is_loading(),
        gestures: app.gestures.enabled(),
    };
    let catalog_view = app.catalog.render(&app.base_url);
    app.view.render(frame, chunks[1], &ctx, &catalog_view);

    // Status
    let status = match &app.status {
        Some(notice) => {
            let mut spans = vec![Span::styled(notice.text.as_str(), notice_style(notice.level))];
            if notice.retry {
                spans.push(Span::styled(
                    "  (r to retry)",
                    Style::default().fg(Color::Gray),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "? for keys",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        Paragraph::new(status)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}

pub(super) fn select_all_label(summary: SelectionSummary, total: usize) -> String {
    match summary {
        SelectionSummary::All { .. } => format!("[x] all {total}"),
        SelectionSummary::Partial { selected, total } => format!("[-] {selected}/{total}"),
        SelectionSummary::None => "[ ] none".to_string(),
    }
}

fn notice_style(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Info => Style::default().fg(Color::White),
        NoticeLevel::Success => Style::default().fg(Color::Green),
        NoticeLevel::Warning => Style::default().fg(Color::Yellow),
        NoticeLevel::Error => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}
