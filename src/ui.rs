use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode};
use crate::sections;
use crate::tabs::SectionTab;
use crate::theme::{colors, spinner_frame, styles};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(1),    // Section content
            Constraint::Length(5), // Instructions input
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_tab_bar(frame, app, chunks[0]);
    draw_section(frame, app, chunks[1]);
    draw_input(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for tab in SectionTab::all() {
        let style = if app.selected_tab() == tab {
            styles::tab_active()
        } else {
            styles::tab_inactive()
        };

        spans.push(Span::styled(
            format!(" {} {} ", tab.index() + 1, tab.title()),
            style,
        ));

        if let Some(count) = tab.badge(app.result()) {
            spans.push(Span::styled(format!("{count}"), styles::tab_badge()));
        }

        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_section(frame: &mut Frame, app: &mut App, area: Rect) {
    // Render from whatever slice of the result exists; every section
    // renderer handles absence on its own.
    let lines: Vec<Line<'static>> = {
        let result = app.result();
        match app.selected_tab() {
            SectionTab::Ingestion => {
                sections::render_ingestion(result.and_then(|r| r.ingestion.as_ref()))
            }
            SectionTab::Quantitative => {
                sections::render_quantitative(result.map_or(&[][..], |r| &r.quantitative_steps))
            }
            SectionTab::Qualitative => {
                sections::render_qualitative(result.map_or(&[][..], |r| &r.qualitative_steps))
            }
            SectionTab::Synthesis => {
                sections::render_synthesis(result.and_then(|r| r.synthesis.as_ref()))
            }
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::TEXT_MUTED))
        .title(Span::styled(
            format!(" {} ", app.selected_tab().title()),
            Style::default().fg(colors::TEXT_SECONDARY),
        ))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    let total_lines = wrapped_line_count(&lines, inner.width);
    let max_scroll = total_lines.saturating_sub(inner.height);
    app.update_scroll_max(max_scroll);
    let scroll_offset = app.scroll_offset();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset, 0));

    frame.render_widget(paragraph, area);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("█")
        .style(Style::default().fg(colors::TEXT_MUTED));

    let mut scrollbar_state =
        ScrollbarState::new(total_lines as usize).position(scroll_offset as usize);

    frame.render_stateful_widget(
        scrollbar,
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}

fn wrapped_line_count(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut total: u16 = 0;

    for line in lines {
        let line_width = line.width();
        let rows = if line_width == 0 {
            1
        } else {
            ((line_width - 1) / width) + 1
        };
        total = total.saturating_add(rows as u16);
    }

    total
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.input_mode();

    let (mode_text, mode_style, border_style, prompt_char) = match mode {
        InputMode::Normal => (
            " NORMAL ",
            styles::mode_normal(),
            Style::default().fg(colors::TEXT_MUTED),
            "│",
        ),
        InputMode::Insert => (
            " INSERT ",
            styles::mode_insert(),
            Style::default().fg(colors::GREEN),
            "❯",
        ),
    };

    let draft = app.draft().text();
    let prompt = Span::styled(
        format!(" {prompt_char} "),
        Style::default().fg(colors::PRIMARY),
    );
    let input_content = if draft.is_empty() && mode == InputMode::Normal {
        vec![
            prompt,
            Span::styled(
                "Describe the report you want; leave empty for the sample template",
                styles::placeholder(),
            ),
        ]
    } else {
        vec![
            prompt,
            Span::styled(
                draft.to_string(),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ]
    };

    let hints = match mode {
        InputMode::Normal => vec![
            Span::styled("i", styles::key_highlight()),
            Span::styled(" edit  ", styles::key_hint()),
            Span::styled("Enter", styles::key_highlight()),
            Span::styled(" generate  ", styles::key_hint()),
            Span::styled("Tab", styles::key_highlight()),
            Span::styled(" sections  ", styles::key_hint()),
            Span::styled("q", styles::key_highlight()),
            Span::styled(" quit ", styles::key_hint()),
        ],
        InputMode::Insert => vec![
            Span::styled("Enter", styles::key_highlight()),
            Span::styled(" generate  ", styles::key_hint()),
            Span::styled("Esc", styles::key_highlight()),
            Span::styled(" back ", styles::key_hint()),
        ],
    };

    let input = Paragraph::new(Line::from(input_content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(vec![Span::styled(mode_text, mode_style)]))
            .title_bottom(Line::from(hints).alignment(Alignment::Right))
            .padding(Padding::vertical(1)),
    );

    frame.render_widget(input, area);

    if mode == InputMode::Insert {
        // Cursor position via display width so wide glyphs line up.
        let text_before_cursor: String = app
            .draft()
            .text()
            .chars()
            .take(app.draft().cursor())
            .collect();
        let cursor_x = area.x + 4 + text_before_cursor.width() as u16;
        let cursor_y = area.y + 2;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if let Some(msg) = app.status_message() {
        (msg.to_string(), Style::default().fg(colors::YELLOW))
    } else if app.is_pending() {
        let spinner = spinner_frame(app.tick_count());
        (
            format!("{spinner} Generating report..."),
            Style::default().fg(colors::PRIMARY),
        )
    } else if let Some(err) = app.phase().failure() {
        (format!("✗ {err}"), Style::default().fg(colors::RED))
    } else if app.result().is_some() {
        (
            "● Report ready".to_string(),
            Style::default().fg(colors::GREEN),
        )
    } else {
        ("○ Idle".to_string(), Style::default().fg(colors::TEXT_MUTED))
    };

    let endpoint = app.endpoint().to_string();
    let endpoint_width = endpoint.width() as u16 + 2;

    let status_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width.saturating_sub(endpoint_width),
        height: area.height,
    };
    let endpoint_area = Rect {
        x: area.x + area.width.saturating_sub(endpoint_width),
        y: area.y,
        width: endpoint_width,
        height: area.height,
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, status_style),
    ]));
    frame.render_widget(status, status_area);

    let endpoint_widget = Paragraph::new(Line::from(vec![
        Span::styled(endpoint, Style::default().fg(colors::TEXT_MUTED)),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(endpoint_widget, endpoint_area);
}
