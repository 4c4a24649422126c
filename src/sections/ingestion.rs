//! Ingestion summary view.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::report::IngestionSummary;
use crate::theme::{colors, styles};

/// Columns listed explicitly before collapsing into a remainder count.
pub const MAX_COLUMNS_SHOWN: usize = 6;

/// Render the ingestion summary.
///
/// An absent record is the normal state before the first generation, so it
/// renders a default "Ready" view rather than an error.
pub fn render_ingestion(summary: Option<&IngestionSummary>) -> Vec<Line<'static>> {
    let status = summary
        .and_then(IngestionSummary::status)
        .unwrap_or("Ready");
    let row_count = summary.map_or(0, |s| s.row_count);
    let columns = summary.map_or(&[][..], |s| s.columns.as_slice());

    let status_style = if status.eq_ignore_ascii_case("success") {
        Style::default().fg(colors::GREEN)
    } else {
        Style::default().fg(colors::TEXT_SECONDARY)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status  ", styles::field_label()),
            Span::styled(status.to_string(), status_style),
        ]),
        Line::from(vec![
            Span::styled("Rows    ", styles::field_label()),
            Span::styled(
                format_row_count(row_count),
                Style::default().fg(colors::TEXT_PRIMARY),
            ),
        ]),
        Line::from(""),
    ];

    if columns.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Columns ", styles::field_label()),
            Span::styled("none", styles::placeholder()),
        ]));
        return lines;
    }

    lines.push(Line::from(Span::styled(
        format!("Columns ({})", columns.len()),
        styles::field_label(),
    )));

    for name in columns.iter().take(MAX_COLUMNS_SHOWN) {
        lines.push(Line::from(vec![
            Span::raw("  • "),
            Span::styled(name.clone(), Style::default().fg(colors::TEXT_PRIMARY)),
        ]));
    }

    // Collapsing silently would misrepresent the schema; show the
    // remainder count instead.
    if columns.len() > MAX_COLUMNS_SHOWN {
        lines.push(Line::from(Span::styled(
            format!("  +{} more", columns.len() - MAX_COLUMNS_SHOWN),
            styles::placeholder(),
        )));
    }

    lines
}

/// Row count with thousands grouping.
pub fn format_row_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
