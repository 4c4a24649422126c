//! Section renderers.
//!
//! Each renderer is a pure function from a slice of the report result to
//! renderable lines. Absent or malformed input degrades to an explicit
//! "nothing to show" state; none of these functions can fail.

pub mod ingestion;
pub mod qualitative;
pub mod quantitative;
pub mod synthesis;

pub use ingestion::render_ingestion;
pub use qualitative::render_qualitative;
pub use quantitative::render_quantitative;
pub use synthesis::render_synthesis;

use ratatui::text::{Line, Span};

use crate::theme::styles;

/// A single muted placeholder line, used by every section for its empty
/// state.
pub(crate) fn placeholder_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, styles::placeholder()))
}

/// Split multi-line text into styled lines with a two-space indent.
pub(crate) fn indented_text_lines(
    text: &str,
    style: ratatui::style::Style,
) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::from(vec![Span::raw("  "), Span::styled(line.to_string(), style)]))
        .collect()
}
