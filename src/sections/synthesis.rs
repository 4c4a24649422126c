//! Final narrative report view.

use ratatui::style::Style;
use ratatui::text::Line;

use crate::markdown::{render_markdown, strip_image_directives};
use crate::report::Synthesis;
use crate::theme::colors;

pub const REPORT_TITLE: &str = "Insight Report";
pub const PENDING_PLACEHOLDER: &str = "Report generation pending...";

/// Compose the text handed to the markdown renderer: fixed header and
/// provenance line, then the narrative (or the pending placeholder), with
/// every inline image directive stripped.
///
/// Images are stripped unconditionally: they are already surfaced inside
/// the quantitative view, and narrative references usually point at paths
/// that do not resolve client-side.
pub fn compose_report_text(synthesis: Option<&Synthesis>) -> String {
    let body = synthesis
        .and_then(Synthesis::markdown_content)
        .unwrap_or(PENDING_PLACEHOLDER);
    let date = chrono::Local::now().format("%Y-%m-%d");

    let composed = format!(
        "# {REPORT_TITLE}\n\n*Compiled by the dual-agent analysis pipeline, {date}*\n\n{body}"
    );
    strip_image_directives(&composed)
}

/// Render the synthesis section.
pub fn render_synthesis(synthesis: Option<&Synthesis>) -> Vec<Line<'static>> {
    let text = compose_report_text(synthesis);
    render_markdown(&text, Style::default().fg(colors::TEXT_SECONDARY))
}
