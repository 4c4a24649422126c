//! Quantitative-agent view: one block per executed analysis step.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{indented_text_lines, placeholder_line};
use crate::report::AnalysisStep;
use crate::theme::{colors, styles};

/// Display label for a step, falling back to a 1-indexed default when the
/// server provided no section title.
pub fn analysis_step_label(step: &AnalysisStep, index: usize) -> String {
    match step.section() {
        Some(section) => section.to_string(),
        None => format!("Analysis Step {}", index + 1),
    }
}

/// Render the quantitative steps in server order.
///
/// An absent or empty sequence is a normal state, not an error.
pub fn render_quantitative(steps: &[AnalysisStep]) -> Vec<Line<'static>> {
    if steps.is_empty() {
        return vec![placeholder_line("No quantitative analysis was performed.")];
    }

    let mut lines = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("{}. {}", index + 1, analysis_step_label(step, index)),
            styles::section_heading(),
        )));

        lines.push(Line::from(Span::styled("Query", styles::field_label())));
        lines.extend(indented_text_lines(
            &step.query,
            Style::default().fg(colors::TEXT_PRIMARY),
        ));

        // Code and image are primary evidence of work done, so their
        // absence is flagged explicitly rather than leaving an empty
        // block indistinguishable from "ran but produced nothing".
        lines.push(Line::from(Span::styled("Code", styles::field_label())));
        match step.code() {
            Some(code) => {
                lines.extend(indented_text_lines(code, styles::code()));
            }
            None => lines.push(placeholder_line("  no code generated")),
        }

        match step.image_byte_len() {
            Some(size) => lines.push(Line::from(vec![
                Span::styled("▦ ", Style::default().fg(colors::CYAN)),
                Span::styled(
                    format!("visualization attached ({} KiB)", size.div_ceil(1024)),
                    Style::default().fg(colors::CYAN),
                ),
            ])),
            None => lines.push(placeholder_line("no visualization generated")),
        }

        // Insight is commentary; its absence is silently omitted.
        if let Some(insight) = step.insight() {
            lines.push(Line::from(Span::styled("Insight", styles::field_label())));
            lines.extend(indented_text_lines(
                insight,
                Style::default().fg(colors::TEXT_SECONDARY),
            ));
        }
    }

    lines
}
