//! Qualitative-agent view: one block per executed research step.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::{indented_text_lines, placeholder_line};
use crate::report::ResearchStep;
use crate::theme::{colors, styles};

/// Display label for a research step, 1-indexed fallback.
pub fn research_step_label(step: &ResearchStep, index: usize) -> String {
    match step.section() {
        Some(section) => section.to_string(),
        None => format!("Research Step {}", index + 1),
    }
}

/// Render the qualitative steps in server order.
pub fn render_qualitative(steps: &[ResearchStep]) -> Vec<Line<'static>> {
    if steps.is_empty() {
        return vec![placeholder_line("No qualitative research was performed.")];
    }

    let mut lines = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("{}. {}", index + 1, research_step_label(step, index)),
            styles::section_heading(),
        )));

        lines.push(Line::from(Span::styled("Query", styles::field_label())));
        lines.extend(indented_text_lines(
            &step.query,
            Style::default().fg(colors::TEXT_PRIMARY),
        ));

        // The context panel is the primary evidence that retrieval
        // happened, so its absence is flagged.
        lines.push(Line::from(Span::styled("Context", styles::field_label())));
        match step.context() {
            Some(context) => {
                lines.extend(indented_text_lines(
                    context,
                    Style::default().fg(colors::TEXT_SECONDARY),
                ));
            }
            None => lines.push(placeholder_line("  no context found")),
        }

        // Insight is commentary; absence is silently omitted.
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
