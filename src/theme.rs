//! Color theme and glyphs for the dossier TUI.
//!
//! Tokyo Night Storm palette.

use ratatui::style::{Color, Modifier, Style};

pub mod colors {
    use super::Color;

    // Backgrounds
    pub const BG_DARK: Color = Color::Rgb(26, 27, 38);
    pub const BG_PANEL: Color = Color::Rgb(36, 40, 59);

    // Foregrounds
    pub const TEXT_PRIMARY: Color = Color::Rgb(192, 202, 245);
    pub const TEXT_SECONDARY: Color = Color::Rgb(169, 177, 214);
    pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);

    // Brand
    pub const PRIMARY: Color = Color::Rgb(122, 162, 247);
    pub const PRIMARY_DIM: Color = Color::Rgb(61, 89, 161);

    // Accents
    pub const CYAN: Color = Color::Rgb(125, 207, 255);
    pub const GREEN: Color = Color::Rgb(158, 206, 106);
    pub const YELLOW: Color = Color::Rgb(224, 175, 104);
    pub const PEACH: Color = Color::Rgb(255, 158, 100);
    pub const RED: Color = Color::Rgb(247, 118, 142);
    pub const MAGENTA: Color = Color::Rgb(187, 154, 247);
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Style, colors};

    pub fn tab_active() -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    pub fn tab_badge() -> Style {
        Style::default()
            .fg(colors::PEACH)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_heading() -> Style {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn field_label() -> Style {
        Style::default()
            .fg(colors::CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(colors::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn code() -> Style {
        Style::default().fg(colors::GREEN)
    }

    pub fn mode_normal() -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(colors::TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn mode_insert() -> Style {
        Style::default()
            .fg(colors::BG_DARK)
            .bg(colors::GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    pub fn key_highlight() -> Style {
        Style::default()
            .fg(colors::PEACH)
            .add_modifier(Modifier::BOLD)
    }
}
