//! Color schemes and common styles

use docmatch_shell_core::ThemePreference;
use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the given theme
pub fn colors(theme: ThemePreference) -> ThemeColors {
    match theme {
        ThemePreference::Dark => ThemeColors::dark(),
        ThemePreference::Light => ThemeColors::light(),
    }
}

/// Theme colors
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            accent: Color::Cyan,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            accent: Color::Rgb(0, 102, 204),
            success: Color::Rgb(34, 134, 58),
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(128, 128, 128),
        }
    }
}

/// Common styles
pub struct Styles;

impl Styles {
    pub fn border(c: &ThemeColors, focused: bool) -> Style {
        if focused {
            Style::default().fg(c.border_focused)
        } else {
            Style::default().fg(c.border)
        }
    }

    pub fn selected(c: &ThemeColors) -> Style {
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title(c: &ThemeColors) -> Style {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    }

    /// Title bar and status bar background
    pub fn bar(c: &ThemeColors) -> Style {
        Style::default().bg(c.highlight).fg(Color::White)
    }

    /// Key in a shortcut hint
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Description in a shortcut hint
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(230, 230, 230))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_follow_preference() {
        assert_eq!(colors(ThemePreference::Dark).bg, ThemeColors::dark().bg);
        assert_eq!(colors(ThemePreference::Light).bg, ThemeColors::light().bg);
        assert_ne!(ThemeColors::dark().fg, ThemeColors::light().fg);
    }
}
