//! Color palettes for the dark and light themes.
//!
//! Purely cosmetic: toggling the theme never touches session state. Each
//! message role gets a distinct treatment so a transcript stays readable
//! even without color support for modifiers.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Style for user-authored messages.
    pub fn user_style(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Blue),
            Theme::Dark => Style::default().fg(Color::Cyan),
        }
    }

    /// Style for assistant messages.
    pub fn assistant_style(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Magenta),
            Theme::Dark => Style::default().fg(Color::Green),
        }
    }

    /// Style for error-flagged assistant messages.
    pub fn error_style(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::Red),
            Theme::Dark => Style::default().fg(Color::LightRed),
        }
    }

    /// Style for chrome: borders, footer, hints.
    pub fn chrome_style(self) -> Style {
        match self {
            Theme::Light => Style::default().fg(Color::DarkGray),
            Theme::Dark => Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        }
    }

    /// Style for highlighted elements (selected suggestion, title accent).
    pub fn accent_style(self) -> Style {
        match self {
            Theme::Light => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            Theme::Dark => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_error_style_is_red_in_both_themes() {
        assert_eq!(Theme::Light.error_style().fg, Some(Color::Red));
        assert_eq!(Theme::Dark.error_style().fg, Some(Color::LightRed));
    }
}
