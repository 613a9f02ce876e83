//! # Shortcuts Overlay
//!
//! Centered modal listing the keyboard shortcuts. While visible it swallows
//! all input except Escape (dismiss) and Ctrl+C (quit); that gating happens
//! in the event loop, this component only draws.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

const SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "Send message"),
    ("Ctrl+K", "Clear conversation"),
    ("Ctrl+D", "Toggle dark mode"),
    ("Ctrl+/", "Show this help"),
    ("Esc", "Dismiss this help"),
    ("Ctrl+C", "Quit"),
];

pub struct ShortcutsOverlay {
    pub theme: Theme,
}

impl ShortcutsOverlay {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Centered rect sized to the shortcut table plus borders.
    fn modal_area(area: Rect) -> Rect {
        let height = SHORTCUTS.len() as u16 + 2;
        let width = 40u16.min(area.width);
        let [horizontal] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [vertical] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(horizontal);
        vertical
    }
}

impl Component for ShortcutsOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let modal = Self::modal_area(area);

        let lines: Vec<Line> = SHORTCUTS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{key:>7}  "), self.theme.accent_style()),
                    Span::raw(*action),
                ])
            })
            .collect();

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(self.theme.accent_style())
            .title("Keyboard Shortcuts")
            .title_alignment(Alignment::Center);

        // Clear first so the conversation underneath doesn't bleed through
        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}
