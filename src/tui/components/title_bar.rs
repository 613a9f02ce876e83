//! # TitleBar Component
//!
//! Top status bar. Purely presentational: it receives the status note and
//! theme as props and renders a single line, so tests only have to check
//! text content.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Top status bar component.
///
/// # Props
///
/// - `status_note`: transient note appended after the title, e.g.
///   "backend unreachable" when the startup status probe failed
/// - `theme`: active palette
pub struct TitleBar {
    pub status_note: Option<String>,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(status_note: Option<String>, theme: Theme) -> Self {
        Self { status_note, theme }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("Medical Assistant", self.theme.accent_style())];
        if let Some(note) = &self.status_note {
            spans.push(Span::styled(
                format!(" | {note}"),
                self.theme.error_style(),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
