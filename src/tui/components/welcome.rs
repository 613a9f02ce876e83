//! # Welcome Screen Component
//!
//! Shown when the conversation is empty. Introduces the assistant and lists
//! suggested questions the user can pick with Up/Down + Enter.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

const BLURB: &str = "I can answer your medical questions using information from reliable sources. \
How can I help you today?";

/// Height of one suggested-question card (1 line + borders).
const CARD_HEIGHT: u16 = 3;

/// Render-only: selection state (`highlighted`) lives with the parent so it
/// survives across frames.
pub struct Welcome<'a> {
    pub suggestions: &'a [String],
    pub highlighted: Option<usize>,
    pub theme: Theme,
}

impl<'a> Welcome<'a> {
    pub fn new(suggestions: &'a [String], highlighted: Option<usize>, theme: Theme) -> Self {
        Self {
            suggestions,
            highlighted,
            theme,
        }
    }
}

impl<'a> Component for Welcome<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let heading = Line::from(Span::styled(
            "Medical Assistant",
            self.theme.accent_style(),
        ));
        let tagline = Line::from(Span::styled(
            "Your AI-powered healthcare companion",
            self.theme.chrome_style(),
        ));

        let intro = Paragraph::new(vec![heading, tagline, Line::default(), Line::from(BLURB)])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        let cards_height = self.suggestions.len() as u16 * CARD_HEIGHT;
        let vertical_layout = Layout::vertical([
            Constraint::Length(4), // Heading + tagline + spacer + blurb
            Constraint::Length(1),
            Constraint::Length(1), // "Try asking about..."
            Constraint::Length(cards_height),
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(intro, vertical_layout[0]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Try asking about...",
            self.theme.chrome_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, vertical_layout[2]);

        // Cards are centered horizontally at a readable width
        let card_width = area.width.min(60);
        let card_rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); self.suggestions.len()])
            .split(vertical_layout[3]);

        for (i, question) in self.suggestions.iter().enumerate() {
            let [card_area] = Layout::horizontal([Constraint::Length(card_width)])
                .flex(Flex::Center)
                .areas(card_rows[i]);

            let selected = self.highlighted == Some(i);
            let style = if selected {
                self.theme.accent_style()
            } else {
                self.theme.chrome_style()
            };

            let block = Block::bordered()
                .border_type(ratatui::widgets::BorderType::Rounded)
                .border_style(style);

            let text_style = if selected {
                self.theme.accent_style()
            } else {
                self.theme.chrome_style().add_modifier(Modifier::DIM)
            };

            let card = Paragraph::new(Span::styled(question.as_str(), text_style))
                .alignment(Alignment::Center)
                .block(block);

            frame.render_widget(card, card_area);
        }
    }
}
