use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::session::{self, Sender};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single chat message.
///
/// `MessageView` is a transient component: created fresh each frame with the
/// data it needs to render, holding no mutable state.
///
/// Styling is role-based: user messages, assistant messages, and
/// error-flagged assistant messages each get their own palette entry from
/// the active [`Theme`]. Error messages additionally get an `(error)` tag
/// in the border title so the flag survives monochrome terminals.
#[derive(Clone, Copy)]
pub struct MessageView<'a> {
    pub message: &'a session::Message,
    pub theme: Theme,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a session::Message, theme: Theme) -> Self {
        Self { message, theme }
    }

    /// Calculate the height required for this message given a width.
    ///
    /// Uses `textwrap` to predict the rendered height *without* rendering,
    /// so the parent `MessageList` can size its scroll canvas up front. The
    /// wrapping options must match Ratatui's `Paragraph` defaults for a 1:1
    /// mapping between calculated and actual height.
    pub fn calculate_height(message: &session::Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            // Return 1 row so the message still occupies space in the layout.
            return 1;
        }

        let content = message.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn role(&self) -> &'static str {
        match (self.message.sender, self.message.is_error) {
            (Sender::User, _) => "you",
            (Sender::Assistant, false) => "assistant",
            (Sender::Assistant, true) => "assistant (error)",
        }
    }

    fn style(&self) -> Style {
        match (self.message.sender, self.message.is_error) {
            (Sender::User, _) => self.theme.user_style(),
            (Sender::Assistant, false) => self.theme.assistant_style(),
            (Sender::Assistant, true) => self.theme.error_style(),
        }
    }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = self.style();
        let border_style = if self.message.is_error {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(self.role())
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.message.text.trim())
            .style(style)
            .wrap(Wrap { trim: true });

        paragraph.render(inner_area, buf);
    }
}

/// `MessageView` is stateless; the Component impl just delegates to Widget.
impl<'a> Component for MessageView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Message;
    use ratatui::style::Color;

    // ==========================================================================
    // calculate_height tests
    // ==========================================================================

    #[test]
    fn calculate_height_empty_content_returns_border_height() {
        let message = Message::user("");
        assert_eq!(
            MessageView::calculate_height(&message, 80),
            VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_whitespace_only_treated_as_empty() {
        let message = Message::user("   \n\t  ");
        assert_eq!(
            MessageView::calculate_height(&message, 80),
            VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let message = Message::user("Hello world");
        assert_eq!(MessageView::calculate_height(&message, 0), 1);
    }

    #[test]
    fn calculate_height_width_equals_overhead_returns_minimum() {
        let message = Message::user("Hello world");
        assert_eq!(
            MessageView::calculate_height(&message, HORIZONTAL_OVERHEAD),
            1
        );
    }

    #[test]
    fn calculate_height_single_line_fits() {
        let message = Message::user("Hello");
        // "Hello" (5 chars) fits in width 80 - HORIZONTAL_OVERHEAD = 76
        assert_eq!(
            MessageView::calculate_height(&message, 80),
            1 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let message = Message::user("Hello world");
        // "Hello world" = 11 chars, width 9 → content_width = 5
        // Wraps to: "Hello" | "world" = 2 lines
        assert_eq!(
            MessageView::calculate_height(&message, 9),
            2 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn calculate_height_breaks_long_words() {
        let message = Message::user("abcdefghij");
        // "abcdefghij" = 10 chars, width 8 → content_width = 4
        // Breaks to: "abcd" | "efgh" | "ij" = 3 lines
        assert_eq!(
            MessageView::calculate_height(&message, 8),
            3 + VERTICAL_OVERHEAD
        );
    }

    // ==========================================================================
    // Role and style tests
    // ==========================================================================

    #[test]
    fn role_user_is_you() {
        let message = Message::user("hi");
        let view = MessageView::new(&message, Theme::Dark);
        assert_eq!(view.role(), "you");
    }

    #[test]
    fn role_error_message_is_tagged() {
        let mut message = Message::assistant("oops");
        message.is_error = true;
        let view = MessageView::new(&message, Theme::Dark);
        assert_eq!(view.role(), "assistant (error)");
    }

    #[test]
    fn style_error_message_uses_error_palette() {
        let mut message = Message::assistant("oops");
        message.is_error = true;
        let view = MessageView::new(&message, Theme::Dark);
        assert_eq!(view.style().fg, Some(Color::LightRed));
    }

    #[test]
    fn style_assistant_differs_from_user() {
        let user = Message::user("q");
        let assistant = Message::assistant("a");
        let user_view = MessageView::new(&user, Theme::Dark);
        let assistant_view = MessageView::new(&assistant, Theme::Dark);
        assert_ne!(user_view.style().fg, assistant_view.style().fg);
    }
}
