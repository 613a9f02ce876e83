//! # MessageList Component
//!
//! Scrollable view of conversation history.
//!
//! ## Responsibilities
//!
//! - Display the message log
//! - Manage scrolling logic (stick-to-bottom, clamping)
//! - Show the typing indicator while a request is outstanding
//! - Perform efficient layout caching (message heights)
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState` (persistent state) and the message slice
//! (props). Since `Component::render` takes `&mut self`, we can safely
//! mutate the state (layout cache, scroll offset) during the render pass,
//! aligning with Ratatui's `StatefulWidget` pattern.
//!
//! Because the log is append-only and messages are immutable once created,
//! cached heights only invalidate when the width changes or the log was
//! cleared - there is no streaming growth to track.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::session::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageView;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Braille spinner for the typing indicator.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Height of the typing indicator row (1 line + borders).
const TYPING_INDICATOR_HEIGHT: u16 = 3;

/// Layout and scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last message.
    pub fn clamp_scroll(&mut self) {
        let total_content_height: u16 = self.layout.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the
    /// bottom. Called on scroll-down events so that scrolling past the end
    /// re-pins to bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let total_content_height: u16 = self.layout.heights.iter().sum();
        let max_y = total_content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Scrollable conversation view component.
/// Created fresh each frame with references to state and data.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [Message],
    pub is_awaiting_response: bool,
    pub theme: Theme,
    pub spinner_frame: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut MessageListState,
        messages: &'a [Message],
        is_awaiting_response: bool,
        theme: Theme,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            messages,
            is_awaiting_response,
            theme,
            spinner_frame,
        }
    }

    fn typing_indicator(&self) -> Paragraph<'static> {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        Paragraph::new(format!("{spinner} typing..."))
            .style(self.theme.assistant_style())
            .block(
                Block::bordered()
                    .border_type(ratatui::widgets::BorderType::Rounded)
                    .border_style(self.theme.chrome_style())
                    .title("assistant"),
            )
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Update layout cache (internal mutation)
        let layout = &mut self.state.layout;
        let reusable = layout.reusable_count(self.messages.len(), content_width);
        layout.heights.truncate(reusable.min(layout.heights.len()));

        for message in self.messages.iter().skip(layout.heights.len()) {
            layout
                .heights
                .push(MessageView::calculate_height(message, content_width));
        }
        layout.rebuild_prefix_heights();
        layout.update_metadata(self.messages.len(), content_width);

        let message_height: u16 = self.state.layout.heights.iter().sum();
        let indicator_height = if self.is_awaiting_response {
            TYPING_INDICATOR_HEIGHT
        } else {
            0
        };
        let canvas_height = message_height + indicator_height;

        // 2. Clamp scroll offset to prevent overscrolling past content.
        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible messages into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let height = self.state.layout.heights[i];
            let message_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(MessageView::new(&self.messages[i], self.theme), message_rect);
            y_offset += height;
        }

        if self.is_awaiting_response {
            let indicator_rect = Rect::new(
                0,
                message_height,
                content_width,
                TYPING_INDICATOR_HEIGHT,
            );
            scroll_view.render_widget(self.typing_indicator(), indicator_rect);
        }

        // Auto-scroll (mutation)
        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler lives on `MessageListState` rather than `MessageList`:
/// scrolling needs persistent state, and `MessageList` is recreated each
/// frame with fresh props, so it can't hold any.
impl EventHandler for MessageListState {
    type Event = (); // Scrolling is handled internally, nothing bubbles up

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            _ => None,
        }
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    message_count: usize,
    content_width: u16,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            message_count: 0,
            content_width: 0,
        }
    }

    /// How many cached heights are still valid. Messages are immutable and
    /// the log is append-only, so everything cached stays valid unless the
    /// width changed or the log shrank (conversation cleared).
    pub fn reusable_count(&self, message_count: usize, content_width: u16) -> usize {
        if self.content_width != content_width {
            return 0;
        }
        if message_count < self.message_count {
            return 0;
        }
        self.message_count
    }

    pub fn update_metadata(&mut self, message_count: usize, content_width: u16) {
        self.message_count = message_count;
        self.content_width = content_width;
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
    }

    /// Range of message indices worth rendering for the given viewport,
    /// with half a viewport of buffer on each side.
    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Message;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_layout_cache_reusable() {
        let mut cache = LayoutCache::new();
        cache.heights = vec![3; 5]; // Simulating 5 messages of height 3
        cache.update_metadata(5, 80);

        // Same everything -> all reusable
        assert_eq!(cache.reusable_count(5, 80), 5);

        // New message appended -> existing 5 still reusable
        assert_eq!(cache.reusable_count(6, 80), 5);

        // Width changed -> nothing reusable
        assert_eq!(cache.reusable_count(5, 40), 0);

        // Log shrank (cleared) -> nothing reusable
        assert_eq!(cache.reusable_count(0, 80), 0);
    }

    #[test]
    fn test_prefix_heights_accumulate() {
        let mut cache = LayoutCache::new();
        cache.heights = vec![3, 5, 4];
        cache.rebuild_prefix_heights();
        assert_eq!(cache.prefix_heights, vec![3, 8, 12]);
    }

    #[test]
    fn test_visible_range_covers_viewport() {
        let mut cache = LayoutCache::new();
        cache.heights = vec![4; 20]; // 20 messages, 4 rows each, 80 rows total
        cache.rebuild_prefix_heights();

        // Viewport of 12 rows at offset 40: messages around rows 34..58
        let range = cache.visible_range(40, 12);
        assert!(range.start <= 10 && range.end >= 14);
        assert!(range.end <= 20);
    }

    #[test]
    fn test_render_shows_messages_and_typing_indicator() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        let messages = vec![
            Message::user("What are the symptoms of diabetes?"),
            Message::assistant("Common symptoms include..."),
        ];
        let mut state = MessageListState::new();

        terminal
            .draw(|f| {
                let mut list = MessageList::new(&mut state, &messages, true, Theme::Dark, 0);
                list.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("What are the symptoms of"));
        assert!(text.contains("Common symptoms include..."));
        assert!(text.contains("typing..."));
    }

    #[test]
    fn test_scroll_up_unpins_from_bottom() {
        let mut state = MessageListState::new();
        assert!(state.stick_to_bottom);

        state.handle_event(&TuiEvent::ScrollUp);
        assert!(!state.stick_to_bottom);
    }

    #[test]
    fn test_scroll_down_repins_at_bottom() {
        let mut state = MessageListState::new();
        state.stick_to_bottom = false;
        state.layout.heights = vec![3, 3];
        state.viewport_height = 20; // Everything fits, so any scroll-down repins

        state.handle_event(&TuiEvent::ScrollDown);
        assert!(state.stick_to_bottom);
    }
}
