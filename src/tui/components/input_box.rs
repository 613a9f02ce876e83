//! # InputBox Component
//!
//! Single-line question entry field.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Signal submission (Enter)
//! - Show a disabled affordance while a request is in flight
//!
//! ## State Management
//!
//! The buffer is internal state, mirrored into the session draft by the
//! parent after every edit. The parent clears the buffer only when a
//! submission was actually dispatched, so a rejected Enter (blank input,
//! request already in flight) leaves the typed text intact.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const PLACEHOLDER: &str = "Type your medical question here...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter. The parent decides whether the submission goes
    /// through; the buffer is not cleared here.
    Submit,
    /// Text content changed
    Edited,
}

/// Single-line text input.
///
/// # Props
///
/// - `is_awaiting_response`: dims the field while a request is outstanding
/// - `theme`: active palette
///
/// # State
///
/// - `buffer`: current text being typed
/// - `pos`: cursor position as a byte offset into `buffer`
/// - `scroll`: leftmost visible column, kept so the cursor stays on screen
pub struct InputBox {
    pub buffer: String,
    pub is_awaiting_response: bool,
    pub theme: Theme,
    pos: usize,
    scroll: usize,
}

impl InputBox {
    pub fn new(theme: Theme) -> Self {
        Self {
            buffer: String::new(),
            is_awaiting_response: false,
            theme,
            pos: 0,
            scroll: 0,
        }
    }

    /// Empty the buffer and reset the cursor. Called by the parent once a
    /// submission has been accepted.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pos = 0;
        self.scroll = 0;
    }

    /// Column of the cursor, counted in characters from the start of the
    /// buffer.
    fn cursor_col(&self) -> usize {
        self.buffer[..self.pos].chars().count()
    }

    /// Shift the horizontal scroll so the cursor column is visible within
    /// `inner_width` columns.
    fn update_scroll(&mut self, inner_width: usize) {
        if inner_width == 0 {
            return;
        }
        let col = self.cursor_col();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + inner_width {
            self.scroll = col + 1 - inner_width;
        }
    }

    /// Slice of the buffer visible at the current scroll offset.
    fn visible_text(&self, inner_width: usize) -> String {
        self.buffer
            .chars()
            .skip(self.scroll)
            .take(inner_width)
            .collect()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        self.update_scroll(inner_width);

        let title = if self.is_awaiting_response {
            "Question (waiting for answer)"
        } else {
            "Question"
        };

        let border_style = if self.is_awaiting_response {
            self.theme.chrome_style().add_modifier(Modifier::DIM)
        } else {
            self.theme.chrome_style()
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title(title);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .block(block)
                .style(self.theme.chrome_style().add_modifier(Modifier::DIM))
        } else {
            Paragraph::new(self.visible_text(inner_width))
                .block(block)
                .style(self.theme.user_style())
        };

        frame.render_widget(paragraph, area);

        if !self.is_awaiting_response {
            let cursor_x = area.x + 1 + (self.cursor_col() - self.scroll) as u16;
            let cursor_y = area.y + 1;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                Some(InputEvent::Edited)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: fold pasted line breaks into spaces
                let flattened = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.pos, &flattened);
                self.pos += flattened.len();
                Some(InputEvent::Edited)
            }
            TuiEvent::Backspace => {
                if self.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.pos);
                    self.buffer.drain(prev..self.pos);
                    self.pos = prev;
                    Some(InputEvent::Edited)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.pos);
                    self.buffer.drain(self.pos..next);
                    Some(InputEvent::Edited)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.pos > 0 {
                    self.pos = prev_char_boundary(&self.buffer, self.pos);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.pos < self.buffer.len() {
                    self.pos = next_char_boundary(&self.buffer, self.pos);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}

/// Byte offset of the character boundary immediately before `pos`.
fn prev_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos - 1;
    while !s.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Byte offset of the character boundary immediately after `pos`.
fn next_char_boundary(s: &str, pos: usize) -> usize {
    let mut p = pos + 1;
    while p < s.len() && !s.is_char_boundary(p) {
        p += 1;
    }
    p
}
