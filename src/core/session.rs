//! # Session State
//!
//! The conversation session: message log, draft text, and the
//! request-in-flight flag. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Session
//! ├── messages: Vec<Message>        // append-only conversation log
//! ├── draft: String                 // not-yet-submitted input text
//! ├── is_awaiting_response: bool    // waiting for the answer service
//! └── generation: u64               // bumped on clear(); stale replies are dropped
//! ```
//!
//! State changes only happen through the named operations below
//! (`submit`, `clear`, `set_draft`, ...). This keeps things predictable,
//! so no surprise mutations.
//!
//! Per submission the session moves `Idle → Awaiting → Idle`. `Awaiting`
//! is only left when the transport call resolves (`answer_received` or
//! `answer_failed`) - there is no cancel.

use log::debug;

/// Fixed user-facing text shown when a transport call fails.
/// The raw failure detail is logged by the caller, never displayed.
pub const ERROR_NOTICE: &str =
    "Sorry, I encountered an error processing your request. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in the conversation log. Immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Set only on assistant messages that stand in for a failed request.
    /// Affects presentation only.
    pub is_error: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            is_error: false,
        }
    }

    fn error_notice() -> Self {
        Self {
            sender: Sender::Assistant,
            text: ERROR_NOTICE.to_string(),
            is_error: true,
        }
    }
}

/// Result of a submission attempt.
///
/// `Dispatched` instructs the caller to issue exactly one transport call and
/// report back with the same generation. `Ignored` means the submission was
/// accepted but dropped (blank text, or a request already in flight) - no
/// state changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Dispatched { query: String, generation: u64 },
    Ignored,
}

pub struct Session {
    pub messages: Vec<Message>,
    pub draft: String,
    pub is_awaiting_response: bool,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            draft: String::new(),
            is_awaiting_response: false,
            generation: 0,
        }
    }

    /// Replaces the draft text. Unconstrained - any string, including empty.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submits `text` as a user message.
    ///
    /// A no-op when `text` trims to empty or a request is already in flight.
    /// On acceptance the message is stored exactly as typed (untrimmed), the
    /// draft is cleared in the same step, and the session enters `Awaiting`.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() || self.is_awaiting_response {
            return SubmitOutcome::Ignored;
        }

        self.messages.push(Message::user(text));
        self.draft.clear();
        self.is_awaiting_response = true;

        SubmitOutcome::Dispatched {
            query: text.to_string(),
            generation: self.generation,
        }
    }

    /// Submits the current draft.
    pub fn submit_draft(&mut self) -> SubmitOutcome {
        let text = self.draft.clone();
        self.submit(&text)
    }

    /// Sets the draft to a suggested question and submits it immediately.
    /// A plain sequential composition of `set_draft` and `submit_draft`.
    pub fn select_suggested_question(&mut self, text: &str) -> SubmitOutcome {
        self.set_draft(text);
        self.submit_draft()
    }

    /// Empties the conversation log.
    ///
    /// Does not touch `is_awaiting_response`: an in-flight request still
    /// completes and returns the session to `Idle`. Its reply carries the
    /// old generation, so `finish` drops it instead of appending to the
    /// freshly cleared log.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.generation += 1;
    }

    /// Records a successful transport resolution.
    pub fn answer_received(&mut self, generation: u64, answer: String) {
        self.finish(generation, Message::assistant(answer));
    }

    /// Records a failed transport resolution. The log gets the fixed
    /// [`ERROR_NOTICE`]; the raw error stays with the caller for logging.
    pub fn answer_failed(&mut self, generation: u64) {
        self.finish(generation, Message::error_notice());
    }

    fn finish(&mut self, generation: u64, message: Message) {
        // The resolution always ends the single in-flight request, even when
        // the conversation was cleared while it was outstanding.
        self.is_awaiting_response = false;

        if generation != self.generation {
            debug!(
                "Dropping reply from generation {} (current {})",
                generation, self.generation
            );
            return;
        }

        self.messages.push(message);
    }
}
