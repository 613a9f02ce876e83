//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into session operations.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! session controller in `core` stays presentation-agnostic so a different
//! front end could drive it.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Awaiting a response**: draws every ~80ms so the typing indicator
//!   animates smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::session::{Session, SubmitOutcome};
use crate::transport::{Answer, AnswerService, ApiClient, TransportError};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

/// Messages sent back to the event loop from background tasks.
pub enum Reply {
    /// Outcome of a dispatched query, tagged with the conversation
    /// generation it belongs to.
    Answer {
        generation: u64,
        result: Result<Answer, TransportError>,
    },
    /// Outcome of the startup reachability probe.
    Status(Result<(), TransportError>),
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub input_box: InputBox,
    // Presentation toggles
    pub theme: Theme,
    pub show_shortcuts: bool,
    // Highlighted suggestion on the welcome screen (None = typing instead)
    pub suggestion_index: Option<usize>,
    // Shown in the title bar when the startup probe failed
    pub status_note: Option<String>,
    pub suggested_questions: Vec<String>,
}

impl TuiState {
    pub fn new(theme: Theme, suggested_questions: Vec<String>) -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(theme),
            theme,
            show_shortcuts: false,
            suggestion_index: None,
            status_note: None,
            suggested_questions,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = ApiClient::new(config.api_base_url.clone());
    let service: Arc<dyn AnswerService> = Arc::new(client.clone());

    let mut session = Session::new();
    let initial_theme = if config.dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    };
    let mut tui = TuiState::new(initial_theme, config.suggested_questions.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for replies from background tasks
    let (tx, rx) = mpsc::channel();

    spawn_status_check(client, tx.clone());

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with session/TUI state
        tui.input_box.theme = tui.theme;
        tui.input_box.is_awaiting_response = session.is_awaiting_response;

        // The typing indicator is the only animation
        let animating = session.is_awaiting_response;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &session, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits, overlay or not
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit = true;
                continue;
            }

            // While the shortcuts overlay is open it swallows everything
            // except the keys that close it
            if tui.show_shortcuts {
                if matches!(event, TuiEvent::Escape | TuiEvent::ShowShortcuts) {
                    tui.show_shortcuts = false;
                }
                continue;
            }

            match event {
                TuiEvent::ShowShortcuts => {
                    tui.show_shortcuts = true;
                }
                TuiEvent::ClearConversation => {
                    session.clear();
                    tui.message_list = MessageListState::new();
                    tui.suggestion_index = None;
                }
                TuiEvent::ToggleTheme => {
                    tui.theme = tui.theme.toggle();
                }
                // Esc with no overlay open does nothing
                TuiEvent::Escape => {}
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.message_list.handle_event(&event);
                }
                // Up/Down move the suggestion highlight on the welcome
                // screen, scroll the conversation otherwise
                TuiEvent::CursorUp if welcome_visible(&session) => {
                    tui.suggestion_index = step_suggestion(
                        tui.suggestion_index,
                        tui.suggested_questions.len(),
                        -1,
                    );
                }
                TuiEvent::CursorDown if welcome_visible(&session) => {
                    tui.suggestion_index = step_suggestion(
                        tui.suggestion_index,
                        tui.suggested_questions.len(),
                        1,
                    );
                }
                TuiEvent::CursorUp | TuiEvent::CursorDown => {
                    tui.message_list.handle_event(&event);
                }
                TuiEvent::Submit
                    if welcome_visible(&session) && tui.suggestion_index.is_some() =>
                {
                    let index = tui.suggestion_index.unwrap_or(0);
                    let question = tui.suggested_questions[index].clone();
                    let outcome = session.select_suggested_question(&question);
                    handle_outcome(outcome, &mut tui, &service, &tx);
                }
                _ => {
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        match input_event {
                            InputEvent::Submit => {
                                let outcome = session.submit_draft();
                                handle_outcome(outcome, &mut tui, &service, &tx);
                            }
                            InputEvent::Edited => {
                                session.set_draft(tui.input_box.buffer.clone());
                                tui.suggestion_index = None;
                            }
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle replies from background tasks
        while let Ok(reply) = rx.try_recv() {
            needs_redraw = true;
            match reply {
                Reply::Answer { generation, result } => match result {
                    Ok(answer) => session.answer_received(generation, answer.answer),
                    Err(e) => {
                        // Raw failure goes to the log only; the transcript
                        // gets the generic notice
                        warn!("answer request failed: {e}");
                        session.answer_failed(generation);
                    }
                },
                Reply::Status(result) => {
                    tui.status_note = match result {
                        Ok(()) => None,
                        Err(e) => {
                            warn!("status probe failed: {e}");
                            Some("backend unreachable".to_string())
                        }
                    };
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}

fn welcome_visible(session: &Session) -> bool {
    session.messages.is_empty() && !session.is_awaiting_response
}

/// Move the suggestion highlight by `delta`, entering the list at the top or
/// bottom when nothing is highlighted yet. Clamps at the ends.
fn step_suggestion(current: Option<usize>, len: usize, delta: i32) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(if delta > 0 { 0 } else { len - 1 }),
        Some(i) => {
            let next = (i as i32 + delta).clamp(0, len as i32 - 1);
            Some(next as usize)
        }
    }
}

fn handle_outcome(
    outcome: SubmitOutcome,
    tui: &mut TuiState,
    service: &Arc<dyn AnswerService>,
    tx: &mpsc::Sender<Reply>,
) {
    if let SubmitOutcome::Dispatched { query, generation } = outcome {
        tui.input_box.clear();
        tui.suggestion_index = None;
        // Re-pin so the new exchange is in view
        tui.message_list.stick_to_bottom = true;
        spawn_query(service.clone(), query, generation, tx.clone());
    }
}

fn spawn_query(
    service: Arc<dyn AnswerService>,
    query: String,
    generation: u64,
    tx: mpsc::Sender<Reply>,
) {
    info!("Spawning query request (generation {generation})");
    tokio::spawn(async move {
        let result = service.send_query(&query).await;
        if tx.send(Reply::Answer { generation, result }).is_err() {
            warn!("Failed to send answer reply: receiver dropped");
        }
    });
}

fn spawn_status_check(client: ApiClient, tx: mpsc::Sender<Reply>) {
    tokio::spawn(async move {
        let result = client.check_status().await;
        if tx.send(Reply::Status(result)).is_err() {
            warn!("Failed to send status reply: receiver dropped");
        }
    });
}
