//! Frame composition: arranges the title bar, conversation area, input box,
//! and disclaimer footer, plus the shortcuts overlay when open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::session::Session;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, ShortcutsOverlay, TitleBar, Welcome};

const DISCLAIMER: &str =
    "Not a substitute for professional medical advice, diagnosis, or treatment.";

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3), Length(1)]);
    let [title_area, main_area, input_area, footer_area] = layout.areas(frame.area());

    TitleBar::new(tui.status_note.clone(), tui.theme).render(frame, title_area);

    // Welcome screen until the first message lands, conversation after
    if session.messages.is_empty() && !session.is_awaiting_response {
        Welcome::new(&tui.suggested_questions, tui.suggestion_index, tui.theme)
            .render(frame, main_area);
    } else {
        MessageList::new(
            &mut tui.message_list,
            &session.messages,
            session.is_awaiting_response,
            tui.theme,
            spinner_frame,
        )
        .render(frame, main_area);
    }

    tui.input_box.render(frame, input_area);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(DISCLAIMER, tui.theme.chrome_style()),
        Span::styled("  Ctrl+/ shortcuts", tui.theme.chrome_style()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);

    // Overlay goes last so it sits on top of everything
    if tui.show_shortcuts {
        ShortcutsOverlay::new(tui.theme).render(frame, main_area);
    }
}
