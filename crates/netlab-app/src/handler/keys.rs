//! Key event handlers for the lab pages

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Page};
use netlab_core::handshake::HandshakeAction;
use netlab_core::quiz::QuizPhase;

/// Convert key events to messages based on the current page
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Text-entry contexts capture printable keys before global shortcuts.
    if state.page == Page::Scan && state.scan.editing {
        return handle_key_scan_editing(state, key);
    }
    if state.page == Page::Calculator {
        return handle_key_calculator(state, key);
    }

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::NextPage),
        InputKey::BackTab => Some(Message::PreviousPage),

        InputKey::Char('t') => Some(Message::ToggleTheme),

        key => match state.page {
            Page::Handshake => handle_key_handshake(key),
            Page::Scan => handle_key_scan(key),
            Page::Quiz => handle_key_quiz(state, key),
            Page::Charts => handle_key_charts(key),
            Page::Campus => handle_key_campus(state, key),
            // Printable keys on the calculator are captured above.
            Page::Calculator => None,
        },
    }
}

/// Handle key events on the handshake page
fn handle_key_handshake(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('1') => Some(Message::HandshakeTrigger(HandshakeAction::SendSyn)),
        InputKey::Char('2') => Some(Message::HandshakeTrigger(HandshakeAction::SendSynAck)),
        InputKey::Char('3') => Some(Message::HandshakeTrigger(HandshakeAction::SendAck)),
        InputKey::Char('r') => Some(Message::HandshakeReset),
        _ => None,
    }
}

/// Handle key events on the scan page outside target editing
fn handle_key_scan(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('e') => Some(Message::ScanBeginEdit),
        InputKey::Char('s') => Some(Message::ScanCycleTechnique),
        InputKey::Enter => Some(Message::ScanSubmit),
        _ => None,
    }
}

/// Handle key events while editing the scan target
fn handle_key_scan_editing(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave editing mode, keeping the buffer
        InputKey::Esc => Some(Message::ScanEndEdit),

        // Confirm the target and launch; the submit drops editing mode
        InputKey::Enter => Some(Message::ScanSubmit),

        // Delete character
        InputKey::Backspace => {
            let mut text = state.scan.input.clone();
            text.pop();
            Some(Message::ScanInput { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::ScanInput {
            text: String::new(),
        }),

        // Type character
        InputKey::Char(c) => {
            let mut text = state.scan.input.clone();
            text.push(c);
            Some(Message::ScanInput { text })
        }

        // Force quit even while editing
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events on the quiz page
fn handle_key_quiz(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::QuizCursorUp),
        InputKey::Down => Some(Message::QuizCursorDown),

        // Enter answers during a session, starts/restarts otherwise
        InputKey::Enter => {
            if state.quiz.quiz.phase() == QuizPhase::Active {
                Some(Message::QuizAnswer)
            } else {
                Some(Message::QuizStart)
            }
        }

        _ => None,
    }
}

/// Handle key events on the calculator page
///
/// The payload field is always armed, so printable keys type into it and
/// the global shortcuts shrink to the non-printable ones.
fn handle_key_calculator(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::CalcCompute),

        InputKey::Backspace => {
            let mut text = state.calculator.input.clone();
            text.pop();
            Some(Message::CalcInput { text })
        }

        InputKey::CharCtrl('u') => Some(Message::CalcInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.calculator.input.clone();
            text.push(c);
            Some(Message::CalcInput { text })
        }

        InputKey::Tab => Some(Message::NextPage),
        InputKey::BackTab => Some(Message::PreviousPage),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events on the charts page
fn handle_key_charts(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::ChartsFocusPrevious),
        InputKey::Down => Some(Message::ChartsFocusNext),
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ChartsCycleKind),
        _ => None,
    }
}

/// Handle key events on the campus map page
fn handle_key_campus(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::MapCursorUp),
        InputKey::Down => Some(Message::MapCursorDown),
        InputKey::Enter => Some(Message::MapFlyToAuthor),
        InputKey::Esc if state.map.popup.is_some() => Some(Message::MapClosePopup),
        _ => None,
    }
}
