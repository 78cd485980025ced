//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;
use netlab_core::scan::{self, ScanRun};

use crate::message::Message;
use crate::state::{AppState, ChartFocus};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            handle_tick(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation & Theme
        // ─────────────────────────────────────────────────────────
        Message::NextPage => {
            state.page = state.page.next();
            UpdateResult::none()
        }

        Message::PreviousPage => {
            state.page = state.page.previous();
            UpdateResult::none()
        }

        Message::GoToPage(page) => {
            state.page = page;
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            state.toggle_theme();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Handshake Page
        // ─────────────────────────────────────────────────────────
        Message::HandshakeTrigger(action) => {
            state.handshake.trigger(action);
            UpdateResult::none()
        }

        Message::HandshakeReset => {
            state.handshake.reset();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scan Page
        // ─────────────────────────────────────────────────────────
        Message::ScanBeginEdit => {
            state.scan.editing = true;
            UpdateResult::none()
        }

        Message::ScanEndEdit => {
            state.scan.editing = false;
            UpdateResult::none()
        }

        Message::ScanInput { text } => {
            state.scan.input = text;
            UpdateResult::none()
        }

        Message::ScanCycleTechnique => {
            state.scan.technique = state.scan.technique.next();
            UpdateResult::none()
        }

        Message::ScanSubmit => {
            handle_scan_submit(state);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Quiz Page
        // ─────────────────────────────────────────────────────────
        Message::QuizStart => {
            state.quiz.quiz.start();
            state.quiz.cursor = 0;
            UpdateResult::none()
        }

        Message::QuizCursorUp => {
            state.quiz.cursor = state.quiz.cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::QuizCursorDown => {
            if let Some((_, question)) = state.quiz.quiz.current() {
                let last = question.options.len() - 1;
                state.quiz.cursor = (state.quiz.cursor + 1).min(last);
            }
            UpdateResult::none()
        }

        Message::QuizAnswer => {
            if let Some((_, question)) = state.quiz.quiz.current() {
                if let Some(selected) = question.options.get(state.quiz.cursor) {
                    state.quiz.quiz.answer(selected);
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Calculator Page
        // ─────────────────────────────────────────────────────────
        Message::CalcInput { text } => {
            state.calculator.input = text;
            UpdateResult::none()
        }

        Message::CalcCompute => {
            state.calculator.result = Some(netlab_core::compute_overhead(&state.calculator.input));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Charts Page
        // ─────────────────────────────────────────────────────────
        Message::ChartsFocusNext | Message::ChartsFocusPrevious => {
            state.charts.focus = state.charts.focus.other();
            UpdateResult::none()
        }

        Message::ChartsCycleKind => {
            match state.charts.focus {
                ChartFocus::HeaderSizes => {
                    state.charts.header_kind = state.charts.header_kind.next();
                }
                ChartFocus::Techniques => {
                    state.charts.technique_kind = state.charts.technique_kind.next();
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Campus Map Page
        // ─────────────────────────────────────────────────────────
        Message::MapCursorUp => {
            state.map.cursor = state.map.cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::MapCursorDown => {
            let last = netlab_core::geo::AUTHORS.len() - 1;
            state.map.cursor = (state.map.cursor + 1).min(last);
            UpdateResult::none()
        }

        Message::MapFlyToAuthor => {
            state.map.flight = Some(netlab_core::geo::FlyTo::new(
                state.map.center,
                state.map.zoom,
                netlab_core::geo::FLY_TO_TARGET,
                f64::from(netlab_core::geo::FLY_TO_ZOOM),
            ));
            state.map.popup = Some(netlab_core::geo::DETI_MARKER);
            UpdateResult::none()
        }

        Message::MapClosePopup => {
            state.map.popup = None;
            UpdateResult::none()
        }
    }
}

/// Advance every time-driven piece of state by one tick.
fn handle_tick(state: &mut AppState) {
    state.clock.update(Local::now());
    state.handshake.tick();

    if let Some(run) = state.scan.run.as_mut() {
        // Milestones rewrite the displayed status; between them an error
        // message from a rejected submit stays visible.
        if let Some(text) = run.tick() {
            state.scan.status = text.to_string();
        }
    }

    let shown = state.quiz.quiz.current().map(|(number, _)| number);
    state.quiz.quiz.tick();
    if state.quiz.quiz.current().map(|(number, _)| number) != shown {
        state.quiz.cursor = 0;
    }

    if let Some(flight) = state.map.flight.as_mut() {
        let landed = flight.tick();
        state.map.center = flight.center();
        state.map.zoom = flight.zoom();
        if landed {
            state.map.flight = None;
        }
    }
}

/// Validate the target and start (or refuse to start) the scripted scan.
fn handle_scan_submit(state: &mut AppState) {
    state.scan.editing = false;
    match scan::resolve_target(&state.scan.input) {
        Some(target) => {
            state.scan.invalid = false;
            let run = ScanRun::start(state.scan.technique, target);
            state.scan.status = run.status().to_string();
            state.scan.run = Some(run);
        }
        None => {
            // A running script keeps ticking; only the display changes.
            state.scan.invalid = true;
            state.scan.status = scan::MSG_INVALID_TARGET.to_string();
        }
    }
}
