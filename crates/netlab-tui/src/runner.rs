//! Main TUI runner - entry point and event loop

use std::path::Path;

use tokio::sync::mpsc;

use netlab_app::config;
use netlab_app::handler;
use netlab_app::message::Message;
use netlab_app::signals;
use netlab_app::state::{AppState, Page};
use netlab_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application.
pub async fn run(start_page: Option<Page>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let config_dir = config::default_config_dir();
    let settings = config::load_settings(&config_dir);
    info!("Loaded settings: theme={}", settings.theme.name());

    let mut term = ratatui::init();
    let mut state = AppState::new(&settings, start_page);

    // Unified message channel (signal handler and any background senders)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, &config_dir);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    config_dir: &Path,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler, etc.)
        while let Ok(message) = msg_rx.try_recv() {
            process_message(state, message);
        }

        flush_settings(state, config_dir);

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, following the chain
/// of follow-up messages to completion.
fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}

/// Persist the theme after a toggle marked the settings dirty.
///
/// A failed write is logged and dropped; the next toggle retries.
fn flush_settings(state: &mut AppState, config_dir: &Path) {
    if !state.settings_dirty {
        return;
    }
    state.settings_dirty = false;

    let settings = config::Settings { theme: state.theme };
    if let Err(e) = config::save_settings(config_dir, &settings) {
        warn!("Failed to persist settings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlab_core::theme::ThemeMode;

    #[test]
    fn test_process_message_follows_the_chain() {
        let mut state = AppState::default();
        // A key press resolves to its page action in one call.
        state.page = Page::Quiz;
        process_message(&mut state, Message::Key(netlab_app::InputKey::Enter));
        assert_ne!(
            state.quiz.quiz.phase(),
            netlab_core::quiz::QuizPhase::Idle,
            "Enter on the quiz page should start the session"
        );
    }

    #[test]
    fn test_flush_settings_writes_only_when_dirty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut state = AppState::default();

        flush_settings(&mut state, temp.path());
        assert!(!temp.path().join("settings.toml").exists());

        state.toggle_theme();
        assert!(state.settings_dirty);
        flush_settings(&mut state, temp.path());
        assert!(!state.settings_dirty);
        assert!(temp.path().join("settings.toml").exists());

        let saved = config::load_settings(temp.path());
        assert_eq!(saved.theme, ThemeMode::Dark);
    }
}
