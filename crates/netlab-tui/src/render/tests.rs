//! Tests for the full view tree

use netlab_app::config::Settings;
use netlab_app::state::{AppState, Page};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::view;

fn state_on(page: Page) -> AppState {
    AppState::new(&Settings::default(), Some(page))
}

fn render_state(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| view(frame, state)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// A content anchor unique to each page body.
fn page_anchor(page: Page) -> &'static str {
    match page {
        Page::Handshake => "Three-Way Handshake",
        Page::Scan => "Technique: TCP SYN",
        Page::Quiz => "Protocol Quiz",
        Page::Calculator => "Overhead Calculator",
        Page::Charts => "Header Sizes (Bytes)",
        Page::Campus => "Campus Santiago",
    }
}

#[test]
fn test_every_page_renders_with_chrome() {
    for page in Page::ALL {
        let state = state_on(page);
        let content = render_state(&state, 100, 30);
        assert!(content.contains("NetLab"), "{page:?} lost the brand");
        assert!(
            content.contains(page.title()),
            "{page:?} missing its own tab"
        );
        assert!(
            content.contains(page_anchor(page)),
            "{page:?} missing body content"
        );
        assert!(
            content.contains(state.clock.display()),
            "{page:?} missing the clock"
        );
    }
}

#[test]
fn test_dark_theme_still_renders_every_page() {
    for page in Page::ALL {
        let mut state = state_on(page);
        state.toggle_theme();
        let content = render_state(&state, 100, 30);
        assert!(content.contains(page_anchor(page)));
    }
}

#[test]
fn test_footer_hints_follow_the_page() {
    let handshake = render_state(&state_on(Page::Handshake), 100, 30);
    assert!(handshake.contains("q quit"));

    let calculator = render_state(&state_on(Page::Calculator), 100, 30);
    assert!(calculator.contains("Ctrl+C quit"));
}

#[test]
fn test_small_terminal_never_panics() {
    for page in Page::ALL {
        let state = state_on(page);
        render_state(&state, 30, 8);
        render_state(&state, 12, 4);
    }
}
