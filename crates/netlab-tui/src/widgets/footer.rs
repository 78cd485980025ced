//! Bottom bar: key hints for the active page, wall clock on the right.

use netlab_app::state::{AppState, Page};
use netlab_core::quiz::QuizPhase;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    /// Key/label pairs for the active page, most specific first.
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints: Vec<(&'static str, &'static str)> = match self.state.page {
            Page::Handshake => vec![("1/2/3", "send"), ("r", "reset")],
            Page::Scan => {
                if self.state.scan.editing {
                    vec![("Esc", "done"), ("Ctrl+U", "clear"), ("Enter", "scan")]
                } else {
                    vec![("e", "edit target"), ("s", "technique"), ("Enter", "scan")]
                }
            }
            Page::Quiz => match self.state.quiz.quiz.phase() {
                QuizPhase::Active => vec![("↑/↓", "select"), ("Enter", "answer")],
                QuizPhase::Idle => vec![("Enter", "start")],
                QuizPhase::Complete => vec![("Enter", "restart")],
            },
            Page::Calculator => vec![("0-9", "type"), ("Enter", "compute")],
            Page::Charts => vec![("↑/↓", "chart"), ("Space", "type")],
            Page::Campus => vec![("↑/↓", "author"), ("Enter", "fly"), ("Esc", "close")],
        };

        hints.push(("Tab", "page"));
        if self.text_entry_active() {
            // Plain letters go into the input here, so only Ctrl+C quits.
            hints.push(("Ctrl+C", "quit"));
        } else {
            hints.push(("t", "theme"));
            hints.push(("q", "quit"));
        }
        hints
    }

    /// Pages where printable keys are captured by an input field.
    fn text_entry_active(&self) -> bool {
        match self.state.page {
            Page::Calculator => true,
            Page::Scan => self.state.scan.editing,
            _ => false,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted(self.palette)));
            }
            spans.push(Span::styled(key, styles::keybinding(self.palette)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, styles::text_muted(self.palette)));
        }
        let hints = Line::from(spans);

        let clock = self.state.clock.display();
        let clock_w = clock.len() as u16;
        let hint_w = area.width.saturating_sub(clock_w + 2);
        buf.set_line(area.x + 1, area.y, &hints, hint_w);

        if area.width > clock_w + 1 {
            let line = Line::styled(clock.to_string(), styles::text_secondary(self.palette));
            buf.set_line(area.right() - clock_w - 1, area.y, &line, clock_w);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlab_app::handler;
    use netlab_app::message::Message;

    fn render(state: &AppState) -> String {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        let palette = Palette::for_mode(state.theme);
        Footer::new(state, palette).render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_handshake_footer_has_page_hints_and_globals() {
        let state = AppState::default();
        let content = render(&state);
        assert!(content.contains("1/2/3 send"));
        assert!(content.contains("r reset"));
        assert!(content.contains("Tab page"));
        assert!(content.contains("q quit"));
    }

    #[test]
    fn test_calculator_footer_swaps_quit_key() {
        let mut state = AppState::default();
        handler::update(&mut state, Message::GoToPage(Page::Calculator));
        let content = render(&state);
        assert!(content.contains("Ctrl+C quit"));
        assert!(!content.contains("q quit"));
        assert!(!content.contains("t theme"));
    }

    #[test]
    fn test_scan_footer_changes_while_editing() {
        let mut state = AppState::default();
        handler::update(&mut state, Message::GoToPage(Page::Scan));
        let content = render(&state);
        assert!(content.contains("e edit target"));

        handler::update(&mut state, Message::ScanBeginEdit);
        let content = render(&state);
        assert!(content.contains("Esc done"));
        assert!(content.contains("Ctrl+C quit"));
    }

    #[test]
    fn test_footer_shows_the_clock() {
        let state = AppState::default();
        let content = render(&state);
        assert!(content.contains(state.clock.display()));
    }
}
