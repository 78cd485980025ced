//! Overhead calculator page.
//!
//! A single numeric input; the result line breaks the transmitted size into
//! payload plus the fixed TCP/IP header cost.

use netlab_app::state::CalculatorPageState;
use netlab_core::overhead::{MSG_NOT_A_NUMBER, OVERHEAD_BYTES};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::{styles, Palette};

pub struct CalculatorPage<'a> {
    state: &'a CalculatorPageState,
    palette: &'a Palette,
}

impl<'a> CalculatorPage<'a> {
    pub fn new(state: &'a CalculatorPageState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn input_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.state.input.clone(), styles::text_primary(self.palette)),
            Span::styled("▏", styles::accent(self.palette)),
        ])
    }

    fn result_line(&self, payload: u64, total: u64) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{payload} B payload + {OVERHEAD_BYTES} B headers = "),
                styles::text_secondary(self.palette),
            ),
            Span::styled(format!("{total} B total"), styles::accent_bold(self.palette)),
        ])
    }
}

impl Widget for CalculatorPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, "Overhead Calculator", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 30 || inner.height < 7 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // explainer
            Constraint::Length(1),
            Constraint::Length(3), // input card
            Constraint::Length(1), // warning
            Constraint::Length(1), // result
            Constraint::Min(0),
        ])
        .split(inner);

        let explainer = format!(
            "Every TCP/IP segment carries about {OVERHEAD_BYTES} B of headers on top of the payload."
        );
        let line = Line::styled(explainer, styles::text_secondary(self.palette));
        buf.set_line(rows[0].x, rows[0].y, &line, rows[0].width);

        let input_block = styles::card_block(self.palette, "Payload size (bytes)", true);
        let input_inner = input_block.inner(rows[2]);
        input_block.render(rows[2], buf);
        let input = self.input_line();
        buf.set_line(input_inner.x, input_inner.y, &input, input_inner.width);

        match self.state.result {
            Some(result) => {
                if result.warning {
                    let warning =
                        Line::styled(MSG_NOT_A_NUMBER, styles::status_yellow(self.palette));
                    buf.set_line(rows[3].x, rows[3].y, &warning, rows[3].width);
                }
                let line = self.result_line(result.payload, result.total);
                buf.set_line(rows[4].x, rows[4].y, &line, rows[4].width);
            }
            None => {
                let hint = Line::from(vec![
                    Span::styled("Type a payload size and press ", styles::text_muted(self.palette)),
                    Span::styled("Enter", styles::keybinding(self.palette)),
                    Span::styled(".", styles::text_muted(self.palette)),
                ]);
                buf.set_line(rows[4].x, rows[4].y, &hint, rows[4].width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlab_core::overhead::compute_overhead;
    use netlab_core::theme::ThemeMode;

    fn render(state: &CalculatorPageState) -> String {
        let area = Rect::new(0, 0, 80, 16);
        let mut buf = Buffer::empty(area);
        CalculatorPage::new(state, Palette::for_mode(ThemeMode::Light)).render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_empty_page_shows_the_prompt() {
        let content = render(&CalculatorPageState::default());
        assert!(content.contains("Overhead Calculator"));
        assert!(content.contains("Payload size (bytes)"));
        assert!(content.contains("Type a payload size and press Enter."));
    }

    #[test]
    fn test_result_breaks_down_the_total() {
        let state = CalculatorPageState {
            input: "100".to_string(),
            result: Some(compute_overhead("100")),
        };
        let content = render(&state);
        assert!(content.contains("100"));
        assert!(content.contains("100 B payload + 40 B headers = 140 B total"));
        assert!(!content.contains(MSG_NOT_A_NUMBER));
    }

    #[test]
    fn test_non_numeric_input_shows_the_warning() {
        let state = CalculatorPageState {
            input: "abc".to_string(),
            result: Some(compute_overhead("abc")),
        };
        let content = render(&state);
        assert!(content.contains(MSG_NOT_A_NUMBER));
        assert!(content.contains("0 B payload + 40 B headers = 40 B total"));
    }
}
