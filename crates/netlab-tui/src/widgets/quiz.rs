//! Protocol quiz page.
//!
//! Idle shows the start affordance, Active shows the numbered prompt with
//! its four options and the answer feedback, Complete shows the closing
//! message with the restart affordance.

use netlab_app::state::QuizPageState;
use netlab_core::quiz::{Quiz, QuizFeedback, QuizPhase, QuizQuestion, MSG_COMPLETE};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme::{styles, Palette};

pub struct QuizPage<'a> {
    state: &'a QuizPageState,
    palette: &'a Palette,
}

impl<'a> QuizPage<'a> {
    pub fn new(state: &'a QuizPageState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn enter_hint(&self, rest: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled("Press ", styles::text_secondary(self.palette)),
            Span::styled("Enter", styles::keybinding(self.palette)),
            Span::styled(rest, styles::text_secondary(self.palette)),
        ])
    }

    fn feedback_line(&self, feedback: QuizFeedback) -> Line<'static> {
        let style = match feedback {
            QuizFeedback::Correct => {
                styles::status_green(self.palette).add_modifier(Modifier::BOLD)
            }
            QuizFeedback::Incorrect => styles::status_red(self.palette),
        };
        Line::styled(feedback.text(), style)
    }

    fn render_idle(&self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }
        let intro = format!(
            "{} questions on TCP/IP headers, the handshake and scan techniques.",
            Quiz::total()
        );
        let line = Line::styled(intro, styles::text_secondary(self.palette));
        buf.set_line(area.x, area.y, &line, area.width);

        let hint = self.enter_hint(" to start.");
        buf.set_line(area.x, area.y + 2, &hint, area.width);
    }

    fn render_active(&self, number: usize, question: &QuizQuestion, area: Rect, buf: &mut Buffer) {
        if area.height < 11 {
            return;
        }
        let rows = Layout::vertical([
            Constraint::Length(1), // "Question n of total"
            Constraint::Length(1),
            Constraint::Length(2), // prompt, wrapped
            Constraint::Length(1),
            Constraint::Length(4), // options
            Constraint::Length(1),
            Constraint::Length(1), // feedback
            Constraint::Min(0),
        ])
        .split(area);

        let heading = format!("Question {} of {}", number, Quiz::total());
        let line = Line::styled(heading, styles::text_secondary(self.palette));
        buf.set_line(rows[0].x, rows[0].y, &line, rows[0].width);

        Paragraph::new(question.prompt)
            .style(styles::text_primary(self.palette).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(rows[2], buf);

        for (i, option) in question.options.iter().enumerate() {
            let y = rows[4].y + i as u16;
            let selected = i == self.state.cursor;
            let (marker, style) = if selected {
                ("▸ ", styles::focused_selected(self.palette))
            } else {
                ("  ", styles::text_primary(self.palette))
            };
            let line = Line::from(vec![
                Span::styled(marker, styles::accent(self.palette)),
                Span::styled(*option, style),
            ]);
            buf.set_line(rows[4].x, y, &line, rows[4].width);
        }

        if let Some(feedback) = self.state.quiz.feedback() {
            let line = self.feedback_line(feedback);
            buf.set_line(rows[6].x, rows[6].y, &line, rows[6].width);
        }
    }

    fn render_complete(&self, area: Rect, buf: &mut Buffer) {
        if area.height < 5 {
            return;
        }
        if let Some(feedback) = self.state.quiz.feedback() {
            let line = self.feedback_line(feedback);
            buf.set_line(area.x, area.y, &line, area.width);
        }

        let done = Line::styled(
            MSG_COMPLETE,
            styles::status_green(self.palette).add_modifier(Modifier::BOLD),
        );
        buf.set_line(area.x, area.y + 2, &done, area.width);

        let hint = self.enter_hint(" to restart.");
        buf.set_line(area.x, area.y + 4, &hint, area.width);
    }
}

impl Widget for QuizPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, "Protocol Quiz", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 20 || inner.height < 3 {
            return;
        }

        match self.state.quiz.phase() {
            QuizPhase::Idle => self.render_idle(inner, buf),
            QuizPhase::Active => {
                if let Some((number, question)) = self.state.quiz.current() {
                    self.render_active(number, question, inner, buf);
                }
            }
            QuizPhase::Complete => self.render_complete(inner, buf),
        }
    }
}
