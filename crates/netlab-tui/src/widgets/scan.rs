//! Simulated port scan page.
//!
//! Target entry card, technique selector, the echoed command line, a
//! progress gauge and the milestone status line.

use netlab_app::state::ScanPageState;
use netlab_core::scan::{DEFAULT_TARGET, MSG_COMPLETE, MSG_INVALID_TARGET};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Widget, Wrap};

use crate::theme::{styles, Palette};

const DISCLAIMER: &str = "All output is scripted for teaching. No packets leave this machine.";

pub struct ScanPage<'a> {
    state: &'a ScanPageState,
    palette: &'a Palette,
}

impl<'a> ScanPage<'a> {
    pub fn new(state: &'a ScanPageState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn render_target(&self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::card_block(self.palette, "Target", self.state.editing);
        if self.state.invalid {
            block = block.border_style(styles::status_red(self.palette));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.input.is_empty() && !self.state.editing {
            Line::styled(DEFAULT_TARGET, styles::text_muted(self.palette))
        } else {
            let mut spans = vec![Span::styled(
                self.state.input.clone(),
                styles::text_primary(self.palette),
            )];
            if self.state.editing {
                spans.push(Span::styled("▏", styles::accent(self.palette)));
            }
            Line::from(spans)
        };
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }

    fn technique_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled("Technique: ", styles::text_muted(self.palette)),
            Span::styled(self.state.technique.label(), styles::text_primary(self.palette)),
            Span::styled(
                format!(" ({})", self.state.technique.flag()),
                styles::text_muted(self.palette),
            ),
        ])
    }

    fn command_line(&self) -> Line<'static> {
        match &self.state.run {
            Some(run) => Line::from(vec![
                Span::styled("$ ", styles::accent(self.palette)),
                Span::styled(run.command(), styles::text_secondary(self.palette)),
            ]),
            None => Line::styled(
                "Press Enter to launch the simulated scan.",
                styles::text_muted(self.palette),
            ),
        }
    }

    fn render_gauge(&self, area: Rect, buf: &mut Buffer) {
        let progress = self.state.run.as_ref().map_or(0, |run| run.progress());
        let complete = self
            .state
            .run
            .as_ref()
            .is_some_and(|run| !run.is_running() && run.progress() >= 100);
        let fill = if complete {
            styles::status_green(self.palette)
        } else {
            styles::accent(self.palette)
        };
        Gauge::default()
            .block(styles::card_block(self.palette, "Progress", false))
            .gauge_style(fill)
            .use_unicode(true)
            .percent(u16::from(progress))
            .render(area, buf);
    }

    fn status_line(&self) -> Line<'static> {
        let style = if self.state.status == MSG_INVALID_TARGET {
            styles::status_red(self.palette)
        } else if self.state.status == MSG_COMPLETE {
            styles::status_green(self.palette)
        } else {
            styles::text_secondary(self.palette)
        };
        Line::styled(self.state.status.clone(), style)
    }
}

impl Widget for ScanPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 30 || area.height < 10 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(3), // target card
            Constraint::Length(1), // technique
            Constraint::Length(1), // command echo
            Constraint::Length(1),
            Constraint::Length(3), // gauge card
            Constraint::Length(1), // status line
            Constraint::Min(0),    // disclaimer
        ])
        .split(area);

        self.render_target(rows[0], buf);
        buf.set_line(rows[1].x, rows[1].y, &self.technique_line(), rows[1].width);
        buf.set_line(rows[2].x, rows[2].y, &self.command_line(), rows[2].width);
        self.render_gauge(rows[4], buf);
        buf.set_line(rows[5].x, rows[5].y, &self.status_line(), rows[5].width);

        if rows[6].height > 1 {
            let inset = Rect {
                y: rows[6].y + 1,
                height: rows[6].height - 1,
                ..rows[6]
            };
            Paragraph::new(DISCLAIMER)
                .style(styles::text_muted(self.palette))
                .wrap(Wrap { trim: true })
                .render(inset, buf);
        }
    }
}
