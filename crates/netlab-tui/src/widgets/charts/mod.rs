//! Side-by-side comparison charts.
//!
//! Left: protocol header sizes as a pie or doughnut. Right: scan technique
//! scores as grouped columns or horizontal bars. Focus moves between the
//! panels; the focused panel's chart kind can be switched in place.

mod bars;
mod pie;

use netlab_app::state::{ChartFocus, ChartsPageState};
use netlab_core::charts::{
    HEADER_CHART_TITLE, HEADER_SLICES, TECHNIQUE_AXIS_TITLE, TECHNIQUE_CHART_SUBTITLE,
    TECHNIQUE_CHART_TITLE, TECHNIQUE_SERIES, TechniqueChartKind,
};
use netlab_core::theme::{ChartTheme, Rgb};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::{self, styles, Palette};

/// The charts page body.
pub struct ChartsPage<'a> {
    state: &'a ChartsPageState,
    chart_theme: ChartTheme,
    palette: &'a Palette,
}

impl<'a> ChartsPage<'a> {
    pub fn new(state: &'a ChartsPageState, chart_theme: ChartTheme, palette: &'a Palette) -> Self {
        Self {
            state,
            chart_theme,
            palette,
        }
    }

    fn title_style(&self) -> Style {
        Style::default()
            .fg(theme::color(self.chart_theme.text))
            .add_modifier(Modifier::BOLD)
    }

    fn label_style(&self) -> Style {
        Style::default().fg(theme::color(self.chart_theme.text))
    }

    /// Legend entries as "■ Name" pairs on one line.
    fn legend_line(&self, entries: &[(&'static str, Rgb)]) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, (label, color)) in entries.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                "\u{25a0} ",
                Style::default().fg(theme::color(*color)),
            ));
            spans.push(Span::styled(*label, self.label_style()));
        }
        Line::from(spans)
    }

    /// Bottom row of a panel: the active chart kind, highlighted when the
    /// panel holds focus.
    fn kind_line(&self, kind_label: &'static str, focused: bool) -> Line<'static> {
        let value_style = if focused {
            styles::accent_bold(self.palette)
        } else {
            styles::text_secondary(self.palette)
        };
        Line::from(vec![
            Span::styled("Type: ", styles::text_muted(self.palette)),
            Span::styled(kind_label, value_style),
        ])
    }

    fn render_header_panel(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == ChartFocus::HeaderSizes;
        let block = styles::card_block(self.palette, HEADER_CHART_TITLE, focused)
            .title_style(self.title_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 8 || inner.height < 4 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let legend_entries: Vec<(&'static str, Rgb)> =
            HEADER_SLICES.iter().map(|s| (s.label, s.color)).collect();
        let legend = self.legend_line(&legend_entries);
        buf.set_line(rows[0].x, rows[0].y, &legend, rows[0].width);

        pie::render_disc(&HEADER_SLICES, self.state.header_kind, rows[1], buf);

        let kind = self.kind_line(self.state.header_kind.label(), focused);
        buf.set_line(rows[2].x, rows[2].y, &kind, rows[2].width);
    }

    fn render_technique_panel(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == ChartFocus::Techniques;
        let block = styles::card_block(self.palette, TECHNIQUE_CHART_TITLE, focused)
            .title_style(self.title_style());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 8 || inner.height < 5 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let subtitle = Line::styled(TECHNIQUE_CHART_SUBTITLE, styles::text_secondary(self.palette));
        buf.set_line(rows[0].x, rows[0].y, &subtitle, rows[0].width);

        let legend_entries: Vec<(&'static str, Rgb)> =
            TECHNIQUE_SERIES.iter().map(|s| (s.name, s.color)).collect();
        let mut legend = self.legend_line(&legend_entries);
        legend.push_span(Span::raw("   "));
        legend.push_span(Span::styled(
            TECHNIQUE_AXIS_TITLE,
            styles::text_muted(self.palette),
        ));
        buf.set_line(rows[1].x, rows[1].y, &legend, rows[1].width);

        match self.state.technique_kind {
            TechniqueChartKind::Column => bars::render_columns(
                &TECHNIQUE_SERIES,
                theme::color(self.chart_theme.grid),
                rows[2],
                buf,
                self.palette,
            ),
            TechniqueChartKind::Bar => {
                bars::render_bars(&TECHNIQUE_SERIES, rows[2], buf, self.palette)
            }
        }

        let kind = self.kind_line(self.state.technique_kind.label(), focused);
        buf.set_line(rows[3].x, rows[3].y, &kind, rows[3].width);
    }
}

impl Widget for ChartsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panels =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
        self.render_header_panel(panels[0], buf);
        self.render_technique_panel(panels[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlab_core::charts::HeaderChartKind;
    use netlab_core::theme::ThemeMode;

    fn render_page(state: &ChartsPageState) -> String {
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        let page = ChartsPage::new(
            state,
            ChartTheme::for_mode(ThemeMode::Dark),
            Palette::for_mode(ThemeMode::Dark),
        );
        page.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_both_panels_render_titles_and_legends() {
        let content = render_page(&ChartsPageState::default());
        assert!(content.contains(HEADER_CHART_TITLE));
        assert!(content.contains(TECHNIQUE_CHART_TITLE));
        assert!(content.contains(TECHNIQUE_CHART_SUBTITLE));
        assert!(content.contains("TCP Header"));
        assert!(content.contains("Speed"));
        assert!(content.contains("Stealth"));
    }

    #[test]
    fn test_default_kinds_are_shown() {
        let content = render_page(&ChartsPageState::default());
        assert!(content.contains("Type: Doughnut"));
        assert!(content.contains("Type: Column"));
        // Column mode comes with the y-axis scale.
        assert!(content.contains("100"));
        assert!(content.contains("TCP SYN"));
    }

    #[test]
    fn test_switched_kinds_change_the_labels() {
        let state = ChartsPageState {
            header_kind: HeaderChartKind::Pie,
            technique_kind: TechniqueChartKind::Bar,
            ..ChartsPageState::default()
        };
        let content = render_page(&state);
        assert!(content.contains("Type: Pie"));
        assert!(content.contains("Type: Bar"));
    }

    #[test]
    fn test_disc_is_drawn_in_braille() {
        let content = render_page(&ChartsPageState::default());
        let has_braille = content
            .chars()
            .any(|ch| ('\u{2800}'..='\u{28ff}').contains(&ch));
        assert!(has_braille);
    }
}
