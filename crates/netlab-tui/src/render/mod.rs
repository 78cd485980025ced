//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use netlab_app::state::{AppState, Page};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::Palette;
use crate::widgets;

/// Render one frame from the current state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.theme);

    // Themed background across the whole terminal.
    let background = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(background, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state, palette), areas.header);

    match state.page {
        Page::Handshake => {
            frame.render_widget(widgets::HandshakePage::new(&state.handshake, palette), areas.body)
        }
        Page::Scan => frame.render_widget(widgets::ScanPage::new(&state.scan, palette), areas.body),
        Page::Quiz => frame.render_widget(widgets::QuizPage::new(&state.quiz, palette), areas.body),
        Page::Calculator => frame.render_widget(
            widgets::CalculatorPage::new(&state.calculator, palette),
            areas.body,
        ),
        Page::Charts => frame.render_widget(
            widgets::ChartsPage::new(&state.charts, state.chart_theme, palette),
            areas.body,
        ),
        Page::Campus => {
            frame.render_widget(widgets::CampusMapPage::new(&state.map, palette), areas.body)
        }
    }

    frame.render_widget(widgets::Footer::new(state, palette), areas.footer);
}
