//! Top bar: brand, the page tabs and the theme toggle icon.

use netlab_app::state::{AppState, Page};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Tabs, Widget};

use crate::theme::{styles, Palette};

pub struct Header<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, "", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 20 || inner.height < 1 {
            return;
        }

        let columns = Layout::horizontal([
            Constraint::Length(8),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(inner);

        let brand = Line::styled("NetLab", styles::accent_bold(self.palette));
        buf.set_line(columns[0].x + 1, columns[0].y, &brand, columns[0].width);

        let selected = Page::ALL
            .iter()
            .position(|page| *page == self.state.page)
            .unwrap_or(0);
        Tabs::new(Page::ALL.iter().map(|page| page.title()))
            .select(selected)
            .style(styles::text_secondary(self.palette))
            .highlight_style(styles::focused_selected(self.palette))
            .divider("│")
            .render(columns[1], buf);

        // The icon advertises the mode a toggle would switch to.
        let icon = Line::styled(self.state.theme.icon(), styles::status_yellow(self.palette));
        buf.set_line(columns[2].x + 1, columns[2].y, &icon, columns[2].width);
    }
}
