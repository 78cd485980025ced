//! Campus map page.
//!
//! Renders the fixed campus geography on a braille canvas: the outlined
//! department block, the two markers with their popups, and the authors
//! panel whose rows trigger the fly-to.

use netlab_app::state::MapPageState;
use netlab_core::geo::{LatLon, Marker, AUTHORS, CAMPUS_OUTLINE, MARKERS, OUTLINE_COLOR};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::{self, styles, Palette};
use crate::widgets::braille::BrailleCanvas;

/// Dot-space analogue of the web map's 256px tile. A braille dot is much
/// coarser than a screen pixel, so the tile shrinks by the same factor to
/// keep the default view spanning the whole campus.
const TILE_DOTS: f64 = 32.0;

/// Braille dots per degree of longitude at a given zoom level.
fn dots_per_lon_degree(zoom: f64) -> f64 {
    TILE_DOTS * zoom.exp2() / 360.0
}

/// Projects WGS84 coordinates into the dot space of one canvas, centered on
/// the current view. Vertical distances get the local Mercator stretch so
/// the outlined block keeps its shape.
struct Projector {
    center: LatLon,
    scale: f64,
    lat_stretch: f64,
    half_w: f64,
    half_h: f64,
}

impl Projector {
    fn new(center: LatLon, zoom: f64, dot_w: usize, dot_h: usize) -> Self {
        Self {
            center,
            scale: dots_per_lon_degree(zoom),
            lat_stretch: 1.0 / center.lat.to_radians().cos(),
            half_w: dot_w as f64 / 2.0,
            half_h: dot_h as f64 / 2.0,
        }
    }

    /// Dot coordinates for a point; may fall outside the canvas.
    fn dot(&self, point: LatLon) -> (isize, isize) {
        let dx = (point.lon - self.center.lon) * self.scale;
        let dy = (self.center.lat - point.lat) * self.scale * self.lat_stretch;
        (
            (self.half_w + dx).round() as isize,
            (self.half_h + dy).round() as isize,
        )
    }
}

pub struct CampusMapPage<'a> {
    state: &'a MapPageState,
    palette: &'a Palette,
}

impl<'a> CampusMapPage<'a> {
    pub fn new(state: &'a MapPageState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn render_map(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, "Campus Santiago", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 10 || inner.height < 5 {
            return;
        }

        let cols = inner.width as usize;
        let rows = inner.height as usize;
        let projector = Projector::new(self.state.center, self.state.zoom, cols * 2, rows * 4);

        let mut canvas = BrailleCanvas::new(cols, rows);
        for i in 0..CAMPUS_OUTLINE.len() {
            let (x0, y0) = projector.dot(CAMPUS_OUTLINE[i]);
            let (x1, y1) = projector.dot(CAMPUS_OUTLINE[(i + 1) % CAMPUS_OUTLINE.len()]);
            canvas.line(x0, y0, x1, y1);
        }
        canvas.render_to_buffer(buf, inner, theme::color(OUTLINE_COLOR));

        for (index, marker) in MARKERS.iter().enumerate() {
            self.render_marker(index, marker, &projector, inner, buf);
        }
        self.render_popup(&projector, inner, buf);
    }

    fn render_marker(
        &self,
        index: usize,
        marker: &Marker,
        projector: &Projector,
        inner: Rect,
        buf: &mut Buffer,
    ) {
        let (dot_x, dot_y) = projector.dot(marker.position);
        let cell_x = dot_x.div_euclid(2);
        let cell_y = dot_y.div_euclid(4);
        if cell_x < 0 || cell_y < 0 || cell_x >= inner.width as isize || cell_y >= inner.height as isize
        {
            return;
        }
        let x = inner.x + cell_x as u16;
        let y = inner.y + cell_y as u16;

        let mut style = styles::accent(self.palette);
        if self.state.popup == Some(index) {
            style = style.add_modifier(Modifier::BOLD);
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char('●').set_style(style);
        }

        let label = Line::styled(marker.title, styles::text_secondary(self.palette));
        let label_x = x + 2;
        if label_x < inner.right() {
            buf.set_line(label_x, y, &label, inner.right() - label_x);
        }
    }

    /// The open marker popup, anchored above its marker and clamped into
    /// the map view.
    fn render_popup(&self, projector: &Projector, inner: Rect, buf: &mut Buffer) {
        let Some(marker) = self.state.popup.and_then(|index| MARKERS.get(index)) else {
            return;
        };

        let text_w = marker.title.width().max(marker.subtitle.width()) as u16;
        let box_w = (text_w + 4).min(inner.width);
        let box_h = 4u16;
        if inner.height < box_h || inner.width < box_w {
            return;
        }

        let (dot_x, dot_y) = projector.dot(marker.position);
        let anchor_x = inner.x as isize + dot_x.div_euclid(2);
        let anchor_y = inner.y as isize + dot_y.div_euclid(4);
        let x = (anchor_x - box_w as isize / 2)
            .clamp(inner.x as isize, (inner.right() - box_w) as isize) as u16;
        let y = (anchor_y - box_h as isize)
            .clamp(inner.y as isize, (inner.bottom() - box_h) as isize) as u16;

        let popup = Rect::new(x, y, box_w, box_h);
        Clear.render(popup, buf);
        let block = styles::card_block(self.palette, "", true);
        let popup_inner = block.inner(popup);
        block.render(popup, buf);

        let title = Line::styled(
            marker.title,
            styles::text_primary(self.palette).add_modifier(Modifier::BOLD),
        );
        buf.set_line(popup_inner.x, popup_inner.y, &title, popup_inner.width);
        let subtitle = Line::styled(marker.subtitle, styles::text_secondary(self.palette));
        buf.set_line(popup_inner.x, popup_inner.y + 1, &subtitle, popup_inner.width);
    }

    fn render_side(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, "Authors", false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 12 || inner.height < 7 {
            return;
        }

        for (i, author) in AUTHORS.iter().enumerate() {
            let selected = i == self.state.cursor;
            let (marker, style) = if selected {
                ("▸ ", styles::focused_selected(self.palette))
            } else {
                ("  ", styles::text_primary(self.palette))
            };
            let line = Line::from(vec![
                Span::styled(marker, styles::accent(self.palette)),
                Span::styled(*author, style),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }

        let hints_y = inner.y + AUTHORS.len() as u16 + 1;
        let hints = [
            ("Enter", " fly to the department"),
            ("Esc", " close the popup"),
        ];
        for (i, (key, rest)) in hints.iter().enumerate() {
            let line = Line::from(vec![
                Span::styled(*key, styles::keybinding(self.palette)),
                Span::styled(*rest, styles::text_muted(self.palette)),
            ]);
            buf.set_line(inner.x, hints_y + i as u16, &line, inner.width);
        }

        let readout = format!(
            "{:.4}, {:.4}  z{:.1}",
            self.state.center.lat, self.state.center.lon, self.state.zoom
        );
        let line = Line::styled(readout, styles::text_muted(self.palette));
        buf.set_line(inner.x, inner.bottom() - 1, &line, inner.width);
    }
}

impl Widget for CampusMapPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 50 || area.height < 8 {
            return;
        }
        let panels =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(30)]).split(area);
        self.render_map(panels[0], buf);
        self.render_side(panels[1], buf);
    }
}
