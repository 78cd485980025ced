//! Pie and doughnut rendering for the header-size chart.
//!
//! The disc is rasterized in braille dot space. Dot cells are roughly square
//! (2x4 dots per 1:2 terminal cell), so the disc comes out circular without
//! any extra aspect correction.

use std::f64::consts::TAU;

use netlab_core::charts::{HeaderChartKind, Slice, DOUGHNUT_INNER_RATIO};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::theme;
use crate::widgets::braille::BrailleCanvas;

/// Render the slices as a filled disc centered in `area`.
///
/// One canvas per slice so each slice keeps its own color; the canvases are
/// disjoint, so render order does not matter.
pub(super) fn render_disc(slices: &[Slice], kind: HeaderChartKind, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 2 {
        return;
    }
    let total: u32 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return;
    }

    let cols = area.width as usize;
    let rows = area.height as usize;
    let dot_w = cols * 2;
    let dot_h = rows * 4;

    let cx = dot_w as f64 / 2.0;
    let cy = dot_h as f64 / 2.0;
    let radius = (dot_w.min(dot_h) as f64 / 2.0) - 1.0;
    if radius < 2.0 {
        return;
    }
    let inner = match kind {
        HeaderChartKind::Pie => 0.0,
        HeaderChartKind::Doughnut => radius * DOUGHNUT_INNER_RATIO,
    };

    // Cumulative fraction boundary after each slice, in draw order.
    let mut boundaries = Vec::with_capacity(slices.len());
    let mut acc = 0.0;
    for slice in slices {
        acc += f64::from(slice.value) / f64::from(total);
        boundaries.push(acc);
    }

    let mut canvases: Vec<BrailleCanvas> =
        slices.iter().map(|_| BrailleCanvas::new(cols, rows)).collect();

    for y in 0..dot_h {
        for x in 0..dot_w {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            let r = (dx * dx + dy * dy).sqrt();
            if r > radius || r < inner {
                continue;
            }
            let frac = angle_fraction(dx, dy);
            let idx = boundaries
                .iter()
                .position(|&b| frac < b)
                .unwrap_or(slices.len() - 1);
            canvases[idx].set(x, y);
        }
    }

    for (canvas, slice) in canvases.iter().zip(slices) {
        canvas.render_to_buffer(buf, area, theme::color(slice.color));
    }
}

/// Fraction of a full turn for a dot offset from the disc center.
///
/// 0.0 points straight up (12 o'clock) and the fraction grows clockwise,
/// matching the usual pie chart slice order. Screen y grows downward, hence
/// the negated `dy`.
fn angle_fraction(dx: f64, dy: f64) -> f64 {
    dx.atan2(-dy).rem_euclid(TAU) / TAU
}
