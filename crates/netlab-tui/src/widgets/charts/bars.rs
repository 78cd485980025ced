//! Column and bar rendering for the technique comparison chart.
//!
//! Column mode draws one group of vertical half-block bars per category for
//! 2x vertical resolution. Bar mode draws the same numbers as horizontal
//! full-block runs, one row per series.

use netlab_core::charts::{Series, TECHNIQUE_AXIS_MAX, TECHNIQUE_CATEGORIES};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::theme::{self, styles, Palette};

/// Width of the y-axis gutter in column mode ("100" plus a space).
const Y_AXIS_WIDTH: u16 = 4;

/// Width of the category label gutter in bar mode ("NULL/Stealth" is 12).
const BAR_LABEL_WIDTH: u16 = 13;

// ── Column mode ───────────────────────────────────────────────────────────────

/// Render vertical bar groups, one per category, with a y-axis on the left.
pub(super) fn render_columns(
    series: &[Series],
    grid: Color,
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
) {
    if area.width < Y_AXIS_WIDTH + 8 || area.height < 4 {
        return;
    }

    // Bottom row is reserved for the category labels.
    let plot = Rect {
        x: area.x + Y_AXIS_WIDTH,
        y: area.y,
        width: area.width - Y_AXIS_WIDTH,
        height: area.height - 1,
    };
    let labels_y = area.bottom() - 1;

    render_y_axis(area, plot, buf, palette);
    render_grid_line(plot, plot.y, grid, buf);

    let total_half_blocks = f64::from(plot.height) * 2.0;
    let group_w = plot.width / TECHNIQUE_CATEGORIES.len() as u16;
    if group_w < 2 {
        return;
    }
    let bar_w = ((group_w - 1) / series.len() as u16).clamp(1, 3);
    let bottom_y = plot.bottom() - 1;

    for (cat, label) in TECHNIQUE_CATEGORIES.iter().enumerate() {
        let group_x = plot.x + cat as u16 * group_w;

        for (s, serie) in series.iter().enumerate() {
            let height = value_to_half_blocks(serie.values[cat], total_half_blocks);
            let color = theme::color(serie.color);
            for i in 0..bar_w {
                let x = group_x + s as u16 * bar_w + i;
                if x >= plot.right() {
                    break;
                }
                render_column(buf, x, bottom_y, height, color, plot.y);
            }
        }

        let label_line = Line::styled(*label, styles::text_muted(palette));
        let label_w = (group_w - 1).min(label.len() as u16);
        buf.set_line(group_x, labels_y, &label_line, label_w);
    }
}

/// Right-aligned max/mid/zero labels in the y-axis gutter.
fn render_y_axis(area: Rect, plot: Rect, buf: &mut Buffer, palette: &Palette) {
    let style = styles::text_muted(palette);
    let ticks = [
        (plot.y, TECHNIQUE_AXIS_MAX),
        (plot.y + (plot.height - 1) / 2, TECHNIQUE_AXIS_MAX / 2),
        (plot.bottom() - 1, 0),
    ];
    for (y, value) in ticks {
        let text = format!("{value:>3}");
        let line = Line::styled(text, style);
        buf.set_line(area.x, y, &line, Y_AXIS_WIDTH.saturating_sub(1));
    }
}

/// Dashed horizontal guide at the top of the plot (the axis maximum).
fn render_grid_line(plot: Rect, y: u16, grid: Color, buf: &mut Buffer) {
    let style = Style::default().fg(grid);
    for x in (plot.x..plot.right()).step_by(2) {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char('╌').set_style(style);
        }
    }
}

/// Convert a score to half-block units on the fixed 0..=100 axis.
fn value_to_half_blocks(value: u32, total_half_blocks: f64) -> u16 {
    if value == 0 {
        return 0;
    }
    let frac = f64::from(value.min(TECHNIQUE_AXIS_MAX)) / f64::from(TECHNIQUE_AXIS_MAX);
    ((frac * total_half_blocks).round() as u16).max(1)
}

/// Grow a column upward from `bottom_y`, two half-block units per row.
///
/// Full rows render as `█`; an odd trailing unit renders as `▄` so the bar
/// top can land on a half-cell boundary. Nothing is drawn above `top_y`.
fn render_column(
    buf: &mut Buffer,
    x: u16,
    bottom_y: u16,
    height_half_blocks: u16,
    color: Color,
    top_y: u16,
) {
    let style = Style::default().fg(color);
    let mut remaining = height_half_blocks;
    let mut y = bottom_y;

    while remaining > 0 && y >= top_y {
        let glyph = if remaining >= 2 { '\u{2588}' } else { '\u{2584}' };
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(glyph).set_style(style);
        }
        remaining = remaining.saturating_sub(2);
        if y == top_y {
            break;
        }
        y -= 1;
    }
}

// ── Bar mode ──────────────────────────────────────────────────────────────────

/// Render horizontal bars: per category, one labelled row per series.
pub(super) fn render_bars(series: &[Series], area: Rect, buf: &mut Buffer, palette: &Palette) {
    if area.width < BAR_LABEL_WIDTH + 8 || area.height < 2 {
        return;
    }

    let bar_x = area.x + BAR_LABEL_WIDTH;
    // Room for the bar itself plus the value printed after it ("  95").
    let bar_space = area.width - BAR_LABEL_WIDTH - 4;
    let rows_per_category = series.len() as u16 + 1;

    for (cat, label) in TECHNIQUE_CATEGORIES.iter().enumerate() {
        let top = area.y + cat as u16 * rows_per_category;
        if top >= area.bottom() {
            break;
        }

        let label_line = Line::styled(*label, styles::text_secondary(palette));
        buf.set_line(area.x, top, &label_line, BAR_LABEL_WIDTH.saturating_sub(1));

        for (s, serie) in series.iter().enumerate() {
            let y = top + 1 + s as u16;
            if y >= area.bottom() {
                break;
            }
            let value = serie.values[cat];
            let len = bar_length(value, bar_space);
            let style = Style::default().fg(theme::color(serie.color));
            for i in 0..len {
                if let Some(cell) = buf.cell_mut((bar_x + i, y)) {
                    cell.set_char('\u{2588}').set_style(style);
                }
            }
            let value_line = Line::styled(format!(" {value}"), styles::text_muted(palette));
            buf.set_line(bar_x + len, y, &value_line, 4);
        }
    }
}

/// Bar length in cells for a score on the fixed 0..=100 axis.
fn bar_length(value: u32, bar_space: u16) -> u16 {
    if value == 0 {
        return 0;
    }
    let frac = f64::from(value.min(TECHNIQUE_AXIS_MAX)) / f64::from(TECHNIQUE_AXIS_MAX);
    ((frac * f64::from(bar_space)).round() as u16).clamp(1, bar_space)
}
