//! Centralized theme system for the lab's light and dark modes.
//!
//! This module provides:
//! - `palette`: Resolved color sets, one per theme mode
//! - `styles`: Semantic style builder functions
//!
//! Widgets never hold colors of their own: they look everything up from the
//! palette for the mode in `AppState`, so a theme toggle restyles the whole
//! screen on the next frame.

pub mod palette;
pub mod styles;

pub use palette::Palette;

use netlab_core::theme::Rgb;
use ratatui::style::Color;

/// Convert a core color triple to a terminal color.
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
