//! Color palettes for the light and dark modes.
//!
//! Values follow the page styling the lab grew out of: near-white body with
//! `#212529` ink in light mode, the same pair inverted in dark mode, and a
//! blue accent throughout.

use netlab_core::theme::ThemeMode;
use ratatui::style::Color;

/// Resolved colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Foreground for text drawn on top of the accent color.
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
    pub status_blue: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xf8, 0xf9, 0xfa),
    surface: Color::Rgb(0xff, 0xff, 0xff),
    border_dim: Color::Rgb(0xde, 0xe2, 0xe6),
    border_active: Color::Rgb(0x0d, 0x6e, 0xfd),
    accent: Color::Rgb(0x0d, 0x6e, 0xfd),
    contrast_fg: Color::Rgb(0xff, 0xff, 0xff),
    text_primary: Color::Rgb(0x21, 0x25, 0x29),
    text_secondary: Color::Rgb(0x6c, 0x75, 0x7d),
    text_muted: Color::Rgb(0xad, 0xb5, 0xbd),
    status_green: Color::Rgb(0x19, 0x87, 0x54),
    status_red: Color::Rgb(0xdc, 0x35, 0x45),
    status_yellow: Color::Rgb(0xcc, 0x9a, 0x06),
    status_blue: Color::Rgb(0x0d, 0x6e, 0xfd),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x21, 0x25, 0x29),
    surface: Color::Rgb(0x2b, 0x30, 0x36),
    border_dim: Color::Rgb(0x49, 0x50, 0x57),
    border_active: Color::Rgb(0x6e, 0xa8, 0xfe),
    accent: Color::Rgb(0x6e, 0xa8, 0xfe),
    contrast_fg: Color::Rgb(0x21, 0x25, 0x29),
    text_primary: Color::Rgb(0xf8, 0xf9, 0xfa),
    text_secondary: Color::Rgb(0xad, 0xb5, 0xbd),
    text_muted: Color::Rgb(0x6c, 0x75, 0x7d),
    status_green: Color::Rgb(0x75, 0xb7, 0x98),
    status_red: Color::Rgb(0xea, 0x86, 0x8f),
    status_yellow: Color::Rgb(0xff, 0xda, 0x6a),
    status_blue: Color::Rgb(0x6e, 0xdf, 0xf6),
};

impl Palette {
    /// The palette for a theme mode.
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        if mode.is_dark() {
            &DARK
        } else {
            &LIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_resolve_to_distinct_palettes() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_ne!(light, dark);
    }

    #[test]
    fn test_ink_and_body_swap_between_modes() {
        assert_eq!(LIGHT.background, DARK.text_primary);
        assert_eq!(LIGHT.text_primary, DARK.background);
    }

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(*Palette::for_mode(ThemeMode::default()), LIGHT);
    }
}
