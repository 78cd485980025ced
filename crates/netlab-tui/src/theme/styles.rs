//! Semantic style builders shared by every page widget.

use netlab_core::handshake::BannerKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_primary)
}

pub fn text_secondary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_secondary)
}

pub fn text_muted(palette: &Palette) -> Style {
    Style::default().fg(palette.text_muted)
}

// --- Border styles ---
pub fn border_inactive(palette: &Palette) -> Style {
    Style::default().fg(palette.border_dim)
}

pub fn border_active(palette: &Palette) -> Style {
    Style::default().fg(palette.border_active)
}

// --- Accent styles ---
pub fn accent(palette: &Palette) -> Style {
    Style::default().fg(palette.accent)
}

pub fn accent_bold(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green(palette: &Palette) -> Style {
    Style::default().fg(palette.status_green)
}

pub fn status_red(palette: &Palette) -> Style {
    Style::default().fg(palette.status_red)
}

pub fn status_yellow(palette: &Palette) -> Style {
    Style::default().fg(palette.status_yellow)
}

pub fn status_blue(palette: &Palette) -> Style {
    Style::default().fg(palette.status_blue)
}

// --- Keybinding hint style ---
pub fn keybinding(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Selection styles ---

/// Contrast text on the accent color, for focused+selected items
pub fn focused_selected(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.contrast_fg)
        .bg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn card_block<'a>(palette: &Palette, title: &'a str, focused: bool) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(palette)
        } else {
            border_inactive(palette)
        })
}

// --- Banner severity mapping ---

/// Style for the handshake status banner by severity.
pub fn banner_style(palette: &Palette, kind: BannerKind) -> Style {
    let color = match kind {
        BannerKind::Info => palette.status_blue,
        BannerKind::Warning => palette.status_yellow,
        BannerKind::Success => palette.status_green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(text_secondary(&LIGHT).fg, Some(LIGHT.text_secondary));
        assert_eq!(text_muted(&DARK).fg, Some(DARK.text_muted));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive(&LIGHT).fg, Some(LIGHT.border_dim));
        assert_eq!(border_active(&LIGHT).fg, Some(LIGHT.border_active));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        let style = accent_bold(&LIGHT);
        assert_eq!(style.fg, Some(LIGHT.accent));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_focused_selected_uses_contrast_on_accent() {
        for palette in [&LIGHT, &DARK] {
            let style = focused_selected(palette);
            assert_eq!(style.fg, Some(palette.contrast_fg));
            assert_eq!(style.bg, Some(palette.accent));
        }
    }

    #[test]
    fn test_banner_styles_follow_severity() {
        assert_eq!(
            banner_style(&LIGHT, BannerKind::Info).fg,
            Some(LIGHT.status_blue)
        );
        assert_eq!(
            banner_style(&LIGHT, BannerKind::Warning).fg,
            Some(LIGHT.status_yellow)
        );
        assert_eq!(
            banner_style(&DARK, BannerKind::Success).fg,
            Some(DARK.status_green)
        );
    }

    #[test]
    fn test_card_block_focused_vs_unfocused() {
        // Verify both focused and unfocused blocks can be created
        let _focused = card_block(&LIGHT, "Target", true);
        let _unfocused = card_block(&DARK, "Target", false);
    }
}
