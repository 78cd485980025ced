//! Theme mode and the chart styling derived from it.
//!
//! The mode is the single persisted flag of the whole application. Widgets
//! read their palette from it each frame; charts additionally carry a
//! [`ChartTheme`] that is recomputed and pushed into them on every toggle.

use serde::{Deserialize, Serialize};

/// An RGB color carried as plain data, converted to a terminal color at the
/// rendering boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// UI color scheme, persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Stable name used in the settings file.
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Indicator for the theme control: the moon offers dark mode while
    /// light is active, the sun offers light mode while dark is active.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }
}

/// Colors pushed into every chart's title/axis/legend styling.
///
/// Chart backgrounds stay transparent; only text and grid lines follow the
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    pub text: Rgb,
    pub grid: Rgb,
}

impl ChartTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self {
                text: Rgb(0xff, 0xff, 0xff),
                grid: Rgb(0x50, 0x50, 0x53),
            }
        } else {
            Self {
                text: Rgb(0x33, 0x33, 0x33),
                grid: Rgb(0xe6, 0xe6, 0xe6),
            }
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_is_idempotent_over_two_applications() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_eq!(
                ChartTheme::for_mode(mode.toggled().toggled()),
                ChartTheme::for_mode(mode)
            );
        }
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(ThemeMode::from_name("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("solarized"), None);
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_chart_theme_colors_per_mode() {
        let light = ChartTheme::for_mode(ThemeMode::Light);
        assert_eq!(light.text, Rgb(0x33, 0x33, 0x33));
        assert_eq!(light.grid, Rgb(0xe6, 0xe6, 0xe6));

        let dark = ChartTheme::for_mode(ThemeMode::Dark);
        assert_eq!(dark.text, Rgb(0xff, 0xff, 0xff));
        assert_eq!(dark.grid, Rgb(0x50, 0x50, 0x53));
    }

    #[test]
    fn test_icon_offers_the_other_mode() {
        assert_eq!(ThemeMode::Light.icon(), "☾");
        assert_eq!(ThemeMode::Dark.icon(), "☀");
    }
}
