//! Application state (Model in TEA pattern)

use netlab_core::charts::{HeaderChartKind, TechniqueChartKind};
use netlab_core::clock::Clock;
use netlab_core::geo::{self, FlyTo, LatLon};
use netlab_core::handshake::Handshake;
use netlab_core::overhead::OverheadResult;
use netlab_core::quiz::Quiz;
use netlab_core::scan::{ScanRun, ScanTechnique};
use netlab_core::theme::{ChartTheme, ThemeMode};

use crate::config::Settings;

/// The lab pages, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Three-way handshake walkthrough
    #[default]
    Handshake,

    /// Simulated port scan
    Scan,

    /// Ten-question protocol quiz
    Quiz,

    /// Payload overhead calculator
    Calculator,

    /// Header-size and technique comparison charts
    Charts,

    /// Campus map with the author rows
    Campus,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Handshake,
        Page::Scan,
        Page::Quiz,
        Page::Calculator,
        Page::Charts,
        Page::Campus,
    ];

    /// Tab label shown in the page bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Handshake => "Handshake",
            Page::Scan => "Scan",
            Page::Quiz => "Quiz",
            Page::Calculator => "Calculator",
            Page::Charts => "Charts",
            Page::Campus => "Campus",
        }
    }

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Page::Handshake => "handshake",
            Page::Scan => "scan",
            Page::Quiz => "quiz",
            Page::Calculator => "calculator",
            Page::Charts => "charts",
            Page::Campus => "campus",
        }
    }

    pub fn from_name(name: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn next(self) -> Page {
        let index = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(index + 1) % Page::ALL.len()]
    }

    pub fn previous(self) -> Page {
        let index = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(index + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-page State
// ─────────────────────────────────────────────────────────────────────────────

/// Scan page: target entry, technique selector, and the running script.
#[derive(Debug, Clone, Default)]
pub struct ScanPageState {
    /// Free-text target buffer.
    pub input: String,
    /// Printable keys go into the buffer while set.
    pub editing: bool,
    pub technique: ScanTechnique,
    /// Last submit failed validation; marks the input field.
    pub invalid: bool,
    /// Displayed status line. The script only rewrites it at milestones,
    /// so a validation error stays visible in between.
    pub status: String,
    pub run: Option<ScanRun>,
}

/// Quiz page: the session plus the option cursor for keyboard selection.
#[derive(Debug, Clone, Default)]
pub struct QuizPageState {
    pub quiz: Quiz,
    pub cursor: usize,
}

/// Calculator page: payload input and the last computed result.
#[derive(Debug, Clone, Default)]
pub struct CalculatorPageState {
    pub input: String,
    pub result: Option<OverheadResult>,
}

/// Which of the two charts holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFocus {
    #[default]
    HeaderSizes,
    Techniques,
}

impl ChartFocus {
    pub fn other(self) -> ChartFocus {
        match self {
            ChartFocus::HeaderSizes => ChartFocus::Techniques,
            ChartFocus::Techniques => ChartFocus::HeaderSizes,
        }
    }
}

/// Charts page: per-chart kind selectors and focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartsPageState {
    pub focus: ChartFocus,
    pub header_kind: HeaderChartKind,
    pub technique_kind: TechniqueChartKind,
}

/// Campus page: map view plus the author-row cursor.
#[derive(Debug, Clone)]
pub struct MapPageState {
    pub center: LatLon,
    /// Fractional while a fly-to is in flight.
    pub zoom: f64,
    /// Index into [`geo::MARKERS`] of the open popup.
    pub popup: Option<usize>,
    pub cursor: usize,
    pub flight: Option<FlyTo>,
}

impl Default for MapPageState {
    fn default() -> Self {
        Self {
            center: geo::MAP_CENTER,
            zoom: f64::from(geo::MAP_ZOOM),
            popup: None,
            cursor: 0,
            flight: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub page: Page,
    pub theme: ThemeMode,
    /// Text/grid colors derived from the theme, pushed into both charts.
    pub chart_theme: ChartTheme,
    /// Theme changed since the last settings write; the run loop flushes it.
    pub settings_dirty: bool,

    pub clock: Clock,
    pub handshake: Handshake,
    pub scan: ScanPageState,
    pub quiz: QuizPageState,
    pub calculator: CalculatorPageState,
    pub charts: ChartsPageState,
    pub map: MapPageState,

    should_quit: bool,
}

impl AppState {
    /// Build the initial state from persisted settings.
    pub fn new(settings: &Settings, start_page: Option<Page>) -> Self {
        Self {
            page: start_page.unwrap_or_default(),
            theme: settings.theme,
            chart_theme: ChartTheme::for_mode(settings.theme),
            settings_dirty: false,
            clock: Clock::new(),
            handshake: Handshake::new(),
            scan: ScanPageState::default(),
            quiz: QuizPageState::default(),
            calculator: CalculatorPageState::default(),
            charts: ChartsPageState::default(),
            map: MapPageState::default(),
            should_quit: false,
        }
    }

    /// Flip the theme and re-derive the chart colors.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.chart_theme = ChartTheme::for_mode(self.theme);
        self.settings_dirty = true;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_covers_all_tabs() {
        let mut page = Page::default();
        for expected in Page::ALL {
            assert_eq!(page, expected);
            page = page.next();
        }
        assert_eq!(page, Page::Handshake);
    }

    #[test]
    fn test_page_previous_inverts_next() {
        for page in Page::ALL {
            assert_eq!(page.next().previous(), page);
        }
    }

    #[test]
    fn test_page_from_name() {
        assert_eq!(Page::from_name("charts"), Some(Page::Charts));
        assert_eq!(Page::from_name("campus"), Some(Page::Campus));
        assert_eq!(Page::from_name("bogus"), None);
    }

    #[test]
    fn test_toggle_theme_re_derives_chart_colors() {
        let mut state = AppState::default();
        assert_eq!(state.theme, ThemeMode::Light);
        let light_colors = state.chart_theme;

        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Dark);
        assert_ne!(state.chart_theme, light_colors);
        assert!(state.settings_dirty);

        state.toggle_theme();
        assert_eq!(state.theme, ThemeMode::Light);
        assert_eq!(state.chart_theme, light_colors);
    }

    #[test]
    fn test_start_page_override() {
        let state = AppState::new(&Settings::default(), Some(Page::Quiz));
        assert_eq!(state.page, Page::Quiz);
    }
}
