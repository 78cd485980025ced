//! Screen layout definitions for the TUI
//!
//! Splits the terminal into the fixed chrome (header bar, footer hints)
//! and the active page body.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header bar (brand + page tabs + theme indicator)
    pub header: Rect,

    /// Active page content
    pub body: Rect,

    /// Single-row key hint bar
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = vec![
        Constraint::Length(3), // Header (top border + content + bottom border)
        Constraint::Min(3),    // Page body
        Constraint::Length(1), // Footer hints
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}
