//! netlab-tui - Terminal UI for NetLab
//!
//! Ratatui-based rendering and terminal lifecycle: event polling, the
//! layout/theme system, the per-page widget set and the main run loop.
//! All state and update logic lives in `netlab-app`; this crate only
//! draws it and feeds input back as messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
