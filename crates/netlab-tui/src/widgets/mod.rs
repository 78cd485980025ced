//! Custom widget components
//!
//! Each lab page gets one widget that borrows its slice of [`AppState`]
//! and renders with [`Palette`]-derived styles only, so a theme toggle
//! restyles everything on the next frame.
//!
//! [`AppState`]: netlab_app::state::AppState
//! [`Palette`]: crate::theme::Palette

mod braille;
mod calculator;
mod campus_map;
mod charts;
mod footer;
mod handshake;
mod header;
mod quiz;
mod scan;

pub use calculator::CalculatorPage;
pub use campus_map::CampusMapPage;
pub use charts::ChartsPage;
pub use footer::Footer;
pub use handshake::HandshakePage;
pub use header::Header;
pub use quiz::QuizPage;
pub use scan::ScanPage;
