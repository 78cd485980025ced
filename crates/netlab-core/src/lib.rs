//! # netlab-core - Core Domain Types
//!
//! Foundation crate for NetLab. Provides the lab simulations (handshake,
//! scan, quiz, overhead calculator), the static chart and map data, theming,
//! and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, regex, tracing, rand).
//!
//! ## Public API
//!
//! ### Handshake (`handshake`)
//! - [`Handshake`] - Three-way handshake walkthrough with packet animation
//! - [`HandshakeStep`], [`HandshakeAction`] - Step machine and its triggers
//! - [`Banner`], [`BannerKind`] - Styled status banner under the track
//!
//! ### Scan (`scan`)
//! - [`ScanRun`] - Scripted progress run with milestone status texts
//! - [`ScanTechnique`] - The four compared techniques and their flags
//! - [`is_valid_target()`], [`resolve_target()`] - Dotted-quad validation
//!
//! ### Quiz (`quiz`)
//! - [`Quiz`] - Session over the fixed question list
//! - [`QuizQuestion`], [`QuizPhase`], [`QuizFeedback`]
//!
//! ### Overhead (`overhead`)
//! - [`compute_overhead()`] - Payload size plus fixed header bytes
//!
//! ### Presentation Data (`charts`, `geo`, `clock`, `theme`)
//! - Chart slices/series, campus markers and outline, the footer clock
//! - [`ThemeMode`], [`ChartTheme`] - Light/dark palette selection
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use netlab_core::prelude::*;
//! ```

pub mod charts;
pub mod clock;
pub mod error;
pub mod geo;
pub mod handshake;
pub mod logging;
pub mod overhead;
pub mod quiz;
pub mod scan;
pub mod theme;
pub mod tween;

/// Prelude for common imports used throughout all NetLab crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use charts::{
    HeaderChartKind, Series, Slice, TechniqueChartKind, HEADER_CHART_TITLE, HEADER_SLICES,
    TECHNIQUE_CATEGORIES, TECHNIQUE_CHART_TITLE, TECHNIQUE_SERIES,
};
pub use clock::Clock;
pub use error::{Error, Result, ResultExt};
pub use geo::{FlyTo, LatLon, Marker, AUTHORS, CAMPUS_OUTLINE, MAP_CENTER, MARKERS};
pub use handshake::{Banner, BannerKind, Handshake, HandshakeAction, HandshakeStep};
pub use overhead::{compute_overhead, OverheadResult, OVERHEAD_BYTES};
pub use quiz::{Quiz, QuizFeedback, QuizPhase, QuizQuestion, QUESTIONS};
pub use scan::{is_valid_target, resolve_target, ScanRun, ScanTechnique, DEFAULT_TARGET};
pub use theme::{ChartTheme, Rgb, ThemeMode};
pub use tween::Tween;
