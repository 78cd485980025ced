//! netlab-app - Application state and orchestration for NetLab
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: every page of the lab is a plain-data struct on [`AppState`],
//! keys become [`Message`]s, and [`handler::update`] is the only place state
//! changes. Configuration loading and saving lives in [`config`].

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{default_config_dir, load_settings, save_settings, Settings};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, ChartFocus, Page};
