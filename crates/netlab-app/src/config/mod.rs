//! Configuration persistence for NetLab
//!
//! A single `settings.toml` in the user config directory holds the persisted
//! theme flag. It is read once at startup and rewritten on every toggle.

pub mod settings;

pub use settings::{default_config_dir, load_settings, save_settings, Settings};
