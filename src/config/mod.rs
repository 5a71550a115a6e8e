//! Configuration loading.
//!
//! Reads `~/.config/keycalc/config.toml` (or the platform equivalent).
//! A missing file yields the defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, ThemeName, UiConfig};
