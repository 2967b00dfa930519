//! Embedded configuration and its context accessors

use leptos::prelude::*;
use waypost_core::{AppConfig, Result};

/// `waypost.toml` baked into the bundle at build time
pub const EMBEDDED_CONFIG: &str = include_str!("../waypost.toml");

/// Parse the embedded configuration
///
/// # Errors
/// Returns the parse or validation error of [`AppConfig::from_toml_str`].
pub fn load_embedded() -> Result<AppConfig> {
    AppConfig::from_toml_str(EMBEDDED_CONFIG)
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Configuration provided by `App`, or the built-in defaults
#[must_use]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
