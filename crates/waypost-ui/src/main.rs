//! WASM entry point for the Leptos CSR app
//!
//! Trunk compiles this to WASM; it loads the embedded configuration,
//! installs logging and mounts `App` to the document body.

use leptos::prelude::*;
use tracing_subscriber::filter::LevelFilter;
use waypost_core::{AppConfig, ResultExt};
use waypost_ui::{App, logging, settings};

fn main() {
    console_error_panic_hook::set_once();

    let loaded = settings::load_embedded();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.level_filter().ok())
        .unwrap_or(LevelFilter::INFO);

    if let Err(e) = logging::init(level) {
        web_sys::console::error_1(&e.to_string().into());
    }

    let config = loaded.or_default_logged(AppConfig::default());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
