//! Main application component

use leptos::prelude::*;
use waypost_core::AppConfig;

use crate::router::AppRouter;
use crate::settings::provide_app_config;

/// Root component: shares `config` through the context and mounts the router
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    tracing::info!(
        title = %config.title,
        routes = config.routes().len(),
        "Starting application"
    );
    provide_app_config(config);

    view! { <AppRouter /> }
}
