//! Home page component

use leptos::prelude::*;

use crate::settings::use_app_config;

/// Landing view for `/`
#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_app_config();
    let sections = config
        .routes()
        .iter()
        .filter(|route| !route.path.is_root())
        .count();

    view! {
        <section class="home-page px-8 py-10">
            <h1 class="text-2xl font-bold text-slate-900">{config.title}</h1>
            <p class="mt-2 text-slate-500">
                {format!("{sections} sections available from the sidebar.")}
            </p>
        </section>
    }
}
