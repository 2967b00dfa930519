//! Page for a configured top-level section

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use waypost_core::{RouteMatch, resolve_route};

use crate::components::IconGlyph;
use crate::pages::not_found::NotFoundPage;
use crate::settings::use_app_config;

/// Route parameter holding the first path segment
pub const SECTION_PARAM: &str = "section";

/// Shows the section named by the `:section` segment, or the fallback page
/// when no configured route owns it
#[component]
pub fn SectionPage() -> impl IntoView {
    let config = use_app_config();
    let params = use_params_map();

    move || {
        let section = params
            .with(|map| map.get(SECTION_PARAM).map(|value| value.to_string()))
            .unwrap_or_default();
        let path = format!("/{section}");

        match resolve_route(&path, config.routes()) {
            RouteMatch::Found(route) => {
                let icon = route.icon;
                let label = route.label.to_string();
                view! {
                    <section class="section-page px-8 py-10">
                        <header class="flex items-center gap-3">
                            <IconGlyph icon=icon class="text-indigo-600" />
                            <h1 class="text-2xl font-bold text-slate-900">{label}</h1>
                        </header>
                    </section>
                }
                .into_any()
            }
            RouteMatch::NotFound => {
                tracing::info!(%path, "No route matched");
                view! { <NotFoundPage /> }.into_any()
            }
        }
    }
}
