//! Sidebar layout composing navigation rows from the configured routes

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use waypost_core::build_entries;

use crate::components::navigation_item::NavigationItem;
use crate::settings::use_app_config;

/// Left navigation column
///
/// Entries are rebuilt from the route descriptors on every location change;
/// each row only receives the resulting `active` flag.
#[component]
pub fn Sidebar() -> impl IntoView {
    let config = use_app_config();
    let location = use_location();
    let title = config.title.clone();
    let routes = config.navigation;

    view! {
        <aside class="sidebar flex w-64 shrink-0 flex-col border-r border-slate-200 bg-white">
            <div class="sidebar-header px-5 py-6">
                <span class="text-lg font-bold tracking-tight text-slate-900">{title}</span>
            </div>
            <nav class="flex-1 px-3" aria-label="Main navigation">
                <ul class="space-y-1">
                    {move || {
                        let current = location.pathname.get();
                        build_entries(&routes, &current)
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li>
                                        <NavigationItem
                                            destination=entry.destination().to_string()
                                            icon=entry.icon()
                                            label=entry.label().to_string()
                                            active=entry.is_active()
                                        />
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
        </aside>
    }
}
