//! Router configuration for the waypost UI
//!
//! `/` renders the home page, every single-segment path is resolved against
//! the configured sections, and anything else falls through to the 404 page.

use leptos::prelude::*;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::Sidebar;
use crate::navigation::{NavigatorHandle, RouterNavigator, provide_navigator};
use crate::pages::section::SECTION_PARAM;
use crate::pages::{HomePage, NotFoundPage, SectionPage};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = waypost_core::RoutePath::ROOT;
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Sidebar plus routed content; lives inside `<Router>` so the router's
/// navigate function can be injected for every descendant
#[component]
fn Shell() -> impl IntoView {
    provide_navigator(NavigatorHandle::new(RouterNavigator::new(use_navigate())));

    view! {
        <div class="app-shell flex min-h-screen bg-slate-50">
            <Sidebar />
            <main class="app-main flex-1">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=ParamSegment(SECTION_PARAM) view=SectionPage />
                </Routes>
            </main>
        </div>
    }
}
