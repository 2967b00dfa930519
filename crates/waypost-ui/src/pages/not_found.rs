//! 404 Not Found page component

use leptos::prelude::*;
use waypost_core::fallback;

use crate::navigation::use_navigator;

/// Fallback screen for locations no route matches
///
/// Its single action reloads the application at `/`.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigator = use_navigator();
    let go_home = move |_| navigator.dispatch(&fallback::home_request());

    tracing::debug!("Rendering fallback page");

    view! {
        <div class="not-found-page flex min-h-screen flex-col items-center justify-center bg-slate-50 px-4 text-center">
            <span class="not-found-code text-9xl font-extrabold tracking-tight text-slate-200">
                {fallback::CODE}
            </span>
            <h1 class="mt-4 text-3xl font-bold text-slate-900">{fallback::HEADING}</h1>
            <p class="mt-2 max-w-md text-slate-500">{fallback::CAPTION}</p>
            <button
                type="button"
                class="mt-8 rounded-lg bg-indigo-600 px-5 py-2.5 text-sm font-medium text-white shadow hover:bg-indigo-700"
                on:click=go_home
            >
                {fallback::ACTION_LABEL}
            </button>
        </div>
    }
}
