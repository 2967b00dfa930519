//! Inline SVG glyphs

use leptos::prelude::*;
use waypost_core::Icon;

/// Stroked 24x24 glyph for `icon`, tinted by `class`
#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class={format!("h-5 w-5 shrink-0 {class}")}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=icon.name()
        >
            {icon.paths().iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
}
