//! Sidebar navigation row

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use waypost_core::{ClickModifiers, Icon, NavigationRequest, ResultExt, RoutePath, StyleVariant};

use crate::components::icon::IconGlyph;
use crate::navigation::use_navigator;

/// Clickable icon + label row linking to `destination`
///
/// `active` picks the selected or idle style variant; it is decided by the
/// parent and defaults to `false`. A plain click is turned into an in-app
/// request to the injected navigator; modified clicks keep browser behavior.
#[component]
pub fn NavigationItem(
    #[prop(into)] destination: String,
    icon: Icon,
    #[prop(into)] label: String,
    #[prop(optional)] active: bool,
) -> impl IntoView {
    let label = label.trim().to_string();
    let variant = StyleVariant::from_active(active);
    let style = variant.style();
    let navigator = use_navigator();
    let request = RoutePath::new(destination.clone())
        .map(NavigationRequest::in_app)
        .into_option_logged();

    let on_click = move |ev: MouseEvent| {
        let modifiers = ClickModifiers {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
            alt: ev.alt_key(),
        };
        if !modifiers.should_intercept() {
            return;
        }
        if let Some(request) = &request {
            ev.prevent_default();
            navigator.dispatch(request);
        }
    };

    view! {
        <a
            href=destination
            class=variant.row_class()
            data-variant=variant.as_str()
            aria-current=variant.aria_current()
            on:click=on_click
        >
            <IconGlyph icon=icon class=style.icon />
            <span class=style.label>{label}</span>
        </a>
    }
}
