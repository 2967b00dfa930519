//! Navigator implementations and context injection
//!
//! Components ask for a `NavigatorHandle` through the Leptos context. The
//! router layout provides a `RouterNavigator`; anything rendered outside a
//! router falls back to the plain `BrowserNavigator`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use waypost_core::{Error, NavigationMode, NavigationRequest, Navigator, Result, ResultExt};

/// The browser navigation primitive: every request is a document load
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, request: &NavigationRequest) -> Result<()> {
        let window = web_sys::window().ok_or(Error::WindowUnavailable)?;
        tracing::debug!(%request, "Loading document");
        window
            .location()
            .assign(request.target().as_str())
            .map_err(|e| Error::navigation_failed(request.target().as_str(), format!("{e:?}")))
    }
}

/// Sends in-app requests through the router, full reloads to the browser
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync,
{
    /// Wrap the function returned by `leptos_router::hooks::use_navigate`
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Send + Sync,
{
    fn navigate(&self, request: &NavigationRequest) -> Result<()> {
        match request.mode() {
            NavigationMode::InApp => {
                tracing::debug!(%request, "Routing");
                (self.navigate)(request.target().as_str(), NavigateOptions::default());
                Ok(())
            }
            NavigationMode::FullReload => BrowserNavigator.navigate(request),
        }
    }
}

/// Shared, type-erased navigator stored in the Leptos context
#[derive(Clone)]
pub struct NavigatorHandle(Arc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Arc::new(navigator))
    }

    /// Carry out `request`
    ///
    /// # Errors
    /// Propagates the navigator's error.
    pub fn navigate(&self, request: &NavigationRequest) -> Result<()> {
        self.0.navigate(request)
    }

    /// Fire-and-forget: carry out `request`, logging a failure
    pub fn dispatch(&self, request: &NavigationRequest) {
        self.navigate(request).into_option_logged();
    }
}

impl Default for NavigatorHandle {
    fn default() -> Self {
        Self::new(BrowserNavigator)
    }
}

/// Make `handle` the navigator for the current owner and its children
pub fn provide_navigator(handle: NavigatorHandle) {
    provide_context(handle);
}

/// Navigator injected by an ancestor, or the browser primitive
#[must_use]
pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use waypost_core::RoutePath;

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl Navigator for Recorder {
        fn navigate(&self, request: &NavigationRequest) -> Result<()> {
            self.seen
                .lock()
                .map_err(|e| Error::navigation_failed(request.target().as_str(), e.to_string()))?
                .push(request.to_string());
            Ok(())
        }
    }

    struct Refusing;

    impl Navigator for Refusing {
        fn navigate(&self, request: &NavigationRequest) -> Result<()> {
            Err(Error::navigation_failed(request.target().as_str(), "refused"))
        }
    }

    #[test]
    fn test_router_navigator_routes_in_app_requests() -> Result<()> {
        let routed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&routed);
        let navigator = RouterNavigator::new(move |path: &str, _options: NavigateOptions| {
            if let Ok(mut paths) = sink.lock() {
                paths.push(path.to_string());
            }
        });

        navigator.navigate(&NavigationRequest::in_app(RoutePath::new("/tasks")?))?;

        let paths = routed
            .lock()
            .map_err(|e| Error::navigation_failed("/tasks", e.to_string()))?;
        assert_eq!(paths.as_slice(), ["/tasks".to_string()]);
        Ok(())
    }

    #[test]
    fn test_handle_forwards_to_navigator() -> Result<()> {
        let recorder = Recorder::default();
        let handle = NavigatorHandle::new(recorder.clone());

        handle.navigate(&NavigationRequest::full_reload(RoutePath::root()))?;

        let seen = recorder
            .seen
            .lock()
            .map_err(|e| Error::navigation_failed("/", e.to_string()))?;
        assert_eq!(seen.as_slice(), ["/ (full-reload)".to_string()]);
        Ok(())
    }

    #[test]
    fn test_dispatch_swallows_failures() {
        let handle = NavigatorHandle::new(Refusing);
        handle.dispatch(&NavigationRequest::full_reload(RoutePath::root()));
        assert!(
            handle
                .navigate(&NavigationRequest::full_reload(RoutePath::root()))
                .is_err()
        );
    }
}
