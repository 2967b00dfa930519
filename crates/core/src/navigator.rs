//! Navigation requests and the capability that carries them out
//!
//! Components never touch the router or the browser directly. They build a
//! `NavigationRequest` and hand it to whatever `Navigator` was injected, so
//! the same component runs against the real router, the browser location or
//! a recording double in tests.

use std::fmt;

use crate::entry::RoutePath;
use crate::result::Result;

/// How a navigation request is carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationMode {
    /// Route change inside the running application, no reload
    InApp,
    /// Full document load of the target
    FullReload,
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InApp => write!(f, "in-app"),
            Self::FullReload => write!(f, "full-reload"),
        }
    }
}

/// A request to show another route
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationRequest {
    target: RoutePath,
    mode: NavigationMode,
}

impl NavigationRequest {
    #[must_use]
    pub const fn new(target: RoutePath, mode: NavigationMode) -> Self {
        Self { target, mode }
    }

    /// Route change without reloading
    #[must_use]
    pub const fn in_app(target: RoutePath) -> Self {
        Self::new(target, NavigationMode::InApp)
    }

    /// Full document load
    #[must_use]
    pub const fn full_reload(target: RoutePath) -> Self {
        Self::new(target, NavigationMode::FullReload)
    }

    #[must_use]
    pub const fn target(&self) -> &RoutePath {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> NavigationMode {
        self.mode
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.target, self.mode)
    }
}

/// Capability to carry out navigation requests
///
/// Implementations must be `Send + Sync`: they are shared through the UI
/// framework's context store.
pub trait Navigator: Send + Sync {
    /// Carry out `request`. Fire-and-forget: success means the request was
    /// handed over, not that the new view has rendered.
    ///
    /// # Errors
    /// Returns `Error::NavigationFailed` or `Error::WindowUnavailable` when
    /// the underlying primitive is missing or refuses the request.
    fn navigate(&self, request: &NavigationRequest) -> Result<()>;
}

/// Modifier state of a click on a navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickModifiers {
    /// True when the click should become an in-app navigation request.
    ///
    /// Middle clicks and modified clicks (new tab, new window, download)
    /// are left to the browser.
    #[must_use]
    pub const fn should_intercept(&self) -> bool {
        self.button == 0 && !self.ctrl && !self.meta && !self.shift && !self.alt
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingNavigator {
        requests: Mutex<Vec<NavigationRequest>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, request: &NavigationRequest) -> Result<()> {
            self.requests
                .lock()
                .map_err(|e| Error::navigation_failed(request.target().as_str(), e.to_string()))?
                .push(request.clone());
            Ok(())
        }
    }

    #[test]
    fn test_request_constructors() -> Result<()> {
        let target = RoutePath::new("/tasks")?;
        assert_eq!(
            NavigationRequest::in_app(target.clone()).mode(),
            NavigationMode::InApp
        );
        assert_eq!(
            NavigationRequest::full_reload(target).mode(),
            NavigationMode::FullReload
        );
        Ok(())
    }

    #[test]
    fn test_request_display() {
        let request = NavigationRequest::full_reload(RoutePath::root());
        assert_eq!(request.to_string(), "/ (full-reload)");
    }

    #[test]
    fn test_navigator_is_object_safe() -> Result<()> {
        let recorder = RecordingNavigator::default();
        let navigator: &dyn Navigator = &recorder;
        navigator.navigate(&NavigationRequest::in_app(RoutePath::new("/users")?))?;

        let requests = recorder
            .requests
            .lock()
            .map_err(|e| Error::navigation_failed("/users", e.to_string()))?;
        assert_eq!(requests.len(), 1);
        Ok(())
    }

    #[test]
    fn test_plain_click_is_intercepted() {
        assert!(ClickModifiers::default().should_intercept());
    }

    #[test]
    fn test_modified_clicks_pass_through() {
        let cases = [
            ClickModifiers { button: 1, ..Default::default() },
            ClickModifiers { ctrl: true, ..Default::default() },
            ClickModifiers { meta: true, ..Default::default() },
            ClickModifiers { shift: true, ..Default::default() },
            ClickModifiers { alt: true, ..Default::default() },
        ];
        for modifiers in cases {
            assert!(!modifiers.should_intercept(), "{modifiers:?}");
        }
    }
}
