//! Content and action of the "no route matched" screen

use crate::entry::RoutePath;
use crate::navigator::NavigationRequest;

/// Oversized status glyph
pub const CODE: &str = "404";
pub const HEADING: &str = "Page not found";
pub const CAPTION: &str = "The page you're looking for doesn't exist or has been moved.";
pub const ACTION_LABEL: &str = "Go home";

/// Request issued by the screen's only action: a full load of the root.
#[must_use]
pub fn home_request() -> NavigationRequest {
    NavigationRequest::full_reload(RoutePath::root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::NavigationMode;

    #[test]
    fn test_home_request_targets_root() {
        let request = home_request();
        assert_eq!(request.target().as_str(), "/");
        assert_eq!(request.mode(), NavigationMode::FullReload);
    }

    #[test]
    fn test_content_is_static() {
        assert_eq!(CODE, "404");
        assert_eq!(HEADING, "Page not found");
        assert!(!CAPTION.is_empty());
        assert!(!ACTION_LABEL.is_empty());
    }
}
