//! Navigation entry with type-safe validation
//!
//! A `NavEntry` is the display model of one sidebar row. The parent layout
//! builds a fresh set on every render pass; nothing here is ever mutated in
//! place by the component that renders it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::icon::Icon;
use crate::navigator::NavigationRequest;
use crate::result::Result;
use crate::style::{ItemStyle, StyleVariant};

/// Type-safe wrapper for a route path
///
/// Always starts with `/` and contains no whitespace, query or fragment.
/// Either the root or a single segment (`/tasks`, optionally `/tasks/`),
/// which are the only shapes the router serves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// The application root.
    pub const ROOT: &'static str = "/";

    /// Creates a new `RoutePath` with validation
    ///
    /// # Errors
    /// Returns `Error::InvalidRoutePath` if the path is empty, relative,
    /// protocol-relative (`//host`), nested below a section, or carries
    /// whitespace, a query string or a fragment.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(Error::invalid_route_path(path, "path cannot be empty"));
        }
        if !path.starts_with('/') {
            return Err(Error::invalid_route_path(path, "must start with '/'"));
        }
        if path.starts_with("//") {
            return Err(Error::invalid_route_path(path, "must not start with '//'"));
        }
        let body = path.strip_suffix('/').unwrap_or(path.as_str());
        if body.get(1..).is_some_and(|rest| rest.contains('/')) {
            return Err(Error::invalid_route_path(
                path,
                "must be the root or a single segment",
            ));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(Error::invalid_route_path(path, "must not contain whitespace"));
        }
        if path.contains(['?', '#']) {
            return Err(Error::invalid_route_path(
                path,
                "must not contain a query or fragment",
            ));
        }
        Ok(Self(path))
    }

    /// The application root path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// Skips validation; only for literals checked by the config tests.
    pub(crate) fn trusted(path: &str) -> Self {
        Self(path.to_string())
    }

    /// Returns the path as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the application root
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Path without a trailing slash (the root stays `/`).
    #[must_use]
    pub fn normalized(&self) -> &str {
        normalize(&self.0)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RoutePath> for String {
    fn from(value: RoutePath) -> Self {
        value.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips trailing slashes, keeping the root as `/`.
#[must_use]
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { RoutePath::ROOT } else { trimmed }
}

/// Non-empty display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Creates a new `Label`, trimming surrounding whitespace
    ///
    /// # Errors
    /// Returns `Error::EmptyLabel` if nothing is left after trimming.
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyLabel);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Skips validation; only for literals checked by the config tests.
    pub(crate) fn trusted(label: &str) -> Self {
        Self(label.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Label {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(value: Label) -> Self {
        value.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the navigation sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    destination: RoutePath,
    icon: Icon,
    label: Label,
    active: bool,
}

impl NavEntry {
    /// Creates an inactive entry
    #[must_use]
    pub const fn new(destination: RoutePath, icon: Icon, label: Label) -> Self {
        Self {
            destination,
            icon,
            label,
            active: false,
        }
    }

    /// Validates raw strings and creates an inactive entry
    ///
    /// # Errors
    /// Returns `Error::InvalidRoutePath` or `Error::EmptyLabel`.
    pub fn parse(destination: &str, icon: Icon, label: &str) -> Result<Self> {
        Ok(Self::new(RoutePath::new(destination)?, icon, Label::new(label)?))
    }

    /// Sets the active flag
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub const fn destination(&self) -> &RoutePath {
        &self.destination
    }

    #[must_use]
    pub const fn icon(&self) -> Icon {
        self.icon
    }

    #[must_use]
    pub const fn label(&self) -> &Label {
        &self.label
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Style variant selected by the active flag
    #[must_use]
    pub const fn variant(&self) -> StyleVariant {
        StyleVariant::from_active(self.active)
    }

    /// Class lists for this row
    #[must_use]
    pub fn style(&self) -> &'static ItemStyle {
        self.variant().style()
    }

    /// The request issued when the row is activated
    #[must_use]
    pub fn request(&self) -> NavigationRequest {
        NavigationRequest::in_app(self.destination.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_path_valid() -> Result<()> {
        let path = RoutePath::new("/dashboard")?;
        assert_eq!(path.as_str(), "/dashboard");
        assert!(!path.is_root());
        assert!(RoutePath::root().is_root());
        Ok(())
    }

    #[test]
    fn test_route_path_rejects_invalid() {
        assert!(RoutePath::new("").is_err());
        assert!(RoutePath::new("dashboard").is_err());
        assert!(RoutePath::new("/my tasks").is_err());
        assert!(RoutePath::new("/tasks?id=1").is_err());
        assert!(RoutePath::new("/tasks#top").is_err());
    }

    #[test]
    fn test_route_path_rejects_unroutable_shapes() {
        assert!(matches!(
            RoutePath::new("//evil.example"),
            Err(Error::InvalidRoutePath { .. })
        ));
        assert!(RoutePath::new("//").is_err());
        assert!(RoutePath::new("/admin/users").is_err());
        assert!(RoutePath::new("/tasks//").is_err());
    }

    #[test]
    fn test_route_path_accepts_single_segment_with_trailing_slash() -> Result<()> {
        assert_eq!(RoutePath::new("/tasks/")?.normalized(), "/tasks");
        assert!(RoutePath::new("/")?.is_root());
        Ok(())
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize("/tasks/"), "/tasks");
        assert_eq!(normalize("/tasks"), "/tasks");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("//"), "/");
    }

    #[test]
    fn test_label_trims_and_rejects_blank() -> Result<()> {
        assert_eq!(Label::new("  Tasks ")?.as_str(), "Tasks");
        assert_eq!(Label::new("   "), Err(Error::EmptyLabel));
        assert_eq!(Label::new(""), Err(Error::EmptyLabel));
        Ok(())
    }

    #[test]
    fn test_entry_defaults_to_inactive() -> Result<()> {
        let entry = NavEntry::parse("/tasks", Icon::List, "Tasks")?;
        assert!(!entry.is_active());
        assert_eq!(entry.variant(), StyleVariant::Idle);
        assert_eq!(entry, entry.clone().with_active(false));
        Ok(())
    }

    #[test]
    fn test_entry_request_targets_destination() -> Result<()> {
        let entry = NavEntry::parse("/dashboard", Icon::Dashboard, "Dashboard")?.with_active(true);
        let request = entry.request();
        assert_eq!(request.target().as_str(), "/dashboard");
        assert_eq!(entry.variant(), StyleVariant::Selected);
        Ok(())
    }
}
