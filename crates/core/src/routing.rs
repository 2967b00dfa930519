//! Route descriptors, active-route matching and route resolution

use serde::{Deserialize, Serialize};

use crate::entry::{Label, NavEntry, RoutePath, normalize};
use crate::icon::Icon;

/// How a descriptor decides it matches the current location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Only the path itself
    Exact,
    /// The path and everything below it
    #[default]
    Prefix,
}

/// One configured navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDescriptor {
    pub path: RoutePath,
    pub label: Label,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,
}

impl RouteDescriptor {
    #[must_use]
    pub const fn new(path: RoutePath, label: Label, icon: Icon) -> Self {
        Self {
            path,
            label,
            icon,
            match_mode: MatchMode::Prefix,
        }
    }

    #[must_use]
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// True when this descriptor corresponds to `current_path`.
    ///
    /// Trailing slashes are ignored. Prefix matching works on whole
    /// segments, and the root only ever matches itself.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        let current = normalize(current_path);
        let target = self.path.normalized();

        match self.match_mode {
            MatchMode::Exact => current == target,
            MatchMode::Prefix if self.path.is_root() => current == target,
            MatchMode::Prefix => {
                current == target
                    || current
                        .strip_prefix(target)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    /// Display entry for this descriptor at `current_path`
    #[must_use]
    pub fn to_entry(&self, current_path: &str) -> NavEntry {
        NavEntry::new(self.path.clone(), self.icon, self.label.clone())
            .with_active(self.is_active(current_path))
    }
}

/// Build the sidebar entries for the current location, in configured order
#[must_use]
pub fn build_entries(routes: &[RouteDescriptor], current_path: &str) -> Vec<NavEntry> {
    routes
        .iter()
        .map(|route| route.to_entry(current_path))
        .collect()
}

/// Outcome of resolving a location against the configured routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    Found(&'a RouteDescriptor),
    /// No configured route; the fallback page is shown
    NotFound,
}

impl RouteMatch<'_> {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Resolve `path` to the configured route that owns it
#[must_use]
pub fn resolve_route<'a>(path: &str, routes: &'a [RouteDescriptor]) -> RouteMatch<'a> {
    let wanted = normalize(path);
    routes
        .iter()
        .find(|route| route.path.normalized() == wanted)
        .map_or(RouteMatch::NotFound, RouteMatch::Found)
}
