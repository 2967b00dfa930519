//! Application configuration
//!
//! # Example Config
//!
//! ```toml
//! title = "waypost"
//! log_level = "debug"
//!
//! [[navigation]]
//! path = "/"
//! label = "Home"
//! icon = "home"
//!
//! [[navigation]]
//! path = "/tasks"
//! label = "Tasks"
//! icon = "list"
//! match = "prefix"
//! ```
//!
//! Missing keys fall back to the built-in defaults. Validation runs after
//! parsing, so a config that loads is always safe to render.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::entry::{Label, RoutePath};
use crate::error::Error;
use crate::icon::Icon;
use crate::result::Result;
use crate::routing::{MatchMode, RouteDescriptor};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Shown in the sidebar header
    pub title: String,
    /// Console log filter: trace, debug, info, warn, error or off
    pub log_level: String,
    /// Sidebar entries, in display order
    pub navigation: Vec<RouteDescriptor>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "waypost".to_string(),
            log_level: "info".to_string(),
            navigation: default_navigation(),
        }
    }
}

fn default_navigation() -> Vec<RouteDescriptor> {
    [
        ("/", "Home", Icon::Home, MatchMode::Exact),
        ("/dashboard", "Dashboard", Icon::Dashboard, MatchMode::Prefix),
        ("/tasks", "Tasks", Icon::List, MatchMode::Prefix),
        ("/users", "Users", Icon::Users, MatchMode::Prefix),
        ("/reports", "Reports", Icon::Chart, MatchMode::Prefix),
        ("/settings", "Settings", Icon::Settings, MatchMode::Prefix),
    ]
    .into_iter()
    .map(|(path, label, icon, match_mode)| {
        RouteDescriptor::new(RoutePath::trusted(path), Label::trusted(label), icon)
            .with_match_mode(match_mode)
    })
    .collect()
}

impl AppConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns `Error::ConfigParseFailed` for malformed TOML, bad paths,
    /// empty labels or unknown icons, and the errors of [`Self::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            routes = config.navigation.len(),
            level = %config.log_level,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Check cross-field invariants
    ///
    /// # Errors
    /// Returns `Error::InvalidLogLevel` or `Error::DuplicateRoute`.
    pub fn validate(&self) -> Result<()> {
        self.level_filter()?;

        let mut seen = HashSet::new();
        self.navigation.iter().try_for_each(|route| {
            if seen.insert(route.path.normalized()) {
                Ok(())
            } else {
                Err(Error::DuplicateRoute {
                    path: route.path.to_string(),
                })
            }
        })
    }

    /// Parsed log level
    ///
    /// # Errors
    /// Returns `Error::InvalidLogLevel` if the level is not recognised.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| Error::InvalidLogLevel {
                level: self.log_level.clone(),
            })
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.navigation
    }
}
