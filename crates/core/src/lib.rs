//! Framework-free navigation model for the waypost UI
//!
//! Everything the sidebar and the fallback page decide lives here, so it can
//! be tested natively without a browser:
//!
//! - `entry`: validated route paths, labels and the `NavEntry` display model
//! - `style`: active flag to style variant, via a lookup table
//! - `icon`: glyph set for navigation rows
//! - `navigator`: navigation requests and the injected `Navigator` capability
//! - `routing`: route descriptors, active matching, route resolution
//! - `fallback`: content and action of the "no route matched" screen
//! - `config`: TOML configuration with validation
//! - `error` / `result`: error type and `Result` alias

#![forbid(unsafe_code)]

pub mod config;
pub mod entry;
pub mod error;
pub mod fallback;
pub mod icon;
pub mod navigator;
pub mod result;
pub mod routing;
pub mod style;

pub use config::AppConfig;
pub use entry::{Label, NavEntry, RoutePath};
pub use error::Error;
pub use icon::Icon;
pub use navigator::{ClickModifiers, NavigationMode, NavigationRequest, Navigator};
pub use result::{Result, ResultExt};
pub use routing::{MatchMode, RouteDescriptor, RouteMatch, build_entries, resolve_route};
pub use style::{ItemStyle, StyleVariant};
