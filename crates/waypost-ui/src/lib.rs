//! Leptos 0.7 CSR frontend for waypost
//!
//! A sidebar of navigation rows driven by `waypost.toml`, plus a 404 page
//! for locations outside the configured sections.
//!
//! ## Module Structure
//! - `app`: Root component
//! - `router`: Route table and the layout shell
//! - `components`: Navigation row, sidebar and icon glyphs
//! - `pages`: Home, section and not-found pages
//! - `navigation`: Browser and router navigators, context injection
//! - `settings`: Embedded configuration
//! - `logging`: `tracing` subscriber writing to the browser console

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod router;
pub mod settings;

pub use app::App;

#[cfg(test)]
mod tests;
