//! Page components for the waypost UI
//!
//! This module contains the top-level page components for each route.

pub mod home;
pub mod not_found;
pub mod section;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use section::SectionPage;
