//! Reusable UI components

pub mod icon;
pub mod navigation_item;
pub mod sidebar;

pub use icon::IconGlyph;
pub use navigation_item::NavigationItem;
pub use sidebar::Sidebar;
