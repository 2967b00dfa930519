//! Style variants for navigation rows
//!
//! The active flag selects one of two variants. Class lists come from a
//! lookup table keyed by variant, so the mapping stays a pure function.

use std::fmt;

/// Visual treatment of a navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleVariant {
    /// Row for the route currently displayed
    Selected,
    #[default]
    Idle,
}

/// Class lists applied to the parts of a navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyle {
    pub row: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Classes shared by both variants (layout only, no color).
pub const ROW_BASE: &str = "group flex items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium";

const SELECTED_STYLE: ItemStyle = ItemStyle {
    row: "bg-indigo-600 text-white shadow-md",
    icon: "text-white",
    label: "font-semibold",
};

const IDLE_STYLE: ItemStyle = ItemStyle {
    row: "text-slate-600 hover:bg-slate-100 hover:text-slate-900 transition-colors duration-150",
    icon: "text-slate-400 group-hover:text-slate-600",
    label: "font-normal",
};

/// Variant-specific class lists.
pub const VARIANT_STYLES: [(StyleVariant, ItemStyle); 2] = [
    (StyleVariant::Selected, SELECTED_STYLE),
    (StyleVariant::Idle, IDLE_STYLE),
];

impl StyleVariant {
    /// All variants, in table order
    pub const ALL: [Self; 2] = [Self::Selected, Self::Idle];

    /// Map the active flag to a variant
    #[must_use]
    pub const fn from_active(active: bool) -> Self {
        if active { Self::Selected } else { Self::Idle }
    }

    /// Look up the class lists for this variant
    #[must_use]
    pub fn style(self) -> &'static ItemStyle {
        VARIANT_STYLES
            .iter()
            .find(|(variant, _)| *variant == self)
            .map_or(&IDLE_STYLE, |(_, style)| style)
    }

    /// Value of the `data-variant` attribute
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Idle => "idle",
        }
    }

    /// Full class string for the row element
    #[must_use]
    pub fn row_class(self) -> String {
        format!("{ROW_BASE} {}", self.style().row)
    }

    /// Value of `aria-current`, present only when selected
    #[must_use]
    pub const fn aria_current(self) -> Option<&'static str> {
        match self {
            Self::Selected => Some("page"),
            Self::Idle => None,
        }
    }
}

impl From<bool> for StyleVariant {
    fn from(active: bool) -> Self {
        Self::from_active(active)
    }
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
