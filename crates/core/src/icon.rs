//! Icon glyphs for navigation rows
//!
//! Each variant maps to the path data of a 24x24 stroked SVG glyph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Glyph shown next to a navigation label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Icon {
    /// Plain bullet, used when a route names no icon
    #[default]
    Dot,
    Home,
    Dashboard,
    List,
    Users,
    Chart,
    Settings,
    Help,
}

impl Icon {
    pub const ALL: [Self; 8] = [
        Self::Dot,
        Self::Home,
        Self::Dashboard,
        Self::List,
        Self::Users,
        Self::Chart,
        Self::Settings,
        Self::Help,
    ];

    /// Configuration name of the icon
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::List => "list",
            Self::Users => "users",
            Self::Chart => "chart",
            Self::Settings => "settings",
            Self::Help => "help",
        }
    }

    /// SVG `d` attributes, one per `<path>`
    #[must_use]
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Dot => &["M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z"],
            Self::Home => &["M3 9.5 12 3l9 6.5V20a1 1 0 0 1-1 1h-5v-6H9v6H4a1 1 0 0 1-1-1z"],
            Self::Dashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
            Self::List => &[
                "M8 6h13",
                "M8 12h13",
                "M8 18h13",
                "M3 6h.01",
                "M3 12h.01",
                "M3 18h.01",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::Chart => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            Self::Settings => &[
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
                "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
            ],
            Self::Help => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
                "M12 17h.01",
            ],
        }
    }
}

impl FromStr for Icon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| Error::UnknownIcon {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Icon {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
