//! Icon identifiers
//!
//! A closed set; front ends map each variant to a glyph or a drawable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Home,
    Upload,
    Search,
    FileText,
    CreditCard,
    Settings,
    BarChart,
    LogIn,
    Sun,
    Moon,
}

impl IconId {
    /// Get all icon identifiers
    pub fn all() -> &'static [IconId] {
        &[
            IconId::Home,
            IconId::Upload,
            IconId::Search,
            IconId::FileText,
            IconId::CreditCard,
            IconId::Settings,
            IconId::BarChart,
            IconId::LogIn,
            IconId::Sun,
            IconId::Moon,
        ]
    }

    /// Stable identifier, matches the serialized form
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Upload => "upload",
            Self::Search => "search",
            Self::FileText => "file-text",
            Self::CreditCard => "credit-card",
            Self::Settings => "settings",
            Self::BarChart => "bar-chart",
            Self::LogIn => "log-in",
            Self::Sun => "sun",
            Self::Moon => "moon",
        }
    }
}
