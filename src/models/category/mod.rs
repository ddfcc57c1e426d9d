//! Ownership categories for calendar events.
//!
//! An event's category is derived relative to the viewer: it belongs to the
//! couple, to the viewer, or to the viewer's partner. Each category carries
//! the color and marker used for presence dots in the month grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::settings::Language;

/// Derived ownership of an event relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Belongs to the couple as a unit
    Shared,
    /// Belongs to the viewer
    Mine,
    /// Belongs to the viewer's partner
    Partner,
    /// Could not be attributed; never produced by the classifier
    Unknown,
}

impl Category {
    /// The three categories shown as presence dots, in display order.
    pub const INDICATED: [Category; 3] = [Category::Shared, Category::Mine, Category::Partner];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Mine => "mine",
            Self::Partner => "partner",
            Self::Unknown => "unknown",
        }
    }

    /// Hex color of the category dot.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Shared => "#EC4899",
            Self::Mine => "#3B82F6",
            Self::Partner => "#10B981",
            Self::Unknown => "#64748B",
        }
    }

    /// Single character marker used in text renderings of the grid.
    pub fn marker(&self) -> char {
        match self {
            Self::Shared => 'c',
            Self::Mine => 'm',
            Self::Partner => 'p',
            Self::Unknown => '?',
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::It, Self::Shared) => "Coppia",
            (Language::It, Self::Mine) => "Miei",
            (Language::It, Self::Partner) => "Partner",
            (Language::It, Self::Unknown) => "Sconosciuto",
            (Language::En, Self::Shared) => "Couple",
            (Language::En, Self::Mine) => "Mine",
            (Language::En, Self::Partner) => "Partner",
            (Language::En, Self::Unknown) => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shared" | "couple" | "coppia" => Ok(Self::Shared),
            "mine" | "me" | "mio" | "miei" => Ok(Self::Mine),
            "partner" => Ok(Self::Partner),
            "unknown" => Ok(Self::Unknown),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// The category filter selected in the calendar toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "tutti" => Ok(Self::All),
            other => other.parse().map(Self::Only).map_err(|_| CategoryParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CategoryParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct CategoryParseError(pub String);
