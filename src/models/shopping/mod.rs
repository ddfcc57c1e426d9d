//! Shopping list item model.
//!
//! Items carry a free-text category. A handful of categories ship with the
//! app and cannot be renamed or removed.

use serde::{Deserialize, Serialize};

/// Categories every couple starts with.
pub const FIXED_CATEGORIES: [&str; 4] = ["casa", "spesa", "viaggi", "altro"];

/// Group name for items without a category.
pub const UNCATEGORIZED: &str = "Senza categoria";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub urgent: bool,
}

impl ShoppingItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            done: false,
            category: None,
            urgent: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Trimmed category, `None` when absent or blank.
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Item label cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Whether `name` is one of the built-in categories, ignoring case and padding.
pub fn is_fixed_category_name(name: &str) -> bool {
    let name = name.trim();
    FIXED_CATEGORIES
        .iter()
        .any(|fixed| fixed.eq_ignore_ascii_case(name))
}
