// Settings module
// User preferences persisted as TOML

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::category::CategoryFilter;
use crate::utils::date::days_since;

/// Language used for labels, month titles and share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    /// IANA zone name used to read backend timestamps; system local when unset.
    pub timezone: Option<String>,
    /// How many upcoming events the dashboard preview shows.
    pub upcoming_limit: usize,
    pub show_done_items: bool,
    pub default_filter: CategoryFilter,
    /// Day the couple got together, as `YYYY-MM-DD`.
    pub anniversary: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::It,
            timezone: None,
            upcoming_limit: 5,
            show_done_items: false,
            default_filter: CategoryFilter::All,
            anniversary: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.upcoming_limit == 0 || self.upcoming_limit > 50 {
            return Err("Upcoming limit must be between 1 and 50".to_string());
        }

        self.parsed_timezone()?;
        Ok(())
    }

    /// Days since the anniversary, or `None` when it is not set.
    pub fn days_together(&self, today: NaiveDate) -> Option<i64> {
        self.anniversary.map(|anniversary| days_since(anniversary, today))
    }

    /// The configured zone, or `None` to use the system local zone.
    pub fn parsed_timezone(&self) -> Result<Option<chrono_tz::Tz>, String> {
        match self.timezone.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name
                .parse::<chrono_tz::Tz>()
                .map(Some)
                .map_err(|e| format!("Unknown timezone '{}': {}", name, e)),
        }
    }
}
