// Event module
// Shared calendar event as seen by the couple's calendar

pub mod record;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A calendar event owned by one member or shared by the couple.
///
/// `date` is a local calendar date, never a UTC instant: two events compare
/// as same-day exactly when their `date` fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Local time of day; `None` for all-day events
    pub time: Option<NaiveTime>,
    pub owner_id: String,
    pub is_shared: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use noizb::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    /// let event = Event::new("evt-1", "Cenone", date, "me-1").unwrap();
    /// assert!(event.is_all_day());
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        owner_id: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            date,
            time: None,
            owner_id: owner_id.into(),
            is_shared: false,
            description: None,
            location: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.owner_id.trim().is_empty() {
            return Err("Event owner is required".to_string());
        }

        Ok(())
    }

    pub fn is_all_day(&self) -> bool {
        self.time.is_none()
    }

    /// Ordering key inside a day: all-day events first, then by time and title.
    pub fn sort_key(&self) -> (NaiveDate, Option<NaiveTime>, &str) {
        (self.date, self.time, self.title.as_str())
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    owner_id: Option<String>,
    is_shared: bool,
    description: Option<String>,
    location: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    /// Mark the event as belonging to the couple
    pub fn shared(mut self, is_shared: bool) -> Self {
        self.is_shared = is_shared;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build the event. A missing id is left empty for the store to assign.
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let date = self.date.ok_or("Event date is required")?;
        let owner_id = self.owner_id.ok_or("Event owner is required")?;

        let event = Event {
            id: self.id.unwrap_or_default(),
            title,
            date,
            time: self.time,
            owner_id,
            is_shared: self.is_shared,
            description: self.description,
            location: self.location,
        };

        event.validate()?;
        Ok(event)
    }
}
