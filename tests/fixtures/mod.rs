// Test fixtures - reusable test data
// Provides consistent couples and events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use noizb::models::event::Event;
use noizb::models::identity::IdentityContext;

pub const ME: &str = "me-1";
pub const PARTNER: &str = "partner-1";
pub const STRANGER: &str = "stranger-1";

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        ymd(2025, 12, 31)
    }

    /// Jan 1, 2026
    pub fn new_year_2026() -> NaiveDate {
        ymd(2026, 1, 1)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// The signed-in user with a linked partner
pub fn couple() -> IdentityContext {
    IdentityContext::new(ME, Some(PARTNER.to_string()))
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn personal(id: &str, date: NaiveDate, owner: &str) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Event {}", id))
            .date(date)
            .owner(owner)
            .build()
            .unwrap()
    }

    pub fn shared(id: &str, date: NaiveDate, owner: &str) -> Event {
        let mut event = personal(id, date, owner);
        event.is_shared = true;
        event
    }

    pub fn at(mut event: Event, hour: u32, minute: u32) -> Event {
        event.time = NaiveTime::from_hms_opt(hour, minute, 0);
        event
    }

    /// Late dinner on New Year's Eve
    pub fn new_years_eve_dinner() -> Event {
        at(shared("nye", dates::new_years_eve_2025(), ME), 23, 30)
    }
}
