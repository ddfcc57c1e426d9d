use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classify::classify;
use crate::models::calendar::MonthGrid;
use crate::models::category::{Category, CategoryFilter};
use crate::models::event::Event;
use crate::models::identity::IdentityContext;

/// Which categories have at least one event on a day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayIndicators {
    pub shared: bool,
    pub mine: bool,
    pub partner: bool,
}

impl DayIndicators {
    pub fn mark(&mut self, category: Category) {
        match category {
            Category::Shared => self.shared = true,
            Category::Mine => self.mine = true,
            Category::Partner => self.partner = true,
            Category::Unknown => {}
        }
    }

    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::Shared => self.shared,
            Category::Mine => self.mine,
            Category::Partner => self.partner,
            Category::Unknown => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.shared || self.mine || self.partner)
    }

    /// Present categories in dot display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::INDICATED.into_iter().filter(|c| self.has(*c))
    }
}

/// Events on `day` whose category passes `filter`, in input order.
///
/// Days compare as local calendar dates, so an event late on the 31st never
/// shows up on the 1st.
pub fn events_on_day<'a>(
    events: &'a [Event],
    day: NaiveDate,
    filter: CategoryFilter,
    identity: &IdentityContext,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.date == day)
        .filter(|event| filter.matches(classify(event, identity)))
        .collect()
}

/// Presence dots for `day`, computed over every event regardless of the
/// active filter.
pub fn day_indicators(events: &[Event], day: NaiveDate, identity: &IdentityContext) -> DayIndicators {
    let mut indicators = DayIndicators::default();
    for event in events.iter().filter(|event| event.date == day) {
        indicators.mark(classify(event, identity));
    }
    indicators
}

/// Presence dots for every cell of `grid` in a single pass over `events`.
///
/// Dates without events are absent from the map.
pub fn month_indicators(
    grid: &MonthGrid,
    events: &[Event],
    identity: &IdentityContext,
) -> HashMap<NaiveDate, DayIndicators> {
    let mut by_day: HashMap<NaiveDate, DayIndicators> = HashMap::new();
    for event in events.iter().filter(|event| grid.contains(event.date)) {
        by_day
            .entry(event.date)
            .or_default()
            .mark(classify(event, identity));
    }
    by_day
}

/// The next `limit` events from `today` on, earliest first.
pub fn upcoming_events(events: &[Event], today: NaiveDate, limit: usize) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|event| event.date >= today).collect();
    upcoming.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    upcoming.truncate(limit);
    upcoming
}
