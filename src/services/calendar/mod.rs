//! Calendar view-model.
//!
//! Pure functions the month view is rendered from: the six-week grid, the
//! ownership category of each event, and the per-day event lists and presence
//! dots. Nothing here touches storage; events arrive already loaded.

mod classify;
mod filter;
mod grid;

pub use classify::classify;
pub use filter::{day_indicators, events_on_day, month_indicators, upcoming_events, DayIndicators};
pub use grid::build_month_grid;
