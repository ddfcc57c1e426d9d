// UI models module
// Serializable state of the calendar screen

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::calendar::MonthGrid;
use crate::models::category::CategoryFilter;
use crate::services::calendar::build_month_grid;
use crate::utils::date::{first_of_month, first_of_next_month, first_of_previous_month};

/// Everything the calendar screen needs besides the events themselves.
///
/// `view_month` is always the first day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarViewState {
    pub view_month: NaiveDate,
    pub selected_date: NaiveDate,
    pub filter: CategoryFilter,
}

impl CalendarViewState {
    /// Start on today's month with today selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view_month: first_of_month(today),
            selected_date: today,
            filter: CategoryFilter::All,
        }
    }

    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn next_month(&mut self) {
        self.view_month = first_of_next_month(self.view_month);
    }

    pub fn previous_month(&mut self) {
        self.view_month = first_of_previous_month(self.view_month);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.view_month = first_of_month(today);
        self.selected_date = today;
    }

    /// Select a day. Picking a padding cell moves the view to that day's month.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.view_month = first_of_month(date);
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn grid(&self) -> MonthGrid {
        build_month_grid(self.view_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_state_starts_on_today() {
        let state = CalendarViewState::new(ymd(2025, 12, 17));
        assert_eq!(state.view_month, ymd(2025, 12, 1));
        assert_eq!(state.selected_date, ymd(2025, 12, 17));
        assert_eq!(state.filter, CategoryFilter::All);
    }

    #[test]
    fn test_navigation_across_year_boundary() {
        let mut state = CalendarViewState::new(ymd(2025, 12, 17));
        state.next_month();
        assert_eq!(state.view_month, ymd(2026, 1, 1));
        state.previous_month();
        state.previous_month();
        assert_eq!(state.view_month, ymd(2025, 11, 1));
        // selection is untouched by paging
        assert_eq!(state.selected_date, ymd(2025, 12, 17));

        state.go_to_today(ymd(2026, 2, 3));
        assert_eq!(state.view_month, ymd(2026, 2, 1));
        assert_eq!(state.selected_date, ymd(2026, 2, 3));
    }

    #[test]
    fn test_selecting_padding_cell_moves_month() {
        let mut state = CalendarViewState::new(ymd(2025, 12, 1));
        let padding = state.grid().weeks[5][6];
        assert!(!padding.in_current_month);

        state.select_date(padding.date);
        assert_eq!(state.view_month, ymd(2026, 1, 1));
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = CalendarViewState::new(ymd(2025, 12, 1))
            .with_filter(CategoryFilter::Only(Category::Shared));
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"filter\":\"shared\""));
        let back: CalendarViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
