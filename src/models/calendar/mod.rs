//! Month grid model.
//!
//! A month view is six Monday-first weeks: the target month padded
//! with the tail of the previous month and the head of the next one. Only the
//! first and last months chrono can represent are shifted off Monday.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// One day slot in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

/// A 6 x 7 month grid in row-major week order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// First day of the month the grid was built for
    pub month: NaiveDate,
    pub weeks: [[CalendarCell; DAYS_PER_WEEK]; WEEKS_PER_GRID],
}

impl MonthGrid {
    /// All 42 cells, week by week.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    /// Cells belonging to the grid's own month.
    pub fn current_month_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells().filter(|cell| cell.in_current_month)
    }

    pub fn first_date(&self) -> NaiveDate {
        self.weeks[0][0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.weeks[WEEKS_PER_GRID - 1][DAYS_PER_WEEK - 1].date
    }

    /// Whether `date` has a cell in this grid, inside or outside the month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_date() <= date && date <= self.last_date()
    }

    /// Row index of the week containing `date`.
    pub fn week_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        Some((date - self.first_date()).num_days() as usize / DAYS_PER_WEEK)
    }
}
