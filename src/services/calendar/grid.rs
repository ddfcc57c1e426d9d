use chrono::{Datelike, Duration, NaiveDate};

use crate::models::calendar::{CalendarCell, MonthGrid, CELLS_PER_GRID, DAYS_PER_WEEK};
use crate::utils::date::{first_of_month, weekday_offset_monday};

/// Build the six-week, Monday-first grid for the month containing `anchor`.
///
/// Only the anchor's year and month matter. The grid always holds 42
/// consecutive days: the previous month's tail, the whole month, then the
/// next month's head.
///
/// At the two ends of the representable date range the window is shifted
/// to stay inside it, so those grids may not start on a Monday.
pub fn build_month_grid(anchor: NaiveDate) -> MonthGrid {
    let first = first_of_month(anchor);
    let leading = Duration::days(weekday_offset_monday(first) as i64);
    let span = Duration::days(CELLS_PER_GRID as i64 - 1);

    let mut grid_start = first.checked_sub_signed(leading).unwrap_or(NaiveDate::MIN);
    if grid_start.checked_add_signed(span).is_none() {
        grid_start = NaiveDate::MAX.checked_sub_signed(span).unwrap_or(grid_start);
    }

    let flat: Vec<CalendarCell> = grid_start
        .iter_days()
        .take(CELLS_PER_GRID)
        .map(|date| CalendarCell {
            date,
            in_current_month: date.year() == first.year() && date.month() == first.month(),
        })
        .collect();
    debug_assert_eq!(flat.len(), CELLS_PER_GRID);

    let weeks = std::array::from_fn(|week| {
        std::array::from_fn(|day| flat[week * DAYS_PER_WEEK + day])
    });

    MonthGrid {
        month: first,
        weeks,
    }
}
