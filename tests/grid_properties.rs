// Property-based tests for the month grid
// Checks shape and continuity for arbitrary anchors, plus every starting weekday

mod fixtures;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use test_case::test_case;

use fixtures::dates::ymd;
use noizb::services::calendar::build_month_grid;
use noizb::utils::date::days_in_month;

proptest! {
    /// Property: every grid is 6 rows of 7 cells
    #[test]
    fn prop_grid_is_always_six_by_seven(
        year in 1900..2200i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let grid = build_month_grid(ymd(year, month, day));
        prop_assert_eq!(grid.weeks.len(), 6);
        prop_assert!(grid.weeks.iter().all(|week| week.len() == 7));
        prop_assert_eq!(grid.cells().count(), 42);
    }

    /// Property: the 42 dates are consecutive days starting on a Monday
    #[test]
    fn prop_grid_dates_are_consecutive(
        year in 1900..2200i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let grid = build_month_grid(ymd(year, month, day));
        let dates: Vec<NaiveDate> = grid.cells().map(|c| c.date).collect();

        prop_assert_eq!(dates[0].weekday(), Weekday::Mon);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    /// Property: in-month cells are exactly days 1..=len of the anchor's month, in order
    #[test]
    fn prop_current_month_cells_cover_the_month(
        year in 1900..2200i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let anchor = ymd(year, month, day);
        let grid = build_month_grid(anchor);
        let days: Vec<u32> = grid
            .current_month_cells()
            .inspect(|c| assert_eq!((c.date.year(), c.date.month()), (year, month)))
            .map(|c| c.date.day())
            .collect();

        let expected: Vec<u32> = (1..=days_in_month(anchor)).collect();
        prop_assert_eq!(days, expected);

        // padding cells never belong to the anchor's month
        for cell in grid.cells().filter(|c| !c.in_current_month) {
            prop_assert_ne!((cell.date.year(), cell.date.month()), (year, month));
        }
    }
}

// 2025 months whose first day falls on each weekday
#[test_case(2025, 12, 0 ; "starts on monday")]
#[test_case(2025, 4, 1 ; "starts on tuesday")]
#[test_case(2025, 10, 2 ; "starts on wednesday")]
#[test_case(2025, 5, 3 ; "starts on thursday")]
#[test_case(2025, 8, 4 ; "starts on friday")]
#[test_case(2025, 11, 5 ; "starts on saturday")]
#[test_case(2025, 6, 6 ; "starts on sunday")]
fn test_leading_padding_matches_weekday(year: i32, month: u32, leading: usize) {
    let grid = build_month_grid(ymd(year, month, 1));
    let padding = grid
        .cells()
        .take_while(|c| !c.in_current_month)
        .count();
    assert_eq!(padding, leading);

    let trailing = grid.cells().rev().take_while(|c| !c.in_current_month).count();
    assert_eq!(leading + days_in_month(ymd(year, month, 1)) as usize + trailing, 42);
}

#[test_case(2024 ; "leap year")]
#[test_case(2025 ; "common year")]
#[test_case(2000 ; "leap century")]
#[test_case(2100 ; "common century")]
fn test_february_length(year: i32) {
    let grid = build_month_grid(ymd(year, 2, 14));
    let expected = if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) { 29 } else { 28 };
    assert_eq!(grid.current_month_cells().count(), expected);
}

#[test]
fn test_leap_day_is_in_grid() {
    let leap = fixtures::dates::leap_day_2024();
    let grid = build_month_grid(leap);
    assert!(grid.current_month_cells().any(|c| c.date == leap));
}

#[test]
fn test_december_2025_scenario() {
    let grid = build_month_grid(ymd(2025, 12, 1));

    let first_row: Vec<NaiveDate> = grid.weeks[0].iter().map(|c| c.date).collect();
    let expected: Vec<NaiveDate> = (1..=7).map(|d| ymd(2025, 12, d)).collect();
    assert_eq!(first_row, expected);
    assert!(grid.weeks[0].iter().all(|c| c.in_current_month));

    let last = grid.weeks[5][6];
    assert!(!last.in_current_month);
    assert_eq!((last.date.year(), last.date.month()), (2026, 1));
    assert!(last.date.day() <= 14);
}
