// Date utility functions
// Local-calendar helpers shared by the calendar view-model and the record loader

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::settings::Language;

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after the one containing `date`.
///
/// Saturates at the last representable month.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(first)
}

/// First day of the month before the one containing `date`.
pub fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .pred_opt()
        .map(first_of_month)
        .unwrap_or(first)
}

/// Number of days in the month containing `date`.
///
/// Computed as "day 0 of next month", i.e. the day before the first of the
/// following month, so leap-year February comes out as 29.
pub fn days_in_month(date: NaiveDate) -> u32 {
    // December is fixed; the last representable year has no next month
    if date.month() == 12 {
        return 31;
    }
    first_of_next_month(date)
        .pred_opt()
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Weekday of `date` with Monday = 0 .. Sunday = 6.
pub fn weekday_offset_monday(date: NaiveDate) -> u32 {
    // chrono numbers from Sunday = 0; shift so the week starts on Monday.
    (date.weekday().num_days_from_sunday() + 6) % 7
}

/// Format a date the way HTML date inputs expect (`YYYY-MM-DD`).
pub fn to_date_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a time the way HTML time inputs expect (`HH:MM`).
pub fn to_time_input_value(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parse a `YYYY-MM-DD` date, tolerating surrounding whitespace.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parse a wall-clock time as stored by the backend.
///
/// Accepts `HH:MM` and `HH:MM:SS`, with an optional offset suffix such as
/// `+00`, `+02:00` or `Z`. The suffix is dropped: event times are local wall
/// clock values and are never shifted.
pub fn parse_time_input(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    let clock = value
        .find(|c| c == '+' || c == 'Z' || c == 'z')
        .map(|idx| &value[..idx])
        .unwrap_or(value);
    // A trailing "-hh" offset only appears after the seconds field.
    let clock = match clock.rfind('-') {
        Some(idx) if idx >= 5 => &clock[..idx],
        _ => clock,
    };

    NaiveTime::parse_from_str(clock, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .ok()
}

/// Turn a local wall-clock date and time in `tz` into a UTC instant.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant;
/// times that do not exist (DST spring-forward gap) yield `None`.
pub fn combine_date_time<Tz: TimeZone>(
    date: NaiveDate,
    time: NaiveTime,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

/// Calendar date of `instant` as seen on a wall clock in `tz`.
pub fn local_date_of<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Whole days elapsed from `anniversary` to `today`; zero when it lies ahead.
pub fn days_since(anniversary: NaiveDate, today: NaiveDate) -> i64 {
    if today < anniversary {
        return 0;
    }
    (today - anniversary).num_days()
}

const MONTHS_IT: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto",
    "settembre", "ottobre", "novembre", "dicembre",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Heading for a month view, e.g. `dicembre 2025`.
pub fn month_title(date: NaiveDate, language: Language) -> String {
    let names = match language {
        Language::It => &MONTHS_IT,
        Language::En => &MONTHS_EN,
    };
    format!("{} {}", names[date.month0() as usize], date.year())
}

/// Short weekday labels, Monday first.
pub fn weekday_labels(language: Language) -> [&'static str; 7] {
    match language {
        Language::It => ["Lun", "Mar", "Mer", "Gio", "Ven", "Sab", "Dom"],
        Language::En => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    }
}
