//! Plain-text rendering of the calendar screen for the terminal.
//!
//! Each grid cell is five columns wide: the day number, then one marker per
//! category present that day. Days outside the month are dimmed with dots.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};

use crate::models::calendar::MonthGrid;
use crate::models::category::{Category, CategoryFilter};
use crate::models::event::Event;
use crate::models::identity::IdentityContext;
use crate::models::settings::Language;
use crate::services::calendar::{classify, events_on_day, month_indicators, DayIndicators};
use crate::utils::date::{month_title, to_time_input_value, weekday_labels};

const CELL_WIDTH: usize = 5;

/// Month title, weekday header and six rows of day cells with presence markers.
pub fn render_month(
    grid: &MonthGrid,
    events: &[Event],
    identity: &IdentityContext,
    selected: Option<NaiveDate>,
    language: Language,
) -> String {
    let indicators = month_indicators(grid, events, identity);
    let mut out = String::new();

    let _ = writeln!(out, "{}", month_title(grid.month, language));
    let header: String = weekday_labels(language)
        .iter()
        .map(|label| format!("{:<width$}", label, width = CELL_WIDTH))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for week in &grid.weeks {
        let row: String = week
            .iter()
            .map(|cell| {
                let dots = indicators.get(&cell.date).copied().unwrap_or_default();
                render_cell(cell.date, cell.in_current_month, dots, selected)
            })
            .collect();
        let _ = writeln!(out, "{}", row.trim_end());
    }

    out
}

fn render_cell(
    date: NaiveDate,
    in_current_month: bool,
    dots: DayIndicators,
    selected: Option<NaiveDate>,
) -> String {
    let markers: String = dots.categories().map(|c| c.marker()).collect();
    let day = if in_current_month {
        format!("{:>2}", date.day())
    } else {
        " .".to_string()
    };
    let cell = if selected == Some(date) {
        format!("{}*{}", day, markers)
    } else {
        format!("{}{}", day, markers)
    };
    format!("{:<width$}", cell, width = CELL_WIDTH)
}

/// One line per event of `day` that passes `filter`.
pub fn render_agenda(
    events: &[Event],
    day: NaiveDate,
    filter: CategoryFilter,
    identity: &IdentityContext,
    language: Language,
) -> String {
    let day_events = events_on_day(events, day, filter, identity);
    if day_events.is_empty() {
        return match language {
            Language::It => "Nessun evento.\n".to_string(),
            Language::En => "No events.\n".to_string(),
        };
    }

    let mut out = String::new();
    for event in day_events {
        let _ = writeln!(out, "{}", agenda_line(event, classify(event, identity), language));
    }
    out
}

/// Single agenda entry: time (or all-day marker), category label, title.
pub fn agenda_line(event: &Event, category: Category, language: Language) -> String {
    let when = match (event.time, language) {
        (Some(time), _) => to_time_input_value(time),
        (None, Language::It) => "tutto il giorno".to_string(),
        (None, Language::En) => "all day".to_string(),
    };
    format!("{} [{}] {}", when, category.label(language), event.title)
}

/// Dashboard counter line, or a hint to set the anniversary.
pub fn days_together_line(days: Option<i64>, language: Language) -> String {
    match (days, language) {
        (Some(days), Language::It) => format!("stiamo insieme da {} giorni", days),
        (Some(days), Language::En) => format!("together for {} days", days),
        (None, Language::It) => {
            "Imposta la data di anniversario per vedere i giorni insieme.".to_string()
        }
        (None, Language::En) => "Set the anniversary date to see your days together.".to_string(),
    }
}
