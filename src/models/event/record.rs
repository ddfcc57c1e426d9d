//! Raw event rows as returned by the backend, and their normalization into
//! local-calendar [`Event`]s.
//!
//! Rows come in two shapes: the older `event_date`/`event_time` pair, and the
//! detail page's `start_at` timestamp. Timestamps are converted to a wall clock
//! in the viewer's zone before the date is taken, so an evening event never
//! slides onto the next day because of the UTC offset.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::Event;
use crate::utils::date::{parse_date_input, parse_time_input};

/// Legacy type tag marking a couple event.
const SHARED_TYPE_TAG: &str = "coppia";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("event {0} has no date")]
    MissingDate(String),
    #[error("event {id} has an invalid date '{value}'")]
    InvalidDate { id: String, value: String },
    #[error("event {id} has an invalid time '{value}'")]
    InvalidTime { id: String, value: String },
    #[error("event {id} has an invalid timestamp '{value}'")]
    InvalidTimestamp { id: String, value: String },
    #[error("event {id} is invalid: {reason}")]
    Invalid { id: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
    pub start_at: Option<String>,
    pub all_day: bool,
    pub created_by: String,
    pub is_for_couple: bool,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl EventRecord {
    /// Normalize the row into an [`Event`], reading timestamps in `tz`.
    pub fn into_event<Tz: TimeZone>(self, tz: &Tz) -> Result<Event, RecordError> {
        let start = self.parse_start_at()?.map(|instant| instant.with_timezone(tz));

        let date = match (self.event_date.as_deref(), start.as_ref()) {
            (Some(raw), _) => parse_date_input(raw).ok_or_else(|| RecordError::InvalidDate {
                id: self.id.clone(),
                value: raw.to_string(),
            })?,
            (None, Some(start)) => start.date_naive(),
            (None, None) => return Err(RecordError::MissingDate(self.id)),
        };

        let time = match self.event_time.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                Some(parse_time_input(raw).ok_or_else(|| RecordError::InvalidTime {
                    id: self.id.clone(),
                    value: raw.to_string(),
                })?)
            }
            _ if self.all_day => None,
            _ if self.event_date.is_none() => start.as_ref().map(|start| start.time()),
            _ => None,
        };

        let is_shared = self.is_for_couple
            || self
                .kind
                .as_deref()
                .is_some_and(|kind| kind.trim().eq_ignore_ascii_case(SHARED_TYPE_TAG));

        let event = Event {
            id: self.id,
            title: self.title,
            date,
            time,
            owner_id: self.created_by,
            is_shared,
            description: non_blank(self.description),
            location: non_blank(self.location),
        };

        event.validate().map_err(|reason| RecordError::Invalid {
            id: event.id.clone(),
            reason,
        })?;
        Ok(event)
    }

    fn parse_start_at(&self) -> Result<Option<DateTime<Utc>>, RecordError> {
        let Some(raw) = self.start_at.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        DateTime::parse_from_rfc3339(raw)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| RecordError::InvalidTimestamp {
                id: self.id.clone(),
                value: raw.to_string(),
            })
    }
}

/// Normalize a batch of rows, logging and skipping the ones that fail.
pub fn normalize_records<Tz: TimeZone>(records: Vec<EventRecord>, tz: &Tz) -> Vec<Event> {
    records
        .into_iter()
        .filter_map(|record| match record.into_event(tz) {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping event row: {}", err);
                None
            }
        })
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
