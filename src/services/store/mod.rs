//! Collaborator interfaces for the hosted backend.
//!
//! The calendar core only needs to know who is signed in and which events the
//! couple can see. These traits keep it independent of any particular backend
//! client; the in-memory implementations back the CLI and the tests.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use chrono::TimeZone;

use crate::models::event::record::{normalize_records, EventRecord};
use crate::models::event::Event;
use crate::models::identity::IdentityContext;

/// Source of the signed-in user and their partner link.
pub trait SessionProvider {
    /// Id of the signed-in user, `None` when signed out.
    fn current_user(&self) -> Result<Option<String>>;

    /// Id of the partner linked to `user_id`, if any.
    fn partner_of(&self, user_id: &str) -> Result<Option<String>>;
}

/// Record store for the couple's events.
pub trait EventStore {
    fn list(&self) -> Result<Vec<Event>>;
    fn create(&mut self, event: Event) -> Result<Event>;
    fn update(&mut self, event: &Event) -> Result<()>;
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Resolve the identity context once per session.
pub fn resolve_identity(session: &dyn SessionProvider) -> Result<IdentityContext> {
    let current = session
        .current_user()
        .context("Failed to read current session")?
        .ok_or_else(|| anyhow!("No user is signed in"))?;
    let partner = session
        .partner_of(&current)
        .with_context(|| format!("Failed to look up partner of {}", current))?;

    Ok(IdentityContext::new(current, partner))
}

/// A session with fixed ids.
#[derive(Debug, Clone)]
pub struct StaticSession {
    identity: Option<IdentityContext>,
}

impl StaticSession {
    pub fn signed_in(identity: IdentityContext) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    pub fn signed_out() -> Self {
        Self { identity: None }
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Result<Option<String>> {
        Ok(self.identity.as_ref().map(|i| i.current_user_id.clone()))
    }

    fn partner_of(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self
            .identity
            .as_ref()
            .filter(|i| i.current_user_id == user_id)
            .and_then(|i| i.partner_user_id.clone()))
    }
}

/// Event store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: Vec<Event>,
    next_id: u64,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            next_id: events.len() as u64,
            events,
        }
    }

    /// Load backend rows from a JSON array, reading timestamps in `tz`.
    /// Rows that fail normalization are skipped.
    pub fn load_json<Tz: TimeZone>(path: &Path, tz: &Tz) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read events from {}", path.display()))?;
        let records: Vec<EventRecord> = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse events from {}", path.display()))?;

        let total = records.len();
        let events = normalize_records(records, tz);
        log::info!("Loaded {} of {} events from {}", events.len(), total, path.display());
        Ok(Self::with_events(events))
    }

    fn allocate_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let candidate = format!("evt-{}", self.next_id);
            if !self.events.iter().any(|e| e.id == candidate) {
                return candidate;
            }
        }
    }
}

impl EventStore for InMemoryEventStore {
    /// Events ordered by date, all-day first, then time and title.
    fn list(&self) -> Result<Vec<Event>> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Ok(events)
    }

    fn create(&mut self, mut event: Event) -> Result<Event> {
        event.validate().map_err(|e| anyhow!(e))?;

        if event.id.trim().is_empty() {
            event.id = self.allocate_id();
        } else if self.events.iter().any(|e| e.id == event.id) {
            bail!("Event with id {} already exists", event.id);
        }

        log::debug!("Creating event {} on {}", event.id, event.date);
        self.events.push(event.clone());
        Ok(event)
    }

    fn update(&mut self, event: &Event) -> Result<()> {
        event.validate().map_err(|e| anyhow!(e))?;

        let slot = self
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| anyhow!("Event with id {} not found", event.id))?;
        *slot = event.clone();
        log::debug!("Updated event {}", event.id);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() == before {
            bail!("Event with id {} not found", id);
        }
        log::debug!("Deleted event {}", id);
        Ok(())
    }
}
