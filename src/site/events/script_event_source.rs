//! Script Event Source Implementation
//!
//! EventSource backed by a queue of pre-programmed site events, loaded from
//! a JSON script or pushed by tests.

use super::event_source::EventSource;
use super::site_events::SiteEvent;
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::Path;
use std::time::Duration;

/// Event source that replays a queue of site events
#[derive(Debug, Clone, Default)]
pub struct ScriptEventSource {
    events: VecDeque<SiteEvent>,
}

impl ScriptEventSource {
    /// Create a new script event source with an empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script event source with pre-populated events
    pub fn with_events(events: Vec<SiteEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let events: Vec<SiteEvent> =
            serde_json::from_str(json).context("Failed to parse event script")?;
        Ok(Self::with_events(events))
    }

    /// Load a JSON array of site events from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event script '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn push_event(&mut self, event: SiteEvent) {
        self.events.push_back(event);
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptEventSource {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<SiteEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available in script queue"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}
