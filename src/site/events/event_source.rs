//! # Event Source Abstraction
//!
//! The **EventSource trait** decouples the controller loop from where user
//! actions come from. The binary replays a JSON script; tests push events
//! directly. Either way the controller runs its real dispatch logic.
//!
//! ```text
//! Binary:  ViewController ──▶ ScriptEventSource ──▶ script.json
//! Tests:   ViewController ──▶ ScriptEventSource ──▶ VecDeque<SiteEvent>
//! ```

use super::site_events::SiteEvent;
use anyhow::Result;
use std::time::Duration;

/// Trait for abstracting site event input sources
pub trait EventSource {
    /// Check if events are available without blocking
    ///
    /// Returns true if events are ready to be read, false if timeout elapsed.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event
    ///
    /// This should only be called after poll() returns true.
    fn read(&mut self) -> Result<SiteEvent>;

    /// Check if the event source is exhausted
    ///
    /// Returns true if no more events are available and none will be added.
    fn is_exhausted(&self) -> bool {
        false
    }
}
