//! # Events Module
//!
//! Re-exports all event system components organized by category:
//! browser events dispatched to handlers, site events fed in by an event
//! source, and view events published after state changes.

pub mod browser_events;
pub mod event_bus;
pub mod event_source;
pub mod script_event_source;
pub mod site_events;
pub mod types;
pub mod view_events;

pub use browser_events::{BrowserEvent, IntersectionEntry};
pub use event_bus::{EventBus, SimpleEventBus, ViewEventHandler};
pub use event_source::EventSource;
pub use script_event_source::ScriptEventSource;
pub use site_events::SiteEvent;
pub use types::{EventKind, EventTarget, PageId, SectionId, TimerId, TimerTask};
pub use view_events::ViewEvent;
