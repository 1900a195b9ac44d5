//! # Browser Events
//!
//! Events the browser delivers to listeners. Each event knows its kind and
//! the target its listeners are registered on.

use super::types::{EventKind, EventTarget, TimerId, TimerTask};
use crate::site::document::NodeId;

/// One observation delivered by the intersection observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

/// Events dispatched through the handler registry
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    /// Document finished loading
    ContentLoaded,

    /// Element clicked
    Click { target: NodeId },

    /// Form field value changed by the user
    Input { target: NodeId, value: String },

    /// Form submitted
    Submit { target: NodeId },

    /// History traversal (back/forward) changed the location
    PopState,

    /// Observed elements crossed the visibility threshold
    Intersection { entries: Vec<IntersectionEntry> },

    /// A scheduled timer elapsed
    TimerFired { timer: TimerId, task: TimerTask },
}

impl BrowserEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BrowserEvent::ContentLoaded => EventKind::ContentLoaded,
            BrowserEvent::Click { .. } => EventKind::Click,
            BrowserEvent::Input { .. } => EventKind::Input,
            BrowserEvent::Submit { .. } => EventKind::Submit,
            BrowserEvent::PopState => EventKind::PopState,
            BrowserEvent::Intersection { .. } => EventKind::Intersection,
            BrowserEvent::TimerFired { .. } => EventKind::TimerFired,
        }
    }

    /// Target whose listeners receive this event
    pub fn target(&self) -> EventTarget {
        match self {
            BrowserEvent::Click { target }
            | BrowserEvent::Input { target, .. }
            | BrowserEvent::Submit { target } => EventTarget::Element(*target),
            BrowserEvent::ContentLoaded
            | BrowserEvent::PopState
            | BrowserEvent::Intersection { .. }
            | BrowserEvent::TimerFired { .. } => EventTarget::Window,
        }
    }
}
