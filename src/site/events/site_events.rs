//! # Site Events
//!
//! User-level actions fed to the controller by an [`EventSource`](super::EventSource).
//! Elements are named by their element id. The controller translates each
//! action into browser behaviour and [`BrowserEvent`](super::BrowserEvent) dispatches.

use serde::{Deserialize, Serialize};

/// Scripted user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SiteEvent {
    /// Document finished loading
    Load,
    /// Click an element
    Click { element: String },
    /// Replace a form field's value
    Type { element: String, value: String },
    /// Submit a form
    Submit { element: String },
    /// Browser back button
    Back,
    /// Browser forward button
    Forward,
    /// User scrolls the viewport to an absolute offset
    ScrollTo { top: f64 },
    /// Let time pass
    Wait { ms: u64 },
}
