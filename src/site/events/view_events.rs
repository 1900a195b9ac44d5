//! # View Events
//!
//! Events emitted by the view model after state changes. The controller
//! collects them after each dispatch and publishes them on the event bus.

use super::types::{PageId, SectionId};
use crate::site::handlers::ContactField;

/// Events describing visible state changes
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Router ran; `page` is `None` when no page matched the requested id
    PageActivated {
        requested: PageId,
        page: Option<PageId>,
    },

    /// Mobile menu opened or closed
    MenuToggled { open: bool },

    /// Expandable section changed state
    SectionToggled { section: SectionId, collapsed: bool },

    /// Validation failed for a field
    FieldErrorShown { field: ContactField, message: String },

    /// Form hidden and success banner shown
    FormSubmitted,

    /// Form restored after the reset delay
    FormReset,

    /// Element faded in for the first time
    ElementRevealed { element: String },

    /// Blocking notice shown to the user
    NoticeShown { message: String },

    /// Viewport scrolled
    Scrolled { top: f64 },
}
