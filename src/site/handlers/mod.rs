//! # Event Handlers
//!
//! Handlers own the decision logic for each behaviour. They receive a
//! read-only [`HandlerContext`] and return [`ViewCommand`]s; the controller
//! applies the commands once every handler for the event has run.
//! Handlers suggest, the controller decides.

pub mod contact_form;
pub mod download;
pub mod menu;
pub mod registry;
pub mod router;
pub mod scroll;
pub mod sections;

pub use crate::site::layout::ContactField;
pub use contact_form::{validate_submission, ContactSubmission, FieldError, FormResetHandler, FormSubmitHandler};
pub use download::DownloadNoticeHandler;
pub use menu::MenuToggleHandler;
pub use registry::HandlerRegistry;
pub use router::{HistoryRouteHandler, RouteLinkHandler};
pub use scroll::{AnchorScrollHandler, RevealHandler};
pub use sections::SectionToggleHandler;

use crate::config::SiteSettings;
use crate::site::document::{Document, NodeId};
use crate::site::events::{BrowserEvent, PageId};
use crate::site::layout::SiteLayout;
use anyhow::Result;
use std::time::Duration;

/// Read-only view of the state handlers decide on
pub struct HandlerContext<'a> {
    pub document: &'a Document,
    pub layout: &'a SiteLayout,
    pub settings: &'a SiteSettings,
    /// Current URL fragment without `#`
    pub location_fragment: &'a str,
}

/// A listener bound to an (element, event kind) pair
pub trait Handler: Send + Sync {
    /// Whether this handler reacts to the given event
    fn is_relevant(&self, _context: &HandlerContext, _event: &BrowserEvent) -> bool {
        true
    }

    /// Decide what should happen in response to the event
    fn handle(&self, context: &HandlerContext, event: &BrowserEvent) -> Result<Vec<ViewCommand>>;

    /// Get handler name for debugging and logging
    fn name(&self) -> &'static str;
}

/// State changes handlers request from the controller
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Suppress the browser's default action for the event
    PreventDefault,

    /// Flip the open state of the hamburger and menu panel
    ToggleMenu,

    /// Run the router for a page id
    NavigateToPage { page: PageId },

    /// Flip the collapsed state of a title and its content block
    ToggleSection { title: NodeId, content: Option<NodeId> },

    /// Show a blocking notice
    ShowNotice { message: String },

    /// Empty every field error slot
    ClearFieldErrors,

    /// Show an inline validation message
    ShowFieldError { field: ContactField, message: String },

    /// Hide the form and show the success banner
    ShowSubmissionSuccess,

    /// Schedule the form reset, replacing any pending one
    ScheduleFormReset { delay: Duration },

    /// Clear field values, show the form and hide the banner
    ResetContactForm,

    /// Smoothly scroll an element to the top of the viewport
    ScrollIntoView { target: NodeId },

    /// Fade an element in
    RevealElement { target: NodeId },

    /// No action needed
    NoAction,
}
