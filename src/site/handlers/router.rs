//! # Routing Handlers
//!
//! Page navigation triggered by nav links and CTA buttons, and by the
//! document load and history traversal events, which resolve the URL
//! fragment to a page.

use anyhow::Result;

use super::{Handler, HandlerContext, ViewCommand};
use crate::site::events::{BrowserEvent, PageId};

/// Click on a link bound to a page id
pub struct RouteLinkHandler {
    page: PageId,
}

impl RouteLinkHandler {
    pub fn new(page: PageId) -> Self {
        Self { page }
    }
}

impl Handler for RouteLinkHandler {
    fn handle(&self, _context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        Ok(vec![
            ViewCommand::PreventDefault,
            ViewCommand::NavigateToPage {
                page: self.page.clone(),
            },
        ])
    }

    fn name(&self) -> &'static str {
        "RouteLink"
    }
}

/// Document load and popstate: route to the fragment's page or home
pub struct HistoryRouteHandler;

impl HistoryRouteHandler {
    /// Page named by the fragment if it exists, otherwise the home page
    pub fn resolve(context: &HandlerContext) -> PageId {
        let fragment = context.location_fragment.trim_start_matches('#');
        let candidate = PageId::new(fragment);
        if !fragment.is_empty() && context.layout.has_page(&candidate) {
            candidate
        } else {
            if !fragment.is_empty() {
                tracing::debug!("Fragment '{}' names no page, routing home", fragment);
            }
            context.settings.home_page.clone()
        }
    }
}

impl Handler for HistoryRouteHandler {
    fn is_relevant(&self, _context: &HandlerContext, event: &BrowserEvent) -> bool {
        matches!(event, BrowserEvent::ContentLoaded | BrowserEvent::PopState)
    }

    fn handle(&self, context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        Ok(vec![ViewCommand::NavigateToPage {
            page: Self::resolve(context),
        }])
    }

    fn name(&self) -> &'static str {
        "HistoryRoute"
    }
}
