//! # Handler Registry
//!
//! Maps `(target, event kind)` to the ordered handlers bound there. Built
//! once from the [`SiteLayout`]; routing is registered first so the router
//! exists before the menu and history wiring that depends on it.

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    AnchorScrollHandler, DownloadNoticeHandler, FormResetHandler, FormSubmitHandler, Handler,
    HistoryRouteHandler, MenuToggleHandler, RevealHandler, RouteLinkHandler, SectionToggleHandler,
};
use crate::site::events::{BrowserEvent, EventKind, EventTarget};
use crate::site::layout::SiteLayout;

// Type alias for complex Handler type
type HandlerArc = Arc<dyn Handler>;

pub struct HandlerRegistry {
    bindings: HashMap<(EventTarget, EventKind), Vec<HandlerArc>>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Wire every behaviour the layout supports
    pub fn from_layout(layout: &SiteLayout) -> Self {
        let mut registry = Self::new();

        for link in layout.nav_links.iter().chain(&layout.cta_buttons) {
            registry.register(
                EventTarget::Element(link.node),
                EventKind::Click,
                Arc::new(RouteLinkHandler::new(link.page.clone())),
            );
        }
        registry.register(EventTarget::Window, EventKind::ContentLoaded, Arc::new(HistoryRouteHandler));
        registry.register(EventTarget::Window, EventKind::PopState, Arc::new(HistoryRouteHandler));

        registry.register(
            EventTarget::Element(layout.hamburger),
            EventKind::Click,
            Arc::new(MenuToggleHandler),
        );

        for section in &layout.sections {
            registry.register(
                EventTarget::Element(section.title),
                EventKind::Click,
                Arc::new(SectionToggleHandler::new(section.title, section.content)),
            );
        }

        if let Some(download) = layout.download {
            registry.register(
                EventTarget::Element(download),
                EventKind::Click,
                Arc::new(DownloadNoticeHandler),
            );
        }

        if let Some(contact) = &layout.contact {
            registry.register(
                EventTarget::Element(contact.form),
                EventKind::Submit,
                Arc::new(FormSubmitHandler),
            );
            registry.register(EventTarget::Window, EventKind::TimerFired, Arc::new(FormResetHandler));
        }

        for anchor in &layout.anchors {
            registry.register(
                EventTarget::Element(anchor.node),
                EventKind::Click,
                Arc::new(AnchorScrollHandler::new(anchor.target)),
            );
        }
        registry.register(EventTarget::Window, EventKind::Intersection, Arc::new(RevealHandler));

        tracing::debug!("Handler registry wired with {} bindings", registry.binding_count());
        registry
    }

    /// Add a handler after those already bound to the same target and kind
    pub fn register(&mut self, target: EventTarget, kind: EventKind, handler: HandlerArc) {
        self.bindings.entry((target, kind)).or_default().push(handler);
    }

    /// Handlers listening for this event, in registration order
    pub fn handlers_for(&self, event: &BrowserEvent) -> &[HandlerArc] {
        self.bindings
            .get(&(event.target(), event.kind()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of handlers across all bindings
    pub fn binding_count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
