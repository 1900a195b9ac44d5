//! # Site View Model
//!
//! Owns the document and the resolved layout, and implements every state
//! transition on them. All state lives on document elements; the view model
//! only adds the set of already revealed elements.
//!
//! Each mutation queues [`ViewEvent`]s which the controller collects and
//! publishes after the dispatch completes.

use std::collections::BTreeSet;

use crate::config::{
    REVEAL_HIDDEN_OPACITY, REVEAL_HIDDEN_TRANSFORM, REVEAL_SHOWN_OPACITY, REVEAL_SHOWN_TRANSFORM,
    REVEAL_TRANSITION,
};
use crate::site::document::{Document, NodeId, ACTIVE_CLASS};
use crate::site::events::{PageId, SectionId, ViewEvent};
use crate::site::handlers::ContactField;
use crate::site::layout::SiteLayout;

pub const COLLAPSED_CLASS: &str = "collapsed";

pub struct SiteViewModel {
    document: Document,
    layout: SiteLayout,
    revealed: BTreeSet<NodeId>,
    pending_view_events: Vec<ViewEvent>,
}

impl SiteViewModel {
    pub fn new(document: Document, layout: SiteLayout) -> Self {
        Self {
            document,
            layout,
            revealed: BTreeSet::new(),
            pending_view_events: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// Drain view events queued since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    fn emit(&mut self, event: ViewEvent) {
        self.pending_view_events.push(event);
    }

    fn set_class(&mut self, node: NodeId, class: &str, present: bool) {
        if let Some(element) = self.document.get_mut(node) {
            if present {
                element.add_class(class);
            } else {
                element.remove_class(class);
            }
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.document
            .get(node)
            .is_some_and(|element| element.has_class(class))
    }

    fn set_display(&mut self, node: NodeId, display: &str) {
        if let Some(element) = self.document.get_mut(node) {
            element.style.display = Some(display.to_string());
        }
    }

    // ----- menu -----

    /// Flip the open state of both hamburger and menu panel
    pub fn toggle_menu(&mut self) -> bool {
        let (hamburger, menu) = (self.layout.hamburger, self.layout.menu);
        let open = self
            .document
            .get_mut(hamburger)
            .map(|element| element.toggle_class(ACTIVE_CLASS))
            .unwrap_or(false);
        if let Some(element) = self.document.get_mut(menu) {
            element.toggle_class(ACTIVE_CLASS);
        }
        self.emit(ViewEvent::MenuToggled { open });
        open
    }

    pub fn close_menu(&mut self) {
        let was_open = self.is_menu_open();
        self.set_class(self.layout.hamburger, ACTIVE_CLASS, false);
        self.set_class(self.layout.menu, ACTIVE_CLASS, false);
        if was_open {
            self.emit(ViewEvent::MenuToggled { open: false });
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.has_class(self.layout.hamburger, ACTIVE_CLASS)
    }

    pub fn is_menu_panel_open(&self) -> bool {
        self.has_class(self.layout.menu, ACTIVE_CLASS)
    }

    // ----- router -----

    /// Show only the page `page`, highlight its nav link and close the menu
    ///
    /// An unknown id leaves every page hidden. Returns the activated page node.
    pub fn navigate_to_page(&mut self, page: &PageId) -> Option<NodeId> {
        let pages: Vec<_> = self.layout.pages.iter().map(|(_, node)| *node).collect();
        for node in pages {
            self.set_class(node, ACTIVE_CLASS, false);
        }
        let target = self.layout.page(page);
        if let Some(node) = target {
            self.set_class(node, ACTIVE_CLASS, true);
            tracing::info!("Page '{}' activated", page);
        } else {
            tracing::debug!("No page matches '{}', all pages hidden", page);
        }

        let links: Vec<_> = self
            .layout
            .nav_links
            .iter()
            .map(|link| (link.node, &link.page == page))
            .collect();
        for (node, highlighted) in links {
            self.set_class(node, ACTIVE_CLASS, highlighted);
        }

        self.close_menu();
        self.emit(ViewEvent::PageActivated {
            requested: page.clone(),
            page: target.map(|_| page.clone()),
        });
        target
    }

    /// Pages currently carrying the active class
    pub fn active_pages(&self) -> Vec<PageId> {
        self.layout
            .pages
            .iter()
            .filter(|(_, node)| self.has_class(*node, ACTIVE_CLASS))
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn active_page(&self) -> Option<PageId> {
        self.active_pages().into_iter().next()
    }

    /// Page ids of highlighted nav links
    pub fn highlighted_links(&self) -> Vec<PageId> {
        self.layout
            .nav_links
            .iter()
            .filter(|link| self.has_class(link.node, ACTIVE_CLASS))
            .map(|link| link.page.clone())
            .collect()
    }

    // ----- expandable sections -----

    /// Toggle a title and, when present, its content block
    ///
    /// The two flip independently; returns the title's new state.
    pub fn toggle_section(&mut self, title: NodeId, content: Option<NodeId>) -> bool {
        if let Some(content) = content {
            if let Some(element) = self.document.get_mut(content) {
                element.toggle_class(COLLAPSED_CLASS);
            }
        }
        let collapsed = self
            .document
            .get_mut(title)
            .map(|element| element.toggle_class(COLLAPSED_CLASS))
            .unwrap_or(false);

        let key = self
            .layout
            .sections
            .iter()
            .find(|section| section.title == title)
            .map(|section| section.key.clone());
        if let Some(section) = key {
            self.emit(ViewEvent::SectionToggled { section, collapsed });
        }
        collapsed
    }

    /// Collapsed state of a section's title
    pub fn is_section_collapsed(&self, key: &SectionId) -> Option<bool> {
        self.layout
            .section(key)
            .map(|section| self.has_class(section.title, COLLAPSED_CLASS))
    }

    /// Collapsed state of a section's content block, if it has one
    pub fn is_section_content_collapsed(&self, key: &SectionId) -> Option<bool> {
        self.layout
            .section(key)
            .and_then(|section| section.content)
            .map(|content| self.has_class(content, COLLAPSED_CLASS))
    }

    // ----- contact form -----

    /// Set a form control's value
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(element) = self.document.get_mut(node) {
            element.value = value.to_string();
        }
    }

    pub fn field_value(&self, field: ContactField) -> Option<&str> {
        let contact = self.layout.contact.as_ref()?;
        self.document
            .get(contact.slot(field).input)
            .map(|element| element.value.as_str())
    }

    pub fn clear_field_errors(&mut self) {
        let Some(contact) = &self.layout.contact else {
            return;
        };
        for node in contact.error_slots.clone() {
            if let Some(element) = self.document.get_mut(node) {
                element.text.clear();
            }
        }
    }

    pub fn show_field_error(&mut self, field: ContactField, message: &str) {
        let Some(contact) = &self.layout.contact else {
            return;
        };
        let error = contact.slot(field).error;
        if let Some(element) = self.document.get_mut(error) {
            element.text = message.to_string();
        }
        self.emit(ViewEvent::FieldErrorShown {
            field,
            message: message.to_string(),
        });
    }

    /// Displayed error text for a field; `None` when the slot is empty
    pub fn field_error(&self, field: ContactField) -> Option<&str> {
        let contact = self.layout.contact.as_ref()?;
        self.document
            .get(contact.slot(field).error)
            .map(|element| element.text.as_str())
            .filter(|text| !text.is_empty())
    }

    pub fn show_submission_success(&mut self) {
        let Some(contact) = &self.layout.contact else {
            return;
        };
        let (form, banner) = (contact.form, contact.banner);
        self.set_display(form, "none");
        self.set_display(banner, "block");
        self.emit(ViewEvent::FormSubmitted);
    }

    /// Clear every field value, show the form, hide the banner
    pub fn reset_contact_form(&mut self) {
        let Some(contact) = &self.layout.contact else {
            return;
        };
        let (form, banner) = (contact.form, contact.banner);
        let inputs: Vec<_> = contact.fields.iter().map(|slot| slot.input).collect();
        for input in inputs {
            self.set_value(input, "");
        }
        self.set_display(form, "block");
        self.set_display(banner, "none");
        self.emit(ViewEvent::FormReset);
    }

    /// Hide the banner without touching the form
    pub fn hide_success_banner(&mut self) {
        if let Some(banner) = self.layout.contact.as_ref().map(|contact| contact.banner) {
            self.set_display(banner, "none");
        }
    }

    pub fn is_form_visible(&self) -> bool {
        self.layout
            .contact
            .as_ref()
            .and_then(|contact| self.document.get(contact.form))
            .is_some_and(|element| !element.is_display_none())
    }

    pub fn is_banner_visible(&self) -> bool {
        self.layout
            .contact
            .as_ref()
            .and_then(|contact| self.document.get(contact.banner))
            .is_some_and(|element| !element.is_display_none())
    }

    // ----- reveal on scroll -----

    /// Apply the hidden starting style to every animated element
    pub fn prepare_reveal(&mut self) {
        for node in self.layout.animated.clone() {
            if let Some(element) = self.document.get_mut(node) {
                element.style.opacity = Some(REVEAL_HIDDEN_OPACITY.to_string());
                element.style.transform = Some(REVEAL_HIDDEN_TRANSFORM.to_string());
                element.style.transition = Some(REVEAL_TRANSITION.to_string());
            }
        }
    }

    /// Fade an element in; returns false if it was already revealed
    pub fn reveal(&mut self, node: NodeId) -> bool {
        if !self.revealed.insert(node) {
            return false;
        }
        if let Some(element) = self.document.get_mut(node) {
            element.style.opacity = Some(REVEAL_SHOWN_OPACITY.to_string());
            element.style.transform = Some(REVEAL_SHOWN_TRANSFORM.to_string());
        }
        let element = self.document.describe(node);
        tracing::debug!("Revealed {}", element);
        self.emit(ViewEvent::ElementRevealed { element });
        true
    }

    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.revealed.contains(&node)
    }

    pub fn revealed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.revealed.iter().copied()
    }

    pub fn opacity(&self, node: NodeId) -> Option<&str> {
        self.document
            .get(node)
            .and_then(|element| element.style.opacity.as_deref())
    }

    pub(crate) fn record(&mut self, event: ViewEvent) {
        self.emit(event);
    }
}
