//! # Site Layout
//!
//! Resolves every element the view controller wires behaviour to, once, at
//! initialization. Handlers are bound to the typed result instead of looking
//! up data attributes on each event.
//!
//! Required: `#hamburger` and `#navMenu`. Optional: the download trigger and
//! the contact form; when a contact form is present all of its parts must be.
//! Links to unknown pages and titles without a content block are tolerated
//! and logged.

use crate::site::document::{Document, NodeId, PAGE_CLASS};
use crate::site::events::{PageId, SectionId};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const HAMBURGER_ID: &str = "hamburger";
pub const MENU_ID: &str = "navMenu";
pub const DOWNLOAD_ID: &str = "downloadBtn";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUCCESS_BANNER_ID: &str = "formSuccess";

pub const NAV_LINK_CLASS: &str = "nav-link";
pub const CTA_CONTAINER_CLASS: &str = "cta-buttons";
pub const PAGE_ATTRIBUTE: &str = "data-page";
pub const SECTION_ATTRIBUTE: &str = "data-section";

/// Classes whose elements fade in when scrolled into view
pub const ANIMATED_CLASSES: [&str; 6] = [
    "achievement-card",
    "experience-item",
    "education-item",
    "biodata-section",
    "contact-form-wrapper",
    "contact-info-wrapper",
];

/// Errors raised while wiring behaviour to the document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("required element '#{0}' is missing")]
    MissingElement(&'static str),

    #[error("contact form is missing '#{0}'")]
    IncompleteContactForm(&'static str),
}

/// The three validated contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn input_id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn error_id(self) -> &'static str {
        match self {
            ContactField::Name => "nameError",
            ContactField::Email => "emailError",
            ContactField::Message => "messageError",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_id())
    }
}

/// Which collection a routing link came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLinkKind {
    /// Navigation bar entry, highlighted while its page is active
    Nav,
    /// Call-to-action button; routes but is never highlighted
    Cta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLink {
    pub node: NodeId,
    pub page: PageId,
    pub kind: RouteLinkKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandableSection {
    pub title: NodeId,
    pub key: SectionId,
    pub content: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    pub field: ContactField,
    pub input: NodeId,
    pub error: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormLayout {
    pub form: NodeId,
    pub banner: NodeId,
    pub fields: [FieldSlot; 3],
    /// Every `.error-message` element; all are cleared on submit
    pub error_slots: Vec<NodeId>,
}

impl ContactFormLayout {
    pub fn slot(&self, field: ContactField) -> FieldSlot {
        self.fields[field as usize]
    }
}

/// In-page fragment anchor eligible for smooth scrolling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLink {
    pub node: NodeId,
    pub href: String,
    pub target: Option<NodeId>,
}

/// Typed map from identifiers to the elements behaviour is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub hamburger: NodeId,
    pub menu: NodeId,
    pub pages: Vec<(PageId, NodeId)>,
    pub nav_links: Vec<RouteLink>,
    pub cta_buttons: Vec<RouteLink>,
    pub sections: Vec<ExpandableSection>,
    pub download: Option<NodeId>,
    pub contact: Option<ContactFormLayout>,
    pub anchors: Vec<AnchorLink>,
    pub animated: Vec<NodeId>,
}

impl SiteLayout {
    pub fn build(document: &Document) -> Result<Self, LayoutError> {
        let hamburger = document
            .element_by_id(HAMBURGER_ID)
            .ok_or(LayoutError::MissingElement(HAMBURGER_ID))?;
        let menu = document
            .element_by_id(MENU_ID)
            .ok_or(LayoutError::MissingElement(MENU_ID))?;

        let pages = Self::collect_pages(document);
        let mut layout = Self {
            hamburger,
            menu,
            nav_links: Vec::new(),
            cta_buttons: Vec::new(),
            sections: Self::collect_sections(document),
            download: document.element_by_id(DOWNLOAD_ID),
            contact: Self::collect_contact_form(document)?,
            anchors: Self::collect_anchors(document),
            animated: Self::collect_animated(document),
            pages,
        };
        layout.nav_links = layout.collect_route_links(document, RouteLinkKind::Nav);
        layout.cta_buttons = layout.collect_route_links(document, RouteLinkKind::Cta);

        tracing::debug!(
            "Layout resolved: {} pages, {} nav links, {} cta buttons, {} sections, {} anchors, {} animated",
            layout.pages.len(),
            layout.nav_links.len(),
            layout.cta_buttons.len(),
            layout.sections.len(),
            layout.anchors.len(),
            layout.animated.len()
        );
        Ok(layout)
    }

    pub fn page(&self, page: &PageId) -> Option<NodeId> {
        self.pages
            .iter()
            .find(|(id, _)| id == page)
            .map(|(_, node)| *node)
    }

    pub fn has_page(&self, page: &PageId) -> bool {
        self.page(page).is_some()
    }

    pub fn page_ids(&self) -> impl Iterator<Item = &PageId> {
        self.pages.iter().map(|(id, _)| id)
    }

    pub fn section(&self, key: &SectionId) -> Option<&ExpandableSection> {
        self.sections.iter().find(|section| &section.key == key)
    }

    fn collect_pages(document: &Document) -> Vec<(PageId, NodeId)> {
        let mut pages: Vec<(PageId, NodeId)> = Vec::new();
        for (node, element) in document.elements_with_class(PAGE_CLASS) {
            let Some(id) = &element.id else {
                tracing::warn!("Page {} has no id and cannot be routed to", node);
                continue;
            };
            let page = PageId::new(id.as_str());
            if pages.iter().any(|(existing, _)| existing == &page) {
                tracing::warn!("Duplicate page id '{}', keeping the first", page);
                continue;
            }
            pages.push((page, node));
        }
        pages
    }

    fn collect_route_links(&self, document: &Document, kind: RouteLinkKind) -> Vec<RouteLink> {
        document
            .elements()
            .filter(|(node, element)| match kind {
                RouteLinkKind::Nav => element.has_class(NAV_LINK_CLASS),
                RouteLinkKind::Cta => {
                    element.tag == "a"
                        && document.has_ancestor_with_class(*node, CTA_CONTAINER_CLASS)
                }
            })
            .filter_map(|(node, element)| {
                let Some(page) = element.attribute(PAGE_ATTRIBUTE) else {
                    tracing::warn!(
                        "Routing link {} has no {} attribute",
                        element.describe(),
                        PAGE_ATTRIBUTE
                    );
                    return None;
                };
                let page = PageId::new(page);
                if !self.has_page(&page) {
                    tracing::warn!(
                        "Routing link {} targets unknown page '{}'",
                        element.describe(),
                        page
                    );
                }
                Some(RouteLink { node, page, kind })
            })
            .collect()
    }

    fn collect_sections(document: &Document) -> Vec<ExpandableSection> {
        document
            .elements()
            .filter(|(_, element)| {
                element.has_class("section-title") && element.has_class("expandable")
            })
            .filter_map(|(title, element)| {
                let key = element.attribute(SECTION_ATTRIBUTE)?;
                let content = document.element_by_id(key);
                if content.is_none() {
                    tracing::warn!("Expandable section '{}' has no content block", key);
                }
                Some(ExpandableSection {
                    title,
                    key: SectionId::new(key),
                    content,
                })
            })
            .collect()
    }

    fn collect_contact_form(document: &Document) -> Result<Option<ContactFormLayout>, LayoutError> {
        let Some(form) = document.element_by_id(CONTACT_FORM_ID) else {
            return Ok(None);
        };
        let require = |id: &'static str| {
            document
                .element_by_id(id)
                .ok_or(LayoutError::IncompleteContactForm(id))
        };

        let banner = require(SUCCESS_BANNER_ID)?;
        let slot = |field: ContactField| -> Result<FieldSlot, LayoutError> {
            Ok(FieldSlot {
                field,
                input: require(field.input_id())?,
                error: require(field.error_id())?,
            })
        };
        let fields = [
            slot(ContactField::Name)?,
            slot(ContactField::Email)?,
            slot(ContactField::Message)?,
        ];

        let mut error_slots: Vec<NodeId> = document
            .elements_with_class("error-message")
            .map(|(node, _)| node)
            .collect();
        for field in &fields {
            if !error_slots.contains(&field.error) {
                error_slots.push(field.error);
            }
        }

        Ok(Some(ContactFormLayout {
            form,
            banner,
            fields,
            error_slots,
        }))
    }

    fn collect_anchors(document: &Document) -> Vec<AnchorLink> {
        document
            .elements()
            .filter(|(_, element)| element.tag == "a" && !element.has_attribute(PAGE_ATTRIBUTE))
            .filter_map(|(node, element)| {
                let href = element.attribute("href")?;
                if !href.starts_with('#') || href == "#" {
                    return None;
                }
                let target = document.element_by_id(&href[1..]);
                Some(AnchorLink {
                    node,
                    href: href.to_string(),
                    target,
                })
            })
            .collect()
    }

    fn collect_animated(document: &Document) -> Vec<NodeId> {
        document
            .elements()
            .filter(|(_, element)| ANIMATED_CLASSES.iter().any(|class| element.has_class(class)))
            .map(|(node, _)| node)
            .collect()
    }
}
