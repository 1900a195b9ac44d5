//! Point-in-time capture of everything a visitor could observe on the page.

use serde::Serialize;

use crate::site::browser::Browser;
use crate::site::controllers::ViewController;
use crate::site::events::{PageId, SectionId};
use crate::site::handlers::ContactField;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionState {
    pub section: SectionId,
    pub collapsed: bool,
    /// `None` when the section has no content block
    pub content_collapsed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrorState {
    pub field: ContactField,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSnapshot {
    /// URL fragment without the leading `#`
    pub fragment: String,
    pub scroll_top: f64,
    pub active_page: Option<PageId>,
    pub highlighted_links: Vec<PageId>,
    pub menu_open: bool,
    pub sections: Vec<SectionState>,
    pub form_visible: bool,
    pub banner_visible: bool,
    pub field_errors: Vec<FieldErrorState>,
    pub revealed: Vec<String>,
    pub notices: Vec<String>,
}

impl SiteSnapshot {
    pub fn capture<B: Browser>(controller: &ViewController<B>) -> Self {
        let vm = controller.view_model();
        let browser = controller.browser();

        let sections = vm
            .layout()
            .sections
            .iter()
            .map(|section| SectionState {
                section: section.key.clone(),
                collapsed: vm.is_section_collapsed(&section.key).unwrap_or(false),
                content_collapsed: vm.is_section_content_collapsed(&section.key),
            })
            .collect();

        let field_errors = ContactField::ALL
            .into_iter()
            .filter_map(|field| {
                vm.field_error(field).map(|message| FieldErrorState {
                    field,
                    message: message.to_string(),
                })
            })
            .collect();

        Self {
            fragment: browser.location_fragment().to_string(),
            scroll_top: browser.viewport().scroll_top,
            active_page: vm.active_page(),
            highlighted_links: vm.highlighted_links(),
            menu_open: vm.is_menu_open(),
            sections,
            form_visible: vm.is_form_visible(),
            banner_visible: vm.is_banner_visible(),
            field_errors,
            revealed: vm.revealed().map(|node| vm.document().describe(node)).collect(),
            notices: controller.notices().to_vec(),
        }
    }
}
