//! Shared fixtures for unit tests.

use crate::config::SiteSettings;
use crate::site::browser::HeadlessBrowser;
use crate::site::controllers::ViewController;
use crate::site::document::{Document, NodeId};

const PORTFOLIO_JSON: &str = include_str!("../../demos/portfolio.json");

/// The demo portfolio document
pub fn portfolio_document() -> Document {
    Document::from_json_str(PORTFOLIO_JSON).expect("demo document should parse")
}

/// Controller over the demo document, opened at `fragment`, not yet loaded
pub fn controller_at(fragment: &str) -> ViewController<HeadlessBrowser> {
    let settings = SiteSettings::default();
    let browser = HeadlessBrowser::new(fragment, settings.viewport_height);
    ViewController::new(portfolio_document(), settings, browser)
        .expect("demo document should wire up")
}

/// Controller over the demo document after the load event
pub fn loaded_controller() -> ViewController<HeadlessBrowser> {
    let mut controller = controller_at("");
    controller.load().expect("load should succeed");
    controller
}

pub fn node(document: &Document, id: &str) -> NodeId {
    document
        .element_by_id(id)
        .unwrap_or_else(|| panic!("demo document has no #{id}"))
}
