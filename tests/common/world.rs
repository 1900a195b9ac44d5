use anyhow::Result;
use cucumber::World;
use std::sync::{Arc, Mutex};

use folio::config::SiteSettings;
use folio::{
    ContactField, DispatchOutcome, Document, HeadlessBrowser, NodeId, SiteEvent, ViewController,
    ViewEvent,
};

const PORTFOLIO_JSON: &str = include_str!("../../demos/portfolio.json");

/// Page session under test, recreated for every scenario
#[derive(World)]
#[world(init = Self::new)]
pub struct SiteWorld {
    /// Initial URL fragment used when the page opens
    pub fragment: String,

    /// Real controller over the demo document
    pub controller: Option<ViewController<HeadlessBrowser>>,

    /// Every view event published during the scenario
    pub view_events: Arc<Mutex<Vec<ViewEvent>>>,

    /// Outcome of the last dispatched click or submit
    pub last_outcome: Option<DispatchOutcome>,

    /// Last error raised by a step
    pub last_error: Option<String>,
}

impl std::fmt::Debug for SiteWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteWorld")
            .field("fragment", &self.fragment)
            .field("controller", &self.controller.is_some())
            .field("last_outcome", &self.last_outcome)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl SiteWorld {
    pub fn new() -> Self {
        Self {
            fragment: String::new(),
            controller: None,
            view_events: Arc::new(Mutex::new(Vec::new())),
            last_outcome: None,
            last_error: None,
        }
    }

    /// Open the demo page at `fragment` without loading it
    pub fn open(&mut self, fragment: &str) -> Result<()> {
        let document = Document::from_json_str(PORTFOLIO_JSON)?;
        let settings = SiteSettings::default();
        let browser = HeadlessBrowser::new(fragment, settings.viewport_height);
        let mut controller = ViewController::new(document, settings, browser)?;

        let events = self.view_events.clone();
        controller.subscribe(Box::new(move |event| {
            if let Ok(mut events) = events.lock() {
                events.push(event.clone());
            }
        }));

        self.fragment = fragment.to_string();
        self.controller = Some(controller);
        Ok(())
    }

    pub fn controller(&self) -> &ViewController<HeadlessBrowser> {
        self.controller
            .as_ref()
            .expect("the site should be opened first")
    }

    pub fn controller_mut(&mut self) -> &mut ViewController<HeadlessBrowser> {
        self.controller
            .as_mut()
            .expect("the site should be opened first")
    }

    pub fn node(&self, id: &str) -> NodeId {
        self.controller()
            .view_model()
            .document()
            .element_by_id(id)
            .unwrap_or_else(|| panic!("demo page has no element #{id}"))
    }

    /// Feed a user action, remembering any error
    pub fn act(&mut self, event: SiteEvent) {
        if let Err(e) = self.controller_mut().handle_site_event(event) {
            self.last_error = Some(e.to_string());
        }
    }

    /// Dispatch a browser event directly so its outcome can be inspected
    pub fn dispatch(&mut self, event: folio::BrowserEvent) {
        match self.controller_mut().dispatch(event) {
            Ok(outcome) => self.last_outcome = Some(outcome),
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    pub fn recorded_events(&self) -> Vec<ViewEvent> {
        self.view_events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

pub fn parse_field(name: &str) -> ContactField {
    match name {
        "name" => ContactField::Name,
        "email" => ContactField::Email,
        "message" => ContactField::Message,
        other => panic!("unknown contact field '{other}'"),
    }
}
