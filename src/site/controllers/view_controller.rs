//! # View Controller
//!
//! The controller is the single context object of a page session. It is
//! constructed once against a document, wires behaviour through the
//! [`HandlerRegistry`], and turns site events into browser event dispatches.
//!
//! Dispatch is synchronous and non-reentrant: handlers only see a read-only
//! context and return commands, which the controller applies after they ran.
//! Intersection records, due timers and the `popstate` following a native
//! fragment navigation are delivered as separate dispatches once the current
//! one has completed.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::SiteSettings;
use crate::site::browser::{Browser, IntersectionObserver, ScrollBehavior, Scheduler};
use crate::site::document::{Document, NodeId};
use crate::site::events::{
    BrowserEvent, EventBus, EventKind, EventSource, SimpleEventBus, SiteEvent, TimerId, TimerTask,
    ViewEvent, ViewEventHandler,
};
use crate::site::handlers::{HandlerContext, HandlerRegistry, ViewCommand};
use crate::site::layout::SiteLayout;
use crate::site::view_models::SiteViewModel;

/// Result of dispatching one browser event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    pub handlers_run: usize,
}

pub struct ViewController<B: Browser> {
    view_model: SiteViewModel,
    registry: HandlerRegistry,
    browser: B,
    settings: SiteSettings,
    scheduler: Scheduler<TimerTask>,
    observer: IntersectionObserver,
    event_bus: SimpleEventBus,
    pending_reset: Option<TimerId>,
    notices: Vec<String>,
}

impl<B: Browser> ViewController<B> {
    /// Wire the controller to a document
    ///
    /// Fails when the document lacks elements the site cannot work without.
    pub fn new(document: Document, settings: SiteSettings, browser: B) -> Result<Self> {
        let layout = SiteLayout::build(&document).context("Failed to wire site layout")?;
        let registry = HandlerRegistry::from_layout(&layout);

        let mut view_model = SiteViewModel::new(document, layout);
        view_model.hide_success_banner();
        view_model.prepare_reveal();

        let mut observer = IntersectionObserver::new(settings.observer);
        for node in &view_model.layout().animated {
            observer.observe(*node);
        }

        tracing::info!(
            "View controller ready: {} pages, {} handlers, {} animated elements",
            view_model.layout().pages.len(),
            registry.binding_count(),
            observer.observed_count()
        );

        Ok(Self {
            view_model,
            registry,
            browser,
            settings,
            scheduler: Scheduler::new(),
            observer,
            event_bus: SimpleEventBus::new(),
            pending_reset: None,
            notices: Vec::new(),
        })
    }

    /// Deliver the content-loaded event
    pub fn load(&mut self) -> Result<DispatchOutcome> {
        self.dispatch(BrowserEvent::ContentLoaded)
    }

    /// Run the main loop until the event source is drained
    ///
    /// Content-loaded is delivered first unless the source opens with a load
    /// of its own. With `realtime`, waits in the script also sleep for their
    /// duration.
    pub async fn run<S: EventSource>(&mut self, source: &mut S, realtime: bool) -> Result<()> {
        let mut first = true;
        while source.poll(Duration::from_millis(100))? {
            let event = source.read()?;
            tracing::debug!("Received site event: {:?}", event);

            if std::mem::take(&mut first) && !matches!(event, SiteEvent::Load) {
                tracing::debug!("Script does not open with load, delivering content loaded");
                self.load()?;
            }

            if let (true, SiteEvent::Wait { ms }) = (realtime, &event) {
                tokio::time::sleep(Duration::from_millis(*ms)).await;
            }
            self.handle_site_event(event)?;
        }
        if first {
            self.load()?;
        }
        tracing::debug!("Event source exhausted");
        Ok(())
    }

    /// Translate a user action into browser behaviour and dispatches
    pub fn handle_site_event(&mut self, event: SiteEvent) -> Result<()> {
        match event {
            SiteEvent::Load => {
                self.load()?;
            }
            SiteEvent::Click { element } => {
                let target = self.resolve_element(&element)?;
                self.dispatch(BrowserEvent::Click { target })?;
            }
            SiteEvent::Type { element, value } => {
                let target = self.resolve_element(&element)?;
                self.view_model.set_value(target, &value);
                self.dispatch(BrowserEvent::Input { target, value })?;
            }
            SiteEvent::Submit { element } => {
                let target = self.resolve_element(&element)?;
                self.dispatch(BrowserEvent::Submit { target })?;
            }
            SiteEvent::Back => {
                if self.browser.history_back() {
                    self.dispatch(BrowserEvent::PopState)?;
                } else {
                    tracing::debug!("Back ignored: at first history entry");
                }
            }
            SiteEvent::Forward => {
                if self.browser.history_forward() {
                    self.dispatch(BrowserEvent::PopState)?;
                } else {
                    tracing::debug!("Forward ignored: at last history entry");
                }
            }
            SiteEvent::ScrollTo { top } => {
                self.scroll_to(top, ScrollBehavior::Instant);
                self.publish_view_events();
                self.flush_intersections()?;
            }
            SiteEvent::Wait { ms } => {
                self.advance_time(Duration::from_millis(ms))?;
            }
        }
        Ok(())
    }

    /// Dispatch one browser event to its handlers and apply the outcome
    pub fn dispatch(&mut self, event: BrowserEvent) -> Result<DispatchOutcome> {
        let outcome = self.dispatch_to_handlers(&event)?;

        let navigated = !outcome.default_prevented && self.perform_default_action(&event);
        self.publish_view_events();

        if event.kind() != EventKind::Intersection {
            self.flush_intersections()?;
        }
        if navigated {
            self.dispatch(BrowserEvent::PopState)?;
        }
        Ok(outcome)
    }

    /// Move the virtual clock forward and fire due timers
    pub fn advance_time(&mut self, by: Duration) -> Result<()> {
        for (timer, task) in self.scheduler.advance(by) {
            if self.pending_reset == Some(timer) {
                self.pending_reset = None;
            }
            tracing::debug!("Timer {:?} fired: {:?}", timer, task);
            self.dispatch(BrowserEvent::TimerFired { timer, task })?;
        }
        Ok(())
    }

    fn dispatch_to_handlers(&mut self, event: &BrowserEvent) -> Result<DispatchOutcome> {
        let (commands, handlers_run) = {
            let context = HandlerContext {
                document: self.view_model.document(),
                layout: self.view_model.layout(),
                settings: &self.settings,
                location_fragment: self.browser.location_fragment(),
            };

            let mut commands = Vec::new();
            let mut handlers_run = 0;
            for handler in self.registry.handlers_for(event) {
                if !handler.is_relevant(&context, event) {
                    continue;
                }
                tracing::debug!("Dispatching {:?} to {}", event.kind(), handler.name());
                commands.extend(handler.handle(&context, event)?);
                handlers_run += 1;
            }
            (commands, handlers_run)
        };

        let mut outcome = DispatchOutcome {
            default_prevented: false,
            handlers_run,
        };
        for command in commands {
            if command == ViewCommand::PreventDefault {
                outcome.default_prevented = true;
            } else {
                self.apply_view_command(command)?;
            }
        }
        Ok(outcome)
    }

    fn apply_view_command(&mut self, command: ViewCommand) -> Result<()> {
        match command {
            ViewCommand::PreventDefault | ViewCommand::NoAction => {}
            ViewCommand::ToggleMenu => {
                self.view_model.toggle_menu();
            }
            ViewCommand::NavigateToPage { page } => {
                self.view_model.navigate_to_page(&page);
                self.scroll_to(0.0, ScrollBehavior::Smooth);
            }
            ViewCommand::ToggleSection { title, content } => {
                self.view_model.toggle_section(title, content);
            }
            ViewCommand::ShowNotice { message } => {
                self.browser.alert(&message);
                self.notices.push(message.clone());
                self.view_model.record(ViewEvent::NoticeShown { message });
            }
            ViewCommand::ClearFieldErrors => self.view_model.clear_field_errors(),
            ViewCommand::ShowFieldError { field, message } => {
                self.view_model.show_field_error(field, &message);
            }
            ViewCommand::ShowSubmissionSuccess => self.view_model.show_submission_success(),
            ViewCommand::ScheduleFormReset { delay } => {
                if let Some(previous) = self.pending_reset.take() {
                    if self.scheduler.cancel(previous) {
                        tracing::debug!("Cancelled pending form reset {:?}", previous);
                    }
                }
                let timer = self.scheduler.schedule(delay, TimerTask::ResetContactForm);
                self.pending_reset = Some(timer);
            }
            ViewCommand::ResetContactForm => self.view_model.reset_contact_form(),
            ViewCommand::ScrollIntoView { target } => self.scroll_into_view(target),
            ViewCommand::RevealElement { target } => {
                self.view_model.reveal(target);
                self.observer.unobserve(target);
            }
        }
        Ok(())
    }

    /// Native behaviour for events no handler prevented
    ///
    /// Returns true when the location fragment changed.
    fn perform_default_action(&mut self, event: &BrowserEvent) -> bool {
        let BrowserEvent::Click { target } = event else {
            return false;
        };
        let Some(href) = self
            .view_model
            .document()
            .get(*target)
            .filter(|element| element.tag == "a")
            .and_then(|element| element.attribute("href"))
            .filter(|href| href.starts_with('#'))
            .map(str::to_string)
        else {
            return false;
        };

        let fragment = &href[1..];
        tracing::debug!("Fragment navigation to '{}'", href);
        self.browser.navigate_to_fragment(fragment);

        let top = if fragment.is_empty() {
            Some(0.0)
        } else {
            self.view_model
                .document()
                .element_by_id(fragment)
                .and_then(|node| self.rendered_top(node))
        };
        if let Some(top) = top {
            self.scroll_to(top, ScrollBehavior::Instant);
        }
        true
    }

    fn scroll_into_view(&mut self, target: NodeId) {
        match self.rendered_top(target) {
            Some(top) => self.scroll_to(top, ScrollBehavior::Smooth),
            None => tracing::debug!(
                "{} has no layout box, nothing to scroll to",
                self.view_model.document().describe(target)
            ),
        }
    }

    fn rendered_top(&self, node: NodeId) -> Option<f64> {
        let document = self.view_model.document();
        if !document.is_rendered(node) {
            return None;
        }
        document.get(node)?.layout.map(|layout| layout.top)
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        self.browser.scroll_to(top, behavior);
        let top = self.browser.viewport().scroll_top;
        self.view_model.record(ViewEvent::Scrolled { top });
    }

    fn flush_intersections(&mut self) -> Result<()> {
        loop {
            let entries = self
                .observer
                .take_records(self.view_model.document(), self.browser.viewport());
            if entries.is_empty() {
                return Ok(());
            }
            self.dispatch(BrowserEvent::Intersection { entries })?;
        }
    }

    fn publish_view_events(&mut self) {
        for event in self.view_model.collect_pending_view_events() {
            tracing::debug!("View event: {:?}", event);
            self.event_bus.publish_view_event(event);
        }
    }

    fn resolve_element(&self, id: &str) -> Result<NodeId> {
        let id = id.trim_start_matches('#');
        self.view_model
            .document()
            .element_by_id(id)
            .with_context(|| format!("No element with id '{id}'"))
    }

    /// Register an observer for view events
    pub fn subscribe(&mut self, handler: ViewEventHandler) {
        self.event_bus.subscribe_to_view_events(handler);
    }

    pub fn view_model(&self) -> &SiteViewModel {
        &self.view_model
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut B {
        &mut self.browser
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }

    /// Virtual time elapsed since construction
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    /// Timer of the form reset waiting to fire, if any
    pub fn pending_reset(&self) -> Option<TimerId> {
        self.pending_reset
    }

    /// Messages of every notice shown so far
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_count()
    }
}
