//! # Browser Abstraction Layer
//!
//! The capabilities the view controller consumes from its host browser,
//! behind a trait so the controller never touches a real window:
//!
//! - **Viewport**: scroll position and height, smooth or instant scrolling
//! - **Location**: the URL fragment used as the routing token
//! - **History**: fragment entries traversed by back/forward
//! - **Notices**: blocking informational alerts
//!
//! ```text
//! Binary/Tests:  ViewController ──▶ HeadlessBrowser ──▶ Vec<BrowserEffect>
//! ```
//!
//! The intersection observer and the scheduler live here too; both are
//! driven explicitly by the controller.

pub mod headless;
pub mod history;
pub mod intersection;
pub mod scheduler;

pub use headless::HeadlessBrowser;
pub use history::History;
pub use intersection::{IntersectionObserver, ObserverOptions};
pub use scheduler::Scheduler;

use serde::Serialize;

/// Visible slice of the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
}

/// How a scroll is animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Side effect performed by the browser, recorded for inspection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum BrowserEffect {
    Scrolled { top: f64, behavior: ScrollBehavior },
    FragmentChanged { fragment: String },
    Alerted { message: String },
}

/// Browser capability contract
pub trait Browser: Send {
    fn viewport(&self) -> Viewport;

    /// Scroll the viewport so its top edge sits at `top`
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Current URL fragment without the leading `#`
    fn location_fragment(&self) -> &str;

    /// Native fragment navigation: push a history entry and update the location
    fn navigate_to_fragment(&mut self, fragment: &str);

    /// Step back in history; returns false when already at the first entry
    fn history_back(&mut self) -> bool;

    /// Step forward in history; returns false when already at the last entry
    fn history_forward(&mut self) -> bool;

    /// Show a blocking informational notice
    fn alert(&mut self, message: &str);
}
