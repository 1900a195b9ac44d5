//! Headless implementation of the [`Browser`] contract. Scrolling is applied
//! immediately regardless of behavior; every effect is recorded.

use super::{Browser, BrowserEffect, History, ScrollBehavior, Viewport};

#[derive(Debug, Clone)]
pub struct HeadlessBrowser {
    viewport: Viewport,
    history: History,
    effects: Vec<BrowserEffect>,
}

impl HeadlessBrowser {
    /// Open a page at `fragment` (with or without the leading `#`)
    pub fn new(fragment: &str, viewport_height: f64) -> Self {
        Self {
            viewport: Viewport {
                scroll_top: 0.0,
                height: viewport_height,
            },
            history: History::new(fragment.trim_start_matches('#')),
            effects: Vec::new(),
        }
    }

    pub fn effects(&self) -> &[BrowserEffect] {
        &self.effects
    }

    pub fn take_effects(&mut self) -> Vec<BrowserEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Messages of every alert shown so far
    pub fn notices(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                BrowserEffect::Alerted { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl Browser for HeadlessBrowser {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let top = top.max(0.0);
        self.viewport.scroll_top = top;
        self.effects.push(BrowserEffect::Scrolled { top, behavior });
    }

    fn location_fragment(&self) -> &str {
        self.history.current()
    }

    fn navigate_to_fragment(&mut self, fragment: &str) {
        let fragment = fragment.trim_start_matches('#');
        self.history.push(fragment);
        self.effects.push(BrowserEffect::FragmentChanged {
            fragment: fragment.to_string(),
        });
    }

    fn history_back(&mut self) -> bool {
        let Some(fragment) = self.history.back().map(str::to_string) else {
            return false;
        };
        self.effects.push(BrowserEffect::FragmentChanged { fragment });
        true
    }

    fn history_forward(&mut self) -> bool {
        let Some(fragment) = self.history.forward().map(str::to_string) else {
            return false;
        };
        self.effects.push(BrowserEffect::FragmentChanged { fragment });
        true
    }

    fn alert(&mut self, message: &str) {
        tracing::info!("Notice: {}", message);
        self.effects.push(BrowserEffect::Alerted {
            message: message.to_string(),
        });
    }
}
