//! # Scroll Effects
//!
//! Smooth scrolling for in-page anchors and the one-way fade-in of animated
//! elements as they enter the viewport.

use anyhow::Result;

use super::{Handler, HandlerContext, ViewCommand};
use crate::site::document::NodeId;
use crate::site::events::BrowserEvent;

/// Click on a fragment anchor that is not a routing link
///
/// The default jump is always suppressed; when the fragment names no
/// element nothing else happens.
pub struct AnchorScrollHandler {
    target: Option<NodeId>,
}

impl AnchorScrollHandler {
    pub fn new(target: Option<NodeId>) -> Self {
        Self { target }
    }
}

impl Handler for AnchorScrollHandler {
    fn handle(&self, _context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        let mut commands = vec![ViewCommand::PreventDefault];
        if let Some(target) = self.target {
            commands.push(ViewCommand::ScrollIntoView { target });
        }
        Ok(commands)
    }

    fn name(&self) -> &'static str {
        "AnchorScroll"
    }
}

/// Intersection observer callback revealing elements
pub struct RevealHandler;

impl Handler for RevealHandler {
    fn is_relevant(&self, _context: &HandlerContext, event: &BrowserEvent) -> bool {
        matches!(event, BrowserEvent::Intersection { .. })
    }

    fn handle(&self, _context: &HandlerContext, event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        let BrowserEvent::Intersection { entries } = event else {
            return Ok(vec![ViewCommand::NoAction]);
        };
        Ok(entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .map(|entry| ViewCommand::RevealElement {
                target: entry.target,
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "Reveal"
    }
}
