//! Expandable resume sections.

use anyhow::Result;

use super::{Handler, HandlerContext, ViewCommand};
use crate::site::document::NodeId;
use crate::site::events::BrowserEvent;

/// Click on an expandable title toggles it and its content block
///
/// A title whose content block is missing still toggles itself.
pub struct SectionToggleHandler {
    title: NodeId,
    content: Option<NodeId>,
}

impl SectionToggleHandler {
    pub fn new(title: NodeId, content: Option<NodeId>) -> Self {
        Self { title, content }
    }
}

impl Handler for SectionToggleHandler {
    fn handle(&self, _context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        Ok(vec![ViewCommand::ToggleSection {
            title: self.title,
            content: self.content,
        }])
    }

    fn name(&self) -> &'static str {
        "SectionToggle"
    }
}
