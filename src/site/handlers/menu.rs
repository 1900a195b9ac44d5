//! Hamburger menu toggle.

use anyhow::Result;

use super::{Handler, HandlerContext, ViewCommand};
use crate::site::events::BrowserEvent;

/// Click on the hamburger control opens or closes the menu panel
pub struct MenuToggleHandler;

impl Handler for MenuToggleHandler {
    fn handle(&self, _context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        Ok(vec![ViewCommand::ToggleMenu])
    }

    fn name(&self) -> &'static str {
        "MenuToggle"
    }
}
