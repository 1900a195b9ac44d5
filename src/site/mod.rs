//! # Site Architecture
//!
//! Behaviour of the portfolio page, layered like a classic MVVM client.
//! Handlers decide, the view model mutates the document, the controller
//! drives the loop and talks to the browser.

pub mod browser;
pub mod controllers;
pub mod document;
pub mod events;
pub mod handlers;
pub mod layout;
pub mod view_models;
pub mod views;

#[cfg(test)]
pub mod testing;

// Re-export core types
pub use browser::{Browser, BrowserEffect, HeadlessBrowser, ScrollBehavior, Viewport};
pub use controllers::{DispatchOutcome, ViewController};
pub use document::{Document, Element, NodeId};
pub use events::*;
pub use layout::{LayoutError, SiteLayout};
pub use view_models::SiteViewModel;
pub use views::*;

// Re-export specific items from handlers to avoid conflicts
pub use handlers::{ContactField, Handler, HandlerContext, HandlerRegistry, ViewCommand};
