//! # Controllers
//!
//! The view controller owns the view model, the handler registry and the
//! browser, and runs the event loop.

pub mod view_controller;

pub use view_controller::{DispatchOutcome, ViewController};
