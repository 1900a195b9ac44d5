//! # Views Module
//!
//! Captures the observable page state and renders it for the command line.

pub mod renderer;
pub mod snapshot;

pub use renderer::{JsonRenderer, TextRenderer, ViewRenderer};
pub use snapshot::{FieldErrorState, SectionState, SiteSnapshot};
