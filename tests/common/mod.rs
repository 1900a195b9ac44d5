//! Common test utilities and infrastructure
//!
//! This module provides the cucumber world shared by all step definitions.

pub mod world;

#[allow(unused_imports)]
pub use world::SiteWorld;
