//! Step definitions for Cucumber tests
//!
//! Steps are organized by behaviour:
//! - `page` - Opening, loading and user actions
//! - `navigation` - Routing, menu and history
//! - `sections` - Expandable resume sections
//! - `contact_form` - Validation, success banner and reset
//! - `scrolling` - Anchors, viewport and reveal effects

pub mod contact_form;
pub mod navigation;
pub mod page;
pub mod scrolling;
pub mod sections;
