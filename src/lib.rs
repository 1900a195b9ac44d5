//! # Folio - Headless Portfolio Site Controller
//!
//! The client-side behaviour of a single-page portfolio site: mobile menu,
//! fragment routing, collapsible resume sections, contact form validation
//! and reveal-on-scroll, run against an in-memory document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  SiteEvent   ┌──────────────┐ BrowserEvent ┌──────────┐
//! │ EventSource │─────────────▶│  Controller  │─────────────▶│ Handlers │
//! │ - Script    │              │ - Dispatch   │◀─────────────│          │
//! └─────────────┘              │ - Timers     │  ViewCommand └──────────┘
//!                              │ - Observer   │
//!                              └──────────────┘
//!                                │         │
//!                        Browser │         │ apply
//!                                ▼         ▼
//!                     ┌──────────────┐  ┌──────────────┐  ViewEvent  ┌───────┐
//!                     │   Headless   │  │  ViewModel   │────────────▶│ Views │
//!                     │   Browser    │  │ - Document   │             │       │
//!                     └──────────────┘  └──────────────┘             └───────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod site;

// Re-export main types for easy access
pub use site::*;
