//! Configuration constants and utilities for folio
//!
//! Defaults for the view controller plus loading of per-profile overrides
//! from an INI file (`~/.folio/profile` unless overridden by environment).
//!
//! ```ini
//! [default]
//! home_page = home
//! reset_delay_ms = 3000
//! reveal_threshold = 0.1
//! reveal_bottom_margin_px = 50
//! viewport_height = 800
//! ```

use crate::site::browser::ObserverOptions;
use crate::site::events::PageId;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for folio
pub const DEFAULT_PROFILE_PATH: &str = "~/.folio/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "FOLIO_PROFILE_PATH";

/// Environment variable holding the log level (trace, debug, info, warn, error)
pub const LOG_LEVEL_ENV_VAR: &str = "FOLIO_LOG_LEVEL";

/// Page shown when the URL fragment names no known page
pub const DEFAULT_HOME_PAGE: &str = "home";

/// Delay before a submitted contact form is restored
pub const FORM_RESET_DELAY: Duration = Duration::from_millis(3000);

pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

/// Reveal styling applied to animated elements
pub const REVEAL_HIDDEN_OPACITY: &str = "0";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEAL_SHOWN_OPACITY: &str = "1";
pub const REVEAL_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const DOWNLOAD_NOTICE: &str = "Resume download would start here. In a production environment, this would trigger a PDF download.";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    let path = std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string());
    shellexpand::tilde(&path).into_owned()
}

/// Tunables of the view controller
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub home_page: PageId,
    pub reset_delay: Duration,
    pub observer: ObserverOptions,
    pub viewport_height: f64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            home_page: PageId::new(DEFAULT_HOME_PAGE),
            reset_delay: FORM_RESET_DELAY,
            observer: ObserverOptions::default(),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl SiteSettings {
    /// Load settings from section `profile` of the INI file at `path`
    ///
    /// A missing file or section yields the defaults; malformed values are errors.
    pub fn load(path: impl AsRef<Path>, profile: &str) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;
        let mut settings = Self::default();

        let Some(section) = ini.section(Some(profile)) else {
            tracing::debug!("Profile '{}' not found, using defaults", profile);
            return Ok(settings);
        };

        if let Some(home) = section.get("home_page") {
            settings.home_page = PageId::new(home.trim());
        }
        if let Some(delay) = section.get("reset_delay_ms") {
            let millis: u64 = delay
                .trim()
                .parse()
                .with_context(|| format!("Invalid reset_delay_ms '{delay}'"))?;
            settings.reset_delay = Duration::from_millis(millis);
        }
        if let Some(threshold) = section.get("reveal_threshold") {
            let threshold: f64 = threshold
                .trim()
                .parse()
                .with_context(|| format!("Invalid reveal_threshold '{threshold}'"))?;
            if !(0.0..=1.0).contains(&threshold) {
                anyhow::bail!("reveal_threshold must be between 0 and 1, got {threshold}");
            }
            settings.observer.threshold = threshold;
        }
        if let Some(margin) = section.get("reveal_bottom_margin_px") {
            settings.observer.bottom_margin = margin
                .trim()
                .parse()
                .with_context(|| format!("Invalid reveal_bottom_margin_px '{margin}'"))?;
        }
        if let Some(height) = section.get("viewport_height") {
            settings.viewport_height = height
                .trim()
                .parse()
                .with_context(|| format!("Invalid viewport_height '{height}'"))?;
        }

        tracing::debug!("Loaded profile '{}': {:?}", profile, settings);
        Ok(settings)
    }
}
