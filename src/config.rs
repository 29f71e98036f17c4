//! Pagination settings
//!
//! Defaults shared by every paginated query and link window: how many
//! records go on a page and how wide the link windows are. Settings can be
//! loaded from YAML or JSON, passed around explicitly, or installed as the
//! process-wide default.
//!
//! ```yaml
//! per_page: 25
//! inner_window: 3
//! outer_window: 1
//! ```

use crate::error::{Error, Result};
use crate::links::WindowOptions;
use crate::page::MAX_BIGINT;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::RwLock;
use tracing::debug;

/// Records per page when nothing else is configured
pub const DEFAULT_PER_PAGE: u64 = 30;

/// Links shown on each side of the current page
pub const DEFAULT_INNER_WINDOW: u32 = 4;

/// Links shown next to the first and last page
pub const DEFAULT_OUTER_WINDOW: u32 = 1;

// ============================================================================
// Settings
// ============================================================================

/// Pagination defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Records per page
    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// Links shown on each side of the current page
    #[serde(default = "default_inner_window")]
    pub inner_window: u32,

    /// Links shown next to the first and last page
    #[serde(default = "default_outer_window")]
    pub outer_window: u32,
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

fn default_inner_window() -> u32 {
    DEFAULT_INNER_WINDOW
}

fn default_outer_window() -> u32 {
    DEFAULT_OUTER_WINDOW
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            inner_window: DEFAULT_INNER_WINDOW,
            outer_window: DEFAULT_OUTER_WINDOW,
        }
    }
}

impl PaginationSettings {
    /// Set records per page
    #[must_use]
    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set both link windows
    #[must_use]
    pub fn with_windows(mut self, inner_window: u32, outer_window: u32) -> Self {
        self.inner_window = inner_window;
        self.outer_window = outer_window;
        self
    }

    /// Link window sizes as used by the link calculator
    pub fn window(&self) -> WindowOptions {
        WindowOptions::new(self.inner_window, self.outer_window)
    }

    /// Check the settings can produce valid pages
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::invalid_config("per_page", "must be at least 1"));
        }
        if self.per_page > MAX_BIGINT {
            return Err(Error::invalid_config(
                "per_page",
                format!("must not exceed {MAX_BIGINT}"),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load settings from a YAML or JSON file.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
pub fn load_settings(path: impl AsRef<Path>) -> Result<PaginationSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::from(e)
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!("Loading pagination settings from {}", path.display());
    if is_json {
        let settings: PaginationSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    } else {
        load_settings_from_str(&content)
    }
}

/// Load settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<PaginationSettings> {
    // An empty document means "all defaults"
    if yaml.trim().is_empty() {
        return Ok(PaginationSettings::default());
    }

    let settings: PaginationSettings = serde_yaml::from_str(yaml)?;
    settings.validate()?;
    Ok(settings)
}

// ============================================================================
// Process-wide defaults
// ============================================================================

static GLOBAL_SETTINGS: Lazy<RwLock<PaginationSettings>> =
    Lazy::new(|| RwLock::new(PaginationSettings::default()));

/// Current process-wide settings.
///
/// Before anything is installed this returns [`PaginationSettings::default`],
/// so reading it never depends on initialization order.
pub fn global_settings() -> PaginationSettings {
    match GLOBAL_SETTINGS.read() {
        Ok(settings) => settings.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the process-wide settings
pub fn set_global_settings(settings: PaginationSettings) -> Result<()> {
    settings.validate()?;
    debug!(
        per_page = settings.per_page,
        inner_window = settings.inner_window,
        outer_window = settings.outer_window,
        "Replacing global pagination settings"
    );
    let mut guard = match GLOBAL_SETTINGS.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = settings;
    Ok(())
}

/// Restore the process-wide settings to their defaults
pub fn reset_global_settings() {
    let mut guard = match GLOBAL_SETTINGS.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = PaginationSettings::default();
}

/// Per-type page size.
///
/// Record types implement this to page with their own size; the default
/// follows the process-wide settings.
///
/// ```
/// use paging_core::config::DefaultPerPage;
///
/// struct Comment;
///
/// impl DefaultPerPage for Comment {
///     fn per_page() -> u64 {
///         50
///     }
/// }
///
/// assert_eq!(Comment::per_page(), 50);
/// ```
pub trait DefaultPerPage {
    /// Records per page for this type
    fn per_page() -> u64 {
        global_settings().per_page
    }
}
