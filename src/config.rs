//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content root and only needs the keys it wants to override; everything
//! else comes from the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_title = "Laravel Shopper"
//!
//! [header]
//! badge_key = "Laravel Shopper version"  # Label of the featureVersion badge
//!
//! [layout]
//! sidebar_breakpoint = 1280  # Below this width (px) the sidebar is not rendered
//!
//! [ad]
//! script_url = "https://cdn.carbonads.com/carbon.js"
//! serve = ""                 # Empty disables the sidebar ad slot
//! placement = ""
//!
//! [processing]
//! max_processes = 4          # Max parallel render workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Suffix of every page `<title>`.
    pub site_title: String,
    /// Page header settings.
    pub header: HeaderConfig,
    /// Column layout settings.
    pub layout: LayoutConfig,
    /// Sidebar ad slot.
    pub ad: AdConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Laravel Shopper".to_string(),
            header: HeaderConfig::default(),
            layout: LayoutConfig::default(),
            ad: AdConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site_title must not be empty".into(),
            ));
        }
        if self.layout.sidebar_breakpoint == 0 {
            return Err(ConfigError::Validation(
                "layout.sidebar_breakpoint must be greater than 0".into(),
            ));
        }
        if self.ad.is_enabled() && self.ad.script_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ad.script_url is required when ad.serve is set".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Label shown in front of a page's `featureVersion`.
    pub badge_key: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            badge_key: "Laravel Shopper version".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Viewport width in px from which the secondary column exists.
    pub sidebar_breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_breakpoint: 1280,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdConfig {
    /// Ad provider script.
    pub script_url: String,
    /// Provider serve id. Empty disables the slot.
    pub serve: String,
    /// Provider placement name.
    pub placement: String,
}

impl Default for AdConfig {
    fn default() -> Self {
        Self {
            script_url: "https://cdn.carbonads.com/carbon.js".to_string(),
            serve: String::new(),
            placement: String::new(),
        }
    }
}

impl AdConfig {
    pub fn is_enabled(&self) -> bool {
        !self.serve.trim().is_empty()
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), "loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Shopper Docs Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Appended to every page <title>.
site_title = "Laravel Shopper"

# ---------------------------------------------------------------------------
# Page header
# ---------------------------------------------------------------------------
[header]
# Label shown in front of a page's `featureVersion` front matter value.
badge_key = "Laravel Shopper version"

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[layout]
# Viewport width (px) from which the sidebar column is rendered.
sidebar_breakpoint = 1280

# ---------------------------------------------------------------------------
# Sidebar ad slot
# ---------------------------------------------------------------------------
[ad]
script_url = "https://cdn.carbonads.com/carbon.js"
# Leave empty to render pages without an ad slot.
serve = ""
placement = ""

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties and the sidebar media query from config.
pub fn generate_layout_css(layout: &LayoutConfig) -> String {
    format!(
        r#":root {{
    --sh-sidebar-breakpoint: {bp}px;
}}

@media (max-width: {below}px) {{
    .sh-layout-secondary {{
        display: none;
    }}
}}"#,
        bp = layout.sidebar_breakpoint,
        below = layout.sidebar_breakpoint.saturating_sub(1),
    )
}
