//! Configuration type definitions for Vigil.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [refresh]
//! default_interval_secs = 30
//! enabled = true
//! interval_choices = [10, 30, 60, 300]
//!
//! [data]
//! path = "/var/lib/vigil/snapshot.json"
//!
//! [display]
//! recent_alerts_limit = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.vigil/config.toml`
/// 2. Project config: `./.vigil/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VigilConfig {
    /// Auto-refresh behavior
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Where dashboard data comes from
    #[serde(default)]
    pub data: DataConfig,

    /// Rendering options
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Auto-refresh configuration.
///
/// Every field is optional so that a project config can override a single
/// value without resetting the others. Use the accessor methods for the
/// effective value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RefreshConfig {
    /// Seconds between automatic refreshes.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_interval_secs: Option<u64>,

    /// Whether auto-refresh starts enabled.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Intervals offered by interactive front ends.
    /// Default: 10, 30, 60, 300.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_choices: Option<Vec<u64>>,
}

/// Data source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DataConfig {
    /// JSON snapshot file. When unset the built-in demo data is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Number of alerts in the dashboard's "recent alerts" panel.
    /// Default: 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_alerts_limit: Option<usize>,
}
