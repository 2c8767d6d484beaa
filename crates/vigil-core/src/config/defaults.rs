//! Default values for configuration fields.

use crate::config::types::{DisplayConfig, RefreshConfig};

/// Seconds between automatic refreshes when nothing is configured.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Intervals offered by the refresh control.
pub const DEFAULT_INTERVAL_CHOICES: [u64; 4] = [10, 30, 60, 300];

pub const DEFAULT_RECENT_ALERTS_LIMIT: usize = 5;

impl RefreshConfig {
    pub fn default_interval_secs(&self) -> u64 {
        self.default_interval_secs
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
    }

    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn interval_choices(&self) -> Vec<u64> {
        self.interval_choices
            .clone()
            .unwrap_or_else(|| DEFAULT_INTERVAL_CHOICES.to_vec())
    }
}

impl DisplayConfig {
    pub fn recent_alerts_limit(&self) -> usize {
        self.recent_alerts_limit
            .unwrap_or(DEFAULT_RECENT_ALERTS_LIMIT)
    }
}
