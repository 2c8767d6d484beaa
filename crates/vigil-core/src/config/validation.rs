//! Configuration validation logic.

use crate::config::types::VigilConfig;
use crate::errors::ConfigError;

/// Validate a VigilConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Refresh interval, if set, must be greater than 0
/// - Interval choices, if set, must be non-empty and all greater than 0
/// - Recent alerts limit, if set, must be greater than 0
pub fn validate_config(config: &VigilConfig) -> Result<(), ConfigError> {
    if config.refresh.default_interval_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "refresh.default_interval_secs must be greater than 0".to_string(),
        });
    }

    if let Some(ref choices) = config.refresh.interval_choices {
        if choices.is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "refresh.interval_choices must not be empty".to_string(),
            });
        }
        if choices.contains(&0) {
            return Err(ConfigError::InvalidConfiguration {
                message: "refresh.interval_choices must all be greater than 0".to_string(),
            });
        }
    }

    if config.display.recent_alerts_limit == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "display.recent_alerts_limit must be greater than 0".to_string(),
        });
    }

    Ok(())
}
