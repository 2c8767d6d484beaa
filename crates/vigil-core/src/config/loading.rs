//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.vigil/config.toml` (global user preferences)
//! 3. **Project config** - `./.vigil/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{DataConfig, DisplayConfig, RefreshConfig, VigilConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<VigilConfig, ConfigError> {
    let user_path = dirs::home_dir().map(|home| home.join(".vigil").join("config.toml"));
    let project_path = std::env::current_dir()?.join(".vigil").join("config.toml");
    load_from_paths(user_path.as_deref(), &project_path)
}

/// Load and merge the user and project config files at explicit paths.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: &Path,
) -> Result<VigilConfig, ConfigError> {
    let mut config = VigilConfig::default();

    if let Some(path) = user_path
        && let Some(user_config) = load_config_file(path)?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` if it does not exist.
fn load_config_file(path: &Path) -> Result<Option<VigilConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config: VigilConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    tracing::debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: VigilConfig, override_config: VigilConfig) -> VigilConfig {
    VigilConfig {
        refresh: RefreshConfig {
            default_interval_secs: override_config
                .refresh
                .default_interval_secs
                .or(base.refresh.default_interval_secs),
            enabled: override_config.refresh.enabled.or(base.refresh.enabled),
            interval_choices: override_config
                .refresh
                .interval_choices
                .or(base.refresh.interval_choices),
        },
        data: DataConfig {
            path: override_config.data.path.or(base.data.path),
        },
        display: DisplayConfig {
            recent_alerts_limit: override_config
                .display
                .recent_alerts_limit
                .or(base.display.recent_alerts_limit),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_paths(
            Some(&dir.path().join("user.toml")),
            &dir.path().join("project.toml"),
        )
        .unwrap();

        assert_eq!(config, VigilConfig::default());
        assert_eq!(config.refresh.default_interval_secs(), 30);
    }

    #[test]
    fn test_project_overrides_user() {
        let dir = tempfile::tempdir().unwrap();
        let user = write(
            dir.path(),
            "user.toml",
            "[refresh]\ndefault_interval_secs = 60\nenabled = false\n\n[display]\nrecent_alerts_limit = 10\n",
        );
        let project = write(
            dir.path(),
            "project.toml",
            "[refresh]\ndefault_interval_secs = 10\n",
        );

        let config = load_from_paths(Some(&user), &project).unwrap();

        assert_eq!(config.refresh.default_interval_secs(), 10);
        // Not set in project config, so the user value survives
        assert!(!config.refresh.enabled());
        assert_eq!(config.display.recent_alerts_limit(), 10);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let project = write(dir.path(), "project.toml", "[refresh\nbroken");

        let err = load_from_paths(None, &project).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("project.toml"));
    }

    #[test]
    fn test_invalid_merged_config_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let project = write(
            dir.path(),
            "project.toml",
            "[refresh]\ndefault_interval_secs = 0\n",
        );

        let err = load_from_paths(None, &project).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_merge_data_path() {
        let base = VigilConfig {
            data: DataConfig {
                path: Some(PathBuf::from("/base.json")),
            },
            ..Default::default()
        };
        let merged = merge_configs(base.clone(), VigilConfig::default());
        assert_eq!(merged.data.path, Some(PathBuf::from("/base.json")));

        let over = VigilConfig {
            data: DataConfig {
                path: Some(PathBuf::from("/over.json")),
            },
            ..Default::default()
        };
        let merged = merge_configs(base, over);
        assert_eq!(merged.data.path, Some(PathBuf::from("/over.json")));
    }
}
