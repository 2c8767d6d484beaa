use std::path::PathBuf;
use std::sync::Arc;

use clap::ArgMatches;
use tracing::{error, warn};

use vigil_core::config::VigilConfig;
use vigil_core::events;
use vigil_core::siem::SiemSnapshot;
use vigil_core::source::{SiemSource, source_from_config};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading or validation fails, but notifies
/// the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> VigilConfig {
    match VigilConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.vigil/config.toml and ./.vigil/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            VigilConfig::default()
        }
    }
}

/// Load configuration and apply the global `--data` override.
pub fn load_config(matches: &ArgMatches) -> VigilConfig {
    let mut config = load_config_with_warning();
    if let Some(path) = matches.get_one::<String>("data") {
        config.data.path = Some(PathBuf::from(path));
    }
    config
}

pub fn source_for(matches: &ArgMatches) -> (VigilConfig, Arc<dyn SiemSource>) {
    let config = load_config(matches);
    let source = source_from_config(&config);
    (config, source)
}

/// Fetch a snapshot, reporting failures on stderr and in the log.
pub fn fetch_snapshot(
    source: &dyn SiemSource,
    command: &str,
) -> Result<SiemSnapshot, Box<dyn std::error::Error>> {
    match source.fetch() {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            eprintln!("Failed to load {} data: {}", command, e);
            error!(
                event = "cli.snapshot_fetch_failed",
                command = command,
                source = source.name(),
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
