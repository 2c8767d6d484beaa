use clap::ArgMatches;
use tracing::error;

use vigil_core::events;

pub mod helpers;

mod alerts;
mod dashboard;
mod detections;
mod logs;
mod search;
mod simulations;
mod tampering;
mod watch;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("dashboard", sub_matches)) => dashboard::handle_dashboard_command(sub_matches),
        Some(("alerts", sub_matches)) => alerts::handle_alerts_command(sub_matches),
        Some(("logs", sub_matches)) => logs::handle_logs_command(sub_matches),
        Some(("search", sub_matches)) => search::handle_search_command(sub_matches),
        Some(("detections", sub_matches)) => detections::handle_detections_command(sub_matches),
        Some(("simulations", sub_matches)) => {
            simulations::handle_simulations_command(sub_matches)
        }
        Some(("tampering", sub_matches)) => tampering::handle_tampering_command(sub_matches),
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
