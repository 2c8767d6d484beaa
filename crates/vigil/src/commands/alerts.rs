use clap::ArgMatches;
use tracing::info;

use vigil_core::search::{AlertFilter, filter_alerts};
use vigil_core::siem::SeverityLevel;

use super::helpers::{fetch_snapshot, print_json, source_for};
use crate::table;

pub fn handle_alerts_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let severity = match matches.get_one::<String>("severity") {
        Some(s) => Some(SeverityLevel::parse(s).ok_or_else(|| format!("Unknown severity '{s}'"))?),
        None => None,
    };
    let filter = AlertFilter {
        severity,
        query: matches.get_one::<String>("search").cloned(),
    };

    info!(
        event = "cli.alerts_started",
        severity = ?filter.severity,
        query = ?filter.query,
        json_output = json_output
    );

    let (_, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "alerts")?;
    let mut alerts = filter_alerts(&snapshot.alerts, &filter);
    alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    if json_output {
        print_json(&alerts)?;
    } else if alerts.is_empty() {
        println!("No alerts match.");
    } else {
        println!("Alerts ({} of {}):", alerts.len(), snapshot.alerts.len());
        table::print_alerts(&alerts);
    }

    info!(event = "cli.alerts_completed", count = alerts.len());

    Ok(())
}
