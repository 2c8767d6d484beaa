use chrono::Utc;
use clap::ArgMatches;
use tracing::info;

use vigil_core::search::{LogFilter, TimeRange, count_by_source, filter_logs, unique_services};
use vigil_core::siem::LogSource;

use super::helpers::{fetch_snapshot, print_json, source_for};
use crate::table;

pub fn handle_logs_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let source_filter = match matches.get_one::<String>("source") {
        Some(s) => Some(LogSource::parse(s).ok_or_else(|| format!("Unknown log source '{s}'"))?),
        None => None,
    };
    let range = match matches.get_one::<String>("range") {
        Some(r) => TimeRange::parse(r).ok_or_else(|| format!("Unknown time range '{r}'"))?,
        None => TimeRange::default(),
    };
    let filter = LogFilter {
        source: source_filter,
        service: matches.get_one::<String>("service").cloned(),
        query: matches.get_one::<String>("search").cloned(),
        range,
    };

    info!(
        event = "cli.logs_started",
        source = ?filter.source,
        service = ?filter.service,
        range = ?filter.range,
        json_output = json_output
    );

    let (_, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "logs")?;

    // Snapshots are recorded datasets, so time windows end at the newest log.
    let now = snapshot.latest_log_time().unwrap_or_else(Utc::now);
    let logs = filter_logs(&snapshot.logs, &filter, now);

    if json_output {
        print_json(&logs)?;
    } else {
        let counts = count_by_source(&snapshot.logs);
        let tabs: Vec<String> = LogSource::ALL
            .iter()
            .map(|s| format!("{} ({})", s, counts.get(*s)))
            .collect();
        println!("Sources: {}", tabs.join("  "));
        println!("Services: {}", unique_services(&snapshot.logs).join(", "));
        println!();

        if logs.is_empty() {
            println!("No logs match.");
        } else {
            table::print_logs(&logs);
        }
    }

    info!(event = "cli.logs_completed", count = logs.len());

    Ok(())
}
