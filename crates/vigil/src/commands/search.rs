use clap::ArgMatches;
use tracing::info;

use vigil_core::search;

use super::helpers::{fetch_snapshot, print_json, source_for};
use crate::table;

pub fn handle_search_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let query = matches
        .get_one::<String>("query")
        .ok_or("Query argument is required")?;

    info!(event = "cli.search_started", query = query);

    let (_, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "search")?;
    let results = search::search(&snapshot, query);

    if json_output {
        print_json(&results)?;
    } else if results.is_empty() {
        println!("No results for '{}'.", query);
    } else {
        println!("{} results for '{}'", results.total(), query);
        if !results.alerts.is_empty() {
            println!();
            println!("Alerts ({}):", results.alerts.len());
            table::print_alerts(&results.alerts);
        }
        if !results.logs.is_empty() {
            println!();
            println!("Logs ({}):", results.logs.len());
            table::print_logs(&results.logs);
        }
    }

    info!(event = "cli.search_completed", total = results.total());

    Ok(())
}
