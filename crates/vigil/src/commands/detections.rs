use clap::ArgMatches;
use tracing::info;

use super::helpers::{fetch_snapshot, print_json, source_for};
use crate::table;

pub fn handle_detections_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.detections_started", json_output = json_output);

    let (_, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "detections")?;

    if json_output {
        print_json(&snapshot.detections)?;
    } else if snapshot.detections.is_empty() {
        println!("No detection rules.");
    } else {
        table::print_detections(&snapshot.detections);
        for detection in &snapshot.detections {
            println!();
            println!(
                "{} [{} {}]",
                detection.name, detection.mitre_attack_id, detection.mitre_attack_name
            );
            println!("  Why it matters: {}", detection.why_it_matters);
        }
    }

    info!(
        event = "cli.detections_completed",
        count = snapshot.detections.len()
    );

    Ok(())
}
