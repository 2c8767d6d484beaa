use clap::ArgMatches;
use tracing::info;

use vigil_core::dashboard::{DashboardView, build_dashboard};
use vigil_core::siem::SeverityLevel;

use super::helpers::{fetch_snapshot, print_json, source_for};
use crate::table;

pub fn handle_dashboard_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.dashboard_started", json_output = json_output);

    let (config, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "dashboard")?;
    let view = build_dashboard(&snapshot, config.display.recent_alerts_limit());

    if json_output {
        print_json(&view)?;
    } else {
        print_dashboard(&view);
    }

    info!(
        event = "cli.dashboard_completed",
        posture = view.posture.label(),
        total = view.counts.total
    );

    Ok(())
}

/// Print the full dashboard: posture, counters, chart, timeline, recent alerts.
pub fn print_dashboard(view: &DashboardView) {
    println!(
        "Security posture: {} ({})",
        view.posture.label(),
        view.posture.description()
    );
    println!();

    let counters: Vec<String> = SeverityLevel::ALL
        .iter()
        .map(|s| format!("{}: {}", s, view.counts.get(*s)))
        .collect();
    println!("{}   Total: {}", counters.join("   "), view.counts.total);
    println!();

    println!("Alerts over time:");
    println!("{}", table::render_chart(&view.chart));
    println!();

    if !view.timeline.is_empty() {
        println!("Attack timeline:");
        for event in &view.timeline {
            println!(
                "  {}  {:<8}  {}",
                event.timestamp.format("%H:%M:%S"),
                event.severity.as_str(),
                event.label
            );
        }
        println!();
    }

    if view.recent_alerts.is_empty() {
        println!("No recent alerts.");
    } else {
        println!("Recent alerts:");
        table::print_alerts(&view.recent_alerts);
    }
}
