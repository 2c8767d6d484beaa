use clap::ArgMatches;
use tracing::{error, info};

use vigil_core::events;
use vigil_core::siem::SimulationStatus;
use vigil_core::simulations::{SimulationRunner, SimulationTiming};

use super::helpers::{fetch_snapshot, print_json, source_for};
use crate::table;

pub fn handle_simulations_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(("run", run_matches)) = matches.subcommand() {
        return handle_run_command(run_matches);
    }

    let json_output = matches.get_flag("json");

    info!(event = "cli.simulations_started", json_output = json_output);

    let (_, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "simulations")?;

    if json_output {
        print_json(&snapshot.simulations)?;
    } else if snapshot.simulations.is_empty() {
        println!("No simulations available.");
    } else {
        table::print_simulations(&snapshot.simulations);
    }

    info!(
        event = "cli.simulations_completed",
        count = snapshot.simulations.len()
    );

    Ok(())
}

fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Simulation id is required")?;

    info!(event = "cli.simulation_run_started", simulation_id = id);

    let (_, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "simulations")?;
    let name = snapshot
        .simulations
        .iter()
        .find(|s| &s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| id.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async {
        let runner = SimulationRunner::new(snapshot.simulations, SimulationTiming::default());

        let mut rx = match runner.run(id) {
            Ok(rx) => rx,
            Err(e) => {
                eprintln!("Failed to run simulation: {}", e);
                error!(
                    event = "cli.simulation_run_failed",
                    simulation_id = id,
                    error = %e
                );
                events::log_app_error(&e);
                return Err(e.into());
            }
        };

        println!("{}: {}", name, *rx.borrow_and_update());
        while rx.changed().await.is_ok() {
            let status = *rx.borrow_and_update();
            println!("{}: {}", name, status);
            if status == SimulationStatus::Ready {
                break;
            }
        }

        info!(event = "cli.simulation_run_completed", simulation_id = id);
        Ok(())
    })
}
