use std::io::Write;
use std::sync::Arc;

use clap::ArgMatches;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use vigil_core::dashboard::build_dashboard;
use vigil_core::polling::{PollingController, PollingSnapshot, RefreshOutcome};
use vigil_core::source::SourceError;

use super::dashboard::print_dashboard;
use super::helpers::source_for;

/// A line typed while watching.
#[derive(Debug, PartialEq, Eq)]
enum WatchInput {
    Toggle,
    Refresh,
    Interval(u64),
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Option<WatchInput> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.to_ascii_lowercase().as_str() {
        "p" | "pause" | "resume" => WatchInput::Toggle,
        "r" | "refresh" => WatchInput::Refresh,
        "q" | "quit" | "exit" => WatchInput::Quit,
        other => match other.trim_end_matches('s').parse::<u64>() {
            Ok(secs) => WatchInput::Interval(secs),
            Err(_) => WatchInput::Unknown(line.to_string()),
        },
    })
}

fn status_line(snapshot: &PollingSnapshot) -> String {
    let last = snapshot.last_refresh.format("%H:%M:%S");
    if snapshot.is_refreshing {
        format!("Refreshing... (last refresh {last})")
    } else if snapshot.enabled {
        format!(
            "Next refresh in {}s (every {}s, last refresh {last})",
            snapshot.countdown, snapshot.interval
        )
    } else {
        format!("Auto-refresh paused (every {}s, last refresh {last})", snapshot.interval)
    }
}

fn write_status(out: &mut impl Write, snapshot: &PollingSnapshot) -> std::io::Result<()> {
    write!(out, "\r{:<72}", status_line(snapshot))?;
    out.flush()
}

fn print_status(snapshot: &PollingSnapshot) {
    if let Err(e) = write_status(&mut std::io::stdout(), snapshot) {
        warn!(event = "cli.watch_status_write_failed", error = %e);
    }
}

pub fn handle_watch_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = source_for(matches);
    let interval = matches
        .get_one::<u64>("interval")
        .copied()
        .unwrap_or_else(|| config.refresh.default_interval_secs());
    let enabled = !matches.get_flag("paused") && config.refresh.enabled();
    let recent_limit = config.display.recent_alerts_limit();
    let choices = config.refresh.interval_choices();

    info!(
        event = "cli.watch_started",
        interval_secs = interval,
        enabled = enabled,
        source = source.name()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async move {
        let on_refresh = move || {
            let source = Arc::clone(&source);
            async move {
                let snapshot = match source.fetch() {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        eprintln!("\nRefresh failed: {}", e);
                        return Err::<(), SourceError>(e);
                    }
                };
                let view = build_dashboard(&snapshot, recent_limit);
                println!("\n");
                print_dashboard(&view);
                Ok(())
            }
        };

        let mut controller = PollingController::new(interval, enabled, on_refresh)?;
        let mut snapshots = controller.subscribe();

        println!(
            "Commands: p = pause/resume, r = refresh, <seconds> = interval ({}), q = quit",
            choices
                .iter()
                .map(|c| format!("{c}s"))
                .collect::<Vec<_>>()
                .join(", ")
        );

        controller.refresh().await;
        print_status(&controller.snapshot());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => break,
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    print_status(&snapshot);
                }
                line = lines.next_line(), if stdin_open => {
                    let line = match line {
                        Ok(Some(line)) => line,
                        Ok(None) => {
                            stdin_open = false;
                            continue;
                        }
                        Err(e) => {
                            warn!(event = "cli.watch_stdin_failed", error = %e);
                            stdin_open = false;
                            continue;
                        }
                    };

                    match parse_input(&line) {
                        None => {}
                        Some(WatchInput::Quit) => break,
                        Some(WatchInput::Toggle) => {
                            let enabled = controller.toggle();
                            println!(
                                "\nAuto-refresh {}",
                                if enabled { "resumed" } else { "paused" }
                            );
                        }
                        Some(WatchInput::Refresh) => {
                            let pending = controller.refresh();
                            tokio::spawn(async move {
                                if pending.await == RefreshOutcome::Skipped {
                                    println!("\nRefresh already in progress");
                                }
                            });
                        }
                        Some(WatchInput::Interval(secs)) => match controller.set_interval(secs) {
                            Ok(()) => println!("\nRefresh interval set to {}s", secs),
                            Err(e) => eprintln!("\n{}", e),
                        },
                        Some(WatchInput::Unknown(input)) => {
                            eprintln!("\nUnknown command '{}'", input);
                        }
                    }
                }
            }
        }

        println!();
        controller.shutdown().await;
        Ok::<(), Box<dyn std::error::Error>>(())
    });

    runtime.shutdown_background();

    match &result {
        Ok(()) => info!(event = "cli.watch_completed"),
        Err(e) => error!(event = "cli.watch_failed", error = %e),
    }

    result
}
