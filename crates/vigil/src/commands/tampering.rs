use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use vigil_core::siem::{TamperIndicator, TrustBand, trust_band};

use super::helpers::{fetch_snapshot, print_json, source_for};
use crate::table;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TamperingResponse<'a> {
    trust_level: u8,
    trust_band: TrustBand,
    indicators: &'a [TamperIndicator],
}

pub fn handle_tampering_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.tampering_started", json_output = json_output);

    let (_, source) = source_for(matches);
    let snapshot = fetch_snapshot(source.as_ref(), "tampering")?;
    let report = &snapshot.tampering;
    let band = trust_band(report.trust_level);

    if json_output {
        print_json(&TamperingResponse {
            trust_level: report.trust_level,
            trust_band: band,
            indicators: &report.indicators,
        })?;
    } else {
        println!("Log trust level: {}% ({:?})", report.trust_level, band);
        println!();
        if report.indicators.is_empty() {
            println!("No tampering indicators.");
        } else {
            table::print_tamper_indicators(&report.indicators);
        }
    }

    info!(
        event = "cli.tampering_completed",
        trust_level = report.trust_level,
        indicators = report.indicators.len()
    );

    Ok(())
}
