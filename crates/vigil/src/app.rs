use clap::{Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

fn search_arg() -> Arg {
    Arg::new("search")
        .long("search")
        .short('s')
        .help("Case-insensitive text to match")
}

pub fn build_cli() -> Command {
    Command::new("vigil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal security dashboard for SIEM alerts and logs")
        .long_about("Vigil renders a SIEM snapshot as a security dashboard: posture, alert counters, recent alerts, a log viewer, detection rules, attack simulations and time-tampering indicators. Data comes from a JSON snapshot file or the built-in demo dataset.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .help("Path to a JSON snapshot file (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("dashboard")
                .about("Show posture, alert counters, timeline and recent alerts")
                .arg(json_flag())
        )
        .subcommand(
            Command::new("alerts")
                .about("List alerts")
                .arg(
                    Arg::new("severity")
                        .long("severity")
                        .help("Only show alerts of this severity")
                        .value_parser(["critical", "alert", "warning", "info"])
                )
                .arg(search_arg())
                .arg(json_flag())
        )
        .subcommand(
            Command::new("logs")
                .about("Browse unified logs")
                .arg(
                    Arg::new("source")
                        .long("source")
                        .help("Only show logs from this source")
                        .value_parser(["syslog", "auth", "suricata"])
                )
                .arg(
                    Arg::new("service")
                        .long("service")
                        .help("Only show logs from this service")
                )
                .arg(search_arg())
                .arg(
                    Arg::new("range")
                        .long("range")
                        .short('r')
                        .help("Time window, measured back from the newest log")
                        .value_parser(["1h", "24h", "7d", "all"])
                        .default_value("all")
                )
                .arg(json_flag())
        )
        .subcommand(
            Command::new("search")
                .about("Search alerts and logs together")
                .arg(
                    Arg::new("query")
                        .help("Text to search for")
                        .required(true)
                        .index(1)
                )
                .arg(json_flag())
        )
        .subcommand(
            Command::new("detections")
                .about("Show detection rules and their MITRE ATT&CK mapping")
                .arg(json_flag())
        )
        .subcommand(
            Command::new("simulations")
                .about("List attack simulations")
                .arg(json_flag())
                .subcommand(
                    Command::new("run")
                        .about("Run a simulation and follow its status")
                        .arg(
                            Arg::new("id")
                                .help("Simulation id (e.g. sim-bruteforce)")
                                .required(true)
                                .index(1)
                        )
                )
        )
        .subcommand(
            Command::new("tampering")
                .about("Show log trust level and time-tampering indicators")
                .arg(json_flag())
        )
        .subcommand(
            Command::new("watch")
                .about("Re-render the dashboard on an auto-refresh cadence")
                .long_about(
                    "Re-renders the dashboard every refresh interval and shows a countdown to the next refresh.\n\n\
                    While watching, type a command and press Enter:\n\
                    - p: pause or resume auto-refresh\n\
                    - r: refresh now\n\
                    - <seconds>: change the refresh interval\n\
                    - q: quit (Ctrl-C also quits)"
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Refresh interval in seconds (overrides config)")
                        .value_parser(clap::value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("paused")
                        .long("paused")
                        .help("Start with auto-refresh paused")
                        .action(ArgAction::SetTrue)
                )
        )
}
