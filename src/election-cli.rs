//! A simple CLI tool for replaying elections.
//! Reads a JSON scenario, runs it through the library's election model,
//! and reports what happened.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{error, info};

use election_core::{
    error::Error,
    logging,
    model::scenario::{Scenario, ScenarioReport},
    Config,
};

const PROGRAM_NAME: &str = "election-cli";

const ABOUT_TEXT: &str = "Replay an election scenario and report the results.

EXIT CODES:
     0: Scenario replayed.
     1: Error.";

const SCENARIO_PATH: &str = "SCENARIO_PATH";

const SCENARIO_PATH_HELP: &str = "The path to a JSON scenario with `candidates`,\n\
`voters`, `ballots` and optionally `regions`";

const CONFIG: &str = "config";

const CONFIG_HELP: &str = "Path to a TOML election config (e.g. `min_voting_age = 18`)";

const LOG_CONFIG_PATH: &str = "log4rs.yaml";

/// Construct the CLI configuration.
fn cli() -> Command {
    // Make the build dirty when the toml changes.
    include_str!("../Cargo.toml");

    clap::command!(PROGRAM_NAME)
        .about(ABOUT_TEXT)
        .arg(
            Arg::new(SCENARIO_PATH)
                .help(SCENARIO_PATH_HELP)
                .action(ArgAction::Set)
                .required(true),
        )
        .arg(
            Arg::new(CONFIG)
                .long(CONFIG)
                .short('c')
                .help(CONFIG_HELP)
                .action(ArgAction::Set),
        )
}

/// Load the config and scenario, then replay it.
fn replay(scenario_path: &str, config_path: Option<&String>) -> Result<ScenarioReport, Error> {
    let config = match config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let scenario = Scenario::from_file(scenario_path)?;
    Ok(scenario.run(&config))
}

/// Print a report in human-readable form.
fn print_report(report: &ScenarioReport) {
    println!(
        "Registered {} voter{} ({} rejected).",
        report.registered,
        if report.registered != 1 { "s" } else { "" },
        report.rejected_voters.len()
    );
    println!(
        "Accepted {} ballot{}.",
        report.accepted_ballots,
        if report.accepted_ballots != 1 { "s" } else { "" }
    );
    for rejected in &report.rejected_ballots {
        println!(
            "Rejected ballot from {} for {}: {}",
            rejected.ballot.voter_id, rejected.ballot.candidate_id, rejected.reason
        );
    }
    println!("Results:");
    for entry in &report.results {
        println!("  {entry}");
    }
    match &report.winner {
        Some(winner) => println!("Winner: {} ({})", winner.name, winner.party),
        None => println!("No winner: no votes cast."),
    }
    if let Some(total) = report.region_votes {
        println!("Regional vote total: {total}");
    }
}

/// Run the replay, report the result, and return the exit code.
fn run(args: &ArgMatches) -> u8 {
    let path: &String = args.get_one(SCENARIO_PATH).unwrap(); // Required argument is guaranteed to be present.
    let config_path: Option<&String> = args.get_one(CONFIG);
    match replay(path, config_path) {
        Ok(report) => {
            print_report(&report);
            0
        }
        Err(Error::Io(err)) => {
            println!("IO error: {}", err);
            1
        }
        Err(Error::Json(err)) => {
            println!("Invalid JSON: {}", err);
            1
        }
        Err(Error::Config(err)) => {
            println!("Invalid config: {}", err);
            1
        }
    }
}

fn main() {
    // Set up logging.
    if let Err(err) = logging::init(LOG_CONFIG_PATH) {
        eprintln!("Failed to initialise logging: {err}");
    }

    let args = cli().get_matches();
    let exit_code = run(&args);
    if exit_code == 0 {
        info!("Replay complete");
    } else {
        error!("Replay failed");
    }
    std::process::exit(exit_code.into())
}
