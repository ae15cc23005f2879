//! Landmarks command-line interface
//!
//! Loads a landmark file (or the built-in sample), admits each record through
//! a catalog, and reports on whatever was accepted.

use anyhow::Result;
use clap::{Parser, Subcommand};
use landmarks_logging::LogConfig;
use std::process::ExitCode;
use tracing::debug;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "landmarks", version, about = "Validate, summarize, and export landmark catalogs")]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print catalog statistics
    Report(cli::report::ReportArgs),
    /// List accepted landmarks, optionally filtered by discovery type
    List(cli::list::ListArgs),
    /// Write records and statistics to a JSON file
    Export(cli::export::ExportArgs),
    /// Find landmarks within a radius of a point
    Nearby(cli::nearby::NearbyArgs),
    /// Time the load/validate/statistics pipeline
    Perf(cli::perf::PerfArgs),
    /// Show resolved paths and settings
    Config(cli::config::ConfigArgs),
}

impl Commands {
    fn wants_json(&self) -> bool {
        match self {
            Commands::Report(args) => args.json,
            Commands::List(args) => args.json,
            Commands::Nearby(args) => args.json,
            Commands::Config(args) => args.json,
            Commands::Export(_) | Commands::Perf(_) => false,
        }
    }
}

fn run_command(command: Commands) -> Result<()> {
    let settings = cli::config::load_settings()?;
    debug!(?settings, "settings loaded");

    match command {
        Commands::Report(args) => cli::report::run(args, &settings),
        Commands::List(args) => cli::list::run(args, &settings),
        Commands::Export(args) => cli::export::run(args, &settings),
        Commands::Nearby(args) => cli::nearby::run(args, &settings),
        Commands::Perf(args) => cli::perf::run(args, &settings),
        Commands::Config(args) => cli::config::run(args, &settings),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = landmarks_logging::init_logging(LogConfig {
        app_name: "landmarks",
        verbose: cli.verbose,
    }) {
        eprintln!("Warning: file logging disabled: {:#}", err);
    }

    let json_mode = cli.command.wants_json();
    match run_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}
