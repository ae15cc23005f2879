//! `landmarks list`: accepted landmarks, optionally one discovery type.

use super::config::Settings;
use super::output::landmark_table;
use super::{load_catalog, print_rejections, DataArgs};
use anyhow::Result;
use landmarks_catalog::Landmark;

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Only landmarks with this discovery type (exact, case-sensitive)
    #[arg(short = 't', long = "type")]
    pub discovery_type: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, settings: &Settings) -> Result<()> {
    let catalog = load_catalog(&args.data, settings)?;

    let selected: Vec<&Landmark> = match &args.discovery_type {
        Some(kind) => catalog.by_type(kind),
        None => catalog.landmarks().iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else if selected.is_empty() {
        match &args.discovery_type {
            Some(kind) => println!("No landmarks of type '{}'", kind),
            None => println!("No landmarks in database"),
        }
    } else {
        println!("{}", landmark_table(selected.iter().copied()));
        println!("{} landmark(s)", selected.len());
    }

    print_rejections(&catalog);
    Ok(())
}
