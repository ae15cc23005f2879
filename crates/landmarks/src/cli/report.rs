//! `landmarks report`: catalog statistics as text or JSON.

use super::config::Settings;
use super::{load_catalog, print_rejections, DataArgs};
use anyhow::Result;

#[derive(Debug, clap::Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output statistics as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ReportArgs, settings: &Settings) -> Result<()> {
    let catalog = load_catalog(&args.data, settings)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog.statistics())?);
    } else {
        println!("{}", catalog.report());
    }

    print_rejections(&catalog);
    Ok(())
}
