//! `landmarks export`: write records, statistics, and a timestamp to JSON.

use super::config::{default_export_path, Settings};
use super::{load_catalog, print_rejections, DataArgs};
use anyhow::{bail, Result};
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output file. Defaults to `export_path` in config.toml, then
    /// ~/.landmarks/exports/landmarks_export.json
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs, settings: &Settings) -> Result<()> {
    let mut catalog = load_catalog(&args.data, settings)?;
    let out = args
        .out
        .or_else(|| settings.export_path.clone())
        .unwrap_or_else(default_export_path);

    let exported = catalog.export_json(&out);
    if exported {
        println!("Data successfully exported to {}", out.display());
    }
    print_rejections(&catalog);

    if !exported {
        bail!("export to {} failed", out.display());
    }
    Ok(())
}
