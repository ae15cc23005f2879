//! `landmarks nearby`: radius search around a point.

use super::config::Settings;
use super::error::HelpfulError;
use super::output::nearby_table;
use super::{load_catalog, print_rejections, DataArgs};
use anyhow::Result;
use landmarks_catalog::record::{LATITUDE_RANGE, LONGITUDE_RANGE};
use std::ops::RangeInclusive;

#[derive(Debug, clap::Args)]
pub struct NearbyArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Center latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Center longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Search radius in kilometers (default: nearby_radius_km from config.toml)
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: NearbyArgs, settings: &Settings) -> Result<()> {
    check_range("latitude", args.lat, &LATITUDE_RANGE)?;
    check_range("longitude", args.lon, &LONGITUDE_RANGE)?;
    let radius = args.radius.unwrap_or(settings.nearby_radius_km);
    if !radius.is_finite() || radius < 0.0 {
        return Err(HelpfulError::new(format!("Invalid radius: {}", radius))
            .with_suggestion("TRY: Pass a non-negative distance in kilometers, e.g. --radius 5")
            .into());
    }

    let catalog = load_catalog(&args.data, settings)?;
    let found = catalog.nearby((args.lat, args.lon), radius);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else if found.is_empty() {
        println!(
            "No landmarks within {} km of ({}, {})",
            radius, args.lat, args.lon
        );
    } else {
        println!("{}", nearby_table(&found));
    }

    print_rejections(&catalog);
    Ok(())
}

fn check_range(name: &str, value: f64, range: &RangeInclusive<f64>) -> Result<(), HelpfulError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(HelpfulError::coordinate_out_of_range(
            name,
            value,
            *range.start(),
            *range.end(),
        ))
    }
}
