//! Configuration paths and settings for landmarks
//!
//! Simple path resolution with sensible defaults.
//! All paths are under ~/.landmarks/ (or LANDMARKS_HOME).

use anyhow::{Context, Result};
use landmarks_cache::DEFAULT_TTL_SECS;
use landmarks_catalog::geo::DEFAULT_RADIUS_KM;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use landmarks_logging::{landmarks_home, logs_dir};

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// cache_ttl_secs = 3600
/// nearby_radius_km = 10.0
/// default_data = "/data/landmarks.json"
/// export_path = "/tmp/landmarks_export.json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub cache_ttl_secs: u64,
    pub nearby_radius_km: f64,
    pub default_data: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_TTL_SECS as u64,
            nearby_radius_km: DEFAULT_RADIUS_KM,
            default_data: None,
            export_path: None,
        }
    }
}

/// Get config file path: ~/.landmarks/config.toml
pub fn config_path() -> PathBuf {
    landmarks_home().join("config.toml")
}

/// Get default export path: ~/.landmarks/exports/landmarks_export.json
pub fn default_export_path() -> PathBuf {
    landmarks_home().join("exports").join("landmarks_export.json")
}

/// Load settings from the default config path.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(&config_path())
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Arguments for the config command
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the config command - shows current paths and settings
pub fn run(args: ConfigArgs, settings: &Settings) -> Result<()> {
    let home = landmarks_home();
    let config = config_path();
    let logs = logs_dir();
    let export = settings
        .export_path
        .clone()
        .unwrap_or_else(default_export_path);

    if args.json {
        let value = serde_json::json!({
            "home": home.to_string_lossy(),
            "config_file": {
                "path": config.to_string_lossy(),
                "exists": config.exists(),
            },
            "logs": logs.to_string_lossy(),
            "export_path": export.to_string_lossy(),
            "settings": settings,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Landmarks Configuration");
    println!("=======================");
    println!();
    println!("Home:        {}", home.display());
    println!(
        "Config:      {} {}",
        config.display(),
        if config.exists() { "(found)" } else { "(not found, using defaults)" }
    );
    println!("Logs:        {}", logs.display());
    println!("Export path: {}", export.display());
    println!();
    println!("Cache TTL:     {}s", settings.cache_ttl_secs);
    println!("Nearby radius: {} km", settings.nearby_radius_km);
    match &settings.default_data {
        Some(path) => println!("Default data:  {}", path.display()),
        None => println!("Default data:  built-in sample"),
    }

    Ok(())
}
