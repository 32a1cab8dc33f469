//! Command line and config file
//!
//! Settings come from an optional TOML file; command line flags override
//! the file, and every field has a default so neither is required.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use volcano_logging::LogConfig;
use volcano_lookup::LookupConfig;

use crate::theme::Theme;

/// Command-line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "volcano-atlas")]
#[command(about = "Explore the world's volcanoes: tables, map and charts")]
pub struct CliArgs {
    /// Spreadsheet with the volcano dataset [default: "Volcanoes Dataset.xlsx"]
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Banner image shown under the title [default: volcanoes.jpg]
    #[arg(short, long)]
    pub banner: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial theme (dark or light)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Default log level, overridden by RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write JSONL logs into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Disable encyclopedia lookups and basemap tiles
    #[arg(long)]
    pub offline: bool,
}

/// Full dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub lookup: LookupConfig,
    pub map: MapConfig,
    pub logging: LogConfig,
    pub ui: UiConfig,
}

/// Input files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
    pub banner: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Volcanoes Dataset.xlsx"),
            banner: PathBuf::from("volcanoes.jpg"),
        }
    }
}

/// Map drawing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Basemap tile URL with `{z}`, `{x}` and `{y}`; empty disables tiles
    pub tile_url: String,
    /// Point radius in meters, replacing the built-in scaled radius
    pub point_radius_meters: Option<f64>,
    pub width: f64,
    pub height: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            point_radius_meters: None,
            width: 900.0,
            height: 500.0,
        }
    }
}

impl MapConfig {
    pub fn tiles_enabled(&self) -> bool {
        !self.tile_url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
}

impl DashboardConfig {
    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Config file named on the command line (or defaults), then flag overrides
    pub fn resolve(args: &CliArgs) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args)?;
        Ok(config)
    }

    /// Let command line flags win over file values
    pub fn apply_args(&mut self, args: &CliArgs) -> anyhow::Result<()> {
        if let Some(path) = &args.data {
            self.data.path = path.clone();
        }
        if let Some(banner) = &args.banner {
            self.data.banner = banner.clone();
        }
        if let Some(theme) = &args.theme {
            self.ui.theme = theme
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid --theme")?;
        }
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
        if let Some(dir) = &args.log_dir {
            self.logging = std::mem::take(&mut self.logging).with_log_dir(dir);
        }
        if args.offline {
            self.lookup.offline = true;
        }
        if self.lookup.offline {
            self.map.tile_url.clear();
        }
        Ok(())
    }
}
