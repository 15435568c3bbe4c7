//! Optional user configuration (`~/.config/tid-enrich/config.toml`)
//!
//! Every key is optional; a missing file is the same as an empty one.
//!
//! ```toml
//! output_dir = "/home/me/Desktop"
//! new_column = "новый терминал"
//! highlight_color = "#FFF9C4"
//! sheet_name = "Лист партнера"
//! default_partner = "Partner"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use tid_enrich::ReconcileOptions;
use tid_enrich::enrich::columns::{ADDRESS_COLUMN, STATION_COLUMN, TERMINAL_COLUMN, find_column};

const APP_DIR: &str = "tid-enrich";
const CONFIG_FILE: &str = "config.toml";

/// Partner list columns that carry data and must never be overwritten
const RESERVED_COLUMNS: [&str; 3] = [STATION_COLUMN, TERMINAL_COLUMN, ADDRESS_COLUMN];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
    pub new_column: Option<String>,
    pub highlight_color: Option<String>,
    pub sheet_name: Option<String>,
    pub default_partner: Option<String>,
}

impl Config {
    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path (must exist) or the default location (may not)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Configured output directory, else Desktop, else home, else `.`
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::desktop_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Partner name to use when none was given on the command line
    pub fn default_partner(&self) -> &str {
        self.default_partner.as_deref().unwrap_or("")
    }

    /// Options for the core, with an optional column name override
    pub fn reconcile_options(&self, new_column: Option<&str>) -> Result<ReconcileOptions> {
        let mut options = ReconcileOptions::default();

        if let Some(column) = new_column.or(self.new_column.as_deref()) {
            let column = column.trim();
            if column.is_empty() {
                bail!("New column name must not be empty");
            }
            // the existing column would be cleared before filling
            if let Some(idx) = find_column(&RESERVED_COLUMNS, column) {
                bail!(
                    "New column name '{}' clashes with the partner list column '{}'",
                    column,
                    RESERVED_COLUMNS[idx]
                );
            }
            options.new_column = column.to_string();
        }

        if let Some(sheet) = &self.sheet_name {
            options.write.sheet_name = sheet.clone();
        }

        if let Some(color) = &self.highlight_color {
            options.write.highlight_color = parse_hex_color(color)
                .with_context(|| format!("Invalid highlight_color '{}'", color))?;
        }

        Ok(options)
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into 0xRRGGBB
pub fn parse_hex_color(s: &str) -> Result<u32> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 {
        bail!("expected 6 hex digits");
    }
    u32::from_str_radix(hex, 16).context("expected 6 hex digits")
}
