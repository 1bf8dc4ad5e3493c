//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.permascope.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Survey settings.
    #[serde(default)]
    pub survey: SurveyConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Report file to write after every run; none means terminal only.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Survey settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Value an empty interactive answer takes (clamped to the scale).
    #[serde(default = "default_response_value")]
    pub default_value: u8,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            default_value: default_response_value(),
        }
    }
}

fn default_response_value() -> u8 {
    crate::catalog::DEFAULT_RESPONSE
}

/// Report rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the radar chart in report output.
    #[serde(default = "default_true")]
    pub include_chart: bool,

    /// Rim distance of the radar chart, in rows.
    #[serde(default = "default_chart_radius")]
    pub chart_radius: usize,

    /// Include the per-dimension captions.
    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_chart: true,
            chart_radius: default_chart_radius(),
            show_explanations: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_chart_radius() -> usize {
    10
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".permascope.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings. Only
    /// explicitly provided CLI values override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = Some(output.clone());
        }

        if args.verbose {
            self.general.verbose = true;
        }

        if args.no_chart {
            self.report.include_chart = false;
        }

        if let Some(radius) = args.chart_radius {
            self.report.chart_radius = radius;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
