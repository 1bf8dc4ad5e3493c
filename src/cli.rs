//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Permascope - PERMA well-being self-assessment for the terminal
///
/// Answer 23 short statements on a 1-7 agreement scale and get your
/// five-dimension PERMA profile: per-dimension scores, a radar chart,
/// an overall score, and one tip for the lowest-scoring dimension.
///
/// Examples:
///   permascope
///   permascope --answers sunday.txt --output profile.md
///   permascope --defaults --format json --output profile.json
///   permascope --list-items
///   permascope --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Answers file to score instead of prompting interactively
    ///
    /// Either a JSON array of 23 integers or plain text with
    /// whitespace/comma-separated integers. Values outside 1-7 are clamped.
    #[arg(short, long, value_name = "FILE", env = "PERMASCOPE_ANSWERS")]
    pub answers: Option<PathBuf>,

    /// Answer every item with the default value instead of prompting
    #[arg(long, conflicts_with = "answers")]
    pub defaults: bool,

    /// Print the item catalog and exit without scoring
    #[arg(long)]
    pub list_items: bool,

    /// Report file to write (format set by --format)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Skip the radar chart
    #[arg(long)]
    pub no_chart: bool,

    /// Radar chart rim distance in rows
    #[arg(long, value_name = "ROWS")]
    pub chart_radius: Option<usize>,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,

    /// Fail when the overall score is below this threshold
    ///
    /// Useful for scripted check-ins. Exit code 2 when the overall score
    /// lands below the threshold. Values: 1.0 - 7.0
    #[arg(long, value_name = "SCORE")]
    pub fail_under: Option<f64>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .permascope.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .permascope.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate threshold range
        if let Some(threshold) = self.fail_under {
            if !(1.0..=7.0).contains(&threshold) {
                return Err("Fail-under threshold must be between 1.0 and 7.0".to_string());
            }
        }

        // Validate chart radius
        if let Some(radius) = self.chart_radius {
            if !(3..=24).contains(&radius) {
                return Err("Chart radius must be between 3 and 24 rows".to_string());
            }
        }

        // Validate answers file if provided
        if let Some(ref answers_path) = self.answers {
            if !answers_path.exists() {
                return Err(format!(
                    "Answers file does not exist: {}",
                    answers_path.display()
                ));
            }
            if !answers_path.is_file() {
                return Err(format!(
                    "Answers path is not a file: {}",
                    answers_path.display()
                ));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            answers: None,
            defaults: false,
            list_items: false,
            output: None,
            format: OutputFormat::Markdown,
            no_chart: false,
            chart_radius: None,
            no_color: false,
            fail_under: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_accepts_defaults() {
        let args = make_args();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_fail_under_range() {
        let mut args = make_args();
        args.fail_under = Some(4.5);
        assert!(args.validate().is_ok());

        args.fail_under = Some(0.5);
        assert!(args.validate().is_err());

        args.fail_under = Some(7.5);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_chart_radius_range() {
        let mut args = make_args();
        args.chart_radius = Some(8);
        assert!(args.validate().is_ok());

        args.chart_radius = Some(2);
        assert!(args.validate().is_err());

        args.chart_radius = Some(40);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_answers_file() {
        let mut args = make_args();
        args.answers = Some(PathBuf::from("/nonexistent/answers.txt"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_skipped_for_init_config() {
        let mut args = make_args();
        args.init_config = true;
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
