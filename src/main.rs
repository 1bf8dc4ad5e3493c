//! Permascope - PERMA Well-being Self-Assessment
//!
//! A CLI tool that administers a 23-item PERMA questionnaire, scores the
//! five well-being dimensions, renders a radar chart, and surfaces one
//! improvement tip for the lowest-scoring dimension.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad answers file, config failure, etc.)
//!   2 - Overall score below --fail-under threshold

mod catalog;
mod cli;
mod config;
mod models;
mod report;
mod scoring;
mod survey;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use models::{Report, ReportMetadata};
use report::RenderOptions;
use std::io;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        match handle_init_config() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("\n❌ Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Initialize logging
    init_logging(&args);

    if args.no_color {
        colored::control::set_override(false);
    }

    info!("Permascope v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the assessment
    match run_assessment(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Assessment failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .permascope.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".permascope.toml");

    if path.exists() {
        eprintln!("⚠️  .permascope.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .permascope.toml")?;

    println!("✅ Created .permascope.toml with default settings.");
    println!("   Edit it to customize report output and survey defaults.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete assessment pipeline. Returns exit code (0 or 2).
fn run_assessment(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Handle --list-items: print the catalog and exit
    if args.list_items {
        return handle_list_items();
    }

    // Step 1: Collect responses
    let responses = collect_responses(&args, &config)?;
    info!("Collected {} responses", responses.len());

    // Step 2: Aggregate into a profile
    let profile = scoring::build_profile(&responses);
    let lowest = profile.lowest_dimension();
    debug!("Overall score: {:.4}", profile.overall);

    // Step 3: Build the report
    let report = Report {
        metadata: ReportMetadata {
            assessment_date: Utc::now(),
            items_answered: responses.len(),
            scale_min: catalog::SCALE_MIN,
            scale_max: catalog::SCALE_MAX,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        profile,
        lowest,
        tip: catalog::tip_for(lowest).to_string(),
    };

    // Step 4: Present
    let options = RenderOptions::from(&config.report);
    println!("{}", report::render_terminal(&report, options));

    if let Some(ref output_path) = config.general.output {
        let content = match args.format {
            OutputFormat::Json => report::generate_json_report(&report)?,
            OutputFormat::Markdown => report::generate_markdown_report(&report, options),
        };

        std::fs::write(output_path, &content)
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

        println!("✅ Report saved to: {}", output_path.display());
    }

    // Check --fail-under threshold
    if let Some(threshold) = args.fail_under {
        if report.profile.overall < threshold {
            eprintln!(
                "\n⛔ Overall score {:.2} is below {:.2}. Failing (exit code 2).",
                report.profile.overall, threshold
            );
            return Ok(2);
        }
    }

    Ok(0)
}

/// Handle --list-items: print the catalog without scoring.
fn handle_list_items() -> Result<i32> {
    println!("🌱 Item catalog ({} items):\n", catalog::ITEMS.len());

    for (index, entry) in catalog::ITEMS.iter().enumerate() {
        println!("  {:2}. [{}] {}", index + 1, entry.dimension.code(), entry.prompt);
    }

    println!();
    for dimension in models::Dimension::ALL {
        println!("  {}", catalog::explanation_for(dimension));
    }

    Ok(0)
}

/// Collect one response per item from the configured source.
fn collect_responses(args: &Args, config: &Config) -> Result<Vec<models::Response>> {
    if let Some(ref answers_path) = args.answers {
        println!("📄 Reading answers from: {}", answers_path.display());
        return survey::read_answers_file(answers_path);
    }

    if args.defaults {
        println!(
            "📝 Answering every item with the default ({}).",
            config.survey.default_value
        );
        return Ok(survey::default_responses(config.survey.default_value));
    }

    println!("🌱 PERMA Well-being Assessment ({} items)\n", catalog::ITEMS.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    survey::run_interactive(&mut input, &mut output, config.survey.default_value)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .permascope.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
