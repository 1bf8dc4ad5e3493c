//! Report generation.
//!
//! Renders a scored assessment as Markdown, JSON, or a colored terminal
//! view. All rounding happens here: profiles carry unrounded doubles and
//! scores display with two decimals.

use crate::catalog::explanation_for;
use crate::config::ReportConfig;
use crate::models::{Dimension, Report, ReportMetadata};
use crate::report::chart;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write as _;

/// Presentation switches shared by the Markdown and terminal renderers.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Include the radar chart.
    pub include_chart: bool,
    /// Rim distance of the radar chart, in rows.
    pub chart_radius: usize,
    /// Include the per-dimension captions.
    pub show_explanations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_chart: true,
            chart_radius: 10,
            show_explanations: true,
        }
    }
}

impl From<&ReportConfig> for RenderOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            include_chart: config.include_chart,
            chart_radius: config.chart_radius,
            show_explanations: config.show_explanations,
        }
    }
}

/// Generate the complete Markdown report.
pub fn generate_markdown_report(report: &Report, options: RenderOptions) -> String {
    let mut output = String::new();

    output.push_str("# PERMA Well-being Profile\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_scores_section(report));

    if options.include_chart {
        output.push_str(&generate_chart_section(report, options.chart_radius));
    }

    output.push_str(&generate_overall_section(report));
    output.push_str(&generate_tip_section(report));

    if options.show_explanations {
        output.push_str(&generate_explanations_section());
    }

    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!(
        "- **Assessment Date:** {}\n",
        metadata.assessment_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Items Answered:** {}\n", metadata.items_answered));
    section.push_str(&format!(
        "- **Scale:** {} (strongly disagree) to {} (strongly agree)\n",
        metadata.scale_min, metadata.scale_max
    ));
    section.push_str(&format!("- **Tool Version:** `{}`\n", metadata.tool_version));
    section.push('\n');

    section
}

/// Generate the per-dimension scores table.
fn generate_scores_section(report: &Report) -> String {
    let mut section = String::new();

    section.push_str("## Dimension Scores\n\n");
    section.push_str("| | Dimension | Score |\n");
    section.push_str("|:---:|:---|:---:|\n");

    for dimension in Dimension::ALL {
        let mean = report.profile.mean_of(dimension);
        let marker = if dimension == report.lowest { " ▼" } else { "" };
        section.push_str(&format!(
            "| {} | {} | {:.2} / 7{} |\n",
            dimension.code(),
            dimension.name(),
            mean,
            marker
        ));
    }

    section.push_str("\n▼ lowest-scoring dimension\n\n");

    section
}

/// Generate the radar chart section.
fn generate_chart_section(report: &Report, radius: usize) -> String {
    let mut section = String::new();

    section.push_str("## Radar Chart\n\n");
    section.push_str("```text\n");
    section.push_str(&chart::render_radar(&report.profile, radius));
    section.push_str("```\n\n");

    section
}

/// Generate the overall score section.
fn generate_overall_section(report: &Report) -> String {
    let mut section = String::new();

    section.push_str("## Overall Score\n\n");
    section.push_str(&format!(
        "**{:.2} / 7** — the unweighted mean of the five dimension scores.\n\n",
        report.profile.overall
    ));

    section
}

/// Generate the tip section for the lowest-scoring dimension.
fn generate_tip_section(report: &Report) -> String {
    let mut section = String::new();

    section.push_str("## Tip\n\n");
    section.push_str(&format!(
        "Your lowest-scoring dimension is **{}**. Small goals there move the needle most.\n\n",
        report.lowest.name()
    ));
    section.push_str(&format!("> 💡 {}\n\n", report.tip));

    section
}

/// Generate the dimension explanations section.
fn generate_explanations_section() -> String {
    let mut section = String::new();

    section.push_str("## What the Dimensions Mean\n\n");
    for dimension in Dimension::ALL {
        section.push_str(&format!("- {}\n", explanation_for(dimension)));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str(
        "*Inspired by Seligman's PERMA model. For personal awareness, not clinical assessment.*\n",
    );

    footer
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Render the report for the terminal.
pub fn render_terminal(report: &Report, options: RenderOptions) -> String {
    let mut output = String::new();
    let divider = "=".repeat(46);

    writeln!(output, "{}", divider.bright_blue()).unwrap();
    writeln!(
        output,
        "   {}",
        format!("Permascope v{}", report.metadata.tool_version)
            .bright_white()
            .bold()
    )
    .unwrap();
    writeln!(output, "{}", divider.bright_blue()).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "{}", "YOUR PERMA PROFILE".bright_yellow().bold()).unwrap();
    writeln!(output).unwrap();

    for dimension in Dimension::ALL {
        let mean = report.profile.mean_of(dimension);
        let line = format!(
            "  {}  {:<17} {:>5.2} / 7",
            dimension.code(),
            dimension.name(),
            mean
        );
        if dimension == report.lowest {
            writeln!(output, "{}", format!("{} ◂ lowest", line).yellow()).unwrap();
        } else {
            writeln!(output, "{}", line).unwrap();
        }
    }
    writeln!(output).unwrap();

    if options.include_chart {
        writeln!(output, "{}", chart::render_radar(&report.profile, options.chart_radius)).unwrap();
    }

    writeln!(
        output,
        "{} {}",
        "Overall:".bold(),
        format!("{:.2} / 7", report.profile.overall).bright_green().bold()
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(output, "{} {}", "Tip:".bold(), report.tip.yellow()).unwrap();

    if options.show_explanations {
        writeln!(output).unwrap();
        for dimension in Dimension::ALL {
            writeln!(output, "{}", format!("  {}", explanation_for(dimension)).dimmed()).unwrap();
        }
    }

    output
}
