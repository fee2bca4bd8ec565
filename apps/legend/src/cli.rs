//! # CLI Module
//!
//! Command definitions and handlers for the `legend` binary.
//!
//! Each command has a `render_*` function that builds the output string and
//! a `cmd_*` wrapper that prints it. Tests drive the `render_*` side.

use crate::config::OutputConfig;
use clap::{ArgAction, Parser, Subcommand};
use legend_core::{
    Distribution, LegendError, PERFORMANCE_RULES, PerformanceRule, ProficiencyItem,
    ProficiencyScale, ProficiencyVariant, clamp_percentage, classify, format_percentage,
    require_by_id,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Legend(#[from] LegendError),

    #[error("invalid percentage on line {line}: {value:?}")]
    InvalidInput { line: usize, value: String },

    #[error("unknown input format: {0} (expected text or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, CliError>;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Classify learning performance into proficiency levels.
#[derive(Debug, Parser)]
#[command(name = "legend", version, about)]
pub struct Cli {
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decimals used when echoing percentages.
    #[arg(long, global = true, default_value_t = 0)]
    pub decimals: usize,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub fn output(&self) -> OutputConfig {
        OutputConfig::new(self.json, self.decimals)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify a percentage (clamped to 0-100).
    Classify {
        #[arg(allow_negative_numbers = true)]
        percentage: f64,
    },

    /// Look up a level by id.
    Lookup {
        id: u32,
        /// standard, not-completed or in-progress
        #[arg(long, default_value = "standard")]
        scale: String,
    },

    /// List the levels of a scale.
    Levels {
        /// standard, not-completed or in-progress
        #[arg(long, default_value = "standard")]
        scale: String,
    },

    /// List the percentage rules.
    Rules,

    /// List variant tokens and their colors.
    Colors,

    /// Tally a file of percentages per level.
    Summarize {
        file: PathBuf,
        /// text (one value per line) or json (array of numbers)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let out = cli.output();
    match &cli.command {
        Commands::Classify { percentage } => cmd_classify(*percentage, &out),
        Commands::Lookup { id, scale } => cmd_lookup(*id, scale, &out),
        Commands::Levels { scale } => cmd_levels(scale, &out),
        Commands::Rules => cmd_rules(&out),
        Commands::Colors => cmd_colors(&out),
        Commands::Summarize { file, format } => cmd_summarize(file, format, &out),
    }
}

// =============================================================================
// CLASSIFY
// =============================================================================

pub fn render_classify(percentage: f64, out: &OutputConfig) -> Result<String> {
    if percentage.is_nan() {
        warn!("percentage is NaN, classifying as 0");
    } else if !(0.0..=100.0).contains(&percentage) {
        warn!(percentage, "percentage outside 0-100, clamping");
    }

    let rule = classify(percentage);
    debug!(percentage, id = rule.id, variant = %rule.variant, "classified");

    if out.json {
        let value = json!({
            "input": percentage,
            "clamped": clamp_percentage(percentage),
            "id": rule.id,
            "label": rule.label,
            "variant": rule.variant,
            "range": rule.range_label(),
            "color": rule.variant.color(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(format!(
        "{} -> {} [{}] ({}, {})\n",
        format_percentage(percentage, out.decimals),
        rule.label,
        rule.variant,
        rule.range_label(),
        rule.variant.color()
    ))
}

pub fn cmd_classify(percentage: f64, out: &OutputConfig) -> Result<()> {
    print!("{}", with_newline(render_classify(percentage, out)?));
    Ok(())
}

// =============================================================================
// LOOKUP / LEVELS
// =============================================================================

pub fn render_lookup(id: u32, scale: &str, out: &OutputConfig) -> Result<String> {
    let scale: ProficiencyScale = scale.parse()?;
    let item = require_by_id(id, scale)?;
    debug!(id, %scale, label = item.label, "level found");

    if out.json {
        return Ok(serde_json::to_string_pretty(item)?);
    }
    Ok(item_line(item))
}

pub fn cmd_lookup(id: u32, scale: &str, out: &OutputConfig) -> Result<()> {
    print!("{}", with_newline(render_lookup(id, scale, out)?));
    Ok(())
}

pub fn render_levels(scale: &str, out: &OutputConfig) -> Result<String> {
    let scale: ProficiencyScale = scale.parse()?;
    let items = scale.items();

    if out.json {
        return Ok(serde_json::to_string_pretty(items)?);
    }
    Ok(items.iter().map(item_line).collect())
}

pub fn cmd_levels(scale: &str, out: &OutputConfig) -> Result<()> {
    print!("{}", with_newline(render_levels(scale, out)?));
    Ok(())
}

fn item_line(item: &ProficiencyItem) -> String {
    format!(
        "{:>2}  {:<18} {:<22} {:<7} {}\n",
        item.id,
        item.label,
        item.variant.as_token(),
        item.icon,
        item.description
    )
}

// =============================================================================
// RULES / COLORS
// =============================================================================

pub fn render_rules(out: &OutputConfig) -> Result<String> {
    if out.json {
        let rows: Vec<_> = PERFORMANCE_RULES.iter().map(rule_json).collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    Ok(PERFORMANCE_RULES
        .iter()
        .map(|rule| {
            format!(
                "{:>2}  {:<18} {:<8} {}\n",
                rule.id,
                rule.label,
                rule.range_label(),
                rule.variant
            )
        })
        .collect())
}

pub fn cmd_rules(out: &OutputConfig) -> Result<()> {
    print!("{}", with_newline(render_rules(out)?));
    Ok(())
}

fn rule_json(rule: &PerformanceRule) -> serde_json::Value {
    json!({
        "id": rule.id,
        "label": rule.label,
        "variant": rule.variant,
        "min": rule.min,
        "max": rule.max,
        "range": rule.range_label(),
    })
}

pub fn render_colors(out: &OutputConfig) -> Result<String> {
    if out.json {
        let map: serde_json::Map<String, serde_json::Value> = ProficiencyVariant::ALL
            .iter()
            .map(|v| (v.as_token().to_string(), json!(v.color())))
            .collect();
        return Ok(serde_json::to_string_pretty(&map)?);
    }
    Ok(ProficiencyVariant::ALL
        .iter()
        .map(|v| format!("{:<22} {}\n", v.as_token(), v.color()))
        .collect())
}

pub fn cmd_colors(out: &OutputConfig) -> Result<()> {
    print!("{}", with_newline(render_colors(out)?));
    Ok(())
}

// =============================================================================
// SUMMARIZE
// =============================================================================

/// Parse percentages from file content.
///
/// `text`: one number per line; blank lines and `#` comments are skipped.
/// `json`: an array of numbers.
pub fn parse_percentages(content: &str, format: &str) -> Result<Vec<f64>> {
    match format {
        "json" => Ok(serde_json::from_str::<Vec<f64>>(content)?),
        "text" => {
            let mut values = Vec::new();
            for (index, raw) in content.lines().enumerate() {
                let line = raw.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let value = line
                    .trim_end_matches('%')
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| CliError::InvalidInput {
                        line: index + 1,
                        value: line.to_string(),
                    })?;
                values.push(value);
            }
            Ok(values)
        }
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

/// Read a file of percentages and tally it.
pub fn load_distribution(path: &Path, format: &str) -> Result<Distribution> {
    let content = std::fs::read_to_string(path)?;
    let values = parse_percentages(&content, format)?;

    let nan = values.iter().filter(|v| v.is_nan()).count();
    if nan > 0 {
        warn!(nan, "NaN values classified as 0");
    }
    let out_of_range = count_out_of_range(&values);
    if out_of_range > 0 {
        warn!(out_of_range, "values outside 0-100 were clamped");
    }

    let distribution = Distribution::from_percentages(values);
    info!(
        path = %path.display(),
        total = distribution.total(),
        "tallied percentages"
    );
    Ok(distribution)
}

pub fn render_summary(distribution: &Distribution, out: &OutputConfig) -> Result<String> {
    if out.json {
        let value = json!({
            "total": distribution.total(),
            "mode": distribution.mode().map(|rule| rule.variant),
            "levels": distribution.entries(),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut output = String::new();
    for entry in distribution.entries() {
        output.push_str(&format!(
            "{:<18} {:<8} {:>6} {:>4}%\n",
            entry.label, entry.range, entry.count, entry.share_percent
        ));
    }
    output.push_str(&format!("{:<18} {:<8} {:>6}\n", "Total", "", distribution.total()));
    Ok(output)
}

pub fn cmd_summarize(path: &Path, format: &str, out: &OutputConfig) -> Result<()> {
    let distribution = load_distribution(path, format)?;
    print!("{}", with_newline(render_summary(&distribution, out)?));
    Ok(())
}

/// Values that clamping moves. NaN is not counted here.
pub fn count_out_of_range(values: &[f64]) -> usize {
    values
        .iter()
        .filter(|v| !v.is_nan() && !(0.0..=100.0).contains(*v))
        .count()
}

fn with_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_with_comments_and_percent_signs() {
        let values = parse_percentages("# scores\n10\n\n 55.5 \n80%\n", "text").unwrap();
        assert_eq!(values, vec![10.0, 55.5, 80.0]);
    }

    #[test]
    fn reports_bad_line_number() {
        let err = parse_percentages("10\nabc\n", "text").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { line: 2, .. }));
    }

    #[test]
    fn parses_json_array() {
        let values = parse_percentages("[1, 2.5, 100]", "json").unwrap();
        assert_eq!(values, vec![1.0, 2.5, 100.0]);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(matches!(
            parse_percentages("1", "csv"),
            Err(CliError::UnknownFormat(_))
        ));
    }

    #[test]
    fn classify_text_line() {
        let text = render_classify(49.0, &OutputConfig::text()).unwrap();
        assert_eq!(text, "49% -> Básico [legend-basic] (25-49%, #ff9f43)\n");
    }

    #[test]
    fn classify_json_reports_clamp() {
        let text = render_classify(150.0, &OutputConfig::json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["clamped"], json!(100.0));
        assert_eq!(value["variant"], "legend-advanced");
        assert_eq!(value["id"], 4);
    }

    #[test]
    fn lookup_unknown_scale_fails() {
        let err = render_lookup(1, "everything", &OutputConfig::text()).unwrap_err();
        assert!(matches!(err, CliError::Legend(LegendError::UnknownScale(_))));
    }

    #[test]
    fn cli_parses_negative_percentage() {
        let cli = Cli::try_parse_from(["legend", "--json", "classify", "-10"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Classify { percentage } if percentage < 0.0));
    }

    #[test]
    fn nan_is_not_counted_as_clamped() {
        let values = parse_percentages("NaN\n-5\n50\n120\n", "text").unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(count_out_of_range(&values), 2);
    }

    #[test]
    fn cli_accepts_wide_lookup_ids() {
        let cli = Cli::try_parse_from(["legend", "--json", "lookup", "300"]).unwrap();
        assert!(matches!(cli.command, Commands::Lookup { id: 300, .. }));
        assert!(matches!(
            run(&cli),
            Err(CliError::Legend(LegendError::UnknownLevel { id: 300, .. }))
        ));
    }

    #[test]
    fn cli_parses_lookup_scale() {
        let cli = Cli::try_parse_from(["legend", "lookup", "0", "--scale", "in-progress"]).unwrap();
        match cli.command {
            Commands::Lookup { id, scale } => {
                assert_eq!(id, 0);
                assert_eq!(scale, "in-progress");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
