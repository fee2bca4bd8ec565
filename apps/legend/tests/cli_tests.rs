//! Integration tests for Legend CLI commands.
//!
//! Uses tempfile for testing file-based operations.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use legend::cli::{
    CliError, cmd_classify, cmd_colors, cmd_levels, cmd_lookup, cmd_rules, cmd_summarize,
    load_distribution, render_classify, render_colors, render_levels, render_lookup,
    render_rules, render_summary,
};
use legend::config::OutputConfig;
use legend_core::{LegendError, ProficiencyVariant};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Create a sample percentages text file.
fn create_scores_text(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("scores.txt");
    let content = "# turma A\n12\n24.9\n25\n\n60%\n75\n100\n130\n-4\n";
    std::fs::write(&path, content).unwrap();
    path
}

/// Create a sample percentages JSON file.
fn create_scores_json(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "[10, 45.5, 50, 99]").unwrap();
    path
}

fn text() -> OutputConfig {
    OutputConfig::text()
}

fn json() -> OutputConfig {
    OutputConfig::json()
}

// =============================================================================
// CLASSIFY COMMAND TESTS
// =============================================================================

#[test]
fn test_classify_prints() {
    assert!(cmd_classify(42.0, &text()).is_ok());
    assert!(cmd_classify(42.0, &json()).is_ok());
}

#[test]
fn test_classify_boundaries_in_text() {
    let cases = [
        (24.0, "Abaixo do Básico"),
        (25.0, "Básico"),
        (74.0, "Proficiente"),
        (75.0, "Avançado"),
    ];
    for (value, label) in cases {
        let output = render_classify(value, &text()).unwrap();
        assert!(output.contains(label), "{value}: {output}");
    }
}

#[test]
fn test_classify_decimals() {
    let output = render_classify(42.567, &OutputConfig::new(false, 1)).unwrap();
    assert!(output.starts_with("42.6% -> Básico"));
}

#[test]
fn test_classify_nan_json() {
    let output = render_classify(f64::NAN, &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["variant"], "legend-below-basic");
    assert!(value["input"].is_null());
}

// =============================================================================
// LOOKUP COMMAND TESTS
// =============================================================================

#[test]
fn test_lookup_standard() {
    let output = render_lookup(4, "standard", &text()).unwrap();
    assert!(output.contains("Avançado"));
    assert!(output.contains("legend-advanced"));
    assert!(cmd_lookup(4, "standard", &text()).is_ok());
}

#[test]
fn test_lookup_zero_requires_sentinel_scale() {
    let result = render_lookup(0, "standard", &text());
    assert!(matches!(
        result,
        Err(CliError::Legend(LegendError::UnknownLevel { id: 0, .. }))
    ));

    let output = render_lookup(0, "not-completed", &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["label"], "Não fizeram");
    assert_eq!(value["icon"], "user-x");

    let output = render_lookup(0, "in-progress", &text()).unwrap();
    assert!(output.contains("Em Andamento"));
}

#[test]
fn test_lookup_unknown_id() {
    for scale in ["standard", "not-completed", "in-progress"] {
        assert!(cmd_lookup(99, scale, &text()).is_err());
    }
}

#[test]
fn test_lookup_ids_beyond_u8_are_absent() {
    for scale in ["standard", "not-completed", "in-progress"] {
        for id in [256, 257, 300] {
            let result = render_lookup(id, scale, &json());
            assert!(
                matches!(
                    result,
                    Err(CliError::Legend(LegendError::UnknownLevel { id: found, .. })) if found == id
                ),
                "{scale}/{id}: {result:?}"
            );
        }
    }
}

#[test]
fn test_lookup_unknown_scale() {
    let result = cmd_lookup(1, "gold", &text());
    assert!(matches!(
        result,
        Err(CliError::Legend(LegendError::UnknownScale(_)))
    ));
}

// =============================================================================
// TABLE COMMAND TESTS
// =============================================================================

#[test]
fn test_levels_counts() {
    assert_eq!(render_levels("standard", &text()).unwrap().lines().count(), 4);
    assert_eq!(
        render_levels("in-progress", &text()).unwrap().lines().count(),
        5
    );

    let output = render_levels("not-completed", &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(5));
    assert_eq!(value[0]["variant"], "legend-not-completed");
    assert!(cmd_levels("standard", &text()).is_ok());
}

#[test]
fn test_rules_table() {
    let output = render_rules(&text()).unwrap();
    assert!(output.contains("0-24%"));
    assert!(output.contains("75-100%"));

    let value: serde_json::Value = serde_json::from_str(&render_rules(&json()).unwrap()).unwrap();
    assert_eq!(value[3]["max"], 100);
    assert_eq!(value[1]["min"], 25);
    assert!(cmd_rules(&json()).is_ok());
}

#[test]
fn test_colors_table() {
    let value: serde_json::Value =
        serde_json::from_str(&render_colors(&json()).unwrap()).unwrap();
    assert_eq!(value["legend-basic"], "#ff9f43");
    assert_eq!(value.as_object().map(|m| m.len()), Some(6));
    assert_eq!(render_colors(&text()).unwrap().lines().count(), 6);
    assert!(cmd_colors(&text()).is_ok());
}

// =============================================================================
// SUMMARIZE COMMAND TESTS
// =============================================================================

#[test]
fn test_summarize_text_format() {
    let temp = create_temp_dir();
    let path = create_scores_text(&temp);

    let distribution = load_distribution(&path, "text").unwrap();
    assert_eq!(distribution.total(), 8);
    assert_eq!(distribution.count(ProficiencyVariant::BelowBasic), 3);
    assert_eq!(distribution.count(ProficiencyVariant::Basic), 1);
    assert_eq!(distribution.count(ProficiencyVariant::Proficient), 1);
    assert_eq!(distribution.count(ProficiencyVariant::Advanced), 3);

    assert!(cmd_summarize(&path, "text", &text()).is_ok());
}

#[test]
fn test_summarize_json_format() {
    let temp = create_temp_dir();
    let path = create_scores_json(&temp);

    let distribution = load_distribution(&path, "json").unwrap();
    let output = render_summary(&distribution, &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["total"], 4);
    assert_eq!(value["levels"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["levels"][0]["count"], 1);
    assert_eq!(value["levels"][0]["share_percent"], 25);
    assert_eq!(value["mode"], "legend-below-basic");
}

#[test]
fn test_summarize_text_output_has_total() {
    let temp = create_temp_dir();
    let path = create_scores_json(&temp);

    let distribution = load_distribution(&path, "json").unwrap();
    let output = render_summary(&distribution, &text()).unwrap();
    assert!(output.lines().last().unwrap().starts_with("Total"));
    assert_eq!(output.lines().count(), 5);
}

#[test]
fn test_summarize_invalid_line() {
    let temp = create_temp_dir();
    let path = temp.path().join("bad.txt");
    std::fs::write(&path, "10\n20\nmuito bom\n").unwrap();

    let result = cmd_summarize(&path, "text", &text());
    assert!(matches!(
        result,
        Err(CliError::InvalidInput { line: 3, .. })
    ));
}

#[test]
fn test_summarize_invalid_json() {
    let temp = create_temp_dir();
    let path = temp.path().join("bad.json");
    std::fs::write(&path, "not valid json").unwrap();

    let result = cmd_summarize(&path, "json", &text());
    assert!(matches!(result, Err(CliError::Json(_))));
}

#[test]
fn test_summarize_unknown_format() {
    let temp = create_temp_dir();
    let path = create_scores_text(&temp);

    let result = cmd_summarize(&path, "xml", &text());
    assert!(matches!(result, Err(CliError::UnknownFormat(_))));
}

#[test]
fn test_summarize_missing_file() {
    let temp = create_temp_dir();
    let path = temp.path().join("missing.txt");

    let result = cmd_summarize(&path, "text", &text());
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_summarize_empty_file() {
    let temp = create_temp_dir();
    let path = temp.path().join("empty.txt");
    std::fs::write(&path, "\n# nothing yet\n").unwrap();

    let distribution = load_distribution(&path, "text").unwrap();
    assert!(distribution.is_empty());

    let output = render_summary(&distribution, &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value["mode"].is_null());
}
