//! # Performance Module
//!
//! Percentage-to-level classification.
//!
//! Four rules partition `0..=100`:
//!
//! | id | label            | range      |
//! |----|------------------|------------|
//! | 1  | Abaixo do Básico | [0, 25)    |
//! | 2  | Básico           | [25, 50)   |
//! | 3  | Proficiente      | [50, 75)   |
//! | 4  | Avançado         | [75, 100]  |
//!
//! Input is clamped before matching, so [`classify`] is total. Floats are
//! only compared and clamped here; no arithmetic is performed on them.

use crate::proficiency::{ProficiencyItem, ProficiencyScale, classify_by_id};
use crate::variant::ProficiencyVariant;
use serde::Serialize;

/// Upper edge of a rule's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UpperBound {
    /// `x < value`
    Exclusive(u8),
    /// `x <= value`
    Inclusive(u8),
}

/// A percentage classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceRule {
    /// Level id, shared with [`ProficiencyItem::id`].
    pub id: u8,
    /// Human-readable label (pt-BR).
    pub label: &'static str,
    /// Symbolic color tag.
    pub variant: ProficiencyVariant,
    /// Inclusive lower bound.
    pub min: u8,
    /// Highest whole percentage in the range, for legends.
    pub max: u8,
    /// Matching upper edge.
    pub upper: UpperBound,
}

impl PerformanceRule {
    /// Whether `percentage` falls in this rule's range.
    ///
    /// No clamping happens here: out-of-range values and `NaN` never match.
    #[must_use]
    pub fn matches(&self, percentage: f64) -> bool {
        if percentage < f64::from(self.min) {
            return false;
        }
        match self.upper {
            UpperBound::Exclusive(edge) => percentage < f64::from(edge),
            UpperBound::Inclusive(edge) => percentage <= f64::from(edge),
        }
    }

    /// Legend text such as `25-49%`.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!("{}-{}%", self.min, self.max)
    }

    /// The id-lookup row for the same level.
    #[must_use]
    pub fn proficiency(&self) -> Option<&'static ProficiencyItem> {
        classify_by_id(u32::from(self.id), ProficiencyScale::Standard)
    }
}

/// The four rules, ascending by `min`.
pub static PERFORMANCE_RULES: [PerformanceRule; 4] = [
    PerformanceRule {
        id: 1,
        label: "Abaixo do Básico",
        variant: ProficiencyVariant::BelowBasic,
        min: 0,
        max: 24,
        upper: UpperBound::Exclusive(25),
    },
    PerformanceRule {
        id: 2,
        label: "Básico",
        variant: ProficiencyVariant::Basic,
        min: 25,
        max: 49,
        upper: UpperBound::Exclusive(50),
    },
    PerformanceRule {
        id: 3,
        label: "Proficiente",
        variant: ProficiencyVariant::Proficient,
        min: 50,
        max: 74,
        upper: UpperBound::Exclusive(75),
    },
    PerformanceRule {
        id: 4,
        label: "Avançado",
        variant: ProficiencyVariant::Advanced,
        min: 75,
        max: 100,
        upper: UpperBound::Inclusive(100),
    },
];

/// Clamp into `0..=100`. `NaN` becomes 0.
#[must_use]
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Classify a percentage.
///
/// Values below 0 behave as 0, values above 100 behave as 100, and `NaN`
/// behaves as 0. Exactly one rule matches any clamped value.
#[must_use]
pub fn classify(percentage: f64) -> &'static PerformanceRule {
    let clamped = clamp_percentage(percentage);
    let [first, ..] = &PERFORMANCE_RULES;
    // The rules partition 0..=100, so the fallback is never taken.
    PERFORMANCE_RULES
        .iter()
        .find(|rule| rule.matches(clamped))
        .unwrap_or(first)
}

/// Variant for a percentage.
#[must_use]
pub fn performance_variant(percentage: f64) -> ProficiencyVariant {
    classify(percentage).variant
}

/// Level id for a percentage.
#[must_use]
pub fn performance_id(percentage: f64) -> u8 {
    classify(percentage).id
}

/// Label for a percentage.
#[must_use]
pub fn performance_label(percentage: f64) -> &'static str {
    classify(percentage).label
}

/// Render a percentage with a fixed number of decimals, e.g. `42.6%`.
#[must_use]
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

// =============================================================================
// TESTS
// =============================================================================
