//! # Distribution Module
//!
//! Tallies a batch of percentages per performance level.
//!
//! This is the data behind legend cards and pie charts: how many students
//! landed in each level, and what share of the batch that is. Shares use
//! integer arithmetic and round down, so they may sum to less than 100.

use crate::performance::{PERFORMANCE_RULES, PerformanceRule, classify};
use crate::variant::ProficiencyVariant;
use serde::Serialize;

/// Per-level counts for a batch of percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    /// Indexed by rule position (level id - 1).
    counts: [u64; 4],
}

/// One row of a distribution, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub id: u8,
    pub label: &'static str,
    pub variant: ProficiencyVariant,
    pub color: &'static str,
    pub range: String,
    pub count: u64,
    pub share_percent: u64,
}

impl Distribution {
    /// Create an empty distribution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every value of an iterator.
    #[must_use]
    pub fn from_percentages<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut distribution = Self::new();
        for value in values {
            distribution.record(value);
        }
        distribution
    }

    /// Classify one value and count it. Returns the matched rule.
    pub fn record(&mut self, percentage: f64) -> &'static PerformanceRule {
        let rule = classify(percentage);
        if let Some(slot) = self.slot_mut(rule.variant) {
            *slot = slot.saturating_add(1);
        }
        rule
    }

    /// Count for a variant. Sentinels are never counted.
    #[must_use]
    pub fn count(&self, variant: ProficiencyVariant) -> u64 {
        Self::index_of(variant)
            .and_then(|i| self.counts.get(i).copied())
            .unwrap_or(0)
    }

    /// Total number of recorded values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of the batch in a level, as a whole percentage rounded down.
    ///
    /// Returns 0 for an empty distribution.
    #[must_use]
    pub fn share_percent(&self, variant: ProficiencyVariant) -> u64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        self.count(variant).saturating_mul(100) / total
    }

    /// The level with the most values. Ties go to the lower level.
    #[must_use]
    pub fn mode(&self) -> Option<&'static PerformanceRule> {
        if self.is_empty() {
            return None;
        }
        PERFORMANCE_RULES
            .iter()
            .zip(self.counts.iter())
            .fold(None, |best: Option<(&'static PerformanceRule, u64)>, (rule, &count)| {
                match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((rule, count)),
                }
            })
            .map(|(rule, _)| rule)
    }

    /// All four levels in id order, including empty ones.
    #[must_use]
    pub fn entries(&self) -> Vec<DistributionEntry> {
        PERFORMANCE_RULES
            .iter()
            .map(|rule| DistributionEntry {
                id: rule.id,
                label: rule.label,
                variant: rule.variant,
                color: rule.variant.color(),
                range: rule.range_label(),
                count: self.count(rule.variant),
                share_percent: self.share_percent(rule.variant),
            })
            .collect()
    }

    fn index_of(variant: ProficiencyVariant) -> Option<usize> {
        PERFORMANCE_RULES.iter().position(|rule| rule.variant == variant)
    }

    fn slot_mut(&mut self, variant: ProficiencyVariant) -> Option<&mut u64> {
        Self::index_of(variant).and_then(|i| self.counts.get_mut(i))
    }
}

// =============================================================================
// TESTS
// =============================================================================
