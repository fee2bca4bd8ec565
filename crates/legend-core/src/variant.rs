//! # Variant Module
//!
//! Symbolic color tags for proficiency categories.
//!
//! A variant decouples classification from presentation: the classifier
//! returns a tag, and the consumer decides how to draw it. The tag names
//! match the design-system CSS tokens (`legend-advanced`, ...), and each tag
//! also resolves to the hex color used by chart renderers.

use crate::error::LegendError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of symbolic color tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProficiencyVariant {
    #[serde(rename = "legend-below-basic")]
    BelowBasic,
    #[serde(rename = "legend-basic")]
    Basic,
    #[serde(rename = "legend-proficient")]
    Proficient,
    #[serde(rename = "legend-advanced")]
    Advanced,
    #[serde(rename = "legend-not-completed")]
    NotCompleted,
    #[serde(rename = "legend-in-progress")]
    InProgress,
}

/// Chart colors for the four core levels, ordered by level id (1-4).
pub const PERFORMANCE_COLORS: [&str; 4] = [
    ProficiencyVariant::BelowBasic.color(),
    ProficiencyVariant::Basic.color(),
    ProficiencyVariant::Proficient.color(),
    ProficiencyVariant::Advanced.color(),
];

impl ProficiencyVariant {
    /// All variants, core levels first, then the sentinels.
    pub const ALL: [Self; 6] = [
        Self::BelowBasic,
        Self::Basic,
        Self::Proficient,
        Self::Advanced,
        Self::NotCompleted,
        Self::InProgress,
    ];

    /// The design token name, e.g. `legend-basic`.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::BelowBasic => "legend-below-basic",
            Self::Basic => "legend-basic",
            Self::Proficient => "legend-proficient",
            Self::Advanced => "legend-advanced",
            Self::NotCompleted => "legend-not-completed",
            Self::InProgress => "legend-in-progress",
        }
    }

    /// Hex color matching the CSS token.
    ///
    /// Note that `Basic` is orange, not the warning yellow.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::BelowBasic => "#ea5455",
            Self::Basic => "#ff9f43",
            Self::Proficient => "#28c76f",
            Self::Advanced => "#6e63e8",
            Self::NotCompleted => "#b4b7bd",
            Self::InProgress => "#00cfe8",
        }
    }

    /// True for the id-0 categories that sit outside the four-level scale.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::NotCompleted | Self::InProgress)
    }
}

impl fmt::Display for ProficiencyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ProficiencyVariant {
    type Err = LegendError;

    /// Accepts the full token (`legend-basic`) or the bare suffix (`basic`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let name = trimmed.strip_prefix("legend-").unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|v| v.as_token().strip_prefix("legend-") == Some(name))
            .ok_or_else(|| LegendError::UnknownVariant(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
