//! # Proficiency Module
//!
//! Discrete proficiency levels looked up by id.
//!
//! The four core levels (ids 1-4) are shared by every scale. Two scales
//! prepend an id-0 sentinel row: one for students who have not done the
//! activity, one for students still doing it. Lookup is a plain table scan,
//! with no range logic.

use crate::error::{LegendError, Result};
use crate::variant::ProficiencyVariant;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One row of a proficiency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProficiencyItem {
    /// Level id. 0 is reserved for sentinels.
    pub id: u8,
    /// Human-readable label (pt-BR).
    pub label: &'static str,
    /// Symbolic color tag.
    pub variant: ProficiencyVariant,
    /// Symbolic icon name for badges.
    pub icon: &'static str,
    /// Short description for tooltips.
    pub description: &'static str,
}

const BELOW_BASIC: ProficiencyItem = ProficiencyItem {
    id: 1,
    label: "Abaixo do Básico",
    variant: ProficiencyVariant::BelowBasic,
    icon: "frown",
    description: "Desempenho abaixo do esperado",
};

const BASIC: ProficiencyItem = ProficiencyItem {
    id: 2,
    label: "Básico",
    variant: ProficiencyVariant::Basic,
    icon: "meh",
    description: "Desempenho básico",
};

const PROFICIENT: ProficiencyItem = ProficiencyItem {
    id: 3,
    label: "Proficiente",
    variant: ProficiencyVariant::Proficient,
    icon: "smile",
    description: "Desempenho proficiente",
};

const ADVANCED: ProficiencyItem = ProficiencyItem {
    id: 4,
    label: "Avançado",
    variant: ProficiencyVariant::Advanced,
    icon: "star",
    description: "Desempenho avançado",
};

const NOT_COMPLETED: ProficiencyItem = ProficiencyItem {
    id: 0,
    label: "Não fizeram",
    variant: ProficiencyVariant::NotCompleted,
    icon: "user-x",
    description: "Não realizaram a atividade",
};

const IN_PROGRESS: ProficiencyItem = ProficiencyItem {
    id: 0,
    label: "Em Andamento",
    variant: ProficiencyVariant::InProgress,
    icon: "clock",
    description: "Atividade em andamento",
};

/// The four core levels.
pub static PROFICIENCY: [ProficiencyItem; 4] = [BELOW_BASIC, BASIC, PROFICIENT, ADVANCED];

/// Core levels preceded by the "not completed" sentinel.
pub static PROFICIENCY_WITH_NOT_COMPLETED: [ProficiencyItem; 5] =
    [NOT_COMPLETED, BELOW_BASIC, BASIC, PROFICIENT, ADVANCED];

/// Core levels preceded by the "in progress" sentinel.
pub static PROFICIENCY_WITH_IN_PROGRESS: [ProficiencyItem; 5] =
    [IN_PROGRESS, BELOW_BASIC, BASIC, PROFICIENT, ADVANCED];

// =============================================================================
// SCALES
// =============================================================================

/// The id-0 category a scale may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentinel {
    NotCompleted,
    InProgress,
}

/// Which lookup table to search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ProficiencyScale {
    /// Ids 1-4 only.
    #[default]
    #[serde(rename = "standard")]
    Standard,
    /// Id 0 is "not completed".
    #[serde(rename = "not-completed")]
    WithNotCompleted,
    /// Id 0 is "in progress".
    #[serde(rename = "in-progress")]
    WithInProgress,
}

impl ProficiencyScale {
    /// Every scale, in declaration order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::WithNotCompleted, Self::WithInProgress];

    /// The static table for this scale.
    #[must_use]
    pub fn items(self) -> &'static [ProficiencyItem] {
        match self {
            Self::Standard => &PROFICIENCY,
            Self::WithNotCompleted => &PROFICIENCY_WITH_NOT_COMPLETED,
            Self::WithInProgress => &PROFICIENCY_WITH_IN_PROGRESS,
        }
    }

    /// The sentinel carried at id 0, if any.
    #[must_use]
    pub fn sentinel(self) -> Option<Sentinel> {
        match self {
            Self::Standard => None,
            Self::WithNotCompleted => Some(Sentinel::NotCompleted),
            Self::WithInProgress => Some(Sentinel::InProgress),
        }
    }

    /// CLI-facing name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::WithNotCompleted => "not-completed",
            Self::WithInProgress => "in-progress",
        }
    }
}

impl From<Option<Sentinel>> for ProficiencyScale {
    fn from(sentinel: Option<Sentinel>) -> Self {
        match sentinel {
            None => Self::Standard,
            Some(Sentinel::NotCompleted) => Self::WithNotCompleted,
            Some(Sentinel::InProgress) => Self::WithInProgress,
        }
    }
}

impl fmt::Display for ProficiencyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProficiencyScale {
    type Err = LegendError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "standard" => Ok(Self::Standard),
            "not-completed" => Ok(Self::WithNotCompleted),
            "in-progress" => Ok(Self::WithInProgress),
            other => Err(LegendError::UnknownScale(other.to_string())),
        }
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Look up a level by id in the given scale.
///
/// Returns `None` when the scale has no such id. Callers pick their own
/// fallback.
#[must_use]
pub fn classify_by_id(id: u32, scale: ProficiencyScale) -> Option<&'static ProficiencyItem> {
    scale.items().iter().find(|item| u32::from(item.id) == id)
}

/// Look up a level by id, optionally including an id-0 sentinel row.
#[must_use]
pub fn classify_with_sentinel(
    id: u32,
    sentinel: Option<Sentinel>,
) -> Option<&'static ProficiencyItem> {
    classify_by_id(id, ProficiencyScale::from(sentinel))
}

/// Variant of the level with this id, if any.
#[must_use]
pub fn proficiency_variant(id: u32, scale: ProficiencyScale) -> Option<ProficiencyVariant> {
    classify_by_id(id, scale).map(|item| item.variant)
}

/// Like [`classify_by_id`] but reports a missing id as an error.
#[must_use = "a missing level is reported through the Result"]
pub fn require_by_id(id: u32, scale: ProficiencyScale) -> Result<&'static ProficiencyItem> {
    classify_by_id(id, scale).ok_or(LegendError::UnknownLevel { id, scale })
}

// =============================================================================
// TESTS
// =============================================================================
