//! # Legend Core
//!
//! Deterministic classification of learning performance into proficiency
//! categories.
//!
//! Two entry points:
//! - [`classify`] maps a percentage (clamped to 0..=100) onto one of four
//!   [`PerformanceRule`]s. It always succeeds.
//! - [`classify_by_id`] looks up a [`ProficiencyItem`] by level id in one of
//!   three [`ProficiencyScale`] tables. Unknown ids return `None`.
//!
//! Every category carries a symbolic [`ProficiencyVariant`]. Presentation code
//! maps the variant to a visual color on its own, or uses
//! [`ProficiencyVariant::color`].
//!
//! All tables are `static` data: they are never mutated and can be shared
//! across threads without synchronization.

pub mod distribution;
pub mod error;
pub mod performance;
pub mod proficiency;
pub mod variant;

pub use distribution::{Distribution, DistributionEntry};
pub use error::{LegendError, Result};
pub use performance::{
    PERFORMANCE_RULES, PerformanceRule, UpperBound, clamp_percentage, classify,
    format_percentage, performance_id, performance_label, performance_variant,
};
pub use proficiency::{
    PROFICIENCY, PROFICIENCY_WITH_IN_PROGRESS, PROFICIENCY_WITH_NOT_COMPLETED, ProficiencyItem,
    ProficiencyScale, Sentinel, classify_by_id, classify_with_sentinel, proficiency_variant,
    require_by_id,
};
pub use variant::{PERFORMANCE_COLORS, ProficiencyVariant};
