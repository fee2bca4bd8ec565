//! # Error Module
//!
//! Errors for the fallible corners of the classifier: parsing symbolic names
//! and strict id lookups. Percentage classification has no error path.

use crate::proficiency::ProficiencyScale;
use thiserror::Error;

/// Result alias for legend-core operations.
pub type Result<T> = std::result::Result<T, LegendError>;

/// Errors raised by legend-core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegendError {
    /// The string is not a known variant token.
    #[error("unknown proficiency variant: {0}")]
    UnknownVariant(String),

    /// The string is not a known scale name.
    #[error("unknown proficiency scale: {0} (expected standard, not-completed or in-progress)")]
    UnknownScale(String),

    /// No level with this id exists in the selected scale.
    #[error("no proficiency level with id {id} in the {scale} scale")]
    UnknownLevel { id: u32, scale: ProficiencyScale },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_message_names_scale() {
        let err = LegendError::UnknownLevel {
            id: 0,
            scale: ProficiencyScale::Standard,
        };
        assert_eq!(
            err.to_string(),
            "no proficiency level with id 0 in the standard scale"
        );
    }

    #[test]
    fn unknown_variant_message() {
        let err = LegendError::UnknownVariant("legend-gold".to_string());
        assert!(err.to_string().contains("legend-gold"));
    }
}
