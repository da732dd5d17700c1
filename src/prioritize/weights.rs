//! Weight configuration for the weighted method.

use super::error::ValidationError;

/// Linear-combination coefficients for the weighted method.
///
/// Coefficients are used raw (no internal normalization); they must be
/// non-negative and finite but need not sum to 1. A zero coefficient
/// switches its term off entirely — in particular, tasks without
/// deadlines are accepted only when `deadline_urgency` is zero.
///
/// # Examples
///
/// ```
/// use deepwork::prioritize::Weights;
///
/// // Deadline-blind ranking: importance and quick wins only.
/// let weights = Weights::default()
///     .with_importance(0.7)
///     .with_effort(0.3)
///     .with_deadline_urgency(0.0);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Weights {
    /// Coefficient on raw importance.
    pub importance: f64,

    /// Coefficient on inverse effort.
    pub effort: f64,

    /// Coefficient on deadline urgency.
    pub deadline_urgency: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            importance: 0.5,
            effort: 0.3,
            deadline_urgency: 0.2,
        }
    }
}

impl Weights {
    pub fn with_importance(mut self, w: f64) -> Self {
        self.importance = w;
        self
    }

    pub fn with_effort(mut self, w: f64) -> Self {
        self.effort = w;
        self
    }

    pub fn with_deadline_urgency(mut self, w: f64) -> Self {
        self.deadline_urgency = w;
        self
    }

    /// Validates that every coefficient is non-negative and finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("importance", self.importance),
            ("effort", self.effort),
            ("deadline_urgency", self.deadline_urgency),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }
}
