//! Validation errors for task prioritization.

use thiserror::Error;

/// Error raised when prioritization inputs fail validation.
///
/// Validation is eager: all inputs are checked before any scoring, and
/// the first invalid record wins. Task-level variants carry the index of
/// the offending task in the input sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The task list was empty.
    #[error("tasks list cannot be empty")]
    EmptyTasks,

    /// The method string was not one of the recognized names.
    #[error("invalid method '{0}', must be one of: weighted, deadline")]
    UnknownMethod(String),

    /// The weighted method was requested without weights.
    #[error("weights are required for the weighted method")]
    MissingWeights,

    /// A weight coefficient was negative or not finite.
    #[error("weight '{field}' must be non-negative and finite, got {value}")]
    InvalidWeight {
        /// Name of the offending coefficient.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A numeric task field was NaN or infinite.
    #[error("task at index {index}: field '{field}' must be finite, got {value}")]
    NonFiniteField {
        /// Position of the task in the input sequence.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A task's effort was negative.
    #[error("task at index {index}: effort cannot be negative, got {value}")]
    NegativeEffort {
        /// Position of the task in the input sequence.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A task lacked a deadline required by the chosen method.
    #[error("task at index {index} ('{name}') is missing required field 'deadline'")]
    MissingDeadline {
        /// Position of the task in the input sequence.
        index: usize,
        /// Name of the task, for the error message.
        name: String,
    },
}
