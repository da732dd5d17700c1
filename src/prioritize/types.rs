//! Task record and method selection.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::error::ValidationError;

/// A unit of work to be ranked.
///
/// The prioritizer never mutates tasks; it clones them into a freshly
/// ordered output sequence.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use deepwork::prioritize::Task;
///
/// let task = Task::new("Fix login bug", 8.0, 2.0)
///     .with_deadline(Utc::now() + Duration::days(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    /// Human-readable task name.
    pub name: String,

    /// How much the task matters. Any finite value; a 0-10 scale is
    /// typical. Higher ranks earlier.
    pub importance: f64,

    /// Estimated cost of the task. Must be finite and non-negative;
    /// zero is valid (treated as near-free, see the weighted method).
    pub effort: f64,

    /// When the task is due. Required by the deadline method, and by
    /// the weighted method whenever the urgency coefficient is positive.
    pub deadline: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task with no deadline.
    pub fn new(name: impl Into<String>, importance: f64, effort: f64) -> Self {
        Self {
            name: name.into(),
            importance,
            effort,
            deadline: None,
        }
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Prioritization method.
///
/// Parsed from the strings `"weighted"` and `"deadline"`; any other
/// value is rejected with [`ValidationError::UnknownMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Weighted sum of importance, inverse effort, and deadline urgency.
    Weighted,

    /// Earliest due date first. Every task must carry a deadline.
    Deadline,
}

impl Method {
    /// Returns the canonical string name of this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Weighted => "weighted",
            Method::Deadline => "deadline",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weighted" => Ok(Method::Weighted),
            "deadline" => Ok(Method::Deadline),
            other => Err(ValidationError::UnknownMethod(other.to_string())),
        }
    }
}
