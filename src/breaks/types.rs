//! Break categories, locations, and the suggestion result type.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error raised when a break request fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakError {
    /// Energy must be between 1 and 10.
    #[error("energy_level must be between 1 and 10, got {0}")]
    EnergyOutOfRange(u8),

    /// The break type string was not one of the recognized names.
    #[error("invalid break_type '{0}', must be one of: active, restful, social, creative")]
    UnknownBreakType(String),
}

/// Kind of break activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BreakCategory {
    /// Movement: walking, stretching, stairs.
    Active,

    /// Recovery: resting eyes, breathing, quiet.
    Restful,

    /// People: a chat, a call, a coffee together.
    Social,

    /// Play: doodling, music, puzzles.
    Creative,
}

impl BreakCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakCategory::Active => "active",
            BreakCategory::Restful => "restful",
            BreakCategory::Social => "social",
            BreakCategory::Creative => "creative",
        }
    }
}

impl fmt::Display for BreakCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakCategory {
    type Err = BreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BreakCategory::Active),
            "restful" => Ok(BreakCategory::Restful),
            "social" => Ok(BreakCategory::Social),
            "creative" => Ok(BreakCategory::Creative),
            other => Err(BreakError::UnknownBreakType(other.to_string())),
        }
    }
}

/// Where the activity takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Location {
    /// Right where you sit.
    Desk,

    /// Away from the desk, inside.
    Indoors,

    /// Outside.
    Outdoors,
}

/// A suggested break activity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakSuggestion {
    /// Short activity name.
    pub name: String,

    /// What to actually do.
    pub description: String,

    /// Suggested length in minutes.
    pub duration_minutes: u32,

    /// Kind of activity.
    pub category: BreakCategory,

    /// Energy the activity asks for, on the same 1-10 scale as the
    /// request.
    pub energy_required: u8,

    /// Where to do it.
    pub location: Location,
}
