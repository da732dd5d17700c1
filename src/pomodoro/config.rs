//! Pomodoro configuration and technique presets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error raised when a pomodoro plan cannot be built from its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The total time budget was zero.
    #[error("total_minutes must be positive")]
    ZeroTotal,

    /// The technique string was not one of the recognized names.
    #[error("invalid technique '{0}', must be one of: pomodoro, 52-17, 90-20, custom")]
    UnknownTechnique(String),

    /// The custom technique was chosen without the lengths it needs.
    #[error("technique 'custom' requires '{field}'")]
    MissingCustomLength {
        /// Name of the missing parameter.
        field: &'static str,
    },

    /// An explicitly provided duration was zero.
    #[error("'{field}' must be positive")]
    ZeroDuration {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// The long-break interval was zero.
    #[error("long_break_interval must be at least 1")]
    ZeroInterval,
}

/// Work/break technique preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Technique {
    /// 25 minutes work, 5 minutes break.
    Pomodoro,

    /// 52 minutes work, 17 minutes break.
    FiftyTwoSeventeen,

    /// 90 minutes work, 20 minutes break.
    NinetyTwenty,

    /// User-specified lengths; `work_length` and `short_break` are
    /// required.
    Custom,
}

impl Technique {
    /// Returns the preset `(work, short_break)` lengths in minutes, or
    /// `None` for [`Technique::Custom`].
    pub fn preset(&self) -> Option<(u32, u32)> {
        match self {
            Technique::Pomodoro => Some((25, 5)),
            Technique::FiftyTwoSeventeen => Some((52, 17)),
            Technique::NinetyTwenty => Some((90, 20)),
            Technique::Custom => None,
        }
    }

    /// Returns the canonical string name of this technique.
    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::Pomodoro => "pomodoro",
            Technique::FiftyTwoSeventeen => "52-17",
            Technique::NinetyTwenty => "90-20",
            Technique::Custom => "custom",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technique {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pomodoro" => Ok(Technique::Pomodoro),
            "52-17" => Ok(Technique::FiftyTwoSeventeen),
            "90-20" => Ok(Technique::NinetyTwenty),
            "custom" => Ok(Technique::Custom),
            other => Err(PlanError::UnknownTechnique(other.to_string())),
        }
    }
}

/// Configuration for a pomodoro plan.
///
/// Explicit `work_length`/`short_break` values override the technique
/// preset; both are required for [`Technique::Custom`]. `long_break`
/// defaults to the short-break length.
///
/// # Examples
///
/// ```
/// use deepwork::pomodoro::{PomodoroConfig, Technique};
///
/// let config = PomodoroConfig::new(120)
///     .with_technique(Technique::Pomodoro)
///     .with_long_break(15)
///     .with_long_break_interval(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PomodoroConfig {
    /// Total available time in minutes. Must be positive.
    pub total_minutes: u32,

    /// Technique preset. Defaults to [`Technique::Pomodoro`].
    pub technique: Technique,

    /// Work period length in minutes. Overrides the preset; required
    /// for the custom technique.
    pub work_length: Option<u32>,

    /// Short break length in minutes. Overrides the preset; required
    /// for the custom technique.
    pub short_break: Option<u32>,

    /// Long break length in minutes. Defaults to the short-break length.
    pub long_break: Option<u32>,

    /// Number of work sessions between long breaks. Must be at least 1.
    pub long_break_interval: u32,
}

impl PomodoroConfig {
    /// Creates a configuration with the classic pomodoro preset.
    pub fn new(total_minutes: u32) -> Self {
        Self {
            total_minutes,
            technique: Technique::Pomodoro,
            work_length: None,
            short_break: None,
            long_break: None,
            long_break_interval: 4,
        }
    }

    pub fn with_technique(mut self, technique: Technique) -> Self {
        self.technique = technique;
        self
    }

    pub fn with_work_length(mut self, minutes: u32) -> Self {
        self.work_length = Some(minutes);
        self
    }

    pub fn with_short_break(mut self, minutes: u32) -> Self {
        self.short_break = Some(minutes);
        self
    }

    pub fn with_long_break(mut self, minutes: u32) -> Self {
        self.long_break = Some(minutes);
        self
    }

    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.total_minutes == 0 {
            return Err(PlanError::ZeroTotal);
        }
        if self.long_break_interval == 0 {
            return Err(PlanError::ZeroInterval);
        }
        if self.technique == Technique::Custom {
            if self.work_length.is_none() {
                return Err(PlanError::MissingCustomLength {
                    field: "work_length",
                });
            }
            if self.short_break.is_none() {
                return Err(PlanError::MissingCustomLength {
                    field: "short_break",
                });
            }
        }
        for (field, value) in [
            ("work_length", self.work_length),
            ("short_break", self.short_break),
            ("long_break", self.long_break),
        ] {
            if value == Some(0) {
                return Err(PlanError::ZeroDuration { field });
            }
        }
        Ok(())
    }

    /// Resolves the effective `(work, short_break, long_break)` lengths.
    ///
    /// Call only after [`validate`](Self::validate) has passed.
    pub(crate) fn resolved_lengths(&self) -> (u32, u32, u32) {
        let (preset_work, preset_short) = self.technique.preset().unwrap_or((0, 0));
        let work = self.work_length.unwrap_or(preset_work);
        let short = self.short_break.unwrap_or(preset_short);
        let long = self.long_break.unwrap_or(short);
        (work, short, long)
    }
}
