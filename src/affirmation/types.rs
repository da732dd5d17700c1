//! Moods, categories, and the affirmation result type.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error raised when an affirmation request fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffirmationError {
    /// Energy must be between 1 and 10.
    #[error("energy must be between 1 and 10, got {0}")]
    EnergyOutOfRange(u8),

    /// The mood string was not one of the recognized names.
    #[error(
        "invalid mood '{0}', must be one of: happy, stressed, anxious, tired, \
         frustrated, motivated, neutral"
    )]
    UnknownMood(String),

    /// The category string was not one of the recognized names.
    #[error(
        "invalid category '{0}', must be one of: motivation, confidence, \
         persistence, self-care, growth"
    )]
    UnknownCategory(String),
}

/// Current mood of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mood {
    Happy,
    Stressed,
    Anxious,
    Tired,
    Frustrated,
    Motivated,
    Neutral,
}

impl Mood {
    /// Preferred affirmation categories for this mood, most preferred
    /// first.
    pub(crate) fn preferred_categories(&self) -> [Category; 2] {
        match self {
            Mood::Happy => [Category::Motivation, Category::Growth],
            Mood::Stressed => [Category::SelfCare, Category::Persistence],
            Mood::Anxious => [Category::Confidence, Category::SelfCare],
            Mood::Tired => [Category::SelfCare, Category::Motivation],
            Mood::Frustrated => [Category::Persistence, Category::Growth],
            Mood::Motivated => [Category::Motivation, Category::Confidence],
            Mood::Neutral => [Category::Growth, Category::Motivation],
        }
    }
}

impl FromStr for Mood {
    type Err = AffirmationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "stressed" => Ok(Mood::Stressed),
            "anxious" => Ok(Mood::Anxious),
            "tired" => Ok(Mood::Tired),
            "frustrated" => Ok(Mood::Frustrated),
            "motivated" => Ok(Mood::Motivated),
            "neutral" => Ok(Mood::Neutral),
            other => Err(AffirmationError::UnknownMood(other.to_string())),
        }
    }
}

/// Affirmation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    Motivation,
    Confidence,
    Persistence,
    SelfCare,
    Growth,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Motivation => "motivation",
            Category::Confidence => "confidence",
            Category::Persistence => "persistence",
            Category::SelfCare => "self-care",
            Category::Growth => "growth",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AffirmationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motivation" => Ok(Category::Motivation),
            "confidence" => Ok(Category::Confidence),
            "persistence" => Ok(Category::Persistence),
            "self-care" => Ok(Category::SelfCare),
            "growth" => Ok(Category::Growth),
            other => Err(AffirmationError::UnknownCategory(other.to_string())),
        }
    }
}

/// Intensity bucket derived from the 1-10 energy scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    /// Energy 1-3: calming, reassuring.
    Low,

    /// Energy 4-7: balanced, steady.
    Medium,

    /// Energy 8-10: energetic, driving.
    High,
}

impl Intensity {
    /// Buckets a validated 1-10 energy level.
    pub fn from_energy(energy: u8) -> Self {
        match energy {
            1..=3 => Intensity::Low,
            4..=7 => Intensity::Medium,
            _ => Intensity::High,
        }
    }
}

/// A selected, personalized affirmation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affirmation {
    /// The personalized affirmation text.
    pub text: String,

    /// Category of the selected entry.
    pub category: Category,

    /// How well the selection matches the requested mood and energy,
    /// in [0, 1].
    pub mood_alignment: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mood() {
        assert_eq!("stressed".parse::<Mood>().unwrap(), Mood::Stressed);
        assert!(matches!(
            "bored".parse::<Mood>(),
            Err(AffirmationError::UnknownMood(_))
        ));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("self-care".parse::<Category>().unwrap(), Category::SelfCare);
        assert!(matches!(
            "wealth".parse::<Category>(),
            Err(AffirmationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_intensity_buckets() {
        assert_eq!(Intensity::from_energy(1), Intensity::Low);
        assert_eq!(Intensity::from_energy(3), Intensity::Low);
        assert_eq!(Intensity::from_energy(4), Intensity::Medium);
        assert_eq!(Intensity::from_energy(7), Intensity::Medium);
        assert_eq!(Intensity::from_energy(8), Intensity::High);
        assert_eq!(Intensity::from_energy(10), Intensity::High);
    }
}
