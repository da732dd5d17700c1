//! Break catalog and selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{BreakCategory, BreakError, BreakSuggestion, Location};

struct Activity {
    name: &'static str,
    description: &'static str,
    duration_minutes: u32,
    category: BreakCategory,
    energy_required: u8,
    location: Location,
}

use BreakCategory::*;
use Location::*;

static CATALOG: &[Activity] = &[
    Activity {
        name: "Desk stretch",
        description: "Stand up, roll your shoulders, stretch neck and wrists.",
        duration_minutes: 5,
        category: Active,
        energy_required: 3,
        location: Desk,
    },
    Activity {
        name: "Stair climb",
        description: "Two or three flights of stairs at a brisk pace.",
        duration_minutes: 5,
        category: Active,
        energy_required: 7,
        location: Indoors,
    },
    Activity {
        name: "Short walk",
        description: "A loop around the block, no phone.",
        duration_minutes: 15,
        category: Active,
        energy_required: 6,
        location: Outdoors,
    },
    Activity {
        name: "Quick workout",
        description: "Push-ups, squats, and a plank.",
        duration_minutes: 10,
        category: Active,
        energy_required: 9,
        location: Indoors,
    },
    Activity {
        name: "Eye rest",
        description: "Look at something 20 feet away; slow blinks, no screens.",
        duration_minutes: 5,
        category: Restful,
        energy_required: 1,
        location: Desk,
    },
    Activity {
        name: "Breathing exercise",
        description: "Box breathing: four counts in, hold, out, hold.",
        duration_minutes: 5,
        category: Restful,
        energy_required: 1,
        location: Desk,
    },
    Activity {
        name: "Power nap",
        description: "Lie back, timer on, lights low.",
        duration_minutes: 20,
        category: Restful,
        energy_required: 2,
        location: Indoors,
    },
    Activity {
        name: "Tea ritual",
        description: "Make a cup of tea slowly and drink it away from the desk.",
        duration_minutes: 10,
        category: Restful,
        energy_required: 2,
        location: Indoors,
    },
    Activity {
        name: "Coffee chat",
        description: "Grab a drink with a colleague, no work talk.",
        duration_minutes: 15,
        category: Social,
        energy_required: 5,
        location: Indoors,
    },
    Activity {
        name: "Call a friend",
        description: "Five minutes of catching up with someone outside work.",
        duration_minutes: 10,
        category: Social,
        energy_required: 4,
        location: Desk,
    },
    Activity {
        name: "Walk and talk",
        description: "Take a lap with a teammate.",
        duration_minutes: 15,
        category: Social,
        energy_required: 6,
        location: Outdoors,
    },
    Activity {
        name: "Doodle",
        description: "Pen and paper, draw whatever your hand wants.",
        duration_minutes: 10,
        category: Creative,
        energy_required: 3,
        location: Desk,
    },
    Activity {
        name: "One song",
        description: "Play or really listen to a single song, start to finish.",
        duration_minutes: 5,
        category: Creative,
        energy_required: 2,
        location: Desk,
    },
    Activity {
        name: "Puzzle break",
        description: "A crossword clue or two, or a few chess puzzles.",
        duration_minutes: 10,
        category: Creative,
        energy_required: 5,
        location: Desk,
    },
    Activity {
        name: "Photo hunt",
        description: "Step outside and photograph one interesting thing.",
        duration_minutes: 15,
        category: Creative,
        energy_required: 6,
        location: Outdoors,
    },
];

/// Request for a break suggestion.
///
/// Negative time worked is unrepresentable by construction; zero is
/// valid (a pre-emptive break).
///
/// # Examples
///
/// ```
/// use deepwork::breaks::{suggest_break, BreakCategory, BreakRequest};
///
/// let request = BreakRequest::new(90, 5)
///     .with_break_type(BreakCategory::Active)
///     .with_seed(42);
/// let suggestion = suggest_break(&request)?;
/// assert_eq!(suggestion.category, BreakCategory::Active);
/// # Ok::<(), deepwork::breaks::BreakError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BreakRequest {
    /// Minutes worked since the last break.
    pub minutes_worked: u32,

    /// Current energy level, 1-10.
    pub energy_level: u8,

    /// Hard category filter.
    pub break_type: Option<BreakCategory>,

    /// Seed for reproducible selection.
    pub seed: Option<u64>,
}

impl BreakRequest {
    pub fn new(minutes_worked: u32, energy_level: u8) -> Self {
        Self {
            minutes_worked,
            energy_level,
            break_type: None,
            seed: None,
        }
    }

    pub fn with_break_type(mut self, category: BreakCategory) -> Self {
        self.break_type = Some(category);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Suggests a break activity.
///
/// Selection is roulette-weighted: activities whose energy requirement
/// is close to `energy_level`, and whose duration is close to the target
/// break length (one minute of break per six worked, clamped to 5-20),
/// are proportionally more likely. A `break_type` restricts the catalog
/// to that category.
///
/// # Errors
///
/// Returns [`BreakError::EnergyOutOfRange`] if `energy_level` is not in
/// 1-10.
pub fn suggest_break(request: &BreakRequest) -> Result<BreakSuggestion, BreakError> {
    if !(1..=10).contains(&request.energy_level) {
        return Err(BreakError::EnergyOutOfRange(request.energy_level));
    }

    let candidates: Vec<&Activity> = match request.break_type {
        Some(category) => CATALOG.iter().filter(|a| a.category == category).collect(),
        None => CATALOG.iter().collect(),
    };

    let target_duration = (request.minutes_worked / 6).clamp(5, 20);
    let weights: Vec<f64> = candidates
        .iter()
        .map(|a| {
            let energy_gap = (a.energy_required as f64 - request.energy_level as f64).abs();
            let duration_gap = (a.duration_minutes as f64 - target_duration as f64).abs();
            // Both factors are in (0, 1], so no candidate is ever
            // excluded outright.
            (1.0 / (1.0 + energy_gap)) * (1.0 / (1.0 + duration_gap / 5.0))
        })
        .collect();

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let chosen = candidates[roulette(&weights, &mut rng)];

    Ok(BreakSuggestion {
        name: chosen.name.to_string(),
        description: chosen.description.to_string(),
        duration_minutes: chosen.duration_minutes,
        category: chosen.category,
        energy_required: chosen.energy_required,
        location: chosen.location,
    })
}

/// Weighted roulette selection over positive weights.
fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len() - 1 // floating-point fallback
}
