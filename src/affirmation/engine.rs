//! Catalog and weighted selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Affirmation, AffirmationError, Category, Intensity, Mood};

/// One catalog entry. `{name}` in the template is replaced with the
/// caller's name.
struct Entry {
    template: &'static str,
    category: Category,
    intensity: Intensity,
}

const fn entry(template: &'static str, category: Category, intensity: Intensity) -> Entry {
    Entry {
        template,
        category,
        intensity,
    }
}

use Category::*;
use Intensity::*;

static CATALOG: &[Entry] = &[
    // Motivation
    entry("One small commit at a time, {name}.", Motivation, Low),
    entry("Rest is part of the work, {name}. Start gently.", Motivation, Low),
    entry("Steady progress beats heroic sprints, {name}.", Motivation, Medium),
    entry("You know exactly where to start, {name}. Go.", Motivation, Medium),
    entry("Ship it, {name}. Momentum is on your side today.", Motivation, High),
    entry("Today is a green-build kind of day, {name}.", Motivation, High),
    // Confidence
    entry("You have solved harder problems than this, {name}.", Confidence, Low),
    entry("Take a breath, {name}. You belong at this keyboard.", Confidence, Low),
    entry("Your instincts got you here, {name}. Trust them.", Confidence, Medium),
    entry("Nobody reads your code as clearly as you do, {name}.", Confidence, Medium),
    entry("Own the review, {name}. Your design holds up.", Confidence, High),
    entry("That architecture is sound, {name}. Defend it.", Confidence, High),
    // Persistence
    entry("The bug will surrender eventually, {name}.", Persistence, Low),
    entry("Stuck is temporary, {name}. Stubborn is forever.", Persistence, Low),
    entry("Every failing test is a clue, {name}. Keep pulling.", Persistence, Medium),
    entry("One more hypothesis, {name}. You are closing in.", Persistence, Medium),
    entry("Chase it down, {name}. The stack trace ends somewhere.", Persistence, High),
    entry("You do not lose to a race condition, {name}.", Persistence, High),
    // Self-care
    entry("Step away from the screen, {name}. It will keep.", SelfCare, Low),
    entry("Water, stretch, breathe, {name}. Then decide.", SelfCare, Low),
    entry("A rested mind merges cleaner, {name}.", SelfCare, Medium),
    entry("Protect your focus, {name}. Close the extra tabs.", SelfCare, Medium),
    entry("Spend that energy wisely, {name}. Breaks are fuel.", SelfCare, High),
    entry("Strong day, {name}. End it before you burn it.", SelfCare, High),
    // Growth
    entry("Not knowing yet is the whole point, {name}.", Growth, Low),
    entry("Slow reading today is fast debugging tomorrow, {name}.", Growth, Low),
    entry("Yesterday's you would be impressed, {name}.", Growth, Medium),
    entry("Every refactor teaches you the codebase, {name}.", Growth, Medium),
    entry("Take the unfamiliar ticket, {name}. That is how range grows.", Growth, High),
    entry("Learn it in public, {name}. You are ready.", Growth, High),
];

// Selection weights. Category match dominates intensity match so an
// explicit mood preference is never drowned out by energy alone.
const BASE_WEIGHT: f64 = 1.0;
const PRIMARY_CATEGORY_BONUS: f64 = 3.0;
const SECONDARY_CATEGORY_BONUS: f64 = 1.5;
const INTENSITY_BONUS: f64 = 2.0;

/// Request for a personalized affirmation.
///
/// # Examples
///
/// ```
/// use deepwork::affirmation::{get_affirmation, AffirmationRequest, Mood};
///
/// let request = AffirmationRequest::new("alice", Mood::Stressed, 4).with_seed(42);
/// let affirmation = get_affirmation(&request)?;
/// assert!(affirmation.text.contains("Alice"));
/// # Ok::<(), deepwork::affirmation::AffirmationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AffirmationRequest {
    /// Caller's name. Trimmed; blank falls back to "Developer".
    pub name: String,

    /// Current mood; drives the preferred categories.
    pub mood: Mood,

    /// Energy level, 1-10.
    pub energy: u8,

    /// Hard category filter, overriding the mood mapping.
    pub category: Option<Category>,

    /// Seed for reproducible selection.
    pub seed: Option<u64>,
}

impl AffirmationRequest {
    pub fn new(name: impl Into<String>, mood: Mood, energy: u8) -> Self {
        Self {
            name: name.into(),
            mood,
            energy,
            category: None,
            seed: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Selects a personalized affirmation.
///
/// Candidates matching the mood's preferred categories and the energy's
/// intensity bucket receive proportionally higher selection weight; an
/// explicit category in the request restricts the catalog to that
/// category outright. The returned `mood_alignment` reports how well the
/// chosen entry matches the request.
///
/// # Errors
///
/// Returns [`AffirmationError::EnergyOutOfRange`] if `energy` is not in
/// 1-10.
pub fn get_affirmation(request: &AffirmationRequest) -> Result<Affirmation, AffirmationError> {
    if !(1..=10).contains(&request.energy) {
        return Err(AffirmationError::EnergyOutOfRange(request.energy));
    }

    let intensity = Intensity::from_energy(request.energy);
    let [primary, secondary] = request.mood.preferred_categories();

    let candidates: Vec<&Entry> = match request.category {
        Some(category) => CATALOG.iter().filter(|e| e.category == category).collect(),
        None => CATALOG.iter().collect(),
    };

    let weights: Vec<f64> = candidates
        .iter()
        .map(|e| {
            let mut w = BASE_WEIGHT;
            if e.category == primary {
                w += PRIMARY_CATEGORY_BONUS;
            } else if e.category == secondary {
                w += SECONDARY_CATEGORY_BONUS;
            }
            if e.intensity == intensity {
                w += INTENSITY_BONUS;
            }
            w
        })
        .collect();

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let chosen = candidates[roulette(&weights, &mut rng)];

    let name = display_name(&request.name);
    Ok(Affirmation {
        text: chosen.template.replace("{name}", &name),
        category: chosen.category,
        mood_alignment: alignment(chosen, primary, secondary, intensity),
    })
}

/// Alignment in [0, 1]: category preference weighted 0.6, intensity
/// match 0.4.
fn alignment(entry: &Entry, primary: Category, secondary: Category, intensity: Intensity) -> f64 {
    let category_part = if entry.category == primary {
        1.0
    } else if entry.category == secondary {
        0.5
    } else {
        0.0
    };
    let intensity_part = if entry.intensity == intensity { 1.0 } else { 0.0 };
    0.6 * category_part + 0.4 * intensity_part
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

/// Trims the name, falls back to "Developer" when blank, and uppercases
/// the first letter.
fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Developer".to_string();
    }
    let mut chars = trimmed.chars();
    let first = chars.next().unwrap();
    first.to_uppercase().chain(chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_appears_in_text() {
        let request = AffirmationRequest::new("Alice", Mood::Happy, 5).with_seed(42);
        let result = get_affirmation(&request).unwrap();
        assert!(result.text.contains("Alice"), "got: {}", result.text);
    }

    #[test]
    fn test_seed_reproducibility() {
        let request = AffirmationRequest::new("Alice", Mood::Happy, 5).with_seed(42);
        let a = get_affirmation(&request).unwrap();
        let b = get_affirmation(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_override_is_hard_filter() {
        for seed in 0..20 {
            let request = AffirmationRequest::new("Test", Mood::Stressed, 5)
                .with_category(Category::Growth)
                .with_seed(seed);
            let result = get_affirmation(&request).unwrap();
            assert_eq!(result.category, Category::Growth);
        }
    }

    #[test]
    fn test_stressed_mood_prefers_self_care_or_persistence() {
        let hits = (0..40)
            .filter(|&seed| {
                let request = AffirmationRequest::new("Test", Mood::Stressed, 5).with_seed(seed);
                let category = get_affirmation(&request).unwrap().category;
                category == Category::SelfCare || category == Category::Persistence
            })
            .count();
        // Preferred categories carry roughly 60% of the total weight.
        assert!(hits > 14, "only {hits}/40 selections hit preferred categories");
    }

    #[test]
    fn test_blank_name_uses_default() {
        let request = AffirmationRequest::new("   ", Mood::Happy, 5).with_seed(42);
        let result = get_affirmation(&request).unwrap();
        assert!(result.text.contains("Developer"), "got: {}", result.text);
    }

    #[test]
    fn test_name_capitalization() {
        let request = AffirmationRequest::new("alice", Mood::Happy, 5).with_seed(42);
        let result = get_affirmation(&request).unwrap();
        assert!(result.text.contains("Alice"), "got: {}", result.text);
    }

    #[test]
    fn test_energy_out_of_range() {
        for energy in [0, 11] {
            let request = AffirmationRequest::new("Alice", Mood::Happy, energy);
            assert_eq!(
                get_affirmation(&request).unwrap_err(),
                AffirmationError::EnergyOutOfRange(energy)
            );
        }
    }

    #[test]
    fn test_alignment_bounds() {
        for seed in 0..20 {
            let request = AffirmationRequest::new("Alice", Mood::Tired, 2).with_seed(seed);
            let result = get_affirmation(&request).unwrap();
            assert!((0.0..=1.0).contains(&result.mood_alignment));
        }
    }

    #[test]
    fn test_full_alignment_for_perfect_match() {
        // Hard-filter to the primary category at matching intensity and
        // verify a perfect match reports alignment 1.0 when it is chosen.
        let request = AffirmationRequest::new("Alice", Mood::Motivated, 9)
            .with_category(Category::Motivation)
            .with_seed(7);
        let result = get_affirmation(&request).unwrap();
        assert!(result.mood_alignment >= 0.6);
    }
}
