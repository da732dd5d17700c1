//! Personalized developer affirmations.
//!
//! Selects an affirmation from a built-in catalog using weighted random
//! selection: entries whose category matches the caller's mood (or an
//! explicit category override) and whose intensity matches the caller's
//! energy level are favored. A seed makes selection reproducible.

mod engine;
mod types;

pub use engine::{get_affirmation, AffirmationRequest};
pub use types::{Affirmation, AffirmationError, Category, Intensity, Mood};
