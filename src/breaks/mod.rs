//! Break activity suggestions.
//!
//! Picks a break activity from a built-in catalog by weighted random
//! selection: activities whose energy requirement is close to the
//! caller's energy and whose length suits the time worked are favored.
//! An explicit break type restricts the catalog outright.

mod engine;
mod types;

pub use engine::{suggest_break, BreakRequest};
pub use types::{BreakCategory, BreakError, BreakSuggestion, Location};
