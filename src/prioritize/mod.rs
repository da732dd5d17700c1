//! Task prioritization.
//!
//! Ranks a list of tasks by a computed priority score, highest first.
//! Two methods are supported:
//!
//! - **Weighted**: linear combination of importance, inverse effort
//!   (quick wins rank up), and deadline urgency.
//! - **Deadline**: pure earliest-due-date ordering; tasks due sooner
//!   rank first.
//!
//! All inputs are validated before any scoring. Either every task is
//! valid and a full ranking is returned, or nothing is computed and the
//! error names the offending field and task index.
//!
//! # References
//!
//! Earliest-due-date and weighted dispatching rules: Pinedo (2016),
//! "Scheduling: Theory, Algorithms, and Systems"

mod engine;
mod error;
mod types;
mod weights;

pub use engine::{prioritize_tasks, prioritize_tasks_at, ScoredTask};
pub use error::ValidationError;
pub use types::{Method, Task};
pub use weights::Weights;
