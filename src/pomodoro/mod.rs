//! Pomodoro-style session planning.
//!
//! Lays out a work/break schedule inside a fixed time budget. The
//! schedule always starts with a work session at minute 0 and alternates
//! work and breaks; when the remaining budget cannot fit a full session,
//! the final session is truncated to end exactly at the budget. After
//! every N-th work session the following break is a long break.
//!
//! # References
//!
//! Cirillo (2006), "The Pomodoro Technique"; the 52-17 split popularized
//! by DeskTime usage studies.

mod config;
mod planner;

pub use config::{PlanError, PomodoroConfig, Technique};
pub use planner::{PomodoroPlanner, Session, SessionKind};
