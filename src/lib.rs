//! Focus-session toolkit for deep work.
//!
//! Provides pure, synchronous utilities for structuring a work session:
//!
//! - **Prioritize**: rank a list of tasks by a weighted combination of
//!   importance, inverse effort, and deadline urgency, or by raw deadline
//!   proximity.
//! - **Pomodoro**: plan a work/break schedule within a fixed time budget,
//!   with technique presets and long-break cycling.
//! - **Breaks**: suggest a break activity matched to energy level and
//!   time worked.
//! - **Affirmation**: pick a personalized affirmation weighted by mood
//!   and energy.
//!
//! # Design
//!
//! Every operation is a stateless transform over caller-owned inputs:
//! no I/O, no persistence, no shared state across calls. Inputs are
//! validated eagerly and the first offending value is reported with a
//! descriptive error; nothing is partially computed.
//!
//! Operations that depend on the current time (deadline urgency) have a
//! deterministic `_at(now)` variant, and operations that draw randomness
//! (break and affirmation selection) accept an explicit seed.

pub mod affirmation;
pub mod breaks;
pub mod pomodoro;
pub mod prioritize;
