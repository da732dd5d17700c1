//! Schedule construction.

use std::fmt;

use super::config::{PlanError, PomodoroConfig};

/// Kind of a planned session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Work => "work",
            SessionKind::ShortBreak => "short_break",
            SessionKind::LongBreak => "long_break",
        }
    }

    /// True for either break kind.
    pub fn is_break(&self) -> bool {
        !matches!(self, SessionKind::Work)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One planned session in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// 1-based sequential session number.
    pub number: usize,

    /// Work, short break, or long break.
    pub kind: SessionKind,

    /// Session length in minutes. Shorter than the configured length
    /// only for the final truncated session.
    pub duration_minutes: u32,

    /// Inclusive start minute, counted from 0.
    pub start_minute: u32,

    /// Exclusive end minute; never exceeds the total budget.
    pub end_minute: u32,
}

/// Builds pomodoro schedules from a validated configuration.
///
/// # Usage
///
/// ```
/// use deepwork::pomodoro::{PomodoroConfig, PomodoroPlanner, SessionKind};
///
/// let schedule = PomodoroPlanner::plan(&PomodoroConfig::new(60))?;
/// assert_eq!(schedule[0].kind, SessionKind::Work);
/// assert_eq!(schedule[0].start_minute, 0);
/// # Ok::<(), deepwork::pomodoro::PlanError>(())
/// ```
pub struct PomodoroPlanner;

impl PomodoroPlanner {
    /// Plans a schedule within `config.total_minutes`.
    ///
    /// The schedule starts with work at minute 0 and alternates work and
    /// breaks until the budget is exhausted; the final session is
    /// truncated to fit exactly. Zero-length sessions are never emitted.
    /// After every `long_break_interval`-th work session the next break
    /// is a long break.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] if the configuration is invalid; see
    /// [`PomodoroConfig::validate`].
    pub fn plan(config: &PomodoroConfig) -> Result<Vec<Session>, PlanError> {
        config.validate()?;
        let (work, short, long) = config.resolved_lengths();

        let total = config.total_minutes;
        let mut schedule = Vec::new();
        let mut clock = 0u32;
        let mut works_completed = 0u32;
        let mut next_is_work = true;

        while clock < total {
            let (kind, full_length) = if next_is_work {
                (SessionKind::Work, work)
            } else if works_completed % config.long_break_interval == 0 {
                (SessionKind::LongBreak, long)
            } else {
                (SessionKind::ShortBreak, short)
            };

            // clock < total, so the truncated duration is always positive.
            let duration = full_length.min(total - clock);
            schedule.push(Session {
                number: schedule.len() + 1,
                kind,
                duration_minutes: duration,
                start_minute: clock,
                end_minute: clock + duration,
            });

            clock += duration;
            if next_is_work {
                works_completed += 1;
            }
            next_is_work = !next_is_work;
        }

        Ok(schedule)
    }
}
