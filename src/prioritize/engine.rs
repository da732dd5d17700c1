//! Scoring and ranking engine.
//!
//! Validates the whole input up front, scores each task with the chosen
//! method, and returns a freshly ordered sequence, highest score first.
//! Ties keep their original relative order (stable sort).

use chrono::{DateTime, Utc};

use super::error::ValidationError;
use super::types::{Method, Task};
use super::weights::Weights;

/// Guards the inverse-effort term against division by zero. A zero-effort
/// task scores `1/EFFORT_EPSILON` on that term, ranking it at the top of
/// the effort-driven contribution.
const EFFORT_EPSILON: f64 = 1e-6;

/// Half-life of deadline urgency, in days.
///
/// Urgency is 1.0 for overdue or immediate deadlines and halves every
/// 3.5 days of remaining time, so it is bounded in (0, 1] and decays
/// toward 0 for far-future deadlines. The half-life approximates the
/// common bucketing of "due tomorrow / this week / next week" into
/// steadily halving urgency.
const URGENCY_HALF_LIFE_DAYS: f64 = 3.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A task paired with its computed priority score and final rank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredTask {
    /// The input task, unchanged.
    pub task: Task,

    /// Computed priority score. Higher means rank earlier.
    pub score: f64,

    /// 1-based position in the ranked output.
    pub rank: usize,
}

/// Ranks tasks by priority, evaluated at the current time.
///
/// Returns a new sequence containing clones of the input tasks, ordered
/// by descending priority score; ties preserve input order. See
/// [`prioritize_tasks_at`] for the deterministic core and the scoring
/// formulas.
///
/// # Errors
///
/// Returns [`ValidationError`] if the task list is empty, if `weights`
/// is missing or invalid for the weighted method, or if any task has a
/// non-finite field, negative effort, or a missing required deadline.
/// Validation happens before any scoring; nothing is partially computed.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use deepwork::prioritize::{prioritize_tasks, Method, Task, Weights};
///
/// let tasks = vec![
///     Task::new("Fix bug", 5.0, 2.0).with_deadline(Utc::now() + Duration::days(1)),
///     Task::new("Write docs", 3.0, 4.0).with_deadline(Utc::now() + Duration::days(10)),
/// ];
/// let ranked = prioritize_tasks(&tasks, Method::Weighted, Some(&Weights::default()))?;
/// assert_eq!(ranked[0].name, "Fix bug");
/// # Ok::<(), deepwork::prioritize::ValidationError>(())
/// ```
pub fn prioritize_tasks(
    tasks: &[Task],
    method: Method,
    weights: Option<&Weights>,
) -> Result<Vec<Task>, ValidationError> {
    let scored = prioritize_tasks_at(tasks, method, weights, Utc::now())?;
    Ok(scored.into_iter().map(|s| s.task).collect())
}

/// Ranks tasks by priority at an explicit reference time.
///
/// This is the deterministic core of [`prioritize_tasks`]: urgency and
/// time-until-deadline are measured against `now`, so results are
/// reproducible in tests.
///
/// Scoring:
///
/// - **Weighted**: `w_imp * importance + w_eff * (1 / max(effort, ε)) +
///   w_dl * urgency(deadline)`, with urgency saturating at 1.0 for
///   overdue deadlines and halving every 3.5 days of remaining time.
///   Tasks without deadlines contribute nothing to the urgency term and
///   are only accepted when `deadline_urgency` is zero.
/// - **Deadline**: negated seconds until deadline; due sooner = higher
///   score. `weights` is ignored.
///
/// # Errors
///
/// Same as [`prioritize_tasks`].
pub fn prioritize_tasks_at(
    tasks: &[Task],
    method: Method,
    weights: Option<&Weights>,
    now: DateTime<Utc>,
) -> Result<Vec<ScoredTask>, ValidationError> {
    let weights = validate(tasks, method, weights)?;

    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .map(|task| {
            let score = match method {
                Method::Weighted => weighted_score(task, weights, now),
                Method::Deadline => deadline_score(task, now),
            };
            ScoredTask {
                task: task.clone(),
                score,
                rank: 0,
            }
        })
        .collect();

    // Descending by score; stable, so ties keep input order. Scores are
    // finite after validation, making partial_cmp total here.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, s) in scored.iter_mut().enumerate() {
        s.rank = i + 1;
    }

    Ok(scored)
}

/// Validates the whole input before any scoring. Task checks run in
/// index order and the first failure wins.
///
/// Returns the weights to score with (`None` for the deadline method).
fn validate<'w>(
    tasks: &[Task],
    method: Method,
    weights: Option<&'w Weights>,
) -> Result<Option<&'w Weights>, ValidationError> {
    if tasks.is_empty() {
        return Err(ValidationError::EmptyTasks);
    }

    let weights = match method {
        Method::Weighted => {
            let w = weights.ok_or(ValidationError::MissingWeights)?;
            w.validate()?;
            Some(w)
        }
        // The deadline method takes no configuration; extra weights are ignored.
        Method::Deadline => None,
    };

    let deadline_required = match method {
        Method::Deadline => true,
        Method::Weighted => weights.is_some_and(|w| w.deadline_urgency > 0.0),
    };

    for (index, task) in tasks.iter().enumerate() {
        for (field, value) in [("importance", task.importance), ("effort", task.effort)] {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteField {
                    index,
                    field,
                    value,
                });
            }
        }
        if task.effort < 0.0 {
            return Err(ValidationError::NegativeEffort {
                index,
                value: task.effort,
            });
        }
        if deadline_required && task.deadline.is_none() {
            return Err(ValidationError::MissingDeadline {
                index,
                name: task.name.clone(),
            });
        }
    }

    Ok(weights)
}

fn weighted_score(task: &Task, weights: Option<&Weights>, now: DateTime<Utc>) -> f64 {
    let w = weights.expect("weighted scoring requires validated weights");
    let quickness = 1.0 / task.effort.max(EFFORT_EPSILON);
    let urgency_term = match task.deadline {
        Some(deadline) => w.deadline_urgency * urgency(deadline, now),
        // Validation only lets deadline-less tasks through when the
        // urgency coefficient is zero.
        None => 0.0,
    };
    w.importance * task.importance + w.effort * quickness + urgency_term
}

fn deadline_score(task: &Task, now: DateTime<Utc>) -> f64 {
    let deadline = task
        .deadline
        .expect("deadline method requires validated deadlines");
    -((deadline - now).num_seconds() as f64)
}

/// Maps time-until-deadline to a bounded urgency in (0, 1].
///
/// Overdue or immediate deadlines saturate at 1.0; beyond that, urgency
/// halves every [`URGENCY_HALF_LIFE_DAYS`], monotonically decreasing in
/// remaining time.
fn urgency(deadline: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days_left = (deadline - now).num_seconds() as f64 / SECONDS_PER_DAY;
    if days_left <= 0.0 {
        1.0
    } else {
        (-days_left / URGENCY_HALF_LIFE_DAYS * std::f64::consts::LN_2).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn task(name: &str, importance: f64, effort: f64) -> Task {
        Task::new(name, importance, effort)
    }

    #[test]
    fn test_empty_tasks_rejected() {
        let err = prioritize_tasks_at(&[], Method::Deadline, None, now()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTasks);
    }

    #[test]
    fn test_weighted_requires_weights() {
        let tasks = vec![task("a", 1.0, 1.0)];
        let err = prioritize_tasks_at(&tasks, Method::Weighted, None, now()).unwrap_err();
        assert_eq!(err, ValidationError::MissingWeights);
    }

    #[test]
    fn test_invalid_weights_rejected_before_scoring() {
        let tasks = vec![task("a", 1.0, 1.0)];
        let weights = Weights::default().with_importance(-1.0);
        let err =
            prioritize_tasks_at(&tasks, Method::Weighted, Some(&weights), now()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidWeight {
                field: "importance",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_negative_effort_reports_index() {
        let tasks = vec![task("ok", 1.0, 1.0), task("bad", 1.0, -2.0)];
        let err = prioritize_tasks_at(
            &tasks,
            Method::Weighted,
            Some(&Weights::default().with_deadline_urgency(0.0)),
            now(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::NegativeEffort { index: 1, value: -2.0 });
    }

    #[test]
    fn test_nan_importance_reports_field() {
        let tasks = vec![task("bad", f64::NAN, 1.0)];
        let err = prioritize_tasks_at(&tasks, Method::Deadline, None, now()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonFiniteField {
                index: 0,
                field: "importance",
                ..
            }
        ));
    }

    #[test]
    fn test_deadline_method_requires_deadlines() {
        let tasks = vec![
            task("has one", 1.0, 1.0).with_deadline(now() + Duration::days(1)),
            task("missing", 1.0, 1.0),
        ];
        let err = prioritize_tasks_at(&tasks, Method::Deadline, None, now()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingDeadline {
                index: 1,
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_weighted_requires_deadline_when_urgency_positive() {
        let tasks = vec![task("no deadline", 1.0, 1.0)];
        let err = prioritize_tasks_at(&tasks, Method::Weighted, Some(&Weights::default()), now())
            .unwrap_err();
        assert!(matches!(err, ValidationError::MissingDeadline { index: 0, .. }));
    }

    #[test]
    fn test_weighted_allows_missing_deadline_with_zero_urgency() {
        let tasks = vec![task("no deadline", 1.0, 1.0)];
        let weights = Weights::default().with_deadline_urgency(0.0);
        let ranked = prioritize_tasks_at(&tasks, Method::Weighted, Some(&weights), now()).unwrap();
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_deadline_method_orders_by_due_date() {
        let tasks = vec![
            task("a", 1.0, 1.0).with_deadline(now() + Duration::days(1)),
            task("b", 1.0, 1.0).with_deadline(now() + Duration::days(10)),
            task("c", 1.0, 1.0).with_deadline(now() + Duration::hours(1)),
        ];
        let ranked = prioritize_tasks_at(&tasks, Method::Deadline, None, now()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|s| s.task.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_deadline_method_ignores_weights() {
        let tasks = vec![
            task("later", 1.0, 1.0).with_deadline(now() + Duration::days(2)),
            task("sooner", 1.0, 1.0).with_deadline(now() + Duration::days(1)),
        ];
        let bogus = Weights::default().with_importance(1000.0);
        let ranked =
            prioritize_tasks_at(&tasks, Method::Deadline, Some(&bogus), now()).unwrap();
        assert_eq!(ranked[0].task.name, "sooner");
    }

    #[test]
    fn test_zero_effort_ranks_top_on_effort_term() {
        let weights = Weights::default()
            .with_importance(0.0)
            .with_effort(1.0)
            .with_deadline_urgency(0.0);
        let tasks = vec![
            task("slow", 1.0, 5.0),
            task("free", 1.0, 0.0),
            task("quick", 1.0, 1.0),
        ];
        let ranked = prioritize_tasks_at(&tasks, Method::Weighted, Some(&weights), now()).unwrap();
        assert_eq!(ranked[0].task.name, "free");
        assert!(ranked[0].score.is_finite());
    }

    #[test]
    fn test_closer_deadline_scores_higher_under_weighted() {
        let weights = Weights::default()
            .with_importance(0.0)
            .with_effort(0.0)
            .with_deadline_urgency(1.0);
        let tasks = vec![
            task("far", 1.0, 1.0).with_deadline(now() + Duration::days(30)),
            task("overdue", 1.0, 1.0).with_deadline(now() - Duration::days(1)),
            task("soon", 1.0, 1.0).with_deadline(now() + Duration::days(2)),
        ];
        let ranked = prioritize_tasks_at(&tasks, Method::Weighted, Some(&weights), now()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|s| s.task.name.as_str()).collect();
        assert_eq!(names, vec!["overdue", "soon", "far"]);
        // Overdue saturates at the urgency bound.
        assert!((ranked[0].score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        // Identical tasks produce identical scores; stability keeps them
        // in input order.
        let weights = Weights::default().with_deadline_urgency(0.0);
        let tasks = vec![
            task("first", 3.0, 2.0),
            task("second", 3.0, 2.0),
            task("third", 3.0, 2.0),
        ];
        let ranked = prioritize_tasks_at(&tasks, Method::Weighted, Some(&weights), now()).unwrap();
        let names: Vec<&str> = ranked.iter().map(|s| s.task.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(
            ranked.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let tasks = vec![
            task("a", 1.0, 1.0).with_deadline(now() + Duration::days(3)),
            task("b", 9.0, 1.0).with_deadline(now() + Duration::days(1)),
        ];
        let before = tasks.clone();
        let _ = prioritize_tasks_at(&tasks, Method::Weighted, Some(&Weights::default()), now())
            .unwrap();
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_urgency_bounds_and_monotonicity() {
        assert!((urgency(now() - Duration::days(5), now()) - 1.0).abs() < 1e-12);
        assert!((urgency(now(), now()) - 1.0).abs() < 1e-12);

        let mut last = 1.0;
        for days in [1, 3, 7, 14, 60] {
            let u = urgency(now() + Duration::days(days), now());
            assert!(u > 0.0 && u < last, "urgency must decay, got {u} at {days}d");
            last = u;
        }
    }

    #[test]
    fn test_urgency_half_life() {
        let half = Duration::hours((URGENCY_HALF_LIFE_DAYS * 24.0) as i64);
        let u = urgency(now() + half, now());
        assert!((u - 0.5).abs() < 1e-6);
    }

    // ---- Ranking laws ----

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        vec((0.0..10.0f64, 0.0..5.0f64, -10i64..30i64), 1..20).prop_map(|fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (importance, effort, days))| {
                    Task::new(format!("t{i}"), importance, effort)
                        .with_deadline(now() + Duration::days(days))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_output_is_permutation(tasks in arb_tasks()) {
            let ranked =
                prioritize_tasks_at(&tasks, Method::Weighted, Some(&Weights::default()), now())
                    .unwrap();

            let mut input_names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
            let mut output_names: Vec<&str> =
                ranked.iter().map(|s| s.task.name.as_str()).collect();
            input_names.sort_unstable();
            output_names.sort_unstable();
            prop_assert_eq!(input_names, output_names);
        }

        #[test]
        fn prop_scores_descend(tasks in arb_tasks()) {
            let ranked =
                prioritize_tasks_at(&tasks, Method::Weighted, Some(&Weights::default()), now())
                    .unwrap();
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }

        #[test]
        fn prop_deadline_method_sorts_by_time_remaining(tasks in arb_tasks()) {
            let ranked = prioritize_tasks_at(&tasks, Method::Deadline, None, now()).unwrap();
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].task.deadline <= pair[1].task.deadline);
            }
        }

        #[test]
        fn prop_equal_scores_keep_input_order(tasks in arb_tasks()) {
            let ranked =
                prioritize_tasks_at(&tasks, Method::Weighted, Some(&Weights::default()), now())
                    .unwrap();

            // Original index is recoverable from the generated name.
            let index_of = |s: &ScoredTask| -> usize { s.task.name[1..].parse().unwrap() };
            for pair in ranked.windows(2) {
                if pair[0].score == pair[1].score {
                    prop_assert!(index_of(&pair[0]) < index_of(&pair[1]));
                }
            }
        }
    }
}
