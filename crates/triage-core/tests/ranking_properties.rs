//! Property tests for ranking invariants.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use std::collections::HashMap;
use triage_core::{PriorityTier, Ranker, RawTask, Strategy as Weighting, TaskId};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

fn weighting() -> impl Strategy<Value = Weighting> {
    prop_oneof![
        Just(Weighting::SmartBalance),
        Just(Weighting::FastestWins),
        Just(Weighting::HighImpact),
        Just(Weighting::DeadlineDriven),
    ]
}

/// Batches of up to 12 tasks with positional ids whose dependencies point at
/// ids in `0..16` (so some are dangling).
fn batch() -> impl Strategy<Value = Vec<RawTask>> {
    prop::collection::vec(
        (
            prop::option::of(-10i64..20),
            prop::option::of(1u32..40),
            prop::option::of(1i64..=10),
            prop::collection::vec(0i64..16, 0..4),
        ),
        0..12,
    )
    .prop_map(|shapes| {
        shapes
            .into_iter()
            .map(|(due, half_hours, importance, deps)| {
                let mut raw = RawTask::new().with_dependencies(deps);
                if let Some(days) = due {
                    raw = raw.with_due_date(today() + Duration::days(days));
                }
                if let Some(h) = half_hours {
                    raw = raw.with_hours(h as f64 / 2.0);
                }
                if let Some(i) = importance {
                    raw = raw.with_importance(i);
                }
                raw
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn ranked_output_is_sorted_and_stable(tasks in batch(), strategy in weighting()) {
        let ranked = Ranker::at(strategy, today()).rank(&tasks);
        prop_assert_eq!(ranked.len(), tasks.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id() < pair[1].id(), "ties must keep input order");
            }
        }
    }

    #[test]
    fn ranking_is_deterministic(tasks in batch(), strategy in weighting()) {
        let ranker = Ranker::at(strategy, today());
        prop_assert_eq!(ranker.rank(&tasks), ranker.rank(&tasks));
    }

    #[test]
    fn dependents_count_matches_references(tasks in batch()) {
        let ranked = Ranker::at(Weighting::SmartBalance, today()).rank(&tasks);
        let mut expected: HashMap<TaskId, usize> = HashMap::new();
        for task in &ranked {
            for dep in &task.task.dependencies {
                *expected.entry(dep.clone()).or_insert(0) += 1;
            }
        }
        for task in &ranked {
            prop_assert_eq!(task.dependents_count, expected.get(task.id()).copied().unwrap_or(0));
        }
    }

    #[test]
    fn self_dependency_always_flags_cycle(tasks in batch()) {
        let ranked = Ranker::at(Weighting::SmartBalance, today()).rank(&tasks);
        for task in &ranked {
            if task.task.dependencies.contains(task.id()) {
                prop_assert!(task.in_cycle);
            }
        }
    }

    #[test]
    fn tasks_without_dependencies_are_never_in_cycle(tasks in batch()) {
        let ranked = Ranker::at(Weighting::SmartBalance, today()).rank(&tasks);
        for task in &ranked {
            if task.task.dependencies.is_empty() {
                prop_assert!(!task.in_cycle);
            }
        }
    }

    #[test]
    fn scores_have_two_decimals(tasks in batch(), strategy in weighting()) {
        for task in Ranker::at(strategy, today()).rank(&tasks) {
            let cents = task.score * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn priority_follows_score(tasks in batch(), strategy in weighting()) {
        for task in Ranker::at(strategy, today()).rank(&tasks) {
            prop_assert_eq!(task.priority, PriorityTier::from_score(task.score));
        }
    }
}
