//! Ranking pipeline.
//!
//! raw records → normalization → dependency graph → cycle detection →
//! per-task scoring → stable sort by descending score.
//!
//! Every call works on its own copy of the batch; nothing is shared or
//! mutated across calls.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::error::{json_type_name, Result, ValidationError};
use crate::graph::{check_unique_ids, DependencyGraph};
use crate::scoring::{score_task, PriorityTier, ScoringInput};
use crate::strategy::Strategy;
use crate::task::{normalize_all, RawTask, ScoredTask, Task};

/// Number of tasks returned by `suggest` unless told otherwise.
pub const DEFAULT_SUGGEST_LIMIT: usize = 3;

const EMPTY_SUMMARY: &str = "No tasks provided.";

/// Top tasks plus a one-line-per-task summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Canonical name of the strategy that was applied
    pub strategy: String,
    #[serde(rename = "suggested_tasks", alias = "suggested")]
    pub suggested: Vec<ScoredTask>,
    pub summary: String,
}

impl Suggestion {
    /// Keep the first `limit` entries of an already ranked batch.
    pub fn from_ranked(strategy: impl Into<String>, mut ranked: Vec<ScoredTask>, limit: usize) -> Self {
        ranked.truncate(limit);
        let summary = summarize(&ranked);
        Self {
            strategy: strategy.into(),
            suggested: ranked,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suggested.is_empty()
    }
}

fn summarize(tasks: &[ScoredTask]) -> String {
    if tasks.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                "{}. '{}' (Score: {:?}) – {}",
                i + 1,
                t.title(),
                t.score,
                t.explanation
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Scores and orders task batches under one strategy as of one day.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    strategy: Strategy,
    today: NaiveDate,
}

impl Ranker {
    /// Ranker using the local calendar date.
    pub fn new(strategy: Strategy) -> Self {
        Self::at(strategy, Local::now().date_naive())
    }

    /// Ranker pinned to a specific "today".
    pub fn at(strategy: Strategy, today: NaiveDate) -> Self {
        Self { strategy, today }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Score every task and sort by descending score; ties keep input order.
    pub fn rank(&self, raw: &[RawTask]) -> Vec<ScoredTask> {
        let tasks = normalize_all(raw);
        if let Err(err) = check_unique_ids(&tasks) {
            tracing::warn!(%err, "batch contains duplicate ids; dependency attribution is shared");
        }
        self.rank_normalized(tasks)
    }

    /// Like [`Ranker::rank`], but refuses batches with duplicate ids.
    pub fn rank_checked(&self, raw: &[RawTask]) -> Result<Vec<ScoredTask>, ValidationError> {
        let tasks = normalize_all(raw);
        check_unique_ids(&tasks)?;
        Ok(self.rank_normalized(tasks))
    }

    /// Rank and keep the top `limit` tasks with a summary, reporting this
    /// ranker's strategy by its canonical name.
    pub fn suggest(&self, raw: &[RawTask], limit: usize) -> Suggestion {
        Suggestion::from_ranked(self.strategy.name(), self.rank(raw), limit)
    }

    /// Like [`Ranker::suggest`], but refuses batches with duplicate ids.
    pub fn suggest_checked(&self, raw: &[RawTask], limit: usize) -> Result<Suggestion, ValidationError> {
        Ok(Suggestion::from_ranked(
            self.strategy.name(),
            self.rank_checked(raw)?,
            limit,
        ))
    }

    fn rank_normalized(&self, tasks: Vec<Task>) -> Vec<ScoredTask> {
        tracing::debug!(
            tasks = tasks.len(),
            strategy = %self.strategy,
            today = %self.today,
            "ranking batch"
        );

        let graph = DependencyGraph::build(&tasks);
        let cycles = graph.detect_cycles();
        if !cycles.is_empty() {
            tracing::warn!(count = cycles.len(), "circular dependencies detected");
        }

        let mut scored: Vec<ScoredTask> = tasks
            .into_iter()
            .map(|task| {
                let dependents_count = graph.dependents_count(&task.id);
                let in_cycle = cycles.contains(&task.id);
                let breakdown = score_task(
                    &ScoringInput {
                        task: &task,
                        dependents_count,
                        in_cycle,
                    },
                    self.strategy,
                    self.today,
                );
                ScoredTask {
                    explanation: breakdown.explanation(),
                    priority: PriorityTier::from_score(breakdown.score),
                    score: breakdown.score,
                    dependents_count,
                    in_cycle,
                    task,
                }
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }
}

/// Rank a batch under the named strategy as of the local date.
pub fn rank(tasks: &[RawTask], strategy: &str) -> Vec<ScoredTask> {
    Ranker::new(Strategy::from_name(strategy)).rank(tasks)
}

/// Top `limit` tasks under the named strategy.
///
/// Same as [`Ranker::suggest`]: the result names the strategy actually
/// applied, so an unknown name reports the default.
pub fn suggest(tasks: &[RawTask], strategy: &str, limit: usize) -> Suggestion {
    Ranker::new(Strategy::from_name(strategy)).suggest(tasks, limit)
}

/// Parse a JSON payload that must be a list of task records.
pub fn parse_task_list(json: &str) -> Result<Vec<RawTask>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(tasks_from_value(value)?)
}

/// Accept a decoded payload only when it is list-shaped.
///
/// Entries that are not objects become empty records and receive every default.
pub fn tasks_from_value(value: Value) -> Result<Vec<RawTask>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::NotAList {
            found: json_type_name(&value),
        });
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(_) => serde_json::from_value(item).unwrap_or_else(|err| {
                tracing::debug!(index, %err, "unreadable task record, using defaults");
                RawTask::default()
            }),
            other => {
                tracing::debug!(index, found = json_type_name(&other), "task record is not an object");
                RawTask::default()
            }
        })
        .collect())
}
