//! # Triage Core Library
//!
//! Heuristic task prioritization. Given a batch of loosely-typed task records
//! this library scores each task under a weighting strategy, analyses the
//! dependency graph between tasks and returns them ranked by score.
//!
//! ## Architecture
//!
//! - **Normalization**: per-field parse-with-default rules turn a [`RawTask`]
//!   into a fully populated [`Task`]
//! - **Graph**: dependents counts and cycle detection over one batch
//! - **Scoring**: additive, explainable score per task
//! - **Ranking**: the pipeline tying it together, plus top-N suggestions
//!
//! ## Key Components
//!
//! - [`Ranker`]: runs the pipeline for one strategy and one "today"
//! - [`DependencyGraph`]: dependency and reverse-dependency maps
//! - [`Strategy`]: named weighting profiles
//! - [`Config`]: user defaults for strategy and suggestion size
//!
//! ```
//! use triage_core::{rank, RawTask};
//!
//! let tasks = vec![
//!     RawTask::new().with_title("Quick fix").with_hours(0.5),
//!     RawTask::new().with_title("Rewrite").with_hours(20.0),
//! ];
//! let ranked = rank(&tasks, "fastest_wins");
//! assert_eq!(ranked[0].title(), "Quick fix");
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod ranking;
pub mod scoring;
pub mod strategy;
pub mod task;

pub use config::{Config, RankingConfig};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use graph::{check_unique_ids, detect_cycles, DependencyGraph};
pub use ranking::{
    parse_task_list, rank, suggest, tasks_from_value, Ranker, Suggestion, DEFAULT_SUGGEST_LIMIT,
};
pub use scoring::{score_task, PriorityTier, ScoreBreakdown, ScoringInput, UrgencyBucket};
pub use strategy::{Strategy, StrategyWeights};
pub use task::{
    normalize_all, normalize_task, parse_due_date, RawTask, ScoredTask, Task, TaskId,
};
