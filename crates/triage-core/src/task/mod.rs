//! Task records flowing through the ranking pipeline.
//!
//! Three shapes exist for one task over the lifetime of a single call:
//!
//! - [`RawTask`]: caller-supplied, every field optional and loosely typed.
//! - [`Task`]: the normalized record with every default applied.
//! - [`ScoredTask`]: the normalized record plus graph-derived signals and the
//!   final score. Built once, never mutated afterwards.

pub mod normalize;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::scoring::PriorityTier;

pub use normalize::{normalize_all, normalize_task, parse_due_date};

/// Identifier of a task within one batch.
///
/// Ids arrive either as JSON integers (including positional defaults) or as
/// strings. `1` and `"1"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(n) => write!(f, "{n}"),
            TaskId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Int(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Text(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        TaskId::Text(s)
    }
}

impl From<TaskId> for Value {
    fn from(id: TaskId) -> Self {
        match id {
            TaskId::Int(n) => Value::from(n),
            TaskId::Text(s) => Value::String(s),
        }
    }
}

/// Caller-supplied task record.
///
/// Both an absent key and an explicit `null` deserialize to `None`. Keys that
/// the pipeline derives itself (`dependents_count`, `in_cycle`, `score`,
/// `explanation`) are ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Value>,
}

impl RawTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        let id: TaskId = id.into();
        self.id = Some(Value::from(id));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Value::String(title.into()));
        self
    }

    /// Set an already-parsed due date.
    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(Value::String(date.format("%Y-%m-%d").to_string()));
        self
    }

    /// Set a due date from free text; unparseable text means "no due date".
    pub fn with_due_date_str(mut self, date: impl Into<String>) -> Self {
        self.due_date = Some(Value::String(date.into()));
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = serde_json::Number::from_f64(hours).map(Value::Number);
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(Value::from(importance));
        self
    }

    pub fn with_dependencies<I, T>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        let deps: Vec<Value> = deps
            .into_iter()
            .map(|d| Value::from(Into::<TaskId>::into(d)))
            .collect();
        self.dependencies = Some(Value::Array(deps));
        self
    }
}

/// Fully-defaulted task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_hours: f64,
    pub importance: i64,
    pub dependencies: Vec<TaskId>,
    /// Dependency list entries that could not be read as ids
    #[serde(default, skip_serializing_if = "is_zero")]
    pub unresolved_dependencies: usize,
}

impl Task {
    /// Every entry of the dependency list, resolvable or not.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len() + self.unresolved_dependencies
    }
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// A task annotated with dependency signals and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    /// Number of tasks in the batch that list this one as a dependency
    pub dependents_count: usize,
    /// Whether this task sits on a circular dependency chain
    pub in_cycle: bool,
    /// Score rounded to two decimals
    pub score: f64,
    pub priority: PriorityTier,
    /// `; `-joined scoring reasons
    pub explanation: String,
}

impl ScoredTask {
    pub fn id(&self) -> &TaskId {
        &self.task.id
    }

    pub fn title(&self) -> &str {
        &self.task.title
    }
}
