//! Normalization of loosely-typed task records.
//!
//! Each field has its own parse-with-default rule. None of them fail: a value
//! that cannot be understood is replaced by the field's default, exactly as if
//! the key had been left out.

use chrono::NaiveDate;
use serde_json::Value;

use super::{RawTask, Task, TaskId};

pub const DEFAULT_IMPORTANCE: i64 = 5;
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a due date from a loosely-typed value.
///
/// Only strings in `YYYY-MM-DD` form produce a date. Everything else,
/// including malformed strings, means "no due date".
pub fn parse_due_date(value: Option<&Value>) -> Option<NaiveDate> {
    match value? {
        Value::String(s) if !s.is_empty() => NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
        _ => None,
    }
}

/// Importance as an integer; floats are truncated.
///
/// A numeric zero counts as "not provided".
pub fn coerce_importance(value: Option<&Value>) -> i64 {
    let parsed = match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => None,
            Some(i) => Some(i),
            None => n
                .as_f64()
                .filter(|f| f.is_finite() && *f != 0.0)
                .map(|f| f.trunc() as i64),
        },
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.unwrap_or(DEFAULT_IMPORTANCE)
}

/// Estimated effort in hours. Zero and non-finite values count as "not provided".
pub fn coerce_hours(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|h| h.is_finite() && *h != 0.0)
        .unwrap_or(DEFAULT_ESTIMATED_HOURS)
}

/// Dependency ids plus the number of list entries that cannot name a task.
///
/// Anything that is not an array means "no dependencies". Unreadable entries
/// never reach the graph but still count towards the dependency penalty.
pub fn coerce_dependencies(value: Option<&Value>) -> (Vec<TaskId>, usize) {
    let Some(Value::Array(items)) = value else {
        if let Some(other) = value {
            tracing::debug!(value = %other, "dependencies is not a list, ignoring");
        }
        return (Vec::new(), 0);
    };

    let mut ids = Vec::with_capacity(items.len());
    let mut unresolved = 0;
    for item in items {
        match id_from_value(item) {
            Some(id) => ids.push(id),
            None => {
                tracing::debug!(value = %item, "dependency entry is not an id");
                unresolved += 1;
            }
        }
    }
    (ids, unresolved)
}

/// Task id, falling back to the task's position in the batch.
pub fn coerce_id(value: Option<&Value>, index: usize) -> TaskId {
    value
        .and_then(id_from_value)
        .unwrap_or(TaskId::Int(index as i64))
}

/// Display title, falling back to `"Task <position+1>"`.
pub fn coerce_title(value: Option<&Value>, index: usize) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => format!("Task {}", index + 1),
    }
}

fn id_from_value(value: &Value) -> Option<TaskId> {
    match value {
        Value::Number(n) => n.as_i64().map(TaskId::Int).or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| TaskId::Int(f as i64))
        }),
        Value::String(s) => Some(TaskId::Text(s.clone())),
        _ => None,
    }
}

/// Normalize one raw record found at `index` in its batch.
pub fn normalize_task(raw: &RawTask, index: usize) -> Task {
    let (dependencies, unresolved_dependencies) = coerce_dependencies(raw.dependencies.as_ref());
    Task {
        id: coerce_id(raw.id.as_ref(), index),
        title: coerce_title(raw.title.as_ref(), index),
        due_date: parse_due_date(raw.due_date.as_ref()),
        estimated_hours: coerce_hours(raw.estimated_hours.as_ref()),
        importance: coerce_importance(raw.importance.as_ref()),
        dependencies,
        unresolved_dependencies,
    }
}

/// Normalize a whole batch, assigning positional ids where missing.
pub fn normalize_all(raw: &[RawTask]) -> Vec<Task> {
    raw.iter()
        .enumerate()
        .map(|(index, task)| normalize_task(task, index))
        .collect()
}
