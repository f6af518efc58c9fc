//! Heuristic task scoring.
//!
//! A score is the sum of six independent contributions, each of which leaves
//! one line in the explanation (the dependents and cycle lines only when they
//! apply):
//!
//! | # | Term | Contribution |
//! |---|------|--------------|
//! | 1 | Urgency | bucket base × urgency weight / 2 |
//! | 2 | Importance | importance × importance weight |
//! | 3 | Effort | +25 / +15 × quick bonus, or −10 for large tasks |
//! | 4 | Dependencies | −5 per dependency, +5 when there are none |
//! | 5 | Dependents | +8 per task this one unblocks |
//! | 6 | Cycle | −30 when on a circular dependency chain |
//!
//! Scores depend only on the task, its graph signals, the strategy and the
//! date passed in as "today".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::strategy::{Strategy, StrategyWeights};
use crate::task::Task;

const VERY_QUICK_BONUS: f64 = 25.0;
const QUICK_BONUS: f64 = 15.0;
const LARGE_TASK_PENALTY: f64 = 10.0;
const DEPENDENCY_PENALTY: f64 = 5.0;
const NO_DEPENDENCY_BONUS: f64 = 5.0;
const DEPENDENT_BONUS: f64 = 8.0;
const CYCLE_PENALTY: f64 = 30.0;

/// Deadline proximity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyBucket {
    /// Due date already passed
    Overdue,
    /// Due today or tomorrow
    WithinOneDay,
    /// Due in 2-3 days
    WithinThreeDays,
    /// Due in 4-7 days
    WithinWeek,
    /// Due more than a week out
    Later,
}

impl UrgencyBucket {
    /// Bucket for a signed day difference (`due - today`).
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => UrgencyBucket::Overdue,
            0..=1 => UrgencyBucket::WithinOneDay,
            2..=3 => UrgencyBucket::WithinThreeDays,
            4..=7 => UrgencyBucket::WithinWeek,
            _ => UrgencyBucket::Later,
        }
    }

    pub fn base(&self) -> f64 {
        match self {
            UrgencyBucket::Overdue => 100.0,
            UrgencyBucket::WithinOneDay => 70.0,
            UrgencyBucket::WithinThreeDays => 50.0,
            UrgencyBucket::WithinWeek => 30.0,
            UrgencyBucket::Later => 0.0,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UrgencyBucket::Overdue => "Overdue task",
            UrgencyBucket::WithinOneDay => "Due within 1 day",
            UrgencyBucket::WithinThreeDays => "Due within 3 days",
            UrgencyBucket::WithinWeek => "Due within 7 days",
            UrgencyBucket::Later => "Due later than 7 days",
        }
    }
}

/// Coarse priority band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 100.0 {
            PriorityTier::High
        } else if score >= 60.0 {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::High => "High",
            PriorityTier::Medium => "Medium",
            PriorityTier::Low => "Low",
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the scorer looks at for one task.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub task: &'a Task,
    pub dependents_count: usize,
    pub in_cycle: bool,
}

impl<'a> ScoringInput<'a> {
    /// A task scored in isolation: no dependents, not in a cycle.
    pub fn standalone(task: &'a Task) -> Self {
        Self {
            task,
            dependents_count: 0,
            in_cycle: false,
        }
    }
}

/// Score plus the ordered reasons behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Total, rounded to two decimals
    pub score: f64,
    /// One line per contribution, in evaluation order
    pub reasons: Vec<String>,
}

impl ScoreBreakdown {
    pub fn explanation(&self) -> String {
        self.reasons.join("; ")
    }
}

/// Score one task under `strategy` as of `today`.
pub fn score_task(input: &ScoringInput<'_>, strategy: Strategy, today: NaiveDate) -> ScoreBreakdown {
    score_with_weights(input, &strategy.weights(), today)
}

/// Score one task with explicit weights.
pub fn score_with_weights(
    input: &ScoringInput<'_>,
    weights: &StrategyWeights,
    today: NaiveDate,
) -> ScoreBreakdown {
    let task = input.task;
    let mut score = 0.0;
    let mut reasons = Vec::with_capacity(6);

    // Urgency
    match task.due_date {
        Some(due) => {
            let bucket = UrgencyBucket::from_days((due - today).num_days());
            if bucket == UrgencyBucket::Later {
                reasons.push(format!("{} → +0", bucket.label()));
            } else {
                let bonus = bucket.base() * weights.urgency_weight / 2.0;
                score += bonus;
                reasons.push(format!("{} → +{:.0}", bucket.label(), bonus));
            }
        }
        None => reasons.push("No due date provided → treated as low urgency".to_string()),
    }

    // Importance
    let importance_score = task.importance as f64 * weights.importance_weight;
    score += importance_score;
    reasons.push(format!(
        "Importance {} × {} → +{}",
        task.importance, weights.importance_weight, importance_score
    ));

    // Effort
    let hours = task.estimated_hours;
    if hours <= 1.0 {
        let bonus = VERY_QUICK_BONUS * weights.quick_bonus_factor;
        score += bonus;
        reasons.push(format!("Very quick task (≤1h) → +{bonus:.0}"));
    } else if hours <= 2.0 {
        let bonus = QUICK_BONUS * weights.quick_bonus_factor;
        score += bonus;
        reasons.push(format!("Quick task (≤2h) → +{bonus:.0}"));
    } else if hours >= 8.0 {
        score -= LARGE_TASK_PENALTY;
        reasons.push(format!("Large task (≥8h) → -{LARGE_TASK_PENALTY}"));
    } else {
        reasons.push("Medium effort → +0".to_string());
    }

    // Dependency cost
    let dep_count = task.dependency_count();
    if dep_count > 0 {
        let penalty = DEPENDENCY_PENALTY * dep_count as f64;
        score -= penalty;
        reasons.push(format!("{dep_count} dependencies → -{penalty}"));
    } else {
        score += NO_DEPENDENCY_BONUS;
        reasons.push(format!("No dependencies → +{NO_DEPENDENCY_BONUS}"));
    }

    // Dependents bonus
    if input.dependents_count > 0 {
        let bonus = DEPENDENT_BONUS * input.dependents_count as f64;
        score += bonus;
        reasons.push(format!(
            "Unblocks {} other task(s) → +{}",
            input.dependents_count, bonus
        ));
    }

    // Cycle penalty
    if input.in_cycle {
        score -= CYCLE_PENALTY;
        reasons.push(format!(
            "In circular dependency group → -{CYCLE_PENALTY} (needs attention)"
        ));
    }

    ScoreBreakdown {
        score: round2(score),
        reasons,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
