//! Weighting strategies for the scorer.
//!
//! | Strategy | Urgency | Importance | Quick bonus |
//! |----------|---------|------------|-------------|
//! | `smart_balance` (default) | 2.0 | 5 | 1.2 |
//! | `fastest_wins` | 1.5 | 3 | 1.5 |
//! | `high_impact` | 1.5 | 6 | 1.0 |
//! | `deadline_driven` | 3.0 | 4 | 1.0 |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weights applied by one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    /// Multiplier on the urgency bucket base (halved before use)
    pub urgency_weight: f64,
    /// Points per importance level
    pub importance_weight: f64,
    /// Multiplier on the quick-task bonus
    pub quick_bonus_factor: f64,
}

impl StrategyWeights {
    pub fn smart_balance() -> Self {
        Self {
            urgency_weight: 2.0,
            importance_weight: 5.0,
            quick_bonus_factor: 1.2,
        }
    }

    pub fn fastest_wins() -> Self {
        Self {
            urgency_weight: 1.5,
            importance_weight: 3.0,
            quick_bonus_factor: 1.5,
        }
    }

    pub fn high_impact() -> Self {
        Self {
            urgency_weight: 1.5,
            importance_weight: 6.0,
            quick_bonus_factor: 1.0,
        }
    }

    pub fn deadline_driven() -> Self {
        Self {
            urgency_weight: 3.0,
            importance_weight: 4.0,
            quick_bonus_factor: 1.0,
        }
    }
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self::smart_balance()
    }
}

/// Named weighting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

impl Strategy {
    /// Resolve a strategy by name. Unknown names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fastest_wins" => Strategy::FastestWins,
            "high_impact" => Strategy::HighImpact,
            "deadline_driven" => Strategy::DeadlineDriven,
            "smart_balance" => Strategy::SmartBalance,
            other => {
                tracing::debug!(strategy = other, "unknown strategy, using smart_balance");
                Strategy::SmartBalance
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "Balances urgency, importance and effort",
            Strategy::FastestWins => "Favors quick tasks for fast progress",
            Strategy::HighImpact => "Favors important tasks",
            Strategy::DeadlineDriven => "Favors tasks with close deadlines",
        }
    }

    pub fn weights(&self) -> StrategyWeights {
        match self {
            Strategy::SmartBalance => StrategyWeights::smart_balance(),
            Strategy::FastestWins => StrategyWeights::fastest_wins(),
            Strategy::HighImpact => StrategyWeights::high_impact(),
            Strategy::DeadlineDriven => StrategyWeights::deadline_driven(),
        }
    }

    pub fn all() -> [Strategy; 4] {
        [
            Strategy::SmartBalance,
            Strategy::FastestWins,
            Strategy::HighImpact,
            Strategy::DeadlineDriven,
        ]
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
