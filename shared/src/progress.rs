//! Weight goal progress tracking
//!
//! Turns start, current and goal weight into a completion percentage and
//! the distance covered and left. Journeys may be a loss, a gain or pure
//! maintenance (goal equals start), and every combination yields a result.

use serde::{Deserialize, Serialize};

/// Which way the journey goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Gain,
    Loss,
    Maintain,
}

impl Direction {
    /// Classify a journey by comparing goal and start weight
    pub fn classify(start_weight: f64, goal_weight: f64) -> Self {
        if goal_weight > start_weight {
            Direction::Gain
        } else if goal_weight == start_weight {
            Direction::Maintain
        } else {
            Direction::Loss
        }
    }
}

/// Start, current and goal weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightJourney {
    #[serde(alias = "startWeight")]
    pub start_weight: f64,
    #[serde(alias = "currentWeight")]
    pub current_weight: f64,
    #[serde(alias = "goalWeight")]
    pub goal_weight: f64,
}

impl WeightJourney {
    pub fn new(start_weight: f64, current_weight: f64, goal_weight: f64) -> Self {
        Self {
            start_weight,
            current_weight,
            goal_weight,
        }
    }

    pub fn progress(&self) -> GoalProgress {
        compute_progress(self.start_weight, self.current_weight, self.goal_weight)
    }
}

/// Progress towards a weight goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Completion in `[0, 100]`
    pub percentage: f64,
    /// Absolute change from start, 2 decimals
    pub changed: f64,
    /// Absolute distance to goal, 2 decimals
    pub remaining: f64,
    pub direction: Direction,
}

impl GoalProgress {
    pub fn is_complete(&self) -> bool {
        self.percentage >= 100.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate progress from start to goal weight
///
/// Maintenance journeys report 100% unconditionally. Otherwise
/// `(start - current) / (start - goal) * 100`, clamped to `[0, 100]`, so
/// overshooting the goal saturates at 100 and regressing past the start
/// stays at 0. `changed` and `remaining` are not clamped and still show
/// the overshoot.
pub fn compute_progress(start_weight: f64, current_weight: f64, goal_weight: f64) -> GoalProgress {
    let direction = Direction::classify(start_weight, goal_weight);

    let percentage = match direction {
        Direction::Maintain => 100.0,
        Direction::Gain | Direction::Loss => {
            let total_change_needed = start_weight - goal_weight;
            let current_change = start_weight - current_weight;
            let raw = current_change / total_change_needed * 100.0;
            // NaN only arises from non-finite input
            if raw.is_nan() {
                0.0
            } else {
                raw.clamp(0.0, 100.0)
            }
        }
    };

    GoalProgress {
        percentage,
        changed: round2((current_weight - start_weight).abs()),
        remaining: round2((goal_weight - current_weight).abs()),
        direction,
    }
}
