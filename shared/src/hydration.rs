//! Hydration goal calculations

use crate::daily::{intake_progress, IntakeProgress};
use crate::energy::{positive, ActivityTier};

/// Goal used when no usable body weight is known
pub const DEFAULT_HYDRATION_GOAL_ML: i32 = 2500;

/// Base water need per kg of body weight
pub const HYDRATION_ML_PER_KG: f64 = 33.0;

/// Millilitres in one cup, for display conversions
pub const ML_PER_CUP: f64 = 250.0;

/// Activity scaling for the water goal
pub fn hydration_factor(activity: ActivityTier) -> f64 {
    match activity {
        ActivityTier::Sedentary => 1.0,
        ActivityTier::Low => 1.1,
        ActivityTier::Moderate => 1.2,
        ActivityTier::High => 1.3,
    }
}

/// Calculate recommended daily water intake
///
/// goal = weight_kg × 33 ml × activity factor, rounded to the nearest 100 ml.
pub fn calculate_hydration_goal_ml(weight_kg: Option<f64>, activity: ActivityTier) -> i32 {
    match positive(weight_kg) {
        Some(weight) => {
            let goal = weight * HYDRATION_ML_PER_KG * hydration_factor(activity);
            ((goal / 100.0).round() * 100.0) as i32
        }
        None => DEFAULT_HYDRATION_GOAL_ML,
    }
}

/// Sum of logged water, ignoring non-positive entries
pub fn total_water_ml(entries: &[i32]) -> i64 {
    entries.iter().filter(|ml| **ml > 0).map(|ml| *ml as i64).sum()
}

/// Goal in cups, one decimal
pub fn ml_to_cups(ml: i32) -> f64 {
    (ml as f64 / ML_PER_CUP * 10.0).round() / 10.0
}

pub fn hydration_progress(consumed_ml: i64, goal_ml: i32) -> IntakeProgress {
    intake_progress(consumed_ml as f64, goal_ml as f64)
}
