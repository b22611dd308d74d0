//! Nutrition Tracker WASM Module
//!
//! This crate provides WebAssembly bindings so the browser client runs the
//! same calculators as the backend. Numbers the client does not have yet
//! are passed as 0 (or an empty string) and trigger the usual defaults.

use nutrition_tracker_shared::{
    self as shared, ActivityTier, BiometricProfile, Direction, WeeklyGoal,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn known(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn profile(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: &str,
    activity: &str,
) -> BiometricProfile {
    BiometricProfile {
        weight_kg: known(weight_kg),
        height_cm: known(height_cm),
        age_years: known(age_years),
        gender: text(gender),
        activity_rate: text(activity),
    }
}

/// Daily calorie target (kcal/day)
///
/// Returns 2000 when weight, height or age is 0, negative or not a number.
#[wasm_bindgen]
pub fn compute_daily_calorie_target(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: &str,
    activity: &str,
    weekly_goal: &str,
) -> i32 {
    let profile = profile(weight_kg, height_cm, age_years, gender, activity);
    shared::compute_daily_calorie_target(&profile, WeeklyGoal::from_tag(weekly_goal))
}

/// Calorie target with its intermediate steps, as JSON
#[wasm_bindgen]
pub fn compute_energy_breakdown_json(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: &str,
    activity: &str,
    weekly_goal: &str,
) -> Result<String, JsError> {
    let profile = profile(weight_kg, height_cm, age_years, gender, activity);
    let breakdown =
        shared::compute_energy_breakdown(&profile, WeeklyGoal::from_tag(weekly_goal));
    Ok(serde_json::to_string(&breakdown)?)
}

/// Goal progress as seen by the client
#[wasm_bindgen]
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    percentage: f64,
    changed: f64,
    remaining: f64,
    direction: Direction,
}

#[wasm_bindgen]
impl ProgressSummary {
    #[wasm_bindgen(getter)]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    #[wasm_bindgen(getter)]
    pub fn changed(&self) -> f64 {
        self.changed
    }

    #[wasm_bindgen(getter)]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// "gain", "loss" or "maintain"
    #[wasm_bindgen(getter)]
    pub fn direction(&self) -> String {
        match self.direction {
            Direction::Gain => "gain",
            Direction::Loss => "loss",
            Direction::Maintain => "maintain",
        }
        .to_string()
    }

    #[wasm_bindgen(getter, js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.percentage >= 100.0
    }

    #[wasm_bindgen(js_name = toJsonString)]
    pub fn to_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Progress from start towards goal weight
#[wasm_bindgen]
pub fn compute_progress(
    start_weight: f64,
    current_weight: f64,
    goal_weight: f64,
) -> ProgressSummary {
    let progress = shared::compute_progress(start_weight, current_weight, goal_weight);
    ProgressSummary {
        percentage: progress.percentage,
        changed: progress.changed,
        remaining: progress.remaining,
        direction: progress.direction,
    }
}

/// Recommended daily water intake in ml
#[wasm_bindgen]
pub fn calculate_hydration_goal_ml(weight_kg: f64, activity: &str) -> i32 {
    let activity = ActivityTier::from_text(text(activity).as_deref());
    shared::calculate_hydration_goal_ml(known(weight_kg), activity)
}

/// BMI from weight (kg) and height (cm), one decimal; 0 when unknown
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    shared::calculate_bmi(known(weight_kg), known(height_cm))
}

/// Calories for a meal portion
#[wasm_bindgen]
pub fn meal_calories(grams: i32, calories_per_gram: f64) -> i32 {
    shared::meal_calories(grams, calories_per_gram)
}

/// Calories burned by a workout
#[wasm_bindgen]
pub fn workout_calories(minutes: i32, calories_per_minute: f64) -> i32 {
    shared::workout_calories(minutes, calories_per_minute)
}
