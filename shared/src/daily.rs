//! Daily energy log
//!
//! Meals and workouts are picked from fixed catalogs; the logged amount
//! times the catalog rate gives the calories for each entry. The day's
//! summary is a plain reduction over those entries.

use crate::errors::CoreError;
use crate::validation::{validate_meal_weight, validate_workout_duration};
use serde::{Deserialize, Serialize};

/// Meal catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    pub id: String,
    pub name: String,
    pub calories_per_gram: f64,
}

/// Workout catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutItem {
    pub id: String,
    pub name: String,
    pub calories_per_minute: f64,
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    pub name: String,
    pub weight_g: i32,
    pub calories: i32,
}

/// A logged workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub name: String,
    pub duration_min: i32,
    pub calories_burned: i32,
}

/// Calories for a meal portion
pub fn meal_calories(grams: i32, calories_per_gram: f64) -> i32 {
    (grams as f64 * calories_per_gram).round() as i32
}

/// Calories burned by a workout
pub fn workout_calories(minutes: i32, calories_per_minute: f64) -> i32 {
    (minutes as f64 * calories_per_minute).round() as i32
}

impl MealItem {
    /// Log a portion of this meal
    pub fn log(&self, grams: i32) -> Result<MealEntry, CoreError> {
        validate_meal_weight(grams)?;
        Ok(MealEntry {
            name: self.name.clone(),
            weight_g: grams,
            calories: meal_calories(grams, self.calories_per_gram),
        })
    }
}

impl WorkoutItem {
    /// Log a session of this workout
    pub fn log(&self, minutes: i32) -> Result<WorkoutEntry, CoreError> {
        validate_workout_duration(minutes)?;
        Ok(WorkoutEntry {
            name: self.name.clone(),
            duration_min: minutes,
            calories_burned: workout_calories(minutes, self.calories_per_minute),
        })
    }
}

/// Calories in, out and net for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailySummary {
    pub calories_in: i64,
    pub calories_burned: i64,
    pub net_calories: i64,
    pub meal_count: usize,
    pub workout_count: usize,
}

impl DailySummary {
    pub fn from_entries(meals: &[MealEntry], workouts: &[WorkoutEntry]) -> Self {
        let calories_in: i64 = meals.iter().map(|m| m.calories as i64).sum();
        let calories_burned: i64 = workouts.iter().map(|w| w.calories_burned as i64).sum();

        Self {
            calories_in,
            calories_burned,
            net_calories: calories_in - calories_burned,
            meal_count: meals.len(),
            workout_count: workouts.len(),
        }
    }
}

/// Fill level of a daily target ring
///
/// `percentage` is not capped; `overflow_percentage` is the part past 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntakeProgress {
    pub percentage: f64,
    pub overflow_percentage: f64,
    pub is_over: bool,
}

/// Compare an intake against its target
///
/// A non-positive target is treated as 1 so the ratio stays defined.
pub fn intake_progress(value: f64, target: f64) -> IntakeProgress {
    let safe_target = if target > 0.0 { target } else { 1.0 };
    let percentage = value / safe_target * 100.0;
    let is_over = percentage > 100.0;

    IntakeProgress {
        percentage,
        overflow_percentage: if is_over { percentage - 100.0 } else { 0.0 },
        is_over,
    }
}
