//! Input validation for logged entries
//!
//! The calculators accept anything; these checks guard the values a user
//! logs (meal grams, workout minutes, water) before they reach a total.

use crate::energy::BiometricProfile;
use thiserror::Error;

/// Upper bound for a single meal entry, in grams
pub const MAX_MEAL_WEIGHT_G: i32 = 5000;

/// Upper bound for a single workout, in minutes (24 hours)
pub const MAX_WORKOUT_MINUTES: i32 = 1440;

/// Upper bound for a single water entry, in ml
pub const MAX_WATER_ENTRY_ML: i32 = 5000;

/// Validation error with field context
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{display_label}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Validate a meal weight in grams
pub fn validate_meal_weight(grams: i32) -> Result<(), ValidationError> {
    if grams <= 0 {
        return Err(ValidationError::new(
            "weight_g",
            "Please enter a valid weight in grams",
        ));
    }
    if grams > MAX_MEAL_WEIGHT_G {
        return Err(ValidationError::new(
            "weight_g",
            &format!("must be at most {} g", MAX_MEAL_WEIGHT_G),
        ));
    }
    Ok(())
}

/// Validate a workout duration in minutes
pub fn validate_workout_duration(minutes: i32) -> Result<(), ValidationError> {
    if minutes <= 0 {
        return Err(ValidationError::new(
            "duration_min",
            "Please enter a valid duration",
        ));
    }
    if minutes > MAX_WORKOUT_MINUTES {
        return Err(ValidationError::new(
            "duration_min",
            "Duration cannot exceed 24 hours",
        ));
    }
    Ok(())
}

/// Validate a single water entry in ml
pub fn validate_water_amount(amount_ml: i32) -> Result<(), ValidationError> {
    if amount_ml <= 0 {
        return Err(ValidationError::new("amount_ml", "Amount must be positive"));
    }
    if amount_ml > MAX_WATER_ENTRY_ML {
        return Err(ValidationError::new(
            "amount_ml",
            &format!("must be at most {} ml", MAX_WATER_ENTRY_ML),
        ));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "weight" | "weight_kg" => "Current Weight",
        "height" | "height_cm" => "Height",
        "age" | "age_years" => "Age",
        "gender" => "Gender",
        "activity_rate" => "Activity Level",
        "start_weight" => "Start Weight",
        "goal_weight" => "Goal Weight",
        "weekly_goal" => "Weekly Goal",
        "weight_g" => "Meal Weight",
        "duration_min" => "Workout Duration",
        "amount_ml" => "Water Amount",
        _ => field_name,
    }
}

/// Labels of the measurements that force the calorie fallback
pub fn missing_profile_fields(profile: &BiometricProfile) -> Vec<String> {
    let usable = |v: Option<f64>| v.is_some_and(|x| x.is_finite() && x > 0.0);

    let mut missing = Vec::new();
    if !usable(profile.weight_kg) {
        missing.push(get_field_display_label("weight").to_string());
    }
    if !usable(profile.height_cm) {
        missing.push(get_field_display_label("height").to_string());
    }
    if !usable(profile.age_years) {
        missing.push(get_field_display_label("age").to_string());
    }
    missing
}
