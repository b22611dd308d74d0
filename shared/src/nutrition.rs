//! Macro goals and BMI
//!
//! Protein and fat targets scale with body weight; carbohydrates take
//! whatever is left of the daily calorie target.

use crate::energy::{compute_daily_calorie_target, positive, BiometricProfile, WeeklyGoal};
use serde::{Deserialize, Serialize};

/// Protein grams per kg of body weight
pub const PROTEIN_G_PER_KG: f64 = 2.0;

/// Fat grams per kg of body weight
pub const FAT_G_PER_KG: f64 = 0.8;

const KCAL_PER_G_PROTEIN: i64 = 4;
const KCAL_PER_G_CARBS: i64 = 4;
const KCAL_PER_G_FAT: i64 = 9;

/// Calculate BMI rounded to one decimal
///
/// Formula: BMI = weight(kg) / height(m)². Returns 0.0 when either input
/// is missing or not positive.
pub fn calculate_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> f64 {
    match (positive(weight_kg), positive(height_cm)) {
        (Some(weight), Some(height)) => {
            let height_m = height / 100.0;
            (weight / (height_m * height_m) * 10.0).round() / 10.0
        }
        _ => 0.0,
    }
}

/// Daily macro targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: i32,
    pub fat_g: i32,
    pub carbs_g: i32,
}

/// Split a calorie target into macros
///
/// Grams are truncated, and carbs never go negative even when protein and
/// fat alone exceed the calorie target.
pub fn calculate_macro_targets(weight_kg: f64, daily_calories: i32) -> MacroTargets {
    let weight = positive(Some(weight_kg)).unwrap_or(0.0);
    let protein_g = (weight * PROTEIN_G_PER_KG) as i32;
    let fat_g = (weight * FAT_G_PER_KG) as i32;

    let remaining = daily_calories as i64
        - (protein_g as i64 * KCAL_PER_G_PROTEIN + fat_g as i64 * KCAL_PER_G_FAT);
    let carbs_g = (remaining / KCAL_PER_G_CARBS).max(0) as i32;

    MacroTargets {
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// Calorie, macro and BMI goals for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub daily_calorie_goal: i32,
    pub protein_goal: i32,
    pub fats_goal: i32,
    pub carbs_goal: i32,
    pub bmi: f64,
}

/// Calculate nutrition goals from a profile and weekly goal
///
/// Incomplete profiles get the calorie fallback and macros computed for
/// zero body weight, so all of the fallback goes to carbohydrates.
pub fn compute_nutrition_goals(profile: &BiometricProfile, goal: WeeklyGoal) -> NutritionGoals {
    let daily_calorie_goal = compute_daily_calorie_target(profile, goal);
    let weight = profile.resolve().map_or(0.0, |p| p.weight_kg);
    let macros = calculate_macro_targets(weight, daily_calorie_goal);

    NutritionGoals {
        daily_calorie_goal,
        protein_goal: macros.protein_g,
        fats_goal: macros.fat_g,
        carbs_goal: macros.carbs_g,
        bmi: calculate_bmi(profile.weight_kg, profile.height_cm),
    }
}
