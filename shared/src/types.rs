//! API request and response types

use crate::daily::{DailySummary, IntakeProgress, MealEntry, MealItem, WorkoutEntry, WorkoutItem};
use crate::energy::{BiometricProfile, WeeklyGoal};
use crate::progress::{GoalProgress, WeightJourney};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Calculation Types
// ============================================================================

/// Calorie target request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalorieTargetRequest {
    #[serde(flatten)]
    pub profile: BiometricProfile,
    /// Weekly goal tag (lose-fast, lose-slow, maintain, gain-slow, gain-fast)
    #[serde(default, alias = "weeklyGoal")]
    pub weekly_goal: Option<String>,
}

/// Calorie target response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieTargetResponse {
    pub daily_calorie_target: i32,
    pub weekly_goal: WeeklyGoal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdee: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_multiplier: Option<f64>,
    pub goal_adjustment: i32,
    pub used_fallback: bool,
    /// Profile fields that forced the fallback
    pub missing_fields: Vec<String>,
    pub unit: String,
}

/// Goal progress request: start, current and goal weight
pub type ProgressRequest = WeightJourney;

/// Goal progress response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub progress: GoalProgress,
    pub is_complete: bool,
    pub unit: String,
}

/// Nutrition goals request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionGoalsRequest {
    #[serde(flatten)]
    pub profile: BiometricProfile,
    #[serde(default, alias = "weeklyGoal")]
    pub weekly_goal: Option<String>,
    /// Used to infer the weekly goal when no tag is given
    #[serde(default, alias = "goalWeight")]
    pub goal_weight: Option<f64>,
}

/// Nutrition goals response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionGoalsResponse {
    pub daily_calorie_goal: i32,
    pub protein_goal: i32,
    pub fats_goal: i32,
    pub carbs_goal: i32,
    pub bmi: f64,
    pub weekly_goal: WeeklyGoal,
}

/// Hydration goal request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HydrationGoalRequest {
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,
    #[serde(default, alias = "activityRate")]
    pub activity_rate: Option<String>,
    /// Water already logged today
    #[serde(default)]
    pub consumed_ml: Option<i64>,
}

/// Hydration goal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationGoalResponse {
    pub daily_goal_ml: i32,
    pub recommended_cups: f64,
    pub used_default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<IntakeProgress>,
}

// ============================================================================
// Catalog and Daily Log Types
// ============================================================================

/// Meal catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCatalogResponse {
    pub meals: Vec<MealItem>,
}

/// Workout catalog response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutCatalogResponse {
    pub workouts: Vec<WorkoutItem>,
}

/// Meal logged by catalog id
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MealLogInput {
    #[validate(length(min = 1, max = 64))]
    pub meal_id: String,
    pub weight_g: i32,
}

/// Workout logged by catalog id
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WorkoutLogInput {
    #[validate(length(min = 1, max = 64))]
    pub workout_id: String,
    pub duration_min: i32,
}

/// Daily summary request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DailySummaryRequest {
    /// Day being summarised (defaults to today, UTC)
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub meals: Vec<MealLogInput>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub workouts: Vec<WorkoutLogInput>,
    /// Water entries in ml
    #[serde(default)]
    #[validate(length(max = 100))]
    pub water: Vec<i32>,
    #[serde(default)]
    pub daily_calorie_goal: Option<i32>,
    #[serde(default)]
    pub daily_water_goal_ml: Option<i32>,
}

/// Daily summary response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryResponse {
    pub date: NaiveDate,
    pub meals: Vec<MealEntry>,
    pub workouts: Vec<WorkoutEntry>,
    #[serde(flatten)]
    pub summary: DailySummary,
    pub water_total_ml: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_progress: Option<IntakeProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hydration_progress: Option<IntakeProgress>,
}
