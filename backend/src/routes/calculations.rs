//! Calculation API routes
//!
//! Each endpoint takes the numbers it needs in the body and returns the
//! result; nothing is read from or written to storage.

use crate::error::ApiResult;
use crate::services::CalculationService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use nutrition_tracker_shared::types::{
    CalorieTargetRequest, CalorieTargetResponse, HydrationGoalRequest, HydrationGoalResponse,
    NutritionGoalsRequest, NutritionGoalsResponse, ProgressRequest, ProgressResponse,
};

/// Create calculation routes
pub fn calculation_routes() -> Router<AppState> {
    Router::new()
        .route("/calorie-target", post(calorie_target))
        .route("/progress", post(progress))
        .route("/nutrition-goals", post(nutrition_goals))
        .route("/hydration-goal", post(hydration_goal))
}

/// POST /api/v1/calculations/calorie-target
///
/// Missing measurements are not an error: the response carries the
/// fallback target and lists what was missing.
async fn calorie_target(
    Json(req): Json<CalorieTargetRequest>,
) -> ApiResult<Json<CalorieTargetResponse>> {
    Ok(Json(CalculationService::calorie_target(&req)))
}

/// POST /api/v1/calculations/progress
async fn progress(Json(req): Json<ProgressRequest>) -> ApiResult<Json<ProgressResponse>> {
    Ok(Json(CalculationService::progress(&req)))
}

/// POST /api/v1/calculations/nutrition-goals
async fn nutrition_goals(
    Json(req): Json<NutritionGoalsRequest>,
) -> ApiResult<Json<NutritionGoalsResponse>> {
    Ok(Json(CalculationService::nutrition_goals(&req)))
}

/// POST /api/v1/calculations/hydration-goal
async fn hydration_goal(
    Json(req): Json<HydrationGoalRequest>,
) -> ApiResult<Json<HydrationGoalResponse>> {
    Ok(Json(CalculationService::hydration_goal(&req)))
}
