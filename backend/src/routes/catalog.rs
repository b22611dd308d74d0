//! Meal and workout catalog routes

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use nutrition_tracker_shared::types::{MealCatalogResponse, WorkoutCatalogResponse};

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/workouts", get(list_workouts))
}

/// GET /api/v1/catalog/meals
async fn list_meals(State(state): State<AppState>) -> Json<MealCatalogResponse> {
    Json(MealCatalogResponse {
        meals: state.catalog().meals.clone(),
    })
}

/// GET /api/v1/catalog/workouts
async fn list_workouts(State(state): State<AppState>) -> Json<WorkoutCatalogResponse> {
    Json(WorkoutCatalogResponse {
        workouts: state.catalog().workouts.clone(),
    })
}
