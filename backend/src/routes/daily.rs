//! Daily log routes

use crate::error::ApiResult;
use crate::services::DailyLogService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use nutrition_tracker_shared::types::{DailySummaryRequest, DailySummaryResponse};

/// Create daily log routes
pub fn daily_routes() -> Router<AppState> {
    Router::new().route("/summary", post(summarize_day))
}

/// POST /api/v1/daily/summary
///
/// Meals and workouts are referenced by catalog id. Unknown ids are a 404,
/// out-of-range amounts a 400.
async fn summarize_day(
    State(state): State<AppState>,
    Json(req): Json<DailySummaryRequest>,
) -> ApiResult<Json<DailySummaryResponse>> {
    let summary = DailyLogService::summarize(state.catalog(), &req)?;
    Ok(Json(summary))
}
