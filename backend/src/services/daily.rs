//! Daily log service
//!
//! Resolves a day's meal and workout entries against the catalog and
//! reduces them to the dashboard totals: calories in, calories burned,
//! net calories, water, and the fill level of the calorie and water rings.

use crate::error::ApiError;
use crate::services::catalog::Catalog;
use chrono::Utc;
use nutrition_tracker_shared::types::{DailySummaryRequest, DailySummaryResponse};
use nutrition_tracker_shared::validation::validate_water_amount;
use nutrition_tracker_shared::{
    hydration_progress, intake_progress, total_water_ml, CoreError, DailySummary, MealEntry,
    WorkoutEntry,
};
use tracing::debug;
use validator::Validate;

pub struct DailyLogService;

impl DailyLogService {
    /// Summarize a day of logged meals, workouts and water
    pub fn summarize(
        catalog: &Catalog,
        req: &DailySummaryRequest,
    ) -> Result<DailySummaryResponse, ApiError> {
        req.validate()?;

        let meals = req
            .meals
            .iter()
            .map(|input| -> Result<MealEntry, ApiError> {
                input.validate()?;
                let item = catalog
                    .find_meal(&input.meal_id)
                    .ok_or_else(|| ApiError::NotFound(format!("Meal '{}'", input.meal_id)))?;
                Ok(item.log(input.weight_g)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let workouts = req
            .workouts
            .iter()
            .map(|input| -> Result<WorkoutEntry, ApiError> {
                input.validate()?;
                let item = catalog.find_workout(&input.workout_id).ok_or_else(|| {
                    ApiError::NotFound(format!("Workout '{}'", input.workout_id))
                })?;
                Ok(item.log(input.duration_min)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for amount in &req.water {
            validate_water_amount(*amount).map_err(CoreError::from)?;
        }

        let summary = DailySummary::from_entries(&meals, &workouts);
        let water_total_ml = total_water_ml(&req.water);
        let date = req.date.unwrap_or_else(|| Utc::now().date_naive());

        debug!(
            %date,
            meals = summary.meal_count,
            workouts = summary.workout_count,
            calories_in = summary.calories_in,
            calories_burned = summary.calories_burned,
            water_ml = water_total_ml,
            "Summarized daily log"
        );

        Ok(DailySummaryResponse {
            date,
            calorie_progress: req
                .daily_calorie_goal
                .map(|goal| intake_progress(summary.calories_in as f64, goal as f64)),
            hydration_progress: req
                .daily_water_goal_ml
                .map(|goal| hydration_progress(water_total_ml, goal)),
            meals,
            workouts,
            summary,
            water_total_ml,
        })
    }
}
