//! Calculation service
//!
//! Thin layer over the shared calculators: picks the weekly goal, applies
//! the profile defaults and shapes the API responses. Nothing here is
//! stored.

use nutrition_tracker_shared::types::{
    CalorieTargetRequest, CalorieTargetResponse, HydrationGoalRequest, HydrationGoalResponse,
    NutritionGoalsRequest, NutritionGoalsResponse, ProgressRequest, ProgressResponse,
};
use nutrition_tracker_shared::validation::missing_profile_fields;
use nutrition_tracker_shared::{
    calculate_hydration_goal_ml, compute_energy_breakdown, compute_nutrition_goals,
    hydration_progress, ml_to_cups, ActivityTier, WeeklyGoal, DEFAULT_HYDRATION_GOAL_ML,
};
use tracing::debug;

/// Unit reported with calorie values
pub const CALORIE_UNIT: &str = "kcal/day";

/// Unit reported with weight values
pub const WEIGHT_UNIT: &str = "kg";

pub struct CalculationService;

impl CalculationService {
    /// Daily calorie target with the steps that produced it
    pub fn calorie_target(req: &CalorieTargetRequest) -> CalorieTargetResponse {
        let goal = req
            .weekly_goal
            .as_deref()
            .map(WeeklyGoal::from_tag)
            .unwrap_or_default();
        let breakdown = compute_energy_breakdown(&req.profile, goal);

        let missing_fields = if breakdown.used_fallback {
            let missing = missing_profile_fields(&req.profile);
            debug!(missing = ?missing, "Incomplete profile, using fallback calorie target");
            missing
        } else {
            Vec::new()
        };

        debug!(
            weekly_goal = %goal,
            tdee = ?breakdown.tdee,
            target = breakdown.daily_target,
            "Calculated calorie target"
        );

        CalorieTargetResponse {
            daily_calorie_target: breakdown.daily_target,
            weekly_goal: goal,
            bmr: breakdown.bmr,
            tdee: breakdown.tdee,
            activity_multiplier: breakdown.activity_multiplier,
            goal_adjustment: breakdown.goal_adjustment,
            used_fallback: breakdown.used_fallback,
            missing_fields,
            unit: CALORIE_UNIT.to_string(),
        }
    }

    /// Progress from start towards goal weight
    pub fn progress(req: &ProgressRequest) -> ProgressResponse {
        let progress = req.progress();

        debug!(
            direction = ?progress.direction,
            percentage = progress.percentage,
            "Calculated goal progress"
        );

        ProgressResponse {
            is_complete: progress.is_complete(),
            progress,
            unit: WEIGHT_UNIT.to_string(),
        }
    }

    /// Calorie, macro and BMI goals
    ///
    /// An explicit weekly goal tag wins; otherwise the goal is inferred from
    /// current and goal weight.
    pub fn nutrition_goals(req: &NutritionGoalsRequest) -> NutritionGoalsResponse {
        let goal = match req.weekly_goal.as_deref() {
            Some(tag) => WeeklyGoal::from_tag(tag),
            None => WeeklyGoal::infer(req.profile.weight_kg, req.goal_weight),
        };
        let goals = compute_nutrition_goals(&req.profile, goal);

        debug!(
            weekly_goal = %goal,
            calories = goals.daily_calorie_goal,
            protein = goals.protein_goal,
            fats = goals.fats_goal,
            carbs = goals.carbs_goal,
            "Calculated nutrition goals"
        );

        NutritionGoalsResponse {
            daily_calorie_goal: goals.daily_calorie_goal,
            protein_goal: goals.protein_goal,
            fats_goal: goals.fats_goal,
            carbs_goal: goals.carbs_goal,
            bmi: goals.bmi,
            weekly_goal: goal,
        }
    }

    /// Recommended daily water intake, plus progress when intake is given
    pub fn hydration_goal(req: &HydrationGoalRequest) -> HydrationGoalResponse {
        let activity = ActivityTier::from_text(req.activity_rate.as_deref());
        let daily_goal_ml = calculate_hydration_goal_ml(req.weight_kg, activity);
        let used_default = !req.weight_kg.is_some_and(|w| w.is_finite() && w > 0.0);

        if used_default {
            debug!(
                goal_ml = DEFAULT_HYDRATION_GOAL_ML,
                "No usable weight, using default hydration goal"
            );
        }

        HydrationGoalResponse {
            daily_goal_ml,
            recommended_cups: ml_to_cups(daily_goal_ml),
            used_default,
            progress: req
                .consumed_ml
                .map(|consumed| hydration_progress(consumed.max(0), daily_goal_ml)),
        }
    }
}
