//! Energy balance calculations
//!
//! Converts a biometric profile and a weekly weight-change goal into a
//! target daily calorie intake.
//!
//! # Contract
//!
//! Every input resolves to a number. Nothing here returns an error:
//!
//! | Input                         | Missing / invalid            | Resolution                         |
//! |-------------------------------|------------------------------|------------------------------------|
//! | weight, height, age           | absent, zero, negative, NaN  | short-circuit to `2000` kcal       |
//! | gender                        | absent or not "male"         | female constant (−161)             |
//! | activity rate                 | absent or unrecognised       | sedentary (×1.2)                   |
//! | weekly goal                   | unrecognised tag             | maintain (±0)                      |
//!
//! The final target is never below [`MIN_CALORIE_TARGET`].

use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target returned when weight, height or age is unusable
pub const FALLBACK_CALORIE_TARGET: i32 = 2000;

/// Lowest daily target ever recommended
pub const MIN_CALORIE_TARGET: i32 = 1200;

/// Single normalisation step for free-text categorical input
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

// ============================================================================
// Categorical inputs
// ============================================================================

/// Gender bucket for the Mifflin-St Jeor constant
///
/// Only two buckets are distinguished; anything that is not "male" uses the
/// female constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Other,
}

impl Gender {
    /// Parse free-text gender input
    pub fn from_text(value: Option<&str>) -> Self {
        match value.map(normalize).as_deref() {
            Some("male") => Gender::Male,
            _ => Gender::Other,
        }
    }

    /// Constant added to the shared BMR base
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Other => -161.0,
        }
    }
}

/// Activity tier used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTier {
    /// Little or no exercise
    #[default]
    Sedentary,
    Low,
    Moderate,
    High,
}

impl ActivityTier {
    /// Parse free-text activity input
    ///
    /// Substring match, first hit wins: "low", then "mod", then "high".
    /// A value such as "lowkey-high" therefore resolves to [`ActivityTier::Low`].
    pub fn from_text(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return ActivityTier::Sedentary;
        };
        let activity = normalize(raw);
        if activity.contains("low") {
            ActivityTier::Low
        } else if activity.contains("mod") {
            ActivityTier::Moderate
        } else if activity.contains("high") {
            ActivityTier::High
        } else {
            ActivityTier::Sedentary
        }
    }

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityTier::Sedentary => 1.2,
            ActivityTier::Low => 1.3,
            ActivityTier::Moderate => 1.5,
            ActivityTier::High => 1.7,
        }
    }
}

/// Target weekly rate of weight change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeeklyGoal {
    LoseFast,
    LoseSlow,
    #[default]
    Maintain,
    GainSlow,
    GainFast,
}

impl WeeklyGoal {
    pub const ALL: [WeeklyGoal; 5] = [
        WeeklyGoal::LoseFast,
        WeeklyGoal::LoseSlow,
        WeeklyGoal::Maintain,
        WeeklyGoal::GainSlow,
        WeeklyGoal::GainFast,
    ];

    /// Parse a goal tag, treating anything unrecognised as maintenance
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Pick a goal from the gap between current and goal weight
    ///
    /// Goal below current weight means a slow cut, above means a slow bulk.
    /// Missing or unusable weights fall back to maintenance.
    pub fn infer(current_weight_kg: Option<f64>, goal_weight_kg: Option<f64>) -> Self {
        match (positive(current_weight_kg), positive(goal_weight_kg)) {
            (Some(current), Some(goal)) if goal < current => WeeklyGoal::LoseSlow,
            (Some(current), Some(goal)) if goal > current => WeeklyGoal::GainSlow,
            _ => WeeklyGoal::Maintain,
        }
    }

    /// Daily calorie offset applied to TDEE
    pub fn calorie_offset(&self) -> i32 {
        match self {
            WeeklyGoal::LoseFast => -550,
            WeeklyGoal::LoseSlow => -275,
            WeeklyGoal::Maintain => 0,
            WeeklyGoal::GainSlow => 275,
            WeeklyGoal::GainFast => 550,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            WeeklyGoal::LoseFast => "lose-fast",
            WeeklyGoal::LoseSlow => "lose-slow",
            WeeklyGoal::Maintain => "maintain",
            WeeklyGoal::GainSlow => "gain-slow",
            WeeklyGoal::GainFast => "gain-fast",
        }
    }
}

impl fmt::Display for WeeklyGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

impl FromStr for WeeklyGoal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).replace(|c: char| c == '_' || c == ' ', "-").as_str() {
            "lose-fast" => Ok(WeeklyGoal::LoseFast),
            "lose-slow" => Ok(WeeklyGoal::LoseSlow),
            "maintain" => Ok(WeeklyGoal::Maintain),
            "gain-slow" => Ok(WeeklyGoal::GainSlow),
            "gain-fast" => Ok(WeeklyGoal::GainFast),
            _ => Err(CoreError::UnknownWeeklyGoal(s.to_string())),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Biometric profile as supplied by the profile source
///
/// Every field is optional; the default table in the module docs decides
/// what an absent value means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,
    #[serde(default, alias = "height")]
    pub height_cm: Option<f64>,
    /// Fractional ages are kept as given
    #[serde(default, alias = "age")]
    pub age_years: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, alias = "activityRate")]
    pub activity_rate: Option<String>,
}

impl BiometricProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: impl Into<f64>) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
            age_years: Some(age_years.into()),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_activity(mut self, activity_rate: impl Into<String>) -> Self {
        self.activity_rate = Some(activity_rate.into());
        self
    }

    /// Apply the default table
    ///
    /// Returns `None` when weight, height or age is unusable.
    pub fn resolve(&self) -> Option<ResolvedProfile> {
        let weight_kg = positive(self.weight_kg)?;
        let height_cm = positive(self.height_cm)?;
        let age_years = positive(self.age_years)?;

        Some(ResolvedProfile {
            weight_kg,
            height_cm,
            age_years,
            gender: Gender::from_text(self.gender.as_deref()),
            activity: ActivityTier::from_text(self.activity_rate.as_deref()),
        })
    }

    /// Whether all measurements needed for a real calculation are present
    pub fn is_complete(&self) -> bool {
        self.resolve().is_some()
    }
}

/// Profile with defaults applied and categories parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub gender: Gender,
    pub activity: ActivityTier,
}

pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

// ============================================================================
// Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age(y) + 5
/// Others: BMR = 10 × weight(kg) + 6.25 × height(cm) − 5 × age(y) − 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    base + gender.bmr_offset()
}

/// Maintenance calories: BMR scaled by the activity multiplier, rounded once
///
/// Out-of-range results saturate at the `i32` bounds.
pub fn calculate_tdee(bmr: f64, activity: ActivityTier) -> i32 {
    (bmr * activity.multiplier()).round() as i32
}

/// Step-by-step result of the calorie target calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// `None` when the fallback fired
    pub bmr: Option<f64>,
    pub activity_multiplier: Option<f64>,
    pub tdee: Option<i32>,
    pub goal_adjustment: i32,
    pub daily_target: i32,
    pub used_fallback: bool,
}

/// Calculate the daily calorie target with its intermediate values
pub fn compute_energy_breakdown(profile: &BiometricProfile, goal: WeeklyGoal) -> EnergyBreakdown {
    let Some(resolved) = profile.resolve() else {
        return EnergyBreakdown {
            bmr: None,
            activity_multiplier: None,
            tdee: None,
            goal_adjustment: 0,
            daily_target: FALLBACK_CALORIE_TARGET,
            used_fallback: true,
        };
    };

    let bmr = calculate_bmr(
        resolved.weight_kg,
        resolved.height_cm,
        resolved.age_years,
        resolved.gender,
    );
    let tdee = calculate_tdee(bmr, resolved.activity);
    let adjustment = goal.calorie_offset();

    EnergyBreakdown {
        bmr: Some(bmr),
        activity_multiplier: Some(resolved.activity.multiplier()),
        tdee: Some(tdee),
        goal_adjustment: adjustment,
        daily_target: tdee.saturating_add(adjustment).max(MIN_CALORIE_TARGET),
        used_fallback: false,
    }
}

/// Calculate the target daily calorie intake (kcal/day)
///
/// Always an integer ≥ 1200, or exactly 2000 for an incomplete profile.
pub fn compute_daily_calorie_target(profile: &BiometricProfile, goal: WeeklyGoal) -> i32 {
    compute_energy_breakdown(profile, goal).daily_target
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn sample_profile() -> BiometricProfile {
        BiometricProfile::new(74.0, 178.0, 28)
            .with_gender("Male")
            .with_activity("High")
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[rstest]
    #[case(Some("Male"), Gender::Male)]
    #[case(Some("  MALE "), Gender::Male)]
    #[case(Some("female"), Gender::Other)]
    #[case(Some("non-binary"), Gender::Other)]
    #[case(None, Gender::Other)]
    fn test_gender_parsing(#[case] input: Option<&str>, #[case] expected: Gender) {
        assert_eq!(Gender::from_text(input), expected);
    }

    #[rstest]
    #[case(Some("Low"), ActivityTier::Low)]
    #[case(Some("Moderate"), ActivityTier::Moderate)]
    #[case(Some("moderately active"), ActivityTier::Moderate)]
    #[case(Some("HIGH"), ActivityTier::High)]
    #[case(Some("sedentary"), ActivityTier::Sedentary)]
    #[case(Some(""), ActivityTier::Sedentary)]
    #[case(Some("athlete"), ActivityTier::Sedentary)]
    #[case(None, ActivityTier::Sedentary)]
    fn test_activity_parsing(#[case] input: Option<&str>, #[case] expected: ActivityTier) {
        assert_eq!(ActivityTier::from_text(input), expected);
    }

    #[test]
    fn test_activity_first_match_wins() {
        // "low" is checked first, even when another tier also matches
        assert_eq!(ActivityTier::from_text(Some("lowkey-high")), ActivityTier::Low);
        assert_eq!(ActivityTier::from_text(Some("high-moderate")), ActivityTier::Moderate);
    }

    #[rstest]
    #[case("lose-fast", WeeklyGoal::LoseFast)]
    #[case("LOSE_SLOW", WeeklyGoal::LoseSlow)]
    #[case(" maintain ", WeeklyGoal::Maintain)]
    #[case("gain slow", WeeklyGoal::GainSlow)]
    #[case("gain-fast", WeeklyGoal::GainFast)]
    fn test_weekly_goal_parsing(#[case] input: &str, #[case] expected: WeeklyGoal) {
        assert_eq!(input.parse::<WeeklyGoal>().unwrap(), expected);
        assert_eq!(WeeklyGoal::from_tag(input), expected);
    }

    #[test]
    fn test_unknown_weekly_goal() {
        assert_eq!(
            "bulk".parse::<WeeklyGoal>(),
            Err(CoreError::UnknownWeeklyGoal("bulk".to_string()))
        );
        assert_eq!(WeeklyGoal::from_tag("bulk"), WeeklyGoal::Maintain);
        assert_eq!(WeeklyGoal::from_tag(""), WeeklyGoal::Maintain);
    }

    #[test]
    fn test_weekly_goal_tag_roundtrip() {
        for goal in WeeklyGoal::ALL {
            assert_eq!(WeeklyGoal::from_tag(goal.as_tag()), goal);
        }
    }

    #[test]
    fn test_weekly_goal_infer() {
        assert_eq!(WeeklyGoal::infer(Some(80.0), Some(70.0)), WeeklyGoal::LoseSlow);
        assert_eq!(WeeklyGoal::infer(Some(70.0), Some(80.0)), WeeklyGoal::GainSlow);
        assert_eq!(WeeklyGoal::infer(Some(70.0), Some(70.0)), WeeklyGoal::Maintain);
        assert_eq!(WeeklyGoal::infer(None, Some(70.0)), WeeklyGoal::Maintain);
        assert_eq!(WeeklyGoal::infer(Some(70.0), Some(0.0)), WeeklyGoal::Maintain);
    }

    #[test]
    fn test_profile_deserializes_client_field_names() {
        let json = r#"{"weight":74,"height":178,"age":28,"gender":"Male","activityRate":"High"}"#;
        let profile: BiometricProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, sample_profile());

        let empty: BiometricProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BiometricProfile::default());
    }

    // =========================================================================
    // Calorie target
    // =========================================================================

    #[test]
    fn test_end_to_end_example() {
        // BMR = 740 + 1112.5 - 140 + 5 = 1717.5, TDEE = round(1717.5 * 1.7) = 2920
        let breakdown = compute_energy_breakdown(&sample_profile(), WeeklyGoal::Maintain);
        assert_eq!(breakdown.bmr, Some(1717.5));
        assert_eq!(breakdown.tdee, Some(2920));
        assert_eq!(breakdown.daily_target, 2920);
        assert!(!breakdown.used_fallback);
        assert_eq!(compute_daily_calorie_target(&sample_profile(), WeeklyGoal::Maintain), 2920);
    }

    #[test]
    fn test_moderate_male_maintenance() {
        // BMR = 800 + 1125 - 125 + 5 = 1805, TDEE = 1805 * 1.5 = 2707.5 -> 2708
        let profile = BiometricProfile::new(80.0, 180.0, 25)
            .with_gender("Male")
            .with_activity("Moderate");
        assert_eq!(compute_daily_calorie_target(&profile, WeeklyGoal::Maintain), 2708);
        assert_eq!(compute_daily_calorie_target(&profile, WeeklyGoal::LoseFast), 2158);
        assert_eq!(compute_daily_calorie_target(&profile, WeeklyGoal::GainSlow), 2983);
    }

    #[rstest]
    #[case(BiometricProfile::new(0.0, 178.0, 28))]
    #[case(BiometricProfile::new(74.0, 0.0, 28))]
    #[case(BiometricProfile::new(74.0, 178.0, 0))]
    #[case(BiometricProfile::new(-74.0, 178.0, 28))]
    #[case(BiometricProfile::new(f64::NAN, 178.0, 28))]
    #[case(BiometricProfile::default())]
    fn test_incomplete_profile_falls_back(#[case] profile: BiometricProfile) {
        for goal in WeeklyGoal::ALL {
            let breakdown = compute_energy_breakdown(&profile, goal);
            assert_eq!(breakdown.daily_target, FALLBACK_CALORIE_TARGET);
            assert!(breakdown.used_fallback);
            assert!(breakdown.bmr.is_none());
        }
    }

    #[test]
    fn test_floor_applies_to_tiny_profiles() {
        let profile = BiometricProfile::new(30.0, 120.0, 90).with_gender("female");
        assert_eq!(
            compute_daily_calorie_target(&profile, WeeklyGoal::LoseFast),
            MIN_CALORIE_TARGET
        );
    }

    #[test]
    fn test_unrecognized_activity_matches_sedentary() {
        let base = BiometricProfile::new(70.0, 170.0, 35);
        let unknown = base.clone().with_activity("couch potato");
        let sedentary = base.clone().with_activity("sedentary");
        assert_eq!(
            compute_energy_breakdown(&unknown, WeeklyGoal::Maintain).tdee,
            compute_energy_breakdown(&sedentary, WeeklyGoal::Maintain).tdee
        );
        assert_eq!(
            compute_energy_breakdown(&base, WeeklyGoal::Maintain).tdee,
            compute_energy_breakdown(&sedentary, WeeklyGoal::Maintain).tdee
        );
    }

    #[rstest]
    #[case(BiometricProfile::new(1.0e9, 178.0, 28))]
    #[case(BiometricProfile::new(74.0, 178.0, u32::MAX))]
    #[case(BiometricProfile::new(f64::MAX, f64::MAX, 28))]
    #[case(BiometricProfile::new(74.0, 178.0, 1.0e300))]
    fn test_extreme_profiles_stay_in_range(#[case] profile: BiometricProfile) {
        let profile = profile.with_gender("male").with_activity("high");
        for goal in WeeklyGoal::ALL {
            let breakdown = compute_energy_breakdown(&profile, goal);
            assert!(breakdown.daily_target >= MIN_CALORIE_TARGET);
            assert!(!breakdown.used_fallback);
        }
    }

    #[test]
    fn test_huge_tdee_saturates() {
        let profile = BiometricProfile::new(1.0e9, 178.0, 28).with_gender("male");
        assert_eq!(compute_daily_calorie_target(&profile, WeeklyGoal::GainFast), i32::MAX);
        assert_eq!(
            compute_daily_calorie_target(&profile, WeeklyGoal::LoseFast),
            i32::MAX - 550
        );
    }

    #[test]
    fn test_fractional_age_is_used() {
        // BMR = 740 + 1112.5 - 142.5 + 5 = 1715, TDEE = 1715 * 1.5 = 2572.5 -> 2573
        let profile = BiometricProfile::new(74.0, 178.0, 28.5)
            .with_gender("male")
            .with_activity("moderate");
        assert_eq!(compute_daily_calorie_target(&profile, WeeklyGoal::Maintain), 2573);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(-0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_unusable_age_falls_back(#[case] age: f64) {
        let profile = BiometricProfile::new(74.0, 178.0, age).with_gender("male");
        assert_eq!(
            compute_daily_calorie_target(&profile, WeeklyGoal::GainFast),
            FALLBACK_CALORIE_TARGET
        );
    }

    #[test]
    fn test_profile_accepts_negative_and_fractional_age() {
        let negative: BiometricProfile =
            serde_json::from_str(r#"{"weight":74,"height":178,"age":-1}"#).unwrap();
        assert_eq!(negative.age_years, Some(-1.0));
        assert!(!negative.is_complete());

        let fractional: BiometricProfile =
            serde_json::from_str(r#"{"weight":74,"height":178,"age":28.5}"#).unwrap();
        assert_eq!(fractional.age_years, Some(28.5));
        assert!(fractional.is_complete());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: valid profiles never go below the floor
        #[test]
        fn prop_target_never_below_floor(
            weight in 1.0f64..300.0,
            height in 1.0f64..250.0,
            age in 1u32..120,
            male in any::<bool>(),
            goal_index in 0usize..5
        ) {
            let gender = if male { "male" } else { "female" };
            let profile = BiometricProfile::new(weight, height, age).with_gender(gender);
            let target = compute_daily_calorie_target(&profile, WeeklyGoal::ALL[goal_index]);
            prop_assert!(target >= MIN_CALORIE_TARGET);
        }

        /// Property: male and female BMR differ by exactly 166
        #[test]
        fn prop_gender_offset_is_166(
            weight in 30.0f64..200.0,
            height in 120.0f64..220.0,
            age in 1.0f64..100.0
        ) {
            let male = calculate_bmr(weight, height, age, Gender::Male);
            let female = calculate_bmr(weight, height, age, Gender::from_text(Some("female")));
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }

        /// Property: TDEE(low) < TDEE(moderate) < TDEE(high)
        #[test]
        fn prop_activity_monotonic(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18.0f64..80.0
        ) {
            let bmr = calculate_bmr(weight, height, age, Gender::Male);
            let low = calculate_tdee(bmr, ActivityTier::Low);
            let moderate = calculate_tdee(bmr, ActivityTier::Moderate);
            let high = calculate_tdee(bmr, ActivityTier::High);
            prop_assert!(low < moderate, "low {} >= moderate {}", low, moderate);
            prop_assert!(moderate < high, "moderate {} >= high {}", moderate, high);
        }

        /// Property: goals are ordered, equal only where the floor kicks in
        #[test]
        fn prop_goal_monotonic(
            weight in 30.0f64..150.0,
            height in 120.0f64..210.0,
            age in 18u32..90,
            male in any::<bool>()
        ) {
            let gender = if male { "male" } else { "female" };
            let profile = BiometricProfile::new(weight, height, age)
                .with_gender(gender)
                .with_activity("moderate");
            let targets: Vec<i32> = WeeklyGoal::ALL
                .iter()
                .map(|goal| compute_daily_calorie_target(&profile, *goal))
                .collect();

            for pair in targets.windows(2) {
                if pair[0] == MIN_CALORIE_TARGET {
                    prop_assert!(pair[0] <= pair[1]);
                } else {
                    prop_assert!(pair[0] < pair[1], "targets not increasing: {:?}", targets);
                }
            }
        }

        /// Property: identical inputs give identical outputs
        #[test]
        fn prop_deterministic(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..80,
            goal_index in 0usize..5
        ) {
            let profile = BiometricProfile::new(weight, height, age).with_activity("high");
            let goal = WeeklyGoal::ALL[goal_index];
            prop_assert_eq!(
                compute_energy_breakdown(&profile, goal),
                compute_energy_breakdown(&profile, goal)
            );
        }
    }
}
