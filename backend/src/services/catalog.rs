//! Meal and workout catalog
//!
//! The client only logs items by id, so the backend owns the list of
//! meals (calories per gram) and workouts (calories per minute). A TOML
//! file can replace the built-in list:
//!
//! ```toml
//! [[meals]]
//! id = "oatmeal"
//! name = "Oatmeal"
//! calories_per_gram = 0.68
//!
//! [[workouts]]
//! id = "rowing"
//! name = "Rowing"
//! calories_per_minute = 9.0
//! ```

use crate::config::CatalogConfig;
use anyhow::{bail, Context, Result};
use nutrition_tracker_shared::{MealItem, WorkoutItem};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

const BUILTIN_MEALS: &[(&str, &str, f64)] = &[
    ("chicken-breast", "Chicken Breast", 1.65),
    ("white-rice", "White Rice", 1.3),
    ("oatmeal", "Oatmeal", 0.68),
    ("salmon", "Salmon", 2.08),
    ("broccoli", "Broccoli", 0.34),
    ("banana", "Banana", 0.89),
    ("eggs", "Eggs", 1.55),
    ("greek-yogurt", "Greek Yogurt", 0.59),
    ("whole-wheat-bread", "Whole Wheat Bread", 2.47),
    ("almonds", "Almonds", 5.79),
];

const BUILTIN_WORKOUTS: &[(&str, &str, f64)] = &[
    ("running", "Running", 11.0),
    ("cycling", "Cycling", 8.0),
    ("swimming", "Swimming", 10.0),
    ("walking", "Walking", 4.0),
    ("weight-lifting", "Weight Lifting", 6.0),
    ("yoga", "Yoga", 3.0),
    ("hiit", "HIIT", 12.0),
    ("jump-rope", "Jump Rope", 12.0),
];

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    meals: BUILTIN_MEALS
        .iter()
        .map(|(id, name, rate)| MealItem {
            id: id.to_string(),
            name: name.to_string(),
            calories_per_gram: *rate,
        })
        .collect(),
    workouts: BUILTIN_WORKOUTS
        .iter()
        .map(|(id, name, rate)| WorkoutItem {
            id: id.to_string(),
            name: name.to_string(),
            calories_per_minute: *rate,
        })
        .collect(),
});

/// Meals and workouts available for logging
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub meals: Vec<MealItem>,
    #[serde(default)]
    pub workouts: Vec<WorkoutItem>,
}

impl Catalog {
    /// The built-in catalog
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Use the configured file when one is set, otherwise the built-in list
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        match config.path.as_deref() {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Self::from_toml(&raw)
            .with_context(|| format!("Invalid catalog file {}", path.display()))?;

        info!(
            path = %path.display(),
            meals = catalog.meals.len(),
            workouts = catalog.workouts.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(raw)?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for meal in &self.meals {
            if !seen.insert(meal.id.as_str()) {
                bail!("duplicate meal id '{}'", meal.id);
            }
            if !(meal.calories_per_gram.is_finite() && meal.calories_per_gram > 0.0) {
                bail!("meal '{}' must have a positive calories_per_gram", meal.id);
            }
        }

        seen.clear();
        for workout in &self.workouts {
            if !seen.insert(workout.id.as_str()) {
                bail!("duplicate workout id '{}'", workout.id);
            }
            if !(workout.calories_per_minute.is_finite() && workout.calories_per_minute > 0.0) {
                bail!("workout '{}' must have a positive calories_per_minute", workout.id);
            }
        }
        Ok(())
    }

    pub fn find_meal(&self, id: &str) -> Option<&MealItem> {
        self.meals.iter().find(|m| m.id == id)
    }

    pub fn find_workout(&self, id: &str) -> Option<&WorkoutItem> {
        self.workouts.iter().find(|w| w.id == id)
    }
}
