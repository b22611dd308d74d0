//! Error types for the Nutrition Tracker core
//!
//! The calculators themselves never fail. These errors only surface at
//! boundaries that choose strict parsing or validate logged entries.

use crate::validation::ValidationError;
use thiserror::Error;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Unknown weekly goal: {0}")]
    UnknownWeeklyGoal(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
