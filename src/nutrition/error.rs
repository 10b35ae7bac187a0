//! Nutrition calculation errors

use thiserror::Error;

/// Typed failures raised by the aggregator and target calculator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    #[error("Cannot convert '{chosen}' to the record's reference unit '{reference}'")]
    UnitMismatch { chosen: String, reference: String },

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Unknown activity level: '{0}'")]
    UnknownActivityLevel(String),

    #[error("Invalid quantity: {0} (must be a finite, non-negative number)")]
    InvalidQuantity(f64),
}

/// Result type for nutrition calculations
pub type NutritionResult<T> = Result<T, NutritionError>;
