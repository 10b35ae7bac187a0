//! Nutrition calculation module
//!
//! Pure aggregation and target calculation. Nothing in here performs I/O.

pub mod aggregator;
pub mod compare;
pub mod converter;
pub mod error;
pub mod targets;
pub mod units;

pub use aggregator::{aggregate, scale_record};
pub use compare::compare;
pub use converter::{parse_unit, serving_multiplier, to_grams, to_ml};
pub use error::{NutritionError, NutritionResult};
pub use targets::{ActivityTable, MacroBands, PercentBand, TargetCalculator, TargetConfig};
pub use units::{categorize_unit, grams_per_unit, ml_per_unit, ParsedUnit, UnitCategory};
