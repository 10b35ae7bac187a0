//! Data models
//!
//! Plain data passed between the food lookup, the calculators and the
//! presentation layer.

mod nutrient_record;
pub mod nutrition;
mod profile;
mod report;
mod targets;

pub use nutrient_record::{NutrientRecord, SelectedItem};
pub use nutrition::AggregateProfile;
pub use profile::{ActivityLevel, Sex, UserProfile};
pub use report::{ComparisonReport, NutrientComparison, NutrientStatus, TargetValue};
pub use targets::{MacroRange, MacroTargets, Macronutrient, Targets};
