//! Nutrition tools module
//!
//! The actions offered by the interactive menu, as plain functions returning
//! serializable responses.

pub mod export;
pub mod intake;
pub mod lookup;

pub use export::{save_results, ExportError, ExportFormat};
pub use intake::{recommended_intake, IntakeSummary};
pub use lookup::{
    combine_foods, lookup_food, CombinedLookup, FoodLookup, FoodRequest, LookupError, ResultRow,
};
