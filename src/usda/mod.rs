//! USDA FoodData Central module
//!
//! Fetches nutrient records for text queries. Failures surface as
//! `UsdaError` before any data reaches the calculators.

pub mod client;
pub mod search;

pub use client::{FoodSource, UsdaClient, UsdaError, UsdaResult};
