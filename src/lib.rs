//! Nutrition Calculator Library
//!
//! Food lookup, nutrient aggregation and daily intake targets.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod models;
pub mod nutrition;
pub mod tools;
pub mod usda;
