//! Daily target models
//!
//! Energy and macronutrient targets derived from a user profile.

use serde::{Deserialize, Serialize};

use super::nutrition::{CARBS, FAT, PROTEIN};

/// A macronutrient with a fixed caloric density
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Carbs,
    Protein,
    Fat,
}

impl Macronutrient {
    pub const ALL: [Macronutrient; 3] = [
        Macronutrient::Carbs,
        Macronutrient::Protein,
        Macronutrient::Fat,
    ];

    /// Energy per gram (Atwater factors)
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Macronutrient::Carbs | Macronutrient::Protein => 4.0,
            Macronutrient::Fat => 9.0,
        }
    }

    /// Key used for this macronutrient in nutrient maps
    pub fn nutrient_name(&self) -> &'static str {
        match self {
            Macronutrient::Carbs => CARBS,
            Macronutrient::Protein => PROTEIN,
            Macronutrient::Fat => FAT,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Macronutrient::Carbs => "Carbohydrates",
            Macronutrient::Protein => "Protein",
            Macronutrient::Fat => "Fat",
        }
    }
}

/// Recommended intake range for one macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    pub min_kcal: f64,
    pub max_kcal: f64,
    /// Whole grams
    pub min_grams: f64,
    /// Whole grams
    pub max_grams: f64,
}

/// Ranges for all three macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub carbs: MacroRange,
    pub protein: MacroRange,
    pub fat: MacroRange,
}

impl MacroTargets {
    pub fn get(&self, macronutrient: Macronutrient) -> &MacroRange {
        match macronutrient {
            Macronutrient::Carbs => &self.carbs,
            Macronutrient::Protein => &self.protein,
            Macronutrient::Fat => &self.fat,
        }
    }
}

/// Daily targets for one user profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    /// Basal metabolic rate, kcal/day
    pub bmr: f64,
    /// Total daily energy expenditure, kcal/day
    pub tdee: f64,
    /// Fraction of TDEE either side that still counts as on target
    pub calorie_tolerance: f64,
    pub macros: MacroTargets,
}
