//! Energy and macronutrient target calculation
//!
//! BMR via Mifflin-St Jeor, TDEE via an activity multiplier table, and
//! macronutrient ranges as percentage bands of TDEE.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{NutritionError, NutritionResult};
use crate::models::{
    ActivityLevel, MacroRange, MacroTargets, Macronutrient, Sex, Targets, UserProfile,
};

// ============================================================================
// Configuration Types
// ============================================================================

/// Multiplier applied to BMR for each activity level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTable {
    multipliers: BTreeMap<ActivityLevel, f64>,
}

impl ActivityTable {
    /// The standard 1.2 / 1.375 / 1.55 / 1.725 / 1.9 table
    pub fn standard() -> Self {
        Self {
            multipliers: ActivityLevel::ALL
                .iter()
                .map(|level| (*level, level.default_multiplier()))
                .collect(),
        }
    }

    /// A table holding only the given entries
    pub fn from_entries(entries: impl IntoIterator<Item = (ActivityLevel, f64)>) -> Self {
        Self {
            multipliers: entries.into_iter().collect(),
        }
    }

    pub fn set(&mut self, level: ActivityLevel, multiplier: f64) {
        self.multipliers.insert(level, multiplier);
    }

    /// Multiplier for a level
    ///
    /// `UnknownActivityLevel` if the table lacks it, `InvalidProfile` if the
    /// stored multiplier is not a positive finite number.
    pub fn multiplier(&self, level: ActivityLevel) -> NutritionResult<f64> {
        let multiplier = self
            .multipliers
            .get(&level)
            .copied()
            .ok_or_else(|| NutritionError::UnknownActivityLevel(level.as_str().to_string()))?;

        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(NutritionError::InvalidProfile(format!(
                "activity multiplier for '{}' must be positive, got {}",
                level, multiplier
            )));
        }

        Ok(multiplier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActivityLevel, f64)> + '_ {
        self.multipliers.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for ActivityTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Share of TDEE, in percent, a macronutrient should supply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentBand {
    pub min_pct: f64,
    pub max_pct: f64,
}

impl PercentBand {
    pub const fn new(min_pct: f64, max_pct: f64) -> Self {
        Self { min_pct, max_pct }
    }
}

/// Acceptable macronutrient distribution ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBands {
    pub carbs: PercentBand,
    pub protein: PercentBand,
    pub fat: PercentBand,
}

impl MacroBands {
    pub fn get(&self, macronutrient: Macronutrient) -> PercentBand {
        match macronutrient {
            Macronutrient::Carbs => self.carbs,
            Macronutrient::Protein => self.protein,
            Macronutrient::Fat => self.fat,
        }
    }
}

impl Default for MacroBands {
    fn default() -> Self {
        Self {
            carbs: PercentBand::new(45.0, 65.0),
            protein: PercentBand::new(10.0, 35.0),
            fat: PercentBand::new(20.0, 35.0),
        }
    }
}

/// Everything the calculator needs besides the profile itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub activity_table: ActivityTable,
    pub macro_bands: MacroBands,
    /// Calories within this percentage of TDEE count as on target
    pub calorie_tolerance_pct: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            activity_table: ActivityTable::standard(),
            macro_bands: MacroBands::default(),
            calorie_tolerance_pct: 10.0,
        }
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Sex-dependent constant of the Mifflin-St Jeor equation
fn sex_offset(sex: Sex) -> f64 {
    match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    }
}

/// Computes daily targets from a user profile
#[derive(Debug, Clone, Default)]
pub struct TargetCalculator {
    config: TargetConfig,
}

impl TargetCalculator {
    pub fn new(config: TargetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    /// Basal metabolic rate in kcal/day
    ///
    /// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
    /// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
    pub fn bmr(&self, profile: &UserProfile) -> NutritionResult<f64> {
        validate_profile(profile)?;

        let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm
            - 5.0 * f64::from(profile.age_years)
            + sex_offset(profile.sex);

        if bmr <= 0.0 {
            return Err(NutritionError::InvalidProfile(format!(
                "profile yields a non-positive BMR ({:.1} kcal)",
                bmr
            )));
        }

        Ok(bmr)
    }

    /// Total daily energy expenditure in kcal/day
    pub fn tdee(&self, profile: &UserProfile) -> NutritionResult<f64> {
        let bmr = self.bmr(profile)?;
        let multiplier = self.config.activity_table.multiplier(profile.activity_level)?;
        Ok(bmr * multiplier)
    }

    /// Macronutrient ranges for a given TDEE, bounds rounded to whole grams
    pub fn macro_targets(&self, tdee: f64) -> MacroTargets {
        let range = |macronutrient: Macronutrient| {
            let band = self.config.macro_bands.get(macronutrient);
            let min_kcal = tdee * band.min_pct / 100.0;
            let max_kcal = tdee * band.max_pct / 100.0;
            let density = macronutrient.kcal_per_gram();
            MacroRange {
                min_kcal,
                max_kcal,
                // f64::round rounds half away from zero
                min_grams: (min_kcal / density).round(),
                max_grams: (max_kcal / density).round(),
            }
        };

        MacroTargets {
            carbs: range(Macronutrient::Carbs),
            protein: range(Macronutrient::Protein),
            fat: range(Macronutrient::Fat),
        }
    }

    /// BMR, TDEE and macronutrient ranges for a profile
    ///
    /// A profile whose energy is too small to give at least one gram for
    /// every macronutrient lower bound is rejected as `InvalidProfile`.
    pub fn targets(&self, profile: &UserProfile) -> NutritionResult<Targets> {
        let bmr = self.bmr(profile)?;
        let multiplier = self.config.activity_table.multiplier(profile.activity_level)?;
        let tdee = bmr * multiplier;
        let macros = self.macro_targets(tdee);

        if let Some(m) = Macronutrient::ALL
            .into_iter()
            .find(|m| macros.get(*m).min_grams < 1.0)
        {
            return Err(NutritionError::InvalidProfile(format!(
                "TDEE of {:.1} kcal leaves no whole gram of {}",
                tdee,
                m.display_name().to_lowercase()
            )));
        }

        tracing::debug!(
            "Targets for {:?}: BMR {:.1}, TDEE {:.1} (x{})",
            profile,
            bmr,
            tdee,
            multiplier
        );

        Ok(Targets {
            bmr,
            tdee,
            calorie_tolerance: self.config.calorie_tolerance_pct / 100.0,
            macros,
        })
    }
}

fn validate_profile(profile: &UserProfile) -> NutritionResult<()> {
    if !profile.weight_kg.is_finite() || profile.weight_kg <= 0.0 {
        return Err(NutritionError::InvalidProfile(format!(
            "weight must be positive, got {}",
            profile.weight_kg
        )));
    }
    if !profile.height_cm.is_finite() || profile.height_cm <= 0.0 {
        return Err(NutritionError::InvalidProfile(format!(
            "height must be positive, got {}",
            profile.height_cm
        )));
    }
    if profile.age_years == 0 {
        return Err(NutritionError::InvalidProfile(
            "age must be positive, got 0".to_string(),
        ));
    }
    Ok(())
}
