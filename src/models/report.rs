//! Comparison report model

use serde::{Deserialize, Serialize};

/// Where an actual amount sits relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Under,
    Within,
    Over,
}

impl NutrientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientStatus::Under => "under",
            NutrientStatus::Within => "within",
            NutrientStatus::Over => "over",
        }
    }

    /// Classify against an inclusive range
    pub fn classify(actual: f64, min: f64, max: f64) -> Self {
        if actual < min {
            NutrientStatus::Under
        } else if actual > max {
            NutrientStatus::Over
        } else {
            NutrientStatus::Within
        }
    }
}

/// The target an actual amount was compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TargetValue {
    /// A single value with an allowed deviation either side
    Single { value: f64, tolerance: f64 },
    Range { min: f64, max: f64 },
}

impl TargetValue {
    pub fn classify(&self, actual: f64) -> NutrientStatus {
        match *self {
            TargetValue::Single { value, tolerance } => {
                NutrientStatus::classify(actual, value - tolerance, value + tolerance)
            }
            TargetValue::Range { min, max } => NutrientStatus::classify(actual, min, max),
        }
    }
}

/// One row of a comparison report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientComparison {
    pub nutrient: String,
    pub actual: f64,
    /// None for nutrients with no target
    pub target: Option<TargetValue>,
    /// None for nutrients with no target
    pub status: Option<NutrientStatus>,
}

/// Aggregated totals set against daily targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub entries: Vec<NutrientComparison>,
}

impl ComparisonReport {
    pub fn get(&self, nutrient: &str) -> Option<&NutrientComparison> {
        self.entries.iter().find(|e| e.nutrient == nutrient)
    }

    pub fn status(&self, nutrient: &str) -> Option<NutrientStatus> {
        self.get(nutrient).and_then(|e| e.status)
    }

    /// Entries that were compared against a target
    pub fn classified(&self) -> impl Iterator<Item = &NutrientComparison> {
        self.entries.iter().filter(|e| e.status.is_some())
    }

    /// Entries passed through without a target
    pub fn unclassified(&self) -> impl Iterator<Item = &NutrientComparison> {
        self.entries.iter().filter(|e| e.status.is_none())
    }
}
