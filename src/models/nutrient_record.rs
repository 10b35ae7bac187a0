//! Nutrient record model
//!
//! Per-item nutrient composition as returned by the food database, and the
//! user's serving choice for it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::nutrition::{NutritionError, NutritionResult};

/// Nutrient amounts for one food item, expressed per reference quantity
/// (FoodData Central reports everything per 100 g).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRecord {
    food_id: String,
    description: String,
    nutrients: BTreeMap<String, f64>,
    reference_quantity: f64,
    reference_unit: String,
}

impl NutrientRecord {
    /// Build a record, rejecting an unusable reference quantity.
    ///
    /// Negative or non-finite nutrient amounts are clamped to zero so a
    /// record never contributes a negative total.
    pub fn new(
        food_id: impl Into<String>,
        description: impl Into<String>,
        nutrients: BTreeMap<String, f64>,
        reference_quantity: f64,
        reference_unit: impl Into<String>,
    ) -> NutritionResult<Self> {
        if !reference_quantity.is_finite() || reference_quantity <= 0.0 {
            return Err(NutritionError::InvalidQuantity(reference_quantity));
        }

        let food_id = food_id.into();
        let nutrients = nutrients
            .into_iter()
            .map(|(name, amount)| {
                if amount.is_finite() && amount >= 0.0 {
                    (name, amount)
                } else {
                    tracing::warn!(
                        "Food {}: nutrient '{}' has unusable amount {}, treating as 0",
                        food_id,
                        name,
                        amount
                    );
                    (name, 0.0)
                }
            })
            .collect();

        Ok(Self {
            food_id,
            description: description.into(),
            nutrients,
            reference_quantity,
            reference_unit: reference_unit.into(),
        })
    }

    pub fn food_id(&self) -> &str {
        &self.food_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn nutrients(&self) -> &BTreeMap<String, f64> {
        &self.nutrients
    }

    /// Amount of a nutrient per reference quantity, 0 when absent
    pub fn amount(&self, nutrient: &str) -> f64 {
        self.nutrients.get(nutrient).copied().unwrap_or(0.0)
    }

    pub fn reference_quantity(&self) -> f64 {
        self.reference_quantity
    }

    pub fn reference_unit(&self) -> &str {
        &self.reference_unit
    }
}

/// A record paired with the serving the user chose
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedItem {
    pub record: NutrientRecord,
    pub quantity: f64,
    pub unit: String,
}

impl SelectedItem {
    pub fn new(record: NutrientRecord, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            record,
            quantity,
            unit: unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrients(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_new_record() {
        let record = NutrientRecord::new(
            "171705",
            "Oats",
            nutrients(&[("protein", 13.2), ("fat", 6.5)]),
            100.0,
            "g",
        )
        .unwrap();

        assert_eq!(record.food_id(), "171705");
        assert_eq!(record.amount("protein"), 13.2);
        assert_eq!(record.amount("fiber"), 0.0);
        assert_eq!(record.reference_unit(), "g");
    }

    #[test]
    fn test_rejects_bad_reference_quantity() {
        for bad in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let result = NutrientRecord::new("1", "x", BTreeMap::new(), bad, "g");
            assert!(matches!(result, Err(NutritionError::InvalidQuantity(_))));
        }
    }

    #[test]
    fn test_clamps_negative_amounts() {
        let record = NutrientRecord::new(
            "1",
            "x",
            nutrients(&[("fat", -3.0), ("carbs", f64::NAN), ("protein", 2.0)]),
            100.0,
            "g",
        )
        .unwrap();

        assert_eq!(record.amount("fat"), 0.0);
        assert_eq!(record.amount("carbs"), 0.0);
        assert_eq!(record.amount("protein"), 2.0);
    }
}
