//! Aggregated nutrition data structure
//!
//! Totals per nutrient name for one calculation session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Nutrient names used for the FoodData Central fields we track
pub const CALORIES: &str = "calories"; // kcal
pub const PROTEIN: &str = "protein"; // grams
pub const CARBS: &str = "carbs"; // grams
pub const FAT: &str = "fat"; // grams
pub const FIBER: &str = "fiber"; // grams
pub const SUGAR: &str = "sugar"; // grams
pub const SODIUM: &str = "sodium"; // milligrams
pub const SATURATED_FAT: &str = "saturated_fat"; // grams

/// Display order for the nutrients above
pub const DISPLAY_ORDER: [&str; 8] = [
    CALORIES,
    CARBS,
    PROTEIN,
    FAT,
    FIBER,
    SUGAR,
    SATURATED_FAT,
    SODIUM,
];

/// Unit label for a known nutrient
pub fn unit_label(nutrient: &str) -> &'static str {
    match nutrient {
        CALORIES => "kcal",
        SODIUM => "mg",
        _ => "g",
    }
}

/// Nutrient totals accumulated across the selected items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateProfile {
    totals: BTreeMap<String, f64>,
    item_count: usize,
}

impl AggregateProfile {
    /// An empty profile
    pub fn zero() -> Self {
        Self::default()
    }

    pub(crate) fn from_totals(totals: BTreeMap<String, f64>, item_count: usize) -> Self {
        Self { totals, item_count }
    }

    /// Total for a nutrient, 0 when no item supplied it
    pub fn get(&self, nutrient: &str) -> f64 {
        self.totals.get(nutrient).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, nutrient: &str) -> bool {
        self.totals.contains_key(nutrient)
    }

    pub fn totals(&self) -> &BTreeMap<String, f64> {
        &self.totals
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of items merged into this profile
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Nutrient names in display order: known nutrients first, the rest
    /// alphabetically.
    pub fn ordered_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = DISPLAY_ORDER
            .iter()
            .copied()
            .filter(|n| self.contains(n))
            .collect();
        names.extend(
            self.totals
                .keys()
                .map(String::as_str)
                .filter(|n| !DISPLAY_ORDER.contains(n)),
        );
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_nutrient_is_zero() {
        let profile = AggregateProfile::zero();
        assert_eq!(profile.get(PROTEIN), 0.0);
        assert!(!profile.contains(PROTEIN));
        assert!(profile.is_empty());
    }

    #[test]
    fn test_ordered_names() {
        let totals: BTreeMap<String, f64> = [
            ("zinc", 1.0),
            (FAT, 2.0),
            (CALORIES, 3.0),
            ("iron", 4.0),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
        let profile = AggregateProfile::from_totals(totals, 2);

        assert_eq!(profile.ordered_names(), vec![CALORIES, FAT, "iron", "zinc"]);
        assert_eq!(profile.item_count(), 2);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(CALORIES), "kcal");
        assert_eq!(unit_label(SODIUM), "mg");
        assert_eq!(unit_label(PROTEIN), "g");
    }
}
