//! FoodData Central search response types
//!
//! Maps the first search hit onto a `NutrientRecord` keyed by our nutrient
//! names. Values in search results are per 100 g.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::nutrition::{CALORIES, CARBS, FAT, FIBER, PROTEIN, SATURATED_FAT, SODIUM, SUGAR};
use crate::models::NutrientRecord;
use crate::nutrition::NutritionResult;

/// Amounts in search results are given for this much food
pub const REFERENCE_QUANTITY: f64 = 100.0;
pub const REFERENCE_UNIT: &str = "g";

/// Energy (kcal)
const ENERGY_KCAL: u32 = 1008;
/// Atwater general / specific energy, used by some branded and foundation foods
const ENERGY_ATWATER: [u32; 2] = [2047, 2048];

/// FDC nutrient id for each tracked nutrient
const NUTRIENT_IDS: [(u32, &str); 7] = [
    (1003, PROTEIN),
    (1004, FAT),
    (1005, CARBS),
    (1079, FIBER),
    (2000, SUGAR),
    (1093, SODIUM),
    (1258, SATURATED_FAT),
];

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<SearchFood>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFood {
    pub fdc_id: u64,
    pub description: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    pub nutrient_id: u32,
    pub value: Option<f64>,
}

/// First food of a search response as a record, None when nothing matched
pub fn record_from_search(response: SearchResponse) -> NutritionResult<Option<NutrientRecord>> {
    match response.foods.into_iter().next() {
        Some(food) => record_from_food(food).map(Some),
        None => Ok(None),
    }
}

fn record_from_food(food: SearchFood) -> NutritionResult<NutrientRecord> {
    let values: BTreeMap<u32, f64> = food
        .food_nutrients
        .iter()
        .filter_map(|n| n.value.map(|v| (n.nutrient_id, v)))
        .collect();

    let mut nutrients: BTreeMap<String, f64> = NUTRIENT_IDS
        .iter()
        .map(|(id, name)| (name.to_string(), values.get(id).copied().unwrap_or(0.0)))
        .collect();

    let calories = values
        .get(&ENERGY_KCAL)
        .or_else(|| ENERGY_ATWATER.iter().find_map(|id| values.get(id)))
        .copied()
        .unwrap_or(0.0);
    nutrients.insert(CALORIES.to_string(), calories);

    NutrientRecord::new(
        food.fdc_id.to_string(),
        food.description.unwrap_or_else(|| "N/A".to_string()),
        nutrients,
        REFERENCE_QUANTITY,
        REFERENCE_UNIT,
    )
}
