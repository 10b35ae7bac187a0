//! Food lookup tools
//!
//! Single and combined lookups against a food source.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::nutrition::{CALORIES, CARBS, FAT, FIBER, PROTEIN};
use crate::models::{AggregateProfile, SelectedItem};
use crate::nutrition::{aggregate, scale_record, NutritionError};
use crate::usda::{FoodSource, UsdaError};

/// Lookup error types
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Source(#[from] UsdaError),

    #[error(transparent)]
    Nutrition(#[from] NutritionError),
}

pub type LookupResult<T> = Result<T, LookupError>;

/// One food to look up and the serving wanted
#[derive(Debug, Clone, PartialEq)]
pub struct FoodRequest {
    pub query: String,
    pub quantity: f64,
    pub unit: String,
}

impl FoodRequest {
    pub fn new(query: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// A found food scaled to the requested serving
#[derive(Debug, Clone, Serialize)]
pub struct FoodLookup {
    pub query: String,
    pub food_id: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub nutrients: BTreeMap<String, f64>,
    #[serde(skip)]
    pub item: SelectedItem,
}

impl FoodLookup {
    pub fn amount(&self, nutrient: &str) -> f64 {
        self.nutrients.get(nutrient).copied().unwrap_or(0.0)
    }
}

/// A lookup that could not be completed
#[derive(Debug, Clone, Serialize)]
pub struct FailedLookup {
    pub query: String,
    pub reason: String,
}

/// Response for a multi-item lookup
#[derive(Debug, Clone, Serialize)]
pub struct CombinedLookup {
    pub items: Vec<FoodLookup>,
    pub not_found: Vec<String>,
    pub failed: Vec<FailedLookup>,
    pub totals: AggregateProfile,
}

/// Flat row written when saving results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub food_description: String,
    pub quantity: f64,
    pub unit: String,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl From<&FoodLookup> for ResultRow {
    fn from(lookup: &FoodLookup) -> Self {
        Self {
            food_description: lookup.description.clone(),
            quantity: lookup.quantity,
            unit: lookup.unit.clone(),
            calories: lookup.amount(CALORIES),
            carbs: lookup.amount(CARBS),
            protein: lookup.amount(PROTEIN),
            fat: lookup.amount(FAT),
            fiber: lookup.amount(FIBER),
        }
    }
}

/// Look up one food and scale it to the requested serving.
///
/// Returns None when the source has no match. The quantity must be
/// positive.
pub fn lookup_food<S: FoodSource>(
    source: &S,
    request: &FoodRequest,
) -> LookupResult<Option<FoodLookup>> {
    if !request.quantity.is_finite() || request.quantity <= 0.0 {
        return Err(NutritionError::InvalidQuantity(request.quantity).into());
    }

    let record = match source.search_first(&request.query)? {
        Some(record) => record,
        None => return Ok(None),
    };

    let nutrients = scale_record(&record, request.quantity, &request.unit)?;

    Ok(Some(FoodLookup {
        query: request.query.clone(),
        food_id: record.food_id().to_string(),
        description: record.description().to_string(),
        quantity: request.quantity,
        unit: request.unit.clone(),
        nutrients,
        item: SelectedItem::new(record, request.quantity, request.unit.clone()),
    }))
}

/// Look up several foods and total them.
///
/// Unmatched queries and source failures are reported and skipped;
/// calculation errors (bad quantity, unit mismatch) abort the whole lookup.
pub fn combine_foods<S: FoodSource>(
    source: &S,
    requests: &[FoodRequest],
) -> LookupResult<CombinedLookup> {
    let mut items = Vec::new();
    let mut not_found = Vec::new();
    let mut failed = Vec::new();

    for request in requests {
        match lookup_food(source, request) {
            Ok(Some(lookup)) => items.push(lookup),
            Ok(None) => not_found.push(request.query.clone()),
            Err(LookupError::Source(e)) => {
                tracing::warn!("Lookup for '{}' failed: {}", request.query, e);
                failed.push(FailedLookup {
                    query: request.query.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    let selected: Vec<SelectedItem> = items.iter().map(|l| l.item.clone()).collect();
    let totals = aggregate(&selected)?;

    Ok(CombinedLookup {
        items,
        not_found,
        failed,
        totals,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::NutrientRecord;
    use crate::usda::UsdaResult;

    /// In-memory food source keyed by lowercase query
    pub(crate) struct StaticSource {
        pub records: HashMap<String, NutrientRecord>,
        pub failing: Vec<String>,
    }

    impl StaticSource {
        pub(crate) fn with_foods() -> Self {
            let mut records = HashMap::new();
            for (name, pairs) in [
                ("oats", vec![(CALORIES, 379.0), (PROTEIN, 13.2), (FAT, 6.5), (CARBS, 67.7), (FIBER, 10.1)]),
                ("milk", vec![(CALORIES, 61.0), (PROTEIN, 3.2), (FAT, 3.3), (CARBS, 4.8)]),
            ] {
                let nutrients = pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
                let record = NutrientRecord::new(name, name.to_uppercase(), nutrients, 100.0, "g").unwrap();
                records.insert(name.to_string(), record);
            }
            Self {
                records,
                failing: vec!["timeout".to_string()],
            }
        }
    }

    impl FoodSource for StaticSource {
        fn search_first(&self, query: &str) -> UsdaResult<Option<NutrientRecord>> {
            if self.failing.iter().any(|q| q == query) {
                return Err(UsdaError::Status {
                    status: 503,
                    body: "unavailable".into(),
                });
            }
            Ok(self.records.get(&query.to_lowercase()).cloned())
        }
    }

    #[test]
    fn test_lookup_scales_to_quantity() {
        let source = StaticSource::with_foods();
        let lookup = lookup_food(&source, &FoodRequest::new("Oats", 50.0, "g"))
            .unwrap()
            .unwrap();

        assert_eq!(lookup.description, "OATS");
        assert!((lookup.amount(CALORIES) - 189.5).abs() < 1e-9);
        assert!((lookup.amount(PROTEIN) - 6.6).abs() < 1e-9);
        assert_eq!(lookup.item.quantity, 50.0);
    }

    #[test]
    fn test_lookup_not_found() {
        let source = StaticSource::with_foods();
        let result = lookup_food(&source, &FoodRequest::new("unobtainium", 10.0, "g")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_lookup_rejects_non_positive_quantity() {
        let source = StaticSource::with_foods();
        let result = lookup_food(&source, &FoodRequest::new("oats", 0.0, "g"));
        assert!(matches!(
            result,
            Err(LookupError::Nutrition(NutritionError::InvalidQuantity(_)))
        ));
    }

    #[test]
    fn test_combine_totals_and_skips() {
        let source = StaticSource::with_foods();
        let requests = vec![
            FoodRequest::new("oats", 50.0, "g"),
            FoodRequest::new("milk", 200.0, "g"),
            FoodRequest::new("dragonfruit", 100.0, "g"),
            FoodRequest::new("timeout", 100.0, "g"),
        ];

        let combined = combine_foods(&source, &requests).unwrap();

        assert_eq!(combined.items.len(), 2);
        assert_eq!(combined.not_found, vec!["dragonfruit".to_string()]);
        assert_eq!(combined.failed.len(), 1);
        assert_eq!(combined.failed[0].query, "timeout");
        assert_eq!(combined.totals.item_count(), 2);
        assert!((combined.totals.get(CALORIES) - (189.5 + 122.0)).abs() < 1e-9);
        assert!((combined.totals.get(FIBER) - 5.05).abs() < 1e-9);
    }

    #[test]
    fn test_combine_unit_mismatch_aborts() {
        let source = StaticSource::with_foods();
        let requests = vec![
            FoodRequest::new("oats", 50.0, "g"),
            FoodRequest::new("milk", 1.0, "cup"),
        ];

        assert!(matches!(
            combine_foods(&source, &requests),
            Err(LookupError::Nutrition(NutritionError::UnitMismatch { .. }))
        ));
    }

    #[test]
    fn test_result_row_from_lookup() {
        let source = StaticSource::with_foods();
        let lookup = lookup_food(&source, &FoodRequest::new("milk", 100.0, "g"))
            .unwrap()
            .unwrap();

        let row = ResultRow::from(&lookup);

        assert_eq!(row.food_description, "MILK");
        assert_eq!(row.calories, 61.0);
        assert_eq!(row.fiber, 0.0);
    }
}
