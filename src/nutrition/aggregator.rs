//! Nutrient aggregation
//!
//! Scales each selected item to its chosen serving and merges the results
//! into one profile.

use std::collections::BTreeMap;

use super::converter::serving_multiplier;
use super::error::{NutritionError, NutritionResult};
use crate::models::{AggregateProfile, NutrientRecord, SelectedItem};

/// Scale one record to a chosen serving.
///
/// A quantity of 0 yields all-zero amounts; negative or non-finite
/// quantities are rejected.
pub fn scale_record(
    record: &NutrientRecord,
    quantity: f64,
    unit: &str,
) -> NutritionResult<BTreeMap<String, f64>> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(NutritionError::InvalidQuantity(quantity));
    }

    let multiplier = serving_multiplier(
        quantity,
        unit,
        record.reference_quantity(),
        record.reference_unit(),
    )?;

    tracing::debug!(
        "Scaling '{}' by {} ({} {} against {} {})",
        record.description(),
        multiplier,
        quantity,
        unit,
        record.reference_quantity(),
        record.reference_unit()
    );

    Ok(record
        .nutrients()
        .iter()
        .map(|(name, amount)| (name.clone(), amount * multiplier))
        .collect())
}

/// Merge the selected items into one profile.
///
/// Every scaled contribution is collected per nutrient and summed in sorted
/// order, so any permutation of the same items gives bit-identical totals.
pub fn aggregate(items: &[SelectedItem]) -> NutritionResult<AggregateProfile> {
    let mut contributions: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for item in items {
        let scaled = scale_record(&item.record, item.quantity, &item.unit)?;
        for (name, amount) in scaled {
            contributions.entry(name).or_default().push(amount);
        }
    }

    let totals = contributions
        .into_iter()
        .map(|(name, mut amounts)| {
            amounts.sort_by(f64::total_cmp);
            (name, amounts.into_iter().sum())
        })
        .collect();

    Ok(AggregateProfile::from_totals(totals, items.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::nutrition::{FAT, PROTEIN};
    use proptest::prelude::*;

    fn record(id: &str, pairs: &[(&str, f64)]) -> NutrientRecord {
        let nutrients = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        NutrientRecord::new(id, id, nutrients, 100.0, "g").unwrap()
    }

    #[test]
    fn test_two_items_merge() {
        let items = vec![
            SelectedItem::new(record("a", &[(PROTEIN, 10.0), (FAT, 2.0)]), 100.0, "g"),
            SelectedItem::new(record("b", &[(PROTEIN, 0.0), (FAT, 5.0)]), 100.0, "g"),
        ];

        let profile = aggregate(&items).unwrap();

        assert_eq!(profile.get(PROTEIN), 10.0);
        assert_eq!(profile.get(FAT), 7.0);
        assert_eq!(profile.item_count(), 2);
    }

    #[test]
    fn test_absent_nutrient_contributes_nothing() {
        let items = vec![
            SelectedItem::new(record("a", &[(PROTEIN, 10.0)]), 50.0, "g"),
            SelectedItem::new(record("b", &[("fiber", 4.0)]), 200.0, "g"),
        ];

        let profile = aggregate(&items).unwrap();

        assert_eq!(profile.get(PROTEIN), 5.0);
        assert_eq!(profile.get("fiber"), 8.0);
    }

    #[test]
    fn test_zero_quantity_contributes_zero() {
        let items = vec![SelectedItem::new(record("a", &[(PROTEIN, 10.0)]), 0.0, "g")];

        let profile = aggregate(&items).unwrap();

        assert_eq!(profile.get(PROTEIN), 0.0);
    }

    #[test]
    fn test_empty_selection() {
        let profile = aggregate(&[]).unwrap();
        assert!(profile.is_empty());
        assert_eq!(profile.item_count(), 0);
    }

    #[test]
    fn test_unit_mismatch_fails() {
        let items = vec![
            SelectedItem::new(record("a", &[(PROTEIN, 10.0)]), 100.0, "g"),
            SelectedItem::new(record("b", &[(PROTEIN, 1.0)]), 1.0, "cup"),
        ];

        assert!(matches!(
            aggregate(&items),
            Err(NutritionError::UnitMismatch { .. })
        ));
    }

    #[test]
    fn test_negative_quantity_fails() {
        let items = vec![SelectedItem::new(record("a", &[(PROTEIN, 10.0)]), -1.0, "g")];
        assert_eq!(
            aggregate(&items).unwrap_err(),
            NutritionError::InvalidQuantity(-1.0)
        );
    }

    #[test]
    fn test_mixed_units() {
        let items = vec![
            SelectedItem::new(record("a", &[(PROTEIN, 20.0)]), 1.0, "kg"),
            SelectedItem::new(record("b", &[(PROTEIN, 10.0)]), 2.0, "servings"),
        ];

        let profile = aggregate(&items).unwrap();

        assert!((profile.get(PROTEIN) - 220.0).abs() < 1e-9);
    }

    fn arb_items() -> impl Strategy<Value = Vec<SelectedItem>> {
        let item = (
            0.0f64..500.0,
            0.0f64..100.0,
            0.0f64..100.0,
            0.0f64..900.0,
            prop::bool::ANY,
        )
            .prop_map(|(quantity, protein, fat, calories, with_fiber)| {
                let mut pairs = vec![(PROTEIN, protein), (FAT, fat), ("calories", calories)];
                if with_fiber {
                    pairs.push(("fiber", protein / 3.0));
                }
                SelectedItem::new(record("x", &pairs), quantity, "g")
            });
        prop::collection::vec(item, 0..8)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: any permutation of the items gives the same profile
        #[test]
        fn prop_order_independent(
            (items, shuffled) in arb_items().prop_flat_map(|items| {
                let shuffled = Just(items.clone()).prop_shuffle();
                (Just(items), shuffled)
            })
        ) {
            let a = aggregate(&items).unwrap();
            let b = aggregate(&shuffled).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Property: doubling every quantity doubles every total
        #[test]
        fn prop_scale_linear(items in arb_items()) {
            let doubled: Vec<SelectedItem> = items
                .iter()
                .cloned()
                .map(|mut item| {
                    item.quantity *= 2.0;
                    item
                })
                .collect();

            let base = aggregate(&items).unwrap();
            let twice = aggregate(&doubled).unwrap();

            for (name, total) in base.iter() {
                prop_assert_eq!(twice.get(name), total * 2.0);
            }
        }

        /// Property: totals are never negative
        #[test]
        fn prop_non_negative(items in arb_items()) {
            let profile = aggregate(&items).unwrap();
            prop_assert!(profile.iter().all(|(_, total)| total >= 0.0));
        }
    }
}
