//! Comparison of aggregated totals against daily targets

use crate::models::nutrition::CALORIES;
use crate::models::{
    AggregateProfile, ComparisonReport, Macronutrient, NutrientComparison, TargetValue, Targets,
};

/// Target for a tracked nutrient, None for everything else
fn target_for(nutrient: &str, targets: &Targets) -> Option<TargetValue> {
    if nutrient == CALORIES {
        return Some(TargetValue::Single {
            value: targets.tdee,
            tolerance: targets.tdee * targets.calorie_tolerance,
        });
    }

    Macronutrient::ALL
        .iter()
        .find(|m| m.nutrient_name() == nutrient)
        .map(|m| {
            let range = targets.macros.get(*m);
            TargetValue::Range {
                min: range.min_grams,
                max: range.max_grams,
            }
        })
}

/// Classify each nutrient in the profile against the targets.
///
/// Calories and the three macronutrients are always reported, at 0 when the
/// profile lacks them. Other nutrients are passed through unclassified.
pub fn compare(profile: &AggregateProfile, targets: &Targets) -> ComparisonReport {
    let tracked = std::iter::once(CALORIES)
        .chain(Macronutrient::ALL.iter().map(|m| m.nutrient_name()));

    let mut entries: Vec<NutrientComparison> = tracked
        .map(|nutrient| {
            let actual = profile.get(nutrient);
            let target = target_for(nutrient, targets);
            NutrientComparison {
                nutrient: nutrient.to_string(),
                actual,
                status: target.map(|t| t.classify(actual)),
                target,
            }
        })
        .collect();

    entries.extend(
        profile
            .ordered_names()
            .into_iter()
            .filter(|name| target_for(name, targets).is_none())
            .map(|name| NutrientComparison {
                nutrient: name.to_string(),
                actual: profile.get(name),
                target: None,
                status: None,
            }),
    );

    ComparisonReport { entries }
}
