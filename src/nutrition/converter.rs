//! Unit conversion functions
//!
//! Parses unit strings and works out how many reference quantities a chosen
//! serving amounts to.

use super::error::{NutritionError, NutritionResult};
use super::units::{categorize_unit, grams_per_unit, ml_per_unit, ParsedUnit, UnitCategory};

/// Parse a unit string, extracting any gram or ml annotation
///
/// Examples:
/// - "g" -> ParsedUnit { base_unit: "g", gram_weight: None, ... }
/// - "tbsp (20g)" -> ParsedUnit { base_unit: "tbsp", gram_weight: Some(20.0), ... }
/// - "cup (240ml)" -> ParsedUnit { base_unit: "cup", ml_amount: Some(240.0), ... }
pub fn parse_unit(unit_str: &str) -> ParsedUnit {
    let trimmed = unit_str.trim();

    if let (Some(open), Some(close)) = (trimmed.find('('), trimmed.rfind(')')) {
        if open < close {
            let base_unit = trimmed[..open].trim().to_lowercase();
            let annotation = &trimmed[open + 1..close];

            return ParsedUnit {
                category: categorize_unit(&base_unit),
                gram_weight: parse_annotation(annotation, &["g", "gram", "grams"]),
                ml_amount: parse_annotation(
                    annotation,
                    &["ml", "milliliter", "milliliters", "millilitre", "millilitres"],
                ),
                base_unit,
            };
        }
    }

    let base_unit = trimmed.to_lowercase();
    ParsedUnit {
        category: categorize_unit(&base_unit),
        base_unit,
        gram_weight: None,
        ml_amount: None,
    }
}

/// Parse an annotation like "20g", "20 g" or "240 ml" against a list of suffixes
fn parse_annotation(s: &str, suffixes: &[&str]) -> Option<f64> {
    let lower = s.trim().to_lowercase();

    suffixes.iter().find_map(|suffix| {
        lower
            .strip_suffix(suffix)
            .and_then(|num| num.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
    })
}

/// Convert a quantity in the given unit to grams
///
/// Returns None for volume or count units without a gram annotation
pub fn to_grams(quantity: f64, unit: &str) -> Option<f64> {
    let parsed = parse_unit(unit);

    if let Some(grams_per) = parsed.gram_weight {
        return Some(quantity * grams_per);
    }

    grams_per_unit(&parsed.base_unit).map(|factor| quantity * factor)
}

/// Convert a quantity in the given unit to milliliters
///
/// Returns None for weight or count units without an ml annotation
pub fn to_ml(quantity: f64, unit: &str) -> Option<f64> {
    let parsed = parse_unit(unit);

    if let Some(ml_per) = parsed.ml_amount {
        return Some(quantity * ml_per);
    }

    ml_per_unit(&parsed.base_unit).map(|factor| quantity * factor)
}

/// How many reference quantities a chosen serving is worth.
///
/// # Arguments
/// * `quantity` - The amount chosen (e.g., 150.0)
/// * `unit` - The unit it was chosen in (e.g., "g", "oz", "servings")
/// * `reference_quantity` - The amount the record's values are given for (e.g., 100.0)
/// * `reference_unit` - The unit of that amount (e.g., "g")
///
/// # Errors
/// `UnitMismatch` when the two units cannot be brought to a common base.
pub fn serving_multiplier(
    quantity: f64,
    unit: &str,
    reference_quantity: f64,
    reference_unit: &str,
) -> NutritionResult<f64> {
    let chosen = parse_unit(unit);
    let reference = parse_unit(reference_unit);

    let annotated = chosen.gram_weight.is_some() || chosen.ml_amount.is_some();

    // "3 servings" means three times the reference quantity
    if chosen.category == UnitCategory::Serving && !annotated {
        return Ok(quantity);
    }

    // Same unit only counts as same size when the annotations agree
    if chosen.base_unit == reference.base_unit
        && chosen.gram_weight == reference.gram_weight
        && chosen.ml_amount == reference.ml_amount
    {
        return Ok(quantity / reference_quantity);
    }

    if let (Some(chosen_g), Some(reference_g)) = (
        to_grams(quantity, unit),
        to_grams(reference_quantity, reference_unit),
    ) {
        return Ok(chosen_g / reference_g);
    }

    if let (Some(chosen_ml), Some(reference_ml)) = (
        to_ml(quantity, unit),
        to_ml(reference_quantity, reference_unit),
    ) {
        return Ok(chosen_ml / reference_ml);
    }

    Err(NutritionError::UnitMismatch {
        chosen: unit.trim().to_string(),
        reference: reference_unit.trim().to_string(),
    })
}
