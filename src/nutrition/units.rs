//! Unit types and conversion constants
//!
//! Measurement units a serving can be expressed in, and the factors that
//! bring them to a common base (grams or milliliters).

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Weight/mass units (g, oz, lb, kg)
    Weight,
    /// Volume units (ml, tbsp, cup, etc.)
    Volume,
    /// Count/discrete units (each, piece)
    Count,
    /// Multiples of the record's own reference quantity
    Serving,
    /// Anything else (scoop, slice, patty); only comparable to itself
    Custom,
}

/// A parsed unit with optional gram or ml annotation
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedUnit {
    /// The base unit string (e.g., "tbsp" from "tbsp (20g)")
    pub base_unit: String,
    /// Gram weight per unit if annotated (e.g., 20.0 from "(20g)")
    pub gram_weight: Option<f64>,
    /// Milliliters per unit if annotated (e.g., 15.0 from "(15ml)")
    pub ml_amount: Option<f64>,
    pub category: UnitCategory,
}

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

pub const ML_PER_TSP: f64 = 4.92892;
pub const ML_PER_TBSP: f64 = 14.7868;
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_PINT: f64 = 473.176;
pub const ML_PER_QUART: f64 = 946.353;
pub const ML_PER_LITER: f64 = 1000.0;
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

pub const G_PER_MG: f64 = 0.001;
pub const G_PER_KG: f64 = 1000.0;
pub const G_PER_OZ: f64 = 28.3495;
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Unit Recognition
// ============================================================================

/// Conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" | "gm" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Conversion factor to milliliters for a volume unit
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    match unit.trim().to_lowercase().as_str() {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(1.0),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(ML_PER_LITER),
        "tsp" | "teaspoon" | "teaspoons" => Some(ML_PER_TSP),
        "tbsp" | "tablespoon" | "tablespoons" => Some(ML_PER_TBSP),
        "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Some(ML_PER_FL_OZ),
        "cup" | "cups" => Some(ML_PER_CUP),
        "pint" | "pints" => Some(ML_PER_PINT),
        "quart" | "quarts" => Some(ML_PER_QUART),
        "gallon" | "gallons" => Some(ML_PER_GALLON),
        _ => None,
    }
}

/// Determine the category of a unit string
pub fn categorize_unit(unit: &str) -> UnitCategory {
    let lower = unit.trim().to_lowercase();

    if grams_per_unit(&lower).is_some() {
        return UnitCategory::Weight;
    }

    if ml_per_unit(&lower).is_some() {
        return UnitCategory::Volume;
    }

    match lower.as_str() {
        "serving" | "servings" => UnitCategory::Serving,
        "each" | "piece" | "pieces" | "item" | "items" | "count" | "unit" | "units" => {
            UnitCategory::Count
        }
        _ => UnitCategory::Custom,
    }
}
