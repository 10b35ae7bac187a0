//! Text rendering for the interactive menu

use crate::models::nutrition::{unit_label, CALORIES, CARBS, FAT, FIBER, PROTEIN};
use crate::models::{AggregateProfile, Macronutrient, NutrientComparison, TargetValue};
use crate::tools::{CombinedLookup, FoodLookup, IntakeSummary};

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().replace('_', " "),
        None => String::new(),
    }
}

/// Join rendered lines, each terminated by a newline
fn finish(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn amount_line(name: &str, amount: f64) -> String {
    format!("  {}: {:.2}{}", capitalize(name), amount, unit_label(name))
}

/// Nutrition for one looked-up food
pub fn render_lookup(lookup: &FoodLookup) -> String {
    let mut lines = vec![
        String::new(),
        format!(
            "Nutrition for {} ({} {}):",
            lookup.description, lookup.quantity, lookup.unit
        ),
    ];
    lines.extend(
        [CARBS, PROTEIN, FAT, CALORIES, FIBER]
            .into_iter()
            .map(|key| amount_line(key, lookup.amount(key))),
    );
    finish(lines)
}

/// Totals of a profile, known nutrients first
pub fn render_totals(totals: &AggregateProfile) -> String {
    finish(
        totals
            .ordered_names()
            .into_iter()
            .map(|name| amount_line(name, totals.get(name)))
            .collect(),
    )
}

/// Result of a multi-item lookup
pub fn render_combined(combined: &CombinedLookup) -> String {
    let mut lines = vec![
        String::new(),
        format!("Combined totals for {} food item(s):", combined.items.len()),
    ];
    lines.extend(
        combined
            .items
            .iter()
            .map(|item| format!("  - {} ({} {})", item.description, item.quantity, item.unit)),
    );

    let mut out = finish(lines);
    out.push_str(&render_totals(&combined.totals));

    let mut tail = Vec::new();
    if !combined.not_found.is_empty() {
        tail.push(format!("Not found: {}", combined.not_found.join(", ")));
    }
    tail.extend(
        combined
            .failed
            .iter()
            .map(|failure| format!("Lookup failed for '{}': {}", failure.query, failure.reason)),
    );
    out.push_str(&finish(tail));
    out
}

fn comparison_line(entry: &NutrientComparison) -> String {
    let label = capitalize(&entry.nutrient);
    let unit = unit_label(&entry.nutrient);
    match (entry.target, entry.status) {
        (Some(TargetValue::Single { value, tolerance }), Some(status)) => format!(
            "  {}: {:.2}{} (target {:.0} ± {:.0}) -> {}",
            label,
            entry.actual,
            unit,
            value,
            tolerance,
            status.as_str()
        ),
        (Some(TargetValue::Range { min, max }), Some(status)) => format!(
            "  {}: {:.2}{} (target {}-{}) -> {}",
            label,
            entry.actual,
            unit,
            min,
            max,
            status.as_str()
        ),
        _ => format!("  {}: {:.2}{}", label, entry.actual, unit),
    }
}

/// Recommended intake, plus the comparison when there is one
pub fn render_intake(summary: &IntakeSummary) -> String {
    let targets = &summary.targets;
    let mut lines = vec![
        String::new(),
        "Recommended daily intake based on your profile:".to_string(),
        format!("BMR: {:.2} kcal", targets.bmr),
        format!("Calories: {:.2} kcal", targets.tdee),
    ];
    lines.extend(Macronutrient::ALL.into_iter().map(|m| {
        let range = targets.macros.get(m);
        format!("{}: {}g - {}g", m.display_name(), range.min_grams, range.max_grams)
    }));

    if let Some(report) = &summary.comparison {
        lines.push(String::new());
        lines.push("Compared with your current totals:".to_string());
        lines.extend(report.entries.iter().map(comparison_line));
    }

    finish(lines)
}
