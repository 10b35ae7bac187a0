//! Recommended intake tool

use serde::Serialize;

use crate::models::{AggregateProfile, ComparisonReport, Targets, UserProfile};
use crate::nutrition::{compare, NutritionResult, TargetCalculator};

/// Response for a recommended-intake request
#[derive(Debug, Clone, Serialize)]
pub struct IntakeSummary {
    pub profile: UserProfile,
    pub targets: Targets,
    /// Present when there were totals to compare
    pub comparison: Option<ComparisonReport>,
}

/// Daily targets for a profile, compared against the totals when given
pub fn recommended_intake(
    calculator: &TargetCalculator,
    profile: &UserProfile,
    totals: Option<&AggregateProfile>,
) -> NutritionResult<IntakeSummary> {
    let targets = calculator.targets(profile)?;
    let comparison = totals.map(|t| compare(t, &targets));

    Ok(IntakeSummary {
        profile: *profile,
        targets,
        comparison,
    })
}
