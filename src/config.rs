use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{
    Nutrient, NutrientBound, NutrientBounds, NutrientTarget, NutrientWeights, Slot, SlotCapacity,
    SlotCaps,
};
use crate::planner::constants::DEFAULT_CALORIE_TOLERANCE;

/// Everything the planner needs besides the catalog.
///
/// Serialized as a JSON profile; every section is optional:
///
/// ```json
/// {
///   "targets": { "calories": 2000, "protein": 120 },
///   "bounds": { "calories": { "min": 1800, "max": 2200 } },
///   "weights": { "protein": 2.0 },
///   "slot_caps": { "snack": { "min": 0, "max": 1 } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    pub targets: NutrientTarget,
    pub bounds: NutrientBounds,
    pub weights: NutrientWeights,
    pub slot_caps: SlotCaps,
}

fn check_non_negative(what: &str, nutrient: Nutrient, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "{} for {} must be a non-negative number, got {}",
            what, nutrient, value
        )));
    }
    Ok(())
}

impl PlanRequest {
    /// Load a request from a JSON profile.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let request: PlanRequest = serde_json::from_str(&content)?;
        request.validate()?;
        Ok(request)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject negative targets or weights and inverted ranges.
    pub fn validate(&self) -> Result<()> {
        for (nutrient, goal) in self.targets.active() {
            check_non_negative("target", nutrient, goal)?;
        }

        for nutrient in Nutrient::ALL {
            check_non_negative("weight", nutrient, self.weights.weight(nutrient))?;
        }

        for (nutrient, bound) in self.bounds.iter() {
            if let (Some(min), Some(max)) = (bound.min, bound.max) {
                if min > max {
                    return Err(PlannerError::InvalidInput(format!(
                        "{} bound minimum {} exceeds maximum {}",
                        nutrient, min, max
                    )));
                }
            }
        }

        self.slot_caps.validate()
    }

    /// Bound calories to ±10 % of the calorie target when no calorie bound is set.
    /// An explicitly open calorie bound counts as set.
    pub fn apply_default_calorie_band(&mut self) {
        if self.bounds.calories.is_some() {
            return;
        }
        if let Some(goal) = self.targets.calories.filter(|g| *g > 0.0) {
            self.bounds.calories = Some(NutrientBound::between(
                goal * (1.0 - DEFAULT_CALORIE_TOLERANCE),
                goal * (1.0 + DEFAULT_CALORIE_TOLERANCE),
            ));
        }
    }

    /// High-protein day for athletes: 2500 kcal with protein weighted 2.5x.
    pub fn high_protein_demo() -> Self {
        Self {
            targets: NutrientTarget {
                calories: Some(2500.0),
                protein: Some(150.0),
                fat: Some(80.0),
                carbs: Some(200.0),
            },
            bounds: NutrientBounds {
                calories: Some(NutrientBound::between(2300.0, 2700.0)),
                protein: None,
                fat: Some(NutrientBound::at_most(90.0)),
                carbs: Some(NutrientBound::between(180.0, 220.0)),
            },
            weights: NutrientWeights::default().with(Nutrient::Protein, 2.5),
            slot_caps: SlotCaps::default().with(Slot::Snack, SlotCapacity { min: 1, max: 2 }),
        }
    }
}
