use crate::models::{FoodRecord, NutrientTarget, NutrientWeights};
use crate::planner::constants::{MIN_TARGET_DENOMINATOR, OVERSHOOT_RATIO, TRACKED_NUTRIENT_COUNT};

/// Contribution of a single nutrient to a food's score.
///
/// Peaks at `weight` when the value matches the goal and falls off linearly on
/// either side. Past [`OVERSHOOT_RATIO`] the contribution turns into a penalty
/// proportional to the overshoot.
#[inline]
pub fn nutrient_contribution(value: f64, goal: f64, weight: f64) -> f64 {
    let ratio = value / goal.max(MIN_TARGET_DENOMINATOR);
    if ratio > OVERSHOOT_RATIO {
        -weight * (ratio - 1.0)
    } else {
        weight * (1.0 - (1.0 - ratio).abs())
    }
}

/// Heuristic fitness of a food against a target.
///
/// Only nutrients with a strictly positive goal contribute, but the sum is
/// always divided by the number of tracked nutrients. A target without any
/// positive goal scores every food at 0.
pub fn score_food(food: &FoodRecord, target: &NutrientTarget, weights: &NutrientWeights) -> f64 {
    let total: f64 = target
        .active()
        .filter(|(_, goal)| *goal > 0.0)
        .map(|(nutrient, goal)| {
            nutrient_contribution(food.nutrient(nutrient), goal, weights.weight(nutrient))
        })
        .sum();

    total / TRACKED_NUTRIENT_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrient;

    fn food(calories: u32, protein: f64, fat: f64, carbs: f64) -> FoodRecord {
        FoodRecord::new("Test", calories, protein, fat, carbs).unwrap()
    }

    #[test]
    fn test_contribution_peaks_on_target() {
        assert!((nutrient_contribution(100.0, 100.0, 1.0) - 1.0).abs() < 1e-9);
        assert!((nutrient_contribution(50.0, 100.0, 1.0) - 0.5).abs() < 1e-9);
        assert!(nutrient_contribution(0.0, 100.0, 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contribution_at_overshoot_boundary() {
        // Exactly 1.5x is still on the reward branch
        assert!((nutrient_contribution(150.0, 100.0, 1.0) - 0.5).abs() < 1e-9);
        // Above it the penalty is -(ratio - 1)
        assert!((nutrient_contribution(200.0, 100.0, 1.0) + 1.0).abs() < 1e-9);
        assert!((nutrient_contribution(300.0, 100.0, 2.0) + 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_goal_uses_unit_denominator() {
        // goal 0.5 -> denominator 1.0, so value 1.0 is a perfect match
        assert!((nutrient_contribution(1.0, 0.5, 1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_divides_by_all_nutrients() {
        let target = NutrientTarget::default().with(Nutrient::Calories, 500.0);
        let score = score_food(&food(500, 10.0, 10.0, 10.0), &target, &NutrientWeights::default());
        assert!((score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_score_applies_weights() {
        let target = NutrientTarget::default().with(Nutrient::Protein, 20.0);
        let weights = NutrientWeights::default().with(Nutrient::Protein, 2.0);
        let score = score_food(&food(100, 10.0, 0.0, 0.0), &target, &weights);
        assert!((score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_zero_and_missing_goals_score_zero() {
        let item = food(100, 1.0, 1.0, 1.0);
        let weights = NutrientWeights::default();
        let target = NutrientTarget::default().with(Nutrient::Fat, 0.0);
        assert_eq!(score_food(&item, &target, &weights), 0.0);
        assert_eq!(score_food(&item, &NutrientTarget::default(), &weights), 0.0);
    }
}
