use std::cmp::Ordering;

use crate::models::{FoodRecord, NutrientBounds, NutrientTarget, NutrientTotals, NutrientWeights};
use crate::planner::scoring::score_food;

/// Food paired with its score.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub food: &'a FoodRecord,
    pub score: f64,
}

/// Score every food and sort best first.
///
/// The sort is stable, so foods with equal scores keep their input order.
pub fn rank_foods<'a>(
    foods: &[&'a FoodRecord],
    target: &NutrientTarget,
    weights: &NutrientWeights,
) -> Vec<Candidate<'a>> {
    let mut candidates: Vec<Candidate<'a>> = foods
        .iter()
        .map(|&food| Candidate {
            food,
            score: score_food(food, target, weights),
        })
        .collect();

    // Higher is better, so reverse the comparison
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}

/// Whether running totals are acceptable during selection.
///
/// Only maxima reject. A nutrient still under its minimum is never a reason
/// to reject, and its maximum is not consulted either; minima are enforced
/// later, when the plan is assembled.
pub fn within_selection_bounds(totals: &NutrientTotals, bounds: &NutrientBounds) -> bool {
    for (nutrient, bound) in bounds.iter() {
        let value = totals.get(nutrient);
        if bound.min.is_some_and(|min| value < min) {
            continue;
        }
        if bound.max.is_some_and(|max| value > max) {
            return false;
        }
    }
    true
}

/// Greedy best-first selection.
///
/// Walks the ranked foods and accepts each one whose addition keeps every
/// bounded nutrient at or under its maximum. A rejected food is skipped for
/// good. Stops after `max_items` acceptances. The result is in ranked order.
pub fn select_greedy<'a>(
    foods: &[&'a FoodRecord],
    target: &NutrientTarget,
    bounds: &NutrientBounds,
    weights: &NutrientWeights,
    max_items: usize,
) -> Vec<&'a FoodRecord> {
    if target.is_empty() || foods.is_empty() {
        return Vec::new();
    }

    let mut selected = Vec::new();
    let mut totals = NutrientTotals::default();

    for candidate in rank_foods(foods, target, weights) {
        if selected.len() >= max_items {
            break;
        }

        let next = totals.with_food(candidate.food);
        if within_selection_bounds(&next, bounds) {
            selected.push(candidate.food);
            totals = next;
        } else {
            tracing::trace!(
                food = candidate.food.name(),
                score = candidate.score,
                "rejected: would exceed a maximum"
            );
        }
    }

    selected
}
