#[macro_use]
extern crate assert_float_eq;

use meal_planner_rs::models::{FoodRecord, Nutrient, NutrientTarget, NutrientWeights};
use meal_planner_rs::planner::{OVERSHOOT_RATIO, nutrient_contribution, rank_foods, score_food};

fn make_food(name: &str, cal: u32, p: f64, f: f64, c: f64) -> FoodRecord {
    FoodRecord::new(name, cal, p, f, c).unwrap()
}

fn full_target(cal: f64, p: f64, f: f64, c: f64) -> NutrientTarget {
    NutrientTarget {
        calories: Some(cal),
        protein: Some(p),
        fat: Some(f),
        carbs: Some(c),
    }
}

#[test]
fn test_perfect_match_scores_one() {
    let food = make_food("Match", 300, 20.0, 10.0, 30.0);
    let target = full_target(300.0, 20.0, 10.0, 30.0);

    let score = score_food(&food, &target, &NutrientWeights::default());
    assert_float_absolute_eq!(score, 1.0, 1e-9);
}

#[test]
fn test_mixed_contributions() {
    let food = make_food("Mixed", 300, 20.0, 10.0, 30.0);
    // calories at 0.5x (+0.5), protein at 2x (-1.0), fat and carbs exact (+1.0 each)
    let target = full_target(600.0, 10.0, 10.0, 30.0);

    let score = score_food(&food, &target, &NutrientWeights::default());
    assert_float_absolute_eq!(score, 1.5 / 4.0, 1e-9);

    // Doubling the protein weight doubles its penalty
    let weights = NutrientWeights::default().with(Nutrient::Protein, 2.0);
    let weighted = score_food(&food, &target, &weights);
    assert_float_absolute_eq!(weighted, 0.5 / 4.0, 1e-9);
}

#[test]
fn test_partial_target_still_divides_by_four() {
    let food = make_food("Protein", 100, 25.0, 0.0, 0.0);
    let target = NutrientTarget::default().with(Nutrient::Protein, 25.0);

    let score = score_food(&food, &target, &NutrientWeights::default());
    assert_float_absolute_eq!(score, 0.25, 1e-9);
}

#[test]
fn test_reward_branch_is_linear_up_to_overshoot() {
    // Between ratio 1 and 1.5 the reward falls linearly
    assert_float_absolute_eq!(nutrient_contribution(125.0, 100.0, 1.0), 0.75, 1e-9);
    assert_float_absolute_eq!(
        nutrient_contribution(100.0 * OVERSHOOT_RATIO, 100.0, 1.0),
        0.5,
        1e-9
    );
    // Just past it the penalty kicks in
    assert!(nutrient_contribution(151.0, 100.0, 1.0) < 0.0);
}

#[test]
fn test_ranking_prefers_closer_foods() {
    let far = make_food("Far", 900, 5.0, 40.0, 90.0);
    let close = make_food("Close", 520, 30.0, 20.0, 55.0);
    let middle = make_food("Middle", 350, 15.0, 10.0, 40.0);
    let foods = vec![&far, &close, &middle];
    let target = full_target(500.0, 30.0, 20.0, 50.0);

    let ranked = rank_foods(&foods, &target, &NutrientWeights::default());
    let order: Vec<&str> = ranked.iter().map(|c| c.food.name()).collect();
    assert_eq!(order, vec!["Close", "Middle", "Far"]);

    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
