use serde_json::{Value, json};

use crate::error::PlannerError;
use crate::models::{FoodRecord, MealPlan, Nutrient, NutrientTarget, Slot};
use crate::planner::constants::{NEAR_TARGET_PCT, ON_TARGET_PCT};

const RULE_WIDTH: usize = 50;

/// How close a plan total came to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStatus {
    OnTarget,
    Close,
    Off,
}

impl ComparisonStatus {
    /// Classify a signed percentage deviation.
    pub fn from_deviation(deviation_pct: f64) -> Self {
        let magnitude = deviation_pct.abs();
        if magnitude < ON_TARGET_PCT {
            ComparisonStatus::OnTarget
        } else if magnitude < NEAR_TARGET_PCT {
            ComparisonStatus::Close
        } else {
            ComparisonStatus::Off
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonStatus::OnTarget => "✅",
            ComparisonStatus::Close => "⚠️",
            ComparisonStatus::Off => "❌",
        }
    }
}

/// Actual total versus target for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetComparison {
    pub nutrient: Nutrient,
    pub actual: f64,
    pub target: f64,
    pub deviation_pct: f64,
    pub status: ComparisonStatus,
}

/// Compare plan totals with every set target.
///
/// A zero target reports a deviation of 0 %.
pub fn compare_to_targets(plan: &MealPlan<'_>, targets: &NutrientTarget) -> Vec<TargetComparison> {
    let totals = plan.totals();
    targets
        .active()
        .map(|(nutrient, target)| {
            let actual = totals.get(nutrient);
            let deviation_pct = if target > 0.0 {
                (actual - target) / target * 100.0
            } else {
                0.0
            };
            TargetComparison {
                nutrient,
                actual,
                target,
                deviation_pct,
                status: ComparisonStatus::from_deviation(deviation_pct),
            }
        })
        .collect()
}

fn names(foods: &[&FoodRecord]) -> String {
    if foods.is_empty() {
        "—".to_string()
    } else {
        foods.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
    }
}

/// Display the plan slot by slot, followed by the day's totals.
pub fn display_meal_plan(plan: &MealPlan<'_>) {
    let rule = "=".repeat(RULE_WIDTH);
    let totals = plan.totals();

    println!("{}", rule);
    println!("MEAL PLAN");
    println!("{}", rule);
    for slot in Slot::PRIORITY {
        let label = format!("{}:", slot.label());
        println!("• {:<11}{}", label, names(plan.slot(slot)));
    }
    println!("{}", rule);
    println!("TOTALS:");
    println!("• Calories: {:>8} kcal", totals.calories);
    println!("• Protein:  {:>8.1} g", totals.protein);
    println!("• Fat:      {:>8.1} g", totals.fat);
    println!("• Carbs:    {:>8.1} g", totals.carbs);
    println!("{}", rule);
}

/// Display how the plan's totals compare to the requested targets.
pub fn display_target_comparison(plan: &MealPlan<'_>, targets: &NutrientTarget) {
    let comparisons = compare_to_targets(plan, targets);
    if comparisons.is_empty() {
        return;
    }

    println!();
    println!("Compared with targets:");
    println!("{}", "-".repeat(30));
    for c in comparisons {
        println!(
            "{} {}: {:.1} vs {:.1} ({:+.1}%)",
            c.status.symbol(),
            c.nutrient,
            c.actual,
            c.target,
            c.deviation_pct
        );
    }
}

/// Explain that no plan could be built, with the reason when known.
pub fn display_no_plan(reason: Option<&PlannerError>) {
    println!("No suitable meal plan could be assembled.");
    if let Some(reason) = reason {
        println!("Reason: {}", reason);
    }
    println!();
    println!("Tips:");
    println!("  • Relax the limits");
    println!("  • Add more foods to the catalog");
    println!("  • Adjust the target values or meal sizes");
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let slots: Vec<&str> = food.slots().iter().map(|s| s.name()).collect();
        let tags: Vec<&str> = food.tags().iter().map(String::as_str).collect();
        println!(
            "  {} - {} kcal, P:{} F:{} C:{} [{}]{}",
            food.name(),
            food.calories(),
            food.protein(),
            food.fat(),
            food.carbs(),
            slots.join("|"),
            if tags.is_empty() {
                String::new()
            } else {
                format!(" #{}", tags.join(" #"))
            }
        );
    }

    println!();
}

/// Machine-readable form of a plan.
pub fn plan_to_json(plan: &MealPlan<'_>) -> Value {
    let slot_names = |slot: Slot| {
        plan.slot(slot)
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
    };

    json!({
        "breakfast": slot_names(Slot::Breakfast),
        "lunch": slot_names(Slot::Lunch),
        "dinner": slot_names(Slot::Dinner),
        "snacks": slot_names(Slot::Snack),
        "totals": plan.totals(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::MealPlanBuilder;

    fn sample_foods() -> Vec<FoodRecord> {
        vec![
            FoodRecord::new("Toast", 200, 8.0, 3.0, 36.0).unwrap(),
            FoodRecord::new("Soup", 300, 12.0, 9.0, 40.0).unwrap(),
            FoodRecord::new("Fish", 500, 40.0, 18.0, 20.0).unwrap(),
        ]
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(ComparisonStatus::from_deviation(-9.9), ComparisonStatus::OnTarget);
        assert_eq!(ComparisonStatus::from_deviation(10.0), ComparisonStatus::Close);
        assert_eq!(ComparisonStatus::from_deviation(-19.9), ComparisonStatus::Close);
        assert_eq!(ComparisonStatus::from_deviation(20.0), ComparisonStatus::Off);
    }

    #[test]
    fn test_compare_to_targets() {
        let foods = sample_foods();
        let mut builder = MealPlanBuilder::new();
        builder.add_breakfast(&foods[0]).add_lunch(&foods[1]).add_dinner(&foods[2]);
        let plan = builder.build(None).unwrap();

        let targets = NutrientTarget::default()
            .with(Nutrient::Calories, 1000.0)
            .with(Nutrient::Fat, 0.0);
        let comparisons = compare_to_targets(&plan, &targets);

        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].nutrient, Nutrient::Calories);
        assert!((comparisons[0].deviation_pct - 0.0).abs() < 1e-9);
        assert_eq!(comparisons[0].status, ComparisonStatus::OnTarget);
        assert_eq!(comparisons[1].deviation_pct, 0.0);
    }

    #[test]
    fn test_plan_to_json() {
        let foods = sample_foods();
        let mut builder = MealPlanBuilder::new();
        builder.add_breakfast(&foods[0]).add_lunch(&foods[1]).add_dinner(&foods[2]);
        let plan = builder.build(None).unwrap();

        let value = plan_to_json(&plan);
        assert_eq!(value["breakfast"][0], "Toast");
        assert_eq!(value["snacks"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["totals"]["calories"], 1000);
    }
}
