use meal_planner_rs::catalog::{Catalog, read_catalog};
use meal_planner_rs::config::PlanRequest;
use meal_planner_rs::error::PlannerError;
use meal_planner_rs::models::{
    FoodRecord, Nutrient, NutrientBound, NutrientBounds, NutrientTarget, NutrientTotals, Slot,
    SlotCapacity,
};
use meal_planner_rs::planner::{
    MealPlanBuilder, find_optimal_plan, select_greedy, try_find_plan,
};

fn food(name: &str, calories: u32, slots: &[Slot], tags: &[&str]) -> FoodRecord {
    FoodRecord::new(name, calories, 0.0, 0.0, 0.0)
        .unwrap()
        .with_slots(slots.iter().copied())
        .unwrap()
        .with_tags(tags)
}

fn names(foods: &[&FoodRecord]) -> Vec<String> {
    foods.iter().map(|f| f.name().to_string()).collect()
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        food("Porridge", 500, &[Slot::Breakfast], &[]),
        food("Pasta", 700, &[Slot::Lunch], &[]),
        food("Salmon", 600, &[Slot::Dinner], &["fish"]),
        food("Apple", 100, &[Slot::Snack], &["fruit"]),
    ])
}

fn daily_request() -> PlanRequest {
    PlanRequest {
        targets: NutrientTarget::default().with(Nutrient::Calories, 2000.0),
        bounds: NutrientBounds::default()
            .with(Nutrient::Calories, NutrientBound::between(1800.0, 2200.0)),
        ..Default::default()
    }
}

#[test]
fn test_plan_totals_are_additive() {
    let food_a = FoodRecord::new("Food A", 300, 20.0, 10.0, 30.0)
        .unwrap()
        .with_slots([Slot::Breakfast, Slot::Lunch])
        .unwrap();
    let food_b = FoodRecord::new("Food B", 200, 15.0, 5.0, 25.0)
        .unwrap()
        .with_slots([Slot::Lunch, Slot::Dinner])
        .unwrap();

    let mut builder = MealPlanBuilder::new();
    builder.set_slot_limits(Slot::Dinner, 0, 3).unwrap();
    builder.add_breakfast(&food_a).add_lunch(&food_b);
    let plan = builder.build(None).unwrap();

    let totals = plan.totals();
    assert_eq!(totals.calories, 500);
    assert_eq!(totals.protein, 35.0);
    assert_eq!(totals.fat, 15.0);
    assert_eq!(totals.carbs, 55.0);

    let by_slot = Slot::PRIORITY
        .into_iter()
        .map(|slot| plan.slot_totals(slot))
        .fold(NutrientTotals::default(), |acc, t| acc + t);
    assert_eq!(by_slot, totals);
}

#[test]
fn test_feasible_plan() {
    let catalog = sample_catalog();
    let plan = find_optimal_plan(catalog.foods(), &daily_request()).expect("plan should exist");

    assert_eq!(names(plan.breakfast()), vec!["Porridge"]);
    assert_eq!(names(plan.lunch()), vec!["Pasta"]);
    assert_eq!(names(plan.dinner()), vec!["Salmon"]);
    assert_eq!(names(plan.snacks()), vec!["Apple"]);
    assert_eq!(plan.totals().calories, 1900);
}

#[test]
fn test_plan_borrows_catalog_records() {
    let catalog = sample_catalog();
    let plan = find_optimal_plan(catalog.foods(), &daily_request()).unwrap();

    let porridge = catalog.get("porridge").unwrap();
    assert!(std::ptr::eq(plan.breakfast()[0], porridge));
}

#[test]
fn test_no_dinner_food_means_no_plan() {
    let catalog = Catalog::new(vec![
        food("Porridge", 500, &[Slot::Breakfast, Slot::Lunch], &[]),
        food("Pasta", 700, &[Slot::Lunch], &[]),
    ]);

    assert!(find_optimal_plan(catalog.foods(), &daily_request()).is_none());

    let err = try_find_plan(catalog.foods(), &daily_request()).unwrap_err();
    assert!(matches!(
        err,
        PlannerError::SlotUnderfilled {
            slot: Slot::Dinner,
            actual: 0,
            min: 1
        }
    ));
}

#[test]
fn test_total_over_bound_means_no_plan() {
    let catalog = sample_catalog();
    let mut request = daily_request();
    request.bounds.calories = Some(NutrientBound::between(1800.0, 1850.0));

    // Each slot alone stays under 1850, the whole day (1900) does not
    let err = try_find_plan(catalog.foods(), &request).unwrap_err();
    assert!(matches!(
        err,
        PlannerError::AboveMaximum {
            nutrient: Nutrient::Calories,
            ..
        }
    ));
}

#[test]
fn test_planning_is_deterministic() {
    let catalog = sample_catalog();
    let first = find_optimal_plan(catalog.foods(), &daily_request());
    let second = find_optimal_plan(catalog.foods(), &daily_request());
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_without_targets_takes_catalog_order() {
    let catalog = Catalog::new(vec![
        food("Toast", 250, &[Slot::Breakfast], &[]),
        food("Cereal", 200, &[Slot::Breakfast], &[]),
        food("Muesli", 300, &[Slot::Breakfast], &[]),
        food("Stew", 600, &[Slot::Lunch, Slot::Dinner], &[]),
        food("Curry", 650, &[Slot::Dinner], &[]),
    ]);

    let plan = find_optimal_plan(catalog.foods(), &PlanRequest::default()).unwrap();

    // Breakfast takes its first two; Stew goes to lunch for both its passes
    // (once as a lunch pick, once as a dinner pick), Curry fills dinner
    assert_eq!(names(plan.breakfast()), vec!["Toast", "Cereal"]);
    assert_eq!(names(plan.lunch()), vec!["Stew", "Stew"]);
    assert_eq!(names(plan.dinner()), vec!["Curry"]);
    assert!(plan.snacks().is_empty());
}

#[test]
fn test_meat_stays_out_of_breakfast() {
    let catalog = Catalog::new(vec![
        food("Porridge", 500, &[Slot::Breakfast], &[]),
        food("Bacon", 500, &[Slot::Breakfast, Slot::Lunch], &["meat"]),
        food("Pasta", 700, &[Slot::Lunch], &[]),
        food("Salmon", 600, &[Slot::Dinner], &[]),
        food("Apple", 100, &[Slot::Snack], &[]),
    ]);
    let request = PlanRequest {
        targets: NutrientTarget::default().with(Nutrient::Calories, 2000.0),
        ..Default::default()
    };

    let plan = find_optimal_plan(catalog.foods(), &request).unwrap();
    assert_eq!(names(plan.breakfast()), vec!["Porridge"]);
    assert_eq!(names(plan.lunch()), vec!["Bacon", "Pasta", "Bacon"]);
    assert!(plan.breakfast().iter().all(|f| !f.has_tag("meat")));
}

#[test]
fn test_fallback_into_ineligible_slot_means_no_plan() {
    // Bacon takes two lunch places (once from each pool), so the third lunch
    // pick, Soup, is pushed into breakfast where it does not belong
    let catalog = Catalog::new(vec![
        food("Bacon", 270, &[Slot::Breakfast, Slot::Lunch], &["meat"]),
        food("Pasta", 700, &[Slot::Lunch], &[]),
        food("Soup", 260, &[Slot::Lunch], &[]),
        food("Salad", 90, &[Slot::Lunch], &[]),
        food("Salmon", 600, &[Slot::Dinner], &[]),
    ]);

    let err = try_find_plan(catalog.foods(), &PlanRequest::default()).unwrap_err();
    match err {
        PlannerError::IneligibleFood { food, slot } => {
            assert_eq!(food, "Soup");
            assert_eq!(slot, Slot::Breakfast);
        }
        other => panic!("expected ineligible soup at breakfast, got {:?}", other),
    }
    assert!(find_optimal_plan(catalog.foods(), &PlanRequest::default()).is_none());
}

#[test]
fn test_successful_plans_respect_slot_caps() {
    let csv = "\
name,calories,protein,fat,carbs,meal_times,tags
Oatmeal,310,12,8,48,breakfast,vegetarian
Yogurt,130,17,4,6,breakfast|snack,dairy
Bread,250,10,3,45,,vegan
Chicken,330,62,7,0,lunch|dinner,meat
Rice,350,7,1,77,lunch|dinner,vegan
Salad,90,3,4,10,lunch|dinner,vegan
Apple,80,0.4,0.3,21,snack,fruit
";
    let catalog = read_catalog(csv.as_bytes());
    assert_eq!(catalog.len(), 7);

    let mut request = PlanRequest {
        targets: NutrientTarget::default()
            .with(Nutrient::Calories, 2000.0)
            .with(Nutrient::Protein, 120.0),
        ..Default::default()
    };
    request.slot_caps.set(Slot::Snack, SlotCapacity { min: 0, max: 1 });

    let plan = try_find_plan(catalog.foods(), &request).unwrap();
    for slot in Slot::PRIORITY {
        assert!(request.slot_caps.get(slot).contains(plan.slot(slot).len()));
    }
}

#[test]
fn test_selector_never_exceeds_max_at_acceptance() {
    let owned: Vec<FoodRecord> = (1..=8)
        .map(|i| food(&format!("Food {}", i), i * 90, &Slot::PRIORITY, &[]))
        .collect();
    let foods: Vec<&FoodRecord> = owned.iter().collect();
    let target = NutrientTarget::default().with(Nutrient::Calories, 400.0);
    let bounds = NutrientBounds::default().with(Nutrient::Calories, NutrientBound::at_most(1000.0));

    let selected = select_greedy(&foods, &target, &bounds, &Default::default(), 3);
    assert!(selected.len() <= 3);

    let mut running = 0u64;
    for item in &selected {
        running += u64::from(item.calories());
        assert!(running <= 1000);
    }
}

#[test]
fn test_demo_profile_plans_on_sample_catalog() {
    let catalog =
        meal_planner_rs::load_catalog(concat!(env!("CARGO_MANIFEST_DIR"), "/data/foods.csv"));
    assert_eq!(catalog.len(), 17);

    let request = PlanRequest::high_protein_demo();
    let profile = PlanRequest::from_json_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/high_protein.json"
    ))
    .unwrap();
    assert_eq!(profile, request);

    let plan = try_find_plan(catalog.foods(), &request).unwrap();
    let totals = plan.totals();
    assert_eq!(totals.calories, 2680);
    assert!(totals.fat <= 90.0);
    assert!((180.0..=220.0).contains(&totals.carbs));

    // Bacon is breakfast-only, so it lands there by fallback
    assert_eq!(names(plan.breakfast()), vec!["Bacon", "Oatmeal with Milk"]);
    for slot in Slot::PRIORITY {
        assert!(plan.slot(slot).iter().all(|f| f.is_eligible_for(slot)));
    }
}
