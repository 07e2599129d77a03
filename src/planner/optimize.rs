use crate::config::PlanRequest;
use crate::error::Result;
use crate::models::{FoodRecord, MealPlan, PerSlot, Slot};
use crate::planner::allocation::distribute_to_slots;
use crate::planner::assembly::MealPlanBuilder;
use crate::planner::constants::SLOT_SHARES;
use crate::planner::predicates::{by_slot, filter_items};
use crate::planner::selection::select_greedy;

/// Catalog foods eligible for each slot, in catalog order.
fn partition_by_slot(foods: &[FoodRecord]) -> PerSlot<&FoodRecord> {
    let mut partition = PerSlot::new();
    for slot in Slot::PRIORITY {
        for food in filter_items(foods, &by_slot(slot)) {
            partition.push(slot, food);
        }
    }
    partition
}

/// Run the selector for every slot against its share of the daily target.
fn select_per_slot<'a>(
    slot_foods: &PerSlot<&'a FoodRecord>,
    request: &PlanRequest,
) -> Vec<&'a FoodRecord> {
    let mut pooled = Vec::new();

    for (slot, share) in SLOT_SHARES {
        let eligible = slot_foods.get(slot);
        if eligible.is_empty() {
            tracing::debug!(%slot, "no eligible foods");
            continue;
        }

        let slot_target = request.targets.scaled(share);
        let max_items = request.slot_caps.get(slot).max;
        let selected = select_greedy(
            eligible,
            &slot_target,
            &request.bounds,
            &request.weights,
            max_items,
        );

        tracing::debug!(
            %slot,
            eligible = eligible.len(),
            selected = selected.len(),
            "slot selection done"
        );
        pooled.extend(selected.into_iter().take(max_items));
    }

    pooled
}

/// Without targets, take the first foods of each slot in catalog order.
fn take_in_catalog_order<'a>(
    slot_foods: &PerSlot<&'a FoodRecord>,
    request: &PlanRequest,
) -> Vec<&'a FoodRecord> {
    Slot::PRIORITY
        .into_iter()
        .flat_map(|slot| {
            let max_items = request.slot_caps.get(slot).max;
            slot_foods.get(slot).iter().copied().take(max_items)
        })
        .collect()
}

/// Build a plan, reporting why when no valid plan comes out.
///
/// 1. Partition the catalog by slot eligibility
/// 2. Select per slot against its share of the daily target (or take foods
///    in catalog order when no target is set)
/// 3. Distribute the pooled selection into slots
/// 4. Assemble and validate against slot capacities and daily bounds
pub fn try_find_plan<'a>(
    foods: &'a [FoodRecord],
    request: &PlanRequest,
) -> Result<MealPlan<'a>> {
    request.validate()?;

    let slot_foods = partition_by_slot(foods);
    let pooled = if request.targets.is_empty() {
        take_in_catalog_order(&slot_foods, request)
    } else {
        select_per_slot(&slot_foods, request)
    };

    let distribution = distribute_to_slots(&pooled, &request.slot_caps);

    let mut builder = MealPlanBuilder::new().with_slot_caps(request.slot_caps);
    builder.extend_from(&distribution);
    builder.build(Some(&request.bounds))
}

/// Find the best plan the greedy heuristic can produce.
///
/// Infeasible constraints are an expected outcome: any failure is logged and
/// turned into `None`. Constraint violations log at info, anything else
/// (such as an invalid request) at warn.
pub fn find_optimal_plan<'a>(
    foods: &'a [FoodRecord],
    request: &PlanRequest,
) -> Option<MealPlan<'a>> {
    match try_find_plan(foods, request) {
        Ok(plan) => Some(plan),
        Err(e) if e.is_constraint_violation() => {
            tracing::info!("No meal plan satisfies the constraints: {}", e);
            None
        }
        Err(e) => {
            tracing::warn!("No meal plan found: {}", e);
            None
        }
    }
}
