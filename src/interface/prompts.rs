use dialoguer::{Confirm, Input};

use crate::config::PlanRequest;
use crate::error::{PlannerError, Result};
use crate::models::{DEFAULT_WEIGHT, Nutrient, NutrientBound, Slot, SlotCapacity, SlotCaps};

fn parse_optional_f64(part: &str) -> Result<Option<f64>> {
    let part = part.trim();
    if part.is_empty() {
        return Ok(None);
    }
    part.parse()
        .map(Some)
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", part)))
}

/// Parse a bound written as `min,max`, `,max` or `min,`.
///
/// Empty input means no bound. A lone `,` records an explicitly open bound,
/// which keeps the default calorie band from being applied.
pub fn parse_bound(input: &str) -> Result<Option<NutrientBound>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let (min, max) = input.split_once(',').ok_or_else(|| {
        PlannerError::InvalidInput(format!("expected 'min,max', got '{}'", input))
    })?;

    let bound = NutrientBound::new(parse_optional_f64(min)?, parse_optional_f64(max)?);
    if let (Some(min), Some(max)) = (bound.min, bound.max) {
        if min > max {
            return Err(PlannerError::InvalidInput(format!(
                "minimum {} exceeds maximum {}",
                min, max
            )));
        }
    }

    Ok(Some(bound))
}

/// Parse a slot capacity written as `min,max`.
///
/// Input without a comma keeps the default; an empty side keeps that side's default.
pub fn parse_capacity(input: &str, default: SlotCapacity) -> Result<SlotCapacity> {
    let Some((min, max)) = input.trim().split_once(',') else {
        return Ok(default);
    };

    let parse_side = |part: &str, fallback: usize| -> Result<usize> {
        let part = part.trim();
        if part.is_empty() {
            return Ok(fallback);
        }
        part.parse()
            .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a whole number", part)))
    };

    SlotCapacity::new(parse_side(min, default.min)?, parse_side(max, default.max)?)
}

/// Parse a bound, falling back to no bound when the input is unusable.
pub fn bound_or_unconstrained(nutrient: Nutrient, input: &str) -> Option<NutrientBound> {
    match parse_bound(input) {
        Ok(bound) => bound,
        Err(e) => {
            println!("{}; {} left unconstrained.", e, nutrient);
            None
        }
    }
}

/// Parse a slot capacity, falling back to the default when the input is unusable.
pub fn capacity_or_default(slot: Slot, input: &str, default: SlotCapacity) -> SlotCapacity {
    match parse_capacity(input, default) {
        Ok(capacity) => capacity,
        Err(e) => {
            println!("{}; {} keeps {},{}.", e, slot.label(), default.min, default.max);
            default
        }
    }
}

/// Prompt for a nutrient goal. Empty or invalid input leaves it unset.
pub fn prompt_target(nutrient: Nutrient) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(format!("Daily {} target ({}), Enter to skip", nutrient, nutrient.unit()))
        .allow_empty(true)
        .interact_text()?;

    match parse_optional_f64(&input) {
        Ok(Some(goal)) if goal >= 0.0 => Ok(Some(goal)),
        Ok(None) => Ok(None),
        _ => {
            println!("Invalid value, {} left unconstrained.", nutrient);
            Ok(None)
        }
    }
}

/// Prompt for the importance weight of a targeted nutrient.
pub fn prompt_weight(nutrient: Nutrient) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Importance of {} (1.0 = standard)", nutrient))
        .default(DEFAULT_WEIGHT.to_string())
        .interact_text()?;

    match parse_optional_f64(&input) {
        Ok(Some(weight)) if weight >= 0.0 => Ok(weight),
        _ => {
            println!("Invalid weight, using {}.", DEFAULT_WEIGHT);
            Ok(DEFAULT_WEIGHT)
        }
    }
}

/// Prompt for a `min,max` bound on a nutrient total.
pub fn prompt_bound(nutrient: Nutrient) -> Result<Option<NutrientBound>> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Limits for {} as min,max (e.g. '50,100' or ',80'), Enter to skip",
            nutrient
        ))
        .allow_empty(true)
        .interact_text()?;

    Ok(bound_or_unconstrained(nutrient, &input))
}

/// Prompt for how many items a slot may hold.
pub fn prompt_slot_capacity(slot: Slot, default: SlotCapacity) -> Result<SlotCapacity> {
    let input: String = Input::new()
        .with_prompt(format!("{} items as min,max", slot.label()))
        .default(format!("{},{}", default.min, default.max))
        .interact_text()?;

    Ok(capacity_or_default(slot, &input, default))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect targets, weights, limits and slot sizes for a planning run.
pub fn collect_plan_request() -> Result<PlanRequest> {
    let mut request = PlanRequest::default();

    println!("Nutrient targets");
    for nutrient in Nutrient::ALL {
        let goal = prompt_target(nutrient)?;
        request.targets.set(nutrient, goal);
        if goal.is_some() {
            request.weights.set(nutrient, Some(prompt_weight(nutrient)?));
        }
    }

    println!();
    println!("Limits");
    for nutrient in Nutrient::ALL {
        request.bounds.set(nutrient, prompt_bound(nutrient)?);
    }
    request.apply_default_calorie_band();

    println!();
    println!("Meal sizes");
    let defaults = SlotCaps::default();
    for slot in Slot::PRIORITY {
        let capacity = prompt_slot_capacity(slot, defaults.get(slot))?;
        request.slot_caps.set(slot, capacity);
    }

    Ok(request)
}
