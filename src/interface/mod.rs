pub mod prompts;
pub mod render;

pub use prompts::{
    bound_or_unconstrained, capacity_or_default, collect_plan_request, parse_bound,
    parse_capacity, prompt_bound, prompt_slot_capacity, prompt_target, prompt_weight,
    prompt_yes_no,
};
pub use render::{
    ComparisonStatus, TargetComparison, compare_to_targets, display_food_list, display_meal_plan,
    display_no_plan, display_target_comparison, plan_to_json,
};
