pub mod allocation;
pub mod assembly;
pub mod constants;
pub mod optimize;
pub mod predicates;
pub mod scoring;
pub mod selection;

pub use allocation::distribute_to_slots;
pub use assembly::MealPlanBuilder;
pub use constants::*;
pub use optimize::{find_optimal_plan, try_find_plan};
pub use predicates::{
    FoodFilter, all_of, by_slot, by_tag, filter_items, max_nutrient, min_nutrient, not_tag,
};
pub use scoring::{nutrient_contribution, score_food};
pub use selection::{Candidate, rank_foods, select_greedy, within_selection_bounds};
