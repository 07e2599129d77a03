mod food;
mod nutrients;
mod plan;
mod slot;

pub use food::FoodRecord;
pub use nutrients::{
    DEFAULT_WEIGHT, Nutrient, NutrientBound, NutrientBounds, NutrientTarget, NutrientTotals,
    NutrientWeights,
};
pub use plan::MealPlan;
pub use slot::{
    DEFAULT_BREAKFAST_CAPACITY, DEFAULT_DINNER_CAPACITY, DEFAULT_LUNCH_CAPACITY,
    DEFAULT_SNACK_CAPACITY, PerSlot, Slot, SlotCapacity, SlotCaps,
};
