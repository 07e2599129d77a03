use crate::models::{FoodRecord, Slot};
use crate::planner::predicates::{FoodFilter, by_slot, filter_items};

/// The read-only collection of foods a plan is built from.
///
/// Plans borrow their records from here, so a catalog outlives every plan
/// made from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    foods: Vec<FoodRecord>,
}

impl Catalog {
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        Self { foods }
    }

    /// All foods in load order.
    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodRecord> {
        let wanted = name.trim().to_lowercase();
        self.foods.iter().find(|f| f.name().to_lowercase() == wanted)
    }

    /// Foods matching `filter`, in load order.
    pub fn filter(&self, filter: &FoodFilter) -> Vec<&FoodRecord> {
        filter_items(&self.foods, filter)
    }

    pub fn eligible_for(&self, slot: Slot) -> Vec<&FoodRecord> {
        self.filter(&by_slot(slot))
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
