use crate::models::{FoodRecord, NutrientTotals, PerSlot, Slot};

/// A validated daily meal plan.
///
/// Holds references into the catalog that produced it. Only
/// [`MealPlanBuilder::build`](crate::planner::MealPlanBuilder::build) creates
/// plans, so every plan satisfies the slot capacities and bounds it was
/// assembled against.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan<'a> {
    breakfast: Vec<&'a FoodRecord>,
    lunch: Vec<&'a FoodRecord>,
    dinner: Vec<&'a FoodRecord>,
    snacks: Vec<&'a FoodRecord>,
}

impl<'a> MealPlan<'a> {
    pub(crate) fn from_slots(slots: PerSlot<&'a FoodRecord>) -> Self {
        let [breakfast, lunch, dinner, snacks] = slots.into_lists();
        Self {
            breakfast,
            lunch,
            dinner,
            snacks,
        }
    }

    pub fn breakfast(&self) -> &[&'a FoodRecord] {
        &self.breakfast
    }

    pub fn lunch(&self) -> &[&'a FoodRecord] {
        &self.lunch
    }

    pub fn dinner(&self) -> &[&'a FoodRecord] {
        &self.dinner
    }

    pub fn snacks(&self) -> &[&'a FoodRecord] {
        &self.snacks
    }

    pub fn slot(&self, slot: Slot) -> &[&'a FoodRecord] {
        match slot {
            Slot::Breakfast => &self.breakfast,
            Slot::Lunch => &self.lunch,
            Slot::Dinner => &self.dinner,
            Slot::Snack => &self.snacks,
        }
    }

    /// Every item in slot order: breakfast, lunch, dinner, snacks.
    pub fn all_items(&self) -> impl Iterator<Item = &'a FoodRecord> + '_ {
        Slot::PRIORITY
            .into_iter()
            .flat_map(move |slot| self.slot(slot).iter().copied())
    }

    pub fn item_count(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len() + self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Summed nutrients over the whole day.
    pub fn totals(&self) -> NutrientTotals {
        self.all_items().collect()
    }

    /// Summed nutrients for a single slot.
    pub fn slot_totals(&self, slot: Slot) -> NutrientTotals {
        self.slot(slot).iter().copied().collect()
    }
}
