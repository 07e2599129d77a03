use crate::error::{PlannerError, Result};
use crate::models::{
    FoodRecord, MealPlan, NutrientBounds, NutrientTotals, PerSlot, Slot, SlotCapacity, SlotCaps,
};

/// Staged construction of a [`MealPlan`].
///
/// Slots are filled freely; nothing is checked until [`MealPlanBuilder::build`],
/// which validates eligibility, slot counts and aggregate bounds in one step
/// and either returns the finished plan or the first violation found.
#[derive(Debug, Clone, Default)]
pub struct MealPlanBuilder<'a> {
    slots: PerSlot<&'a FoodRecord>,
    caps: SlotCaps,
}

impl<'a> MealPlanBuilder<'a> {
    /// Empty builder with the default slot capacities.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_caps(mut self, caps: SlotCaps) -> Self {
        self.caps = caps;
        self
    }

    /// Set the allowed item count for one slot.
    pub fn set_slot_limits(
        &mut self,
        slot: Slot,
        min_items: usize,
        max_items: usize,
    ) -> Result<&mut Self> {
        self.caps.set(slot, SlotCapacity::new(min_items, max_items)?);
        Ok(self)
    }

    pub fn add_to_slot(&mut self, slot: Slot, food: &'a FoodRecord) -> &mut Self {
        self.slots.push(slot, food);
        self
    }

    pub fn add_breakfast(&mut self, food: &'a FoodRecord) -> &mut Self {
        self.add_to_slot(Slot::Breakfast, food)
    }

    pub fn add_lunch(&mut self, food: &'a FoodRecord) -> &mut Self {
        self.add_to_slot(Slot::Lunch, food)
    }

    pub fn add_dinner(&mut self, food: &'a FoodRecord) -> &mut Self {
        self.add_to_slot(Slot::Dinner, food)
    }

    pub fn add_snack(&mut self, food: &'a FoodRecord) -> &mut Self {
        self.add_to_slot(Slot::Snack, food)
    }

    /// Add every food of a per-slot distribution, keeping its order.
    pub fn extend_from(&mut self, distribution: &PerSlot<&'a FoodRecord>) -> &mut Self {
        for (slot, foods) in distribution.iter() {
            for &food in foods {
                self.slots.push(slot, food);
            }
        }
        self
    }

    fn check_eligibility(&self) -> Result<()> {
        for (slot, foods) in self.slots.iter() {
            if let Some(food) = foods.iter().find(|food| !food.is_eligible_for(slot)) {
                return Err(PlannerError::IneligibleFood {
                    food: food.name().to_string(),
                    slot,
                });
            }
        }
        Ok(())
    }

    fn check_slot_counts(&self) -> Result<()> {
        for slot in Slot::PRIORITY {
            let cap = self.caps.get(slot);
            let actual = self.slots.len(slot);
            if actual < cap.min {
                return Err(PlannerError::SlotUnderfilled {
                    slot,
                    actual,
                    min: cap.min,
                });
            }
            if actual > cap.max {
                return Err(PlannerError::SlotOverfilled {
                    slot,
                    actual,
                    max: cap.max,
                });
            }
        }
        Ok(())
    }

    fn check_bounds(totals: &NutrientTotals, bounds: &NutrientBounds) -> Result<()> {
        for (nutrient, bound) in bounds.iter() {
            let actual = totals.get(nutrient);
            if let Some(limit) = bound.min {
                if actual < limit {
                    return Err(PlannerError::BelowMinimum {
                        nutrient,
                        actual,
                        limit,
                    });
                }
            }
            if let Some(limit) = bound.max {
                if actual > limit {
                    return Err(PlannerError::AboveMaximum {
                        nutrient,
                        actual,
                        limit,
                    });
                }
            }
        }
        Ok(())
    }

    /// Validate and produce the plan.
    ///
    /// Every food must be eligible for the slot it was added to. Slot counts
    /// are checked next, in slot priority order; then, if `bounds` is given,
    /// the day's totals against every bounded nutrient.
    pub fn build(self, bounds: Option<&NutrientBounds>) -> Result<MealPlan<'a>> {
        self.check_eligibility()?;
        self.check_slot_counts()?;

        let plan = MealPlan::from_slots(self.slots);
        if let Some(bounds) = bounds {
            Self::check_bounds(&plan.totals(), bounds)?;
        }

        Ok(plan)
    }
}
