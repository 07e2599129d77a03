use crate::models::{FoodRecord, PerSlot, Slot, SlotCaps};
use crate::planner::constants::MEAT_TAG;

/// Whether a food may go into a slot on the first, rule-respecting pass.
fn prefers_slot(food: &FoodRecord, slot: Slot) -> bool {
    if !food.is_eligible_for(slot) {
        return false;
    }
    // Meat is kept out of breakfast
    !(slot == Slot::Breakfast && food.has_tag(MEAT_TAG))
}

fn has_room(assigned: &PerSlot<&FoodRecord>, caps: &SlotCaps, slot: Slot) -> bool {
    assigned.len(slot) < caps.get(slot).max
}

/// Distribute foods into slots, in the order given.
///
/// Each food goes to the first slot (breakfast, lunch, dinner, snack) it is
/// eligible for and that still has room. Failing that it goes to the first
/// slot with any room at all, regardless of eligibility. When every slot is
/// full the food is dropped.
pub fn distribute_to_slots<'a>(
    foods: &[&'a FoodRecord],
    caps: &SlotCaps,
) -> PerSlot<&'a FoodRecord> {
    let mut assigned: PerSlot<&'a FoodRecord> = PerSlot::new();

    for &food in foods {
        let preferred = Slot::PRIORITY
            .into_iter()
            .find(|&slot| prefers_slot(food, slot) && has_room(&assigned, caps, slot));

        let chosen = preferred.or_else(|| {
            Slot::PRIORITY
                .into_iter()
                .find(|&slot| has_room(&assigned, caps, slot))
        });

        match chosen {
            Some(slot) => {
                if preferred.is_none() {
                    tracing::debug!(food = food.name(), %slot, "placed by fallback");
                }
                assigned.push(slot, food);
            }
            None => tracing::debug!(food = food.name(), "dropped: every slot is full"),
        }
    }

    assigned
}
