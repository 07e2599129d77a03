use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A named meal time within the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl Slot {
    /// Fixed priority order used when filling and validating slots.
    pub const PRIORITY: [Slot; 4] = [Slot::Breakfast, Slot::Lunch, Slot::Dinner, Slot::Snack];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Breakfast => "breakfast",
            Slot::Lunch => "lunch",
            Slot::Dinner => "dinner",
            Slot::Snack => "snack",
        }
    }

    /// Heading used when rendering a plan.
    pub fn label(self) -> &'static str {
        match self {
            Slot::Breakfast => "Breakfast",
            Slot::Lunch => "Lunch",
            Slot::Dinner => "Dinner",
            Slot::Snack => "Snacks",
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::Breakfast => 0,
            Slot::Lunch => 1,
            Slot::Dinner => 2,
            Slot::Snack => 3,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Slot::Breakfast),
            "lunch" => Ok(Slot::Lunch),
            "dinner" => Ok(Slot::Dinner),
            "snack" | "snacks" => Ok(Slot::Snack),
            other => Err(PlannerError::UnknownSlot(other.to_string())),
        }
    }
}

/// Allowed item count for one slot, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCapacity {
    pub min: usize,
    pub max: usize,
}

impl SlotCapacity {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(PlannerError::InvalidInput(format!(
                "slot capacity minimum {} exceeds maximum {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

pub const DEFAULT_BREAKFAST_CAPACITY: SlotCapacity = SlotCapacity { min: 1, max: 2 };
pub const DEFAULT_LUNCH_CAPACITY: SlotCapacity = SlotCapacity { min: 1, max: 3 };
pub const DEFAULT_DINNER_CAPACITY: SlotCapacity = SlotCapacity { min: 1, max: 3 };
pub const DEFAULT_SNACK_CAPACITY: SlotCapacity = SlotCapacity { min: 0, max: 2 };

/// Capacity for every slot of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotCaps {
    pub breakfast: SlotCapacity,
    pub lunch: SlotCapacity,
    pub dinner: SlotCapacity,
    pub snack: SlotCapacity,
}

impl Default for SlotCaps {
    fn default() -> Self {
        Self {
            breakfast: DEFAULT_BREAKFAST_CAPACITY,
            lunch: DEFAULT_LUNCH_CAPACITY,
            dinner: DEFAULT_DINNER_CAPACITY,
            snack: DEFAULT_SNACK_CAPACITY,
        }
    }
}

impl SlotCaps {
    pub fn get(&self, slot: Slot) -> SlotCapacity {
        match slot {
            Slot::Breakfast => self.breakfast,
            Slot::Lunch => self.lunch,
            Slot::Dinner => self.dinner,
            Slot::Snack => self.snack,
        }
    }

    pub fn set(&mut self, slot: Slot, capacity: SlotCapacity) {
        match slot {
            Slot::Breakfast => self.breakfast = capacity,
            Slot::Lunch => self.lunch = capacity,
            Slot::Dinner => self.dinner = capacity,
            Slot::Snack => self.snack = capacity,
        }
    }

    pub fn with(mut self, slot: Slot, capacity: SlotCapacity) -> Self {
        self.set(slot, capacity);
        self
    }

    /// Check that every slot has `min <= max`.
    ///
    /// Capacities read from a profile bypass [`SlotCapacity::new`].
    pub fn validate(&self) -> Result<()> {
        for slot in Slot::PRIORITY {
            let cap = self.get(slot);
            if cap.min > cap.max {
                return Err(PlannerError::InvalidInput(format!(
                    "slot '{}': minimum {} exceeds maximum {}",
                    slot, cap.min, cap.max
                )));
            }
        }
        Ok(())
    }
}

/// One ordered list of values per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct PerSlot<T> {
    lists: [Vec<T>; 4],
}

impl<T> Default for PerSlot<T> {
    fn default() -> Self {
        Self {
            lists: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }
}

impl<T> PerSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> &[T] {
        &self.lists[slot.index()]
    }

    pub fn push(&mut self, slot: Slot, value: T) {
        self.lists[slot.index()].push(value);
    }

    pub fn len(&self, slot: Slot) -> usize {
        self.lists[slot.index()].len()
    }

    pub fn total_len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Slots paired with their lists, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[T])> {
        Slot::PRIORITY
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    pub(crate) fn into_lists(self) -> [Vec<T>; 4] {
        self.lists
    }
}
