use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::{Nutrient, Slot};

/// A catalog food with its nutrient values, eligible meal slots and tags.
///
/// Records are validated on construction and never change afterwards:
/// calories and macros are non-negative, the name is non-empty and at least
/// one slot is eligible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodRecord {
    name: String,
    calories: u32,
    protein: f64,
    fat: f64,
    carbs: f64,
    slots: BTreeSet<Slot>,
    tags: BTreeSet<String>,
}

fn invalid(name: &str, reason: impl Into<String>) -> PlannerError {
    PlannerError::InvalidFood {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn check_macro(name: &str, label: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            name,
            format!("{} must be a non-negative number, got {}", label, value),
        ));
    }
    Ok(())
}

impl FoodRecord {
    /// Create a record eligible for every slot and without tags.
    pub fn new(name: &str, calories: u32, protein: f64, fat: f64, carbs: f64) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid(name, "name must not be empty"));
        }
        check_macro(name, "protein", protein)?;
        check_macro(name, "fat", fat)?;
        check_macro(name, "carbs", carbs)?;

        Ok(Self {
            name: name.to_string(),
            calories,
            protein,
            fat,
            carbs,
            slots: Slot::PRIORITY.into_iter().collect(),
            tags: BTreeSet::new(),
        })
    }

    /// Restrict the record to the given slots. An empty set is rejected.
    pub fn with_slots<I>(mut self, slots: I) -> Result<Self>
    where
        I: IntoIterator<Item = Slot>,
    {
        let slots: BTreeSet<Slot> = slots.into_iter().collect();
        if slots.is_empty() {
            return Err(invalid(&self.name, "at least one meal slot is required"));
        }
        self.slots = slots;
        Ok(self)
    }

    /// Attach descriptive tags. Blank tags are ignored.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn slots(&self) -> &BTreeSet<Slot> {
        &self.slots
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Value of a tracked nutrient.
    #[inline]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => f64::from(self.calories),
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbs => self.carbs,
        }
    }

    #[inline]
    pub fn is_eligible_for(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
