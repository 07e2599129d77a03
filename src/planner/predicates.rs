use crate::models::{FoodRecord, Nutrient, Slot};

/// A composable yes/no test over a food record.
#[derive(Debug, Clone, PartialEq)]
pub enum FoodFilter {
    /// Food is eligible for the slot.
    Slot(Slot),
    /// Food carries the tag.
    HasTag(String),
    /// Food does not carry the tag.
    LacksTag(String),
    /// Nutrient value is at most the limit.
    AtMost(Nutrient, f64),
    /// Nutrient value is at least the limit.
    AtLeast(Nutrient, f64),
    /// Every inner filter matches. An empty list matches everything.
    AllOf(Vec<FoodFilter>),
}

impl FoodFilter {
    pub fn matches(&self, food: &FoodRecord) -> bool {
        match self {
            FoodFilter::Slot(slot) => food.is_eligible_for(*slot),
            FoodFilter::HasTag(tag) => food.has_tag(tag),
            FoodFilter::LacksTag(tag) => !food.has_tag(tag),
            FoodFilter::AtMost(nutrient, limit) => food.nutrient(*nutrient) <= *limit,
            FoodFilter::AtLeast(nutrient, limit) => food.nutrient(*nutrient) >= *limit,
            FoodFilter::AllOf(filters) => filters.iter().all(|f| f.matches(food)),
        }
    }
}

pub fn by_slot(slot: Slot) -> FoodFilter {
    FoodFilter::Slot(slot)
}

pub fn by_tag(tag: &str) -> FoodFilter {
    FoodFilter::HasTag(tag.to_string())
}

pub fn not_tag(tag: &str) -> FoodFilter {
    FoodFilter::LacksTag(tag.to_string())
}

pub fn max_nutrient(nutrient: Nutrient, limit: f64) -> FoodFilter {
    FoodFilter::AtMost(nutrient, limit)
}

pub fn min_nutrient(nutrient: Nutrient, limit: f64) -> FoodFilter {
    FoodFilter::AtLeast(nutrient, limit)
}

pub fn all_of(filters: impl IntoIterator<Item = FoodFilter>) -> FoodFilter {
    FoodFilter::AllOf(filters.into_iter().collect())
}

/// Keep the items matching `filter`, preserving input order.
pub fn filter_items<'a, I>(items: I, filter: &FoodFilter) -> Vec<&'a FoodRecord>
where
    I: IntoIterator<Item = &'a FoodRecord>,
{
    items.into_iter().filter(|food| filter.matches(food)).collect()
}
