use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::FoodRecord;

/// Default importance weight for a nutrient without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One of the four tracked macro nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Protein,
    Fat,
    Carbs,
}

impl Nutrient {
    /// All tracked nutrients, in reporting order.
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Fat => "fat",
            Nutrient::Carbs => "carbs",
        }
    }

    /// Display unit ("kcal" or "g").
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nutrient {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calories" | "kcal" => Ok(Nutrient::Calories),
            "protein" => Ok(Nutrient::Protein),
            "fat" | "fats" => Ok(Nutrient::Fat),
            "carbs" | "carbohydrates" => Ok(Nutrient::Carbs),
            other => Err(PlannerError::UnknownNutrient(other.to_string())),
        }
    }
}

/// Desired value per nutrient. `None` leaves that nutrient unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientTarget {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
}

impl NutrientTarget {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbs => self.carbs,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, goal: Option<f64>) {
        match nutrient {
            Nutrient::Calories => self.calories = goal,
            Nutrient::Protein => self.protein = goal,
            Nutrient::Fat => self.fat = goal,
            Nutrient::Carbs => self.carbs = goal,
        }
    }

    /// Builder-style variant of [`NutrientTarget::set`].
    pub fn with(mut self, nutrient: Nutrient, goal: f64) -> Self {
        self.set(nutrient, Some(goal));
        self
    }

    /// True when no nutrient has a goal.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Nutrients that have a goal, in `Nutrient::ALL` order.
    pub fn active(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL
            .into_iter()
            .filter_map(|n| self.get(n).map(|goal| (n, goal)))
    }

    /// Every set goal multiplied by `share`.
    pub fn scaled(&self, share: f64) -> Self {
        Self {
            calories: self.calories.map(|v| v * share),
            protein: self.protein.map(|v| v * share),
            fat: self.fat.map(|v| v * share),
            carbs: self.carbs.map(|v| v * share),
        }
    }
}

/// Inclusive range for a nutrient total; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientBound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NutrientBound {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(None, Some(max))
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Per-nutrient bounds on an aggregate total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientBounds {
    pub calories: Option<NutrientBound>,
    pub protein: Option<NutrientBound>,
    pub fat: Option<NutrientBound>,
    pub carbs: Option<NutrientBound>,
}

impl NutrientBounds {
    pub fn get(&self, nutrient: Nutrient) -> Option<NutrientBound> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbs => self.carbs,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, bound: Option<NutrientBound>) {
        match nutrient {
            Nutrient::Calories => self.calories = bound,
            Nutrient::Protein => self.protein = bound,
            Nutrient::Fat => self.fat = bound,
            Nutrient::Carbs => self.carbs = bound,
        }
    }

    pub fn with(mut self, nutrient: Nutrient, bound: NutrientBound) -> Self {
        self.set(nutrient, Some(bound));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Bounds that limit something, in `Nutrient::ALL` order. An open bound
    /// is still recorded by `get` but skipped here.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, NutrientBound)> + '_ {
        Nutrient::ALL
            .into_iter()
            .filter_map(|n| self.get(n).map(|bound| (n, bound)))
            .filter(|(_, bound)| !bound.is_open())
    }
}

/// Per-nutrient importance weights used by the scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientWeights {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
}

impl NutrientWeights {
    /// Weight for a nutrient, falling back to [`DEFAULT_WEIGHT`].
    pub fn weight(&self, nutrient: Nutrient) -> f64 {
        let explicit = match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbs => self.carbs,
        };
        explicit.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn set(&mut self, nutrient: Nutrient, weight: Option<f64>) {
        match nutrient {
            Nutrient::Calories => self.calories = weight,
            Nutrient::Protein => self.protein = weight,
            Nutrient::Fat => self.fat = weight,
            Nutrient::Carbs => self.carbs = weight,
        }
    }

    pub fn with(mut self, nutrient: Nutrient, weight: f64) -> Self {
        self.set(nutrient, Some(weight));
        self
    }
}

/// Summed nutrient values over a set of foods.
///
/// Calories are whole numbers on every record, so they are summed as integers
/// and stay exact regardless of summation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: u64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl NutrientTotals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories as f64,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbs => self.carbs,
        }
    }

    pub fn add_food(&mut self, food: &FoodRecord) {
        self.calories += u64::from(food.calories());
        self.protein += food.protein();
        self.fat += food.fat();
        self.carbs += food.carbs();
    }

    /// Totals as they would be after adding `food`.
    pub fn with_food(&self, food: &FoodRecord) -> Self {
        let mut next = *self;
        next.add_food(food);
        next
    }
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl AddAssign<&FoodRecord> for NutrientTotals {
    fn add_assign(&mut self, food: &FoodRecord) {
        self.add_food(food);
    }
}

impl<'a> FromIterator<&'a FoodRecord> for NutrientTotals {
    fn from_iter<I: IntoIterator<Item = &'a FoodRecord>>(iter: I) -> Self {
        let mut totals = NutrientTotals::default();
        for food in iter {
            totals += food;
        }
        totals
    }
}
