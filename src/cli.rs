use clap::{Args, Parser, Subcommand};

use crate::models::{Nutrient, Slot};
use crate::planner::predicates::{
    FoodFilter, all_of, by_slot, by_tag, max_nutrient, min_nutrient, not_tag,
};

/// Meal planner: fits a food catalog to daily nutrient targets, meal by meal.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, default_value = "foods.csv")]
    pub file: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a plan from targets and limits entered interactively.
    Plan,

    /// Run the built-in high-protein demo.
    Demo,

    /// Build a plan from a JSON profile.
    Profile {
        /// Path to the profile JSON file.
        path: String,

        /// Print the plan as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List catalog foods matching every given filter.
    List(ListArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only foods suitable for this meal slot.
    #[arg(long, value_parser = parse_slot_arg)]
    pub slot: Option<Slot>,

    /// Only foods carrying this tag (repeatable).
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Exclude foods carrying this tag (repeatable).
    #[arg(long = "without")]
    pub without: Vec<String>,

    /// Upper limit as nutrient=value, e.g. calories=300 (repeatable).
    #[arg(long = "max", value_parser = parse_nutrient_limit)]
    pub max: Vec<(Nutrient, f64)>,

    /// Lower limit as nutrient=value, e.g. protein=20 (repeatable).
    #[arg(long = "min", value_parser = parse_nutrient_limit)]
    pub min: Vec<(Nutrient, f64)>,
}

impl ListArgs {
    /// Combine every flag into one filter.
    pub fn filter(&self) -> FoodFilter {
        let slot = self.slot.map(by_slot);
        let tags = self.tags.iter().map(|t| by_tag(t));
        let without = self.without.iter().map(|t| not_tag(t));
        let max = self.max.iter().map(|&(n, v)| max_nutrient(n, v));
        let min = self.min.iter().map(|&(n, v)| min_nutrient(n, v));

        all_of(slot.into_iter().chain(tags).chain(without).chain(max).chain(min))
    }
}

fn parse_slot_arg(s: &str) -> Result<Slot, String> {
    s.parse().map_err(|e: crate::error::PlannerError| e.to_string())
}

/// Parse `nutrient=value`.
pub fn parse_nutrient_limit(s: &str) -> Result<(Nutrient, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected nutrient=value, got '{}'", s))?;
    let nutrient: Nutrient = name.parse().map_err(|e: crate::error::PlannerError| e.to_string())?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((nutrient, value))
}
