pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::{Catalog, load_catalog};
pub use config::PlanRequest;
pub use error::{PlannerError, Result};
pub use models::{FoodRecord, MealPlan};
pub use planner::{find_optimal_plan, try_find_plan};
