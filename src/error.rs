use thiserror::Error;

use crate::models::{Nutrient, Slot};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid food '{name}': {reason}")]
    InvalidFood { name: String, reason: String },

    #[error("Unknown nutrient: {0}")]
    UnknownNutrient(String),

    #[error("Unknown meal slot: {0}")]
    UnknownSlot(String),

    #[error("'{food}' is not eligible for {slot}")]
    IneligibleFood { food: String, slot: Slot },

    #[error("Slot '{slot}': too few items ({actual} < {min})")]
    SlotUnderfilled { slot: Slot, actual: usize, min: usize },

    #[error("Slot '{slot}': too many items ({actual} > {max})")]
    SlotOverfilled { slot: Slot, actual: usize, max: usize },

    #[error("{nutrient}: {actual} is below the minimum of {limit}")]
    BelowMinimum {
        nutrient: Nutrient,
        actual: f64,
        limit: f64,
    },

    #[error("{nutrient}: {actual} is above the maximum of {limit}")]
    AboveMaximum {
        nutrient: Nutrient,
        actual: f64,
        limit: f64,
    },
}

impl PlannerError {
    /// Whether this error is a constraint violation raised while assembling a plan.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            PlannerError::IneligibleFood { .. }
                | PlannerError::SlotUnderfilled { .. }
                | PlannerError::SlotOverfilled { .. }
                | PlannerError::BelowMinimum { .. }
                | PlannerError::AboveMaximum { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
