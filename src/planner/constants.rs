use crate::models::Slot;

/// Number of tracked nutrients; every score is divided by this, whether or
/// not all of them have a target.
pub const TRACKED_NUTRIENT_COUNT: f64 = 4.0;

/// Ratio of value to target above which a nutrient is treated as overshoot.
pub const OVERSHOOT_RATIO: f64 = 1.5;

/// Floor for the target denominator when computing a ratio.
pub const MIN_TARGET_DENOMINATOR: f64 = 1.0;

/// Default cap on how many foods the greedy selector accepts.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Foods carrying this tag are kept out of breakfast unless no other slot has room.
pub const MEAT_TAG: &str = "meat";

/// Share of the daily target assigned to each slot.
pub const SLOT_SHARES: [(Slot, f64); 4] = [
    (Slot::Breakfast, 0.25),
    (Slot::Lunch, 0.35),
    (Slot::Dinner, 0.30),
    (Slot::Snack, 0.10),
];

// ─────────────────────────────────────────────────────────────────────────────
// Request defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Relative calorie band applied around a calorie target when no calorie bound is given.
pub const DEFAULT_CALORIE_TOLERANCE: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Deviation from target (percent) still reported as on target.
pub const ON_TARGET_PCT: f64 = 10.0;

/// Deviation from target (percent) reported as close.
pub const NEAR_TARGET_PCT: f64 = 20.0;
