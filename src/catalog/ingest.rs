use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{FoodRecord, Slot};

/// Separator for multi-valued columns (`meal_times`, `tags`).
pub const LIST_SEPARATOR: char = '|';

/// One raw CSV row. Everything is read as text so a bad value only costs its row.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: Option<String>,
    calories: Option<String>,
    protein: Option<String>,
    fat: Option<String>,
    carbs: Option<String>,
    meal_times: Option<String>,
    tags: Option<String>,
}

fn required<'r>(value: &'r Option<String>, field: &str) -> Result<&'r str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| PlannerError::InvalidInput(format!("missing field '{}'", field)))
}

fn parse_number(value: &Option<String>, field: &str) -> Result<f64> {
    let raw = required(value, field)?;
    let number: f64 = raw
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number ({})", raw, field)))?;
    if !number.is_finite() || number < 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, raw
        )));
    }
    Ok(number)
}

/// Split a pipe-delimited cell into trimmed, non-empty parts.
pub fn split_list(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

fn parse_row(row: &CsvRow) -> Result<FoodRecord> {
    let name = required(&row.name, "name")?;
    let calories = parse_number(&row.calories, "calories")?;
    let protein = parse_number(&row.protein, "protein")?;
    let fat = parse_number(&row.fat, "fat")?;
    let carbs = parse_number(&row.carbs, "carbs")?;

    if calories > f64::from(u32::MAX) {
        return Err(PlannerError::InvalidInput(format!(
            "calories out of range: {}",
            calories
        )));
    }
    // Fractional calories are truncated
    let mut food = FoodRecord::new(name, calories.trunc() as u32, protein, fat, carbs)?;

    if let Some(cell) = row.meal_times.as_deref() {
        let slots = split_list(cell)
            .map(str::parse::<Slot>)
            .collect::<Result<Vec<Slot>>>()?;
        if !slots.is_empty() {
            food = food.with_slots(slots)?;
        }
    }

    if let Some(cell) = row.tags.as_deref() {
        food = food.with_tags(split_list(cell));
    }

    Ok(food)
}

/// Read a catalog from CSV data.
///
/// Required columns: `name`, `calories`, `protein`, `fat`, `carbs`. Optional:
/// `meal_times` and `tags`, both pipe-delimited. A blank `meal_times` makes a
/// food eligible for every slot. Malformed rows are skipped with a warning;
/// an I/O failure abandons the source and yields an empty catalog.
pub fn read_catalog<R: Read>(reader: R) -> Catalog {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut foods = Vec::new();
    for (index, result) in rdr.deserialize::<CsvRow>().enumerate() {
        let row_num = index + 1;
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => {
                tracing::warn!("Failed to read catalog: {}", e);
                return Catalog::default();
            }
            Err(e) => {
                tracing::warn!("Row {} skipped: {}", row_num, e);
                continue;
            }
        };

        match parse_row(&row) {
            Ok(food) => foods.push(food),
            Err(e) => tracing::warn!("Row {} skipped: {}", row_num, e),
        }
    }

    Catalog::new(foods)
}

/// Load a catalog from a CSV file.
///
/// A missing or unreadable file gives an empty catalog rather than an error.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Catalog {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Cannot open food catalog {}: {}", path.display(), e);
            return Catalog::default();
        }
    };

    let catalog = read_catalog(file);
    tracing::info!("Loaded {} foods from {}", catalog.len(), path.display());
    catalog
}
