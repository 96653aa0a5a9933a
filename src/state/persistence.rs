use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Food;
use crate::state::FoodCatalog;

/// Load a catalog from a JSON file.
///
/// Duplicate names collapse to a single entry (last occurrence wins,
/// earliest position kept) so optimizer indices stay unambiguous.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<Food> = serde_json::from_str(&content)?;
    Ok(FoodCatalog::new(foods))
}

/// Save a catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.foods())?;
    fs::write(path, json)?;
    Ok(())
}

/// Export the catalog as CSV with the same column headers as the JSON.
pub fn export_csv<P: AsRef<Path>>(path: P, foods: &[Food]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for food in foods {
        writer.serialize(food)?;
    }
    writer.flush()?;
    Ok(())
}

/// Import foods from CSV, deduplicating like the JSON loader.
pub fn import_csv<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for record in reader.deserialize() {
        foods.push(record?);
    }
    Ok(FoodCatalog::new(foods))
}
