mod manager;
mod persistence;

pub use manager::FoodCatalog;
pub use persistence::{export_csv, import_csv, load_catalog, save_catalog};
