use serde::{Deserialize, Serialize};

/// A food item as entered into the catalog.
///
/// Price is in whole currency units; the optimizer uses it directly as a
/// table index, so it stays integral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    #[serde(rename = "Food Name")]
    pub name: String,

    #[serde(rename = "Nutritional Value")]
    pub nutritional_value: f64,

    #[serde(rename = "GI Value")]
    pub glycemic_index: f64,

    #[serde(rename = "Carbohydrate Content")]
    pub carbs: f64,

    #[serde(rename = "Price")]
    pub price: u32,
}

impl Food {
    /// Glycemic load contributed by this item: GI x carbohydrate grams / 100.
    #[inline]
    pub fn glycemic_load(&self) -> f64 {
        self.glycemic_index * self.carbs / 100.0
    }

    /// Basic validation: all numeric attributes finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.nutritional_value.is_finite()
            && self.nutritional_value >= 0.0
            && self.glycemic_index.is_finite()
            && self.glycemic_index >= 0.0
            && self.carbs.is_finite()
            && self.carbs >= 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: value {}, GI {}, carbs {}g, price {}",
            self.name, self.nutritional_value, self.glycemic_index, self.carbs, self.price
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Food {}

impl std::hash::Hash for Food {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}
