use crate::error::{MenuError, Result};
use crate::models::Food;

/// Ordered collection of catalog foods.
///
/// Input order is load-bearing: the optimizer reports selections as
/// positions into this order. Names are unique case-insensitively, and
/// re-adding an existing name replaces the entry in place.
pub struct FoodCatalog {
    foods: Vec<Food>,
}

impl FoodCatalog {
    /// Build a catalog, deduplicating by lowercase name.
    ///
    /// The last occurrence of a duplicate wins but keeps the earliest
    /// position.
    pub fn new(foods: Vec<Food>) -> Self {
        let mut catalog = Self { foods: Vec::new() };
        for food in foods {
            catalog.upsert(food);
        }
        catalog
    }

    /// Starter catalog written by the `init` command.
    pub fn starter() -> Self {
        Self::new(vec![
            Food {
                name: "Apple".to_string(),
                nutritional_value: 10.0,
                glycemic_index: 50.0,
                carbs: 15.0,
                price: 5,
            },
            Food {
                name: "Banana".to_string(),
                nutritional_value: 20.0,
                glycemic_index: 60.0,
                carbs: 20.0,
                price: 10,
            },
            Food {
                name: "Carrot".to_string(),
                nutritional_value: 30.0,
                glycemic_index: 40.0,
                carbs: 10.0,
                price: 8,
            },
            Food {
                name: "Pear".to_string(),
                nutritional_value: 40.0,
                glycemic_index: 30.0,
                carbs: 5.0,
                price: 7,
            },
        ])
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.foods.iter().position(|f| f.key() == key)
    }

    fn upsert(&mut self, food: Food) {
        match self.position(&food.name) {
            Some(pos) => self.foods[pos] = food,
            None => self.foods.push(food),
        }
    }

    /// Add or replace a food after validating it.
    pub fn add_food(&mut self, food: Food) -> Result<()> {
        if food.name.trim().is_empty() {
            return Err(MenuError::InvalidInput(
                "food name must not be empty".to_string(),
            ));
        }
        if !food.is_valid() {
            return Err(MenuError::InvalidInput(format!(
                "{} has a negative or non-numeric attribute",
                food.name
            )));
        }

        self.upsert(food);
        Ok(())
    }

    /// Remove a food by name (case-insensitive).
    pub fn remove_food(&mut self, name: &str) -> Result<Food> {
        match self.position(name) {
            Some(pos) => Ok(self.foods.remove(pos)),
            None => Err(MenuError::FoodNotFound(name.to_string())),
        }
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&Food> {
        self.position(name).map(|pos| &self.foods[pos])
    }

    /// All foods in catalog order.
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// Display names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.foods.iter().map(|f| f.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
