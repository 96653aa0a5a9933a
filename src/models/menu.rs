use crate::models::Food;

/// Result of one optimization call.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedMenu {
    /// Best achievable total nutritional value.
    pub max_value: f64,

    /// Positions of the chosen items in the input order, ascending.
    pub selected: Vec<usize>,
}

impl OptimizedMenu {
    /// The degenerate result: nothing selected, value zero.
    pub fn empty() -> Self {
        Self {
            max_value: 0.0,
            selected: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Resolve the selected indices against the item list they came from.
    pub fn selected_foods<'a>(&self, foods: &'a [Food]) -> Vec<&'a Food> {
        self.selected.iter().filter_map(|&i| foods.get(i)).collect()
    }

    /// Total price of the selected items.
    pub fn total_price(&self, foods: &[Food]) -> u64 {
        self.selected_foods(foods)
            .iter()
            .map(|f| f.price as u64)
            .sum()
    }

    /// Total (unscaled) glycemic load of the selected items.
    pub fn total_glycemic_load(&self, foods: &[Food]) -> f64 {
        self.selected_foods(foods)
            .iter()
            .map(|f| f.glycemic_load())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_foods() -> Vec<Food> {
        vec![
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
        ]
    }

    #[test]
    fn test_totals_over_selection() {
        let foods = sample_foods();
        let menu = OptimizedMenu {
            max_value: 30.0,
            selected: vec![0, 1],
        };

        assert_eq!(menu.total_price(&foods), 15);
        assert!((menu.total_glycemic_load(&foods) - 19.5).abs() < 0.001);
        assert_eq!(menu.selected_foods(&foods).len(), 2);
    }

    #[test]
    fn test_empty_menu() {
        let menu = OptimizedMenu::empty();
        assert!(menu.is_empty());
        assert_eq!(menu.max_value, 0.0);
        assert_eq!(menu.total_price(&sample_foods()), 0);
    }
}
