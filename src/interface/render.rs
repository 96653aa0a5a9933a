use crate::models::{Food, OptimizedMenu};

/// Display the catalog as a numbered, aligned table with each item's
/// computed glycemic load.
pub fn display_food_table(foods: &[Food]) {
    if foods.is_empty() {
        println!("Catalog is empty. Use 'add' to enter food items.");
        return;
    }

    let name_width = foods
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(10)
        .max(4);

    println!();
    println!(
        "{:>3}  {:<name_width$}  {:>7}  {:>5}  {:>9}  {:>6}  {:>6}",
        "#", "Name", "Value", "GI", "Carbs (g)", "GL", "Price"
    );

    for (i, food) in foods.iter().enumerate() {
        println!(
            "{:>3}  {:<name_width$}  {:>7.1}  {:>5.1}  {:>9.1}  {:>6.2}  {:>6}",
            i + 1,
            food.name,
            food.nutritional_value,
            food.glycemic_index,
            food.carbs,
            food.glycemic_load(),
            food.price
        );
    }

    println!();
}

/// Display an optimization result: the chosen items and their totals.
pub fn display_menu(menu: &OptimizedMenu, foods: &[Food], gl_limit: f64, budget_limit: u32) {
    println!();
    println!("Maximum Nutritional Value: {}", menu.max_value);

    if menu.is_empty() {
        println!("No item combination fits the limits; the best menu is empty.");
        println!();
        return;
    }

    let selected = menu.selected_foods(foods);
    let name_width = selected
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(10)
        .max(4);

    println!();
    for food in &selected {
        println!(
            "  {:<name_width$}  value {:>6.1} | GL {:>6.2} | price {:>4}",
            food.name,
            food.nutritional_value,
            food.glycemic_load(),
            food.price
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Items selected: {}", selected.len());
    println!(
        "Glycemic load: {:.2} / {}",
        menu.total_glycemic_load(foods),
        gl_limit
    );
    println!("Total price: {} / {}", menu.total_price(foods), budget_limit);
    println!();
}
