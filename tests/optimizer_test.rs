use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use nutri_menu_rs::error::MenuError;
use nutri_menu_rs::models::Food;
use nutri_menu_rs::optimizer::{gl_limit_units, gl_units, optimize_menu};

fn food(name: &str, value: f64, gi: f64, carbs: f64, price: u32) -> Food {
    Food {
        name: name.to_string(),
        nutritional_value: value,
        glycemic_index: gi,
        carbs,
        price,
    }
}

fn sample_foods() -> Vec<Food> {
    vec![
        food("Apple", 10.0, 50.0, 15.0, 5),
        food("Banana", 20.0, 60.0, 20.0, 10),
        food("Carrot", 30.0, 40.0, 10.0, 8),
        food("Pear", 40.0, 30.0, 5.0, 7),
    ]
}

/// Exhaustive subset search in the same scaled-unit space as the optimizer.
fn brute_force(foods: &[Food], gl_limit: f64, budget_limit: u32) -> f64 {
    let gl_cap = gl_limit_units(gl_limit);
    let budget_cap = budget_limit as u64;
    let mut best = 0.0_f64;

    for mask in 0u32..(1u32 << foods.len()) {
        let mut units = 0usize;
        let mut price = 0u64;
        let mut value = 0.0;
        for (i, f) in foods.iter().enumerate() {
            if mask & (1 << i) != 0 {
                units += gl_units(f.glycemic_index, f.carbs);
                price += f.price as u64;
                value += f.nutritional_value;
            }
        }
        if units <= gl_cap && price <= budget_cap && value > best {
            best = value;
        }
    }

    best
}

/// Assert the shared contract over any result: feasibility in scaled-unit
/// space, exact value consistency, and strictly ascending unique indices.
fn assert_selection_contract(foods: &[Food], gl_limit: f64, budget_limit: u32) -> f64 {
    let menu = optimize_menu(foods, gl_limit, budget_limit).unwrap();

    let mut units = 0usize;
    let mut price = 0u64;
    let mut value = 0.0;
    for &i in &menu.selected {
        assert!(i < foods.len(), "index {} out of range", i);
        units += gl_units(foods[i].glycemic_index, foods[i].carbs);
        price += foods[i].price as u64;
        value += foods[i].nutritional_value;
    }

    assert!(
        units <= gl_limit_units(gl_limit),
        "GL units {} exceed limit {}",
        units,
        gl_limit_units(gl_limit)
    );
    assert!(
        price <= budget_limit as u64,
        "price {} exceeds budget {}",
        price,
        budget_limit
    );
    assert_eq!(value, menu.max_value, "selected values must sum to the optimum");

    for window in menu.selected.windows(2) {
        assert!(window[0] < window[1], "indices must be strictly ascending");
    }

    menu.max_value
}

#[test]
fn test_scenario_instance_selects_all_items() {
    let foods = sample_foods();
    let menu = optimize_menu(&foods, 50.0, 30).unwrap();

    assert_eq!(menu.max_value, 100.0);
    assert_eq!(menu.selected, vec![0, 1, 2, 3]);
    assert_eq!(menu.max_value, brute_force(&foods, 50.0, 30));

    // GL sum is 7.5 + 12 + 4 + 1.5 = 25, price sum exactly 30.
    assert_float_absolute_eq!(menu.total_glycemic_load(&foods), 25.0, 1e-9);
    assert_eq!(menu.total_price(&foods), 30);
}

#[test]
fn test_matches_brute_force_on_tight_limits() {
    let foods = sample_foods();

    for budget in 0..=30 {
        let value = assert_selection_contract(&foods, 50.0, budget);
        assert_eq!(value, brute_force(&foods, 50.0, budget), "budget {}", budget);
    }

    for quarters in 0..=60 {
        let gl_limit = quarters as f64 / 4.0;
        let value = assert_selection_contract(&foods, gl_limit, 30);
        assert_eq!(
            value,
            brute_force(&foods, gl_limit, 30),
            "gl_limit {}",
            gl_limit
        );
    }
}

#[test]
fn test_matches_brute_force_on_random_instances() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..250 {
        let n = rng.gen_range(0..=8);
        let foods: Vec<Food> = (0..n)
            .map(|i| {
                food(
                    &format!("Item{}", i),
                    rng.gen_range(0..=40) as f64,
                    rng.gen_range(0..=100) as f64,
                    rng.gen_range(0..=30) as f64,
                    rng.gen_range(0..=12),
                )
            })
            .collect();
        let gl_limit = rng.gen_range(0..=35) as f64;
        let budget = rng.gen_range(0..=25);

        let value = assert_selection_contract(&foods, gl_limit, budget);
        assert_eq!(value, brute_force(&foods, gl_limit, budget));
    }
}

#[test]
fn test_empty_input_law() {
    // Holds regardless of limits, including ones the table guard would
    // reject for a non-empty instance.
    let menu = optimize_menu(&[], 50.0, 30).unwrap();
    assert_eq!(menu.max_value, 0.0);
    assert!(menu.selected.is_empty());

    let menu = optimize_menu(&[], 1.0e12, u32::MAX).unwrap();
    assert_eq!(menu.max_value, 0.0);
    assert!(menu.selected.is_empty());
}

#[test]
fn test_zero_budget_law() {
    let menu = optimize_menu(&sample_foods(), 50.0, 0).unwrap();
    assert_eq!(menu.max_value, 0.0);
    assert!(menu.selected.is_empty());
}

#[test]
fn test_zero_gl_limit_admits_gl_free_items() {
    let foods = vec![food("Water", 2.0, 0.0, 0.0, 1), food("Bread", 50.0, 70.0, 40.0, 2)];
    let menu = optimize_menu(&foods, 0.0, 10).unwrap();

    assert_eq!(menu.max_value, 2.0);
    assert_eq!(menu.selected, vec![0]);
}

#[test]
fn test_infeasible_selection_is_a_valid_degenerate_result() {
    let foods = vec![
        food("Expensive", 90.0, 10.0, 5.0, 100),
        food("Heavy", 80.0, 95.0, 80.0, 1),
    ];
    let menu = optimize_menu(&foods, 2.0, 10).unwrap();

    assert_eq!(menu.max_value, 0.0);
    assert!(menu.selected.is_empty());
}

#[test]
fn test_monotone_in_each_limit() {
    let foods = sample_foods();

    let mut previous = -1.0;
    for budget in 0..=35 {
        let menu = optimize_menu(&foods, 50.0, budget).unwrap();
        assert!(
            menu.max_value >= previous,
            "value decreased when budget grew to {}",
            budget
        );
        previous = menu.max_value;
    }

    let mut previous = -1.0;
    for quarters in 0..=120 {
        let gl_limit = quarters as f64 / 4.0;
        let menu = optimize_menu(&foods, gl_limit, 30).unwrap();
        assert!(
            menu.max_value >= previous,
            "value decreased when GL limit grew to {}",
            gl_limit
        );
        previous = menu.max_value;
    }
}

#[test]
fn test_tie_break_is_deterministic() {
    // Two disjoint optima of equal value; the cell with the lower GL row
    // is found first in the row-major scan, so the second item wins.
    let foods = vec![
        food("WideGL", 10.0, 10.0, 10.0, 1),
        food("NarrowGL", 10.0, 10.0, 5.0, 2),
    ];

    let menu = optimize_menu(&foods, 1.2, 2).unwrap();
    assert_eq!(menu.max_value, 10.0);
    assert_eq!(menu.selected, vec![1]);
}

#[test]
fn test_rejects_invalid_inputs() {
    let negative_gi = vec![food("Bad", 10.0, -1.0, 5.0, 1)];
    assert!(matches!(
        optimize_menu(&negative_gi, 50.0, 30),
        Err(MenuError::InvalidInput(_))
    ));

    let nan_value = vec![food("NaN", f64::NAN, 10.0, 5.0, 1)];
    assert!(matches!(
        optimize_menu(&nan_value, 50.0, 30),
        Err(MenuError::InvalidInput(_))
    ));

    assert!(matches!(
        optimize_menu(&sample_foods(), -0.5, 30),
        Err(MenuError::InvalidInput(_))
    ));
}

#[test]
fn test_rejects_oversized_table() {
    assert!(matches!(
        optimize_menu(&sample_foods(), 1.0e9, 30),
        Err(MenuError::TableTooLarge { .. })
    ));

    // Both axes together can exceed the ceiling even when each is modest.
    assert!(matches!(
        optimize_menu(&sample_foods(), 50_000.0, 50_000),
        Err(MenuError::TableTooLarge { .. })
    ));
}
