use dialoguer::{Confirm, Input, MultiSelect};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::Food;
use crate::optimizer::constants::{DEFAULT_BUDGET_LIMIT, DEFAULT_GL_LIMIT};

/// Prompt for the glycemic-load limit.
pub fn prompt_gl_limit() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Maximum total glycemic load")
        .default(DEFAULT_GL_LIMIT.to_string())
        .interact_text()?;

    let limit: f64 = input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if !limit.is_finite() || limit < 0.0 {
        return Err(MenuError::InvalidInput(
            "GL limit must be non-negative".to_string(),
        ));
    }

    Ok(limit)
}

/// Prompt for the price budget.
pub fn prompt_budget_limit() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Maximum total price")
        .default(DEFAULT_BUDGET_LIMIT.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Budget must be a non-negative integer".to_string()))
}

fn prompt_non_negative(prompt: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default("0".to_string())
        .interact_text()?;

    let value: f64 = input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(MenuError::InvalidInput(format!(
            "{prompt} must be non-negative"
        )));
    }

    Ok(value)
}

/// Prompt for the attributes of a new food item.
pub fn prompt_new_food() -> Result<Food> {
    let name: String = Input::new().with_prompt("Food name").interact_text()?;

    let nutritional_value = prompt_non_negative("Nutritional value")?;
    let glycemic_index = prompt_non_negative("GI value")?;
    let carbs = prompt_non_negative("Carbohydrate content (g)")?;

    let price_input: String = Input::new()
        .with_prompt("Price")
        .default("0".to_string())
        .interact_text()?;
    let price: u32 = price_input
        .parse()
        .map_err(|_| MenuError::InvalidInput("Price must be a non-negative integer".to_string()))?;

    Ok(Food {
        name: name.trim().to_string(),
        nutritional_value,
        glycemic_index,
        carbs,
        price,
    })
}

/// Resolve a possibly misspelled food name against the catalog.
///
/// Exact case-insensitive match first, then a Jaro-Winkler pass with a
/// confirmation prompt for the best candidate.
pub fn resolve_food_name(names: &[String], input: &str) -> Result<Option<String>> {
    let wanted = input.to_lowercase();

    if let Some(name) = names.iter().find(|n| n.to_lowercase() == wanted) {
        return Ok(Some(name.clone()));
    }

    let mut candidates: Vec<(&String, f64)> = names
        .iter()
        .map(|n| (n, jaro_winkler(&n.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let Some((best, _)) = candidates.first() else {
        return Ok(None);
    };

    let confirm = Confirm::new()
        .with_prompt(format!("Did you mean '{best}'?"))
        .default(true)
        .interact()?;

    Ok(if confirm { Some((*best).clone()) } else { None })
}

/// Pick foods to delete from a multi-select list.
pub fn prompt_delete_selection(names: &[String]) -> Result<Vec<String>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let picked = MultiSelect::new()
        .with_prompt("Select food items to delete (space toggles, enter confirms)")
        .items(names)
        .interact()?;

    Ok(picked.into_iter().map(|i| names[i].clone()).collect())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
