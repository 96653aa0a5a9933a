use crate::error::{MenuError, Result};
use crate::models::{Food, OptimizedMenu};
use crate::optimizer::constants::{MAX_DECISION_BITS, MAX_TABLE_CELLS};
use crate::optimizer::quantize::{gl_limit_units, scale_items, ScaledItem};
use crate::optimizer::table::{DecisionBits, DpTable};

/// Maximize total nutritional value under a glycemic-load limit and a
/// price budget.
///
/// Each item is usable at most once. Neither budget has to be exhausted,
/// and the empty selection is always feasible, so an instance where nothing
/// fits reports value 0 with an empty selection rather than an error.
pub fn optimize_menu(foods: &[Food], gl_limit: f64, budget_limit: u32) -> Result<OptimizedMenu> {
    validate(foods, gl_limit)?;

    if foods.is_empty() {
        return Ok(OptimizedMenu::empty());
    }

    let gl_cap = gl_limit_units(gl_limit);
    let budget_cap = budget_limit as usize;
    check_table_size(foods.len(), gl_cap, budget_cap)?;

    let items = scale_items(foods);
    let mut table = DpTable::new(gl_cap, budget_cap);
    let decisions = table.fill(&items);

    let (max_value, best_j, best_k) = table.best_cell();
    let selected = reconstruct(&table, &decisions, &items, best_j, best_k);

    Ok(OptimizedMenu {
        max_value,
        selected,
    })
}

/// Reject negative or non-finite inputs before quantization; clamping them
/// to zero would silently change the instance.
fn validate(foods: &[Food], gl_limit: f64) -> Result<()> {
    if !gl_limit.is_finite() || gl_limit < 0.0 {
        return Err(MenuError::InvalidInput(format!(
            "GL limit must be a non-negative number, got {gl_limit}"
        )));
    }

    for food in foods {
        if !food.is_valid() {
            return Err(MenuError::InvalidInput(format!(
                "{} has a negative or non-numeric attribute",
                food.name
            )));
        }
    }

    Ok(())
}

/// Refuse to allocate beyond the configured ceilings. Limits arrive
/// unscaled from the caller, so the table size is unbounded in the inputs.
fn check_table_size(item_count: usize, gl_cap: usize, budget_cap: usize) -> Result<()> {
    let cells = (gl_cap as u128 + 1) * (budget_cap as u128 + 1);
    if cells > MAX_TABLE_CELLS as u128 {
        return Err(MenuError::TableTooLarge {
            requested: cells,
            limit: MAX_TABLE_CELLS,
        });
    }

    let bits = cells * item_count as u128;
    if bits > MAX_DECISION_BITS as u128 {
        return Err(MenuError::TableTooLarge {
            requested: bits,
            limit: MAX_DECISION_BITS,
        });
    }

    Ok(())
}

/// Walk items in reverse input order from the optimal cell, taking each
/// item whose decision bit is set for the current cell, then restore the
/// original order.
fn reconstruct(
    table: &DpTable,
    decisions: &DecisionBits,
    items: &[ScaledItem],
    mut j: usize,
    mut k: usize,
) -> Vec<usize> {
    let mut selected = Vec::new();

    for (i, item) in items.iter().enumerate().rev() {
        if decisions.took(i, table.cell_index(j, k)) {
            selected.push(i);
            j -= item.gl_units;
            k -= item.price;
        }
    }

    selected.reverse();
    selected
}
