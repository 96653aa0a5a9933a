use crate::models::Food;
use crate::optimizer::constants::GL_SCALE;

/// A food reduced to the integer quantities the table works in.
///
/// Recomputed on every optimization call, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct ScaledItem {
    /// Quantized glycemic-load units (0.1 GL per unit at the fixed scale).
    pub gl_units: usize,

    /// Price, used directly as a column index.
    pub price: usize,

    /// Nutritional value, the quantity being maximized.
    pub value: f64,
}

/// Quantize one item's glycemic-load contribution.
///
/// Ties round half away from zero: a contribution of 0.25 GL becomes
/// 3 units, not 2.
pub fn gl_units(glycemic_index: f64, carbs: f64) -> usize {
    (glycemic_index * carbs * GL_SCALE / 100.0).round() as usize
}

/// Quantize the scalar GL limit with the same rounding rule.
pub fn gl_limit_units(gl_limit: f64) -> usize {
    (gl_limit * GL_SCALE).round() as usize
}

/// Reduce a list of foods to scaled items, preserving input order.
pub fn scale_items(foods: &[Food]) -> Vec<ScaledItem> {
    foods
        .iter()
        .map(|f| ScaledItem {
            gl_units: gl_units(f.glycemic_index, f.carbs),
            price: f.price as usize,
            value: f.nutritional_value,
        })
        .collect()
}
