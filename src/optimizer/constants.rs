/// Quantization factor for glycemic-load contributions.
///
/// GL values are fractional (GI x carbs / 100); multiplying by 10 and
/// rounding turns them into table indices with 0.1 GL resolution.
pub const GL_SCALE: f64 = 10.0;

/// Ceiling on value-table cells, checked before allocation.
///
/// The table is (gl_limit_units + 1) x (budget_limit + 1) cells of f64,
/// so 4 million cells is a 32 MB allocation.
pub const MAX_TABLE_CELLS: u64 = 4_000_000;

/// Ceiling on decision bits (items x cells) kept for backtracking.
pub const MAX_DECISION_BITS: u64 = 512_000_000;

/// GL limit preset offered by the interactive prompt.
pub const DEFAULT_GL_LIMIT: f64 = 50.0;

/// Price budget preset offered by the interactive prompt.
pub const DEFAULT_BUDGET_LIMIT: u32 = 30;
