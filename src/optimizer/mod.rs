pub mod constants;
pub mod quantize;
pub mod solve;
pub mod table;

pub use constants::*;
pub use quantize::{gl_limit_units, gl_units, scale_items, ScaledItem};
pub use solve::optimize_menu;
pub use table::{DecisionBits, DpTable};
