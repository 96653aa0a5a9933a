pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod optimizer;
pub mod state;

pub use error::{MenuError, Result};
pub use models::{Food, OptimizedMenu};
pub use optimizer::optimize_menu;
