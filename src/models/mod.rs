mod food;
mod menu;

pub use food::Food;
pub use menu::OptimizedMenu;
