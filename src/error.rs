use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Optimization table too large: {requested} cells requested, limit is {limit}")]
    TableTooLarge { requested: u128, limit: u64 },
}

pub type Result<T> = std::result::Result<T, MenuError>;
