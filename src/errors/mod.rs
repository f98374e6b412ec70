use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Backend errors
    #[error("API error: {0}")]
    Api(#[from] products_api::ApiError),

    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    // Form errors
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Product was not added")]
    NotAdded,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
