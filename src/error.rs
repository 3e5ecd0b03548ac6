use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestaurantError {
    /// The id is kept for logging; the message is fixed.
    #[error("Restaurant does not exist")]
    NotFound(i32),

    #[error("No restaurant ids left")]
    IdsExhausted,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RestaurantError>;
