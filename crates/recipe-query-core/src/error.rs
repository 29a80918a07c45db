use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Recipe retrieval failed: {0}")]
    Retrieval(String),
}

pub type Result<T> = std::result::Result<T, Error>;
