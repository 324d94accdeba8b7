#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upstream(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<mongodb::error::Error> for CoreError {
    fn from(err: mongodb::error::Error) -> Self {
        // The raw driver message is surfaced to API clients unchanged.
        CoreError::Upstream(err.to_string())
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
