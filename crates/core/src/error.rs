use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Failures that terminate a run. None of these are retried.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("database connection failed: {0}")]
    Connection(String),
    #[error("session query failed: {0}")]
    Query(String),
    #[error("export write failed: {0}")]
    Io(String),
}

impl ExtractError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}
