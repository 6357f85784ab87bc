use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown source: {0}")]
    UnknownSource(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ImportError>;
