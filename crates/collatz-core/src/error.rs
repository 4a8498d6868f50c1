use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollatzError>;

#[derive(Debug, Error)]
pub enum CollatzError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("profile format error: {0}")]
    ProfileFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
