use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid data module code: {0:?}")]
    InvalidDmc(String),
    #[error("invalid information variant: {0:?} (expected \"00\" or \"01\")")]
    InvalidInfoVariant(String),
    #[error("invalid document id: {0:?}")]
    InvalidDocumentId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
