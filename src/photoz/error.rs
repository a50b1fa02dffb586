use crate::model::PhotoKey;
use crate::store::Rejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotozError {
    #[error("Photo not found: {0}")]
    PhotoNotFound(PhotoKey),

    #[error("Photo rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PhotozError>;
