use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}
