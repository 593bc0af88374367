use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    Poisoned,

    #[error("write rejected for key {key}")]
    WriteRejected { key: String },
}

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("note not found: {id}")]
    NoteNotFound { id: String },
}

pub type Result<T, E = JournalError> = std::result::Result<T, E>;
