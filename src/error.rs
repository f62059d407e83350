use thiserror::Error;

pub type IngestResult<T, E = IngestError> = Result<T, E>;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid capacity: {0}, ring buffer capacity must be positive")]
    InvalidCapacity(usize),

    #[error("Overflow: ring buffer is full (capacity {capacity})")]
    Overflow { capacity: usize },

    #[error("Underflow: ring buffer is empty")]
    Underflow,

    #[error("Index out of range: index {index}, len {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
