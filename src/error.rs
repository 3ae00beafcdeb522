use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("No room available for the request")]
    RoomUnavailable,
    #[error("Payment rejected: {0}")]
    PaymentRejected(String),
    #[error("Booking not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("Storage error: {0}")]
    StorageError(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, BookingError>;
