use thiserror::Error;

#[derive(Error, Debug)]
pub enum BitcountError {
    /// A run parameter is outside its allowed range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
