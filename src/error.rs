use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error at row {row}: {message}")]
    Parse { row: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
