use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "input data not found at {}. Fetch the corpus, or run 'fundtrace scan' for a transaction table, first.",
        .path.display()
    )]
    DataUnavailable { path: PathBuf },

    #[error(
        "entity model unavailable at {}: {reason}. Run 'fundtrace init --model' to install the default model.",
        .path.display()
    )]
    ModelUnavailable { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
