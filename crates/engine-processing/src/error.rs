use connectors::file::csv::error::FileError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to read lookup table: {0}")]
    File(#[from] FileError),

    #[error("Lookup table '{table}' is missing required column '{column}'")]
    MissingColumn { table: String, column: String },
}
