use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not find '{}'", .0.display())]
    MissingFile(PathBuf),
    #[error("Could not find an address column (headers: {found:?})")]
    MissingAddressColumn { found: Vec<String> },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
