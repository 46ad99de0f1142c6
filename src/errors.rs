// errors.rs
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the dashboard routes.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Data file error: {0}")]
    Store(#[from] StoreError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Conflict(_) => 409,
            ServerError::Store(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}
