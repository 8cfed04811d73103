use thiserror::Error;

#[derive(Debug, Error)]
pub enum SectrackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for SectrackError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                SectrackError::Constraint(e.to_string())
            }
            _ => SectrackError::Database(e.to_string()),
        }
    }
}

impl From<csv::Error> for SectrackError {
    fn from(e: csv::Error) -> Self {
        SectrackError::Export(format!("CSV writer failed: {}", e))
    }
}

impl From<rust_xlsxwriter::XlsxError> for SectrackError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        SectrackError::Export(format!("Workbook writer failed: {}", e))
    }
}
