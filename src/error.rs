use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to fetch records: HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Record {record_id} has an error on unknown field '{field}'")]
    UnknownErrorField { record_id: i64, field: String },

    #[error("Duplicate record id: {0}")]
    DuplicateRecordId(i64),

    #[error("Record not found: {0}")]
    RecordNotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),
}
