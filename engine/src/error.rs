use shared::models::ParseTimePeriodError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV export error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InvalidTimePeriod(#[from] ParseTimePeriodError),

    #[error("Card not found: '{0}'")]
    CardNotFound(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
