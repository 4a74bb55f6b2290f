use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Database connection failed: {0}")]
    DbConnectionError(#[source] sqlx::Error),

    #[error("Error executing query: {0}")]
    QueryError(#[source] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input stream closed before a line was entered")]
    InputClosed,

    #[error("Mail command exited with {status}")]
    MailCommandError { status: std::process::ExitStatus },

    #[error("Invalid configuration value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RelayError>;
