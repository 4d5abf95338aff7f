//! Error types for the component analysis helper.
//!
//! The first four variants are the user-facing conditions of the tool. Their
//! `Display` text is exactly what the operator sees on stdout, and none of them
//! fails the process. The remaining variants cover configuration, I/O, and
//! serialization failures.

use thiserror::Error;

/// Unified error type for the component analysis helper.
///
/// All library functions return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// `show` index outside the catalog bounds
    #[error("Invalid component index!")]
    InvalidIndex(i64),

    /// Catalog entry whose file is missing from the workspace
    #[error("File {0} not found!")]
    ComponentNotFound(String),

    /// `show` argument that does not parse as an integer
    #[error("Please provide a valid component index!")]
    MalformedIndex(String),

    /// Unknown command token, or a command missing its argument
    #[error("Invalid command!")]
    UnrecognizedCommand(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Whether this error is an operator mistake reported as plain text.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::InvalidIndex(_)
                | AppError::ComponentNotFound(_)
                | AppError::MalformedIndex(_)
                | AppError::UnrecognizedCommand(_)
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
