/*!
 * Error types for the karafx application.
 *
 * Malformed subtitle syntax is never an error anywhere in the pipeline:
 * every parser degrades to an empty or default value so one bad line can
 * never block the rest of the batch. The variants here exist for the host
 * layer only — config files and file I/O.
 */

use thiserror::Error;

/// Errors that can occur while loading a job configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Color value is not a 6-digit hex string
    #[error("Invalid color value: '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    /// Entry style name is not one of the known variants
    #[error("Invalid entry style: '{0}' (expected random_rotate, fly_in or scale_in)")]
    InvalidEntryStyle(String),

    /// Config file could not be read or parsed
    #[error("Config file error: {0}")]
    File(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
