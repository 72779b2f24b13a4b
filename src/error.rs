//! Error types and handling for the snowcast library

use thiserror::Error;

/// Main error type for the snowcast library
#[derive(Error, Debug)]
pub enum SnowcastError {
    /// A forecast request failed (transport error or non-success status)
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// The upstream response did not match the expected schema
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// Cache backend errors
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SnowcastError {
    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create a new cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for SnowcastError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch {
            message: err.to_string(),
        }
    }
}
