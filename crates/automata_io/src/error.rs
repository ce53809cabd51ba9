//! Errors raised while reading or writing configuration files.

use thiserror::Error;

/// Failure to load or store a configuration file.
#[derive(Error, Debug)]
pub enum IoError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML rendering errors
    #[error("TOML serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Another error tagged with the file it concerns
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for configuration file operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = IoError::from(io_err).with_context("loading config.toml");
        assert!(err.to_string().starts_with("loading config.toml: File system error"));
    }
}
