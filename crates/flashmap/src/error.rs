//! Error types for Flashmap operations.
//!
//! Parsing and view-model operations never fail; this module covers the
//! surrounding concerns: reading and writing files and loading
//! configuration.

use std::io;

use thiserror::Error;

/// The main error type for Flashmap operations.
#[derive(Debug, Error)]
pub enum FlashmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FlashmapError {
    /// Create a new `Config` error from any displayable cause.
    pub fn new_config_error(err: impl std::fmt::Display) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: FlashmapError = io::Error::new(io::ErrorKind::NotFound, "gone").into();

        assert!(matches!(err, FlashmapError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_config_error_display() {
        let err = FlashmapError::new_config_error("bad indent");

        assert_eq!(err.to_string(), "Configuration error: bad indent");
    }
}
