//! Error handling for parameter extractors

use crate::planning_error::ConfigurationError;
use std::io;

/// Unified error to report failures while reading the arm parameters.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    MissingField(String),
    InvalidValue { field: String, value: String },
    Configuration(ConfigurationError),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::MissingField(ref field) =>
                write!(f, "Missing Field: {}", field),
            ParameterError::InvalidValue { ref field, ref value } =>
                write!(f, "Invalid value of {}: {}", field, value),
            ParameterError::Configuration(ref err) =>
                write!(f, "Configuration Error: {}", err),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            ParameterError::Configuration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}

impl From<ConfigurationError> for ParameterError {
    fn from(err: ConfigurationError) -> Self {
        ParameterError::Configuration(err)
    }
}
