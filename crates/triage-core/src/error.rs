//! Core error types for triage-core.
//!
//! Scoring, normalization and graph analysis are total over their input and
//! never fail. The only error surface is structural (a payload that is not a
//! list of tasks, duplicate ids under strict checking) plus the configuration
//! layer.

use std::path::PathBuf;
use thiserror::Error;

use crate::task::TaskId;

/// Core error type for triage-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Payload validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors raised before the core runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Top-level payload was not a JSON array
    #[error("Expected a list of tasks, got {found}")]
    NotAList { found: &'static str },

    /// Two tasks in the same batch share an id
    #[error("Duplicate task id {id} at positions {first} and {second}")]
    DuplicateId {
        id: TaskId,
        first: usize,
        second: usize,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Config directory could not be determined or created
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Short JSON type name used in validation messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
