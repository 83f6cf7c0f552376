//! Error types for beam parsing and model building

use serde::Serialize;
use thiserror::Error;

/// Errors raised while turning a beam description into a solver model.
///
/// Every variant is fatal: a build that fails never hands a partially
/// registered model to the caller.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ModelError {
    #[error("Line {line}: field '{field}' is not numeric: '{value}'")]
    MalformedNumericField {
        line: usize,
        field: String,
        value: String,
    },

    #[error("Line {line}: unknown restraint code '{code}' in support '{token}' (expected P, F or R)")]
    UnknownRestraintCode {
        line: usize,
        token: String,
        code: String,
    },

    #[error("Empty topology: {reason}")]
    EmptyTopology { reason: String },

    #[error("Line {line}: missing required field '{field}'")]
    MissingField { line: usize, field: String },

    #[error("Line {line}: support at {location} lies outside the beam (0 to {length})")]
    SupportOutOfRange {
        line: usize,
        location: f64,
        length: f64,
    },

    #[error("Solver rejected registration during {stage}: {message}")]
    Solver { stage: String, message: String },

    #[error("Cannot read '{path}': {message}")]
    Io { path: String, message: String },
}

/// Result type for parsing and model building
pub type ModelResult<T> = Result<T, ModelError>;

impl ModelError {
    pub fn malformed(line: usize, field: impl Into<String>, value: impl Into<String>) -> Self {
        ModelError::MalformedNumericField {
            line,
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn missing(line: usize, field: impl Into<String>) -> Self {
        ModelError::MissingField {
            line,
            field: field.into(),
        }
    }

    pub fn empty_topology(reason: impl Into<String>) -> Self {
        ModelError::EmptyTopology {
            reason: reason.into(),
        }
    }

    /// Short code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ModelError::MalformedNumericField { .. } => "MALFORMED_NUMERIC_FIELD",
            ModelError::UnknownRestraintCode { .. } => "UNKNOWN_RESTRAINT_CODE",
            ModelError::EmptyTopology { .. } => "EMPTY_TOPOLOGY",
            ModelError::MissingField { .. } => "MISSING_FIELD",
            ModelError::SupportOutOfRange { .. } => "SUPPORT_OUT_OF_RANGE",
            ModelError::Solver { .. } => "SOLVER_ERROR",
            ModelError::Io { .. } => "IO_ERROR",
        }
    }

    /// Whether the error was raised before any solver registration
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, ModelError::Solver { .. } | ModelError::Io { .. })
    }
}
