//! Hand-calculation formulas used alongside the beam models
//!
//! Stateless functions: closed-form beam reactions, steel column buckling
//! to EN 1993-1-1, load factoring, and EN 1998-1 elastic response spectra
//! with single-degree-of-freedom demand/capacity curves.

pub mod beams;
pub mod columns;
pub mod load_factors;
pub mod seismic;

use serde::Serialize;
use thiserror::Error;

/// Errors from the design formulas
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    #[error("Axis must be one of 'x' or 'y', not '{0}'")]
    InvalidAxis(String),

    #[error("The buckling curve must be one of 'a0', 'a', 'b', 'c' or 'd', not '{0}'")]
    UnknownBucklingCurve(String),

    #[error("Unknown spectrum type {0} (expected 1 or 2)")]
    UnknownSpectrumType(u8),

    #[error("Unknown soil type '{0}' (expected A, B, C, D or E)")]
    UnknownSoilType(String),

    #[error("Period must lie between 0 s and 4 s, got {0}")]
    PeriodOutOfRange(f64),

    #[error("Row {row}: column {column} is missing")]
    MissingColumn { row: usize, column: usize },

    #[error("Row {row}: column {column} is not numeric: '{value}'")]
    MalformedColumn {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Demand and capacity curves do not intersect")]
    NoIntersection,
}

/// Result type for design formulas
pub type DesignResult<T> = Result<T, DesignError>;
