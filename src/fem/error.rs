//! Error types for the frame solver

use thiserror::Error;

/// Errors raised while registering or analysing a frame model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FEAError {
    #[error("Node '{0}' not found in model")]
    NodeNotFound(String),

    #[error("Member '{0}' not found in model")]
    MemberNotFound(String),

    #[error("Material '{0}' not found in model")]
    MaterialNotFound(String),

    #[error("Load combination '{0}' not found in model")]
    LoadCombinationNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Load at {position} lies outside member '{member}' of length {length}")]
    LoadOutsideMember {
        member: String,
        position: f64,
        length: f64,
    },

    #[error("Unsupported load direction '{0}' (expected Fx, Fy, Fz, FX, FY or FZ)")]
    UnsupportedLoadDirection(String),

    #[error("Model is unstable: {0}")]
    Unstable(String),

    #[error("Singular stiffness matrix - model may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Model not analyzed - run analyze() first")]
    NotAnalyzed,
}

/// Result type for solver operations
pub type FEAResult<T> = Result<T, FEAError>;
