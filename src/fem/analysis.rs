//! Analysis options

use serde::{Deserialize, Serialize};

/// Options for linear static analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Reject near-singular stiffness matrices before solving
    pub check_stability: bool,
    /// Smallest admissible LU pivot, relative to the largest
    pub pivot_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            check_stability: true,
            pivot_tolerance: 1e-12,
        }
    }
}

impl AnalysisOptions {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.pivot_tolerance = tolerance;
        self
    }

    pub fn without_stability_check(mut self) -> Self {
        self.check_stability = false;
        self
    }
}
