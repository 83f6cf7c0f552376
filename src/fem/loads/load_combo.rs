//! Load combinations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the combination created when none is registered
pub const DEFAULT_COMBO: &str = "Combo 1";

/// Factored sum of load cases analysed as one loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    pub name: String,
    /// case name -> factor
    pub factors: HashMap<String, f64>,
}

impl LoadCombination {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            factors: HashMap::new(),
        }
    }

    /// One case at factor 1.0
    pub fn single(name: &str, case: &str) -> Self {
        Self::new(name).with_case(case, 1.0)
    }

    /// Every listed case at factor 1.0
    pub fn unfactored<S: AsRef<str>>(name: &str, cases: &[S]) -> Self {
        cases
            .iter()
            .fold(Self::new(name), |combo, case| combo.with_case(case.as_ref(), 1.0))
    }

    pub fn with_case(mut self, case: &str, factor: f64) -> Self {
        self.factors.insert(case.to_string(), factor);
        self
    }

    /// Factor applied to `case`, zero when the case is not part of the combination
    pub fn factor(&self, case: &str) -> f64 {
        self.factors.get(case).copied().unwrap_or(0.0)
    }

    pub fn includes(&self, case: &str) -> bool {
        self.factor(case).abs() > 1e-10
    }
}
