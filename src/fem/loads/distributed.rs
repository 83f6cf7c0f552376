//! Distributed loads on members

use serde::{Deserialize, Serialize};

use super::point_load::LoadDirection;
use crate::fem::error::{FEAError, FEAResult};
use crate::parse::DistributedLoadSpec;

/// A linearly varying line load between two positions on a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Magnitude at `x1`
    pub w1: f64,
    /// Magnitude at `x2`
    pub w2: f64,
    /// Start position, distance from the member start
    pub x1: f64,
    /// End position
    pub x2: f64,
    pub direction: LoadDirection,
    pub case: String,
}

impl DistributedLoad {
    /// Positions are stored in increasing order; reversed ends swap their
    /// magnitudes with them.
    pub fn new(w1: f64, w2: f64, x1: f64, x2: f64, direction: LoadDirection, case: &str) -> Self {
        let (w1, w2, x1, x2) = if x2 < x1 { (w2, w1, x2, x1) } else { (w1, w2, x1, x2) };
        Self {
            w1,
            w2,
            x1,
            x2,
            direction,
            case: case.to_string(),
        }
    }

    pub fn uniform(w: f64, x1: f64, x2: f64, direction: LoadDirection, case: &str) -> Self {
        Self::new(w, w, x1, x2, direction, case)
    }

    pub fn is_uniform(&self) -> bool {
        (self.w1 - self.w2).abs() < 1e-10
    }

    /// Intensity at position `x` along the member
    pub fn intensity_at(&self, x: f64) -> f64 {
        let span = self.x2 - self.x1;
        if span <= 0.0 {
            return self.w1;
        }
        self.w1 + (self.w2 - self.w1) * (x - self.x1) / span
    }

    pub fn total_force(&self) -> f64 {
        (self.w1 + self.w2) / 2.0 * (self.x2 - self.x1)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            w1: self.w1 * factor,
            w2: self.w2 * factor,
            ..self.clone()
        }
    }
}

impl TryFrom<&DistributedLoadSpec> for DistributedLoad {
    type Error = FEAError;

    fn try_from(spec: &DistributedLoadSpec) -> FEAResult<Self> {
        let direction = LoadDirection::from_label(&spec.direction)?;
        Ok(Self::new(
            spec.start_magnitude,
            spec.end_magnitude,
            spec.start_location,
            spec.end_location,
            direction,
            &spec.case,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trapezoid() {
        let load = DistributedLoad::new(-10.0, -20.0, 2.0, 6.0, LoadDirection::FY, "D");
        assert!(!load.is_uniform());
        assert_eq!(load.intensity_at(4.0), -15.0);
        assert_eq!(load.total_force(), -60.0);
    }

    #[test]
    fn test_reversed_ends() {
        let load = DistributedLoad::new(-5.0, -1.0, 8.0, 2.0, LoadDirection::Fy, "D");
        assert_eq!((load.x1, load.x2), (2.0, 8.0));
        assert_eq!((load.w1, load.w2), (-1.0, -5.0));
    }
}
