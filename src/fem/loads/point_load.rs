//! Point loads on members

use serde::{Deserialize, Serialize};

use crate::fem::error::{FEAError, FEAResult};
use crate::parse::PointLoadSpec;

/// Direction of a member load
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadDirection {
    /// Force in member's local x direction (axial)
    Fx,
    /// Force in member's local y direction
    Fy,
    /// Force in member's local z direction
    Fz,
    /// Force in global X direction
    FX,
    /// Force in global Y direction
    FY,
    /// Force in global Z direction
    FZ,
}

impl LoadDirection {
    /// Match a two-character label. Exact labels come first, anything else
    /// is read case-insensitively as a global direction.
    pub fn from_label(label: &str) -> FEAResult<Self> {
        let label = label.trim();
        let direction = match label {
            "Fx" => LoadDirection::Fx,
            "Fy" => LoadDirection::Fy,
            "Fz" => LoadDirection::Fz,
            _ => match label.to_ascii_uppercase().as_str() {
                "FX" => LoadDirection::FX,
                "FY" => LoadDirection::FY,
                "FZ" => LoadDirection::FZ,
                _ => return Err(FEAError::UnsupportedLoadDirection(label.to_string())),
            },
        };
        Ok(direction)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, LoadDirection::Fx | LoadDirection::Fy | LoadDirection::Fz)
    }

    /// Axis index, 0 for x through 2 for z, in the direction's own frame
    pub fn axis(&self) -> usize {
        match self {
            LoadDirection::Fx | LoadDirection::FX => 0,
            LoadDirection::Fy | LoadDirection::FY => 1,
            LoadDirection::Fz | LoadDirection::FZ => 2,
        }
    }
}

/// A concentrated load on a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    pub magnitude: f64,
    /// Distance from the member start
    pub position: f64,
    pub direction: LoadDirection,
    pub case: String,
}

impl PointLoad {
    pub fn new(magnitude: f64, position: f64, direction: LoadDirection, case: &str) -> Self {
        Self {
            magnitude,
            position,
            direction,
            case: case.to_string(),
        }
    }

    /// Negative global Y load
    pub fn downward(magnitude: f64, position: f64, case: &str) -> Self {
        Self::new(-magnitude.abs(), position, LoadDirection::FY, case)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            magnitude: self.magnitude * factor,
            ..self.clone()
        }
    }
}

impl TryFrom<&PointLoadSpec> for PointLoad {
    type Error = FEAError;

    fn try_from(spec: &PointLoadSpec) -> FEAResult<Self> {
        let direction = LoadDirection::from_label(&spec.direction)?;
        Ok(Self::new(spec.magnitude, spec.location, direction, &spec.case))
    }
}
