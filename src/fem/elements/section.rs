//! Section properties for frame elements

use serde::{Deserialize, Serialize};

/// Cross-section properties of a member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Cross-sectional area
    pub a: f64,
    /// Moment of inertia about local y-axis
    pub iy: f64,
    /// Moment of inertia about local z-axis
    pub iz: f64,
    /// Torsional constant
    pub j: f64,
}

impl Section {
    pub fn new(a: f64, iy: f64, iz: f64, j: f64) -> Self {
        Self { a, iy, iz, j }
    }

    /// Solid rectangle, `width` along local z and `depth` along local y
    pub fn rectangular(width: f64, depth: f64) -> Self {
        let a = width * depth;
        let iz = width * depth.powi(3) / 12.0;
        let iy = depth * width.powi(3) / 12.0;

        // Approximate St. Venant constant
        let (long, short) = if width > depth { (width, depth) } else { (depth, width) };
        let j = long * short.powi(3) / 3.0 * (1.0 - 0.63 * short / long);

        Self { a, iy, iz, j }
    }

    /// Radius of gyration about local y
    pub fn ry(&self) -> f64 {
        (self.iy / self.a).sqrt()
    }

    /// Radius of gyration about local z
    pub fn rz(&self) -> f64 {
        (self.iz / self.a).sqrt()
    }

    pub fn is_valid(&self) -> bool {
        [self.a, self.iy, self.iz, self.j]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
    }
}
