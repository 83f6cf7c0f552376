//! Positional beam attributes

use log::warn;
use serde::{Deserialize, Serialize};

/// Attribute names in the order they appear on the attribute line
pub const ATTRIBUTE_NAMES: [&str; 8] = ["L", "E", "Iz", "Iy", "A", "J", "nu", "rho"];

/// Value used for every attribute the input leaves out
pub const DEFAULT_ATTRIBUTE: f64 = 1.0;

/// Geometric, section and material attributes of a beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamAttributes {
    /// Total length
    pub length: f64,
    /// Elastic modulus
    pub e: f64,
    /// Moment of inertia about the strong (local z) axis
    pub iz: f64,
    /// Moment of inertia about the weak (local y) axis
    pub iy: f64,
    /// Cross-sectional area
    pub a: f64,
    /// Torsional constant
    pub j: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density
    pub rho: f64,
}

impl Default for BeamAttributes {
    fn default() -> Self {
        Self {
            length: DEFAULT_ATTRIBUTE,
            e: DEFAULT_ATTRIBUTE,
            iz: DEFAULT_ATTRIBUTE,
            iy: DEFAULT_ATTRIBUTE,
            a: DEFAULT_ATTRIBUTE,
            j: DEFAULT_ATTRIBUTE,
            nu: DEFAULT_ATTRIBUTE,
            rho: DEFAULT_ATTRIBUTE,
        }
    }
}

impl BeamAttributes {
    /// Shear modulus G = E / (2 (1 + nu))
    pub fn shear_modulus(&self) -> f64 {
        crate::design::beams::shear_modulus(self.nu, self.e)
    }

    /// Values in attribute-line order
    pub fn as_array(&self) -> [f64; 8] {
        [
            self.length, self.e, self.iz, self.iy, self.a, self.j, self.nu, self.rho,
        ]
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut f64> {
        match index {
            0 => Some(&mut self.length),
            1 => Some(&mut self.e),
            2 => Some(&mut self.iz),
            3 => Some(&mut self.iy),
            4 => Some(&mut self.a),
            5 => Some(&mut self.j),
            6 => Some(&mut self.nu),
            7 => Some(&mut self.rho),
            _ => None,
        }
    }
}

/// Assign values to attributes by position.
///
/// Any prefix of the eight attributes may be given; the rest keep
/// [`DEFAULT_ATTRIBUTE`]. Values beyond the eighth are ignored.
pub fn map_attributes(values: &[f64]) -> BeamAttributes {
    let mut attributes = BeamAttributes::default();
    for (index, value) in values.iter().enumerate() {
        match attributes.slot_mut(index) {
            Some(slot) => *slot = *value,
            None => {
                warn!(
                    "Ignoring {} surplus attribute value(s) after '{}'",
                    values.len() - ATTRIBUTE_NAMES.len(),
                    ATTRIBUTE_NAMES[ATTRIBUTE_NAMES.len() - 1]
                );
                break;
            }
        }
    }
    attributes
}
