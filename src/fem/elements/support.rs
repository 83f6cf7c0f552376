//! Support conditions

use serde::{Deserialize, Serialize};

use crate::parse::RestraintVector;

/// Restrained DOFs at a node, [DX, DY, DZ, RX, RY, RZ]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    pub dx: bool,
    pub dy: bool,
    pub dz: bool,
    pub rx: bool,
    pub ry: bool,
    pub rz: bool,
}

impl Support {
    pub fn with_restraints(dx: bool, dy: bool, dz: bool, rx: bool, ry: bool, rz: bool) -> Self {
        Self { dx, dy, dz, rx, ry, rz }
    }

    /// All translations restrained, rotations free
    pub fn pinned() -> Self {
        Self::with_restraints(true, true, true, false, false, false)
    }

    /// Every DOF restrained
    pub fn fixed() -> Self {
        Self::with_restraints(true, true, true, true, true, true)
    }

    pub fn as_array(&self) -> [bool; 6] {
        [self.dx, self.dy, self.dz, self.rx, self.ry, self.rz]
    }

    pub fn restrained_dofs(&self) -> Vec<usize> {
        (0..6).filter(|&i| self.as_array()[i]).collect()
    }

    pub fn is_supported(&self) -> bool {
        self.as_array().iter().any(|restrained| *restrained)
    }

    pub fn num_restrained(&self) -> usize {
        self.restrained_dofs().len()
    }
}

impl From<RestraintVector> for Support {
    fn from(restraint: RestraintVector) -> Self {
        let [dx, dy, dz, rx, ry, rz] = restraint.as_array();
        Self::with_restraints(dx, dy, dz, rx, ry, rz)
    }
}
