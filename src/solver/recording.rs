//! A solver that records registration calls in order

use serde::Serialize;
use thiserror::Error;

use super::StructuralSolver;
use crate::fem::{Reactions, Section};
use crate::parse::{DistributedLoadSpec, PointLoadSpec, RestraintVector};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordingError {
    #[error("Recording solver does not analyse models")]
    NotAnalysable,
}

/// One call made against a [`StructuralSolver`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SolverCall {
    RegisterMaterial { id: String, e: f64, g: f64, nu: f64, rho: f64 },
    AddNode { id: String, x: f64, y: f64, z: f64 },
    ApplyRestraint { node: String, restraint: RestraintVector },
    AddMember { id: String, start_node: String, end_node: String, material: String, section: Section },
    AddPointLoad { member: String, load: PointLoadSpec },
    AddDistributedLoad { member: String, load: DistributedLoadSpec },
}

/// Captures the registration sequence without analysing it
#[derive(Debug, Clone, Default)]
pub struct RecordingSolver {
    calls: Vec<SolverCall>,
}

impl RecordingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SolverCall] {
        &self.calls
    }

    /// Restraints applied to `node`, in call order
    pub fn restraints_for(&self, node: &str) -> Vec<RestraintVector> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SolverCall::ApplyRestraint { node: target, restraint } if target == node => Some(*restraint),
                _ => None,
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SolverCall::AddNode { .. }))
            .count()
    }
}

impl StructuralSolver for RecordingSolver {
    type Error = RecordingError;

    fn register_material(&mut self, id: &str, e: f64, g: f64, nu: f64, rho: f64) -> Result<(), Self::Error> {
        self.calls.push(SolverCall::RegisterMaterial {
            id: id.to_string(),
            e,
            g,
            nu,
            rho,
        });
        Ok(())
    }

    fn add_node(&mut self, id: &str, x: f64, y: f64, z: f64) -> Result<(), Self::Error> {
        self.calls.push(SolverCall::AddNode {
            id: id.to_string(),
            x,
            y,
            z,
        });
        Ok(())
    }

    fn apply_restraint(&mut self, node_id: &str, restraint: RestraintVector) -> Result<(), Self::Error> {
        self.calls.push(SolverCall::ApplyRestraint {
            node: node_id.to_string(),
            restraint,
        });
        Ok(())
    }

    fn add_member(
        &mut self,
        id: &str,
        start_node: &str,
        end_node: &str,
        material_id: &str,
        section: Section,
    ) -> Result<(), Self::Error> {
        self.calls.push(SolverCall::AddMember {
            id: id.to_string(),
            start_node: start_node.to_string(),
            end_node: end_node.to_string(),
            material: material_id.to_string(),
            section,
        });
        Ok(())
    }

    fn add_point_load(&mut self, member_id: &str, load: &PointLoadSpec) -> Result<(), Self::Error> {
        self.calls.push(SolverCall::AddPointLoad {
            member: member_id.to_string(),
            load: load.clone(),
        });
        Ok(())
    }

    fn add_distributed_load(&mut self, member_id: &str, load: &DistributedLoadSpec) -> Result<(), Self::Error> {
        self.calls.push(SolverCall::AddDistributedLoad {
            member: member_id.to_string(),
            load: load.clone(),
        });
        Ok(())
    }

    fn analyze(&mut self) -> Result<(), Self::Error> {
        Err(RecordingError::NotAnalysable)
    }

    fn reactions(&self, _node_id: &str, _combo: &str) -> Result<Reactions, Self::Error> {
        Err(RecordingError::NotAnalysable)
    }
}
