//! The registration contract a structural solver offers to the beam builder
//!
//! The builder only ever talks to a solver through [`StructuralSolver`]:
//! register one material, place nodes, restrain them, create a member, apply
//! loads, then analyse and read reactions back. [`crate::fem::FEModel`] is
//! the in-crate implementation; [`RecordingSolver`] captures the calls
//! instead of analysing them.

mod recording;

pub use recording::{RecordingError, RecordingSolver, SolverCall};

use crate::fem::{Reactions, Section};
use crate::parse::{DistributedLoadSpec, PointLoadSpec, RestraintVector};

/// Incrementally built structural model.
///
/// Calls mutate the solver one entity at a time, so a solver instance must
/// belong to exactly one build.
pub trait StructuralSolver {
    type Error: std::error::Error + Send + Sync + 'static;

    fn register_material(&mut self, id: &str, e: f64, g: f64, nu: f64, rho: f64) -> Result<(), Self::Error>;

    fn add_node(&mut self, id: &str, x: f64, y: f64, z: f64) -> Result<(), Self::Error>;

    fn apply_restraint(&mut self, node_id: &str, restraint: RestraintVector) -> Result<(), Self::Error>;

    fn add_member(
        &mut self,
        id: &str,
        start_node: &str,
        end_node: &str,
        material_id: &str,
        section: Section,
    ) -> Result<(), Self::Error>;

    fn add_point_load(&mut self, member_id: &str, load: &PointLoadSpec) -> Result<(), Self::Error>;

    fn add_distributed_load(&mut self, member_id: &str, load: &DistributedLoadSpec) -> Result<(), Self::Error>;

    /// Run the analysis over every registered load combination
    fn analyze(&mut self) -> Result<(), Self::Error>;

    /// Reactions at a node for a load combination
    fn reactions(&self, node_id: &str, combo: &str) -> Result<Reactions, Self::Error>;
}
