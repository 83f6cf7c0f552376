//! Beam model builder: description -> registration plan -> solver
//!
//! Building happens in two steps. [`BeamModelBuilder::plan`] is pure: it lays
//! out the nodes, resolves every restraint and collects the loads into a
//! [`ModelRegistration`]. Only a complete plan is replayed against a solver,
//! and [`BeamModelBuilder::build_into`] takes the solver by value so a
//! solver that rejected a call part-way is dropped rather than returned.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::description::BeamDescription;
use super::layout::{node_layout, NodeLayout, NodeOrdering};
use crate::error::{ModelError, ModelResult};
use crate::fem::Section;
use crate::parse::{LoadSpec, RestraintCode, RestraintVector};
use crate::solver::StructuralSolver;

/// Default id of the single registered material
pub const DEFAULT_MATERIAL_ID: &str = "Mat";

/// Restraint applied at node 0.
///
/// Node 0 gets a pin when nothing is declared there. A declared code replaces
/// that pin unless another policy is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OriginRestraint {
    /// Declared code combined with a pin: every DOF either restrains is fixed
    Union,
    /// Declared code replaces the pin when the origin has a support
    #[default]
    DeclaredWins,
    /// Pin regardless of what is declared at the origin
    PinWins,
}

impl OriginRestraint {
    pub fn resolve(&self, declared: Option<RestraintCode>) -> RestraintVector {
        let declared = declared.map(|code| code.restraint());
        match self {
            OriginRestraint::Union => declared
                .unwrap_or(RestraintVector::FREE)
                .union(RestraintVector::PIN),
            OriginRestraint::DeclaredWins => declared.unwrap_or(RestraintVector::PIN),
            OriginRestraint::PinWins => RestraintVector::PIN,
        }
    }
}

/// Options controlling how a description becomes a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub material_id: String,
    pub origin_restraint: OriginRestraint,
    pub node_ordering: NodeOrdering,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            material_id: DEFAULT_MATERIAL_ID.to_string(),
            origin_restraint: OriginRestraint::default(),
            node_ordering: NodeOrdering::default(),
        }
    }
}

impl BuildOptions {
    pub fn with_material_id(mut self, id: &str) -> Self {
        self.material_id = id.to_string();
        self
    }

    pub fn with_origin_restraint(mut self, policy: OriginRestraint) -> Self {
        self.origin_restraint = policy;
        self
    }

    pub fn with_node_ordering(mut self, ordering: NodeOrdering) -> Self {
        self.node_ordering = ordering;
        self
    }
}

/// Progress of a registration replay. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildStage {
    Uninitialized,
    MaterialRegistered,
    NodesPlaced,
    SupportsApplied,
    MemberCreated,
    LoadsApplied,
    Complete,
}

impl BuildStage {
    pub fn next(self) -> Self {
        match self {
            BuildStage::Uninitialized => BuildStage::MaterialRegistered,
            BuildStage::MaterialRegistered => BuildStage::NodesPlaced,
            BuildStage::NodesPlaced => BuildStage::SupportsApplied,
            BuildStage::SupportsApplied => BuildStage::MemberCreated,
            BuildStage::MemberCreated => BuildStage::LoadsApplied,
            BuildStage::LoadsApplied | BuildStage::Complete => BuildStage::Complete,
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildStage::Uninitialized => "uninitialized",
            BuildStage::MaterialRegistered => "material registration",
            BuildStage::NodesPlaced => "node placement",
            BuildStage::SupportsApplied => "support restraints",
            BuildStage::MemberCreated => "member creation",
            BuildStage::LoadsApplied => "load application",
            BuildStage::Complete => "complete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRegistration {
    pub id: String,
    pub e: f64,
    pub g: f64,
    pub nu: f64,
    pub rho: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRegistration {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestraintRegistration {
    pub node: String,
    pub restraint: RestraintVector,
    /// Code declared on the support line, if any
    pub declared: Option<RestraintCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberRegistration {
    pub id: String,
    pub start_node: String,
    pub end_node: String,
    pub material: String,
    pub section: Section,
}

/// The full, ordered set of solver calls for one beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRegistration {
    pub material: MaterialRegistration,
    pub nodes: Vec<NodeRegistration>,
    pub restraints: Vec<RestraintRegistration>,
    pub member: MemberRegistration,
    pub loads: Vec<LoadSpec>,
}

impl ModelRegistration {
    /// Restraint resolved for `node`, if it is supported
    pub fn restraint_for(&self, node: &str) -> Option<RestraintVector> {
        self.restraints
            .iter()
            .find(|registration| registration.node == node)
            .map(|registration| registration.restraint)
    }

    /// Replay every call against `solver`, stage by stage
    pub fn apply<S: StructuralSolver>(&self, solver: &mut S) -> ModelResult<BuildStage> {
        let mut stage = BuildStage::Uninitialized;
        let fail = |stage: BuildStage, err: S::Error| ModelError::Solver {
            stage: stage.next().to_string(),
            message: err.to_string(),
        };

        let material = &self.material;
        solver
            .register_material(&material.id, material.e, material.g, material.nu, material.rho)
            .map_err(|err| fail(stage, err))?;
        stage = stage.next();
        debug!("Stage {}: material '{}'", stage, material.id);

        for node in &self.nodes {
            solver
                .add_node(&node.id, node.x, node.y, node.z)
                .map_err(|err| fail(stage, err))?;
        }
        stage = stage.next();
        debug!("Stage {}: {} node(s)", stage, self.nodes.len());

        for registration in &self.restraints {
            solver
                .apply_restraint(&registration.node, registration.restraint)
                .map_err(|err| fail(stage, err))?;
        }
        stage = stage.next();
        debug!("Stage {}: {} restraint(s)", stage, self.restraints.len());

        let member = &self.member;
        solver
            .add_member(
                &member.id,
                &member.start_node,
                &member.end_node,
                &member.material,
                member.section,
            )
            .map_err(|err| fail(stage, err))?;
        stage = stage.next();
        debug!("Stage {}: member '{}' {} -> {}", stage, member.id, member.start_node, member.end_node);

        for load in &self.loads {
            let applied = match load {
                LoadSpec::Point(point) => solver.add_point_load(&member.id, point),
                LoadSpec::Distributed(dist) => solver.add_distributed_load(&member.id, dist),
            };
            applied.map_err(|err| fail(stage, err))?;
        }
        stage = stage.next();
        debug!("Stage {}: {} load(s)", stage, self.loads.len());

        Ok(stage.next())
    }
}

/// Turns [`BeamDescription`]s into solver models
#[derive(Debug, Clone, Default)]
pub struct BeamModelBuilder {
    options: BuildOptions,
}

impl BeamModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn layout(&self, beam: &BeamDescription) -> ModelResult<NodeLayout> {
        node_layout(beam.length(), &beam.support_locations(), self.options.node_ordering)
    }

    /// Compute the registration sequence without touching a solver
    pub fn plan(&self, beam: &BeamDescription) -> ModelResult<ModelRegistration> {
        let layout = self.layout(beam)?;
        let attributes = &beam.attributes;

        let material = MaterialRegistration {
            id: self.options.material_id.clone(),
            e: attributes.e,
            g: beam.shear_modulus(),
            nu: attributes.nu,
            rho: attributes.rho,
        };

        let nodes = layout
            .iter()
            .map(|(id, x)| NodeRegistration {
                id: id.to_string(),
                x,
                y: 0.0,
                z: 0.0,
            })
            .collect();

        let mut restraints = Vec::new();
        for (index, (id, x)) in layout.iter().enumerate() {
            let declared = beam.supports.get(x);
            let restraint = if index == 0 {
                Some(self.options.origin_restraint.resolve(declared))
            } else {
                declared.map(|code| code.restraint())
            };
            if let Some(restraint) = restraint {
                restraints.push(RestraintRegistration {
                    node: id.to_string(),
                    restraint,
                    declared,
                });
            }
        }

        let member = MemberRegistration {
            id: beam.name.clone(),
            start_node: layout.first_id().to_string(),
            end_node: layout.last_id().to_string(),
            material: self.options.material_id.clone(),
            section: Section::new(attributes.a, attributes.iy, attributes.iz, attributes.j),
        };

        Ok(ModelRegistration {
            material,
            nodes,
            restraints,
            member,
            loads: beam.loads.clone(),
        })
    }

    /// Build into a fresh solver
    pub fn build<S: StructuralSolver + Default>(&self, beam: &BeamDescription) -> ModelResult<S> {
        self.build_into(beam, S::default())
    }

    /// Build into `solver`, which this call owns until the model is complete
    pub fn build_into<S: StructuralSolver>(&self, beam: &BeamDescription, mut solver: S) -> ModelResult<S> {
        let plan = self.plan(beam)?;
        plan.apply(&mut solver)?;
        info!(
            "Built beam '{}': {} node(s), {} restraint(s), {} load(s)",
            beam.name,
            plan.nodes.len(),
            plan.restraints.len(),
            plan.loads.len()
        );
        Ok(solver)
    }
}
