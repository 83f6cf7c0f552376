//! Linear elastic 3D frame solver
//!
//! A small direct-stiffness solver that implements
//! [`StructuralSolver`](crate::solver::StructuralSolver), so beam models can
//! be analysed in-crate.
//!
//! # Example
//!
//! ```rust
//! use beam_modeler::fem::*;
//!
//! let mut model = FEModel::new();
//! model.add_material("Steel", Material::new(200e9, 77e9, 0.3, 7850.0)).unwrap();
//! model.add_node("N0", Node::new(0.0, 0.0, 0.0)).unwrap();
//! model.add_node("N1", Node::new(5.0, 0.0, 0.0)).unwrap();
//! model.add_member("M1", Member::new("N0", "N1", "Steel", Section::rectangular(0.2, 0.4))).unwrap();
//! model.add_support("N0", Support::fixed()).unwrap();
//! model.add_member_point_load("M1", PointLoad::downward(10e3, 5.0, "Live")).unwrap();
//! model.analyze_linear().unwrap();
//!
//! let reactions = model.node_reactions("N0", DEFAULT_COMBO).unwrap();
//! assert!((reactions.fy - 10e3).abs() < 1e-3);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

pub use analysis::AnalysisOptions;
pub use elements::{Material, Member, Node, Section, Support};
pub use error::{FEAError, FEAResult};
pub use loads::{DistributedLoad, LoadCombination, LoadDirection, PointLoad, DEFAULT_COMBO};
pub use model::FEModel;
pub use results::{NodeDisplacement, Reactions};
