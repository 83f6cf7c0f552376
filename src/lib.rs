//! Beam Modeler - build structural beam models from a compact text format
//!
//! A beam file names the beam, lists its attributes, its supports and its
//! loads:
//!
//! ```text
//! Girder
//! 10.0, 200000, 437e6, 22e6, 9000, 3e5, 0.3, 7.85e-9
//! 0.0F, 7.0P, 10.0P
//! POINT-Fy, -25000, 3.5, Case=LIVE
//! DIST-Fy, -10, -10, 0.0, 10.0, Case=DEAD
//! ```
//!
//! The crate provides:
//! - A lenient parser for that format
//! - A builder that lays out nodes, resolves restraints and registers the
//!   model with any [`StructuralSolver`](solver::StructuralSolver)
//! - A linear elastic 3D frame solver to analyse the result
//! - Hand-calculation formulas: beam reactions, column buckling, load
//!   factors and seismic response spectra
//!
//! ## Example
//! ```rust
//! use beam_modeler::prelude::*;
//!
//! let beam: BeamDescription = "Girder\n10.0, 200000, 4e8, 2e7, 9000, 3e5, 0.3, 7.85e-9\n0.0F, 10.0P\nDIST-Fy, -10, -10, 0.0, 10.0, Case=DEAD"
//!     .parse()
//!     .unwrap();
//!
//! let mut model: FEModel = BeamModelBuilder::new().build(&beam).unwrap();
//! model.analyze_linear().unwrap();
//!
//! let reaction = model.node_reactions("N0", DEFAULT_COMBO).unwrap();
//! assert!((reaction.fy - 50.0).abs() < 1e-6);
//! ```

pub mod beam;
pub mod design;
pub mod error;
pub mod fem;
pub mod io;
pub mod parse;
pub mod solver;

// Re-export common types
pub mod prelude {
    pub use crate::beam::{
        BeamDescription, BeamModelBuilder, BuildOptions, BuildStage, ModelRegistration, NodeLayout, NodeOrdering,
        OriginRestraint,
    };
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::fem::{
        AnalysisOptions, DistributedLoad, FEAError, FEAResult, FEModel, LoadCombination, Material, Member, Node,
        NodeDisplacement, PointLoad, Reactions, Section, Support, DEFAULT_COMBO,
    };
    pub use crate::io::{load_beam_description, load_beam_model, read_beam_file};
    pub use crate::parse::{DistributedLoadSpec, LoadSpec, PointLoadSpec, RestraintCode, RestraintVector};
    pub use crate::solver::{RecordingSolver, StructuralSolver};
}
