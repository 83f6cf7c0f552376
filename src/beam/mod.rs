//! Beam descriptions and the builder that turns them into solver models

pub mod builder;
pub mod description;
pub mod layout;

pub use builder::{
    BeamModelBuilder, BuildOptions, BuildStage, MaterialRegistration, MemberRegistration, ModelRegistration,
    NodeRegistration, OriginRestraint, RestraintRegistration, DEFAULT_MATERIAL_ID,
};
pub use description::BeamDescription;
pub use layout::{node_id, node_layout, NodeLayout, NodeOrdering};
