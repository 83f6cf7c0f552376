//! Member element - 3D frame element

use serde::{Deserialize, Serialize};

use super::Section;

/// A physical frame member between two nodes.
///
/// Registered nodes lying on the member axis between its ends split it into
/// analysis segments; loads are positioned along the whole member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Start node name
    pub i_node: String,
    /// End node name
    pub j_node: String,
    pub material: String,
    pub section: Section,

    /// Calculated length
    #[serde(skip)]
    pub(crate) length: Option<f64>,
}

impl Member {
    pub fn new(i_node: &str, j_node: &str, material: &str, section: Section) -> Self {
        Self {
            i_node: i_node.to_string(),
            j_node: j_node.to_string(),
            material: material.to_string(),
            section,
            length: None,
        }
    }

    pub fn length(&self) -> Option<f64> {
        self.length
    }
}

/// A stretch of a member between two consecutive nodes on its axis
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Segment {
    pub i_node: String,
    pub j_node: String,
    /// Distance of the segment start from the member start
    pub start: f64,
    pub length: f64,
}

impl Segment {
    pub fn end(&self) -> f64 {
        self.start + self.length
    }
}
