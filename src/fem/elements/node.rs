//! Nodes and the analysis results they carry

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::fem::results::{NodeDisplacement, Reactions};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    #[serde(skip)]
    results: HashMap<String, (NodeDisplacement, Reactions)>,
}

impl Node {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            results: HashMap::new(),
        }
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn distance_to(&self, other: &Node) -> f64 {
        let [dx, dy, dz] = [other.x - self.x, other.y - self.y, other.z - self.z];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn displacement(&self, combo: &str) -> Option<NodeDisplacement> {
        self.results.get(combo).map(|(displacement, _)| *displacement)
    }

    pub fn reaction(&self, combo: &str) -> Option<Reactions> {
        self.results.get(combo).map(|(_, reaction)| *reaction)
    }

    pub(crate) fn record(&mut self, combo: &str, displacement: NodeDisplacement, reaction: Reactions) {
        self.results.insert(combo.to_string(), (displacement, reaction));
    }

    pub(crate) fn clear_results(&mut self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Node::new(0.0, 0.0, 0.0);
        let b = Node::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert_eq!(b.coords(), [3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_clear_results() {
        let mut node = Node::new(1.0, 0.0, 0.0);
        node.record("Combo 1", NodeDisplacement::default(), Reactions::from_array([1.0; 6]));
        assert_eq!(node.reaction("Combo 1").map(|r| r.fx), Some(1.0));

        node.clear_results();
        assert!(node.reaction("Combo 1").is_none());
    }
}
