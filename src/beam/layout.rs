//! Node layout along the beam axis

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// How interior support nodes are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeOrdering {
    /// Sorted by coordinate, so node ids increase along the beam
    Ascending,
    /// In the order supports were declared
    #[default]
    Declaration,
}

/// Node ids and x-coordinates, from `N0` at 0.0 to the last node at the
/// beam length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    nodes: Vec<(String, f64)>,
}

impl NodeLayout {
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.nodes.iter().map(|(id, x)| (id.as_str(), *x))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Origin node id
    pub fn first_id(&self) -> &str {
        &self.nodes[0].0
    }

    /// Terminal node id
    pub fn last_id(&self) -> &str {
        &self.nodes[self.nodes.len() - 1].0
    }

    pub fn coordinates(&self) -> Vec<f64> {
        self.nodes.iter().map(|(_, x)| *x).collect()
    }

    /// Id of the node at exactly `x`
    pub fn id_at(&self, x: f64) -> Option<&str> {
        self.nodes
            .iter()
            .find(|(_, coord)| *coord == x)
            .map(|(id, _)| id.as_str())
    }
}

/// Format the id of the `index`-th node
pub fn node_id(index: usize) -> String {
    format!("N{}", index)
}

/// Lay out nodes for a beam of `length` with supports at `supports`.
///
/// Node 0 sits at 0.0 and the last node at `length`. Supports strictly
/// inside the beam add one node each, duplicates once.
pub fn node_layout(length: f64, supports: &[f64], ordering: NodeOrdering) -> ModelResult<NodeLayout> {
    if !length.is_finite() || length <= 0.0 {
        return Err(ModelError::empty_topology(format!(
            "beam length must be positive, got {}",
            length
        )));
    }

    let mut interior: Vec<f64> = Vec::new();
    for &x in supports {
        if x > 0.0 && x < length && !interior.contains(&x) {
            interior.push(x);
        }
    }
    if ordering == NodeOrdering::Ascending {
        interior.sort_by(f64::total_cmp);
    }

    let nodes: Vec<(String, f64)> = std::iter::once(0.0)
        .chain(interior)
        .chain(std::iter::once(length))
        .enumerate()
        .map(|(index, x)| (node_id(index), x))
        .collect();

    if nodes.len() < 2 {
        return Err(ModelError::empty_topology("fewer than two nodes"));
    }
    Ok(NodeLayout { nodes })
}
