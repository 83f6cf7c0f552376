//! FE Model - the frame model container and linear solver

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::analysis::AnalysisOptions;
use super::elements::{Material, Member, Node, Section, Segment, Support};
use super::error::{FEAError, FEAResult};
use super::loads::{DistributedLoad, LoadCombination, LoadDirection, PointLoad, DEFAULT_COMBO};
use super::math::{self, Mat, Mat12, Mat3, Vec as FEVec, Vec12};
use super::results::{NodeDisplacement, Reactions};
use crate::parse::{DistributedLoadSpec, PointLoadSpec, RestraintVector};
use crate::solver::StructuralSolver;

/// Relative tolerance for locating nodes and loads along a member
const POSITION_TOLERANCE: f64 = 1e-9;

/// A 3D frame model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FEModel {
    pub nodes: HashMap<String, Node>,
    pub materials: HashMap<String, Material>,
    pub members: HashMap<String, Member>,
    pub supports: HashMap<String, Support>,
    pub member_point_loads: HashMap<String, Vec<PointLoad>>,
    pub member_dist_loads: HashMap<String, Vec<DistributedLoad>>,
    pub load_combos: HashMap<String, LoadCombination>,

    #[serde(skip)]
    analyzed: bool,
}

impl FEModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Model Building Methods
    // ========================

    pub fn add_node(&mut self, name: &str, node: Node) -> FEAResult<()> {
        if self.nodes.contains_key(name) {
            return Err(FEAError::DuplicateName(name.to_string()));
        }
        self.nodes.insert(name.to_string(), node);
        self.analyzed = false;
        Ok(())
    }

    pub fn add_material(&mut self, name: &str, material: Material) -> FEAResult<()> {
        if self.materials.contains_key(name) {
            return Err(FEAError::DuplicateName(name.to_string()));
        }
        self.materials.insert(name.to_string(), material);
        Ok(())
    }

    /// Add a member; its end nodes and material must already exist
    pub fn add_member(&mut self, name: &str, mut member: Member) -> FEAResult<()> {
        if self.members.contains_key(name) {
            return Err(FEAError::DuplicateName(name.to_string()));
        }
        if !self.materials.contains_key(&member.material) {
            return Err(FEAError::MaterialNotFound(member.material.clone()));
        }
        if !member.section.is_valid() {
            return Err(FEAError::InvalidGeometry(format!(
                "member '{}' has non-positive section properties {:?}",
                name, member.section
            )));
        }

        let i_node = self.node(&member.i_node)?;
        let j_node = self.node(&member.j_node)?;
        let length = i_node.distance_to(j_node);
        if !(length > 1e-10) {
            return Err(FEAError::InvalidGeometry(format!(
                "member '{}' has zero length: i={}, j={}",
                name, member.i_node, member.j_node
            )));
        }
        member.length = Some(length);

        self.members.insert(name.to_string(), member);
        self.analyzed = false;
        Ok(())
    }

    /// Set the support at a node, replacing any earlier one
    pub fn add_support(&mut self, node_name: &str, support: Support) -> FEAResult<()> {
        self.node(node_name)?;
        self.supports.insert(node_name.to_string(), support);
        self.analyzed = false;
        Ok(())
    }

    pub fn add_member_point_load(&mut self, member_name: &str, load: PointLoad) -> FEAResult<()> {
        self.check_position(member_name, load.position)?;
        self.member_point_loads
            .entry(member_name.to_string())
            .or_default()
            .push(load);
        self.analyzed = false;
        Ok(())
    }

    pub fn add_member_dist_load(&mut self, member_name: &str, load: DistributedLoad) -> FEAResult<()> {
        self.check_position(member_name, load.x1)?;
        self.check_position(member_name, load.x2)?;
        self.member_dist_loads
            .entry(member_name.to_string())
            .or_default()
            .push(load);
        self.analyzed = false;
        Ok(())
    }

    pub fn add_load_combo(&mut self, combo: LoadCombination) -> FEAResult<()> {
        if self.load_combos.contains_key(&combo.name) {
            return Err(FEAError::DuplicateName(combo.name));
        }
        self.load_combos.insert(combo.name.clone(), combo);
        self.analyzed = false;
        Ok(())
    }

    fn node(&self, name: &str) -> FEAResult<&Node> {
        self.nodes
            .get(name)
            .ok_or_else(|| FEAError::NodeNotFound(name.to_string()))
    }

    fn member(&self, name: &str) -> FEAResult<&Member> {
        self.members
            .get(name)
            .ok_or_else(|| FEAError::MemberNotFound(name.to_string()))
    }

    fn member_length(&self, name: &str) -> FEAResult<f64> {
        let member = self.member(name)?;
        match member.length {
            Some(length) => Ok(length),
            None => Ok(self.node(&member.i_node)?.distance_to(self.node(&member.j_node)?)),
        }
    }

    fn check_position(&self, member_name: &str, position: f64) -> FEAResult<()> {
        let length = self.member_length(member_name)?;
        let slack = POSITION_TOLERANCE * length;
        if !(position >= -slack && position <= length + slack) {
            return Err(FEAError::LoadOutsideMember {
                member: member_name.to_string(),
                position,
                length,
            });
        }
        Ok(())
    }

    // ========================
    // Analysis Methods
    // ========================

    pub fn analyze_linear(&mut self) -> FEAResult<()> {
        self.analyze(AnalysisOptions::linear())
    }

    /// Run linear static analysis for every load combination
    pub fn analyze(&mut self, options: AnalysisOptions) -> FEAResult<()> {
        if self.load_combos.is_empty() {
            let combo = LoadCombination::unfactored(DEFAULT_COMBO, &self.load_cases());
            self.load_combos.insert(combo.name.clone(), combo);
        }

        let dof_map = self.prepare_model();
        let segments = self.build_segments()?;
        let k_global = self.build_global_stiffness(&segments, &dof_map)?;
        debug!(
            "Assembled {} DOFs from {} node(s) and {} segment(s)",
            k_global.nrows(),
            self.nodes.len(),
            segments.values().map(|s| s.len()).sum::<usize>()
        );

        for combo_name in self.combo_names() {
            let combo = self
                .load_combos
                .get(&combo_name)
                .cloned()
                .ok_or_else(|| FEAError::LoadCombinationNotFound(combo_name.clone()))?;

            let p_global = self.build_load_vector(&combo, &segments, &dof_map)?;
            let d_global = self.solve_linear(&k_global, &p_global, &dof_map, &options)?;
            self.store_results(&combo_name, &k_global, &p_global, &d_global, &dof_map);
        }

        self.analyzed = true;
        info!("Linear analysis complete for {} combination(s)", self.load_combos.len());
        Ok(())
    }

    /// Clear old results and map node names to DOF offsets, ordered by name
    fn prepare_model(&mut self) -> HashMap<String, usize> {
        self.nodes.values_mut().for_each(Node::clear_results);

        let mut names: Vec<&String> = self.nodes.keys().collect();
        names.sort();
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index * 6))
            .collect()
    }

    /// Split every member at the nodes lying on its axis
    fn build_segments(&self) -> FEAResult<HashMap<String, Vec<Segment>>> {
        let mut segments = HashMap::new();
        for (name, member) in &self.members {
            segments.insert(name.clone(), self.member_segments(member)?);
        }
        Ok(segments)
    }

    fn member_segments(&self, member: &Member) -> FEAResult<Vec<Segment>> {
        let i_node = self.node(&member.i_node)?;
        let j_node = self.node(&member.j_node)?;
        let length = i_node.distance_to(j_node);
        let tolerance = POSITION_TOLERANCE * length;
        let axis = [
            (j_node.x - i_node.x) / length,
            (j_node.y - i_node.y) / length,
            (j_node.z - i_node.z) / length,
        ];

        let mut stations: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .filter(|(name, _)| **name != member.i_node && **name != member.j_node)
            .filter_map(|(name, node)| {
                let v = [node.x - i_node.x, node.y - i_node.y, node.z - i_node.z];
                let s = v[0] * axis[0] + v[1] * axis[1] + v[2] * axis[2];
                let offset = ((v[0] - s * axis[0]).powi(2)
                    + (v[1] - s * axis[1]).powi(2)
                    + (v[2] - s * axis[2]).powi(2))
                .sqrt();
                (offset <= tolerance && s > tolerance && s < length - tolerance)
                    .then_some((s, name.as_str()))
            })
            .collect();
        stations.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        stations.dedup_by(|next, kept| {
            let duplicate = (next.0 - kept.0).abs() <= tolerance;
            if duplicate {
                warn!("Node '{}' coincides with '{}' and is not connected", next.1, kept.1);
            }
            duplicate
        });

        let chain: Vec<(f64, &str)> = std::iter::once((0.0, member.i_node.as_str()))
            .chain(stations)
            .chain(std::iter::once((length, member.j_node.as_str())))
            .collect();

        Ok(chain
            .windows(2)
            .map(|pair| Segment {
                i_node: pair[0].1.to_string(),
                j_node: pair[1].1.to_string(),
                start: pair[0].0,
                length: pair[1].0 - pair[0].0,
            })
            .collect())
    }

    fn member_frame(&self, member: &Member) -> FEAResult<(Mat3, Mat12)> {
        let i = self.node(&member.i_node)?.coords();
        let j = self.node(&member.j_node)?.coords();
        Ok((
            math::member_direction_cosines(&i, &j)?,
            math::member_transformation_matrix(&i, &j)?,
        ))
    }

    fn build_global_stiffness(
        &self,
        segments: &HashMap<String, Vec<Segment>>,
        dof_map: &HashMap<String, usize>,
    ) -> FEAResult<Mat> {
        let n_dofs = self.nodes.len() * 6;
        let mut k_global = Mat::zeros(n_dofs, n_dofs);

        for (name, member) in &self.members {
            let material = self
                .materials
                .get(&member.material)
                .ok_or_else(|| FEAError::MaterialNotFound(member.material.clone()))?;
            let Section { a, iy, iz, j } = member.section;
            let (_, t) = self.member_frame(member)?;

            for segment in segments.get(name).into_iter().flatten() {
                let k_local = math::member_local_stiffness(material.e, material.g, a, iy, iz, j, segment.length);
                let k_segment = t.transpose() * k_local * t;
                let dofs = [dof_map[&segment.i_node], dof_map[&segment.j_node]];

                for (bi, &row) in dofs.iter().enumerate() {
                    for (bj, &col) in dofs.iter().enumerate() {
                        for r in 0..6 {
                            for c in 0..6 {
                                k_global[(row + r, col + c)] += k_segment[(bi * 6 + r, bj * 6 + c)];
                            }
                        }
                    }
                }
            }
        }

        Ok(k_global)
    }

    /// Equivalent nodal loads for a combination: the negated fixed end
    /// reactions of every factored member load, in global axes
    fn build_load_vector(
        &self,
        combo: &LoadCombination,
        segments: &HashMap<String, Vec<Segment>>,
        dof_map: &HashMap<String, usize>,
    ) -> FEAResult<FEVec> {
        let mut p = FEVec::zeros(self.nodes.len() * 6);

        for (name, member) in &self.members {
            let member_segments = match segments.get(name) {
                Some(member_segments) => member_segments,
                None => continue,
            };
            let (r, t) = self.member_frame(member)?;
            let tolerance = POSITION_TOLERANCE * self.member_length(name)?;

            let mut add_fer = |segment: &Segment, fer_local: Vec12| {
                let fer_global = t.transpose() * fer_local;
                let i_dof = dof_map[&segment.i_node];
                let j_dof = dof_map[&segment.j_node];
                for k in 0..6 {
                    p[i_dof + k] -= fer_global[k];
                    p[j_dof + k] -= fer_global[k + 6];
                }
            };

            for load in self.member_point_loads.get(name).into_iter().flatten() {
                let factor = combo.factor(&load.case);
                if factor.abs() < 1e-10 {
                    continue;
                }
                let segment = member_segments
                    .iter()
                    .find(|segment| load.position <= segment.end() + tolerance)
                    .or_else(|| member_segments.last());
                if let Some(segment) = segment {
                    let a = (load.position - segment.start).clamp(0.0, segment.length);
                    let components = local_components(load.direction, &r);
                    let fer = (0..3)
                        .filter(|&axis| components[axis].abs() > 1e-12)
                        .fold(Vec12::zeros(), |acc, axis| {
                            acc + math::fer_point_load(
                                factor * load.magnitude * components[axis],
                                a,
                                segment.length,
                                axis,
                            )
                        });
                    add_fer(segment, fer);
                }
            }

            for load in self.member_dist_loads.get(name).into_iter().flatten() {
                let factor = combo.factor(&load.case);
                if factor.abs() < 1e-10 {
                    continue;
                }
                let components = local_components(load.direction, &r);
                for segment in member_segments {
                    let lo = load.x1.max(segment.start);
                    let hi = load.x2.min(segment.end());
                    if hi - lo <= tolerance {
                        continue;
                    }
                    let (w_lo, w_hi) = (factor * load.intensity_at(lo), factor * load.intensity_at(hi));
                    let fer = (0..3)
                        .filter(|&axis| components[axis].abs() > 1e-12)
                        .fold(Vec12::zeros(), |acc, axis| {
                            acc + math::fer_linear_load(
                                w_lo * components[axis],
                                w_hi * components[axis],
                                lo - segment.start,
                                hi - segment.start,
                                segment.length,
                                axis,
                            )
                        });
                    add_fer(segment, fer);
                }
            }
        }

        Ok(p)
    }

    /// Solve the free-DOF partition; restrained DOFs stay at zero
    fn solve_linear(
        &self,
        k_global: &Mat,
        p_global: &FEVec,
        dof_map: &HashMap<String, usize>,
        options: &AnalysisOptions,
    ) -> FEAResult<FEVec> {
        let n_dofs = k_global.nrows();
        let mut restrained = vec![false; n_dofs];
        for (node_name, support) in &self.supports {
            if let Some(&base) = dof_map.get(node_name) {
                for (k, fixed) in support.as_array().iter().enumerate() {
                    restrained[base + k] = *fixed;
                }
            }
        }
        let free_dofs: Vec<usize> = (0..n_dofs).filter(|&dof| !restrained[dof]).collect();

        let mut d_full = FEVec::zeros(n_dofs);
        if free_dofs.is_empty() {
            return Ok(d_full);
        }

        let n_free = free_dofs.len();
        let k11 = Mat::from_fn(n_free, n_free, |i, j| k_global[(free_dofs[i], free_dofs[j])]);
        let p1 = FEVec::from_fn(n_free, |i, _| p_global[free_dofs[i]]);

        let d1 = if options.check_stability {
            math::solve_checked(&k11, &p1, options.pivot_tolerance)?
        } else {
            math::solve_linear_system(&k11, &p1).ok_or(FEAError::SingularMatrix)?
        };

        for (i, &dof) in free_dofs.iter().enumerate() {
            d_full[dof] = d1[i];
        }
        Ok(d_full)
    }

    /// Store displacements and reactions `R = K·D − P`, masked to the
    /// restrained DOFs of each node
    fn store_results(
        &mut self,
        combo_name: &str,
        k_global: &Mat,
        p_global: &FEVec,
        d_global: &FEVec,
        dof_map: &HashMap<String, usize>,
    ) {
        let r_global = k_global * d_global - p_global;

        for (name, node) in self.nodes.iter_mut() {
            let base = dof_map[name];
            let mask = self
                .supports
                .get(name)
                .map(|support| support.as_array())
                .unwrap_or([false; 6]);

            let mut displacement = [0.0; 6];
            let mut reaction = [0.0; 6];
            for k in 0..6 {
                displacement[k] = d_global[base + k];
                if mask[k] {
                    reaction[k] = r_global[base + k];
                }
            }
            node.record(
                combo_name,
                NodeDisplacement::from_array(displacement),
                Reactions::from_array(reaction),
            );
        }
    }

    // ========================
    // Result Access Methods
    // ========================

    pub fn node_displacement(&self, node_name: &str, combo_name: &str) -> FEAResult<NodeDisplacement> {
        let node = self.node(node_name)?;
        self.check_combo(combo_name)?;
        node.displacement(combo_name).ok_or(FEAError::NotAnalyzed)
    }

    pub fn node_reactions(&self, node_name: &str, combo_name: &str) -> FEAResult<Reactions> {
        let node = self.node(node_name)?;
        self.check_combo(combo_name)?;
        node.reaction(combo_name).ok_or(FEAError::NotAnalyzed)
    }

    fn check_combo(&self, combo_name: &str) -> FEAResult<()> {
        if !self.analyzed {
            return Err(FEAError::NotAnalyzed);
        }
        if !self.load_combos.contains_key(combo_name) {
            return Err(FEAError::LoadCombinationNotFound(combo_name.to_string()));
        }
        Ok(())
    }

    pub fn is_analyzed(&self) -> bool {
        self.analyzed
    }

    /// Load combination names, sorted
    pub fn combo_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.load_combos.keys().cloned().collect();
        names.sort();
        names
    }

    /// Load case names used by any member load, sorted
    pub fn load_cases(&self) -> Vec<String> {
        let point = self.member_point_loads.values().flatten().map(|load| &load.case);
        let dist = self.member_dist_loads.values().flatten().map(|load| &load.case);
        let mut cases: Vec<String> = point.chain(dist).cloned().collect();
        cases.sort();
        cases.dedup();
        cases
    }
}

/// Components of a unit load along the member's local axes
fn local_components(direction: LoadDirection, r: &Mat3) -> [f64; 3] {
    let axis = direction.axis();
    if direction.is_local() {
        let mut components = [0.0; 3];
        components[axis] = 1.0;
        components
    } else {
        [r[(0, axis)], r[(1, axis)], r[(2, axis)]]
    }
}

impl StructuralSolver for FEModel {
    type Error = FEAError;

    fn register_material(&mut self, id: &str, e: f64, g: f64, nu: f64, rho: f64) -> FEAResult<()> {
        self.add_material(id, Material::new(e, g, nu, rho))
    }

    fn add_node(&mut self, id: &str, x: f64, y: f64, z: f64) -> FEAResult<()> {
        FEModel::add_node(self, id, Node::new(x, y, z))
    }

    fn apply_restraint(&mut self, node_id: &str, restraint: RestraintVector) -> FEAResult<()> {
        self.add_support(node_id, Support::from(restraint))
    }

    fn add_member(
        &mut self,
        id: &str,
        start_node: &str,
        end_node: &str,
        material_id: &str,
        section: Section,
    ) -> FEAResult<()> {
        FEModel::add_member(self, id, Member::new(start_node, end_node, material_id, section))
    }

    fn add_point_load(&mut self, member_id: &str, load: &PointLoadSpec) -> FEAResult<()> {
        self.add_member_point_load(member_id, PointLoad::try_from(load)?)
    }

    fn add_distributed_load(&mut self, member_id: &str, load: &DistributedLoadSpec) -> FEAResult<()> {
        self.add_member_dist_load(member_id, DistributedLoad::try_from(load)?)
    }

    fn analyze(&mut self) -> FEAResult<()> {
        self.analyze_linear()
    }

    fn reactions(&self, node_id: &str, combo: &str) -> FEAResult<Reactions> {
        self.node_reactions(node_id, combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn torsion_pin() -> Support {
        Support::with_restraints(true, true, true, true, false, false)
    }

    fn roller() -> Support {
        Support::with_restraints(false, true, true, false, false, false)
    }

    fn model_with_nodes(coords: &[(&str, f64)]) -> FEModel {
        let mut model = FEModel::new();
        model.add_material("Mat", Material::new(200e3, 77e3, 0.3, 7.85e-9)).unwrap();
        for (name, x) in coords {
            model.add_node(name, Node::new(*x, 0.0, 0.0)).unwrap();
        }
        model
    }

    fn section() -> Section {
        Section::new(9000.0, 22e6, 437e6, 3e5)
    }

    #[test]
    fn test_simple_cantilever() {
        let mut model = model_with_nodes(&[("N0", 0.0), ("N1", 10.0)]);
        model.add_member("M1", Member::new("N0", "N1", "Mat", section())).unwrap();
        model.add_support("N0", Support::fixed()).unwrap();
        model
            .add_member_point_load("M1", PointLoad::downward(1000.0, 10.0, "Case 1"))
            .unwrap();
        model.analyze_linear().unwrap();

        let disp = model.node_displacement("N1", DEFAULT_COMBO).unwrap();
        assert!(disp.dy < 0.0);

        let rxn = model.node_reactions("N0", DEFAULT_COMBO).unwrap();
        assert_relative_eq!(rxn.fy, 1000.0, epsilon = 1e-6);
        assert_relative_eq!(rxn.mz, 10000.0, epsilon = 1e-4);
    }

    #[test]
    fn test_two_span_continuous_uniform_load() {
        let mut model = model_with_nodes(&[("N0", 0.0), ("N1", 5.0), ("N2", 10.0)]);
        model.add_member("M1", Member::new("N0", "N2", "Mat", section())).unwrap();
        model.add_support("N0", torsion_pin()).unwrap();
        model.add_support("N1", roller()).unwrap();
        model.add_support("N2", roller()).unwrap();
        model
            .add_member_dist_load("M1", DistributedLoad::uniform(-4.0, 0.0, 10.0, LoadDirection::FY, "D"))
            .unwrap();
        model.analyze_linear().unwrap();

        // 3wL/8 at the ends, 10wL/8 at the middle, per 5.0 span
        let end = model.node_reactions("N0", DEFAULT_COMBO).unwrap();
        let mid = model.node_reactions("N1", DEFAULT_COMBO).unwrap();
        assert_relative_eq!(end.fy, 0.375 * 4.0 * 5.0, epsilon = 1e-6);
        assert_relative_eq!(mid.fy, 1.25 * 4.0 * 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_partial_distributed_load() {
        let mut model = model_with_nodes(&[("A", 0.0), ("B", 10.0)]);
        model.add_member("M1", Member::new("A", "B", "Mat", section())).unwrap();
        model.add_support("A", torsion_pin()).unwrap();
        model.add_support("B", roller()).unwrap();
        model
            .add_member_dist_load("M1", DistributedLoad::uniform(-2.0, 0.0, 5.0, LoadDirection::Fy, "D"))
            .unwrap();
        model.analyze_linear().unwrap();

        assert_relative_eq!(model.node_reactions("A", DEFAULT_COMBO).unwrap().fy, 7.5, epsilon = 1e-6);
        assert_relative_eq!(model.node_reactions("B", DEFAULT_COMBO).unwrap().fy, 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_combinations_factor_cases() {
        let mut model = model_with_nodes(&[("A", 0.0), ("B", 4.0)]);
        model.add_member("M1", Member::new("A", "B", "Mat", section())).unwrap();
        model.add_support("A", torsion_pin()).unwrap();
        model.add_support("B", roller()).unwrap();
        model.add_member_point_load("M1", PointLoad::downward(10.0, 2.0, "D")).unwrap();
        model.add_member_point_load("M1", PointLoad::downward(20.0, 2.0, "L")).unwrap();
        model
            .add_load_combo(LoadCombination::new("ULS").with_case("D", 1.35).with_case("L", 1.5))
            .unwrap();
        model.analyze_linear().unwrap();

        let rxn = model.node_reactions("A", "ULS").unwrap();
        assert_relative_eq!(rxn.fy, (13.5 + 30.0) / 2.0, epsilon = 1e-6);
        assert!(matches!(
            model.node_reactions("A", DEFAULT_COMBO),
            Err(FEAError::LoadCombinationNotFound(_))
        ));
    }

    #[test]
    fn test_unrestrained_torsion_is_unstable() {
        let mut model = model_with_nodes(&[("A", 0.0), ("B", 4.0)]);
        model.add_member("M1", Member::new("A", "B", "Mat", section())).unwrap();
        model.add_support("A", Support::pinned()).unwrap();
        model.add_support("B", Support::pinned()).unwrap();

        assert!(matches!(model.analyze_linear(), Err(FEAError::Unstable(_))));
    }

    #[test]
    fn test_load_outside_member() {
        let mut model = model_with_nodes(&[("A", 0.0), ("B", 4.0)]);
        model.add_member("M1", Member::new("A", "B", "Mat", section())).unwrap();

        let err = model
            .add_member_point_load("M1", PointLoad::downward(1.0, 4.5, "D"))
            .unwrap_err();
        assert_eq!(
            err,
            FEAError::LoadOutsideMember {
                member: "M1".to_string(),
                position: 4.5,
                length: 4.0
            }
        );
    }

    #[test]
    fn test_registration_errors() {
        let mut model = model_with_nodes(&[("A", 0.0), ("B", 4.0)]);
        assert!(matches!(
            model.add_member("M1", Member::new("A", "C", "Mat", section())),
            Err(FEAError::NodeNotFound(_))
        ));
        assert!(matches!(
            model.add_member("M1", Member::new("A", "B", "Steel", section())),
            Err(FEAError::MaterialNotFound(_))
        ));
        assert!(matches!(
            model.add_node("A", Node::new(1.0, 0.0, 0.0)),
            Err(FEAError::DuplicateName(_))
        ));
        assert!(matches!(
            model.add_member("M1", Member::new("A", "A", "Mat", section())),
            Err(FEAError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_results_require_analysis() {
        let model = model_with_nodes(&[("A", 0.0)]);
        assert!(!model.is_analyzed());
        assert_eq!(model.node_reactions("A", DEFAULT_COMBO), Err(FEAError::NotAnalyzed));
    }

    #[test]
    fn test_solver_trait_registration() {
        let mut model = FEModel::new();
        StructuralSolver::register_material(&mut model, "Mat", 1.0, 0.4, 0.25, 1.0).unwrap();
        StructuralSolver::add_node(&mut model, "N0", 0.0, 0.0, 0.0).unwrap();
        StructuralSolver::add_node(&mut model, "N1", 2.0, 0.0, 0.0).unwrap();
        model.apply_restraint("N0", RestraintVector::RIGID).unwrap();
        StructuralSolver::add_member(&mut model, "B", "N0", "N1", "Mat", Section::new(1.0, 1.0, 1.0, 1.0)).unwrap();

        let load = PointLoadSpec {
            direction: "MZ".to_string(),
            magnitude: 1.0,
            location: 1.0,
            case: "D".to_string(),
        };
        assert!(matches!(
            model.add_point_load("B", &load),
            Err(FEAError::UnsupportedLoadDirection(_))
        ));
        assert_eq!(model.supports["N0"], Support::fixed());
    }
}
