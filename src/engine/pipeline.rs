use crate::collatz::{generate_capped, DEFAULT_MAX_STEPS};
use crate::error::Result;
use crate::octave::{map_to_octave, reduce};

/// One annotated point of the octave cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Octave angle in radians.
    pub theta: f64,
    /// Index within the node's own sequence (restarts at 0 per seed).
    pub depth: usize,
    pub seed: u64,
    pub value: u64,
}

/// Result of running the pipeline over a batch of seeds.
///
/// Built once, immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct NodeCloud {
    /// Nodes ordered by seed, then depth.
    pub nodes: Vec<Node>,
    /// `(seed, sequence)` in seed order.
    pub sequences: Vec<(u64, Vec<u64>)>,
}

impl NodeCloud {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Contiguous slice of nodes belonging to `seed`.
    pub fn nodes_for_seed(&self, seed: u64) -> &[Node] {
        let start = self.nodes.partition_point(|n| n.seed < seed);
        let end = self.nodes.partition_point(|n| n.seed <= seed);
        &self.nodes[start..end]
    }

    /// Largest planar radius and height, `None` if empty.
    pub fn extent(&self) -> Option<(f64, f64)> {
        if self.nodes.is_empty() {
            return None;
        }
        let max_radius = self
            .nodes
            .iter()
            .map(|n| n.x.hypot(n.y))
            .fold(0.0, f64::max);
        let max_z = self.nodes.iter().map(|n| n.z).fold(0.0, f64::max);
        Some((max_radius, max_z))
    }
}

/// The octave pipeline: Generate → Reduce → Map → Stack
pub struct OctaveEngine {
    seed_count: u64,
    stack_spacing: f64,
    max_steps: usize,
}

impl OctaveEngine {
    /// Engine over seeds `1..=seed_count`.
    pub fn new(seed_count: u64) -> Self {
        Self {
            seed_count,
            stack_spacing: 1.0,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Vertical distance between consecutive depths.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.stack_spacing = spacing;
        self
    }

    /// Iteration cap handed to the generator.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Run the full pipeline over every seed.
    pub fn build(&self) -> Result<NodeCloud> {
        let mut cloud = NodeCloud::default();
        for seed in 1..=self.seed_count {
            let sequence = generate_capped(seed, self.max_steps)?;
            self.stack_sequence(seed, &sequence, &mut cloud.nodes);
            cloud.sequences.push((seed, sequence));
        }
        log::debug!(
            "built {} nodes from {} seeds",
            cloud.nodes.len(),
            cloud.sequences.len()
        );
        Ok(cloud)
    }

    fn stack_sequence(&self, seed: u64, sequence: &[u64], out: &mut Vec<Node>) {
        out.reserve(sequence.len());
        for (depth, &value) in sequence.iter().enumerate() {
            let p = map_to_octave(reduce(value), depth);
            out.push(Node {
                x: p.x,
                y: p.y,
                z: depth as f64 * self.stack_spacing,
                theta: p.theta,
                depth,
                seed,
                value,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn default_batch_has_216_nodes() {
        let cloud = OctaveEngine::new(20).build().unwrap();
        assert_eq!(cloud.len(), 216);
        assert_eq!(cloud.sequences.len(), 20);
    }

    #[test]
    fn seed_one_node() {
        let cloud = OctaveEngine::new(1).build().unwrap();
        assert_eq!(cloud.len(), 1);
        let n = cloud.nodes[0];
        let a = TAU / 9.0;
        assert_eq!((n.seed, n.depth, n.value), (1, 0, 1));
        assert!((n.x - a.cos()).abs() < 1e-15);
        assert!((n.y - a.sin()).abs() < 1e-15);
        assert_eq!(n.z, 0.0);
        assert!((n.theta - a).abs() < 1e-15);
    }

    #[test]
    fn seed_two_has_two_layers() {
        let cloud = OctaveEngine::new(2).build().unwrap();
        let two = cloud.nodes_for_seed(2);
        assert_eq!(two.len(), 2);
        assert_eq!((two[0].depth, two[0].value), (0, 2));
        assert_eq!((two[1].depth, two[1].value), (1, 1));
    }

    #[test]
    fn depth_restarts_per_seed() {
        let cloud = OctaveEngine::new(20).build().unwrap();
        for (seed, seq) in &cloud.sequences {
            let nodes = cloud.nodes_for_seed(*seed);
            assert_eq!(nodes.len(), seq.len());
            for (i, n) in nodes.iter().enumerate() {
                assert_eq!(n.depth, i);
                assert_eq!(n.value, seq[i]);
            }
        }
    }

    #[test]
    fn spacing_scales_z() {
        let cloud = OctaveEngine::new(3).with_spacing(0.5).build().unwrap();
        for n in &cloud.nodes {
            assert_eq!(n.z, n.depth as f64 * 0.5);
        }
    }

    #[test]
    fn empty_batch() {
        let cloud = OctaveEngine::new(0).build().unwrap();
        assert!(cloud.is_empty());
        assert_eq!(cloud.extent(), None);
    }

    #[test]
    fn cap_propagates() {
        assert!(OctaveEngine::new(20).with_max_steps(3).build().is_err());
    }

    #[test]
    fn extent_matches_deepest_layer() {
        let cloud = OctaveEngine::new(20).build().unwrap();
        let (r, z) = cloud.extent().unwrap();
        // longest sequences (18, 19) have 21 values: depth 20
        assert!((r - 21.0).abs() < 1e-9);
        assert_eq!(z, 20.0);
    }
}
