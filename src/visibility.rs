//! Observer-angle visibility cone.
//!
//! Every node is either VISIBLE or HIDDEN for the current observer angle.
//! The partition is recomputed from scratch on each update, so the same
//! angle always produces the same [`VisibleSet`]. The set is returned by
//! value and handed to the exporter directly.

use std::f64::consts::{PI, TAU};

use crate::engine::pipeline::Node;
use crate::overlay::{wrapped_distance, OverlayConstants};

/// Default cone half-width: 15°.
pub const DEFAULT_THRESHOLD: f64 = PI / 12.0;

// ─── Observer ────────────────────────────────────────────────────────────────

/// The only mutable piece of session state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverState {
    /// Radians, normalized into `[0, 2π)`.
    angle: f64,
    /// Cone half-width in radians.
    threshold: f64,
}

impl ObserverState {
    pub fn new(angle_degrees: f64, threshold: f64) -> Self {
        let mut s = Self {
            angle: 0.0,
            threshold,
        };
        s.set_degrees(angle_degrees);
        s
    }

    /// Slider input. Any real angle is accepted and wrapped.
    pub fn set_degrees(&mut self, degrees: f64) {
        self.angle = degrees.to_radians().rem_euclid(TAU);
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Strict cone test: `d < threshold`.
    #[inline]
    pub fn sees(&self, theta: f64) -> bool {
        is_visible(theta, self.angle, self.threshold)
    }
}

impl Default for ObserverState {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_THRESHOLD)
    }
}

/// `true` when `theta` lies strictly inside the cone around `observer`.
#[inline]
pub fn is_visible(theta: f64, observer: f64, threshold: f64) -> bool {
    wrapped_distance(theta, observer) < threshold
}

// ─── Visible set ─────────────────────────────────────────────────────────────

/// One exported row: `Layer,Seed,Value,Bridge_Radius_m`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportRow {
    pub layer: usize,
    pub seed: u64,
    pub value: u64,
    pub bridge_radius_m: f64,
}

/// Partition of the node cloud for one observer state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibleSet {
    /// Observer angle this set was computed for (radians).
    pub observer: f64,
    /// One flag per node, in node order.
    pub flags: Vec<bool>,
    /// Export rows of the visible nodes, in node order.
    pub rows: Vec<ExportRow>,
}

impl VisibleSet {
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    pub fn hidden_count(&self) -> usize {
        self.flags.iter().filter(|&&f| !f).count()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Stateless filter: nodes + observer → visible set.
pub struct VisibilityFilter {
    constants: OverlayConstants,
}

impl VisibilityFilter {
    pub fn new(constants: OverlayConstants) -> Self {
        Self { constants }
    }

    pub fn apply(&self, nodes: &[Node], observer: &ObserverState) -> VisibleSet {
        let mut flags = Vec::with_capacity(nodes.len());
        let mut rows = Vec::new();
        for node in nodes {
            let visible = observer.sees(node.theta);
            flags.push(visible);
            if visible {
                rows.push(ExportRow {
                    layer: node.depth,
                    seed: node.seed,
                    value: node.value,
                    bridge_radius_m: self.constants.bridge_radius(node.depth),
                });
            }
        }
        log::debug!(
            "observer {:.1}°: {} visible / {} hidden",
            observer.angle_degrees(),
            rows.len(),
            nodes.len() - rows.len()
        );
        VisibleSet {
            observer: observer.angle(),
            flags,
            rows,
        }
    }
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::new(OverlayConstants::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::pipeline::OctaveEngine;

    fn deg(d: f64) -> f64 {
        d.to_radians()
    }

    #[test]
    fn cone_at_zero() {
        let obs = ObserverState::new(0.0, DEFAULT_THRESHOLD);
        assert!(obs.sees(deg(10.0)));
        assert!(!obs.sees(deg(20.0)));
        assert!(obs.sees(deg(355.0)), "wrap-around");
    }

    #[test]
    fn boundary_is_strict() {
        assert!(!is_visible(DEFAULT_THRESHOLD, 0.0, DEFAULT_THRESHOLD));
        assert!(is_visible(DEFAULT_THRESHOLD * 0.999, 0.0, DEFAULT_THRESHOLD));
    }

    #[test]
    fn full_turn_symmetry() {
        // offsets of 3° keep every observer away from the exact cone edge
        for obs_deg in (0..36).map(|k| 3.0 + 10.0 * k as f64) {
            let a = ObserverState::new(obs_deg, DEFAULT_THRESHOLD);
            let b = ObserverState::new(obs_deg + 360.0, DEFAULT_THRESHOLD);
            for digit in 1..=9 {
                let theta = crate::octave::digit_angle(digit);
                assert_eq!(a.sees(theta), b.sees(theta), "obs {obs_deg}° digit {digit}");
            }
        }
    }

    #[test]
    fn slider_wraps_360_to_zero() {
        let obs = ObserverState::new(360.0, DEFAULT_THRESHOLD);
        assert!(obs.angle().abs() < 1e-12);
    }

    #[test]
    fn same_angle_twice_is_identical() {
        let cloud = OctaveEngine::new(20).build().unwrap();
        let filter = VisibilityFilter::default();
        let mut obs = ObserverState::default();
        obs.set_degrees(80.0);
        let first = filter.apply(&cloud.nodes, &obs);
        obs.set_degrees(80.0);
        let second = filter.apply(&cloud.nodes, &obs);
        assert_eq!(first, second);
    }

    #[test]
    fn rows_match_flags() {
        let cloud = OctaveEngine::new(20).build().unwrap();
        // digit 1 sits at 40°
        let obs = ObserverState::new(40.0, DEFAULT_THRESHOLD);
        let set = VisibilityFilter::default().apply(&cloud.nodes, &obs);
        assert_eq!(set.flags.len(), cloud.len());
        assert!(set.visible_count() > 0);
        assert_eq!(set.visible_count() + set.hidden_count(), cloud.len());
        for (node, &flag) in cloud.nodes.iter().zip(&set.flags) {
            assert_eq!(flag, crate::octave::reduce(node.value) == 1);
        }
        let c = OverlayConstants::default();
        for row in &set.rows {
            assert_eq!(crate::octave::reduce(row.value), 1);
            assert_eq!(row.bridge_radius_m, c.bridge_radius(row.layer));
        }
    }

    #[test]
    fn gap_between_rays_is_empty() {
        // rays are 40° apart, a 15° cone centred at 20° touches none
        let cloud = OctaveEngine::new(20).build().unwrap();
        let obs = ObserverState::new(20.0, DEFAULT_THRESHOLD);
        let set = VisibilityFilter::default().apply(&cloud.nodes, &obs);
        assert_eq!(set.visible_count(), 0);
    }

    #[test]
    fn hidden_count_reads_flags_only() {
        let set = VisibleSet {
            observer: 0.0,
            flags: Vec::new(),
            rows: vec![ExportRow {
                layer: 0,
                seed: 1,
                value: 1,
                bridge_radius_m: 6.5e-11,
            }],
        };
        assert_eq!(set.hidden_count(), 0);
        assert_eq!(set.visible_count(), 1);

        let set = VisibleSet {
            flags: vec![true, false, false],
            ..VisibleSet::default()
        };
        assert_eq!(set.hidden_count(), 2);
    }

    #[test]
    fn empty_cloud_gives_empty_set() {
        let set = VisibilityFilter::default().apply(&[], &ObserverState::default());
        assert!(set.flags.is_empty());
        assert!(set.rows.is_empty());
        assert!(!set.is_visible(0));
    }
}
