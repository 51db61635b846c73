//! Scalar overlays — closed-form numbers attached to the node cloud.
//!
//! - **Ω estimate**: one scalar per run, reported but never attached to nodes
//! - **Curvature residual**: per-node wrapped distance from `φ_ref`
//! - **Bridge radius**: per-depth scalar reported for visible nodes
//!
//! The constants are opaque configuration values; see [`OverlayConstants`].

use serde::Deserialize;
use std::f64::consts::{PI, TAU};

use crate::engine::pipeline::Node;

// ─── Constants ───────────────────────────────────────────────────────────────

/// Tunable constants for the overlays.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConstants {
    pub hqs: f64,
    pub lz: f64,
    pub alpha: f64,
    /// Reference angle in radians.
    pub phi_ref: f64,
    /// Base length in meters.
    pub a0: f64,
    /// Root exponent of the bridge formula.
    pub x: f64,
}

impl Default for OverlayConstants {
    fn default() -> Self {
        Self {
            hqs: 0.235,
            lz: 1.23498228,
            alpha: 0.0072973525693,
            phi_ref: PI / 2.0 + PI / 100.0,
            a0: 5.29e-11,
            x: 16.45,
        }
    }
}

// ─── Angles ──────────────────────────────────────────────────────────────────

/// Shortest angular distance between two angles, in `[0, π]`.
#[inline]
pub fn wrapped_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(TAU);
    d.min(TAU - d)
}

// ─── Formulas ────────────────────────────────────────────────────────────────

impl OverlayConstants {
    /// `Ω = HQS · (φ_ref + LZ + √α)`.
    pub fn omega(&self) -> f64 {
        self.hqs * (self.phi_ref + self.lz + self.alpha.sqrt())
    }

    /// Wrapped distance of `theta` from `φ_ref`.
    #[inline]
    pub fn curvature_residual(&self, theta: f64) -> f64 {
        wrapped_distance(theta, self.phi_ref)
    }

    /// `R(depth) = a0 · LZ^(π·depth) · (HQS/α)^(1/x)`, in meters.
    pub fn bridge_radius(&self, depth: usize) -> f64 {
        self.a0 * self.lz.powf(PI * depth as f64) * (self.hqs / self.alpha).powf(1.0 / self.x)
    }
}

// ─── Residual summary ────────────────────────────────────────────────────────

/// Aggregate of per-node curvature residuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ResidualSummary {
    /// `None` when there are no nodes.
    pub fn from_nodes(nodes: &[Node], constants: &OverlayConstants) -> Option<Self> {
        Self::from_residuals(nodes.iter().map(|n| constants.curvature_residual(n.theta)))
    }

    pub fn from_residuals(residuals: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for r in residuals {
            count += 1;
            min = min.min(r);
            max = max.max(r);
            sum += r;
        }
        (count > 0).then(|| ResidualSummary {
            count,
            min,
            max,
            mean: sum / count as f64,
        })
    }
}
