//! Octave mapping — digit reduction and placement on the octave circle.
//!
//! A value is reduced once to a digit in `1..=9` and the digit picks one
//! of nine directions on the circle (`digit / 9 · 2π`). The radius grows
//! with depth, so successive layers spiral outward on the same nine rays.

use std::f64::consts::TAU;

/// Planar octave point for one (digit, depth) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctavePoint {
    pub x: f64,
    pub y: f64,
    /// Angle in radians, in `(0, 2π]`.
    pub theta: f64,
}

impl OctavePoint {
    /// Distance from the z axis.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// `((value − 1) mod 9) + 1`. Not an iterated digital root.
#[inline]
pub fn reduce(value: u64) -> u8 {
    // value == 0 wraps to 9, matching (0 - 1) mod 9 + 1 under floor-mod
    (((value as i128 - 1).rem_euclid(9)) + 1) as u8
}

/// Angle of a digit on the octave circle.
#[inline]
pub fn digit_angle(digit: u8) -> f64 {
    (digit as f64 / 9.0) * TAU
}

/// Map a digit at a given depth onto the octave circle.
pub fn map_to_octave(digit: u8, depth: usize) -> OctavePoint {
    let theta = digit_angle(digit);
    let r = (depth + 1) as f64;
    OctavePoint {
        x: theta.cos() * r,
        y: theta.sin() * r,
        theta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_range_and_period() {
        for v in 1..=500u64 {
            let d = reduce(v);
            assert!((1..=9).contains(&d), "reduce({v}) = {d}");
            assert_eq!(d, reduce(v + 9));
        }
    }

    #[test]
    fn reduce_is_single_pass() {
        assert_eq!(reduce(1), 1);
        assert_eq!(reduce(9), 9);
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(52), 7);
        assert_eq!(reduce(0), 9);
    }

    #[test]
    fn radius_is_depth_plus_one() {
        for digit in 1..=9u8 {
            for depth in 0..12usize {
                let p = map_to_octave(digit, depth);
                assert!((p.radius() - (depth + 1) as f64).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn seed_one_point() {
        let p = map_to_octave(reduce(1), 0);
        let a = TAU / 9.0;
        assert!((p.theta - a).abs() < 1e-15);
        assert!((p.x - a.cos()).abs() < 1e-15);
        assert!((p.y - a.sin()).abs() < 1e-15);
    }

    #[test]
    fn digit_nine_is_full_turn() {
        assert!((digit_angle(9) - TAU).abs() < 1e-15);
    }
}
