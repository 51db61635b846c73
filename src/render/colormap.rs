//! Diverging coolwarm ramp (blue → light gray → red) and the per-seed
//! categorical palette.

/// Coolwarm color for `t` in `[0, 1]`; out-of-range input is clamped.
pub fn coolwarm(t: f32) -> [u8; 3] {
    const C: [(u8, u8, u8); 5] = [
        (59, 76, 192),
        (141, 176, 254),
        (221, 221, 221),
        (244, 154, 123),
        (180, 4, 38),
    ];
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let segs = (C.len() - 1) as f32;
    let x = t * segs;
    let i = x.floor() as usize;
    if i >= C.len() - 1 {
        let (r, g, b) = C[C.len() - 1];
        return [r, g, b];
    }
    let f = x - i as f32;
    let (r0, g0, b0) = C[i];
    let (r1, g1, b1) = C[i + 1];
    let lerp = |a: u8, b: u8| (a as f32 + f * (b as f32 - a as f32)).round() as u8;
    [lerp(r0, r1), lerp(g0, g1), lerp(b0, b1)]
}

/// Normalize `value` into `[min, max]` and look it up.
/// A degenerate range maps to the low end.
pub fn coolwarm_map(value: f64, min_v: f64, max_v: f64) -> [u8; 3] {
    let t = if max_v > min_v {
        ((value - min_v) / (max_v - min_v)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    coolwarm(t as f32)
}

/// Ten-color categorical cycle for per-seed connector lines.
/// Seed 1 takes the first entry; seed 0 maps like seed 1.
pub fn seed_color(seed: u64) -> [u8; 3] {
    const CYCLE: [[u8; 3]; 10] = [
        [31, 119, 180],
        [255, 127, 14],
        [44, 160, 44],
        [214, 39, 40],
        [148, 103, 189],
        [140, 86, 75],
        [227, 119, 194],
        [127, 127, 127],
        [188, 189, 34],
        [23, 190, 207],
    ];
    CYCLE[(seed.saturating_sub(1) % CYCLE.len() as u64) as usize]
}
