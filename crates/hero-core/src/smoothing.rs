// Scalar helpers shared by the blob, the easing state and the tests.

/// Hermite step; `edge0 < edge1` is expected.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn mix3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [mix(a[0], b[0], t), mix(a[1], b[1], t), mix(a[2], b[2], t)]
}

/// Fraction of the remaining gap to close this frame for exponential
/// smoothing at `rate` per second. Always in [0, 1), so repeated application
/// approaches the target without overshoot.
#[inline]
pub fn approach_alpha(rate: f32, dt_sec: f32) -> f32 {
    1.0 - (-rate * dt_sec.max(0.0)).exp()
}

/// One exponential-smoothing step of `current` toward `target`.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt_sec: f32) -> f32 {
    current + (target - current) * approach_alpha(rate, dt_sec)
}
