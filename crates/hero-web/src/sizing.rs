use super::constants::{DPR_MAX, DPR_MIN};

/// Device pixel ratio clamped to [`DPR_MIN`, `DPR_MAX`]; non-finite input
/// falls back to the minimum.
#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() {
        dpr.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}

/// Canvas backing size for a CSS box of `css_w` x `css_h` at `dpr`. Never
/// returns a zero dimension.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_dpr(dpr);
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}
