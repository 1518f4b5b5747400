// Host-side tests for the blob: noise, colour mapping and easing.

use glam::{Vec2, Vec3};
use hero_core::blob::*;
use hero_core::constants::*;
use hero_core::noise::snoise;
use hero_core::{BlobPalette, BlobState, BlobUniforms, Camera, PointerState};

const DT: f32 = 1.0 / 60.0;

fn viewport() -> Vec2 {
    Camera::new(16.0 / 9.0).viewport_at_target()
}

fn active(ndc: Vec2) -> PointerState {
    PointerState { ndc, active: true }
}

#[test]
fn noise_is_bounded_and_deterministic() {
    let mut sum = 0.0f32;
    let mut sum_sq = 0.0f32;
    let mut n = 0.0f32;
    for x in -20..20 {
        for y in -20..20 {
            for z in -4..4 {
                let p = Vec3::new(x as f32 * 0.37, y as f32 * 0.41, z as f32 * 0.53);
                let v = snoise(p);
                assert!(v.is_finite());
                assert!(v.abs() <= 1.1, "snoise({p}) = {v}");
                assert_eq!(v.to_bits(), snoise(p).to_bits());
                sum += v;
                sum_sq += v * v;
                n += 1.0;
            }
        }
    }
    let mean = sum / n;
    let variance = sum_sq / n - mean * mean;
    assert!(variance > 0.01, "noise looks flat: variance {variance}");
}

#[test]
fn noise_is_continuous() {
    let step = Vec3::splat(1e-3);
    for k in 0..500 {
        let p = Vec3::new(k as f32 * 0.173, k as f32 * -0.091, k as f32 * 0.047);
        let delta = (snoise(p + step) - snoise(p)).abs();
        assert!(delta < 0.05, "jump of {delta} at {p}");
    }
}

#[test]
fn displacement_bounded_by_octaves_and_bulge() {
    let octave_sum: f32 = NOISE_OCTAVES.iter().map(|o| o[2]).sum();
    let limit = octave_sum * 1.1 + BULGE_PEAK;
    for k in 0..400 {
        let a = k as f32 * 0.31;
        let p = Vec3::new(a.cos(), a.sin(), (a * 0.7).sin()).normalize();
        let d = displacement(p, k as f32 * 0.05, Vec2::new(0.3, 0.2), 1.0);
        assert!(d.abs() <= limit);
    }
}

#[test]
fn displacement_moves_along_normal() {
    let p = Vec3::new(0.0, 0.6, 0.8);
    assert_eq!(displaced_position(p, p, 0.0), p);
    let out = displaced_position(p, p, 1.0);
    assert!((out.length() - (1.0 + DISPLACEMENT_SCALE)).abs() < 1e-6);
    let inward = displaced_position(p, p, -0.5);
    assert!((inward.length() - (1.0 - 0.5 * DISPLACEMENT_SCALE)).abs() < 1e-6);
    // Direction is preserved for a unit normal equal to the position
    assert!(out.normalize().distance(p) < 1e-6);
}

#[test]
fn bulge_peaks_at_pointer_and_fades() {
    let mouse = Vec2::new(0.25, -0.1);
    let under = (mouse * BULGE_POINTER_SCALE).extend(0.0);
    assert!((bulge(under, mouse, 1.0) - BULGE_PEAK).abs() < 1e-6);
    assert!((bulge(under, mouse, 0.5) - BULGE_PEAK * 0.5).abs() < 1e-6);
    assert_eq!(bulge(under, mouse, 0.0), 0.0);
    let far = under + Vec3::new(BULGE_RADIUS + 0.1, 0.0, 0.0);
    assert_eq!(bulge(far, mouse, 1.0), 0.0);
}

#[test]
fn colour_mapping_is_continuous_near_midpoint() {
    let palette = BlobPalette::default();
    let mut prev = gradient_color(-0.01, &palette);
    let mut d = -0.01f32;
    while d < 0.01 {
        d += 1e-5;
        let c = gradient_color(d, &palette);
        for ch in 0..3 {
            assert!((c[ch] - prev[ch]).abs() < 1e-3, "jump at d={d}");
        }
        prev = c;
    }
}

#[test]
fn colour_at_midpoint_lies_between_adjacent_stops() {
    let palette = BlobPalette::default();
    // t' = 0.5: fully past the first stop, partway into the second
    let c = gradient_color(0.0, &palette);
    for ch in 0..3 {
        let lo = palette.color2[ch].min(palette.color3[ch]);
        let hi = palette.color2[ch].max(palette.color3[ch]);
        assert!(c[ch] >= lo - 1e-6 && c[ch] <= hi + 1e-6);
    }
    assert_eq!(c, gradient_color(0.0, &palette));
}

#[test]
fn colour_extremes_hit_end_stops() {
    let palette = BlobPalette::default();
    assert_eq!(gradient_color(-1.0, &palette), palette.color1);
    let top = gradient_color(1.0, &palette);
    for ch in 0..3 {
        let expected =
            palette.color3[ch] + (palette.accent[ch] - palette.color3[ch]) * ACCENT_MAX_MIX;
        assert!((top[ch] - expected).abs() < 1e-6);
    }
}

#[test]
fn fresnel_and_alpha_range() {
    assert!(fresnel(Vec3::Z, Vec3::Z).abs() < 1e-6);
    assert!((fresnel(Vec3::Z, Vec3::X) - 1.0).abs() < 1e-6);
    assert!((fresnel(Vec3::Z, -Vec3::Z) - 1.0).abs() < 1e-6);

    let palette = BlobPalette::default();
    let facing = surface_color(0.0, 0.0, &palette);
    let rim = surface_color(0.0, 1.0, &palette);
    assert!((facing.alpha - BASE_ALPHA).abs() < 1e-6);
    assert!((rim.alpha - (BASE_ALPHA + FRESNEL_ALPHA)).abs() < 1e-6);
    assert!(rim.rgb.iter().zip(facing.rgb.iter()).all(|(r, f)| r >= f));
}

#[test]
fn hover_rises_strictly_without_overshoot() {
    let mut blob = BlobState::default();
    let mut prev = blob.hover;
    for frame in 0..120 {
        blob.update(DT, frame as f32 * DT, active(Vec2::ZERO), viewport());
        assert!(blob.hover > prev, "hover stalled at frame {frame}");
        assert!(blob.hover <= 1.0);
        prev = blob.hover;
    }
    assert!(blob.hover > 0.99);

    // Held much longer it saturates but never passes 1
    for frame in 120..2000 {
        blob.update(DT, frame as f32 * DT, active(Vec2::ZERO), viewport());
        assert!(blob.hover >= prev && blob.hover <= 1.0);
        prev = blob.hover;
    }
}

#[test]
fn hover_handles_large_frame_gaps() {
    let mut blob = BlobState::default();
    // A backgrounded tab can deliver one enormous delta
    blob.update(30.0, 30.0, active(Vec2::ZERO), viewport());
    assert!(blob.hover <= 1.0 && blob.hover > 0.99);
    blob.update(-1.0, 30.0, active(Vec2::ZERO), viewport());
    assert!(blob.hover <= 1.0);
}

#[test]
fn hover_fades_when_pointer_leaves() {
    let mut blob = BlobState::default();
    for frame in 0..300 {
        blob.update(DT, frame as f32 * DT, active(Vec2::new(0.5, 0.5)), viewport());
    }
    let mut prev = blob.hover;
    let left = PointerState {
        ndc: Vec2::new(0.5, 0.5),
        active: false,
    };
    for frame in 300..420 {
        blob.update(DT, frame as f32 * DT, left, viewport());
        assert!(blob.hover < prev && blob.hover >= 0.0);
        prev = blob.hover;
    }
}

#[test]
fn blob_follows_pointer_monotonically() {
    let mut blob = BlobState::default();
    let ndc = Vec2::new(-0.8, 0.6);
    let target = hero_core::pointer::blob_target(ndc, viewport());
    let mut prev_gap = blob.position.distance(target);
    for frame in 0..600 {
        blob.update(DT, frame as f32 * DT, active(ndc), viewport());
        let gap = blob.position.distance(target);
        assert!(gap <= prev_gap + 1e-6);
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3);
    assert!(target.x.abs() <= viewport().x * 0.5 * BLOB_FOLLOW_FRACTION + 1e-5);
}

#[test]
fn blob_returns_to_rest_after_leave() {
    let mut blob = BlobState::default();
    for frame in 0..120 {
        blob.update(DT, frame as f32 * DT, active(Vec2::new(-1.0, -1.0)), viewport());
    }
    assert!(blob.position.distance(blob_rest_vec3()) > 0.5);
    let left = PointerState {
        ndc: Vec2::new(-1.0, -1.0),
        active: false,
    };
    for frame in 120..720 {
        blob.update(DT, frame as f32 * DT, left, viewport());
    }
    assert!(blob.position.distance(blob_rest_vec3()) < 1e-3);
}

#[test]
fn rotation_spins_and_wobbles() {
    let mut blob = BlobState::default();
    for frame in 0..600 {
        blob.update(DT, frame as f32 * DT, PointerState::default(), viewport());
        assert!(blob.rotation_x.abs() <= BLOB_WOBBLE_AMP + 1e-6);
    }
    assert!((blob.rotation_y - 600.0 * DT * BLOB_SPIN_RATE).abs() < 1e-3);
}

#[test]
fn uniform_block_layout() {
    assert_eq!(std::mem::size_of::<BlobUniforms>(), 224);
    let blob = BlobState::default();
    let u = blob.uniforms(&Camera::new(1.0), &BlobPalette::default());
    assert_eq!(u.camera_pos, [0.0, 0.0, CAMERA_Z, 1.0]);
    // Model translation sits in the last column
    assert_eq!(u.model[3][0], BLOB_REST_POSITION[0]);
}
