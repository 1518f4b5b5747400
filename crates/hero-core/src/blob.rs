//! The displacement mesh ("blob").
//!
//! The GPU does the per-vertex and per-pixel work in `blob.wgsl`; the
//! functions here are the host-side reference for the same formulas, and
//! [`BlobState`] owns everything that changes between frames: position
//! follow, hover easing, rotation and the uniform block.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use crate::camera::Camera;
use crate::constants::*;
use crate::noise::snoise;
use crate::palette::BlobPalette;
use crate::pointer::{blob_target, PointerState};
use crate::smoothing::{approach, mix3, smoothstep};

/// Sum of the three noise octaves at object-space `p`.
pub fn noise_displacement(p: Vec3, time: f32) -> f32 {
    NOISE_OCTAVES
        .iter()
        .map(|&[freq, speed, amp]| snoise(p * freq + Vec3::splat(time * speed)) * amp)
        .sum()
}

/// Pointer bulge: peaks at the pointer and fades to zero at
/// [`BULGE_RADIUS`], scaled by hover intensity.
pub fn bulge(p: Vec3, mouse_ndc: Vec2, hover: f32) -> f32 {
    let d = (Vec2::new(p.x, p.y) - mouse_ndc * BULGE_POINTER_SCALE).length();
    (1.0 - smoothstep(0.0, BULGE_RADIUS, d)) * hover * BULGE_PEAK
}

/// Total outward displacement for a vertex.
pub fn displacement(p: Vec3, time: f32, mouse_ndc: Vec2, hover: f32) -> f32 {
    noise_displacement(p, time) + bulge(p, mouse_ndc, hover)
}

/// Displaced vertex position along its normal.
pub fn displaced_position(p: Vec3, normal: Vec3, d: f32) -> Vec3 {
    p + normal * d * DISPLACEMENT_SCALE
}

/// Gradient colour for a displacement value, before edge lighting.
pub fn gradient_color(d: f32, palette: &BlobPalette) -> [f32; 3] {
    let t = d * 0.5 + 0.5;
    let mut c = mix3(
        palette.color1,
        palette.color2,
        smoothstep(GRADIENT_LOW[0], GRADIENT_LOW[1], t),
    );
    c = mix3(c, palette.color3, smoothstep(GRADIENT_MID[0], GRADIENT_MID[1], t));
    mix3(
        c,
        palette.accent,
        smoothstep(GRADIENT_ACCENT[0], GRADIENT_ACCENT[1], t) * ACCENT_MAX_MIX,
    )
}

/// Edge term: 0 facing the viewer, 1 at grazing angles.
pub fn fresnel(view_dir: Vec3, normal: Vec3) -> f32 {
    (1.0 - view_dir.dot(normal).max(0.0)).powf(FRESNEL_POWER)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceColor {
    pub rgb: [f32; 3],
    pub alpha: f32,
}

pub fn surface_color(d: f32, fresnel: f32, palette: &BlobPalette) -> SurfaceColor {
    let base = gradient_color(d, palette);
    let edge = mix3(palette.color3, palette.accent, 0.5);
    let k = fresnel * FRESNEL_STRENGTH;
    SurfaceColor {
        rgb: [
            base[0] + edge[0] * k,
            base[1] + edge[1] * k,
            base[2] + edge[2] * k,
        ],
        alpha: BASE_ALPHA + fresnel * FRESNEL_ALPHA,
    }
}

/// Uniform block for `blob.wgsl`. Field order and padding match the WGSL
/// struct.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlobUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub mouse: [f32; 2],
    pub time: f32,
    pub hover: f32,
    pub color1: [f32; 4],
    pub color2: [f32; 4],
    pub color3: [f32; 4],
    pub accent: [f32; 4],
}

pub struct BlobState {
    pub position: Vec3,
    pub target: Vec3,
    pub hover: f32,
    pub hover_target: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub mouse: Vec2,
    pub time: f32,
}

impl Default for BlobState {
    fn default() -> Self {
        Self {
            position: blob_rest_vec3(),
            target: blob_rest_vec3(),
            hover: 0.0,
            hover_target: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            mouse: Vec2::ZERO,
            time: 0.0,
        }
    }
}

impl BlobState {
    /// Advance one frame. `viewport` is the visible world size at z = 0.
    pub fn update(&mut self, dt_sec: f32, elapsed_sec: f32, pointer: PointerState, viewport: Vec2) {
        self.time = elapsed_sec;
        self.mouse = pointer.ndc;
        if pointer.active {
            self.target = blob_target(pointer.ndc, viewport);
            self.hover_target = 1.0;
        } else {
            self.target = blob_rest_vec3();
            self.hover_target = 0.0;
        }

        self.position = Vec3::new(
            approach(self.position.x, self.target.x, BLOB_FOLLOW_RATE, dt_sec),
            approach(self.position.y, self.target.y, BLOB_FOLLOW_RATE, dt_sec),
            approach(self.position.z, self.target.z, BLOB_FOLLOW_RATE, dt_sec),
        );
        self.hover = approach(self.hover, self.hover_target, HOVER_RATE, dt_sec);

        self.rotation_y += dt_sec.max(0.0) * BLOB_SPIN_RATE;
        self.rotation_x = (elapsed_sec * BLOB_WOBBLE_FREQ).sin() * BLOB_WOBBLE_AMP;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(BLOB_SCALE),
            Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0),
            self.position,
        )
    }

    pub fn uniforms(&self, camera: &Camera, palette: &BlobPalette) -> BlobUniforms {
        let rgba = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        BlobUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: self.model_matrix().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            mouse: self.mouse.to_array(),
            time: self.time,
            hover: self.hover,
            color1: rgba(palette.color1),
            color2: rgba(palette.color2),
            color3: rgba(palette.color3),
            accent: rgba(palette.accent),
        }
    }
}
