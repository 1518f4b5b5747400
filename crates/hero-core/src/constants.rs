use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Blob geometry and placement
pub const BLOB_SCALE: f32 = 2.2;
pub const BLOB_SUBDIVISIONS: u32 = 5; // 20 * 4^5 faces
pub const MAX_BLOB_SUBDIVISIONS: u32 = 7; // 327,680 faces
pub const BLOB_REST_POSITION: [f32; 3] = [1.5, 0.0, 0.0];
pub const BLOB_FOLLOW_FRACTION: f32 = 0.7; // share of the half-viewport the blob may travel
pub const BLOB_FOLLOW_RATE: f32 = 1.8; // per second
pub const BLOB_SPIN_RATE: f32 = 0.08; // rad/s about Y
pub const BLOB_WOBBLE_FREQ: f32 = 0.15;
pub const BLOB_WOBBLE_AMP: f32 = 0.1; // rad about X

// Noise octaves: (spatial frequency, time shift per second, amplitude)
pub const NOISE_OCTAVES: [[f32; 3]; 3] = [
    [0.8, 0.15, 0.5],   // coarse
    [1.6, 0.25, 0.25],  // medium
    [3.2, 0.10, 0.125], // fine
];

// Pointer bulge on the blob surface
pub const BULGE_RADIUS: f32 = 2.0; // object-space falloff radius
pub const BULGE_POINTER_SCALE: f32 = 2.0; // NDC -> object-space xy
pub const BULGE_PEAK: f32 = 0.35;
pub const DISPLACEMENT_SCALE: f32 = 0.4; // displacement -> offset along normal

// Hover easing
pub const HOVER_RATE: f32 = 3.0; // per second

// Surface colour
pub const GRADIENT_LOW: [f32; 2] = [0.0, 0.5];
pub const GRADIENT_MID: [f32; 2] = [0.3, 0.8];
pub const GRADIENT_ACCENT: [f32; 2] = [0.7, 1.0];
pub const ACCENT_MAX_MIX: f32 = 0.3;
pub const FRESNEL_POWER: f32 = 3.0;
pub const FRESNEL_STRENGTH: f32 = 0.35;
pub const BASE_ALPHA: f32 = 0.85;
pub const FRESNEL_ALPHA: f32 = 0.15;

// Default palette (sRGB hex)
pub const BLOB_COLOR_1: &str = "#1a1a2e";
pub const BLOB_COLOR_2: &str = "#16213e";
pub const BLOB_COLOR_3: &str = "#0f3460";
pub const BLOB_COLOR_ACCENT: &str = "#e94560";
pub const POINT_COLOR: &str = "#666666";
pub const LINE_COLOR: &str = "#444444";
pub const RING_COLOR: &str = "#444444";

// Particle field
pub const PARTICLE_COUNT_DESKTOP: usize = 55;
pub const PARTICLE_COUNT_MOBILE: usize = 30;
pub const MOBILE_VIEWPORT_WIDTH: f32 = 6.0; // world units at z = 0
pub const ANCHOR_RADIUS_MIN: f32 = 3.0;
pub const ANCHOR_RADIUS_MAX: f32 = 10.0;
pub const ANCHOR_DEPTH_SPAN: f32 = 5.0; // z sampled in [-span/2, span/2]
pub const SPEED_XY_MIN: f32 = 0.08;
pub const SPEED_XY_SPAN: f32 = 0.15;
pub const SPEED_Z_MIN: f32 = 0.05;
pub const SPEED_Z_SPAN: f32 = 0.1;

// Oscillation amplitudes
pub const OSC_PRIMARY_AMP: f32 = 0.6;
pub const OSC_SECONDARY_AMP: f32 = 0.3;
pub const OSC_DEPTH_AMP: f32 = 0.25;

// Frequency multipliers applied to speed_xy
pub const OSC_X_SECONDARY_MUL: f32 = 0.4;
pub const OSC_Y_PRIMARY_MUL: f32 = 0.9;
pub const OSC_Y_SECONDARY_MUL: f32 = 0.35;

// Pointer repulsion
pub const REPULSION_POINTER_SCALE: [f32; 2] = [6.0, 4.0]; // NDC -> world xy
pub const REPULSION_RADIUS: f32 = 3.0;
pub const REPULSION_STRENGTH: f32 = 0.015;
pub const REPULSION_MIN_DIST: f32 = 0.01;

// Proximity graph
pub const CONNECTION_DISTANCE: f32 = 3.2;
pub const SEGMENTS_PER_PARTICLE: usize = 8; // line buffer capacity per particle
pub const FLOATS_PER_SEGMENT: usize = 6;

// Orbital rings
pub const RING_RADII: [f32; 3] = [3.0, 3.6, 4.2];
pub const RING_SEGMENTS: usize = 120;
pub const RING_SPIN_RATE: f32 = 0.03; // rad/s about Y
pub const RING_BASE_OPACITY: f32 = 0.15;
pub const RING_OPACITY_STEP: f32 = 0.03;

// Point and line materials
pub const POINT_SIZE: f32 = 0.07;
pub const POINT_OPACITY: f32 = 0.6;
pub const LINE_OPACITY: f32 = 0.2;

#[inline]
pub fn blob_rest_vec3() -> Vec3 {
    Vec3::from(BLOB_REST_POSITION)
}

/// Largest distance a live particle can sit from its anchor: the Euclidean
/// norm of the per-axis oscillation amplitudes plus the strongest possible
/// repulsion nudge.
#[inline]
pub fn excursion_bound() -> f32 {
    let xy = OSC_PRIMARY_AMP + OSC_SECONDARY_AMP;
    (xy * xy + xy * xy + OSC_DEPTH_AMP * OSC_DEPTH_AMP).sqrt() + max_repulsion()
}

#[inline]
pub fn max_repulsion() -> f32 {
    REPULSION_RADIUS * REPULSION_STRENGTH
}
