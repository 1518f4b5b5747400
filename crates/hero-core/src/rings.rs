use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

use crate::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct OrbitalRing {
    pub radius: f32,
    pub tilt: Quat,
    pub opacity: f32,
}

/// Thin concentric rings around the blob's rest position, slowly spinning
/// about Y as a group.
pub struct OrbitalRings {
    pub rings: SmallVec<[OrbitalRing; 3]>,
    pub center: Vec3,
    pub spin: f32,
}

impl Default for OrbitalRings {
    fn default() -> Self {
        let rings = RING_RADII
            .iter()
            .enumerate()
            .map(|(i, &radius)| {
                let k = i as f32;
                OrbitalRing {
                    radius,
                    tilt: Quat::from_euler(EulerRot::XYZ, 0.3 + k * 0.4, k * 0.6, k * 0.2),
                    opacity: RING_BASE_OPACITY - k * RING_OPACITY_STEP,
                }
            })
            .collect();
        Self {
            rings,
            center: blob_rest_vec3(),
            spin: 0.0,
        }
    }
}

impl OrbitalRings {
    pub fn update(&mut self, elapsed_sec: f32) {
        self.spin = elapsed_sec * RING_SPIN_RATE;
    }

    pub fn model_matrix(&self, index: usize) -> Mat4 {
        let tilt = self.rings.get(index).map_or(Quat::IDENTITY, |r| r.tilt);
        Mat4::from_translation(self.center)
            * Mat4::from_rotation_y(self.spin)
            * Mat4::from_quat(tilt)
    }
}
