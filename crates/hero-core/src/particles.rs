//! Bounded particle field: points oscillating around fixed anchors.
//!
//! Live positions are recomputed from the anchor every frame, so nothing
//! accumulates across frames and a particle can never wander further than
//! [`crate::constants::excursion_bound`] from home.

use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::*;
use crate::pointer::repulsion_center;

/// Immutable home position plus the per-particle oscillation seeds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub position: Vec3,
    pub phase0: f32,
    pub phase1: f32,
    pub speed_xy: f32,
    pub speed_z: f32,
}

impl Anchor {
    /// Sample an anchor: uniform direction on the sphere for the xy spread,
    /// radius in `[radius_min, radius_max)`, z drawn from a flat slab.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, radius_min: f32, radius_max: f32) -> Self {
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
        let r = radius_min + rng.gen::<f32>() * (radius_max - radius_min);
        let position = Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            (rng.gen::<f32>() - 0.5) * ANCHOR_DEPTH_SPAN,
        );
        Self {
            position,
            phase0: rng.gen::<f32>() * TAU,
            phase1: rng.gen::<f32>() * TAU,
            speed_xy: SPEED_XY_MIN + rng.gen::<f32>() * SPEED_XY_SPAN,
            speed_z: SPEED_Z_MIN + rng.gen::<f32>() * SPEED_Z_SPAN,
        }
    }

    /// Offset from the anchor at time `t`. Each axis is a sum of sinusoids
    /// with fixed amplitudes.
    #[inline]
    pub fn oscillation(&self, t: f32) -> Vec3 {
        let s = self.speed_xy;
        let (p0, p1) = (self.phase0, self.phase1);
        Vec3::new(
            (t * s + p0).sin() * OSC_PRIMARY_AMP
                + (t * s * OSC_X_SECONDARY_MUL + p1).sin() * OSC_SECONDARY_AMP,
            (t * s * OSC_Y_PRIMARY_MUL + p1).cos() * OSC_PRIMARY_AMP
                + (t * s * OSC_Y_SECONDARY_MUL + p0).cos() * OSC_SECONDARY_AMP,
            (t * self.speed_z + p0).sin() * OSC_DEPTH_AMP,
        )
    }
}

/// One-shot xy nudge pushing `pos` away from `center`.
///
/// Zero outside [`REPULSION_RADIUS`] and at (or within
/// [`REPULSION_MIN_DIST`] of) the centre, where the direction is undefined.
#[inline]
pub fn repulsion(pos: Vec2, center: Vec2) -> Vec2 {
    let d = pos - center;
    let dist = d.length();
    if dist > REPULSION_MIN_DIST && dist < REPULSION_RADIUS {
        let force = (REPULSION_RADIUS - dist) * REPULSION_STRENGTH;
        d / dist * force
    } else {
        Vec2::ZERO
    }
}

pub struct ParticleField {
    anchors: Vec<Anchor>,
    // xyz triples, uploaded as-is
    live: Vec<f32>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        rng: &mut R,
        radius_min: f32,
        radius_max: f32,
    ) -> Self {
        let anchors = (0..count)
            .map(|_| Anchor::sample(rng, radius_min, radius_max))
            .collect();
        Self::from_anchors(anchors)
    }

    /// Build from explicit anchors. Live positions start at the anchors.
    pub fn from_anchors(anchors: Vec<Anchor>) -> Self {
        let live = anchors
            .iter()
            .flat_map(|a| a.position.to_array())
            .collect();
        Self { anchors, live }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Flat xyz live positions, `3 * len()` floats.
    pub fn positions(&self) -> &[f32] {
        &self.live
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.live[i * 3], self.live[i * 3 + 1], self.live[i * 3 + 2])
    }

    /// Recompute every live position for time `t` with the pointer at
    /// `pointer_ndc`.
    pub fn update(&mut self, t: f32, pointer_ndc: Vec2) {
        let center = repulsion_center(pointer_ndc);
        for (anchor, out) in self.anchors.iter().zip(self.live.chunks_exact_mut(3)) {
            let mut p = anchor.position + anchor.oscillation(t);
            let push = repulsion(Vec2::new(p.x, p.y), center);
            p.x += push.x;
            p.y += push.y;
            out.copy_from_slice(&p.to_array());
        }
    }
}
