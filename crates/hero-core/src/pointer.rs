//! Pointer sampling shared between input handlers and the frame loop.

use glam::{Vec2, Vec3};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::constants::{BLOB_FOLLOW_FRACTION, REPULSION_POINTER_SCALE};

/// Latest pointer sample in normalized device coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// x right, y up, both in [-1, 1].
    pub ndc: Vec2,
    /// True while the pointer is inside the page/window.
    pub active: bool,
}

/// Map pixel coordinates (origin top-left, y down) to NDC (y up).
///
/// A zero-sized surface maps everything to the centre.
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let nx = (x / width) * 2.0 - 1.0;
    let ny = -((y / height) * 2.0 - 1.0);
    Vec2::new(nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0))
}

/// World position the blob chases for a pointer at `ndc`, given the visible
/// world size at z = 0.
#[inline]
pub fn blob_target(ndc: Vec2, viewport: Vec2) -> Vec3 {
    Vec3::new(
        ndc.x * (viewport.x * 0.5) * BLOB_FOLLOW_FRACTION,
        ndc.y * (viewport.y * 0.5) * BLOB_FOLLOW_FRACTION,
        0.0,
    )
}

/// World xy the particle field is repelled from.
#[inline]
pub fn repulsion_center(ndc: Vec2) -> Vec2 {
    Vec2::new(
        ndc.x * REPULSION_POINTER_SCALE[0],
        ndc.y * REPULSION_POINTER_SCALE[1],
    )
}

/// Latest-value-wins holder for the pointer.
///
/// One writer (the input handler) and one reader (the frame callback). The
/// coordinates are packed into a single 64-bit word so a reader never sees
/// x from one event and y from another.
#[derive(Debug, Default)]
pub struct PointerCell {
    packed: AtomicU64,
    active: AtomicBool,
}

impl PointerCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&self, ndc: Vec2) {
        let bits = ((ndc.x.to_bits() as u64) << 32) | ndc.y.to_bits() as u64;
        self.packed.store(bits, Ordering::Release);
        self.active.store(true, Ordering::Release);
    }

    pub fn set_pixels(&self, x: f32, y: f32, width: f32, height: f32) {
        self.set_position(pixel_to_ndc(x, y, width, height));
    }

    /// The pointer left the surface. The last position is kept.
    pub fn leave(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn load(&self) -> PointerState {
        let bits = self.packed.load(Ordering::Acquire);
        let x = f32::from_bits((bits >> 32) as u32);
        let y = f32::from_bits(bits as u32);
        PointerState {
            ndc: Vec2::new(x, y),
            active: self.active.load(Ordering::Acquire),
        }
    }
}
